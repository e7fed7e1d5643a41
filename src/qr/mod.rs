//! QR domain: category catalog, payload encoding, and image rendering.

pub mod catalog;
pub mod payload;
pub mod render;
