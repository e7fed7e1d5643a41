//! Form state for the category form and the auth dialog

mod field;
mod form_state;

pub use field::*;
pub use form_state::*;
