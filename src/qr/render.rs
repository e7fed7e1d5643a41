//! QR image rendering on top of the `qrcode` crate.
//!
//! The payload string is handed over verbatim; error-correction encoding and
//! pixel layout are the library's concern. Rendering fails when the payload
//! exceeds the encodable capacity, and callers surface that as a transient
//! notice.

use image::{ImageBuffer, Rgb};
use qrcode::render::unicode;
use qrcode::types::QrError;
use qrcode::QrCode;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Rendering failure modes.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("QR encoding failed: {0}")]
    Encoding(#[from] QrError),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Options handed to the QR renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Minimum output width/height in pixels.
    pub width: u32,
    /// Whether to surround the code with a quiet zone.
    pub quiet_zone: bool,
    /// Foreground (module) color.
    pub dark: Rgb<u8>,
    /// Background color.
    pub light: Rgb<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 400,
            quiet_zone: true,
            dark: Rgb([0x1a, 0x1a, 0x1a]),
            light: Rgb([0xff, 0xff, 0xff]),
        }
    }
}

/// Render the payload into an RGB image buffer.
pub fn render_image(
    payload: &str,
    opts: &RenderOptions,
) -> Result<ImageBuffer<Rgb<u8>, Vec<u8>>, RenderError> {
    let code = QrCode::new(payload.as_bytes())?;
    let image = code
        .render::<Rgb<u8>>()
        .min_dimensions(opts.width, opts.width)
        .quiet_zone(opts.quiet_zone)
        .dark_color(opts.dark)
        .light_color(opts.light)
        .build();
    Ok(image)
}

/// Render the payload and write it as a PNG at `path`.
pub fn save_png(payload: &str, opts: &RenderOptions, path: &Path) -> Result<(), RenderError> {
    let image = render_image(payload, opts)?;
    image.save(path)?;
    Ok(())
}

/// Render the payload as unicode half-blocks for the inline terminal preview.
///
/// Colors are inverted so the code reads as dark-on-light on the typical
/// dark terminal background.
pub fn render_unicode(payload: &str) -> Result<String, RenderError> {
    let code = QrCode::new(payload.as_bytes())?;
    let preview = code
        .render::<unicode::Dense1x2>()
        .quiet_zone(true)
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build();
    Ok(preview)
}

/// Build the download file name: `qr-code-<category name lowercased,
/// whitespace runs replaced with hyphens>-<unix millis>.<ext>`.
pub fn download_filename(category_name: &str, timestamp_millis: i64, ext: &str) -> String {
    let slug = category_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("qr-code-{slug}-{timestamp_millis}.{ext}")
}

/// Resolve the output path for a saved QR code.
pub fn download_path(output_dir: &Path, category_name: &str, timestamp_millis: i64) -> PathBuf {
    output_dir.join(download_filename(category_name, timestamp_millis, "png"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_image_default_options() {
        let image = render_image("https://a.com", &RenderOptions::default()).unwrap();
        assert!(image.width() >= 400);
        assert!(image.height() >= 400);
    }

    #[test]
    fn test_render_uses_colors() {
        let opts = RenderOptions::default();
        let image = render_image("https://a.com", &opts).unwrap();
        let pixels: Vec<_> = image.pixels().collect();
        assert!(pixels.contains(&&opts.dark));
        assert!(pixels.contains(&&opts.light));
    }

    #[test]
    fn test_oversized_payload_is_an_error() {
        // Well past the byte-mode capacity of the largest QR version.
        let payload = "x".repeat(8000);
        let result = render_image(&payload, &RenderOptions::default());
        assert!(matches!(result, Err(RenderError::Encoding(_))));
    }

    #[test]
    fn test_empty_payload_renders() {
        // The encoder guarantees non-empty payloads upstream, but the
        // renderer itself accepts an empty string.
        assert!(render_unicode("").is_ok());
    }

    #[test]
    fn test_unicode_preview_is_multiline() {
        let preview = render_unicode("WIFI:T:WPA2;S:Home;P:secret;H:false;;").unwrap();
        assert!(preview.lines().count() > 10);
    }

    #[test]
    fn test_download_filename_slugs_category_name() {
        let name = download_filename("Website & Links", 1700000000000, "png");
        assert_eq!(name, "qr-code-website-&-links-1700000000000.png");
    }

    #[test]
    fn test_download_filename_collapses_whitespace() {
        let name = download_filename("A  B", 1, "png");
        assert_eq!(name, "qr-code-a-b-1.png");
    }

    #[test]
    fn test_download_path_joins_output_dir() {
        let path = download_path(Path::new("/tmp"), "WiFi & Authentication", 42);
        assert_eq!(
            path,
            PathBuf::from("/tmp/qr-code-wifi-&-authentication-42.png")
        );
    }
}
