//! HTML rasterization.
//!
//! Handles the low-level details of staging proposal HTML in a temporary
//! directory, invoking the headless rasterizer, and reading the rendered
//! image back.

use async_trait::async_trait;
use tempfile::tempdir;
use tokio::fs;
use tokio::process::Command;

use super::ExportError;

/// Layout knobs for the staged capture document.
///
/// Defaults mirror the on-screen preview: an 800px column with 40px
/// padding on a white background, captured at 2x for print sharpness.
#[derive(Debug, Clone)]
pub struct RasterOptions {
    pub css_width_px: u32,
    pub padding_px: u32,
    pub scale: u32,
    pub jpeg_quality: u8,
    pub background: String,
    pub font_family: String,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            css_width_px: 800,
            padding_px: 40,
            scale: 2,
            jpeg_quality: 95,
            background: "#ffffff".to_string(),
            font_family: "Arial, Helvetica, sans-serif".to_string(),
        }
    }
}

impl RasterOptions {
    /// Device pixel width of the rendered image.
    pub fn device_width_px(&self) -> u32 {
        self.css_width_px * self.scale
    }
}

/// A rendered proposal as a single tall JPEG.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub jpeg: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

/// Renders proposal HTML to a [`RasterImage`].
#[async_trait]
pub trait HtmlRasterizer: Send + Sync {
    async fn rasterize(
        &self,
        html: &str,
        options: &RasterOptions,
    ) -> Result<RasterImage, ExportError>;
}

/// Rasterizer backed by the `wkhtmltoimage` CLI.
pub struct WkhtmlRasterizer {
    binary: String,
}

impl WkhtmlRasterizer {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for WkhtmlRasterizer {
    fn default() -> Self {
        Self::new("wkhtmltoimage")
    }
}

#[async_trait]
impl HtmlRasterizer for WkhtmlRasterizer {
    async fn rasterize(
        &self,
        html: &str,
        options: &RasterOptions,
    ) -> Result<RasterImage, ExportError> {
        // Create temp directory for the capture context
        let staging = tempdir().map_err(ExportError::StagingDir)?;
        let html_path = staging.path().join("proposal.html");

        fs::write(&html_path, staging_document(html, options))
            .await
            .map_err(ExportError::WriteHtml)?;

        let image_path = staging.path().join("proposal.jpg");
        let status = Command::new(&self.binary)
            .arg("--format")
            .arg("jpg")
            .arg("--quality")
            .arg(options.jpeg_quality.to_string())
            .arg("--zoom")
            .arg(options.scale.to_string())
            .arg("--width")
            .arg(options.device_width_px().to_string())
            .arg("--quiet")
            .arg(&html_path)
            .arg(&image_path)
            .current_dir(staging.path())
            .status()
            .await
            .map_err(ExportError::RasterizerIo)?;

        if !status.success() {
            let code = status.code().unwrap_or(-1);
            return Err(ExportError::RasterizerExit(code));
        }

        let jpeg = fs::read(&image_path)
            .await
            .map_err(ExportError::ReadImage)?;
        let (width_px, height_px) = jpeg_dimensions(&jpeg)?;

        Ok(RasterImage {
            jpeg,
            width_px,
            height_px,
        })
    }
}

/// Rasterizer that always returns the same pre-rendered image.
///
/// Lets request handlers be exercised without a headless browser on PATH.
pub struct FixedRasterizer {
    image: RasterImage,
}

impl FixedRasterizer {
    pub fn new(image: RasterImage) -> Self {
        Self { image }
    }
}

#[async_trait]
impl HtmlRasterizer for FixedRasterizer {
    async fn rasterize(
        &self,
        _html: &str,
        _options: &RasterOptions,
    ) -> Result<RasterImage, ExportError> {
        Ok(self.image.clone())
    }
}

/// Wrap proposal HTML in a standalone capture document.
///
/// The rasterizer sees the same column the browser preview shows, so the
/// exported pages match what the user edited.
pub fn staging_document(html: &str, options: &RasterOptions) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  * {{ box-sizing: border-box; }}
  body {{ margin: 0; background: {background}; }}
  #stage {{
    width: {width}px;
    padding: {padding}px;
    background: {background};
    font-family: {font};
    font-size: 14px;
    line-height: 1.6;
    color: #111827;
  }}
  #stage table {{ width: 100%; }}
</style>
</head>
<body>
<div id="stage">{html}</div>
</body>
</html>
"#,
        background = options.background,
        width = options.css_width_px,
        padding = options.padding_px,
        font = options.font_family,
        html = html,
    )
}

/// Read pixel dimensions from a JPEG stream's frame header.
pub fn jpeg_dimensions(jpeg: &[u8]) -> Result<(u32, u32), ExportError> {
    if jpeg.len() < 4 || jpeg[0] != 0xFF || jpeg[1] != 0xD8 {
        return Err(ExportError::Decode("not a JPEG stream".to_string()));
    }

    let mut i = 2usize;
    while i + 3 < jpeg.len() {
        if jpeg[i] != 0xFF {
            return Err(ExportError::Decode(format!("bad marker at byte {}", i)));
        }
        let marker = jpeg[i + 1];

        // Fill bytes and standalone markers carry no length field
        if marker == 0xFF {
            i += 1;
            continue;
        }
        if matches!(marker, 0x01 | 0xD0..=0xD7) {
            i += 2;
            continue;
        }

        let is_sof = matches!(
            marker,
            0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF
        );
        if is_sof {
            if i + 8 >= jpeg.len() {
                break;
            }
            // SOFn payload: precision(1), height(2), width(2), ...
            let height = u16::from_be_bytes([jpeg[i + 5], jpeg[i + 6]]) as u32;
            let width = u16::from_be_bytes([jpeg[i + 7], jpeg[i + 8]]) as u32;
            if width == 0 || height == 0 {
                return Err(ExportError::Decode("zero-sized frame".to_string()));
            }
            return Ok((width, height));
        }

        let length = u16::from_be_bytes([jpeg[i + 2], jpeg[i + 3]]) as usize;
        if length < 2 {
            return Err(ExportError::Decode("corrupt segment length".to_string()));
        }
        i += 2 + length;
    }

    Err(ExportError::Decode("missing SOF frame header".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_jpeg(width: u16, height: u16) -> Vec<u8> {
        let mut bytes = vec![0xFF, 0xD8];
        // APP0 with a 4-byte payload
        bytes.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x06, b'J', b'F', b'I', b'F']);
        // SOF0 baseline frame, 3 components
        bytes.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08]);
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&[0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
        bytes.extend_from_slice(&[0xFF, 0xD9]);
        bytes
    }

    #[test]
    fn test_jpeg_dimensions_reads_sof_frame() {
        let jpeg = synthetic_jpeg(1600, 5200);
        let (w, h) = jpeg_dimensions(&jpeg).unwrap();
        assert_eq!(w, 1600);
        assert_eq!(h, 5200);
    }

    #[test]
    fn test_jpeg_dimensions_rejects_other_formats() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(jpeg_dimensions(&png).is_err());
    }

    #[test]
    fn test_jpeg_dimensions_rejects_truncated_stream() {
        let jpeg = synthetic_jpeg(800, 800);
        assert!(jpeg_dimensions(&jpeg[..6]).is_err());
    }

    #[test]
    fn test_staging_document_embeds_content_and_layout() {
        let options = RasterOptions::default();
        let doc = staging_document("<h1>Atlas Portal</h1>", &options);

        assert!(doc.contains("<h1>Atlas Portal</h1>"));
        assert!(doc.contains("width: 800px"));
        assert!(doc.contains("padding: 40px"));
        assert!(doc.contains("background: #ffffff"));
    }

    #[test]
    fn test_default_options_capture_at_2x() {
        let options = RasterOptions::default();
        assert_eq!(options.device_width_px(), 1600);
        assert_eq!(options.jpeg_quality, 95);
    }

    #[actix_web::test]
    async fn test_fixed_rasterizer_returns_seeded_image() {
        let image = RasterImage {
            jpeg: synthetic_jpeg(100, 200),
            width_px: 100,
            height_px: 200,
        };
        let rasterizer = FixedRasterizer::new(image);

        let rendered = rasterizer
            .rasterize("<p>x</p>", &RasterOptions::default())
            .await
            .unwrap();
        assert_eq!(rendered.width_px, 100);
        assert_eq!(rendered.height_px, 200);
    }
}
