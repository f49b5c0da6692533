//! End-to-end framing pipeline.
//!
//! ```text
//! upload bytes -> decode -> preview ──(crop box)──> remap -> crop -> inset -> PNG
//! ```
//!
//! A [`FramingSession`] holds the decoded upload and its preview for as long
//! as the user is adjusting the crop box. Each render starts from those two
//! immutable bitmaps, so re-running with the same selection gives the same
//! bytes.

use std::path::Path;

use crate::composite::{compose_inset, FrameAsset};
use crate::config::FramerConfig;
use crate::decode::{decode_image, Bitmap};
use crate::encode::encode_bitmap;
use crate::error::FramerError;
use crate::preview::{create_preview, Preview, ScaleFactor};
use crate::transform::{crop, remap_to_source, CropRect, PixelRect};

/// One uploaded photo and the preview the crop box is drawn on.
#[derive(Debug, Clone)]
pub struct FramingSession {
    source: Bitmap,
    preview: Preview,
}

impl FramingSession {
    /// Decode an upload and build its preview.
    ///
    /// # Errors
    ///
    /// `FramerError::InvalidConfig` if the config does not validate,
    /// `FramerError::Decode` if the bytes are not a JPEG or PNG image.
    pub fn from_upload(bytes: &[u8], config: &FramerConfig) -> Result<Self, FramerError> {
        config.validate()?;
        let source = decode_image(bytes)?;
        Self::from_source(source, config)
    }

    /// Start a session from an already decoded photo.
    pub fn from_source(source: Bitmap, config: &FramerConfig) -> Result<Self, FramerError> {
        let preview = create_preview(&source, &config.preview, config.filter)?;
        Ok(Self { source, preview })
    }

    /// The full-resolution photo.
    pub fn source(&self) -> &Bitmap {
        &self.source
    }

    /// The downscaled copy shown under the crop box.
    pub fn preview(&self) -> &Bitmap {
        self.preview.image()
    }

    pub fn scale(&self) -> ScaleFactor {
        self.preview.scale()
    }

    /// Map a crop-box selection onto the full-resolution photo.
    pub fn source_rect(&self, rect: CropRect) -> Result<PixelRect, FramerError> {
        remap_to_source(
            rect,
            self.preview.scale(),
            self.source.width(),
            self.source.height(),
        )
    }

    /// The selected region of the full-resolution photo.
    pub fn crop(&self, rect: CropRect) -> Result<Bitmap, FramerError> {
        let region = self.source_rect(rect)?;
        log::debug!("selection {:?} -> source {:?}", rect, region);
        crop(&self.source, region)
    }

    /// Crop the selection and inset it into `frame`.
    ///
    /// Only `inset` and `filter` are read from `config`; the preview policy
    /// was fixed when the session was created.
    pub fn render(
        &self,
        rect: CropRect,
        frame: &FrameAsset,
        config: &FramerConfig,
    ) -> Result<Bitmap, FramerError> {
        config.validate()?;
        let cropped = self.crop(rect)?;
        compose_inset(&cropped, frame, config.inset, config.filter)
    }

    /// Render and encode as PNG.
    pub fn export(
        &self,
        rect: CropRect,
        frame: &FrameAsset,
        config: &FramerConfig,
    ) -> Result<Vec<u8>, FramerError> {
        let framed = self.render(rect, frame, config)?;
        let png = encode_bitmap(&framed)?;
        log::info!(
            "exported {}x{} framed photo ({} bytes)",
            framed.width(),
            framed.height(),
            png.len()
        );
        Ok(png)
    }
}

/// One-shot pipeline: upload bytes and a preview-space selection in, PNG out.
///
/// `rect` is interpreted against the preview `config.preview` produces for
/// this upload.
pub fn frame_photo(
    photo: &[u8],
    frame: &FrameAsset,
    rect: CropRect,
    config: &FramerConfig,
) -> Result<Vec<u8>, FramerError> {
    FramingSession::from_upload(photo, config)?.export(rect, frame, config)
}

/// Like [`frame_photo`], loading the frame from `frame_path` first.
///
/// # Errors
///
/// `FramerError::FrameAssetUnavailable` if the frame file cannot be read or
/// decoded; in that case nothing else runs.
pub fn frame_photo_with_frame_file(
    photo: &[u8],
    frame_path: impl AsRef<Path>,
    rect: CropRect,
    config: &FramerConfig,
) -> Result<Vec<u8>, FramerError> {
    let frame = FrameAsset::load(frame_path)?;
    frame_photo(photo, &frame, rect, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::PreviewPolicy;
    use std::io::Cursor;

    const BORDER: [u8; 4] = [250, 240, 10, 255];

    fn gradient_png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8, 255])
        });
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn ring_frame(size: u32) -> FrameAsset {
        let img = image::RgbaImage::from_fn(size, size, |x, y| {
            if x < 8 || y < 8 || x >= size - 8 || y >= size - 8 {
                image::Rgba(BORDER)
            } else {
                image::Rgba([0, 0, 0, 0])
            }
        });
        FrameAsset::from_bitmap(Bitmap::from_rgba_image(img)).unwrap()
    }

    fn half_scale_config() -> FramerConfig {
        FramerConfig {
            preview: PreviewPolicy::BoundingBox { size: 500 },
            ..FramerConfig::default()
        }
    }

    #[test]
    fn test_session_preview_and_scale() {
        let session = FramingSession::from_upload(&gradient_png(1000, 800), &half_scale_config())
            .unwrap();

        assert_eq!(session.source().dimensions(), (1000, 800));
        assert_eq!(session.preview().dimensions(), (500, 400));
        assert_eq!(session.scale(), ScaleFactor { sx: 2.0, sy: 2.0 });
    }

    #[test]
    fn test_session_crop_maps_to_full_resolution() {
        let session = FramingSession::from_upload(&gradient_png(1000, 800), &half_scale_config())
            .unwrap();

        let cropped = session.crop(CropRect::new(50, 60, 200, 200)).unwrap();

        assert_eq!(cropped.dimensions(), (400, 400));
        assert_eq!(cropped.pixel(0, 0), session.source().pixel(100, 120));
        assert_eq!(cropped.pixel(399, 399), session.source().pixel(499, 519));
    }

    #[test]
    fn test_session_render_has_frame_size() {
        let config = half_scale_config();
        let session = FramingSession::from_upload(&gradient_png(1000, 800), &config).unwrap();
        let frame = ring_frame(300);

        let framed = session
            .render(CropRect::new(0, 0, 400, 400), &frame, &config)
            .unwrap();

        assert_eq!(framed.dimensions(), (300, 300));
        assert_eq!(framed.pixel(0, 0), Some(BORDER));
        // 300 * 0.7 = 210, offset 45: the photo's centre is opaque
        assert_eq!(framed.pixel(150, 150).map(|px| px[3]), Some(255));
        assert_eq!(framed.pixel(44, 150), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_export_is_idempotent() {
        let photo = gradient_png(640, 480);
        let frame = ring_frame(200);
        let config = FramerConfig::default();
        let rect = CropRect::new(100, 40, 300, 300);

        let first = frame_photo(&photo, &frame, rect, &config).unwrap();
        let second = frame_photo(&photo, &frame, rect, &config).unwrap();
        assert_eq!(first, second);

        let session = FramingSession::from_upload(&photo, &config).unwrap();
        assert_eq!(session.export(rect, &frame, &config).unwrap(), first);
        assert_eq!(session.export(rect, &frame, &config).unwrap(), first);
    }

    #[test]
    fn test_export_is_png_of_frame_size() {
        let photo = gradient_png(300, 300);
        let png = frame_photo(
            &photo,
            &ring_frame(128),
            CropRect::new(0, 0, 300, 300),
            &FramerConfig::default(),
        )
        .unwrap();

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (128, 128));
    }

    #[test]
    fn test_degenerate_selection_aborts() {
        let photo = gradient_png(300, 300);
        let result = frame_photo(
            &photo,
            &ring_frame(64),
            CropRect::new(10, 10, 0, 0),
            &FramerConfig::default(),
        );
        assert!(matches!(result, Err(FramerError::EmptyCrop { .. })));
    }

    #[test]
    fn test_invalid_upload_aborts() {
        let result = frame_photo(
            b"not an image",
            &ring_frame(64),
            CropRect::new(0, 0, 10, 10),
            &FramerConfig::default(),
        );
        assert!(matches!(result, Err(FramerError::Decode(_))));
    }

    #[test]
    fn test_invalid_config_aborts_before_decoding() {
        let config = FramerConfig {
            inset: 0.0,
            ..FramerConfig::default()
        };
        let result = FramingSession::from_upload(b"not an image", &config);
        assert!(matches!(result, Err(FramerError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_frame_file_aborts() {
        let missing = std::env::temp_dir()
            .join(format!("framer-no-frame-{}", std::process::id()))
            .join(crate::composite::FRAME_FILE_NAME);

        let result = frame_photo_with_frame_file(
            &gradient_png(100, 100),
            &missing,
            CropRect::new(0, 0, 50, 50),
            &FramerConfig::default(),
        );
        assert!(matches!(result, Err(FramerError::FrameAssetUnavailable(_))));
    }

    #[test]
    fn test_overshooting_selection_is_clamped() {
        let session = FramingSession::from_upload(&gradient_png(1000, 800), &half_scale_config())
            .unwrap();

        let region = session.source_rect(CropRect::new(-3, 350, 60, 60)).unwrap();
        assert_eq!(region, PixelRect::new(0, 700, 114, 100));
    }
}
