//! Single-file DDS conversion
//!
//! Decoding the DDS container and encoding the output are both delegated to
//! the `image` crate; this module only wires the two together and enforces
//! the output naming and alpha-flattening rules.

use crate::error::{ConvertError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Target image format for a conversion.
///
/// JPEG is the only lossy target, so it is the only variant that carries a
/// quality value. The lossless formats have no quality knob at the type
/// level, which makes "quality is ignored for PNG" impossible to get wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless, supports transparency
    Png,
    /// Lossy, no transparency; quality trades fidelity for size
    Jpeg {
        /// Encoder quality, 1-100
        quality: u8,
    },
    /// Lossless, supports transparency
    Tiff,
    /// Uncompressed
    Bmp,
}

impl OutputFormat {
    /// Create a JPEG target, validating the quality range
    pub fn jpeg(quality: u8) -> Result<Self> {
        if (1..=100).contains(&quality) {
            Ok(Self::Jpeg { quality })
        } else {
            Err(ConvertError::QualityOutOfRange(quality))
        }
    }

    /// Lowercase file extension used for output names
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg { .. } => "jpeg",
            Self::Tiff => "tiff",
            Self::Bmp => "bmp",
        }
    }

    /// Whether this format discards image data during encoding
    pub fn is_lossy(self) -> bool {
        matches!(self, Self::Jpeg { .. })
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg { .. } => ImageFormat::Jpeg,
            Self::Tiff => ImageFormat::Tiff,
            Self::Bmp => ImageFormat::Bmp,
        }
    }
}

/// Compute the output path for a conversion: `<output_dir>/<stem>.<ext>`
///
/// The extension comes from the target format, never from the input path,
/// so `TEXTURE.DDS` and `texture.dds` produce the same output name.
pub fn output_path(input: &Path, output_dir: &Path, format: OutputFormat) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ConvertError::NoFileStem(input.to_path_buf()))?;
    Ok(output_dir.join(format!("{stem}.{}", format.extension())))
}

/// Decode a DDS file into pixel data
pub fn decode_dds(input: &Path) -> Result<DynamicImage> {
    let open_err = |source| ConvertError::Open {
        path: input.to_path_buf(),
        source,
    };
    ImageReader::open(input)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?
        .decode()
        .map_err(|source| ConvertError::Decode {
            path: input.to_path_buf(),
            source,
        })
}

/// Convert one DDS file, writing exactly one output file on success.
///
/// Returns the path of the written file. On an encode failure the partially
/// written output is removed, so an existing file at the output path always
/// means the conversion succeeded.
pub fn convert_file(input: &Path, output_dir: &Path, format: OutputFormat) -> Result<PathBuf> {
    let output = output_path(input, output_dir, format)?;
    let decoded = decode_dds(input)?;

    if let Err(e) = encode(&decoded, &output, format) {
        let _ = fs::remove_file(&output);
        return Err(e);
    }

    log::debug!("converted {} -> {}", input.display(), output.display());
    Ok(output)
}

fn encode(image: &DynamicImage, output: &Path, format: OutputFormat) -> Result<()> {
    let encode_err = |source| ConvertError::Encode {
        path: output.to_path_buf(),
        source,
    };
    let io_err = |source| {
        encode_err(image::ImageError::IoError(source))
    };

    match format {
        OutputFormat::Jpeg { quality } => {
            // JPEG cannot represent transparency; flatten before encoding
            let flat = flatten_alpha(image);
            let file = File::create(output).map_err(io_err)?;
            let mut writer = BufWriter::new(file);
            let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
            flat.write_with_encoder(encoder).map_err(encode_err)?;
            writer.flush().map_err(io_err)?;
        }
        _ => {
            image
                .save_with_format(output, format.image_format())
                .map_err(encode_err)?;
        }
    }
    Ok(())
}

/// Strip the alpha channel if present
fn flatten_alpha(image: &DynamicImage) -> DynamicImage {
    if image.color().has_alpha() {
        DynamicImage::ImageRgb8(image.to_rgb8())
    } else {
        image.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn jpeg_quality_is_validated() {
        assert!(OutputFormat::jpeg(1).is_ok());
        assert!(OutputFormat::jpeg(100).is_ok());
        assert!(matches!(
            OutputFormat::jpeg(0),
            Err(ConvertError::QualityOutOfRange(0))
        ));
        assert!(matches!(
            OutputFormat::jpeg(101),
            Err(ConvertError::QualityOutOfRange(101))
        ));
    }

    #[test]
    fn extensions_are_lowercase() {
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::Jpeg { quality: 90 }.extension(), "jpeg");
        assert_eq!(OutputFormat::Tiff.extension(), "tiff");
        assert_eq!(OutputFormat::Bmp.extension(), "bmp");
    }

    #[test]
    fn output_name_ignores_input_extension_casing() {
        let upper = output_path(
            Path::new("/in/TEXTURE.DDS"),
            Path::new("/out"),
            OutputFormat::Png,
        )
        .unwrap();
        let lower = output_path(
            Path::new("/in/TEXTURE.dds"),
            Path::new("/out"),
            OutputFormat::Png,
        )
        .unwrap();
        assert_eq!(upper, PathBuf::from("/out/TEXTURE.png"));
        assert_eq!(upper, lower);
    }

    #[test]
    fn flatten_alpha_strips_transparency() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 128]));
        let flat = flatten_alpha(&DynamicImage::ImageRgba8(rgba));
        assert!(!flat.color().has_alpha());
        assert_eq!(flat.to_rgb8().get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn jpeg_encode_accepts_alpha_images() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("alpha.jpeg");
        let rgba = RgbaImage::from_pixel(8, 8, Rgba([200, 50, 50, 64]));
        let image = DynamicImage::ImageRgba8(rgba);

        encode(&image, &output, OutputFormat::Jpeg { quality: 80 }).unwrap();

        let reencoded = image::open(&output).unwrap();
        assert!(!reencoded.color().has_alpha());
        assert_eq!(reencoded.width(), 8);
        assert_eq!(reencoded.height(), 8);
    }
}
