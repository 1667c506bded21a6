use log::debug;

use crate::{config::Config, error::Error, PackedBuffer};

/// Relative luminance of an sRGB pixel, ITU-R BT.709 weights.
fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32
}

// Threshold comparison is strict: a pixel sitting exactly on the cutoff
// stays off. Alpha is ignored, the rasterizer has already composited.
fn classify(r: u8, g: u8, b: u8, config: &Config) -> u8 {
    let gray = luminance(r, g, b);
    let mut value: u8 = if gray > config.threshold as f32 { 1 } else { 0 };

    if config.invert {
        value = 1 - value;
    }

    value
}

/// Pack an RGBA pixel buffer into a 1-bit bitmap.
///
/// Pixels are consumed in row-major order and packed MSB first, so the first
/// pixel of each block lands in the highest of the block's used bits. With a
/// block size below 8 the high bits of each byte are never addressed and
/// stay zero, as do trailing bits of a final partial block.
///
/// The buffer must hold exactly `width * height * 4` bytes of RGBA data;
/// zero width or height yields an empty buffer.
pub fn encode(pixels: &[u8], config: &Config) -> Result<PackedBuffer, Error> {
    check_buffer(pixels, config)?;

    let block = config.block_size.bits();
    let mut buffer: Vec<u8> = vec![0x00; config.packed_len()];

    for (i, rgba) in pixels.chunks_exact(4).enumerate() {
        let value = classify(rgba[0], rgba[1], rgba[2], config);
        buffer[i / block] |= value << (block - 1 - i % block);
    }

    debug!(
        "packed {}x{} pixels into {} bytes",
        config.width,
        config.height,
        buffer.len()
    );

    Ok(buffer)
}

/// Same as [`encode`], additionally re-rendering the thresholded image as a
/// pure black and white RGBA buffer in the same pass.
///
/// Each pixel of the preview is `(v*255, v*255, v*255, 255)` for its decided
/// value `v`. The packed output never depends on the preview.
pub fn encode_with_preview(
    pixels: &[u8],
    config: &Config,
) -> Result<(PackedBuffer, Vec<u8>), Error> {
    check_buffer(pixels, config)?;

    let block = config.block_size.bits();
    let mut buffer: Vec<u8> = vec![0x00; config.packed_len()];
    let mut preview: Vec<u8> = Vec::with_capacity(pixels.len());

    for (i, rgba) in pixels.chunks_exact(4).enumerate() {
        let value = classify(rgba[0], rgba[1], rgba[2], config);
        buffer[i / block] |= value << (block - 1 - i % block);

        let shade = value * 0xFF;
        preview.extend_from_slice(&[shade, shade, shade, 0xFF]);
    }

    Ok((buffer, preview))
}

fn check_buffer(pixels: &[u8], config: &Config) -> Result<(), Error> {
    let expected = config.pixel_bytes();

    if pixels.len() != expected {
        return Err(Error::BufferSizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}
