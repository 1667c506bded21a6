use log::debug;

use crate::{config::Config, error::Error};

/// Composite a decoded RGBA image over the configured background color.
///
/// Produces the pixel buffer the encoder expects: a canvas of the configured
/// width and height filled with the background color, with the source image
/// drawn at the origin using source-over blending. A source larger than the
/// canvas is cropped, a smaller one leaves the remaining canvas as
/// background. The source is never scaled.
pub fn rasterize(
    src: &[u8],
    src_width: u32,
    src_height: u32,
    config: &Config,
) -> Result<Vec<u8>, Error> {
    let expected = src_width as usize * src_height as usize * 4;
    if src.len() != expected {
        return Err(Error::BufferSizeMismatch {
            expected,
            actual: src.len(),
        });
    }

    let width = config.width;
    let height = config.height;
    let [bg_r, bg_g, bg_b] = config.background.rgb();

    let mut canvas: Vec<u8> = Vec::with_capacity(width as usize * height as usize * 4);
    for _ in 0..width as usize * height as usize {
        canvas.extend_from_slice(&[bg_r, bg_g, bg_b, 0xFF]);
    }

    for y in 0..height.min(src_height) {
        for x in 0..width.min(src_width) {
            let src_index = ((y * src_width + x) * 4) as usize;
            let dst_index = ((y * width + x) * 4) as usize;

            // source-over: the canvas is opaque, so alpha stays 255
            let alpha = src[src_index + 3] as u32;
            for c in 0..3 {
                let over = src[src_index + c] as u32;
                let under = canvas[dst_index + c] as u32;
                canvas[dst_index + c] = ((over * alpha + under * (255 - alpha) + 127) / 255) as u8;
            }
        }
    }

    debug!(
        "rasterized {}x{} source onto {}x{} canvas",
        src_width, src_height, width, height
    );

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Background;

    #[test]
    fn opaque_source_replaces_background() {
        let config = Config::new(1, 1);
        let canvas = rasterize(&[10, 20, 30, 0xFF], 1, 1, &config).unwrap();

        assert_eq!(canvas, vec![10, 20, 30, 0xFF]);
    }

    #[test]
    fn transparent_source_keeps_background() {
        let config = Config::new(1, 1).background(Background::Black);
        let canvas = rasterize(&[0xFF, 0xFF, 0xFF, 0x00], 1, 1, &config).unwrap();

        assert_eq!(canvas, vec![0x00, 0x00, 0x00, 0xFF]);
    }

    #[test]
    fn half_alpha_blends_toward_background() {
        let config = Config::new(1, 1);
        let canvas = rasterize(&[0, 0, 0, 128], 1, 1, &config).unwrap();

        assert_eq!(canvas, vec![127, 127, 127, 0xFF]);
    }

    #[test]
    fn oversized_source_is_cropped() {
        let src = vec![
            0x00, 0x00, 0x00, 0xFF, // kept
            0x10, 0x10, 0x10, 0xFF, // kept
            0x20, 0x20, 0x20, 0xFF, // cropped
        ];
        let config = Config::new(2, 1);
        let canvas = rasterize(&src, 3, 1, &config).unwrap();

        assert_eq!(canvas, vec![0x00, 0x00, 0x00, 0xFF, 0x10, 0x10, 0x10, 0xFF]);
    }

    #[test]
    fn undersized_source_is_padded_with_background() {
        let config = Config::new(2, 2);
        let canvas = rasterize(&[0x00, 0x00, 0x00, 0xFF], 1, 1, &config).unwrap();

        let white = [0xFF, 0xFF, 0xFF, 0xFF];
        let mut expected = vec![0x00, 0x00, 0x00, 0xFF];
        expected.extend_from_slice(&white);
        expected.extend_from_slice(&white);
        expected.extend_from_slice(&white);

        assert_eq!(canvas, expected);
    }

    #[test]
    fn rejects_mismatched_source_buffer() {
        let config = Config::new(2, 2);

        match rasterize(&[0x00; 4], 2, 2, &config).unwrap_err() {
            Error::BufferSizeMismatch { expected, actual } => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 4);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn composited_canvas_feeds_the_encoder() {
        // a transparent source over a black background encodes to all zeros
        let config = Config::new(1, 1).background(Background::Black);
        let canvas = rasterize(&[0xFF, 0xFF, 0xFF, 0x00], 1, 1, &config).unwrap();

        assert_eq!(crate::encode(&canvas, &config).unwrap(), vec![0x00]);
    }
}
