//! LCD Image Converter
//!
//! This crate converts raster images into packed 1-bit-per-pixel bitmaps for
//! monochrome LCD/OLED controllers, and renders them as hex byte arrays
//! ready to paste into firmware source.
//!
//! # Example
//!
//! ```rust
//! use lcd_image::{build_hex_array, encode, Config};
//!
//! let config = Config::new(8, 1).threshold(127);
//! let pixels = vec![0xFFu8; 8 * 1 * 4];
//! let packed = encode(&pixels, &config).unwrap();
//! assert_eq!(build_hex_array(&packed), "0xff");
//! ```

mod config;
mod encoder;
mod error;
mod formatter;
mod raster;

pub use crate::{
    config::{Background, BlockSize, Config},
    encoder::{encode, encode_with_preview},
    error::Error,
    formatter::build_hex_array,
    raster::rasterize,
};

/// Type alias for the packed 1-bit bitmap produced by the encoder.
///
/// Each byte holds up to `block_size` pixels, packed MSB first in row-major
/// order. The buffer length is `ceil(width * height / block_size)`; bits in
/// a final partial block that no pixel addresses stay zero.
pub type PackedBuffer = Vec<u8>;

/// Number of hex byte literals emitted per output line.
///
/// The formatter inserts a line break after every 8th `0xNN,` token so the
/// generated array stays readable when pasted into firmware source.
pub const HEX_BYTES_PER_LINE: usize = 8;

/// Default luminance cutoff separating "on" from "off" pixels.
///
/// Pixels whose luminance is strictly greater than the threshold encode to
/// 1; everything else encodes to 0 (before inversion).
pub const DEFAULT_THRESHOLD: u8 = 127;
