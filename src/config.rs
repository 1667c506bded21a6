use crate::{error::Error, DEFAULT_THRESHOLD};

/// Number of pixels packed into one output byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSize {
    Two,
    Four,
    Eight,
}

impl BlockSize {
    /// Check a raw block size value from a free-form source such as a
    /// command line flag.
    pub fn from_bits(bits: u8) -> Result<Self, Error> {
        match bits {
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            _ => Err(Error::InvalidBlockSize(bits)),
        }
    }

    pub fn bits(&self) -> usize {
        match self {
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
        }
    }
}

/// Canvas background color the source image is composited over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    White,
    Black,
}

impl Background {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "white" => Some(Self::White),
            "black" => Some(Self::Black),
            _ => None,
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Self::White => [0xFF, 0xFF, 0xFF],
            Self::Black => [0x00, 0x00, 0x00],
        }
    }
}

/// Config
///
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) block_size: BlockSize,
    pub(crate) threshold: u8,
    pub(crate) invert: bool,
    pub(crate) background: Background,
}

impl Config {
    /// Initialize configuration data with default values.
    ///
    /// This method receives the target dimensions. Appearance settings
    /// default to a block size of 8, a threshold of 127, no inversion and a
    /// white background.
    ///
    /// # Example
    ///
    /// ```
    /// use lcd_image::{BlockSize, Config};
    ///
    /// let config = Config::new(128, 64)
    ///     .block_size(BlockSize::Eight)
    ///     .threshold(80)
    ///     .invert(true);
    /// ```
    ///
    pub fn new(width: u32, height: u32) -> Config {
        Config {
            width,
            height,
            block_size: BlockSize::Eight,
            threshold: DEFAULT_THRESHOLD,
            invert: false,
            background: Background::White,
        }
    }

    pub fn block_size(self, block_size: BlockSize) -> Self {
        Config { block_size, ..self }
    }

    pub fn threshold(self, threshold: u8) -> Self {
        Config { threshold, ..self }
    }

    pub fn invert(self, invert: bool) -> Self {
        Config { invert, ..self }
    }

    pub fn background(self, background: Background) -> Self {
        Config { background, ..self }
    }

    /// Packed output length in bytes for the configured dimensions.
    ///
    /// Known up front, so a dimension change means a new allocation while an
    /// appearance-only change (threshold, inversion, background) keeps the
    /// same length.
    pub fn packed_len(&self) -> usize {
        let pixels = self.width as usize * self.height as usize;
        (pixels + self.block_size.bits() - 1) / self.block_size.bits()
    }

    pub(crate) fn pixel_bytes(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}
