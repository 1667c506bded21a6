use lcd_image::{build_hex_array, encode, BlockSize, Config};

//
// cargo run --example block_sizes
//
// Packs the same checkerboard at every supported block size to show how the
// bits land in the output bytes.
//
fn main() {
    let width: u32 = 8;
    let height: u32 = 2;

    let mut pixels: Vec<u8> = Vec::new();
    for i in 0..width * height {
        let shade: u8 = if i % 2 == 0 { 0xFF } else { 0x00 };
        pixels.extend_from_slice(&[shade, shade, shade, 0xFF]);
    }

    for bits in [2u8, 4, 8].iter() {
        let config = Config::new(width, height).block_size(BlockSize::from_bits(*bits).unwrap());
        let packed = encode(&pixels, &config).unwrap();

        println!("// block size {}", bits);
        println!("{}", build_hex_array(&packed));
        println!();
    }
}
