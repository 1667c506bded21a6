use lcd_image::{build_hex_array, encode, rasterize, Config};
use qrcode::QrCode;

//
// cargo run --example qr_hex
//
// Renders a QR code and emits it as a firmware hex array. Dark modules are
// encoded as lit pixels, hence the inversion.
//
fn main() {
    env_logger::init();

    let code = QrCode::new(b"https://example.com").unwrap();
    let qr: image::ImageBuffer<image::Rgba<u8>, std::vec::Vec<u8>> = code
        .render::<image::Rgba<u8>>()
        .quiet_zone(false)
        .min_dimensions(64, 64)
        .build();

    let (width, height) = qr.dimensions();

    let config = Config::new(width, height).invert(true);

    let canvas = rasterize(qr.as_raw(), width, height, &config).unwrap();
    let packed = encode(&canvas, &config).unwrap();

    println!("// {}x{} QR code, {} bytes", width, height, packed.len());
    println!("{}", build_hex_array(&packed));
}
