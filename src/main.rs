use std::{env, str::FromStr};

//
// cargo run -- logo.png --width 128 --height 64 --invert
//
use lcd_image::{build_hex_array, encode_with_preview, rasterize, Background, BlockSize, Config};
use log::info;

fn print_usage() {
    println!("Usage: lcd-image <IMAGE> [OPTIONS]");
    println!("Options:");
    println!("  --width <PX>       Canvas width in pixels (default: source width)");
    println!("  --height <PX>      Canvas height in pixels (default: source height)");
    println!("  --block-size <N>   Pixels packed per byte, one of 2, 4, 8 (default: 8)");
    println!("  --threshold <N>    Luminance cutoff 0-255 (default: 127)");
    println!("  --invert           Flip the on/off decision");
    println!("  --background <C>   Canvas background, white or black (default: white)");
    println!("  --preview <FILE>   Save the thresholded image for inspection");
}

fn main() {
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{}:{}] {} - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.level(),
                record.args()
            )
        })
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let file = &args[1];

    let mut width: Option<u32> = None;
    let mut height: Option<u32> = None;
    let mut block_size = BlockSize::Eight;
    let mut threshold: u8 = lcd_image::DEFAULT_THRESHOLD;
    let mut invert = false;
    let mut background = Background::White;
    let mut preview_file: Option<String> = None;

    let mut iter = args[2..].iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--width" => width = Some(parse_flag(iter.next(), arg)),
            "--height" => height = Some(parse_flag(iter.next(), arg)),
            "--block-size" => {
                let bits: u8 = parse_flag(iter.next(), arg);
                block_size = match BlockSize::from_bits(bits) {
                    Ok(block_size) => block_size,
                    Err(err) => {
                        eprintln!("Error: {}", err);
                        return;
                    }
                };
            }
            "--threshold" => threshold = parse_flag(iter.next(), arg),
            "--invert" => invert = true,
            "--background" => {
                let name: String = parse_flag(iter.next(), arg);
                background = match Background::from_name(&name) {
                    Some(background) => background,
                    None => {
                        eprintln!("Error: unknown background '{}'", name);
                        return;
                    }
                };
            }
            "--preview" => preview_file = Some(parse_flag(iter.next(), arg)),
            _ => {
                eprintln!("Error: unknown option '{}'", arg);
                print_usage();
                return;
            }
        }
    }

    let image = match image::open(file) {
        Ok(image) => image.to_rgba8(),
        Err(err) => {
            eprintln!("Error: could not open '{}': {}", file, err);
            return;
        }
    };

    let (src_width, src_height) = image.dimensions();
    info!("source image is {}x{}", src_width, src_height);

    let width = width.unwrap_or(src_width);
    let height = height.unwrap_or(src_height);

    let config = Config::new(width, height)
        .block_size(block_size)
        .threshold(threshold)
        .invert(invert)
        .background(background);

    let canvas = rasterize(image.as_raw(), src_width, src_height, &config).unwrap();
    let (packed, preview) = encode_with_preview(&canvas, &config).unwrap();

    println!("{}", build_hex_array(&packed));

    if let Some(path) = preview_file {
        image::save_buffer(&path, &preview, width, height, image::ColorType::Rgba8).unwrap();
        info!("preview saved to {}", path);
    }
}

fn parse_flag<T: FromStr>(value: Option<&String>, flag: &str) -> T {
    let value = match value {
        Some(value) => value,
        None => {
            eprintln!("Error: missing value for '{}'", flag);
            std::process::exit(1);
        }
    };

    match FromStr::from_str(value) {
        Ok(parsed) => parsed,
        Err(_) => {
            eprintln!("Error: invalid value '{}' for '{}'", value, flag);
            std::process::exit(1);
        }
    }
}
