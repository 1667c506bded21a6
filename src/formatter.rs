use crate::HEX_BYTES_PER_LINE;

/// Render a packed buffer as comma separated hex byte literals.
///
/// The output is meant to be pasted verbatim into firmware source as an
/// array initializer: lowercase two-digit `0xNN,` tokens, a line break after
/// every 8th byte, no trailing comma and no surrounding braces.
pub fn build_hex_array(buffer: &[u8]) -> String {
    let mut output = String::with_capacity(buffer.len() * 5);

    for (i, byte) in buffer.iter().enumerate() {
        output.push_str(&format!("0x{:02x},", byte));
        if (i + 1) % HEX_BYTES_PER_LINE == 0 {
            output.push('\n');
        }
    }

    // drop the final separator
    let output = output.trim_end();
    output.strip_suffix(',').unwrap_or(output).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_after_eight_bytes_and_drops_final_comma() {
        let buffer: Vec<u8> = (1..=9).collect();

        assert_eq!(
            build_hex_array(&buffer),
            "0x01,0x02,0x03,0x04,0x05,0x06,0x07,0x08,\n0x09"
        );
    }

    #[test]
    fn exact_multiple_of_eight_ends_without_newline() {
        let buffer: Vec<u8> = (1..=8).collect();

        assert_eq!(
            build_hex_array(&buffer),
            "0x01,0x02,0x03,0x04,0x05,0x06,0x07,0x08"
        );
    }

    #[test]
    fn empty_buffer_formats_to_empty_string() {
        assert_eq!(build_hex_array(&[]), "");
    }

    #[test]
    fn bytes_are_lowercase_and_zero_padded() {
        assert_eq!(
            build_hex_array(&[0x00, 0x0A, 0xB0, 0xFF]),
            "0x00,0x0a,0xb0,0xff"
        );
    }

    #[test]
    fn single_byte_has_no_separator() {
        assert_eq!(build_hex_array(&[0x42]), "0x42");
    }
}
