use byteorder::{ByteOrder, LittleEndian};

use crate::field::{bit_reverse32, multiply_mod, pow_mod, reciprocal_mod, FieldError};

/// Width of the sacrificial region in bytes.
pub const PATCH_WIDTH: u64 = 4;

/// Derive the XOR delta that moves a stream's CRC from `current` to
/// `desired` when applied at `suffix_len` bytes from the end.
pub fn derive_delta(suffix_len: u64, current: u32, desired: u32) -> Result<u32, FieldError> {
    // x^(8n) taken as (x^n)^8 so the exponent never overflows
    let shift = pow_mod(pow_mod(2, suffix_len), 8);
    let a = reciprocal_mod(shift)?;

    Ok(multiply_mod(a, bit_reverse32(current ^ desired) as u64) as u32)
}

/// Bytes to XOR into `[offset, offset + 4)`, in stream order.
pub fn delta_bytes(delta: u32) -> [u8; 4] {
    let mut bytes = [0u8; 4];
    LittleEndian::write_u32(&mut bytes, bit_reverse32(delta));
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::crc32_of;

    #[test]
    fn test_no_change_is_zero_delta() {
        assert_eq!(derive_delta(19, 0x1234_5678, 0x1234_5678), Ok(0));
        assert_eq!(delta_bytes(0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_delta_for_trailing_bytes() {
        let mut data = b"This is a test 0000".to_vec();
        let current = crc32_of(&data);

        let delta = derive_delta(4, current, 0xDEAD_BEEF).unwrap();
        for (byte, d) in data[15..].iter_mut().zip(delta_bytes(delta)) {
            *byte ^= d;
        }

        assert_eq!(&data[15..], &[0x99, 0x3C, 0x5F, 0x27]);
        assert_eq!(crc32_of(&data), 0xDEAD_BEEF);
    }

    #[test]
    fn test_delta_for_leading_bytes() {
        let mut data = vec![0u8; 8];
        let current = crc32_of(&data);

        let delta = derive_delta(8, current, 0).unwrap();
        for (byte, d) in data[..4].iter_mut().zip(delta_bytes(delta)) {
            *byte ^= d;
        }

        assert_eq!(data, vec![0x50, 0x2F, 0x1B, 0x10, 0, 0, 0, 0]);
        assert_eq!(crc32_of(&data), 0);
    }

    #[test]
    fn test_exponent_split_matches_direct_power() {
        for n in [1u64, 4, 19, 4096] {
            assert_eq!(pow_mod(pow_mod(2, n), 8), pow_mod(2, n * 8));
        }
    }
}
