//! Base-62 encoding of allocator seeds.
//!
//! The alphabet is digits, then lowercase, then uppercase letters. Digits are
//! written most significant first, so `100000` encodes to `q0U` and `150000`
//! to `D1m`. Codes are externally visible, so this ordering must never change.

/// Symbol table, indexed by digit value.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = 62;

/// Encodes `value` as a big-endian base-62 string.
///
/// Zero encodes to `"0"`.
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(11);
    while value > 0 {
        digits.push(ALPHABET[(value % BASE) as usize]);
        value /= BASE;
    }
    digits.iter().rev().map(|&b| char::from(b)).collect()
}

/// Decodes a base-62 string back to its numeric value.
///
/// Returns `None` for empty input, symbols outside the alphabet, or values
/// that overflow `u64`.
pub fn decode(code: &str) -> Option<u64> {
    if code.is_empty() {
        return None;
    }

    code.bytes().try_fold(0u64, |acc, byte| {
        let digit = symbol_value(byte)?;
        acc.checked_mul(BASE)?.checked_add(digit)
    })
}

/// Returns true if every character of `code` belongs to the alphabet.
#[cfg(test)]
pub fn is_base62(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn symbol_value(byte: u8) -> Option<u64> {
    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'z' => byte - b'a' + 10,
        b'A'..=b'Z' => byte - b'A' + 36,
        _ => return None,
    };
    Some(u64::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_default_seeds() {
        assert_eq!(encode(100_000), "q0U");
        assert_eq!(encode(150_000), "D1m");
        assert_eq!(encode(200_000), "Q1O");
    }

    #[test]
    fn test_encode_small_values() {
        assert_eq!(encode(0), "0");
        assert_eq!(encode(9), "9");
        assert_eq!(encode(10), "a");
        assert_eq!(encode(36), "A");
        assert_eq!(encode(61), "Z");
        assert_eq!(encode(62), "10");
    }

    #[test]
    fn test_encode_max() {
        let code = encode(u64::MAX);
        assert_eq!(code.len(), 11);
        assert_eq!(decode(&code), Some(u64::MAX));
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("q0U"), Some(100_000));
        assert_eq!(decode("D1m"), Some(150_000));
        assert_eq!(decode("10"), Some(62));
    }

    #[test]
    fn test_decode_rejects_foreign_symbols() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("ab-c"), None);
        assert_eq!(decode("a_b"), None);
    }

    #[test]
    fn test_decode_overflow() {
        assert_eq!(decode("ZZZZZZZZZZZZ"), None);
    }

    #[test]
    fn test_distinct_values_give_distinct_codes() {
        let codes: std::collections::HashSet<String> =
            (0..200u64).map(|i| encode(100_000 + i * 50_000)).collect();
        assert_eq!(codes.len(), 200);
    }

    #[test]
    fn test_is_base62() {
        assert!(is_base62("q0U"));
        assert!(!is_base62(""));
        assert!(!is_base62("favicon.ico"));
    }
}
