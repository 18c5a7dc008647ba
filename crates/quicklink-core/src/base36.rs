//! Base-36 alphabet shared by every short code.

/// Digits then lowercase letters; every symbol is URL-safe.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of symbols in a short code.
pub const CODE_LENGTH: usize = 6;

/// Number of distinct codes of [`CODE_LENGTH`] symbols (36^6).
pub const CODE_SPACE: u64 = 2_176_782_336;

/// Returns `true` if `c` belongs to [`ALPHABET`].
pub fn is_symbol(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_lowercase()
}

/// Encodes `n` in base 36, left-padded with `'0'` to at least `width` symbols.
///
/// Zero encodes to `"0"` when `width` is zero.
pub fn encode_padded(mut n: u64, width: usize) -> String {
    // u64::MAX needs 13 base-36 digits
    let mut buf = [0u8; 13];
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = ALPHABET[(n % 36) as usize];
        n /= 36;
        if n == 0 {
            break;
        }
    }

    let digits = &buf[i..];
    let mut out = String::with_capacity(width.max(digits.len()));
    for _ in digits.len()..width {
        out.push('0');
    }
    out.extend(digits.iter().map(|&b| b as char));
    out
}
