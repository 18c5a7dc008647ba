use crate::Generator;
use quicklink_core::base36::{encode_padded, CODE_LENGTH, CODE_SPACE};
use quicklink_core::ShortCode;
use std::sync::atomic::{AtomicU64, Ordering};

/// A counter-based short code generator.
///
/// This generator produces codes like "000000", "000001", ..., "00000z",
/// "000010". Codes are distinct within a single instance until the counter
/// wraps after 36^6 calls.
///
/// Offsets are taken modulo 36^6 (2_176_782_336), so the whole code space is
/// shared by every instance. To keep several instances apart, give each one a
/// slice of that space: with `n` instances, instance `i` starts at
/// `i * (36^6 / n)` and stays distinct only until it has issued `36^6 / n`
/// codes. Two instances at 0 and 1_000_000_000 collide once the first one
/// has issued a billion codes.
#[derive(Debug, Default)]
pub struct SeqGenerator {
    counter: AtomicU64,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
        }
    }
}

impl SeqGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator starting from a specific counter value.
    ///
    /// Useful for resuming from a known state or distributing
    /// counter ranges across nodes.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
        }
    }
}

impl Generator for SeqGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let count = self.counter.fetch_add(1, Ordering::SeqCst) % CODE_SPACE;
        ShortCode::new_unchecked(encode_padded(count, CODE_LENGTH))
    }
}
