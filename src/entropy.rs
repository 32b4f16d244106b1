//! Uniform random draws for heart parameters.

/// Source of uniform draws in [0, 1).
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

/// `getrandom`-backed source (`crypto.getRandomValues` in the browser).
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl UnitSource for OsEntropy {
    fn next_unit(&mut self) -> f64 {
        let mut buf = [0u8; 8];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => unit_from_bits(u64::from_le_bytes(buf)),
            Err(e) => {
                crate::console::warn(&format!("click-hearts: getrandom failed: {e}"));
                0.0
            }
        }
    }
}

/// Map the top 53 bits of `bits` onto [0, 1).
pub fn unit_from_bits(bits: u64) -> f64 {
    (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}
