//! Rainbow gradient palette used to skin each heart.
//!
//! Six two-color stops walking the rainbow arc red -> violet. Blue is left out.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Two-color 45° linear gradient.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    /// CSS `background-image` value for this gradient.
    pub fn css(&self) -> String {
        format!("linear-gradient(45deg, {}, {})", self.from, self.to)
    }
}

pub const PALETTE_LEN: usize = 6;

pub static PALETTE: [Gradient; PALETTE_LEN] = [
    Gradient { from: "#FF0000", to: "#FF7F00" }, // red -> orange
    Gradient { from: "#FF7F00", to: "#FFFF00" }, // orange -> yellow
    Gradient { from: "#FFFF00", to: "#00FF00" }, // yellow -> green
    Gradient { from: "#00FF00", to: "#4B0082" }, // green -> indigo
    Gradient { from: "#4B0082", to: "#8F00FF" }, // indigo -> violet
    Gradient { from: "#FF0000", to: "#8F00FF" }, // red -> violet
];

/// Pick a palette entry from a uniform draw `u` in [0, 1).
///
/// Out-of-range draws are clamped so a misbehaving source still lands on a
/// valid entry.
pub fn pick(u: f64) -> &'static Gradient {
    let idx = (u * PALETTE_LEN as f64) as usize; // saturating cast: NaN / negative -> 0
    &PALETTE[idx.min(PALETTE_LEN - 1)]
}
