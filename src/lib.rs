//! Click Hearts core crate.
//!
//! Listens for clicks anywhere on the page and spawns a short-lived heart at
//! the pointer, skinned with a random rainbow gradient and animated with a
//! random duration / horizontal drift. Link clicks are held back for a moment
//! so the heart is visible before the browser navigates.
//!
//! The heart's look and keyframes come from the host stylesheet (`.heart`,
//! driven by `--dur` and `--dx`); this crate only supplies the parameters.

use wasm_bindgen::prelude::*;

mod console;
pub mod entropy;
pub mod heart;
pub mod palette;
pub mod trigger;

pub use entropy::{OsEntropy, UnitSource};
pub use heart::{HeartParams, spawn_heart, spawn_heart_with};
pub use palette::{Gradient, PALETTE};
pub use trigger::{ClickAction, NAVIGATION_DELAY_MS, install, on_click};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "auto_install")]
    trigger::install()?;

    Ok(())
}

/// Number of gradients hearts are drawn from.
#[wasm_bindgen]
pub fn palette_size() -> usize {
    palette::PALETTE_LEN
}
