//! Heart effect: per-click parameters and the transient DOM element.
//!
//! The element only carries inline parameters; the page stylesheet is
//! expected to draw `.heart` and drive an animation off `--dur` / `--dx`.
//! Each heart removes itself on its own `animationend`, so nothing piles up
//! no matter how fast the user clicks.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, HtmlElement, window};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::entropy::UnitSource;
use crate::palette::{self, Gradient};

pub const HEART_CLASS: &str = "heart";
pub const HEART_GLYPH: &str = "❤";
/// CSS custom property holding the animation duration.
pub const DURATION_VAR: &str = "--dur";
/// CSS custom property holding the horizontal drift distance.
pub const DRIFT_VAR: &str = "--dx";

pub const MIN_DURATION_MS: f64 = 900.0;
pub const DURATION_SPAN_MS: f64 = 700.0; // -> [900, 1600)
pub const MAX_DRIFT_PX: f64 = 60.0; // -> [-60, 60)

/// Parameters of a single heart, rolled once per click.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartParams {
    pub x: f64,
    pub y: f64,
    pub gradient: &'static Gradient,
    pub duration_ms: f64,
    pub drift_px: f64,
}

impl HeartParams {
    /// Roll gradient, duration and drift (in that order) from `src`.
    pub fn roll<S: UnitSource + ?Sized>(x: f64, y: f64, src: &mut S) -> Self {
        let gradient = palette::pick(src.next_unit());
        let duration_ms = MIN_DURATION_MS + unit(src) * DURATION_SPAN_MS;
        let drift_px = (unit(src) - 0.5) * (MAX_DRIFT_PX * 2.0);
        Self { x, y, gradient, duration_ms, drift_px }
    }

    pub fn duration_css(&self) -> String {
        format!("{}ms", self.duration_ms)
    }

    pub fn drift_css(&self) -> String {
        format!("{}px", self.drift_px)
    }

    /// Inline style declarations applied to the element, in application order.
    pub fn style_properties(&self) -> [(&'static str, String); 5] {
        [
            ("background-image", self.gradient.css()),
            (DURATION_VAR, self.duration_css()),
            (DRIFT_VAR, self.drift_css()),
            ("left", format!("{}px", self.x)),
            ("top", format!("{}px", self.y)),
        ]
    }
}

// Clamp into [0, 1) so a bad source cannot push duration/drift out of range.
fn unit<S: UnitSource + ?Sized>(src: &mut S) -> f64 {
    let u = src.next_unit();
    if u.is_nan() || u < 0.0 {
        0.0
    } else if u >= 1.0 {
        1.0 - f64::EPSILON
    } else {
        u
    }
}

/// Spawn a heart at page coordinates `(x, y)` with freshly rolled parameters.
#[wasm_bindgen]
pub fn spawn_heart(x: f64, y: f64) -> Result<HtmlElement, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let params = HeartParams::roll(x, y, &mut crate::entropy::OsEntropy);
    spawn_heart_with(&doc, &params)
}

/// Insert a heart described by `params` into `doc.body` and arm its
/// one-shot self-removal.
pub fn spawn_heart_with(doc: &Document, params: &HeartParams) -> Result<HtmlElement, JsValue> {
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let el: HtmlElement = doc.create_element("div")?.dyn_into()?;
    el.set_class_name(HEART_CLASS);
    el.set_text_content(Some(HEART_GLYPH));
    let style = el.style();
    for (name, value) in params.style_properties() {
        style.set_property(name, &value)?;
    }

    body.append_child(&el)?;

    let target = el.clone();
    let on_end = Closure::once_into_js(move || target.remove());
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    el.add_event_listener_with_callback_and_add_event_listener_options(
        "animationend",
        on_end.unchecked_ref(),
        &opts,
    )?;

    crate::console::debug(&format!(
        "heart at ({}, {}) {} dur={} dx={}",
        params.x,
        params.y,
        params.gradient.css(),
        params.duration_css(),
        params.drift_css()
    ));
    Ok(el)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTE;

    /// Replays a fixed list of draws, cycling.
    struct Seq(Vec<f64>, usize);

    impl UnitSource for Seq {
        fn next_unit(&mut self) -> f64 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v
        }
    }

    #[test]
    fn test_roll_uses_draws_in_order() {
        let mut src = Seq(vec![0.5, 0.0, 0.75], 0);
        let p = HeartParams::roll(100.0, 200.0, &mut src);
        assert_eq!(p.gradient, &PALETTE[3]);
        assert!((p.duration_ms - 900.0).abs() < 1e-9);
        assert!((p.drift_px - 30.0).abs() < 1e-9);
        assert_eq!((p.x, p.y), (100.0, 200.0));
    }

    #[test]
    fn test_roll_extremes_stay_in_range() {
        let mut low = Seq(vec![0.0], 0);
        let p = HeartParams::roll(0.0, 0.0, &mut low);
        assert_eq!(p.duration_ms, 900.0);
        assert_eq!(p.drift_px, -60.0);

        let mut high = Seq(vec![1.0 - f64::EPSILON], 0);
        let p = HeartParams::roll(0.0, 0.0, &mut high);
        assert!(p.duration_ms < 1600.0);
        assert!(p.drift_px < 60.0);
    }

    #[test]
    fn test_roll_clamps_bad_source() {
        let mut bad = Seq(vec![2.0, -1.0, f64::NAN], 0);
        let p = HeartParams::roll(0.0, 0.0, &mut bad);
        assert_eq!(p.gradient, &PALETTE[5]);
        assert_eq!(p.duration_ms, 900.0);
        assert_eq!(p.drift_px, -60.0);
    }

    #[test]
    fn test_css_values_keep_upper_bounds_open() {
        let mut src = Seq(vec![0.1, 0.999_995, 0.999_97], 0);
        let p = HeartParams::roll(0.0, 0.0, &mut src);
        let dur: f64 = p.duration_css().trim_end_matches("ms").parse().unwrap();
        let dx: f64 = p.drift_css().trim_end_matches("px").parse().unwrap();
        assert_eq!(dur, p.duration_ms);
        assert_eq!(dx, p.drift_px);
        assert!(dur < 1600.0, "--dur {} reached the bound", p.duration_css());
        assert!(dx < 60.0, "--dx {} reached the bound", p.drift_css());
    }

    #[test]
    fn test_style_properties() {
        let p = HeartParams {
            x: 50.0,
            y: 75.5,
            gradient: &PALETTE[1],
            duration_ms: 1234.5,
            drift_px: -12.25,
        };
        let props = p.style_properties();
        assert_eq!(props[0], ("background-image", "linear-gradient(45deg, #FF7F00, #FFFF00)".to_string()));
        assert_eq!(props[1], ("--dur", "1234.5ms".to_string()));
        assert_eq!(props[2], ("--dx", "-12.25px".to_string()));
        assert_eq!(props[3], ("left", "50px".to_string()));
        assert_eq!(props[4], ("top", "75.5px".to_string()));
    }
}
