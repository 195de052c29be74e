//=========================================================================
// Render Surface
//=========================================================================
//
// The drawing primitives the logic thread needs, expressed as a trait so
// that screens never touch a graphics API.
//
// Architecture:
//   Screen::draw / ScreenFlow::draw_overlay → &mut dyn Canvas
//     └─ DrawList (records commands) → Presenter (consumes a frame)
//
//=========================================================================

//=== Module Declarations =================================================

mod draw_list;

//=== Internal Dependencies ===============================================

use crate::core::camera::OrbitCamera;

//=== Public API ==========================================================

pub use draw_list::{DrawCommand, DrawList, LogPresenter, Presenter};

//=== Color ===============================================================

/// RGBA color with a float alpha channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RAYWHITE: Self = Self::rgb(245, 245, 245);
    pub const DARKGRAY: Self = Self::rgb(80, 80, 80);
    pub const GRAY: Self = Self::rgb(130, 130, 130);
    pub const MAROON: Self = Self::rgb(190, 33, 55);
    pub const DARKBLUE: Self = Self::rgb(0, 82, 172);
    pub const GOLD: Self = Self::rgb(255, 203, 0);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with its alpha replaced by `alpha`, clamped to [0, 1].
    pub fn fade(self, alpha: f32) -> Self {
        Self { a: alpha.clamp(0.0, 1.0), ..self }
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle in window pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

//=== Canvas ==============================================================

/// Drawing target for one frame.
pub trait Canvas {
    /// Clears the whole target.
    fn clear(&mut self, color: Color);

    /// Fills `rect` with `color`, blending by `color.a`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws `text` with its top-left corner at (`x`, `y`).
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);

    /// Draws the static 3D scene from `camera`.
    fn draw_scene(&mut self, camera: &OrbitCamera);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_replaces_alpha_only() {
        let faded = Color::MAROON.fade(0.25);
        assert_eq!((faded.r, faded.g, faded.b), (190, 33, 55));
        assert_eq!(faded.a, 0.25);
    }

    #[test]
    fn fade_clamps_out_of_range_alpha() {
        assert_eq!(Color::BLACK.fade(1.04).a, 1.0);
        assert_eq!(Color::BLACK.fade(-0.02).a, 0.0);
    }
}
