//! Flat RGB colors and the distance-fog blend.
//!
//! Faces carry exactly one [`Color`]; there are no materials, textures or
//! lighting terms. The only color math in the pipeline is the linear blend
//! toward the sky color performed by the fog pass.

/// A flat 8-bit-per-channel RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Dusk sky used as the default fog/background color.
pub const DUSK_SKY: Color = Color::new(20, 20, 60);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const RED: Color = Color::new(220, 20, 60);
pub const YELLOW: Color = Color::new(255, 215, 0);
pub const GRASS: Color = Color::new(30, 140, 30);
pub const STONE: Color = Color::new(200, 180, 150);

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linearly blends each channel toward `other`.
    ///
    /// `t` is clamped to `[0, 1]`; 0 returns `self` unchanged, 1 returns
    /// `other` exactly. This is the fog formula: the face color fades into
    /// the sky as the blend weight grows with depth.
    pub fn blend_toward(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |from: u8, to: u8| -> u8 {
            (from as f32 + (to as f32 - from as f32) * t).round() as u8
        };
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}
