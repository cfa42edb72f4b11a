use nalgebra::Vector4;
use serde::{Deserialize, Serialize};

/// An RGBA color with floating point channels, conventionally in `[0, 1]`.
///
/// Channels are never clamped; values produced by an [`Offset`] may leave the
/// unit range and it is up to the encoder to decide what to do with them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    #[serde(default = "one")]
    pub alpha: f32,
}

const fn one() -> f32 {
    1.
}

impl Color {
    pub const CLEAR: Color = Color::rgba(0., 0., 0., 0.);

    pub const fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Color { red, green, blue, alpha }
    }

    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Color::rgba(red, green, blue, 1.)
    }

    pub fn to_vector(self) -> Vector4<f32> {
        Vector4::new(self.red, self.green, self.blue, self.alpha)
    }

    pub fn from_vector(v: Vector4<f32>) -> Self {
        Color::rgba(v[0], v[1], v[2], v[3])
    }

    /// Squared euclidean distance over all four channels.
    pub fn distance_squared(self, other: Self) -> f32 {
        (self.to_vector() - other.to_vector()).norm_squared()
    }

    pub fn is_transparent(self) -> bool {
        self.alpha == 0.
    }

    pub(crate) fn bits(self) -> [u32; 4] {
        [self.red.to_bits(), self.green.to_bits(), self.blue.to_bits(), self.alpha.to_bits()]
    }
}

impl Default for Color {
    fn default() -> Color {
        Color::CLEAR
    }
}

impl From<[f32; 4]> for Color {
    fn from([red, green, blue, alpha]: [f32; 4]) -> Color {
        Color { red, green, blue, alpha }
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> [f32; 4] {
        [c.red, c.green, c.blue, c.alpha]
    }
}

/// Additive RGB shift. Alpha is never touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    #[serde(default)]
    pub red: f32,
    #[serde(default)]
    pub green: f32,
    #[serde(default)]
    pub blue: f32,
}

impl Offset {
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Offset { red, green, blue }
    }

    pub fn apply(self, c: Color) -> Color {
        Color::from_vector(c.to_vector() + Vector4::new(self.red, self.green, self.blue, 0.))
    }
}
