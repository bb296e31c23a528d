//! RGB colours and the canonical keys that address them in a transition model

use std::fmt;
use std::str::FromStr;

/// An opaque RGB colour with 8-bit channels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Round fractional channels to the nearest integer, clamped to [0, 255]
    pub fn from_channels(channels: [f64; 3]) -> Self {
        let [r, g, b] = channels.map(round_channel);
        Self { r, g, b }
    }

    /// Channels as floating point values for distance and mean calculations
    pub fn channels(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }

    /// Canonical key for this colour
    pub const fn key(self) -> ColorKey {
        ColorKey(self)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self { r, g, b }
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        Self([color.r, color.g, color.b])
    }
}

fn round_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// Canonical identifier of a colour inside a transition model
///
/// Orders by red, then green, then blue. This ordering is the enumeration
/// order used for weighted sampling, so it must stay stable.
/// Displays and parses as `"r,g,b"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorKey(Color);

impl ColorKey {
    /// Key for the given colour
    pub const fn from_color(color: Color) -> Self {
        Self(color)
    }

    /// Colour this key addresses
    pub const fn color(self) -> Color {
        self.0
    }
}

impl From<Color> for ColorKey {
    fn from(color: Color) -> Self {
        Self(color)
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0.r, self.0.g, self.0.b)
    }
}

/// Failure to parse a `"r,g,b"` colour key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorKeyError {
    input: String,
}

impl fmt::Display for ParseColorKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a colour key of the form r,g,b with channels 0-255",
            self.input
        )
    }
}

impl std::error::Error for ParseColorKeyError {}

impl FromStr for ColorKey {
    type Err = ParseColorKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseColorKeyError {
            input: s.to_string(),
        };

        let mut parts = s.split(',').map(|part| part.trim().parse::<u8>());
        let (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(error());
        };

        Ok(Self(Color::new(r, g, b)))
    }
}
