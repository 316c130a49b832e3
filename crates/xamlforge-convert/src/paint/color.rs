use serde::Deserialize;

use crate::error::{ConvertError, ConvertResult};

/// Straight-alpha color as reported by the design tool, channels in `[0, 1]`.
///
/// Fill colors usually carry no alpha (`a` is `None`); gradient stops always
/// do.
#[derive(Debug, Copy, Clone, Default, PartialEq, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default)]
    pub a: Option<f64>,
}

impl Color {
    #[inline]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    #[inline]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// Checks every channel lies in `[0, 1]`.
    ///
    /// Call this where colors enter the converter; the encoders below only
    /// debug-assert.
    pub fn validated(self) -> ConvertResult<Self> {
        let channels = [("r", Some(self.r)), ("g", Some(self.g)), ("b", Some(self.b)), ("a", self.a)];
        for (channel, value) in channels {
            if let Some(value) = value {
                if !(0.0..=1.0).contains(&value) {
                    return Err(ConvertError::ChannelOutOfRange { channel, value });
                }
            }
        }
        Ok(self)
    }

    /// `#aarrggbb` when the color has its own alpha, `#rrggbb` otherwise.
    pub fn to_hex(self) -> String {
        match self.a {
            Some(a) => encode_argb(self.r, self.g, self.b, a),
            None => encode_rgb(self.r, self.g, self.b),
        }
    }

    /// `#rrggbb`, ignoring any alpha.
    pub fn to_hex_opaque(self) -> String {
        encode_rgb(self.r, self.g, self.b)
    }

    /// `#aarrggbb`, treating a missing alpha as fully opaque.
    pub fn to_hex_argb(self) -> String {
        encode_argb(self.r, self.g, self.b, self.a.unwrap_or(1.0))
    }
}

// ── Encoder ───────────────────────────────────────────────────────────────

/// Two lowercase hex digits for a channel in `[0, 1]`.
#[inline]
pub fn hex_channel(value: f64) -> String {
    debug_assert!((0.0..=1.0).contains(&value), "channel out of range: {value}");
    format!("{:02x}", (value * 255.0).round() as u8)
}

pub fn encode_rgb(r: f64, g: f64, b: f64) -> String {
    format!("#{}{}{}", hex_channel(r), hex_channel(g), hex_channel(b))
}

/// Alpha comes first, as XAML expects.
pub fn encode_argb(r: f64, g: f64, b: f64, a: f64) -> String {
    format!("#{}{}{}{}", hex_channel(a), hex_channel(r), hex_channel(g), hex_channel(b))
}
