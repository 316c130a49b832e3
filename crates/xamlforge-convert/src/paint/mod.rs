//! Paint model read from the design tree.
//!
//! Scope:
//! - color representation and hex encoding
//! - fill layers (solid, gradients, image)
//!
//! Conversion to brush tags lives in [`crate::brush`].

pub mod color;
pub mod gradient;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

pub use color::{encode_argb, encode_rgb, Color};
pub use gradient::{ColorStop, Gradient, Point, RadialHandles, Transform};

/// One entry of a node's fill list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fill {
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    #[serde(flatten)]
    pub paint: Paint,
}

fn visible_by_default() -> bool {
    true
}

impl Fill {
    pub fn new(paint: Paint) -> Self {
        Self { visible: true, paint }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

impl From<Paint> for Fill {
    fn from(paint: Paint) -> Self {
        Fill::new(paint)
    }
}

/// Paint source for a fill layer.
///
/// Closed set: anything the converter has no brush for (angular and diamond
/// gradients, video, ...) lands in `Unsupported` with its host type string.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid { color: Color, opacity: Option<f64> },
    LinearGradient(Gradient),
    RadialGradient(Gradient),
    Image { image_hash: Option<String> },
    Unsupported(String),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid { color, opacity: None }
    }

    /// Host type string, used in diagnostics.
    pub fn label(&self) -> &str {
        match self {
            Paint::Solid { .. } => "SOLID",
            Paint::LinearGradient(_) => "GRADIENT_LINEAR",
            Paint::RadialGradient(_) => "GRADIENT_RADIAL",
            Paint::Image { .. } => "IMAGE",
            Paint::Unsupported(ty) => ty,
        }
    }
}

/// Wire shape of the paints that have a brush.
#[derive(Deserialize)]
#[serde(tag = "type")]
enum TaggedPaint {
    #[serde(rename = "SOLID")]
    Solid {
        color: Color,
        #[serde(default)]
        opacity: Option<f64>,
    },
    #[serde(rename = "GRADIENT_LINEAR")]
    LinearGradient(Gradient),
    #[serde(rename = "GRADIENT_RADIAL")]
    RadialGradient(Gradient),
    #[serde(rename = "IMAGE")]
    Image {
        #[serde(rename = "imageHash", default)]
        image_hash: Option<String>,
    },
}

impl From<TaggedPaint> for Paint {
    fn from(tagged: TaggedPaint) -> Self {
        match tagged {
            TaggedPaint::Solid { color, opacity } => Paint::Solid { color, opacity },
            TaggedPaint::LinearGradient(g) => Paint::LinearGradient(g),
            TaggedPaint::RadialGradient(g) => Paint::RadialGradient(g),
            TaggedPaint::Image { image_hash } => Paint::Image { image_hash },
        }
    }
}

impl<'de> Deserialize<'de> for Paint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let ty = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| D::Error::missing_field("type"))?
            .to_owned();
        match ty.as_str() {
            "SOLID" | "GRADIENT_LINEAR" | "GRADIENT_RADIAL" | "IMAGE" => serde_json::from_value::<TaggedPaint>(value)
                .map(Paint::from)
                .map_err(D::Error::custom),
            _ => Ok(Paint::Unsupported(ty)),
        }
    }
}
