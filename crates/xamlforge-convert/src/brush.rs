//! Fill layers → brush tags.
//!
//! | Paint | Element |
//! |-------|---------|
//! | solid | `SolidColorBrush Color="#rrggbb"` |
//! | linear gradient | `LinearGradientBrush` + `GradientStop` children |
//! | radial gradient | `RadialGradientBrush` + `GradientStop` children |
//! | image | `ImageBrush ImageSource="<hash>.png"` |
//! | anything else | nothing, plus a warning |

use xamlforge_markup::Tag;

use crate::error::{ConvertError, ConvertResult};
use crate::number;
use crate::options::{ConvertOptions, GradientGeometry};
use crate::paint::{Fill, Gradient, Paint};

/// Builds the `<container>.Background` property element for a node's fills.
///
/// Hidden fills are skipped. Returns `None` when no brush survives, so the
/// caller never attaches an empty background.
pub fn background(
    container_kind: &str,
    fills: &[Fill],
    node: &str,
    options: &ConvertOptions,
) -> ConvertResult<Option<Tag>> {
    let mut wrapper = Tag::new(format!("{container_kind}.Background"));
    for fill in fills {
        if !fill.visible {
            log::debug!("node '{node}': hidden {} fill skipped", fill.paint.label());
            continue;
        }
        if let Some(b) = brush(&fill.paint, node, options)? {
            wrapper.add_child(b)?;
        }
    }
    Ok(wrapper.has_children().then_some(wrapper))
}

/// Converts a single paint. `node` only labels diagnostics and errors.
pub fn brush(paint: &Paint, node: &str, options: &ConvertOptions) -> ConvertResult<Option<Tag>> {
    match paint {
        Paint::Solid { color, opacity } => {
            let color = color.validated()?;
            let mut tag = Tag::with_attributes("SolidColorBrush", [("Color", color.to_hex_opaque())]);
            if let Some(o) = opacity {
                tag.set_attribute("Opacity", number::compact(*o));
            }
            Ok(Some(tag))
        }
        Paint::LinearGradient(g) => gradient_brush(GradientKind::Linear, g, node, options).map(Some),
        Paint::RadialGradient(g) => gradient_brush(GradientKind::Radial, g, node, options).map(Some),
        Paint::Image { image_hash: Some(hash) } => {
            let file = match &options.image_dir {
                Some(dir) => format!("{}/{hash}.png", dir.trim_end_matches('/')),
                None => format!("{hash}.png"),
            };
            Ok(Some(Tag::with_attributes("ImageBrush", [("ImageSource", file)])))
        }
        Paint::Image { image_hash: None } => {
            log::warn!("node '{node}': image fill has no image handle; emitting empty ImageBrush");
            Ok(Some(Tag::new("ImageBrush")))
        }
        Paint::Unsupported(_) => {
            log::warn!("node '{node}': unsupported paint type '{}' skipped", paint.label());
            Ok(None)
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum GradientKind {
    Linear,
    Radial,
}

impl GradientKind {
    fn element(self) -> &'static str {
        match self {
            GradientKind::Linear => "LinearGradientBrush",
            GradientKind::Radial => "RadialGradientBrush",
        }
    }
}

fn gradient_brush(kind: GradientKind, g: &Gradient, node: &str, options: &ConvertOptions) -> ConvertResult<Tag> {
    if g.stops.is_empty() {
        return Err(ConvertError::EmptyCollection { what: "gradient stops", node: node.to_owned() });
    }

    let mut tag = Tag::new(kind.element());
    if options.gradient_geometry == GradientGeometry::Derive {
        if g.transform.is_none() {
            log::debug!("node '{node}': {} has no transform; using default handles", kind.element());
        }
        match kind {
            GradientKind::Linear => {
                let (start, end) = g.linear_handles();
                tag.set_attribute("StartPoint", number::point(start.x, start.y));
                tag.set_attribute("EndPoint", number::point(end.x, end.y));
            }
            GradientKind::Radial => {
                let h = g.radial_handles();
                let center = number::point(h.center.x, h.center.y);
                tag.set_attribute("Center", center.clone());
                tag.set_attribute("GradientOrigin", center);
                tag.set_attribute("RadiusX", number::compact(h.radius_x));
                tag.set_attribute("RadiusY", number::compact(h.radius_y));
            }
        }
    }
    if let Some(o) = g.opacity {
        tag.set_attribute("Opacity", number::compact(o));
    }

    for stop in &g.stops {
        let color = stop.color.validated()?;
        tag.add_child(Tag::with_attributes(
            "GradientStop",
            [("Color", color.to_hex_argb()), ("Offset", number::fixed(stop.position))],
        ))?;
    }
    Ok(tag)
}
