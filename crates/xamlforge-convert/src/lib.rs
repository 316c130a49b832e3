//! Design tree → **XAML** conversion.
//!
//! Takes a selection of design-tool nodes (frames, groups, shapes, text with
//! fills and gradients) and produces a XAML document of nested `Canvas`
//! elements with brushes and text blocks.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`design`] | `SourceNode`, `NodeKind`, `Bounds`, font fields |
//! | [`paint`] | `Fill`, `Paint`, `Color` and the hex encoder, gradients |
//! | [`brush`] | fill layers → brush tags |
//! | [`builder`] | `TreeBuilder`: source nodes → placement containers |
//! | [`converter`] | `Converter`, `convert`, `parse_selection` |
//! | [`options`] | `ConvertOptions` |
//! | [`logging`] | `env_logger` setup for binaries |
//!
//! # Quick start
//!
//! ```rust
//! use xamlforge_convert::design::{NodeKind, SourceNode};
//! use xamlforge_convert::paint::{Color, Paint};
//! use xamlforge_convert::{convert, ConvertOptions};
//!
//! let node = SourceNode::new(NodeKind::Rectangle, "Box")
//!     .with_bounds(10.0, 20.0, 100.0, 50.0)
//!     .with_fill(Paint::solid(Color::rgb(1.0, 0.0, 0.0)));
//!
//! let xaml = convert(&[node], &ConvertOptions::default().namespaces(false)).unwrap();
//! assert!(xaml.contains(r##"<SolidColorBrush Color="#ff0000" />"##));
//! ```

pub mod brush;
pub mod builder;
pub mod converter;
pub mod design;
pub mod error;
pub mod logging;
pub mod number;
pub mod options;
pub mod paint;

pub use converter::{convert, parse_selection, Converter};
pub use error::{ConvertError, ConvertResult};
pub use options::{ConvertOptions, GradientGeometry, PositionMode};
