use xamlforge_markup::DEFAULT_INDENT;

/// How `Canvas.Left` / `Canvas.Top` are computed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PositionMode {
    /// Offset from the parent node's bounding-box origin. Nested canvases
    /// position their children this way.
    #[default]
    RelativeToParent,
    /// The raw absolute bounding box.
    Absolute,
}

/// Whether gradient brushes get start/end or center/radius attributes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum GradientGeometry {
    /// Derived from the gradient transform, or the fallback handles when
    /// there is none.
    #[default]
    Derive,
    /// Left unset for a downstream consumer to fill in.
    Omit,
}

/// Conversion settings.
///
/// ```
/// use xamlforge_convert::{ConvertOptions, PositionMode};
///
/// let options = ConvertOptions::default()
///     .indent(4)
///     .position_mode(PositionMode::Absolute)
///     .default_font("Inter", 14.0);
/// assert_eq!(options.container, "Canvas");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Element used for placement containers and the document root.
    pub container: String,
    /// Spaces per nesting level.
    pub indent: usize,
    /// Used when a text node's font family is mixed or missing.
    pub default_font_family: String,
    /// Used when a text node's font size is mixed or missing.
    pub default_font_size: f64,
    pub position_mode: PositionMode,
    pub gradient_geometry: GradientGeometry,
    /// Emit `xmlns` / `xmlns:x` on the root element.
    pub namespaces: bool,
    /// `x:Name` of the root element.
    pub root_name: String,
    /// Directory prefixed to generated image file names.
    pub image_dir: Option<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            container: "Canvas".to_owned(),
            indent: DEFAULT_INDENT,
            default_font_family: "Segoe UI".to_owned(),
            default_font_size: 12.0,
            position_mode: PositionMode::default(),
            gradient_geometry: GradientGeometry::default(),
            namespaces: true,
            root_name: "Root".to_owned(),
            image_dir: None,
        }
    }
}

impl ConvertOptions {
    pub fn container(mut self, element: impl Into<String>) -> Self {
        self.container = element.into();
        self
    }

    pub fn indent(mut self, spaces: usize) -> Self {
        self.indent = spaces;
        self
    }

    pub fn default_font(mut self, family: impl Into<String>, size: f64) -> Self {
        self.default_font_family = family.into();
        self.default_font_size = size;
        self
    }

    pub fn position_mode(mut self, mode: PositionMode) -> Self {
        self.position_mode = mode;
        self
    }

    pub fn gradient_geometry(mut self, policy: GradientGeometry) -> Self {
        self.gradient_geometry = policy;
        self
    }

    pub fn namespaces(mut self, enabled: bool) -> Self {
        self.namespaces = enabled;
        self
    }

    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    pub fn image_dir(mut self, dir: impl Into<String>) -> Self {
        self.image_dir = Some(dir.into());
        self
    }
}
