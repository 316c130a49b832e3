use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use xamlforge_convert::logging::{init_logging, LoggingConfig};
use xamlforge_convert::{parse_selection, ConvertOptions, Converter, GradientGeometry, PositionMode};

/// Converts an exported design selection (JSON) into XAML.
#[derive(Debug, Parser)]
#[command(name = "xamlforge", version)]
struct Args {
    /// JSON file holding one node or an array of nodes; `-` reads stdin.
    #[arg(default_value = "-")]
    input: String,

    /// Write the document here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Spaces per nesting level.
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Element used for placement containers and the root.
    #[arg(long, default_value = "Canvas")]
    container: String,

    /// Use absolute bounding boxes instead of parent-relative positions.
    #[arg(long)]
    absolute: bool,

    /// Leave `xmlns` declarations off the root element.
    #[arg(long)]
    no_namespaces: bool,

    #[arg(long, value_enum, default_value_t = GradientMode::Derive)]
    gradient_geometry: GradientMode,

    /// Directory prefixed to image brush file names.
    #[arg(long)]
    image_dir: Option<String>,

    /// Log filter, e.g. `debug` or `xamlforge_convert=debug`.
    #[arg(long)]
    log: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum GradientMode {
    Derive,
    Omit,
}

impl From<GradientMode> for GradientGeometry {
    fn from(mode: GradientMode) -> Self {
        match mode {
            GradientMode::Derive => GradientGeometry::Derive,
            GradientMode::Omit => GradientGeometry::Omit,
        }
    }
}

impl Args {
    fn options(&self) -> ConvertOptions {
        let mut options = ConvertOptions::default()
            .indent(self.indent)
            .container(self.container.as_str())
            .namespaces(!self.no_namespaces)
            .gradient_geometry(self.gradient_geometry.into())
            .position_mode(if self.absolute { PositionMode::Absolute } else { PositionMode::RelativeToParent });
        if let Some(dir) = &self.image_dir {
            options = options.image_dir(dir.as_str());
        }
        options
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read '{input}'"))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig { env_filter: args.log.clone(), ..LoggingConfig::default() });

    let source = read_input(&args.input)?;
    let nodes = parse_selection(&source).with_context(|| format!("failed to parse '{}'", args.input))?;
    log::debug!("converting {} top-level node(s)", nodes.len());

    let document = Converter::new(args.options())
        .convert(&nodes)
        .context("conversion aborted")?;
    if document.is_empty() {
        log::warn!("nothing visible in the selection; output is empty");
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &document).with_context(|| format!("failed to write '{}'", path.display()))?
        }
        None => io::stdout().write_all(document.as_bytes()).context("failed to write stdout")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("xamlforge").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_library_defaults() {
        let a = args(&[]);
        assert_eq!(a.input, "-");
        assert_eq!(a.options(), ConvertOptions::default());
    }

    #[test]
    fn flags_map_onto_options() {
        let a = args(&[
            "sel.json",
            "--indent", "4",
            "--container", "Grid",
            "--absolute",
            "--no-namespaces",
            "--gradient-geometry", "omit",
            "--image-dir", "assets",
        ]);
        let o = a.options();
        assert_eq!(a.input, "sel.json");
        assert_eq!(o.indent, 4);
        assert_eq!(o.container, "Grid");
        assert_eq!(o.position_mode, PositionMode::Absolute);
        assert!(!o.namespaces);
        assert_eq!(o.gradient_geometry, GradientGeometry::Omit);
        assert_eq!(o.image_dir.as_deref(), Some("assets"));
    }

    #[test]
    fn rejects_unknown_gradient_mode() {
        assert!(Args::try_parse_from(["xamlforge", "--gradient-geometry", "guess"]).is_err());
    }
}
