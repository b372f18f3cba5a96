// File: crates/koch-demo/src/config.rs
// Summary: Demo configuration from environment variables, overridable by positional args.
//
// | Variable       | Default      | Description                               |
// |----------------|--------------|-------------------------------------------|
// | `KOCH_DEPTHS`  | `0,1,2,3,4`  | Comma-separated depths to render (0..=6)  |
// | `KOCH_COLOR`   | theme colour | Snowflake colour as `#rrggbb`             |
// | `KOCH_FILL`    | `solid`      | `solid` or `stroke`                       |
// | `KOCH_FORMAT`  | `png`        | `png`, `svg` or `both`                    |
// | `KOCH_WIDTH`   | `800`        | Surface width in pixels                   |
// | `KOCH_HEIGHT`  | `600`        | Surface height in pixels                  |
// | `KOCH_THEME`   | `dark`       | `dark`, `light` or `winter`               |
// | `KOCH_OUT_DIR` | `target/out` | Output directory                          |
// | `KOCH_LOG`     | `info`       | tracing filter                            |

use anyhow::{Context, Result};
use koch_core::types::{HEIGHT, WIDTH};
use koch_core::{Depth, FillMode, Rgba};
use std::path::PathBuf;
use std::str::FromStr;

/// Image formats written per depth; the CSV of points is always written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
    Both,
}

impl OutputFormat {
    pub fn png(self) -> bool {
        matches!(self, OutputFormat::Png | OutputFormat::Both)
    }

    pub fn svg(self) -> bool {
        matches!(self, OutputFormat::Svg | OutputFormat::Both)
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "both" => Ok(OutputFormat::Both),
            other => anyhow::bail!("unknown output format '{other}' (png, svg, both)"),
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub depths: Vec<Depth>,
    pub color: Option<Rgba>,
    pub fill: FillMode,
    pub format: OutputFormat,
    pub width: i32,
    pub height: i32,
    pub theme: String,
    pub out_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Load from environment. Sizes fall back to defaults when unparseable;
    /// depth, colour and fill are user-facing and rejected when malformed.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            depths: parse_depths(&env_str("KOCH_DEPTHS", "0,1,2,3,4")).context("KOCH_DEPTHS")?,
            color: std::env::var("KOCH_COLOR")
                .ok()
                .map(|s| Rgba::from_hex(&s))
                .transpose()
                .context("KOCH_COLOR")?,
            fill: env_str("KOCH_FILL", "solid").parse::<FillMode>().context("KOCH_FILL")?,
            format: env_str("KOCH_FORMAT", "png")
                .parse::<OutputFormat>()
                .map_err(|e| e.context("KOCH_FORMAT"))?,
            width: env_parse("KOCH_WIDTH", WIDTH),
            height: env_parse("KOCH_HEIGHT", HEIGHT),
            theme: env_str("KOCH_THEME", "dark"),
            out_dir: PathBuf::from(env_str("KOCH_OUT_DIR", "target/out")),
            log_level: env_str("KOCH_LOG", "info"),
        })
    }

    /// `koch-demo [depths] [color]`
    pub fn apply_args<I: IntoIterator<Item = String>>(&mut self, args: I) -> Result<()> {
        let mut args = args.into_iter();
        if let Some(depths) = args.next() {
            self.depths = parse_depths(&depths).with_context(|| format!("depth argument '{depths}'"))?;
        }
        if let Some(color) = args.next() {
            self.color = Some(Rgba::from_hex(&color)?);
        }
        Ok(())
    }
}

/// Parse "2" or "0,1,3" into validated depths.
pub fn parse_depths(s: &str) -> Result<Vec<Depth>> {
    let depths = s
        .split(',')
        .filter(|t| !t.trim().is_empty())
        .map(|t| t.parse::<Depth>())
        .collect::<Result<Vec<_>, _>>()?;
    if depths.is_empty() {
        anyhow::bail!("no depths given");
    }
    Ok(depths)
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            depths: vec![Depth::ZERO],
            color: None,
            fill: FillMode::Solid,
            format: OutputFormat::Png,
            width: WIDTH,
            height: HEIGHT,
            theme: "dark".into(),
            out_dir: PathBuf::from("target/out"),
            log_level: "info".into(),
        }
    }

    #[test]
    fn parses_depth_lists() {
        let d = parse_depths("0, 2,5").unwrap();
        assert_eq!(d.iter().map(|d| d.get()).collect::<Vec<_>>(), vec![0, 2, 5]);
        assert!(parse_depths("1,9").is_err());
        assert!(parse_depths("1.5").is_err());
        assert!(parse_depths("").is_err());
    }

    #[test]
    fn parses_output_formats() {
        assert_eq!("SVG".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        let both: OutputFormat = "both".parse().unwrap();
        assert!(both.png() && both.svg());
        assert!(!OutputFormat::Png.svg());
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn args_override() {
        let mut cfg = base();
        cfg.apply_args(["3,4".to_string(), "#ff8800".to_string()]).unwrap();
        assert_eq!(cfg.depths.len(), 2);
        assert_eq!(cfg.color, Some(Rgba::new(0xff, 0x88, 0x00, 255)));

        let mut cfg = base();
        assert!(cfg.apply_args(["-1".to_string()]).is_err());
        assert!(cfg.apply_args(["2".to_string(), "blue".to_string()]).is_err());
    }
}
