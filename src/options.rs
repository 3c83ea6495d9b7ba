//! Chart configuration.
//!
//! Every field has a default, so an options file only needs to name what it
//! changes:
//!
//! ```toml
//! title = "Sliding Puzzle Solvability Timing"
//! log_scale_y = true
//! x_tick_stride = 10
//! marker = "o"
//! ```

use std::{fs, path::Path, path::PathBuf, str::FromStr};

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    #[serde(alias = "o")]
    Circle,
    #[serde(alias = "x")]
    Cross,
    #[serde(alias = "^")]
    Triangle,
    None,
}

impl FromStr for MarkerStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "o" | "circle" => Ok(MarkerStyle::Circle),
            "x" | "cross" => Ok(MarkerStyle::Cross),
            "^" | "triangle" => Ok(MarkerStyle::Triangle),
            "" | "none" => Ok(MarkerStyle::None),
            other => Err(Error::Config(format!("{} is not a valid marker", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineColor {
    #[serde(alias = "b")]
    Blue,
    #[serde(alias = "k")]
    Black,
    #[serde(alias = "r")]
    Red,
    #[serde(alias = "g")]
    Green,
    Orange,
}

impl FromStr for LineColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "blue" => Ok(LineColor::Blue),
            "k" | "black" => Ok(LineColor::Black),
            "r" | "red" => Ok(LineColor::Red),
            "g" | "green" => Ok(LineColor::Green),
            "orange" => Ok(LineColor::Orange),
            other => Err(Error::Config(format!("{} is not a valid color", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Legend entry of the single series.
    pub series_label: String,
    pub log_scale_y: bool,
    /// Label every Nth sample on the X axis.
    pub x_tick_stride: usize,
    pub rotate_x_labels: bool,
    pub marker: MarkerStyle,
    pub color: LineColor,
    pub grid: bool,
    pub output_path: PathBuf,
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            title: "Solve Time by Puzzle Size".to_string(),
            x_label: "Puzzle Size (n)".to_string(),
            y_label: "Time".to_string(),
            series_label: "Solve time".to_string(),
            log_scale_y: false,
            x_tick_stride: 1,
            rotate_x_labels: false,
            marker: MarkerStyle::Circle,
            color: LineColor::Blue,
            grid: true,
            output_path: PathBuf::from("timing_graph.png"),
        }
    }
}

impl ChartOptions {
    /// Average SAT-based solvability check time per dimension.
    pub fn sat_timing() -> Self {
        ChartOptions {
            title: "Sliding Puzzle Solvability Timing".to_string(),
            x_label: "Puzzle Dimension".to_string(),
            y_label: "Average Time (ms)".to_string(),
            series_label: "Average Time".to_string(),
            x_tick_stride: 10,
            rotate_x_labels: true,
            output_path: PathBuf::from("timing_graph.png"),
            ..Default::default()
        }
    }

    /// Non-deterministic solver run time per puzzle size.
    pub fn taquin_times() -> Self {
        ChartOptions {
            title: "Temps de Résolution du Taquin en Fonction de la Taille".to_string(),
            x_label: "Taille du Taquin (n)".to_string(),
            y_label: "Temps de Résolution (secondes)".to_string(),
            series_label: "Temps de résolution".to_string(),
            output_path: PathBuf::from("taquin_resolution_time_graph_non_deterministe.png"),
            ..Default::default()
        }
    }

    /// IDA* run time per puzzle size; spans many orders of magnitude.
    pub fn ida_star() -> Self {
        ChartOptions {
            log_scale_y: true,
            color: LineColor::Black,
            output_path: PathBuf::from("ida_star_resolution_time.png"),
            ..Self::taquin_times()
        }
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        let options: ChartOptions =
            toml::from_str(input).map_err(|err| Error::Config(err.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        Self::from_toml_str(&input)
    }

    pub fn validate(&self) -> Result<()> {
        if self.x_tick_stride == 0 {
            return Err(Error::Config("x_tick_stride must be at least 1".to_string()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::Config("output_path must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(ChartOptions::from_toml_str("").unwrap(), ChartOptions::default());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let options = ChartOptions::from_toml_str(
            r#"
            title = "Custom"
            log_scale_y = true
            x_tick_stride = 5
            marker = "^"
            color = "k"
            output_path = "out/custom.svg"
            "#,
        )
        .unwrap();
        assert_eq!(options.title, "Custom");
        assert!(options.log_scale_y);
        assert_eq!(options.x_tick_stride, 5);
        assert_eq!(options.marker, MarkerStyle::Triangle);
        assert_eq!(options.color, LineColor::Black);
        assert_eq!(options.output_path, PathBuf::from("out/custom.svg"));
        assert_eq!(options.x_label, ChartOptions::default().x_label);
    }

    #[test]
    fn rejects_zero_stride_and_unknown_keys() {
        assert!(matches!(
            ChartOptions::from_toml_str("x_tick_stride = 0"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ChartOptions::from_toml_str("figsize = [10, 6]"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn presets() {
        let sat = ChartOptions::sat_timing();
        assert_eq!(sat.x_tick_stride, 10);
        assert!(sat.rotate_x_labels);
        assert!(!sat.log_scale_y);

        let ida = ChartOptions::ida_star();
        assert!(ida.log_scale_y);
        assert_eq!(ida.color, LineColor::Black);
        assert_eq!(ida.title, ChartOptions::taquin_times().title);
    }

    #[test]
    fn marker_and_color_names() {
        assert_eq!("o".parse::<MarkerStyle>().unwrap(), MarkerStyle::Circle);
        assert_eq!("none".parse::<MarkerStyle>().unwrap(), MarkerStyle::None);
        assert!("*".parse::<MarkerStyle>().is_err());
        assert_eq!("Blue".parse::<LineColor>().unwrap(), LineColor::Blue);
        assert!("purple".parse::<LineColor>().is_err());
    }
}
