use std::path::PathBuf;

use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::error::Result;
use crate::options::{ChartOptions, LineColor, MarkerStyle};
use crate::parse::InputFormat;

#[derive(Debug)]
pub struct CliArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub format: Option<InputFormat>,
    pub config: Option<PathBuf>,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub series_label: Option<String>,
    pub log_y: bool,
    pub stride: Option<usize>,
    pub marker: Option<MarkerStyle>,
    pub color: Option<LineColor>,
    pub rotate_x_labels: bool,
    pub no_grid: bool,
    pub flamegraph: Option<PathBuf>,
}

pub fn command() -> Command {
    command!("timing-plot")
        .version("1.0")
        .about("Plots puzzle solve times from a timing file. Give the input file as first argument, the output image as second argument.")
        .arg(
            Arg::new("input")
                .help("Timing file to read")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Image to write (.png or .svg). Defaults to <input stem>_plot.png")
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .index(2),
        )
        .arg(
            Arg::new("format")
                .help("Input layout; guessed from the file extension when omitted")
                .long("format")
                .short('F')
                .value_parser(["csv", "whitespace"]),
        )
        .arg(
            Arg::new("config")
                .help("TOML file with chart options")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(Arg::new("title").help("Chart title").long("title").short('t'))
        .arg(Arg::new("x_label").help("X axis description").long("x-label"))
        .arg(Arg::new("y_label").help("Y axis description").long("y-label"))
        .arg(Arg::new("label").help("Legend entry of the series").long("label"))
        .arg(
            Arg::new("log_y")
                .help("Use a logarithmic Y axis")
                .long("log-y")
                .short('l')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stride")
                .help("Label every Nth sample on the X axis")
                .long("stride")
                .short('s')
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("marker")
                .help("Point marker: o, x, ^ or none")
                .long("marker")
                .short('m'),
        )
        .arg(Arg::new("color").help("Line color").long("color"))
        .arg(
            Arg::new("rotate_x_labels")
                .help("Rotate X axis labels")
                .long("rotate-x-labels")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no_grid")
                .help("Do not draw grid lines")
                .long("no-grid")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("flamegraph")
                .help("Write a flamegraph of the load and render steps to this HTML file")
                .long("flamegraph")
                .short('f')
                .value_parser(value_parser!(PathBuf)),
        )
}

pub fn cli() -> Result<CliArgs> {
    from_matches(&command().get_matches())
}

pub fn from_matches(arguments: &ArgMatches) -> Result<CliArgs> {
    let text = |id: &str| arguments.get_one::<String>(id).cloned();
    let path = |id: &str| arguments.get_one::<PathBuf>(id).cloned();

    Ok(CliArgs {
        // clap has already rejected a missing input
        input: path("input").unwrap_or_default(),
        output: path("output"),
        format: text("format").map(|f| f.parse::<InputFormat>()).transpose()?,
        config: path("config"),
        title: text("title"),
        x_label: text("x_label"),
        y_label: text("y_label"),
        series_label: text("label"),
        log_y: arguments.get_flag("log_y"),
        stride: arguments.get_one::<usize>("stride").copied(),
        marker: text("marker").map(|m| m.parse::<MarkerStyle>()).transpose()?,
        color: text("color").map(|c| c.parse::<LineColor>()).transpose()?,
        rotate_x_labels: arguments.get_flag("rotate_x_labels"),
        no_grid: arguments.get_flag("no_grid"),
        flamegraph: path("flamegraph"),
    })
}

impl CliArgs {
    pub fn input_format(&self) -> InputFormat {
        self.format.unwrap_or_else(|| InputFormat::from_path(&self.input))
    }

    /// Flags win over the config file, which wins over the defaults.
    pub fn chart_options(&self) -> Result<ChartOptions> {
        let mut options = match &self.config {
            Some(path) => ChartOptions::load(path)?,
            None => ChartOptions {
                output_path: self.default_output(),
                ..Default::default()
            },
        };

        if let Some(output) = &self.output {
            options.output_path = output.clone();
        }
        if let Some(title) = &self.title {
            options.title = title.clone();
        }
        if let Some(x_label) = &self.x_label {
            options.x_label = x_label.clone();
        }
        if let Some(y_label) = &self.y_label {
            options.y_label = y_label.clone();
        }
        if let Some(series_label) = &self.series_label {
            options.series_label = series_label.clone();
        }
        if let Some(stride) = self.stride {
            options.x_tick_stride = stride;
        }
        if let Some(marker) = self.marker {
            options.marker = marker;
        }
        if let Some(color) = self.color {
            options.color = color;
        }
        options.log_scale_y |= self.log_y;
        options.rotate_x_labels |= self.rotate_x_labels;
        options.grid &= !self.no_grid;

        options.validate()?;
        Ok(options)
    }

    fn default_output(&self) -> PathBuf {
        let stem = self
            .input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("timing");
        PathBuf::from(format!("{}_plot.png", stem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn parse(args: &[&str]) -> CliArgs {
        let matches = command().try_get_matches_from(args).unwrap();
        from_matches(&matches).unwrap()
    }

    #[test]
    fn input_only_uses_defaults() {
        let arguments = parse(&["timing-plot", "results/execution_times.txt"]);
        assert_eq!(arguments.input_format(), InputFormat::Whitespace);

        let options = arguments.chart_options().unwrap();
        assert_eq!(options.output_path, PathBuf::from("execution_times_plot.png"));
        assert_eq!(options.x_tick_stride, 1);
        assert!(!options.log_scale_y);
        assert!(options.grid);
    }

    #[test]
    fn flags_override_defaults() {
        let arguments = parse(&[
            "timing-plot",
            "timing_results.txt",
            "out.svg",
            "--format",
            "csv",
            "--title",
            "SAT",
            "--log-y",
            "--stride",
            "10",
            "--marker",
            "x",
            "--color",
            "red",
            "--no-grid",
        ]);
        assert_eq!(arguments.input_format(), InputFormat::HeaderedCsv);

        let options = arguments.chart_options().unwrap();
        assert_eq!(options.output_path, PathBuf::from("out.svg"));
        assert_eq!(options.title, "SAT");
        assert!(options.log_scale_y);
        assert_eq!(options.x_tick_stride, 10);
        assert_eq!(options.marker, MarkerStyle::Cross);
        assert_eq!(options.color, LineColor::Red);
        assert!(!options.grid);
    }

    #[test]
    fn bad_marker_is_a_config_error() {
        let matches = command()
            .try_get_matches_from(["timing-plot", "in.txt", "--marker", "*"])
            .unwrap();
        assert!(matches!(from_matches(&matches), Err(Error::Config(_))));
    }

    #[test]
    fn zero_stride_is_rejected() {
        let arguments = parse(&["timing-plot", "in.txt", "--stride", "0"]);
        assert!(matches!(arguments.chart_options(), Err(Error::Config(_))));
    }

    #[test]
    fn input_is_required() {
        assert!(command().try_get_matches_from(["timing-plot"]).is_err());
    }
}
