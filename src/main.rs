use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use pythagoras_explorer::logging::{LogConfig, init_logging};
use pythagoras_explorer::{
    Camera, ExplorerConfig, IterationCache, Point, PpmFilePresenter, PythagorasColourMapKinds,
    PythagorasGenerator, RasterOptions, SnapshotController,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColourMapArg {
    Classic,
    Gradient,
}

impl From<ColourMapArg> for PythagorasColourMapKinds {
    fn from(arg: ColourMapArg) -> Self {
        match arg {
            ColourMapArg::Classic => Self::Classic,
            ColourMapArg::Gradient => Self::Gradient,
        }
    }
}

/// Render one view of the Pythagoras tree to a PPM image.
#[derive(Debug, Parser)]
#[command(name = "pythagoras-explorer", version, about)]
struct Cli {
    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Half the visible height in world units. Smaller values zoom in.
    #[arg(long)]
    scale: Option<f64>,

    /// World x coordinate at the centre of the image.
    #[arg(long, allow_hyphen_values = true)]
    center_x: Option<f64>,

    /// World y coordinate at the centre of the image.
    #[arg(long, allow_hyphen_values = true)]
    center_y: Option<f64>,

    #[arg(short, long, default_value = "output/pythagoras.ppm")]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = ColourMapArg::Classic)]
    colour_map: ColourMapArg,

    /// Also fill the triangle between each pair of squares.
    #[arg(long)]
    triangles: bool,

    /// More output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Warnings and errors only.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_flags(cli.verbose, cli.quiet))
        .context("failed to initialise logging")?;

    let config = ExplorerConfig {
        colour_map: cli.colour_map.into(),
        initial_scale: cli.scale.unwrap_or(ExplorerConfig::default().initial_scale),
        ..ExplorerConfig::default()
    };
    config.validate().context("invalid configuration")?;

    let focus = Point::new(
        cli.center_x.unwrap_or(config.base_size / 2.0),
        cli.center_y.unwrap_or(config.base_size * 2.0),
    );
    let mut camera = Camera::new(cli.width, cli.height, config.initial_scale, config.camera_limits);
    camera.set_center(Point::default() - focus);

    let cache = Arc::new(IterationCache::new(PythagorasGenerator, config.base_size));
    let mut controller = SnapshotController::new(PpmFilePresenter::new(), cache, config);

    controller
        .render(
            &camera,
            RasterOptions {
                include_triangles: cli.triangles,
            },
        )
        .context("failed to render snapshot")?;
    controller
        .write(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_centre_and_colour_map() {
        let cli = Cli::try_parse_from([
            "pythagoras-explorer",
            "--center-x",
            "-2500",
            "--colour-map",
            "gradient",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.center_x, Some(-2500.0));
        assert_eq!(cli.colour_map, ColourMapArg::Gradient);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.width, 800);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["pythagoras-explorer", "-q", "-v"]).is_err());
    }
}
