use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexalign::{
    timed, BoundaryCell, GridConfig, HexGrid, Orientation, OverlayRenderer,
    RadiusKind, RenderConfig, WorldPosition,
};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::{clap::AppSettings, StructOpt};
use strum::{Display, EnumString};

/// CLI for snapping positions onto a hex grid and finding open cells around
/// groups of placed objects.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexalign")]
struct Opt {
    /// Path to a config file that defines the grid. Supported formats: JSON,
    /// TOML. Any field left out of the file gets its default value.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Override the cell radius from the config file
    #[structopt(long)]
    radius: Option<f64>,

    /// Override what the radius measures from the config file. Options: outer,
    /// inner
    #[structopt(long)]
    radius_kind: Option<RadiusKind>,

    /// Override the cell orientation from the config file. Options: flat_top,
    /// pointy_top
    #[structopt(long)]
    orientation: Option<Orientation>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Snap a single world position to the center of the cell that contains
    /// it
    #[structopt(setting = AppSettings::AllowNegativeNumbers)]
    Snap { x: f64, y: f64, z: f64 },

    /// Find the empty cells bordering a group of placed objects
    Boundary {
        /// Path to a JSON file holding a list of object positions, e.g.
        /// `[{"x": 0.0, "y": 0.0, "z": 0.0}]`
        #[structopt(short, long)]
        input: PathBuf,

        /// If given, the boundary will be saved to this directory. The exact
        /// files that appear in the directory are defined by the output
        /// formats. See `--output-formats` for more info. If not given, a
        /// summary of the boundary is printed instead.
        #[structopt(short, long)]
        output: Option<PathBuf>,

        /// The format(s) to output the boundary in. Supported formats:
        ///
        /// cfg - The full grid config used, in TOML format
        ///
        /// json - Every boundary cell, with its center and outline
        ///
        /// svg - 2D top-down rendering of the boundary outlines
        #[structopt(short = "f", long)]
        output_formats: Vec<OutputFormat>,

        /// Only draw the outline of each cell, without spokes from the center
        /// to each vertex. Only relevant for rendered output formats, such as
        /// SVG.
        #[structopt(long)]
        hide_spokes: bool,
    },
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for
    // `--output-formats`!
    /// Export the grid config in a human-readable file
    Cfg,
    /// Export the boundary cells in a serialized JSON format
    Json,
    /// Render the boundary as a 2D SVG
    Svg,
}

impl OutputFormat {
    fn file_name(self) -> &'static str {
        match self {
            Self::Cfg => "grid",
            Self::Json | Self::Svg => "boundary",
        }
    }

    fn file_ext(self) -> &'static str {
        match self {
            Self::Cfg => "toml",
            Self::Json => "json",
            Self::Svg => "svg",
        }
    }
}

/// Load the grid config from a file, or use the default if there's no file.
/// Command line overrides are applied on top either way.
fn load_config(opt: &Opt) -> anyhow::Result<GridConfig> {
    let mut config: GridConfig = match &opt.config {
        Some(config_path) => {
            let mut settings = Config::new();
            let config_path = config_path.to_str().ok_or_else(|| {
                anyhow!("invalid character in path {:?}", config_path)
            })?;
            settings
                .merge(File::with_name(config_path))
                .context("error reading config file")?;
            settings.try_into().context("error reading config")?
        }
        None => GridConfig::default(),
    };

    if let Some(radius) = opt.radius {
        config.radius = radius;
    }
    if let Some(radius_kind) = opt.radius_kind {
        config.radius_kind = radius_kind;
    }
    if let Some(orientation) = opt.orientation {
        config.orientation = orientation;
    }
    Ok(config)
}

fn load_positions(input_path: &Path) -> anyhow::Result<Vec<WorldPosition>> {
    let file = OpenOptions::new()
        .read(true)
        .open(input_path)
        .with_context(|| format!("error opening input file {:?}", input_path))?;
    let positions: Vec<WorldPosition> = serde_json::from_reader(file)
        .with_context(|| {
            format!("error reading positions from {:?}", input_path)
        })?;
    if let Some(position) = positions.iter().find(|pos| !pos.is_finite()) {
        bail!("invalid position {} in {:?}", position, input_path);
    }
    info!("Loaded {} positions from {:?}", positions.len(), input_path);
    Ok(positions)
}

/// Generate an output form of the boundary in the given format.
fn gen_output(
    output_dir: &Path,
    output_format: OutputFormat,
    grid: &HexGrid,
    cells: &[BoundaryCell],
    renderer: &OverlayRenderer,
) -> anyhow::Result<()> {
    fn generate_bytes(
        output_format: OutputFormat,
        grid: &HexGrid,
        cells: &[BoundaryCell],
        renderer: &OverlayRenderer,
    ) -> anyhow::Result<Vec<u8>> {
        let bytes = match output_format {
            OutputFormat::Cfg => {
                // Serialize just the grid config via toml
                toml::to_string_pretty(grid.config())
                    .context("error serializing config")?
                    .into_bytes()
            }
            OutputFormat::Json => {
                // Serialize every cell via JSON
                serde_json::to_string_pretty(cells)
                    .context("error serializing boundary")?
                    .into_bytes()
            }
            OutputFormat::Svg => {
                // Render the outlines in 2D
                renderer.render_as_svg(cells).into_bytes()
            }
        };
        Ok(bytes)
    }

    let output_file_path = output_dir
        .join(output_format.file_name())
        .with_extension(output_format.file_ext());

    timed!(
        format!(
            "Generating {} output and writing to {:?}",
            output_format, &output_file_path
        ),
        log::Level::Info,
        {
            let bytes = generate_bytes(output_format, grid, cells, renderer)?;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&output_file_path)
                .with_context(|| {
                    format!("error opening output file {:?}", &output_file_path)
                })?;
            file.write_all(&bytes).with_context(|| {
                format!("error writing to file {:?}", &output_file_path)
            })?;
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let grid = HexGrid::new(load_config(&opt)?)?;
    info!("Using grid config {:?}", grid.config());

    match opt.command {
        Command::Snap { x, y, z } => {
            let position = WorldPosition::new(x, y, z);
            if !position.is_finite() {
                bail!("invalid position {}", position);
            }
            let point = grid.world_to_axial(position);
            println!("{} {}", point, grid.snap(position));
        }
        Command::Boundary {
            input,
            output,
            output_formats,
            hide_spokes,
        } => {
            let positions = load_positions(&input)?;
            let cells = grid.empty_boundary(positions);
            info!("Found {} empty boundary cells", cells.len());

            match output {
                // If an output dir was specified, write out output format(s)
                // there
                Some(output_dir) => {
                    if output_formats.is_empty() {
                        bail!(
                            "output dir was specified, but no output formats \
                            were given"
                        )
                    }
                    fs::create_dir_all(&output_dir)?;

                    let renderer = OverlayRenderer::new(RenderConfig {
                        show_spokes: !hide_spokes,
                        ..Default::default()
                    })?;
                    for output_format in output_formats {
                        gen_output(
                            &output_dir,
                            output_format,
                            &grid,
                            &cells,
                            &renderer,
                        )?;
                    }
                }
                None => {
                    for cell in &cells {
                        println!("{} {}", cell.point, cell.center);
                    }
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
