use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use regionfind_core::{Color, Image, Point};
use regionfind_io::ImageFormat;
use regionfind_paint::{PaintOptions, PaintSession};
use regionfind_region::{
    ConnectivityType, RegionOptions, RegionSet, ScanOrder, find_regions, recolor,
    recolor_with_rng,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "regionfind")]
#[command(about = "Find and paint color regions in images")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find regions of one color in an image
    Regions {
        /// Input image (PNG or PPM)
        input: PathBuf,
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        region: RegionArgs,
        /// Write the image with every region recolored
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Seed for the recolor palette
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Replay a directory of frames and paint along the largest region
    Paint {
        /// Directory of frames, replayed in file name order
        frames: PathBuf,
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        region: RegionArgs,
        /// Brush color as R,G,B or #RRGGBB
        #[arg(long, default_value = "0,0,255")]
        paint_color: Color,
        /// Where to write the painting
        #[arg(short, long)]
        output: PathBuf,
        /// Also write the recolored view of the last frame
        #[arg(long)]
        recolored: Option<PathBuf>,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct TargetArgs {
    /// Target color as R,G,B or #RRGGBB
    #[arg(long)]
    target: Option<Color>,
    /// Take the target color from pixel X,Y of the (first) image
    #[arg(long)]
    pick: Option<Point>,
}

#[derive(Args)]
struct RegionArgs {
    /// Per-channel color threshold
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    threshold: i64,
    /// Regions must have more pixels than this
    #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
    min_size: i64,
    /// Pixel neighborhood
    #[arg(long, value_enum, default_value_t = Connectivity::Eight)]
    connectivity: Connectivity,
    /// Scan rows first instead of columns first
    #[arg(long)]
    row_major: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Connectivity {
    #[value(name = "4")]
    Four,
    #[value(name = "8")]
    Eight,
}

impl RegionArgs {
    fn options(&self) -> Result<RegionOptions, CliError> {
        let connectivity = match self.connectivity {
            Connectivity::Four => ConnectivityType::FourWay,
            Connectivity::Eight => ConnectivityType::EightWay,
        };
        let scan_order = if self.row_major {
            ScanOrder::RowMajor
        } else {
            ScanOrder::ColumnMajor
        };
        Ok(RegionOptions::from_signed(self.threshold, self.min_size)?
            .with_connectivity(connectivity)
            .with_scan_order(scan_order))
    }
}

impl TargetArgs {
    fn resolve(&self, image: &Image) -> Result<Color, CliError> {
        if let Some(color) = self.target {
            return Ok(color);
        }
        let p = self.pick.ok_or(CliError::NoTarget)?;
        image
            .get_color(p.x, p.y)
            .ok_or(CliError::PickOutside(p, image.width(), image.height()))
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] regionfind_io::IoError),
    #[error(transparent)]
    Region(#[from] regionfind_region::RegionError),
    #[error(transparent)]
    Paint(#[from] regionfind_paint::PaintError),
    #[error("cannot list {}: {}", .0.display(), .1)]
    Frames(PathBuf, std::io::Error),
    #[error("no frames found in {}", .0.display())]
    NoFrames(PathBuf),
    #[error("no target color given")]
    NoTarget,
    #[error("pick point {0} is outside the {1}x{2} image")]
    PickOutside(Point, u32, u32),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Regions {
            input,
            target,
            region,
            output,
            seed,
        } => run_regions(&input, &target, &region, output.as_deref(), seed),
        Commands::Paint {
            frames,
            target,
            region,
            paint_color,
            output,
            recolored,
        } => run_paint(
            &frames,
            &target,
            &region,
            paint_color,
            &output,
            recolored.as_deref(),
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_regions(
    input: &Path,
    target: &TargetArgs,
    region: &RegionArgs,
    output: Option<&Path>,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let options = region.options()?;
    let image = regionfind_io::read_image(input)?;
    let color = target.resolve(&image)?;
    log::info!(
        "{}: {}x{}, target {color}",
        input.display(),
        image.width(),
        image.height()
    );

    let regions = find_regions(&image, color, &options)?;
    print_summary(&regions);

    if let Some(path) = output {
        let recolored = match seed {
            Some(seed) => recolor_with_rng(&image, &regions, &mut StdRng::seed_from_u64(seed))?,
            None => recolor(&image, &regions)?,
        };
        regionfind_io::write_image(&recolored, path, ImageFormat::from_path(path)?)?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn print_summary(regions: &RegionSet) {
    println!("regions: {}", regions.len());
    match regions.largest() {
        Some(largest) => {
            let seed = largest.seed().map(|p| p.to_string()).unwrap_or_default();
            println!("largest: {} pixels, seeded at {seed}", largest.len());
        }
        None => println!("largest: none"),
    }
}

fn run_paint(
    frames_dir: &Path,
    target: &TargetArgs,
    region: &RegionArgs,
    paint_color: Color,
    output: &Path,
    recolored: Option<&Path>,
) -> Result<(), CliError> {
    let frames = list_frames(frames_dir)?;
    let first = frames
        .first()
        .ok_or_else(|| CliError::NoFrames(frames_dir.to_path_buf()))?;
    let first = regionfind_io::read_image(first)?;

    let options = PaintOptions::default()
        .with_paint_color(paint_color)
        .with_region_options(region.options()?);
    let mut session = PaintSession::new(first.width(), first.height(), options)?;
    session.set_target(target.resolve(&first)?);

    let mut painted = 0;
    for path in &frames {
        let frame = regionfind_io::read_image(path)?;
        let n = session.process_frame(frame)?;
        log::debug!("{}: painted {n} pixels", path.display());
        painted += n;
    }
    println!("frames: {}", frames.len());
    println!("painted: {painted} pixels");

    session.save_painting(output)?;
    if let Some(path) = recolored {
        session.save_recolored(path)?;
    }
    Ok(())
}

/// Image files in `dir`, sorted by name.
fn list_frames(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let entries =
        std::fs::read_dir(dir).map_err(|e| CliError::Frames(dir.to_path_buf(), e))?;
    let mut frames = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| CliError::Frames(dir.to_path_buf(), e))?
            .path();
        if path.is_file() && ImageFormat::from_path(&path).is_ok() {
            frames.push(path);
        }
    }
    frames.sort();
    Ok(frames)
}
