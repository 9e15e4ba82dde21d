// ./src/main.rs
use bevy::app::App;
use bevy::log::{LogPlugin, Level, error, info, warn};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use trisite_voronoi::{
    DiagramSession,
    debug::visualization::{render_diagram, save_svg},
    io::{BatchReader, DiagramRecord, IoResult, files},
    math::{
        algorithms::ClipPolicy,
        geometry::voronoi::{DirectionStrategy, VoronoiConfig},
        types::Point2D,
    },
};

#[derive(Parser)]
#[command(version, about = "Voronoi diagrams of up to three sites", long_about = None)]
struct Opts {
    /// trace, debug, info, warn or error
    #[arg(long, global = true, default_value = "info")]
    log_level: Level,

    /// JSON file with a `VoronoiConfig`; missing fields keep their defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the diagram of up to three sites.
    Compute {
        /// Site as `X,Y`; repeat up to three times.
        #[arg(long = "site", value_parser = parse_site)]
        sites: Vec<Point2D>,
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
        #[arg(long, value_enum)]
        clip: Option<ClipArg>,
        /// Write the record here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Print the record as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Compute every block of a test batch into `block_NNN.txt`.
    Batch {
        file: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
        /// Also write `block_NNN.svg`.
        #[arg(long)]
        svg: bool,
    },
    /// Print a record file in canonical form.
    Normalize { file: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    HalfPlane,
    FarPointScore,
}

#[derive(Clone, Copy, ValueEnum)]
enum ClipArg {
    Exact,
    Extend,
}

impl From<StrategyArg> for DirectionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::HalfPlane => DirectionStrategy::HalfPlane,
            StrategyArg::FarPointScore => DirectionStrategy::FarPointScore,
        }
    }
}

impl From<ClipArg> for ClipPolicy {
    fn from(arg: ClipArg) -> Self {
        match arg {
            ClipArg::Exact => ClipPolicy::Exact,
            ClipArg::Extend => ClipPolicy::Extend,
        }
    }
}

fn parse_site(s: &str) -> Result<Point2D, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("invalid x '{}': {}", x, e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("invalid y '{}': {}", y, e))?;
    let point = Point2D::new(x, y);
    if point.is_finite() {
        Ok(point)
    } else {
        Err(format!("site '{}' is not finite", s))
    }
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    // Der Subscriber wird beim Hinzufügen des Plugins global installiert.
    App::new().add_plugins(LogPlugin {
        level: opts.log_level,
        ..Default::default()
    });

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(opts: Opts) -> IoResult<()> {
    let config = match &opts.config {
        Some(path) => serde_json::from_str::<VoronoiConfig>(&files::read_text(path)?)?,
        None => VoronoiConfig::default(),
    };

    match opts.command {
        Command::Compute {
            sites,
            width,
            height,
            strategy,
            clip,
            output,
            svg,
            json,
        } => {
            let width = width.unwrap_or(config.viewport_width);
            let height = height.unwrap_or(config.viewport_height);
            let mut config = config.with_viewport(width, height);
            if let Some(strategy) = strategy {
                config = config.with_direction_strategy(strategy.into());
            }
            if let Some(clip) = clip {
                config = config.with_clip_policy(clip.into());
            }

            let mut session = DiagramSession::new(config)?;
            session.set_sites(&sites)?;
            let record = session.record();
            let text = if json {
                serde_json::to_string_pretty(&record)? + "\n"
            } else {
                record.to_text()
            };
            match output {
                Some(path) => files::write_text(&path, &text)?,
                None => print!("{}", text),
            }
            if let Some(path) = svg {
                save_svg(&path, &render_diagram(&session.compute()))?;
            }
            Ok(())
        }
        Command::Batch { file, out_dir, svg } => run_batch(config, &file, &out_dir, svg),
        Command::Normalize { file } => {
            let parsed = DiagramRecord::parse(&files::read_text(&file)?);
            for diagnostic in &parsed.diagnostics {
                warn!("{}: {}", file.display(), diagnostic);
            }
            print!("{}", parsed.record);
            Ok(())
        }
    }
}

fn run_batch(config: VoronoiConfig, file: &Path, out_dir: &Path, svg: bool) -> IoResult<()> {
    let batch = BatchReader::parse(&files::read_text(file)?);
    if !batch.terminated {
        warn!("'{}' has no terminating 0 line", file.display());
    }
    files::create_dir_all(out_dir)?;

    let mut session = DiagramSession::new(config)?;
    for (index, block) in batch.blocks.iter().enumerate() {
        let stem = format!("block_{:03}", index + 1);
        session.load_batch_block(block)?;
        session.save_record_file(&out_dir.join(format!("{stem}.txt")))?;
        if svg {
            save_svg(
                &out_dir.join(format!("{stem}.svg")),
                &render_diagram(&session.compute()),
            )?;
        }
    }

    info!(
        "{} blocks written to '{}', {} input lines skipped",
        batch.blocks.len(),
        out_dir.display(),
        batch.diagnostics.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_site() {
        assert_eq!(parse_site("1.5, -2").unwrap(), Point2D::new(1.5, -2.0));
        assert!(parse_site("1.5").is_err());
        assert!(parse_site("a,2").is_err());
        assert!(parse_site("inf,2").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Opts::command().debug_assert();
    }

    #[test]
    fn test_compute_arguments() {
        let opts = Opts::try_parse_from([
            "trisite-voronoi",
            "compute",
            "--site",
            "0,0",
            "--site",
            "10,0",
            "--strategy",
            "far-point-score",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(opts.log_level, Level::DEBUG);
        let Command::Compute { sites, strategy, .. } = opts.command else {
            panic!("expected compute");
        };
        assert_eq!(sites.len(), 2);
        assert!(matches!(strategy, Some(StrategyArg::FarPointScore)));
    }
}
