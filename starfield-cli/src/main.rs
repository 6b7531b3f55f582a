use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::FieldConfig;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod canvas;
mod smoke;
mod view_app;

#[derive(Parser)]
#[command(name = "starfield")]
#[command(about = "Starfield - a parallax flying-through-space effect", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive the frame loop headless and report particle counts
    Run {
        #[command(flatten)]
        field: FieldArgs,
        /// Simulated run length in seconds
        #[arg(long, default_value_t = 5.0)]
        seconds: f64,
        /// Simulated display refresh rate
        #[arg(long, default_value_t = 60.0)]
        fps: f64,
        /// Logical surface width
        #[arg(long, default_value_t = 800.0)]
        width: f32,
        /// Logical surface height
        #[arg(long, default_value_t = 600.0)]
        height: f32,
    },
    /// Open a window and render the starfield
    View {
        #[command(flatten)]
        field: FieldArgs,
    },
}

#[derive(Args, Clone, Copy)]
struct FieldArgs {
    /// Maximum number of live stars
    #[arg(long, default_value_t = starfield_core::config::DEFAULT_MAX_STARS)]
    max_stars: usize,
    /// Depth past which stars are culled
    #[arg(long, default_value_t = starfield_core::config::DEFAULT_MAX_DISTANCE)]
    max_distance: f32,
    /// Minimum milliseconds between simulation ticks
    #[arg(long, default_value_t = 25)]
    tick_interval_ms: u64,
    /// Seed for a reproducible field
    #[arg(long)]
    seed: Option<u64>,
}

impl FieldArgs {
    fn config(&self) -> FieldConfig {
        FieldConfig {
            max_distance: self.max_distance,
            max_stars: self.max_stars,
            tick_interval: Duration::from_millis(self.tick_interval_ms),
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            field,
            seconds,
            fps,
            width,
            height,
        } => smoke::run(field.config(), field.rng(), seconds, fps, width, height).map(|_| ()),
        Commands::View { field } => view_app::run(field.config(), field.rng()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
