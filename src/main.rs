use anyhow::{Context, Result};
use clap::Parser;
use shoal_core::config::AppConfig;
use shoal_core::init_logging;
use shoal_lib::app::{
    spawn_stdin_controller, App, InputEvent, JsonLinesRenderer, Renderer, Scheduler,
    ShutdownManager, TraceRenderer,
};
use std::io::{self, BufWriter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path (created with defaults if missing)
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Seed for the initial flock; overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Frames per second; 0 runs as fast as possible
    #[arg(long)]
    fps: Option<u64>,

    /// Fixed pointer position as X,Y
    #[arg(long, value_parser = parse_pointer)]
    pointer: Option<(f64, f64)>,

    #[arg(long, value_parser = parse_finite)]
    base_speed: Option<f64>,

    #[arg(long, value_parser = parse_finite)]
    max_speed: Option<f64>,

    #[arg(long, value_parser = parse_finite)]
    orbit_distance: Option<f64>,

    /// How frames are consumed
    #[arg(short, long, value_enum, default_value = "trace")]
    output: Output,

    /// Emit every Nth frame
    #[arg(long, default_value_t = 1)]
    stride: u64,

    /// Read pointer/slider commands from stdin
    #[arg(short, long)]
    interactive: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Output {
    Trace,
    Json,
}

/// NaN or infinity would corrupt every agent it reaches, so reject them here.
fn parse_finite(raw: &str) -> Result<f64, String> {
    let value = raw.trim().parse::<f64>().map_err(|e| e.to_string())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("`{}` is not a finite number", raw.trim()))
    }
}

fn parse_pointer(raw: &str) -> Result<(f64, f64), String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got `{raw}`"))?;
    Ok((parse_finite(x)?, parse_finite(y)?))
}

impl Args {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(seed) = self.seed {
            config.world.seed = Some(seed);
        }
        if let Some(ticks) = self.ticks {
            config.scheduler.max_ticks = Some(ticks);
        }
        if let Some(fps) = self.fps {
            config.scheduler.target_fps = fps;
        }
        if let Some(v) = self.base_speed {
            config.params.base_speed = v;
        }
        if let Some(v) = self.max_speed {
            config.params.max_speed = v;
        }
        if let Some(v) = self.orbit_distance {
            config.params.orbit_distance = v;
        }
        config.params = config.params.clamped();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = AppConfig::load_or_create(&args.config)
        .with_context(|| format!("loading {}", args.config))?;
    args.apply_overrides(&mut config);

    let scheduler = {
        let shutdown = ShutdownManager::new();
        shutdown.install_ctrl_c_handler();
        Scheduler::new(
            config.scheduler.target_fps,
            config.scheduler.max_ticks,
            shutdown,
        )
    };

    let mut app = App::new(config)?;
    tracing::info!(
        agents = app.world.agents.len(),
        followers = app.world.follower_count(),
        "Flock ready"
    );

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    if let Some((x, y)) = args.pointer {
        tx.send(InputEvent::PointerMoved { x, y })?;
    }
    if args.interactive {
        spawn_stdin_controller(tx);
    } else {
        drop(tx);
    }

    let mut renderer: Box<dyn Renderer> = match args.output {
        Output::Trace => Box::new(TraceRenderer::new(args.stride)),
        Output::Json => Box::new(JsonLinesRenderer::new(
            BufWriter::new(io::stdout().lock()),
            args.stride,
        )),
    };

    let summary = scheduler.run(&mut app, &mut rx, renderer.as_mut()).await?;
    tracing::info!(
        ticks = summary.ticks,
        reason = ?summary.reason,
        elapsed_ms = app.metrics.elapsed().as_millis() as u64,
        "Exited clean"
    );

    Ok(())
}
