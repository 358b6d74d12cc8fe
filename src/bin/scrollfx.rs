use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scrollfx::{JsonLinesSurface, ReplayOpts, SceneConfig, ScrollScript};

#[derive(Parser, Debug)]
#[command(name = "scrollfx", version)]
struct Cli {
    /// Raise log verbosity (`-v` debug, `-vv` trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an input script against a scene and print every applied style as JSON lines.
    Simulate(SimulateArgs),
    /// Load and validate a scene file.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Scene JSON (viewport, elements, widgets).
    #[arg(long)]
    scene: PathBuf,

    /// Input script JSON (timestamped events).
    #[arg(long)]
    script: PathBuf,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Number of frames to run. Defaults to the script length plus one second.
    #[arg(long)]
    frames: Option<u64>,

    /// Output file. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Scene JSON to check.
    #[arg(long)]
    scene: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "scrollfx=warn",
        1 => "scrollfx=debug",
        _ => "scrollfx=trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    // Logs go to stderr so stdout stays valid JSON lines.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_scene(path: &Path) -> anyhow::Result<SceneConfig> {
    SceneConfig::from_path(path).with_context(|| format!("load scene '{}'", path.display()))
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let script = ScrollScript::from_path(&args.script)
        .with_context(|| format!("load script '{}'", args.script.display()))?;
    let opts = ReplayOpts {
        fps: args.fps,
        frames: args.frames,
    };

    let out: Box<dyn Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    let mut surface = JsonLinesSurface::new(out);
    let stats = scrollfx::replay(&scene, &script, opts, &mut surface).context("replay")?;
    surface.finish().context("write output")?;

    eprintln!(
        "simulated {} frames: {} events, {} callbacks, {} writes",
        stats.frames, stats.events, stats.callbacks, stats.writes
    );
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    scene
        .validate()
        .with_context(|| format!("validate scene '{}'", args.scene.display()))?;
    println!(
        "ok: {} elements, {} widgets",
        scene.elements.len(),
        scene.widgets.len()
    );
    Ok(())
}
