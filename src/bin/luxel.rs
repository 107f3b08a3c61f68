use std::{fs, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::{rngs::SmallRng, RngCore, SeedableRng};

use luxel::{
    BusEvent, Cube, DisplayDriver, EffectConfig, Engine, Policy, RecordingBus, Rotation, Show, SIZE,
};

#[derive(Parser, Debug)]
#[command(name = "luxel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a show JSON file.
    Check(CheckArgs),
    /// Run a show against an in-memory bus and report what it emitted.
    Simulate(SimulateArgs),
    /// Print a starter show JSON to stdout.
    Init,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input show JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input show JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of loop iterations to run.
    #[arg(long, default_value_t = 100)]
    ticks: u64,

    /// Simulated milliseconds between loop iterations.
    #[arg(long, default_value_t = 10)]
    tick_ms: u64,

    /// Random seed; overrides the show's own seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Print every frame's layers as ASCII art.
    #[arg(long)]
    dump_frames: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Init => cmd_init(),
    }
}

fn read_show(path: &PathBuf) -> anyhow::Result<Show> {
    let json =
        fs::read_to_string(path).with_context(|| format!("open show '{}'", path.display()))?;
    let show = Show::from_json(&json)?;
    show.validate()?;
    Ok(show)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let show = read_show(&args.in_path)?;
    eprintln!(
        "ok: {} effects, {:?} rotation every {}ms",
        show.effects.len(),
        show.rotation.policy,
        show.rotation.interval_ms
    );
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let show = read_show(&args.in_path)?;

    let mut rng: SmallRng = match args.seed.or(show.seed) {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::seed_from_u64(rand::rngs::OsRng.next_u64()),
    };

    let scheduler = show.build_scheduler();
    let driver = DisplayDriver::new(RecordingBus::new());
    let mut engine = Engine::new(scheduler, driver);
    engine.start(&mut rng);

    let mut frames = 0u64;
    for tick in 0..args.ticks {
        let now_ms = tick * args.tick_ms;
        engine.tick(now_ms, &mut rng);
        frames += 1;

        if args.dump_frames {
            println!("tick {tick} (t={now_ms}ms, {} lit)", engine.cube().count_lit());
            print_cube(engine.cube());
        }

        let bytes = engine.driver_mut().bus().bytes().len();
        anyhow::ensure!(
            bytes == SIZE * (SIZE + 1),
            "driver emitted {bytes} bytes for one frame, expected {}",
            SIZE * (SIZE + 1)
        );
        count_brackets(engine.driver_mut().bus())?;
        // Keep the recording from growing unboundedly over long runs.
        engine.driver_mut().bus_mut().reset();
    }

    eprintln!(
        "simulated {frames} frames, final effect #{}, {} voxels lit",
        engine.scheduler().index(),
        engine.cube().count_lit()
    );
    Ok(())
}

fn count_brackets(bus: &RecordingBus) -> anyhow::Result<()> {
    let selects = bus
        .events()
        .iter()
        .filter(|e| matches!(e, BusEvent::Select))
        .count();
    let deselects = bus
        .events()
        .iter()
        .filter(|e| matches!(e, BusEvent::Deselect))
        .count();
    anyhow::ensure!(
        selects == SIZE && deselects == SIZE,
        "expected {SIZE} select/deselect pairs, saw {selects}/{deselects}"
    );
    Ok(())
}

fn print_cube(cube: &Cube) {
    for z in 0..SIZE {
        println!("  z={z}");
        for y in (0..SIZE).rev() {
            let row: String = (0..SIZE)
                .map(|x| if cube.get(x, y, z) { '#' } else { '.' })
                .collect();
            println!("    {row}");
        }
    }
}

fn cmd_init() -> anyhow::Result<()> {
    let show = Show {
        seed: Some(42),
        rotation: Rotation {
            interval_ms: 10_000,
            policy: Policy::Sequential,
        },
        effects: vec![
            EffectConfig::Rain {
                interval_ms: 100,
                max_droplets: 5,
                plane: "-z".parse()?,
            },
            EffectConfig::SendVoxels {
                interval_ms: 50,
                axis: luxel::Axis::Z,
            },
            EffectConfig::Explorer { interval_ms: 100 },
            EffectConfig::PlaneBoing { interval_ms: 100 },
            EffectConfig::FullyOn,
            EffectConfig::WoopWoop { interval_ms: 100 },
            EffectConfig::CubeJump { interval_ms: 50 },
            EffectConfig::Glowing { interval_ms: 0 },
            EffectConfig::Glyphs {
                interval_ms: 100,
                plane: "+y".parse()?,
            },
        ],
    };
    println!("{}", serde_json::to_string_pretty(&show)?);
    Ok(())
}
