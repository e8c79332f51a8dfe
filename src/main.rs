use clap::Parser;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use akropolis_supply::console;
use akropolis_supply::game::{PlayerCount, ShuffleMode, Supply};
use akropolis_supply::logging::setup_logging;
use akropolis_supply::recording::{save_record, RunRecorder};
use akropolis_supply::simulation::Simulation;

#[derive(Parser, Debug)]
#[command(
    name = "akropolis-supply",
    version,
    about = "Simulate the tile supply: always take the free tile until none is left"
)]
struct Config {
    /// Number of players (2-4); prompted for when omitted
    #[arg(short = 'p', long)]
    players: Option<u8>,

    /// RNG seed for a reproducible deal
    #[arg(short = 's', long, conflicts_with = "no_shuffle")]
    seed: Option<u64>,

    /// Deal the tiles in catalogue order
    #[arg(long, default_value_t = false)]
    no_shuffle: bool,

    /// Only print the final summary
    #[arg(short = 'q', long, default_value_t = false)]
    quiet: bool,

    /// Write the whole run as JSON to this path
    #[arg(long)]
    record: Option<PathBuf>,

    /// Log level spec, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log to rotated files in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Config {
    fn shuffle_mode(&self) -> ShuffleMode {
        match (self.no_shuffle, self.seed) {
            (true, _) => ShuffleMode::Identity,
            (false, Some(seed)) => ShuffleMode::Seeded(seed),
            (false, None) => ShuffleMode::Entropy,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let players = match config.players {
        Some(players) => PlayerCount::new(players)?,
        None => console::prompt_player_count(&mut io::stdin().lock(), &mut out)?,
    };
    let shuffle = config.shuffle_mode();
    log::info!("dealing for {} players ({:?})", players, shuffle);

    let supply = Supply::build(players.get(), shuffle)?;
    let mut recorder = config
        .record
        .as_ref()
        .map(|_| RunRecorder::start(&supply, shuffle));

    let mut simulation = Simulation::new(supply);
    if !config.quiet {
        console::render_start(&mut out, &simulation)?;
    }

    let mut rendered: io::Result<()> = Ok(());
    let summary = simulation.run(|sim, outcome| {
        if let Some(recorder) = recorder.as_mut() {
            recorder.record_turn(sim, outcome);
        }
        if !config.quiet && rendered.is_ok() {
            rendered = console::render_turn(&mut out, sim, outcome);
        }
    });
    rendered?;

    console::render_end(&mut out, &summary)?;
    out.flush()?;

    if let (Some(path), Some(recorder)) = (config.record.as_ref(), recorder) {
        save_record(path, &recorder.finish(summary))?;
    }
    Ok(())
}
