//! Console shell: asks for the player count and prints the table as the
//! simulation plays.

use crate::game::player_count::PlayerCount;
use crate::simulation::{Simulation, SimulationSummary, TurnOutcome};
use std::io::{self, BufRead, Write};

/// Prompts until a valid player count is entered. Fails only on I/O errors
/// or when input ends first.
pub fn prompt_player_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<PlayerCount> {
    let mut line = String::new();
    loop {
        write!(output, "How many players? (2-4): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a player count was given",
            ));
        }
        match line.trim().parse::<u8>().ok().map(PlayerCount::new) {
            Some(Ok(players)) => return Ok(players),
            _ => writeln!(output, "Invalid input.")?,
        }
    }
}

/// Prints the table as dealt, before the first turn.
pub fn render_start<W: Write>(output: &mut W, simulation: &Simulation) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", simulation.table().view(simulation.tiles()))
}

pub fn render_turn<W: Write>(
    output: &mut W,
    simulation: &Simulation,
    outcome: &TurnOutcome,
) -> io::Result<()> {
    let tiles = simulation.tiles();
    writeln!(output)?;
    writeln!(output, "--- Turn {} ---", outcome.turn)?;
    if let Some(index) = outcome.taken {
        let tile = &tiles[index];
        writeln!(
            output,
            "Taken: {} (min players: {}, cost: 0)",
            tile.id, tile.min_players
        )?;
    }
    writeln!(output, "{}", simulation.table().view(tiles))
}

pub fn render_end<W: Write>(output: &mut W, summary: &SimulationSummary) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "End of simulation: no tiles left.")?;
    writeln!(
        output,
        "{} players, {} turns, {} tiles taken",
        summary.players, summary.turns, summary.tiles_taken
    )
}
