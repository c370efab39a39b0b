use std::path::PathBuf;

use chrono::NaiveDate;
use seating::{Participant, RoundGenerator, TournamentRecord};
use tracing::{debug, info};

use crate::Config;

pub enum GenerationResult {
    Stored {
        record: TournamentRecord,
        path: PathBuf,
    },
    /// Nothing was generated or stored.
    NoParticipants,
}

/// Generates the tables for all games and stores them in the archive.
///
/// An empty participant list is not an error, it is reported back so the
/// caller can warn about it.
pub fn generate_tournament(
    config: &mut Config,
    name: &str,
    date: NaiveDate,
    participants: &[Participant],
    num_games: usize,
) -> anyhow::Result<GenerationResult> {
    if participants.is_empty() {
        return Ok(GenerationResult::NoParticipants);
    }
    let mut generator = RoundGenerator::new(participants.to_vec())?;

    let mut tables = Vec::with_capacity(num_games);
    for game_idx in 0..num_games {
        let outcome = generator.next_round(&mut config.rng);
        if !outcome.relaxed_seats.is_empty() {
            debug!(game_idx, seats = ?outcome.relaxed_seats, "Seats kept their previous occupant");
        }
        tables.push(outcome.round);
    }

    let record = TournamentRecord::new(name, &date.format("%Y-%m-%d").to_string(), tables);
    let path = config.archive.store(&record)?;
    info!(path = %path.display(), num_games, num_participants = participants.len(), "Stored tournament");
    Ok(GenerationResult::Stored { record, path })
}
