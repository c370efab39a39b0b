use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::{GenerateError, Participant};

/// How many of the most recent seats are remembered per participant.
pub const HISTORY_CAP: usize = 6;

/// One round of a tournament. The index of a participant is their seat.
pub type Round = Vec<Participant>;

/// The seats each participant occupied in the most recent rounds.
///
/// Participants are addressed by their position in the input list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    seats: Vec<VecDeque<usize>>,
}

impl History {
    pub fn new(num_participants: usize) -> Self {
        Self {
            seats: vec![VecDeque::with_capacity(HISTORY_CAP + 1); num_participants],
        }
    }

    /// The seats of one participant, oldest first. `None` if there is no
    /// participant at `position`.
    pub fn seats(&self, position: usize) -> Option<&VecDeque<usize>> {
        self.seats.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VecDeque<usize>> {
        self.seats.iter()
    }

    fn record(&mut self, position: usize, seat: usize) {
        let seats = &mut self.seats[position];
        seats.push_back(seat);
        if seats.len() > HISTORY_CAP {
            seats.pop_front();
        }
    }

    /// Drops the oldest entry of every participant whose history is full.
    ///
    /// Only one entry per participant is dropped, histories below the cap are
    /// left alone.
    fn sweep(&mut self) {
        for seats in self.seats.iter_mut() {
            if seats.len() >= HISTORY_CAP {
                seats.pop_front();
            }
        }
    }
}

/// The result of [`RoundGenerator::next_round()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round: Round,
    /// For each seat, the position of the seated participant in the input list.
    pub positions: Vec<usize>,
    /// Seats where nobody but the previous occupant was left, so the
    /// previous occupant was allowed to sit there again.
    pub relaxed_seats: Vec<usize>,
}

/// Builds rounds one after another, remembering the previous round and the
/// seat history of one tournament.
#[derive(Clone, Debug)]
pub struct RoundGenerator {
    participants: Vec<Participant>,
    history: History,
    last_round: Option<Vec<usize>>,
    rounds_generated: usize,
}

impl RoundGenerator {
    pub fn new(participants: Vec<Participant>) -> Result<Self, GenerateError> {
        if participants.is_empty() {
            return Err(GenerateError::NoParticipants);
        }
        Ok(Self {
            history: History::new(participants.len()),
            participants,
            last_round: None,
            rounds_generated: 0,
        })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn rounds_generated(&self) -> usize {
        self.rounds_generated
    }

    /// Fills the seats in order. Each seat gets a random participant among
    /// those not seated yet, except whoever sat there in the previous round.
    pub fn next_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> RoundOutcome {
        let num_seats = self.participants.len();
        let mut remaining: Vec<usize> = (0..num_seats).collect();
        let mut positions = Vec::with_capacity(num_seats);
        let mut relaxed_seats = Vec::new();

        for seat in 0..num_seats {
            let previous_occupant = self.last_round.as_ref().map(|round| round[seat]);
            let mut candidates: Vec<usize> = remaining
                .iter()
                .copied()
                .filter(|&position| Some(position) != previous_occupant)
                .collect();

            if candidates.is_empty() {
                debug!(
                    round = self.rounds_generated + 1,
                    seat, "Only the previous occupant is left, lifting the exclusion"
                );
                self.history.sweep();
                candidates = remaining.clone();
                relaxed_seats.push(seat);
            }

            // There are always as many remaining participants as empty seats
            let selected = *candidates
                .choose(rng)
                .expect("no participant left for an empty seat");
            trace!(
                round = self.rounds_generated + 1,
                seat,
                participant = %self.participants[selected],
                num_candidates = candidates.len()
            );
            positions.push(selected);
            remaining.retain(|&position| position != selected);
            self.history.record(selected, seat);
        }

        let round = positions
            .iter()
            .map(|&position| self.participants[position].clone())
            .collect();
        self.last_round = Some(positions.clone());
        self.rounds_generated += 1;

        RoundOutcome {
            round,
            positions,
            relaxed_seats,
        }
    }
}

/// Generates `round_count` rounds for the given participants.
///
/// Fails only if `participants` is empty. The seat history is local to this
/// call.
pub fn generate<R: Rng + ?Sized>(
    participants: &[Participant],
    round_count: usize,
    rng: &mut R,
) -> Result<Vec<Round>, GenerateError> {
    let mut generator = RoundGenerator::new(participants.to_vec())?;
    Ok((0..round_count)
        .map(|_| generator.next_round(rng).round)
        .collect())
}
