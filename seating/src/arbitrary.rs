use quickcheck::{Arbitrary, Gen};

use crate::Participant;

#[derive(Clone, Debug)]
pub struct GeneratorInput {
    // Nonempty
    pub participants: Vec<Participant>,
    pub round_count: usize,
    pub seed: u64,
}

impl Arbitrary for GeneratorInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_participants = 1 + usize::arbitrary(g) % 16;
        // Sometimes reuse names, since duplicates must still be seated separately
        let with_duplicates = bool::arbitrary(g);
        let participants = (0..num_participants)
            .map(|idx| {
                let idx = if with_duplicates { idx % 3 } else { idx };
                Participant(format!("Player {}", idx + 1))
            })
            .collect();

        Self {
            participants,
            round_count: 1 + usize::arbitrary(g) % 25,
            seed: u64::arbitrary(g),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut smaller = Vec::new();
        if self.participants.len() > 1 {
            let mut input = self.clone();
            input.participants.pop();
            smaller.push(input);
        }
        if self.round_count > 1 {
            let mut input = self.clone();
            input.round_count -= 1;
            smaller.push(input);
        }
        Box::new(smaller.into_iter())
    }
}
