use adversarial_search::rand::seq::SliceRandom;

use crate::*;

/// Chooses uniformly among the candidate moves.
#[derive(Debug, Clone)]
pub struct RandomAgent<G: Game> {
    seat: Seat<G::Player>,
    rng: RngState,
}

impl<G: Game> RandomAgent<G> {
    pub fn new(name: impl Into<String>, rng: impl Into<RngSource>) -> Self {
        Self {
            seat: Seat::new(name),
            rng: RngState::new(rng),
        }
    }
}

impl<G: Game> Agent<G> for RandomAgent<G> {
    fn seat(&self) -> &Seat<G::Player> {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat<G::Player> {
        &mut self.seat
    }

    fn decision(&mut self, _game: &G, candidates: &[G::Move]) -> Result<G::Move, Error> {
        match candidates.choose(&mut self.rng) {
            Some(mv) => Ok(mv.clone()),
            None => Err(ContractViolation::NoDecision {
                agent: self.seat.name.clone(),
            }
            .into()),
        }
    }
}
