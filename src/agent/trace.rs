use super::*;

/// An agent that re-enacts a recorded move trace.
///
/// Past the end of the trace, the proxy agent (if any) decides and its move is appended,
/// so the trace also records new matches.
pub struct TraceAgent<G: Game> {
    seat: Seat<G::Player>,
    trace: Vec<G::Move>,
    proxy: Option<Box<dyn Agent<G>>>,
    current_move: usize,
}

impl<G: Game> TraceAgent<G> {
    pub fn new(name: impl Into<String>, trace: Vec<G::Move>) -> Self {
        Self {
            seat: Seat::new(name),
            trace,
            proxy: None,
            current_move: 0,
        }
    }

    pub fn with_proxy(mut self, proxy: Box<dyn Agent<G>>) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn trace(&self) -> &[G::Move] {
        &self.trace
    }
}

impl<G: Game> Agent<G> for TraceAgent<G> {
    fn seat(&self) -> &Seat<G::Player> {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat<G::Player> {
        &mut self.seat
    }

    fn decision(&mut self, game: &G, candidates: &[G::Move]) -> Result<G::Move> {
        match self.select_move(game, Some(candidates))? {
            Some(mv) => Ok(mv),
            None => Err(ContractViolation::NoDecision {
                agent: self.seat.name.clone(),
            }
            .into()),
        }
    }

    fn select_move(&mut self, game: &G, candidates: Option<&[G::Move]>) -> Result<Option<G::Move>> {
        if let Some(mv) = self.trace.get(self.current_move) {
            self.current_move += 1;
            return Ok(Some(mv.clone()));
        }
        let Some(proxy) = self.proxy.as_mut() else {
            return Ok(None);
        };
        let selected = proxy.select_move(game, candidates)?;
        if let Some(mv) = &selected {
            self.trace.push(mv.clone());
            self.current_move += 1;
        }
        Ok(selected)
    }

    fn match_begins(&mut self, player: G::Player, game: &G) -> Result<()> {
        self.current_move = 0;
        if let Some(proxy) = self.proxy.as_mut() {
            proxy.match_begins(player.clone(), game)?;
        }
        self.seat.player = Some(player);
        Ok(())
    }

    fn match_moves(&mut self, before: &G, mv: &G::Move, after: &G) -> Result<()> {
        match self.proxy.as_mut() {
            Some(proxy) => proxy.match_moves(before, mv, after),
            None => Ok(()),
        }
    }

    fn match_ends(&mut self, game: &G) -> Result<()> {
        match self.proxy.as_mut() {
            Some(proxy) => proxy.match_ends(game),
            None => Ok(()),
        }
    }
}
