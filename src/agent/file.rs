use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use itertools::Itertools;

use super::*;

/// An agent that reads its moves from a text stream and writes a record of the match to
/// another. Over stdin/stdout it works as a plain-text user interface.
///
/// Every line written is a comment (starts with `#`). When reading, comment lines are
/// skipped and the first line matching the string form of an advertised move is taken.
/// An empty line or end of input means no decision.
pub struct FileAgent<G: Game, R: BufRead, W: Write> {
    seat: Seat<G::Player>,
    input: R,
    output: W,
}

impl<G: Game, R: BufRead, W: Write> FileAgent<G, R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            seat: Seat::new(name),
            input,
            output,
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn write_state(&mut self, game: &G) -> io::Result<()> {
        let state = game.to_string().replace('\n', "\n#\t");
        writeln!(self.output, "#\t{}", state.trim_end_matches("\n#\t"))
    }

    fn read_move(&mut self, candidates: &[G::Move]) -> io::Result<Option<G::Move>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let text = line.trim();
            if text.is_empty() {
                return Ok(None);
            }
            if text.starts_with('#') {
                continue;
            }
            if let Some(mv) = candidates.iter().find(|m| m.to_string() == text) {
                return Ok(Some(mv.clone()));
            }
        }
    }
}

impl<G: Game> FileAgent<G, BufReader<Stdin>, Stdout> {
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, BufReader::new(io::stdin()), io::stdout())
    }
}

impl<G: Game, R: BufRead, W: Write> Agent<G> for FileAgent<G, R, W> {
    fn seat(&self) -> &Seat<G::Player> {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat<G::Player> {
        &mut self.seat
    }

    fn decision(&mut self, game: &G, candidates: &[G::Move]) -> Result<G::Move> {
        // Running out of input is an error here; `select_move` reports it as no decision.
        match self.select_move(game, Some(candidates))? {
            Some(mv) => Ok(mv),
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no move read").into()),
        }
    }

    fn select_move(&mut self, game: &G, candidates: Option<&[G::Move]>) -> Result<Option<G::Move>> {
        let owned;
        let candidates = match candidates {
            Some(candidates) => candidates,
            None => {
                owned = game.moves();
                &owned[..]
            }
        };
        if candidates.is_empty() {
            return Ok(None);
        }
        writeln!(
            self.output,
            "# Available moves for {}: {}",
            self.seat,
            candidates.iter().join(" ")
        )?;
        self.output.flush()?;
        Ok(self.read_move(candidates)?)
    }

    fn match_begins(&mut self, player: G::Player, game: &G) -> Result<()> {
        self.seat.player = Some(player);
        writeln!(self.output, "# {} starts a match.", self.seat)?;
        self.write_state(game)?;
        self.output.flush()?;
        Ok(())
    }

    fn match_moves(&mut self, before: &G, mv: &G::Move, after: &G) -> Result<()> {
        match before.active_player() {
            Some(player) => writeln!(self.output, "# {player} moves {mv}.")?,
            None => writeln!(self.output, "# None moves {mv}.")?,
        }
        self.write_state(after)?;
        self.output.flush()?;
        Ok(())
    }

    fn match_ends(&mut self, game: &G) -> Result<()> {
        let player = self.seat.require_player()?;
        let result = game.results().get(&player).unwrap_or_default();
        let outcome = if result < 0.0 {
            "defeat"
        } else if result > 0.0 {
            "victory"
        } else {
            "draw"
        };
        writeln!(
            self.output,
            "# {} ends the match with {outcome} ({result:.4}).",
            self.seat
        )?;
        self.output.flush()?;
        Ok(())
    }
}
