use crate::*;

use super::SearchContext;

#[inline]
fn is_maximizing<G: Game>(game: &G, ctx: &SearchContext<G>) -> Result<bool, ContractViolation> {
    match game.active_player() {
        Some(player) => Ok(player == ctx.player),
        None => Err(ContractViolation::NoActivePlayer {
            state: format!("{game:?}"),
        }),
    }
}

#[inline]
fn non_terminal_moves<G: Game>(game: &G) -> Result<MoveList<G::Move>, ContractViolation> {
    let moves = game.moves();
    if moves.is_empty() {
        return Err(ContractViolation::NoMovesNorResults {
            state: format!("{game:?}"),
        });
    }
    Ok(moves)
}

/// Exhaustive depth-first minimax. Nodes where the searching player moves take the
/// maximum of their children, all others the minimum.
pub fn minimax<G: Game>(game: &G, depth: u32, ctx: &mut SearchContext<G>) -> Result<f64, ContractViolation> {
    ctx.counter.states_visited += 1;
    if let Some(value) = ctx.terminal_value(game, depth)? {
        return Ok(value);
    }

    let maximize = is_maximizing(game, ctx)?;
    let mut best = if maximize { f64::NEG_INFINITY } else { f64::INFINITY };
    for mv in non_terminal_moves(game)? {
        let value = minimax(&game.next(&mv), depth + 1, ctx)?;
        best = if maximize { best.max(value) } else { best.min(value) };
    }
    Ok(best)
}

/// Minimax with alpha-beta pruning, visiting moves in the order the game lists them.
///
/// Returns `alpha` from maximizing nodes and `beta` from minimizing nodes, so the value
/// is only a bound when a cutoff happened. With the full window `(-inf, +inf)` the value
/// of the node is exact.
pub fn alphabeta<G: Game>(
    game: &G,
    depth: u32,
    ab: (f64, f64),
    ctx: &mut SearchContext<G>,
) -> Result<f64, ContractViolation> {
    ctx.counter.states_visited += 1;
    if let Some(value) = ctx.terminal_value(game, depth)? {
        return Ok(value);
    }

    let (mut alpha, mut beta) = ab;
    let maximize = is_maximizing(game, ctx)?;
    for mv in non_terminal_moves(game)? {
        let value = alphabeta(&game.next(&mv), depth + 1, (alpha, beta), ctx)?;
        if maximize {
            if alpha < value {
                alpha = value;
            }
        } else if beta > value {
            beta = value;
        }
        if beta <= alpha {
            break;
        }
    }
    Ok(if maximize { alpha } else { beta })
}
