use super::*;

fn mcts<G: Game>(simulation_count: u32, seed: u64) -> MCTSAgent<G> {
    MCTSAgent::new("mcts", MCTSConfig::new(simulation_count), seed)
}

#[test]
fn default_config() {
    let config = MCTSConfig::default();
    assert_eq!(3, config.simulation_count);
    assert_eq!(None, config.playout_cutoff);
}

#[test]
fn mcts_chooses_the_winning_outcome() {
    for seed in 0..8 {
        let mut agent = mcts(3, seed);
        assert_eq!(Some('+'), decide(&mut agent, &OneShot(None)));
        // Successors are terminal: one playout per candidate per round, no plies played.
        let counter = agent.last_counter();
        assert_eq!(9, counter.playouts);
        assert_eq!(0, counter.states_visited);
    }
}

#[test]
fn mcts_accumulates_results_of_every_simulation() {
    let mut agent: MCTSAgent<Silly> = mcts(4, 2);
    let game = Silly::new();
    agent.match_begins("A", &game).expect("binds");
    let mv = agent.select_move(&game, Some(&['-', '=', '+'][..])).expect("decides");
    assert_eq!(Some('+'), mv);
    assert_eq!(12, agent.last_counter().playouts);
    assert_eq!(12, agent.last_counter().evals);
}

#[test]
fn mcts_takes_an_immediate_win() {
    let game = TicTacToe::from_board("XX.OO....", 0).expect("valid board");
    for seed in 0..4 {
        let mut agent = mcts(40, seed);
        assert_eq!(Some(Square(2)), decide(&mut agent, &game));
    }
}

#[test]
fn mcts_playouts_run_to_the_end_of_the_game() {
    let mut agent = mcts(5, 3);
    decide(&mut agent, &TicTacToe::new());
    let counter = agent.last_counter();
    assert_eq!(9 * 5, counter.playouts);
    // At least 4 more plies are needed before anyone can complete a line.
    assert!(counter.states_visited >= 9 * 5 * 4);
}

#[test]
fn playout_cutoff_uses_the_heuristic() {
    let config = MCTSConfig {
        simulation_count: 2,
        playout_cutoff: Some(0),
    };
    for seed in 0..4u64 {
        let mut agent: MCTSAgent<TicTacToe> = MCTSAgent::new("mcts", config, seed).with_heuristic(TicTacToe::simple_heuristic);
        assert_eq!(Some(Square(4)), decide(&mut agent, &TicTacToe::new()));
        assert_eq!(0, agent.last_counter().playouts);
        assert_eq!(0, agent.last_counter().states_visited);
        assert_eq!(9 * 2, agent.last_counter().evals);
    }
}

#[test]
fn playout_cutoff_without_heuristic_values_zero() {
    let config = MCTSConfig {
        simulation_count: 3,
        playout_cutoff: Some(0),
    };
    let mut chosen = Vec::new();
    for seed in 0..32u64 {
        let mut agent: MCTSAgent<Silly> = MCTSAgent::new("mcts", config, seed);
        chosen.push(decide(&mut agent, &Silly::new()).expect("has moves"));
    }
    // '+' is worth 3 while unfinished playouts count as draws, like '='.
    assert!(chosen.iter().all(|mv| *mv == '+'));
}

#[test]
fn zero_simulations_choose_at_random() {
    let mut chosen = Vec::new();
    for seed in 0..64 {
        let mut agent = mcts(0, seed);
        chosen.push(decide(&mut agent, &OneShot(None)).expect("has moves"));
    }
    for mv in ['-', '=', '+'] {
        assert!(chosen.contains(&mv));
    }
}

#[test]
fn mcts_requires_a_bound_player() {
    let mut agent: MCTSAgent<Silly> = mcts(1, 0);
    assert!(matches!(
        agent.select_move(&Silly::new(), None),
        Err(Error::Contract(ContractViolation::UnboundAgent { .. }))
    ));
}
