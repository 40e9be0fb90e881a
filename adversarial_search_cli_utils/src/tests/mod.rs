use structopt::StructOpt;

use adversarial_search::{games::*, prelude::*};
use adversarial_search_strategies::Strategy;

use crate::cli_args::*;

#[test]
fn parses_agent_specs() {
    assert_eq!(Ok(AgentSpec::new(SearchAlgorithm::Random, None)), "random".parse::<AgentSpec>());
    assert_eq!(Ok(AgentSpec::new(SearchAlgorithm::MiniMax, Some(3))), "minimax:3".parse::<AgentSpec>());
    assert_eq!(Ok(AgentSpec::new(SearchAlgorithm::AlphaBeta, Some(4))), "AlphaBeta:4".parse::<AgentSpec>());
    assert_eq!(Ok(AgentSpec::new(SearchAlgorithm::MCTS, Some(20))), "mcts:20".parse::<AgentSpec>());
    assert_eq!(Ok(AgentSpec::new(SearchAlgorithm::MCTS, None)), "mcts".parse::<AgentSpec>());
}

#[test]
fn rejects_malformed_agent_specs() {
    assert!("negamax:3".parse::<AgentSpec>().is_err());
    assert!("minimax:deep".parse::<AgentSpec>().is_err());
    assert!("minimax:-1".parse::<AgentSpec>().is_err());
    assert!("random:2".parse::<AgentSpec>().is_err());
    assert!("".parse::<AgentSpec>().is_err());
}

#[test]
fn agent_spec_display_parses_back() {
    for spec in ["random", "minimax:3", "alphabeta:9", "mcts:20", "mcts"] {
        let parsed: AgentSpec = spec.parse().expect("valid spec");
        assert_eq!(spec, parsed.to_string());
    }
}

#[test]
fn parses_game_kinds() {
    assert_eq!(Ok(GameKind::Silly), "silly".parse::<GameKind>());
    assert_eq!(Ok(GameKind::TicTacToe), "TicTacToe".parse::<GameKind>());
    assert_eq!(Ok(GameKind::ToadsAndFrogs), "toads-and-frogs".parse::<GameKind>());
    assert_eq!(Ok(GameKind::Cuanteti), "cuanteti".parse::<GameKind>());
    assert!("chess".parse::<GameKind>().is_err());
}

#[test]
fn builds_the_requested_strategy() {
    let spec: AgentSpec = "minimax:2".parse().expect("valid spec");
    match spec.make_strategy::<Silly>("mm", None, 0u64) {
        Strategy::MiniMax(agent) => assert_eq!(2, agent.config().horizon),
        other => panic!("unexpected strategy {other:?}"),
    }

    let spec: AgentSpec = "alphabeta".parse().expect("valid spec");
    match spec.make_strategy::<Silly>("ab", None, 0u64) {
        Strategy::AlphaBeta(agent) => assert_eq!(3, agent.config().horizon),
        other => panic!("unexpected strategy {other:?}"),
    }

    let spec: AgentSpec = "mcts:7".parse().expect("valid spec");
    match spec.make_strategy::<Cuanteti>("mcts", Some(4), 0u64) {
        Strategy::Mcts(agent) => {
            assert_eq!(7, agent.config().simulation_count);
            assert_eq!(Some(4), agent.config().playout_cutoff);
        }
        other => panic!("unexpected strategy {other:?}"),
    }

    let strategy = AgentSpec::new(SearchAlgorithm::Random, None).make_strategy::<TicTacToe>("r", None, 0u64);
    assert!(matches!(strategy, Strategy::Random(_)));
    assert_eq!("r", strategy.name());
}

#[test]
fn tictactoe_strategies_use_the_board_heuristic() {
    // With the positional heuristic a one-ply search always takes the centre.
    for seed in 0..8u64 {
        let mut strategy = AgentSpec::new(SearchAlgorithm::MiniMax, Some(1)).make_strategy::<TicTacToe>("mm", None, seed);
        let game = TicTacToe::standard_game();
        strategy.match_begins("Xs", &game).expect("binds");
        assert_eq!(Some(Square(4)), strategy.select_move(&game, None).expect("decides"));
    }
}

#[test]
fn parses_command_line_options() {
    let opts = SearchOpts::from_iter_safe(["test", "--game", "cuanteti", "-A", "mcts:5", "-S", "9", "--debug"])
        .expect("valid options");
    assert_eq!(GameKind::Cuanteti, opts.game);
    assert_eq!(Some(9), opts.seed);
    assert!(opts.search.debug);
    assert_eq!(AgentSpec::new(SearchAlgorithm::MCTS, Some(5)), opts.search.agent_spec());

    let opts = SearchOpts::from_iter_safe(["test"]).expect("valid options");
    assert_eq!(GameKind::TicTacToe, opts.game);
    assert_eq!(None, opts.seed);
    assert_eq!(AgentSpec::DEFAULT, opts.search.agent_spec());
    assert!(matches!(opts.rng_source(3), RngSource::Entropy));

    assert!(SearchOpts::from_iter_safe(["test", "--agent", "nonsense"]).is_err());
}

#[test]
fn seeded_options_give_distinct_reproducible_agents() {
    let opts = SearchOpts::from_iter_safe(["test", "-S", "40", "-A", "random"]).expect("valid options");
    assert!(matches!(opts.rng_source(0), RngSource::Seed(40)));
    assert!(matches!(opts.rng_source(2), RngSource::Seed(42)));

    let moves = |index: u64| {
        let mut strategy: Strategy<Cuanteti> = opts.make_strategy("random", index);
        let mut game = Cuanteti::standard_game();
        strategy.match_begins("Xs", &game).expect("binds");
        let mut moves = Vec::new();
        while let Some(mv) = strategy.select_move(&game, None).expect("decides") {
            game = game.next(&mv);
            moves.push(mv);
        }
        moves
    };
    assert_eq!(moves(1), moves(1));
}
