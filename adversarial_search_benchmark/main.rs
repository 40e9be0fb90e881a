use instant::Instant;
use log::debug;
use rayon::prelude::*;
use structopt::StructOpt;

use adversarial_search::{
    games::{Cuanteti, Silly, TicTacToe, ToadsAndFrogs},
    prelude::*,
};
use adversarial_search_cli_utils::cli_args::{AgentSpec, GameKind, SearchAlgorithm, SearchOpts, StandardGame};
use adversarial_search_strategies::Strategy;

mod match_round;
use match_round::{match_round, MatchSummary, RoundOutcome};

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Adversarial search agents for small board games")]
pub enum BenchmarkOpts {
    #[structopt(help = "Play against the agent on standard input and output.")]
    Play {
        #[structopt(long = "--second", help = "Let the agent make the first move")]
        second: bool,
        #[structopt(flatten)]
        search: SearchOpts,
    },
    #[structopt(help = "Measure the score of the agent against an opponent.")]
    Match {
        #[structopt(long = "--parallel", short = "-P")]
        parallel: bool,

        #[structopt(long)]
        rounds: Option<u32>,

        #[structopt(short = "O", long = "--opponent", help = "Opponent agent, random by default")]
        opponent: Option<AgentSpec>,

        #[structopt(long = "--json", help = "Print the summary as JSON")]
        json: bool,

        #[structopt(flatten)]
        search: SearchOpts,
    },
    #[structopt(help = "Time the first decision on the starting position.")]
    Evaluate {
        #[structopt(long = "--json", help = "Print the search counter as JSON")]
        json: bool,

        #[structopt(flatten)]
        search: SearchOpts,
    },
}

impl BenchmarkOpts {
    fn search(&self) -> &SearchOpts {
        match self {
            BenchmarkOpts::Play { search, .. } => search,
            BenchmarkOpts::Match { search, .. } => search,
            BenchmarkOpts::Evaluate { search, .. } => search,
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn play<G: StandardGame>(search: &SearchOpts, second: bool) -> Result<(), Error> {
    let mut human: FileAgent<G, _, _> = FileAgent::stdio("human");
    let mut agent: Strategy<G> = search.make_strategy(search.search.agent_spec().to_string(), 0);
    let agents = if second {
        vec![&mut agent as &mut dyn Agent<G>, &mut human]
    } else {
        vec![&mut human as &mut dyn Agent<G>, &mut agent]
    };
    let (results, game) = run_match(G::standard_game(), agents)?;
    println!("{game}");
    println!("{results}");
    Ok(())
}

fn do_match<G: StandardGame>(
    search: &SearchOpts,
    opponent: AgentSpec,
    rounds: u32,
    parallel: bool,
) -> Result<MatchSummary, Error> {
    let t0 = Instant::now();
    let agent_spec = search.search.agent_spec();
    let round = |i: u32| {
        let seed_index = 2 * i as u64;
        let agent: Strategy<G> = search.make_strategy(agent_spec.to_string(), seed_index);
        let opponent: Strategy<G> = opponent.make_strategy(
            opponent.to_string(),
            search.search.playout_cutoff,
            search.rng_source(seed_index + 1),
        );
        debug!("+ Round {:3}", i + 1);
        match_round(G::standard_game(), agent, opponent, i % 2 == 1)
    };
    let outcomes: Vec<RoundOutcome> = if parallel {
        (0..rounds).into_par_iter().map(round).collect::<Result<_, _>>()?
    } else {
        (0..rounds).map(round).collect::<Result<_, _>>()?
    };

    let mut summary = MatchSummary::new(search.game.to_string(), agent_spec.to_string(), opponent.to_string());
    for outcome in &outcomes {
        summary.add_round(outcome);
    }
    summary.elapsed_ms = t0.elapsed().as_millis();
    Ok(summary)
}

fn evaluate<G: StandardGame>(search: &SearchOpts, json: bool) -> Result<(), Error> {
    let game = G::standard_game();
    let mut agent: Strategy<G> = search.make_strategy(search.search.agent_spec().to_string(), 0);
    let player = game.active_player().ok_or_else(|| ContractViolation::NoActivePlayer {
        state: format!("{game:?}"),
    })?;
    agent.match_begins(player, &game)?;
    let t1 = Instant::now();
    let mv = agent.select_move(&game, None)?;
    let dt_ns = t1.elapsed().as_nanos();
    let c = agent.last_counter();
    if json {
        println!("{}", serde_json::to_string(&c).map_err(std::io::Error::from)?);
        return Ok(());
    }
    match mv {
        Some(mv) => println!("{} plays {mv} | {c:?} | {}", agent.seat(), c.summary(dt_ns)),
        None => println!("{game}: no moves to evaluate"),
    }
    Ok(())
}

fn run<G: StandardGame>(opts: &BenchmarkOpts) -> Result<(), Error> {
    match opts {
        BenchmarkOpts::Play { second, search } => play::<G>(search, *second),
        BenchmarkOpts::Match {
            parallel,
            rounds,
            opponent,
            json,
            search,
        } => {
            let opponent = opponent.unwrap_or(AgentSpec::new(SearchAlgorithm::Random, None));
            let summary = do_match::<G>(search, opponent, rounds.unwrap_or(100), *parallel)?;
            if *json {
                println!("{}", serde_json::to_string(&summary).map_err(std::io::Error::from)?);
                return Ok(());
            }
            let dt_us = (summary.elapsed_ms * 1000).max(1);
            println!(
                "{:?}, rate={:.4}Mstates/s",
                summary.counter,
                (summary.counter.states_visited as f64) / (dt_us as f64)
            );
            println!(
                "{} vs {} on {}: +{} ={} -{} | mean {:.3} | {}ms",
                summary.agent,
                summary.opponent,
                summary.game,
                summary.wins,
                summary.draws,
                summary.losses,
                summary.mean_score(),
                summary.elapsed_ms
            );
            Ok(())
        }
        BenchmarkOpts::Evaluate { json, search } => evaluate::<G>(search, *json),
    }
}

fn main() -> Result<(), Error> {
    let opts = BenchmarkOpts::from_args();
    init_logging(opts.search().search.debug);
    match opts.search().game {
        GameKind::Silly => run::<Silly>(&opts),
        GameKind::TicTacToe => run::<TicTacToe>(&opts),
        GameKind::ToadsAndFrogs => run::<ToadsAndFrogs>(&opts),
        GameKind::Cuanteti => run::<Cuanteti>(&opts),
    }
}
