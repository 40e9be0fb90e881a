mod generator;
use generator::*;

use proptest::prelude::*;

use crate::game_tree_search::{check_state, Game, Results};
use crate::games::*;

pub mod game_contract;

pub mod results;

const CASES: u32 = 200;
