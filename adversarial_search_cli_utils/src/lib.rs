#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
//! Command line plumbing shared by the executables: agent descriptions, game selection
//! and strategy construction.

pub mod cli_args;

#[cfg(test)]
mod tests;
