//! stockalyse: per-symbol analysis of daily trading records.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`], command-line driver in [`cli`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
