//! CLI module graph.

pub mod check;
pub mod command;
pub mod config;
pub mod output;
pub mod rates;
pub mod run;
pub mod sources;
