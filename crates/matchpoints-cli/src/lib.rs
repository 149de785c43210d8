//! Command-line shell over the matchpoints engine: argument parsing,
//! configuration, command dispatch and text rendering.

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
