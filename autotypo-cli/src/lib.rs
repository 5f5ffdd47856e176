//! Autotypo CLI library
//!
//! This library provides the command-line interface for the autotypo
//! typographic normalizer.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;

pub use error::CliError;
