//! Rigging CLI library: argument parsing, logging, and command dispatch.

pub mod cli;
pub mod commands;
pub mod logger;
