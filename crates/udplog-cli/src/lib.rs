//! CLI surface for udplog: argument parsing lives here so it can be unit
//! tested; the binary's `main` is the composition root.

pub mod parser;

pub use parser::Cli;
