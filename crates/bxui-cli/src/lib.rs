#![forbid(unsafe_code)]

//! The `bxui` command-line front end.

pub mod cli;
pub mod run;
