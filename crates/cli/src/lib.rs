//! `devhub` command-line front end over the DevHub tool crates.

pub mod cli;
pub mod config;
