pub mod config;
pub mod content;
pub mod workflow;
pub mod cli;
