//! Scripts for deploying the licensing contracts: a treasury, a license token,
//! and a usage fee collector.

pub mod artifacts;
pub mod cli;
mod commands;
pub mod constants;
pub mod deployer;
pub mod errors;
pub mod network;
pub mod orchestrator;
pub mod plan;
pub mod report;
pub mod types;
pub mod utils;
