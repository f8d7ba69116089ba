//! Keeps a desktop screen from dimming or locking by running a series of
//! independent remediation strategies and reporting how each one went.

pub mod cli;
pub mod commands;
pub mod error;
pub mod executor;
pub mod report;
pub mod signal;
pub mod strategy;
pub mod ui;
