pub mod config;
pub mod error;
pub mod logging;
pub mod reader;
pub mod report;
pub mod runner;
pub mod tag;
pub mod types;

#[cfg(test)]
mod tests;
