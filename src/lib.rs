// Library for tests to access modules

pub mod analyzer;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod sample_repo;
pub mod units;
