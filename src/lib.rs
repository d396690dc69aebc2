// Library for tests to access modules

pub mod agent;
pub mod catalog;
pub mod cli;
pub mod cloudwatch_repo;
pub mod collector;
pub mod config;
pub mod error;
pub mod models;
pub mod plugin;
pub mod reducer;
