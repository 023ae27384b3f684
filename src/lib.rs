// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod specs;

pub mod api;
pub mod catalog;
pub mod clean;
pub mod cli;
pub mod csv;
pub mod error;
pub mod file;
pub mod labels;
pub mod progress;
pub mod runner;
pub mod split;
pub mod store;
pub mod table;

pub use error::CavaError;
