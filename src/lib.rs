// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod csv;
pub mod data;
pub mod file;
pub mod matching;
pub mod search;
pub mod selection;
pub mod session;
pub mod store;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
