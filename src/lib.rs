//! Filters a fixed game catalog with a predicate chosen at runtime.
//!
//! [`strategy::select_strategy`] turns a [`strategy::FilteringType`] into a
//! predicate, and [`filter::find_by`] lazily applies it to the available games.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod game;
pub mod strategy;

pub use error::{Error, Result};
pub use filter::find_by;
pub use game::{Game, Price};
pub use strategy::{select_strategy, select_strategy_named, FilteringType, Strategy};
