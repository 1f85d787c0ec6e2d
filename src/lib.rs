//! tally - Terminal-based monthly budgeting application
//!
//! This library provides the core functionality for tally: a single-user
//! budgeting tool that tracks one monthly income figure, a list of spending
//! categories with allocated ceilings, and debit/credit transactions within
//! each category. All aggregates (spent, remaining, unallocated) are derived
//! on demand from the in-memory state; every mutation is persisted
//! synchronously to JSON files in the user's data directory.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `models`: core data models (money, categories, transactions)
//! - `storage`: JSON file storage with atomic writes
//! - `services`: the `BudgetBook` state container and its mutation operations
//! - `display`: plain-text formatting for non-interactive output
//! - `tui`: the interactive ratatui interface (dashboard + category detail)

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
