//! Core data models for tally
//!
//! The budget state is a tree: income (a single `Money` value) plus an
//! ordered list of `Category` records, each owning an ordered list of
//! `Transaction` records. Everything else (spent, remaining, unallocated)
//! is derived.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::Category;
pub use ids::{CategoryId, TransactionId};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
