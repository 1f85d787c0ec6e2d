//! Business logic layer

pub mod budget;

pub use budget::BudgetBook;
