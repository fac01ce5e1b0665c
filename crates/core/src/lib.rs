pub mod db;

pub mod constants;
pub mod errors;
pub mod schema;

pub mod dashboard;
pub mod expenses;
pub mod goals;
pub mod incomes;
pub mod investments;
pub mod users;

pub use errors::{Error, Result};
