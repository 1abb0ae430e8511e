//! Command implementations

pub mod categories;
mod round;
pub mod simple;

pub use categories::{category_summary, print_categories};
pub use round::Round;
pub use simple::run_simple;
