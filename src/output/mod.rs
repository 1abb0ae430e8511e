//! Terminal output formatting
//!
//! Plain-text rendering shared by both front ends, plus colored printing for
//! line mode.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_category_menu, print_result, print_round};
pub use formatters::{Gallows, render_lines};
