//! Colored terminal output helpers.

use std::fmt::Display;

use owo_colors::OwoColorize;

/// Print a conflict or lookup failure in red.
pub fn conflict(err: &impl Display) {
    println!("{}", err.to_string().red());
}

/// Print a success line in green.
pub fn success(message: &str) {
    println!("{}", message.green());
}
