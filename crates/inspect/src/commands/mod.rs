//! Command implementations for patch-inspect
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod character;
mod object;
mod quest;
mod render;
mod tokens;

pub use character::Character;
pub use object::Object;
pub use quest::Quest;
pub use render::Render;
pub use tokens::Tokens;

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

/// How command results are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Output {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON on stdout
    Json,
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn print_miss(what: &str) {
    println!("{} {}", style("✗").red().bold(), style(what).dim());
}

pub(crate) fn print_field(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("  {} {}", style(format!("{label}:")).bold().cyan(), value);
    }
}
