//! List registered tokens.

use anyhow::Result;
use clap::Parser;
use console::style;
use patch_runtime::ContentSnapshot;
use serde::Serialize;

use super::{Output, print_json};

/// List registered tokens and their preview values
#[derive(Parser)]
pub struct Tokens {
    /// Only show tokens whose value depends on game state
    #[arg(short, long)]
    mutable: bool,
}

#[derive(Serialize)]
struct TokenSummary {
    name: String,
    mutable: bool,
    multiple: bool,
    ready: bool,
    values: Vec<String>,
    allowed_values: Option<Vec<String>>,
}

impl Tokens {
    pub fn execute(self, snapshot: &ContentSnapshot, output: Output) -> Result<()> {
        let context = snapshot.config().preview_context();
        let summaries: Vec<TokenSummary> = snapshot
            .tokens()
            .iter()
            .filter(|token| !self.mutable || token.is_mutable())
            .map(|token| TokenSummary {
                name: token.name().to_owned(),
                mutable: token.is_mutable(),
                multiple: token.can_have_multiple_values(),
                ready: token.is_ready(&context),
                values: token.values(&context).into_owned().into(),
                allowed_values: token.allowed_values().cloned().map(Into::into),
            })
            .collect();

        if output == Output::Json {
            return print_json(&summaries);
        }

        println!(
            "{} {}",
            style("Tokens:").bold().green(),
            summaries.len()
        );
        for token in &summaries {
            let kind = if token.mutable { "mutable" } else { "immutable" };
            let values = if token.ready {
                style(token.values.join(", ")).white()
            } else {
                style("<not ready>".to_owned()).dim()
            };
            println!(
                "  {} {} {}",
                style(&token.name).bold().cyan(),
                style(format!("[{kind}]")).dim(),
                values
            );
            if let Some(allowed) = &token.allowed_values {
                println!("    {} {}", style("allowed:").dim(), allowed.join(", "));
            }
        }
        Ok(())
    }
}
