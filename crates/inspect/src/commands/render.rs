//! Render tokenized text.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use patch_core::TokenString;
use patch_runtime::ContentSnapshot;
use serde::Serialize;

use super::{Output, print_json};

/// Render tokenized text with the pack's preview context
#[derive(Parser)]
pub struct Render {
    /// Text containing `{{Token}}` placeholders
    #[arg(value_name = "TEXT")]
    text: String,
}

#[derive(Serialize)]
struct Rendered<'a> {
    input: &'a str,
    tokens: Vec<&'a str>,
    mutable: bool,
    ready: bool,
    output: Option<String>,
}

impl Render {
    pub fn execute(self, snapshot: &ContentSnapshot, output: Output) -> Result<()> {
        let tokens = snapshot.tokens();
        let context = snapshot.config().preview_context();

        let parsed = TokenString::parse(self.text.as_str())
            .with_context(|| format!("Failed to parse: {}", self.text))?;
        parsed
            .validate(tokens)
            .with_context(|| format!("Failed to validate: {}", self.text))?;

        let ready = parsed.is_ready(tokens, &context);
        let rendered = if ready {
            Some(parsed.render(tokens, &context)?)
        } else {
            None
        };

        if output == Output::Json {
            return print_json(&Rendered {
                input: parsed.raw(),
                tokens: parsed.token_names().collect(),
                mutable: parsed.is_mutable(tokens),
                ready,
                output: rendered,
            });
        }

        match rendered {
            Some(text) => println!("{}", text),
            None => println!(
                "{} {}",
                style("✗").red().bold(),
                style("Tokens are not ready in the preview context").dim()
            ),
        }
        Ok(())
    }
}
