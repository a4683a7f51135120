//! Look up Adventurer's Guild quests by monster name.

use anyhow::Result;
use clap::Parser;
use console::style;
use patch_runtime::ContentSnapshot;

use super::{Output, print_json, print_miss};

/// Look up the Adventurer's Guild quest for a monster
#[derive(Parser)]
pub struct Quest {
    /// Monster name, matched exactly (e.g., Green Slime)
    #[arg(value_name = "MONSTER")]
    monster: String,
}

impl Quest {
    pub fn execute(self, snapshot: &ContentSnapshot, output: Output) -> Result<()> {
        let found = snapshot.adventure_guild_quest(&self.monster);

        if output == Output::Json {
            return print_json(&found);
        }

        let Some(quest) = found else {
            print_miss(&format!("No quest targets {}", self.monster));
            return Ok(());
        };

        println!("{} {}", style("Quest:").bold().green(), self.monster);
        println!(
            "  {} {}",
            style("Targets:").bold().cyan(),
            quest.targets.join(", ")
        );
        println!(
            "  {} {}",
            style("Required kills:").bold().cyan(),
            quest.required_kills
        );
        Ok(())
    }
}
