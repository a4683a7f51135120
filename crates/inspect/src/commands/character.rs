//! Look up character overrides by name and target type.

use anyhow::Result;
use clap::Parser;
use console::style;
use patch_core::TargetType;
use patch_runtime::ContentSnapshot;

use super::{Output, print_field, print_json, print_miss};

/// Look up the character override for a name and target type
#[derive(Parser)]
pub struct Character {
    /// Character name (e.g., Lewis)
    #[arg(value_name = "NAME")]
    name: String,

    /// Target type (e.g., Villager, NPC, Monster)
    #[arg(short = 't', long = "type", value_parser = parse_target, default_value = "Villager")]
    target: TargetType,
}

fn parse_target(raw: &str) -> Result<TargetType, String> {
    raw.parse()
        .map_err(|_| format!("unknown target type `{raw}`"))
}

impl Character {
    pub fn execute(self, snapshot: &ContentSnapshot, output: Output) -> Result<()> {
        let found = snapshot.character(self.name.as_str(), self.target);

        if output == Output::Json {
            return print_json(&found);
        }

        let Some(data) = found else {
            print_miss(&format!(
                "No character override for {}::{}",
                self.target, self.name
            ));
            return Ok(());
        };

        println!(
            "{} {} {}",
            style("Character:").bold().green(),
            self.name,
            style(format!("(matched {})", data.id)).dim()
        );
        print_field("Name", data.name.as_deref());
        print_field("Description", data.description.as_deref());
        print_field("Type", data.type_name.as_deref());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_type_parses_case_insensitively() {
        assert_eq!(parse_target("npc"), Ok(TargetType::Npc));
        assert_eq!(parse_target("Villager"), Ok(TargetType::Villager));
        assert!(parse_target("Wizard").is_err());
    }
}
