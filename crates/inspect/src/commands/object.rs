//! Look up object overrides by sprite index.

use anyhow::Result;
use clap::Parser;
use console::style;
use patch_core::{ObjectContext, ObjectRef};
use patch_runtime::ContentSnapshot;

use super::{Output, print_field, print_json, print_miss};

/// Look up the object override for a sprite
#[derive(Parser)]
pub struct Object {
    /// Sprite index of the item
    #[arg(value_name = "SPRITE")]
    sprite: i32,

    /// Item lives on the big craftable sheet
    #[arg(short, long)]
    big_craftable: bool,

    /// Where the item is displayed
    #[arg(short, long, value_enum, default_value = "any")]
    context: ContextArg,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ContextArg {
    /// Placed in the world
    World,
    /// Shown in an inventory
    Inventory,
    /// Either place
    Any,
}

impl From<ContextArg> for ObjectContext {
    fn from(arg: ContextArg) -> Self {
        match arg {
            ContextArg::World => ObjectContext::WORLD,
            ContextArg::Inventory => ObjectContext::INVENTORY,
            ContextArg::Any => ObjectContext::ANY,
        }
    }
}

impl Object {
    pub fn execute(self, snapshot: &ContentSnapshot, output: Output) -> Result<()> {
        let item = ObjectRef {
            sprite_index: self.sprite,
            big_craftable: self.big_craftable,
        };
        let found = snapshot.object(&item, self.context.into());

        if output == Output::Json {
            return print_json(&found);
        }

        let Some(data) = found else {
            print_miss(&format!("No object override for sprite {}", self.sprite));
            return Ok(());
        };

        println!(
            "{} {} ({}, {:?})",
            style("Object:").bold().green(),
            self.sprite,
            data.sprite_sheet,
            data.context
        );
        print_field("Name", data.name.as_deref());
        print_field("Description", data.description.as_deref());
        print_field("Type", data.type_name.as_deref());
        Ok(())
    }
}
