//! Shopping list CLI commands

use clap::Subcommand;

use crate::display::{format_shopping_list, format_shopping_overview};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{ShoppingItemId, ShoppingList};
use crate::services::ShoppingService;
use crate::storage::Storage;

/// Shopping subcommands
#[derive(Subcommand)]
pub enum ShoppingCommands {
    /// Show all lists, or one list in full
    List {
        /// List name or id prefix (omit for the overview)
        list: Option<String>,
    },

    /// Create a new shopping list
    New {
        /// List name
        name: String,
    },

    /// Add an item to a list
    Add {
        /// List name or id prefix
        list: String,
        /// Item name
        item: String,
        /// Quantity
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },

    /// Check off an item
    Check {
        /// List name or id prefix
        list: String,
        /// Item id (or short prefix)
        item: String,
    },

    /// Uncheck an item
    Uncheck {
        /// List name or id prefix
        list: String,
        /// Item id (or short prefix)
        item: String,
    },

    /// Remove an item from a list
    Remove {
        /// List name or id prefix
        list: String,
        /// Item id (or short prefix)
        item: String,
    },

    /// Delete a whole list
    Drop {
        /// List name or id prefix
        list: String,
    },
}

fn resolve_item_id(list: &ShoppingList, prefix: &str) -> FintrackResult<ShoppingItemId> {
    list.items
        .iter()
        .find(|i| i.id.matches_prefix(prefix))
        .map(|i| i.id)
        .ok_or_else(|| FintrackError::NotFound {
            entity_type: "Shopping item",
            identifier: prefix.to_string(),
        })
}

/// Handle a shopping command
pub fn handle_shopping_command(storage: &Storage, cmd: ShoppingCommands) -> FintrackResult<()> {
    let service = ShoppingService::new(storage);

    match cmd {
        ShoppingCommands::List { list } => match list {
            Some(needle) => {
                let list = service.find_list(&needle)?;
                print!("{}", format_shopping_list(&list));
            }
            None => {
                let lists = service.list_all()?;
                print!("{}", format_shopping_overview(&lists));
            }
        },

        ShoppingCommands::New { name } => {
            let id = service.create_list(&name)?;
            println!("Created shopping list '{}' [{}]", name, id);
        }

        ShoppingCommands::Add {
            list,
            item,
            quantity,
        } => {
            let target = service.find_list(&list)?;
            let id = service.add_item(target.id, &item, quantity)?;
            println!("Added '{}' to '{}' [{}]", item, target.name, id);
        }

        ShoppingCommands::Check { list, item } => {
            let target = service.find_list(&list)?;
            let item_id = resolve_item_id(&target, &item)?;
            service.check_item(target.id, item_id)?;
            println!("Checked {} on '{}'", item_id, target.name);
        }

        ShoppingCommands::Uncheck { list, item } => {
            let target = service.find_list(&list)?;
            let item_id = resolve_item_id(&target, &item)?;
            service.uncheck_item(target.id, item_id)?;
            println!("Unchecked {} on '{}'", item_id, target.name);
        }

        ShoppingCommands::Remove { list, item } => {
            let target = service.find_list(&list)?;
            let item_id = resolve_item_id(&target, &item)?;
            service.remove_item(target.id, item_id)?;
            println!("Removed {} from '{}'", item_id, target.name);
        }

        ShoppingCommands::Drop { list } => {
            let target = service.find_list(&list)?;
            service.delete_list(target.id)?;
            println!("Deleted shopping list '{}'", target.name);
        }
    }

    Ok(())
}
