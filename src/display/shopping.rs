//! Shopping list display formatting

use crate::models::ShoppingList;

/// Format one shopping list with checkboxes
pub fn format_shopping_list(list: &ShoppingList) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} ({}/{} done)\n",
        list.name,
        list.checked_count(),
        list.items.len()
    ));

    if list.items.is_empty() {
        output.push_str("  (empty)\n");
        return output;
    }

    for item in &list.items {
        let mark = if item.checked { "x" } else { " " };
        let qty = if item.quantity > 1 {
            format!(" x{}", item.quantity)
        } else {
            String::new()
        };
        output.push_str(&format!("  [{}] {}  {}{}\n", mark, item.id, item.name, qty));
    }
    output
}

/// Format the overview of all lists
pub fn format_shopping_overview(lists: &[ShoppingList]) -> String {
    if lists.is_empty() {
        return "No shopping lists found.\n".to_string();
    }

    let mut output = String::new();
    for list in lists {
        output.push_str(&format!(
            "  {}  {:<24} {}/{} done\n",
            list.id,
            list.name,
            list.checked_count(),
            list.items.len()
        ));
    }
    output
}
