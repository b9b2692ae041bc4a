use std::fmt;

use serde::{Deserialize, Serialize};

/// Grocery aisle grouping used to present a shopping list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Produce,
    Meat,
    Dairy,
    Pantry,
    Bakery,
    Frozen,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::Meat => "meat",
            Category::Dairy => "dairy",
            Category::Pantry => "pantry",
            Category::Bakery => "bakery",
            Category::Frozen => "frozen",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    /// Ticked off in the current view only, never persisted
    pub checked: bool,
    pub original: String,
}

impl fmt::Display for ShoppingListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.checked { "x" } else { " " };
        let amount = [self.quantity.as_str(), self.unit.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if amount.is_empty() {
            write!(f, "[{}] {}", mark, self.name)
        } else {
            write!(f, "[{}] {}: {}", mark, self.name, amount)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListCategory {
    pub category: Category,
    pub items: Vec<ShoppingListItem>,
}

impl ShoppingListCategory {
    /// Flip the checked flag of the item at `index`
    ///
    /// Returns the new state, or `None` when the index is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let item = self.items.get_mut(index)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: &str, unit: &str) -> ShoppingListItem {
        ShoppingListItem {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
            checked: false,
            original: format!("{} {} {}", quantity, unit, name),
        }
    }

    #[test]
    fn test_item_to_string() {
        assert_eq!(item("flour", "2", "cup").to_string(), "[ ] flour: 2 cup");
        assert_eq!(item("eggs", "3", "").to_string(), "[ ] eggs: 3");
        assert_eq!(item("salt", "", "").to_string(), "[ ] salt");
    }

    #[test]
    fn test_toggle_flips_checked() {
        let mut category = ShoppingListCategory {
            category: Category::Pantry,
            items: vec![item("flour", "2", "cup"), item("sugar", "1", "cup")],
        };

        assert_eq!(category.toggle(1), Some(true));
        assert_eq!(category.checked_count(), 1);
        assert_eq!(category.items[1].to_string(), "[x] sugar: 1 cup");

        assert_eq!(category.toggle(1), Some(false));
        assert_eq!(category.checked_count(), 0);

        assert_eq!(category.toggle(5), None);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Produce).expect("Failed to serialize");
        assert_eq!(json, r#""produce""#);
        assert_eq!(Category::Frozen.to_string(), "frozen");
    }
}
