use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One sellable menu item as read from the menu CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub name: String,
    pub ingredients: String,
    /// Any whole number; only configured menus are rendered.
    pub menu_index: i64,
    pub price: f64,
    /// Free-form tag. Only a case-insensitive "v" carries meaning.
    pub flag: String,
}

impl MenuRecord {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        menu_index: i64,
        price: f64,
        flag: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            menu_index,
            price,
            flag: flag.into(),
        }
    }

    pub fn is_vegetarian(&self) -> bool {
        self.flag.eq_ignore_ascii_case("v")
    }

    /// Plain decimal text, no currency symbol. At least two fraction digits,
    /// never fewer than the value needs.
    pub fn price_text(&self) -> String {
        let mut text = self.price.to_string();
        match text.find('.') {
            Some(dot) => {
                let fraction_digits = text.len() - dot - 1;
                for _ in fraction_digits..2 {
                    text.push('0');
                }
            }
            None => text.push_str(".00"),
        }
        text
    }
}

/// Sorted records split by menu index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuGroups {
    pub groups: BTreeMap<u32, Vec<MenuRecord>>,
    /// Records whose index was not one of the known menus.
    pub dropped: usize,
}

impl MenuGroups {
    pub fn get(&self, menu_index: u32) -> Option<&[MenuRecord]> {
        self.groups.get(&menu_index).map(Vec::as_slice)
    }

    pub fn total_records(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedMenu {
    pub menu_index: u32,
    pub path: String,
    pub items: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub records_loaded: usize,
    pub records_dropped: usize,
    pub menus: Vec<PublishedMenu>,
}

impl RunSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
