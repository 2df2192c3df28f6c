use crate::domain::model::MenuRecord;
use std::cmp::Ordering;

fn vegetarian_tier(record: &MenuRecord) -> u8 {
    if record.is_vegetarian() {
        0
    } else {
        1
    }
}

/// Vegetarian items first, then cheapest first, then by name.
pub fn display_order(a: &MenuRecord, b: &MenuRecord) -> Ordering {
    vegetarian_tier(a)
        .cmp(&vegetarian_tier(b))
        .then_with(|| a.price.total_cmp(&b.price))
        .then_with(|| a.name.cmp(&b.name))
}

/// Stable: records equal under [`display_order`] keep their input order.
pub fn sort_for_display(mut records: Vec<MenuRecord>) -> Vec<MenuRecord> {
    records.sort_by(display_order);
    records
}
