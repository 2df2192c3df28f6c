use crate::domain::model::{MenuGroups, MenuRecord};
use std::collections::BTreeMap;

/// Menus the stock template set is built for.
pub const DEFAULT_MENU_INDICES: [u32; 2] = [1, 2];

/// Splits sorted records into one group per known menu index.
///
/// Every known index gets a group, even when empty. Records with any other
/// index are left out of all groups and counted in [`MenuGroups::dropped`].
pub fn partition(records: Vec<MenuRecord>, known_indices: &[u32]) -> MenuGroups {
    let mut groups: BTreeMap<u32, Vec<MenuRecord>> = known_indices
        .iter()
        .map(|&index| (index, Vec::new()))
        .collect();
    let mut dropped = 0;

    for record in records {
        let group = u32::try_from(record.menu_index)
            .ok()
            .and_then(|index| groups.get_mut(&index));
        match group {
            Some(group) => group.push(record),
            None => {
                tracing::warn!(
                    menu_index = record.menu_index,
                    name = %record.name,
                    "Unknown menu index, item left off every menu"
                );
                dropped += 1;
            }
        }
    }

    MenuGroups { groups, dropped }
}
