use crate::domain::model::{EquipmentRecord, EquipmentView, OptionGroupView, PropertyView};
use std::collections::HashMap;

/// Display name of the synthetic group collecting ungrouped properties.
pub const UNGROUPED_NAME: &str = "Other";

/// Flatten one catalog record into the per-equipment view.
///
/// Properties are partitioned by their owning group's identity; a property
/// with no group (or a dangling reference) lands in a single synthetic group
/// with `id: None` and the name "Other". The resulting groups are sorted by
/// `(name, id)` ascending so the per-equipment view is stable regardless of
/// the record's property order. Property order within a group is kept as
/// delivered by the provider.
pub fn normalize(record: &EquipmentRecord) -> EquipmentView {
    let mut groups: Vec<OptionGroupView> = Vec::new();
    let mut slots: HashMap<Option<i64>, usize> = HashMap::new();

    for prop in &record.properties {
        let (group_id, group_name) = match &prop.group {
            Some(group) => (Some(group.id), group.name.clone()),
            None => (None, Some(UNGROUPED_NAME.to_string())),
        };

        let slot = *slots.entry(group_id).or_insert_with(|| {
            groups.push(OptionGroupView {
                id: group_id,
                name: group_name,
                properties: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].properties.push(PropertyView {
            id: prop.id,
            title: prop.title.clone(),
        });
    }

    groups.sort_by_key(|g| (g.name.clone().unwrap_or_default(), g.id.unwrap_or(0)));

    EquipmentView {
        id: record.id,
        name: record.name.clone(),
        price: record.price,
        old_price: record.old_price,
        brand_name: record.brand_name.clone(),
        model_name: record.model_name.clone(),
        options: groups,
    }
}
