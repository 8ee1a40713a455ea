use crate::domain::model::EquipmentView;
use std::collections::{HashMap, HashSet};

/// One logical column-group of the comparison grid: a group display name and
/// the de-duplicated property titles collected under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionColumn {
    pub name: String,
    pub titles: Vec<String>,
}

/// The aggregated, first-seen-ordered union of option groups and property
/// titles across the selected equipments. Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct OptionGrid {
    groups: Vec<OptionColumn>,
}

impl OptionGrid {
    /// Merge the option sets of the given equipments, in order.
    ///
    /// Groups are keyed by display name (not backing identifier), so
    /// same-named groups from different equipments collapse into one
    /// column-group. Groups appear in first-seen order; titles within a
    /// group appear in first-seen order with duplicates and empty titles
    /// skipped. The equipments' option lists are already in a fixed order
    /// (normalizer contract), so the result is fully deterministic.
    pub fn aggregate(equipments: &[EquipmentView]) -> Self {
        let mut groups: Vec<OptionColumn> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut seen: Vec<HashSet<String>> = Vec::new();

        for equipment in equipments {
            for option in &equipment.options {
                let key = option.name.clone().unwrap_or_default();
                let slot = *slots.entry(key.clone()).or_insert_with(|| {
                    groups.push(OptionColumn {
                        name: key,
                        titles: Vec::new(),
                    });
                    seen.push(HashSet::new());
                    groups.len() - 1
                });

                for property in &option.properties {
                    let title = match property.title.as_deref() {
                        Some(t) if !t.is_empty() => t,
                        _ => continue,
                    };
                    if seen[slot].insert(title.to_string()) {
                        groups[slot].titles.push(title.to_string());
                    }
                }
            }
        }

        Self { groups }
    }

    /// Build a grid from pre-assembled columns, bypassing aggregation.
    pub fn from_columns(groups: Vec<OptionColumn>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[OptionColumn] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }
}
