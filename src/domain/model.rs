use serde::{Deserialize, Serialize};

/// Raw catalog record for one equipment (a priced trim configuration),
/// as delivered by a catalog provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: i64,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub old_price: i64,
    pub brand_name: String,
    pub model_name: String,
    #[serde(default)]
    pub properties: Vec<PropertyRecord>,
}

/// One feature/spec line. The owning group is optional; a dangling or
/// absent group is tolerated and treated as ungrouped downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: i64,
    pub title: Option<String>,
    #[serde(default)]
    pub group: Option<GroupRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRef {
    pub id: i64,
    pub name: Option<String>,
}

/// Flat per-equipment view produced by the normalizer. `options` is sorted
/// by `(group name, group id)` — a stable per-item ordering that is distinct
/// from the first-seen ordering the aggregator applies across equipments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentView {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub old_price: i64,
    pub brand_name: String,
    pub model_name: String,
    pub options: Vec<OptionGroupView>,
}

/// Grouped options of one equipment. Ungrouped properties land in a
/// synthetic group with `id: None` and name "Other".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionGroupView {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub properties: Vec<PropertyView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyView {
    pub id: i64,
    pub title: Option<String>,
}

/// Page geometry for the layout engine, in points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageGeometry {
    pub page_width: f64,
    pub left_margin: f64,
    pub right_margin: f64,
}

impl PageGeometry {
    /// A4 portrait with the margins the comparison sheet uses.
    pub fn a4() -> Self {
        Self {
            page_width: 595.28,
            left_margin: 20.0,
            right_margin: 20.0,
        }
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStyle {
    /// Row 0: equipment column headings.
    Header,
    /// Spanning row carrying only an option-group name.
    GroupHeader,
    /// Property label or presence mark.
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub style: CellStyle,
}

impl Cell {
    pub fn new(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Finished layout for one comparison request. `span_rows` holds the matrix
/// row indices a renderer must merge across all columns (group headers).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub title: String,
    pub matrix: Vec<Vec<Cell>>,
    pub column_widths: Vec<f64>,
    pub span_rows: Vec<usize>,
}

impl ComparisonTable {
    pub fn num_rows(&self) -> usize {
        self.matrix.len()
    }

    pub fn num_columns(&self) -> usize {
        self.matrix.first().map(Vec::len).unwrap_or(0)
    }
}
