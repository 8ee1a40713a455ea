use crate::core::aggregator::OptionGrid;
use crate::domain::model::{Cell, CellStyle, ComparisonTable, EquipmentView, PageGeometry};
use std::collections::HashSet;

/// Presence mark painted into a property cell.
pub const CHECK_MARK: &str = "✓";

const FIRST_COL_SHARE: f64 = 0.40;
const FIRST_COL_MIN: f64 = 120.0;
const FIRST_COL_FLOOR: f64 = 100.0;
const OTHER_COL_MIN: f64 = 60.0;

/// Column widths for the comparison table under a fixed page budget.
///
/// The label column takes 40% of the usable width (at least 120pt), the rest
/// is split evenly across equipment columns. If that leaves equipment
/// columns under 60pt, the label column gives back the difference down to a
/// 100pt floor. A single pass; at very large column counts the equipment
/// width may still end up under 60pt, which is accepted.
pub fn compute_column_widths(
    num_equipments: usize,
    page_width: f64,
    left: f64,
    right: f64,
) -> Vec<f64> {
    let usable = page_width - left - right;
    let mut first_col = (usable * FIRST_COL_SHARE).max(FIRST_COL_MIN);
    let mut remaining = (usable - first_col).max(0.0);
    let mut other = remaining / num_equipments.max(1) as f64;

    if other < OTHER_COL_MIN {
        let extra_needed = OTHER_COL_MIN * num_equipments as f64 - remaining;
        first_col = (first_col - extra_needed).max(FIRST_COL_FLOOR);
        remaining = (usable - first_col).max(0.0);
        other = remaining / num_equipments.max(1) as f64;
    }

    let mut widths = Vec::with_capacity(num_equipments + 1);
    widths.push(first_col);
    widths.extend(std::iter::repeat(other).take(num_equipments));
    widths
}

/// Thousands-separated price, e.g. `1234567` -> `"1,234,567"`.
pub fn format_price(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn header_cell(equipment: &EquipmentView) -> Cell {
    let text = format!(
        "{}\n{}\n{}\n{}",
        equipment.brand_name,
        equipment.model_name,
        equipment.name,
        format_price(equipment.price)
    );
    Cell::new(text, CellStyle::Header)
}

/// (group name, title) pairs one equipment actually has, for O(1) presence
/// tests. Output is identical to scanning the option list per cell.
fn presence_index(equipment: &EquipmentView) -> HashSet<(String, String)> {
    let mut index = HashSet::new();
    for option in &equipment.options {
        let group = option.name.clone().unwrap_or_default();
        for property in &option.properties {
            if let Some(title) = property.title.as_deref() {
                if !title.is_empty() {
                    index.insert((group.clone(), title.to_string()));
                }
            }
        }
    }
    index
}

/// Build the cell matrix and the set of spanning-row indices.
///
/// Row 0 is the equipment header. Each grid group then contributes one
/// spanning group-header row followed by one row per property title, with a
/// check mark wherever the equipment carries that exact (group, title) pair.
pub fn build_matrix(
    equipments: &[EquipmentView],
    grid: &OptionGrid,
) -> (Vec<Vec<Cell>>, Vec<usize>) {
    let presence: Vec<HashSet<(String, String)>> =
        equipments.iter().map(presence_index).collect();

    let mut matrix = Vec::with_capacity(1 + grid.len());
    let mut span_rows = Vec::with_capacity(grid.len());

    let mut header = Vec::with_capacity(equipments.len() + 1);
    header.push(Cell::new("", CellStyle::Header));
    header.extend(equipments.iter().map(header_cell));
    matrix.push(header);

    for group in grid.groups() {
        span_rows.push(matrix.len());
        let mut group_row = Vec::with_capacity(equipments.len() + 1);
        group_row.push(Cell::new(group.name.clone(), CellStyle::GroupHeader));
        group_row.extend((0..equipments.len()).map(|_| Cell::new("", CellStyle::Body)));
        matrix.push(group_row);

        for title in &group.titles {
            let mut row = Vec::with_capacity(equipments.len() + 1);
            row.push(Cell::new(title.clone(), CellStyle::Body));
            for index in &presence {
                let mark = if index.contains(&(group.name.clone(), title.clone())) {
                    CHECK_MARK
                } else {
                    ""
                };
                row.push(Cell::new(mark, CellStyle::Body));
            }
            matrix.push(row);
        }
    }

    (matrix, span_rows)
}

/// Assemble the full layout for a comparison request.
pub fn build_table(
    title: &str,
    equipments: &[EquipmentView],
    grid: &OptionGrid,
    geometry: PageGeometry,
) -> ComparisonTable {
    let (matrix, span_rows) = build_matrix(equipments, grid);
    let column_widths = compute_column_widths(
        equipments.len(),
        geometry.page_width,
        geometry.left_margin,
        geometry.right_margin,
    );
    ComparisonTable {
        title: title.to_string(),
        matrix,
        column_widths,
        span_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregator::OptionColumn;
    use crate::core::normalizer::normalize;
    use crate::domain::model::{EquipmentRecord, GroupRef, PropertyRecord};

    fn equipment(id: i64, name: &str, options: &[(&str, &[&str])]) -> EquipmentView {
        let mut properties = Vec::new();
        let mut next = id * 1000;
        for (gi, (group, titles)) in options.iter().enumerate() {
            for title in *titles {
                properties.push(PropertyRecord {
                    id: next,
                    title: Some(title.to_string()),
                    group: Some(GroupRef {
                        id: gi as i64 + 1,
                        name: Some(group.to_string()),
                    }),
                });
                next += 1;
            }
        }
        normalize(&EquipmentRecord {
            id,
            name: name.to_string(),
            price: 1_234_567,
            old_price: 0,
            brand_name: "Chevrolet".to_string(),
            model_name: "Onix".to_string(),
            properties,
        })
    }

    #[test]
    fn test_widths_no_shrink_single_equipment() {
        let widths = compute_column_widths(1, 595.0, 20.0, 20.0);
        assert_eq!(widths.len(), 2);
        assert!((widths[0] - 222.0).abs() < 1e-9);
        assert!((widths[1] - 333.0).abs() < 1e-9);
    }

    #[test]
    fn test_widths_shrink_branch_respects_floor() {
        let widths = compute_column_widths(10, 595.0, 20.0, 20.0);
        assert_eq!(widths.len(), 11);
        // 555 usable: 222 leaves 33.3/col, shrink kicks in, floor holds at 100
        assert!((widths[0] - 100.0).abs() < 1e-9);
        for w in &widths[1..] {
            assert!((*w - 45.5).abs() < 1e-9);
            assert!(*w > 0.0);
        }
    }

    #[test]
    fn test_widths_zero_equipments() {
        let widths = compute_column_widths(0, 595.0, 20.0, 20.0);
        assert_eq!(widths.len(), 1);
        assert!(widths[0] >= 100.0);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1_000), "1,000");
        assert_eq!(format_price(1_234_567), "1,234,567");
        assert_eq!(format_price(-25_000), "-25,000");
    }

    #[test]
    fn test_span_rows_account_for_zero_length_groups() {
        // group A with 2 titles, group B empty: headers land at rows 1 and 4
        let grid = OptionGrid::from_columns(vec![
            OptionColumn {
                name: "A".to_string(),
                titles: vec!["a1".to_string(), "a2".to_string()],
            },
            OptionColumn {
                name: "B".to_string(),
                titles: Vec::new(),
            },
        ]);
        let (matrix, spans) = build_matrix(&[], &grid);
        assert_eq!(spans, vec![1, 4]);
        assert_eq!(matrix.len(), 5);
    }

    #[test]
    fn test_matrix_presence_marks() {
        let e1 = equipment(1, "LT", &[("Safety", &["ABS", "Airbag"])]);
        let e2 = equipment(2, "LTZ", &[("Comfort", &["AC"]), ("Safety", &["Airbag", "ESP"])]);
        let views = vec![e1, e2];
        let grid = OptionGrid::aggregate(&views);

        let (matrix, spans) = build_matrix(&views, &grid);

        // header + Safety(1+3) + Comfort(1+1)
        assert_eq!(matrix.len(), 7);
        assert_eq!(spans, vec![1, 5]);
        assert_eq!(matrix[1][0].text, "Safety");
        assert_eq!(matrix[1][0].style, CellStyle::GroupHeader);

        // row 2 = ABS: present for e1 only
        assert_eq!(matrix[2][0].text, "ABS");
        assert_eq!(matrix[2][1].text, CHECK_MARK);
        assert_eq!(matrix[2][2].text, "");

        // row 3 = Airbag: present for both
        assert_eq!(matrix[3][1].text, CHECK_MARK);
        assert_eq!(matrix[3][2].text, CHECK_MARK);

        // row 4 = ESP: present for e2 only
        assert_eq!(matrix[4][1].text, "");
        assert_eq!(matrix[4][2].text, CHECK_MARK);
    }

    #[test]
    fn test_header_row_contents() {
        let views = vec![equipment(1, "LT", &[])];
        let grid = OptionGrid::aggregate(&views);
        let (matrix, _) = build_matrix(&views, &grid);

        assert_eq!(matrix[0][0].text, "");
        assert_eq!(matrix[0][1].text, "Chevrolet\nOnix\nLT\n1,234,567");
        assert_eq!(matrix[0][1].style, CellStyle::Header);
    }
}
