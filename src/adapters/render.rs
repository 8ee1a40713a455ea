use crate::domain::model::{CellStyle, ComparisonTable};
use crate::domain::ports::DocumentRenderer;
use crate::utils::error::Result;

/// Rough character budget per point of column width for the text backend.
const POINTS_PER_CHAR: f64 = 6.0;

/// Plain-text table backend. Spanning rows are painted across the full line
/// width; header and group-header rows get separator rules.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn char_widths(table: &ComparisonTable) -> Vec<usize> {
        table
            .column_widths
            .iter()
            .map(|w| ((w / POINTS_PER_CHAR).round() as usize).max(4))
            .collect()
    }

    fn pad(text: &str, width: usize) -> String {
        let flat = text.replace('\n', " / ");
        let mut out: String = flat.chars().take(width).collect();
        while out.chars().count() < width {
            out.push(' ');
        }
        out
    }
}

impl DocumentRenderer for TextRenderer {
    fn render(&self, table: &ComparisonTable) -> Result<Vec<u8>> {
        let widths = Self::char_widths(table);
        let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 3;

        let mut out = String::new();
        out.push_str(&table.title);
        out.push('\n');
        out.push_str(&format!(
            "Generated: {}\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str(&"=".repeat(total.max(table.title.chars().count())));
        out.push('\n');

        for (row_index, row) in table.matrix.iter().enumerate() {
            if table.span_rows.contains(&row_index) {
                // spanning row: the label occupies the whole line
                let label = row.first().map(|c| c.text.as_str()).unwrap_or("");
                out.push_str(&format!("[ {} ]\n", label));
                continue;
            }

            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| Self::pad(&cell.text, *width))
                .collect();
            out.push_str(&line.join(" | "));
            out.push('\n');

            if row_index == 0 && row.iter().any(|c| c.style == CellStyle::Header) {
                out.push_str(&"-".repeat(total));
                out.push('\n');
            }
        }

        Ok(out.into_bytes())
    }
}

/// CSV backend: one record per matrix row, embedded newlines flattened so
/// the output stays one line per table row.
#[derive(Debug, Clone, Default)]
pub struct CsvRenderer;

impl DocumentRenderer for CsvRenderer {
    fn render(&self, table: &ComparisonTable) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in &table.matrix {
            let record: Vec<String> =
                row.iter().map(|c| c.text.replace('\n', " / ")).collect();
            writer.write_record(&record)?;
        }
        writer
            .into_inner()
            .map_err(|e| crate::utils::error::CompareError::Render {
                message: e.to_string(),
            })
    }
}
