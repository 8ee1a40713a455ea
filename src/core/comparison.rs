use crate::core::aggregator::OptionGrid;
use crate::core::{layout, normalizer};
use crate::domain::model::{ComparisonTable, PageGeometry};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{CompareError, Result};
use crate::utils::validation;

pub const DEFAULT_TITLE: &str = "Equipment comparison";

/// Request-scoped comparison pipeline: validate, fetch, normalize,
/// aggregate, lay out. Holds no state between requests; everything built
/// here is discarded once the table is handed to a renderer.
pub struct ComparisonEngine<C: CatalogProvider> {
    catalog: C,
    title: String,
}

impl<C: CatalogProvider> ComparisonEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn with_title(catalog: C, title: impl Into<String>) -> Self {
        Self {
            catalog,
            title: title.into(),
        }
    }

    /// Build the comparison table for already-validated identifiers.
    ///
    /// Unknown ids are dropped by the catalog; if nothing remains the
    /// request fails with `EmptyResult` and no layout is produced.
    pub async fn build(&self, ids: &[i64], geometry: PageGeometry) -> Result<ComparisonTable> {
        validation::validate_page_geometry(&geometry)?;
        if ids.is_empty() {
            return Err(CompareError::validation("Empty ids list."));
        }

        tracing::debug!("Fetching {} equipment ids", ids.len());
        let records = self.catalog.fetch_ordered(ids).await?;
        if records.is_empty() {
            return Err(CompareError::empty_result(
                "No equipments found for provided ids.",
            ));
        }
        tracing::debug!(
            "Resolved {} of {} requested equipments",
            records.len(),
            ids.len()
        );

        let views: Vec<_> = records.iter().map(normalizer::normalize).collect();
        let grid = OptionGrid::aggregate(&views);
        tracing::debug!(
            "Aggregated grid: {} groups across {} equipments",
            grid.len(),
            views.len()
        );

        Ok(layout::build_table(&self.title, &views, &grid, geometry))
    }

    /// Validate a raw request payload (`{"ids": [...]}`) and build the table.
    pub async fn build_from_payload(
        &self,
        payload: &serde_json::Value,
        geometry: PageGeometry,
    ) -> Result<ComparisonTable> {
        let ids = validation::parse_ids(payload)?;
        self.build(&ids, geometry).await
    }
}
