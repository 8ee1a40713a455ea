use crate::domain::model::{ComparisonTable, EquipmentRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read side of the catalog. Implementations must preserve the order of
/// `ids` in the returned records and silently drop unknown identifiers.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_ordered(&self, ids: &[i64]) -> Result<Vec<EquipmentRecord>>;
}

/// Output side: paints a finished table into a binary document. Rendering
/// is pure with respect to the table; it never mutates shared state.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, table: &ComparisonTable) -> Result<Vec<u8>>;
}
