use crate::domain::model::EquipmentRecord;
use crate::domain::ports::CatalogProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_endpoint_url;
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::path::Path;

/// Reorder fetched records to match the requested id order, dropping ids
/// the catalog does not know. A duplicated id yields a duplicated column.
fn order_by_ids(records: Vec<EquipmentRecord>, ids: &[i64]) -> Vec<EquipmentRecord> {
    let by_id: HashMap<i64, EquipmentRecord> =
        records.into_iter().map(|r| (r.id, r)).collect();
    ids.iter()
        .filter_map(|id| by_id.get(id).cloned())
        .collect()
}

/// Catalog held fully in memory. Also the test double of choice.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: Vec<EquipmentRecord>,
}

impl InMemoryCatalog {
    pub fn new(records: Vec<EquipmentRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn fetch_ordered(&self, ids: &[i64]) -> Result<Vec<EquipmentRecord>> {
        Ok(order_by_ids(self.records.clone(), ids))
    }
}

/// Catalog backed by a JSON file holding an array of equipment records.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    records: Vec<EquipmentRecord>,
}

impl JsonCatalog {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path)?;
        let records: Vec<EquipmentRecord> = serde_json::from_slice(&data)?;
        tracing::debug!("Loaded {} equipment records from catalog file", records.len());
        Ok(Self { records })
    }
}

#[async_trait]
impl CatalogProvider for JsonCatalog {
    async fn fetch_ordered(&self, ids: &[i64]) -> Result<Vec<EquipmentRecord>> {
        Ok(order_by_ids(self.records.clone(), ids))
    }
}

/// Catalog served by a remote HTTP endpoint returning the equipment array
/// as JSON. The endpoint is fetched per request; ordering and unknown-id
/// dropping happen client-side.
pub struct HttpCatalog {
    endpoint: String,
    client: Client,
}

impl HttpCatalog {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_endpoint_url("catalog_endpoint", &endpoint)?;
        Ok(Self {
            endpoint,
            client: Client::new(),
        })
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalog {
    async fn fetch_ordered(&self, ids: &[i64]) -> Result<Vec<EquipmentRecord>> {
        tracing::debug!("Fetching catalog from {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let records: Vec<EquipmentRecord> = response.json().await?;
        Ok(order_by_ids(records, ids))
    }
}
