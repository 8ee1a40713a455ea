use crate::domain::model::PageGeometry;
use crate::utils::error::{CompareError, Result};
use crate::utils::validation::{validate_endpoint_url, validate_page_geometry, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A comparison job described in a TOML file: which equipments to compare,
/// where the catalog lives, and how to emit the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub job: JobInfo,
    pub catalog: CatalogSource,
    pub page: Option<PageConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInfo {
    pub title: Option<String>,
    pub ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSource {
    pub path: Option<String>,
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub width: Option<f64>,
    pub left_margin: Option<f64>,
    pub right_margin: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub path: Option<String>,
}

impl JobConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: JobConfig = toml::from_str(&content)
            .map_err(|e| CompareError::config(format!("invalid job file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn geometry(&self) -> PageGeometry {
        let defaults = PageGeometry::a4();
        match &self.page {
            Some(page) => PageGeometry {
                page_width: page.width.unwrap_or(defaults.page_width),
                left_margin: page.left_margin.unwrap_or(defaults.left_margin),
                right_margin: page.right_margin.unwrap_or(defaults.right_margin),
            },
            None => defaults,
        }
    }

    pub fn title(&self) -> &str {
        self.job
            .title
            .as_deref()
            .unwrap_or(crate::core::comparison::DEFAULT_TITLE)
    }

    pub fn format(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .unwrap_or("text")
    }
}

impl Validate for JobConfig {
    fn validate(&self) -> Result<()> {
        match (&self.catalog.path, &self.catalog.endpoint) {
            (None, None) => {
                return Err(CompareError::config(
                    "catalog needs either a path or an endpoint",
                ))
            }
            (Some(_), Some(_)) => {
                return Err(CompareError::config(
                    "catalog path and endpoint are mutually exclusive",
                ))
            }
            (None, Some(endpoint)) => validate_endpoint_url("catalog.endpoint", endpoint)?,
            (Some(_), None) => {}
        }

        if self.job.ids.is_empty() {
            return Err(CompareError::validation("Empty ids list."));
        }
        if !matches!(self.format(), "text" | "csv") {
            return Err(CompareError::config(format!(
                "unsupported output format: {}",
                self.format()
            )));
        }
        validate_page_geometry(&self.geometry())
    }
}
