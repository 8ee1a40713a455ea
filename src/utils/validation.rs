use crate::utils::error::{CompareError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parse the `ids` field of a comparison request payload.
///
/// The field must be present, list-shaped, non-empty after parsing, and every
/// element must be coercible to an integer identifier. Violations surface as
/// `CompareError::Validation` before any catalog fetch runs.
pub fn parse_ids(payload: &serde_json::Value) -> Result<Vec<i64>> {
    let ids = payload
        .get("ids")
        .ok_or_else(|| CompareError::validation("Field 'ids' is required."))?;

    let items = ids
        .as_array()
        .ok_or_else(|| CompareError::validation("Field 'ids' must be a list of integers."))?;

    let mut parsed = Vec::with_capacity(items.len());
    for item in items {
        parsed.push(coerce_id(item)?);
    }

    if parsed.is_empty() {
        return Err(CompareError::validation("Empty ids list."));
    }
    Ok(parsed)
}

/// Accepts integer numbers, whole-valued floats (truncated), and numeric
/// strings. Everything else is a validation failure.
fn coerce_id(value: &serde_json::Value) -> Result<i64> {
    match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                Ok(f.trunc() as i64)
            } else {
                Err(CompareError::validation("All ids must be integers."))
            }
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| CompareError::validation("All ids must be integers.")),
        _ => Err(CompareError::validation("All ids must be integers.")),
    }
}

pub fn validate_endpoint_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CompareError::config(format!(
            "{}: URL cannot be empty",
            field_name
        )));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CompareError::config(format!(
                "{}: unsupported URL scheme: {}",
                field_name, scheme
            ))),
        },
        Err(e) => Err(CompareError::config(format!(
            "{}: invalid URL format: {}",
            field_name, e
        ))),
    }
}

pub fn validate_page_geometry(geometry: &crate::domain::model::PageGeometry) -> Result<()> {
    if !geometry.page_width.is_finite() || geometry.page_width <= 0.0 {
        return Err(CompareError::config(format!(
            "page_width must be a positive number, got {}",
            geometry.page_width
        )));
    }
    if geometry.left_margin < 0.0 || geometry.right_margin < 0.0 {
        return Err(CompareError::config("margins cannot be negative"));
    }
    if geometry.left_margin + geometry.right_margin >= geometry.page_width {
        return Err(CompareError::config(
            "margins leave no usable width on the page",
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CompareError::config(format!(
            "{}: value cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}
