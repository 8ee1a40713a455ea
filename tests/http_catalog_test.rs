use anyhow::Result;
use carcompare::{ComparisonEngine, HttpCatalog, PageGeometry};
use httpmock::prelude::*;
use serde_json::json;

fn catalog_body() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "name": "LT",
            "price": 120000,
            "old_price": 125000,
            "brand_name": "Chevrolet",
            "model_name": "Onix",
            "properties": [
                {"id": 10, "title": "ABS", "group": {"id": 1, "name": "Safety"}}
            ]
        },
        {
            "id": 2,
            "name": "LTZ",
            "price": 150000,
            "old_price": 160000,
            "brand_name": "Chevrolet",
            "model_name": "Onix",
            "properties": [
                {"id": 20, "title": "AC", "group": {"id": 2, "name": "Comfort"}},
                {"id": 21, "title": "ESP", "group": {"id": 1, "name": "Safety"}}
            ]
        }
    ])
}

#[tokio::test]
async fn test_comparison_against_remote_catalog() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/equipments");
        then.status(200).json_body(catalog_body());
    });

    let catalog = HttpCatalog::new(server.url("/equipments"))?;
    let engine = ComparisonEngine::new(catalog);
    let table = engine.build(&[2, 1], PageGeometry::a4()).await?;

    mock.assert();
    assert_eq!(table.num_columns(), 3);
    assert!(table.matrix[0][1].text.contains("LTZ"));
    assert!(table.matrix[0][2].text.contains("LT\n"));

    // E2 comes first, so its per-equipment order (Comfort, Safety) drives
    // the first-seen group order
    let groups: Vec<&str> = table
        .span_rows
        .iter()
        .map(|&r| table.matrix[r][0].text.as_str())
        .collect();
    assert_eq!(groups, vec!["Comfort", "Safety"]);
    Ok(())
}

#[tokio::test]
async fn test_remote_catalog_with_no_matching_ids() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/equipments");
        then.status(200).json_body(catalog_body());
    });

    let catalog = HttpCatalog::new(server.url("/equipments"))?;
    let engine = ComparisonEngine::new(catalog);
    let err = engine
        .build(&[404], PageGeometry::a4())
        .await
        .unwrap_err();
    assert!(err.is_empty_result());
    Ok(())
}

#[tokio::test]
async fn test_remote_catalog_server_error_propagates() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/equipments");
        then.status(500);
    });

    let catalog = HttpCatalog::new(server.url("/equipments"))?;
    let engine = ComparisonEngine::new(catalog);
    let err = engine
        .build(&[1], PageGeometry::a4())
        .await
        .unwrap_err();
    assert!(matches!(err, carcompare::CompareError::Catalog(_)));
    Ok(())
}
