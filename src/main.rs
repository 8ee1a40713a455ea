use anyhow::Result;
use carcompare::core::comparison::ComparisonEngine;
use carcompare::domain::model::{ComparisonTable, PageGeometry};
use carcompare::domain::ports::DocumentRenderer;
use carcompare::utils::{logger, validation::Validate};
use carcompare::{CompareError, CsvRenderer, HttpCatalog, JobConfig, JsonCatalog, TextRenderer};
use clap::Parser;

use carcompare::CliConfig;

enum CatalogSource {
    File(String),
    Http(String),
}

struct ResolvedJob {
    title: String,
    ids: Vec<i64>,
    source: CatalogSource,
    geometry: PageGeometry,
    format: String,
    output: Option<String>,
}

fn resolve(config: &CliConfig) -> Result<ResolvedJob, CompareError> {
    if let Some(job_path) = &config.job {
        let job = JobConfig::from_file(job_path)?;
        let source = match (&job.catalog.path, &job.catalog.endpoint) {
            (Some(path), _) => CatalogSource::File(path.clone()),
            (_, Some(endpoint)) => CatalogSource::Http(endpoint.clone()),
            _ => unreachable!("validated by JobConfig::from_file"),
        };
        return Ok(ResolvedJob {
            title: job.title().to_string(),
            ids: job.job.ids.clone(),
            source,
            geometry: job.geometry(),
            format: job.format().to_string(),
            output: job.output.as_ref().and_then(|o| o.path.clone()),
        });
    }

    config.validate()?;
    let source = match (&config.catalog, &config.endpoint) {
        (Some(path), _) => CatalogSource::File(path.clone()),
        (_, Some(endpoint)) => CatalogSource::Http(endpoint.clone()),
        _ => unreachable!("validated above"),
    };
    Ok(ResolvedJob {
        title: config.title.clone(),
        ids: config.ids.clone(),
        source,
        geometry: config.geometry(),
        format: config.format.clone(),
        output: config.output.clone(),
    })
}

async fn build_table(job: &ResolvedJob) -> Result<ComparisonTable, CompareError> {
    match &job.source {
        CatalogSource::File(path) => {
            let engine = ComparisonEngine::with_title(JsonCatalog::from_file(path)?, &job.title);
            engine.build(&job.ids, job.geometry).await
        }
        CatalogSource::Http(endpoint) => {
            let engine = ComparisonEngine::with_title(HttpCatalog::new(endpoint)?, &job.title);
            engine.build(&job.ids, job.geometry).await
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting carcompare");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let job = match resolve(&config) {
        Ok(job) => job,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let table = match build_table(&job).await {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("Comparison failed: {}", e);
            eprintln!("❌ {}", e);
            let exit_code = if e.is_validation() {
                2
            } else if e.is_empty_result() {
                3
            } else {
                1
            };
            std::process::exit(exit_code);
        }
    };

    tracing::info!(
        "Built comparison table: {} rows x {} columns",
        table.num_rows(),
        table.num_columns()
    );

    let renderer: Box<dyn DocumentRenderer> = match job.format.as_str() {
        "csv" => Box::new(CsvRenderer),
        _ => Box::new(TextRenderer),
    };
    let bytes = renderer.render(&table)?;

    match &job.output {
        Some(path) => {
            std::fs::write(path, &bytes)?;
            tracing::info!("Comparison sheet written");
            println!("✅ Comparison sheet written to {}", path);
        }
        None => {
            use std::io::Write;
            std::io::stdout().write_all(&bytes)?;
        }
    }

    Ok(())
}
