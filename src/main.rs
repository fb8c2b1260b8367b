use tracing::info;
use tracing_subscriber::EnvFilter;
use vacancy_pipeline::{
    config::{get_config, init_config},
    dto::search_dto::SearchQuery,
    Pipeline,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    init_config()?;
    let config = get_config();

    let pipeline = Pipeline::from_config(config)?;
    let query = SearchQuery::from_config(config);
    info!(
        text = %query.text,
        area = query.area,
        sources = ?pipeline.aggregator.source_names(),
        "Collecting vacancies"
    );

    let batches = pipeline.run(&query).await?;
    for (source, records) in &batches {
        info!(source = %source, count = records.len(), "Source finished");
    }
    info!(path = %config.output_path.display(), "Done");

    Ok(())
}
