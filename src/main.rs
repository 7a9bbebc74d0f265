use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use muebleria_catalog::{
    api::CatalogApi,
    catalog::{CatalogStore, DisplayRow, FilterSpec, SortBy, SortOrder},
    config::AppConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,muebleria_catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let api = CatalogApi::new(&config)?;

    let products = api.list_products().await?;
    tracing::info!(count = products.len(), "catalog fetched");

    let mut store = CatalogStore::new();
    store.set_products(products);
    store.set_filter(spec_from_args(std::env::args().skip(1)));

    for product in store.filtered() {
        for row in DisplayRow::rows_for(product) {
            let image = row.image().unwrap_or(&config.placeholder_image);
            println!(
                "{:<44} {:>10.2}  {:>5}  {:<26}  {image}",
                row.label(),
                row.price(),
                row.stock(),
                row.status().message(),
            );
        }
    }

    if store.has_filters() {
        tracing::info!(shown = store.filtered().len(), "filters active");
    }

    Ok(())
}

/// `--search q --category c --min 10 --max 500 --sort name|created_at
/// --order asc|desc`; anything unparseable is ignored.
fn spec_from_args(args: impl Iterator<Item = String>) -> FilterSpec {
    let mut spec = FilterSpec::default();
    let args: Vec<String> = args.collect();
    for pair in args.chunks(2) {
        let [flag, value] = pair else { break };
        match flag.as_str() {
            "--search" => spec.search = Some(value.clone()),
            "--category" => spec.category = Some(value.clone()),
            "--min" => spec.price_min = FilterSpec::parse_bound(value),
            "--max" => spec.price_max = FilterSpec::parse_bound(value),
            "--sort" => {
                spec.sort_by = match value.as_str() {
                    "name" => Some(SortBy::Name),
                    "created_at" => Some(SortBy::CreatedAt),
                    _ => None,
                }
            }
            "--order" => {
                spec.sort_order = match value.as_str() {
                    "asc" => Some(SortOrder::Asc),
                    "desc" => Some(SortOrder::Desc),
                    _ => None,
                }
            }
            _ => {}
        }
    }
    spec
}
