use std::{
    path::PathBuf,
    sync::Arc,
};

use anyhow::{
    Context,
    Result,
};
use clap::Parser;
use dexindex::{
    CatalogueLoader,
    DetailLoader,
    LoaderOptions,
    RecordDetail,
    graphql::GraphqlBatchFetcher,
    http::RetryingExecutor,
    rest::RestClient,
    store::{
        MemorySnapshotStore,
        SnapshotStore,
        SqliteSnapshotStore,
    },
};
use dexindex_data::{
    Catalogue,
    Record,
    search,
    title_case,
};
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "dexindex-sync")]
#[command(about = "Fetches the DexIndex catalogue and caches it locally")]
struct Cli {
    /// JSON file of loader options. `DEXINDEX_*` variables apply on top of it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Snapshot database.
    #[arg(long, env = "DEXINDEX_DB_PATH", default_value = "dexindex.db")]
    db_path: PathBuf,

    /// Keep snapshots in memory only.
    #[arg(long)]
    no_cache: bool,

    /// Number of records to print.
    #[arg(short, long, default_value_t = 10)]
    limit: usize,

    /// Prints records matching the term instead of the first records.
    #[arg(short, long)]
    search: Option<String>,

    /// Loads and prints the details of one Pokémon.
    name: Option<String>,
}

fn load_options(cli: &Cli) -> Result<LoaderOptions> {
    match &cli.config {
        Some(path) => {
            LoaderOptions::from_file(path)?.with_overrides(|var| std::env::var(var).ok())
        }
        None => LoaderOptions::from_env(),
    }
}

fn open_store(cli: &Cli) -> Arc<dyn SnapshotStore> {
    if cli.no_cache {
        return Arc::new(MemorySnapshotStore::new());
    }
    match SqliteSnapshotStore::open(&cli.db_path) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            log::warn!("Snapshots will not be persisted: {err:#}");
            Arc::new(MemorySnapshotStore::new())
        }
    }
}

fn print_record(record: &Record) {
    let types = record
        .types
        .iter()
        .map(|slot| title_case(&slot.ty.name))
        .collect::<Vec<_>>()
        .join("/");
    println!(
        "#{} {:<24} {:<18} BST {}",
        record.display_number(),
        title_case(&record.name),
        types,
        record.base_stat_total(),
    );
}

async fn print_detail(detail: &RecordDetail, rest: &RestClient, cancel: &CancellationToken) {
    print_record(&detail.record);
    println!(
        "  {:.1} m, {:.1} kg",
        detail.record.height_meters(),
        detail.record.weight_kilograms()
    );
    if let Some(species) = &detail.species {
        if let Some(genus) = species.english_genus() {
            println!("  {genus}");
        }
        if let Some(text) = species.english_flavor_text() {
            println!("  {text}");
        }
    }
    for slot in &detail.record.abilities {
        let description = rest.ability_description(&slot.ability.url, cancel).await;
        println!(
            "  {}{}: {description}",
            title_case(&slot.ability.name),
            if slot.is_hidden { " (hidden)" } else { "" },
        );
    }
    if let Some(chain) = &detail.evolution_chain {
        println!(
            "  Evolution: {}",
            chain
                .chain
                .walk()
                .into_iter()
                .map(title_case)
                .collect::<Vec<_>>()
                .join(" > ")
        );
    }
    if detail.form_sprites.len() > 1 {
        println!("  Forms:");
        for (form, sprite) in &detail.form_sprites {
            println!("    {form}: {sprite}");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dexindex=info".parse()?)
                .add_directive("dexindex_sync=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let options = load_options(&cli).context("invalid loader options")?;

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("Interrupted, stopping");
                cancel.cancel();
            }
        }
    });

    let catalogue = Catalogue::curated();
    let executor = RetryingExecutor::new(options.retry_policy());
    let loader = CatalogueLoader::new(
        catalogue,
        Arc::new(GraphqlBatchFetcher::from_options(executor.clone(), &options)),
        open_store(&cli),
        &options,
    );
    let records = loader
        .load_catalogue(
            |current, total| log::info!("Loaded {current} of {total}"),
            &cancel,
        )
        .await
        .context("failed to load catalogue")?;
    println!("{} records, {:?}", records.len(), loader.state());

    let shown = match &cli.search {
        Some(term) => search(&records, term),
        None => records.iter().collect(),
    };
    for record in shown.into_iter().take(cli.limit) {
        print_record(record);
    }

    if let Some(name) = &cli.name {
        let rest = RestClient::from_options(executor, &options);
        let details = DetailLoader::from_options(rest, catalogue, &options);
        let fallback = search(&records, name).first().and_then(|record| record.custom_id);
        let record = details
            .select(name, fallback, &cancel)
            .await
            .with_context(|| format!("{name} could not be loaded"))?;
        let detail = details.load(record, &cancel).await;
        print_detail(&detail, details.rest(), &cancel).await;
    }

    Ok(())
}
