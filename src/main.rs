use boutiquedb::db;
use boutiquedb::db::registry;
use encoding_rs::{Encoding, UTF_8};
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &boutiquedb::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    let encoding = Encoding::for_label(cfg.encoding.as_bytes()).unwrap_or(UTF_8);

    info!(
        database_url = %cfg.database_url,
        data_dir = %cfg.data_dir.display(),
        encoding = encoding.name(),
        foreign_keys = cfg.foreign_keys,
        "starting boutiquedb"
    );

    let pool = db::spawn(&cfg.database_url, cfg.foreign_keys).await?;

    let rebuilt = registry::ensure_database(&pool, &cfg.data_dir, encoding).await?;
    if rebuilt {
        info!("database rebuilt from seed files");
    }

    // One verification read per table; counts go to the log.
    for table in registry::prepare_tables(&cfg.data_dir) {
        let sql = format!("SELECT COUNT(*) FROM {}", table.name());
        let (rows,): (i64,) = sqlx::query_as(&sql).fetch_one(&pool).await?;
        info!(table = table.name(), rows, "verified table");
    }

    pool.close().await;
    Ok(())
}
