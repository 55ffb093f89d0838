use boutiquedb::db::table::Table;
use boutiquedb::db::tables::{Customer, Inventory};
use boutiquedb::db::{self, registry};
use boutiquedb::error::BoutiqueError;
use encoding_rs::UTF_8;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_db(tag: &str) -> (PathBuf, String) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "boutiquedb-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    let url = format!("sqlite:{}", path.display());
    (path, url)
}

fn fields(pairs: &[(&str, Option<&str>)]) -> Vec<(String, Option<String>)> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.map(str::to_string)))
        .collect()
}

/// Table with no seed file; `import` must be a no-op for it.
struct Scratch;

impl Table for Scratch {
    fn name(&self) -> &str {
        "scratch"
    }

    fn ddl(&self) -> &str {
        "CREATE TABLE scratch (val TEXT)"
    }
}

#[tokio::test]
async fn drop_then_create_is_idempotent() {
    let (db_path, url) = temp_db("reset");
    let pool = db::spawn(&url, false).await.expect("failed to open store");
    let customer = Customer::new(Path::new("data"));

    // Second round must not error even though the first already reset it.
    for _ in 0..2 {
        customer.drop(&pool).await.expect("drop failed");
        customer.create(&pool).await.expect("create failed");
    }

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM stranka")
        .fetch_one(&pool)
        .await
        .expect("count failed");
    assert_eq!(count, 0);

    pool.close().await;
    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn clear_keeps_structure_and_succeeds_on_empty_table() {
    let (db_path, url) = temp_db("clear");
    let pool = db::spawn(&url, false).await.expect("failed to open store");
    let customer = Customer::new(Path::new("data"));

    customer.create(&pool).await.expect("create failed");
    customer
        .insert_row(
            &pool,
            &fields(&[
                ("first_name", Some("Ana")),
                ("last_name", Some("Kos")),
                ("email", Some("ana@x.io")),
                ("gender", Some("F")),
                ("ip_address", Some("1.2.3.4")),
            ]),
        )
        .await
        .expect("insert failed");

    customer.clear(&pool).await.expect("clear failed");
    customer.clear(&pool).await.expect("clear on empty failed");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM stranka")
        .fetch_one(&pool)
        .await
        .expect("count failed");
    assert_eq!(count, 0);

    pool.close().await;
    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn surrogate_row_ids_are_distinct_and_increasing() {
    let (db_path, url) = temp_db("rowids");
    let pool = db::spawn(&url, false).await.expect("failed to open store");
    let customer = Customer::new(Path::new("data"));
    customer.create(&pool).await.expect("create failed");

    let row = fields(&[
        ("first_name", Some("Ana")),
        ("last_name", Some("Kos")),
        ("email", Some("ana@x.io")),
        ("gender", Some("F")),
        ("ip_address", Some("1.2.3.4")),
    ]);
    let first = customer.insert_row(&pool, &row).await.expect("insert failed");
    let second = customer.insert_row(&pool, &row).await.expect("insert failed");
    assert_eq!((first, second), (1, 2));

    pool.close().await;
    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn absent_fields_are_omitted_from_the_insert() {
    let (db_path, url) = temp_db("omit");
    let pool = db::spawn(&url, false).await.expect("failed to open store");
    let inventory = Inventory::new(Path::new("data"));
    inventory.create(&pool).await.expect("create failed");

    inventory
        .insert_row(
            &pool,
            &fields(&[
                ("id_dobave", Some("SUP-900")),
                ("id_izdelka", Some("CL-001")),
                ("price", Some("9.99")),
                ("quantity", Some("5")),
                ("date_of_launch", None),
            ]),
        )
        .await
        .expect("insert failed");

    let (launch,): (Option<String>,) =
        sqlx::query_as("SELECT date_of_launch FROM zaloga WHERE id_dobave = 'SUP-900'")
            .fetch_one(&pool)
            .await
            .expect("supply row missing");
    assert_eq!(launch, None);

    pool.close().await;
    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn import_without_a_seed_file_is_a_noop() {
    let (db_path, url) = temp_db("noop");
    let pool = db::spawn(&url, false).await.expect("failed to open store");
    let scratch = Scratch;

    scratch.create(&pool).await.expect("create failed");
    scratch.import(&pool, UTF_8).await.expect("import failed");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM scratch")
        .fetch_one(&pool)
        .await
        .expect("count failed");
    assert_eq!(count, 0);

    pool.close().await;
    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn missing_seed_file_aborts_the_import() {
    let (db_path, url) = temp_db("missing");
    let pool = db::spawn(&url, false).await.expect("failed to open store");
    let customer = Customer::new(Path::new("no-such-dir"));
    customer.create(&pool).await.expect("create failed");

    let err = customer.import(&pool, UTF_8).await;
    assert!(matches!(err, Err(BoutiqueError::Csv(_))));

    pool.close().await;
    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn duplicate_natural_key_is_an_integrity_violation() {
    let (db_path, url) = temp_db("unique");
    let pool = db::spawn(&url, false).await.expect("failed to open store");
    let tables = registry::prepare_tables(Path::new("data"));
    registry::create_all(&pool, &tables).await.expect("create failed");

    let clothing = &tables[1];
    assert_eq!(clothing.name(), "oblacilo");
    let row = fields(&[
        ("clothing_type", Some("t-shirt")),
        ("size", Some("M")),
        ("color", Some("white")),
        ("brand", Some("Hugo")),
        ("material", Some("cotton")),
        ("price", Some("25")),
        ("season", Some("summer")),
        ("ID", Some("CL-001")),
    ]);
    clothing.insert_row(&pool, &row).await.expect("first insert failed");
    let err = clothing.insert_row(&pool, &row).await;
    assert!(matches!(
        err,
        Err(BoutiqueError::IntegrityViolation { ref table, .. }) if table == "oblacilo"
    ));

    pool.close().await;
    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn enforced_foreign_keys_reject_inserts_before_their_target_exists() {
    let (db_path, url) = temp_db("fkorder");
    let pool = db::spawn(&url, true).await.expect("failed to open store");
    let inventory = Inventory::new(Path::new("data"));

    // Only zaloga exists; its REFERENCES target does not. With enforcement
    // on, the insert must fail, which is what makes the registry's
    // dependency ordering load-bearing.
    inventory.create(&pool).await.expect("create failed");
    let err = inventory
        .insert_row(
            &pool,
            &fields(&[
                ("id_dobave", Some("SUP-901")),
                ("id_izdelka", Some("CL-001")),
                ("price", Some("9.99")),
                ("quantity", Some("5")),
            ]),
        )
        .await;
    assert!(err.is_err());

    pool.close().await;
    let _ = fs::remove_file(&db_path);
}
