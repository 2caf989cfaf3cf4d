use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_CUSTOMER_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS a001_customer (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL DEFAULT '',
        phone_number TEXT NOT NULL DEFAULT '',
        gender TEXT NOT NULL DEFAULT '',
        address TEXT NOT NULL DEFAULT '',
        age INTEGER,
        customer_description TEXT NOT NULL DEFAULT '',
        bust REAL,
        waist REAL,
        hip REAL,
        shoulder REAL,
        bustpoint REAL,
        shoulder_to_underbust REAL,
        round_under_bust REAL,
        half_length REAL,
        blouse_length REAL,
        sleeve_length REAL,
        round_sleeve REAL,
        dress_length REAL,
        chest REAL,
        round_shoulder REAL,
        skirt_length REAL,
        trousers_length REAL,
        round_thigh REAL,
        round_knee REAL,
        round_feet REAL,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT
    );
"#;

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        CREATE_CUSTOMER_TABLE.to_string(),
    ))
    .await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
