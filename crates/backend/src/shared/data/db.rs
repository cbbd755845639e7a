use anyhow::Context;
use once_cell::sync::OnceCell;
use sea_orm::{Database, DatabaseConnection};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Open the ETL database. The dashboard never writes, so the file is opened
/// read-only and must already exist.
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if !db_file.exists() {
        anyhow::bail!(
            "ETL database not found at {} (has the pipeline run yet?)",
            db_file.display()
        );
    }

    let conn = Database::connect(sqlite_url(db_file, "ro")?).await?;
    tracing::info!("Connected to ETL database at {}", db_file.display());

    if DB_CONN.set(conn).is_err() {
        tracing::warn!("Database connection was already initialized");
    }
    Ok(())
}

pub fn get_connection() -> anyhow::Result<&'static DatabaseConnection> {
    DB_CONN
        .get()
        .context("Database connection has not been initialized")
}

fn sqlite_url(db_file: &Path, mode: &str) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode={}", prefix, normalized, mode))
}

#[cfg(test)]
pub(crate) mod testing {
    use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

    /// Single-connection in-memory database (each pooled connection would get its own).
    pub async fn memory_db(statements: &[&str]) -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:".to_string());
        options.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(options).await.unwrap();
        for sql in statements {
            db.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
                .await
                .unwrap();
        }
        db
    }
}
