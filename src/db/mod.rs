use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

// ============================================================================
// SQLite Pool & Schema Migrations
// ============================================================================
//
// The database file is created on first run. Migrations are explicit and
// idempotent: the schema version lives in SQLite's `user_version` pragma and
// each step runs at most once, inside a single transaction.
//
// ============================================================================

/// Current schema version. Bump when adding a migration step below.
pub const SCHEMA_VERSION: i64 = 2;

/// Open (or create) the database file and build the connection pool.
/// Foreign keys are enabled on every connection so item rows follow their
/// pedido on delete.
pub async fn connect(path: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Bring the schema up to `SCHEMA_VERSION`. Safe to call on every startup.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let version: i64 = sqlx::query_scalar("PRAGMA user_version")
        .fetch_one(&mut *tx)
        .await?;

    if version < 1 {
        // Initial two-table layout: pedidos plus their flavor lines.
        sqlx::query(
            "CREATE TABLE pedidos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                dia TEXT NOT NULL,
                nombre TEXT NOT NULL,
                precio_pedido REAL NOT NULL,
                precio_envio REAL NOT NULL DEFAULT 0.0,
                direccion TEXT,
                horario TEXT,
                fecha_registro TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "CREATE TABLE pedido_items (
                item_id INTEGER PRIMARY KEY AUTOINCREMENT,
                pedido_id INTEGER NOT NULL,
                sabor TEXT NOT NULL,
                cantidad INTEGER NOT NULL,
                FOREIGN KEY (pedido_id) REFERENCES pedidos (id) ON DELETE CASCADE
            )",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query("CREATE INDEX idx_pedido_id ON pedido_items (pedido_id)")
            .execute(&mut *tx)
            .await?;
    }

    if version < 2 {
        // Payment tracking arrived after the first deployments.
        sqlx::query("ALTER TABLE pedidos ADD COLUMN pago INTEGER NOT NULL DEFAULT 0")
            .execute(&mut *tx)
            .await?;
    }

    if version < SCHEMA_VERSION {
        sqlx::query(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
            .execute(&mut *tx)
            .await?;
        tracing::info!(from = version, to = SCHEMA_VERSION, "Schema migrated");
    }

    tx.commit().await
}

/// In-memory pool for tests, migrated and pinned to a single connection so
/// the database survives for the pool's lifetime.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("in-memory sqlite should open");

    migrate(&pool).await.expect("migrations should apply");
    pool
}

// ============================================================================
// Unit Tests
// ============================================================================
