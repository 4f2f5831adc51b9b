//! Database migrations
//!
//! v1: settings (preferences that used to live in cookies)
//! v2: recently viewed transactions

use crate::error::StorageError;
use crate::Result;
use rusqlite::Connection;

const SCHEMA_VERSION: i32 = 2;

pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;

    if current_version > SCHEMA_VERSION {
        return Err(StorageError::Migration {
            version: current_version,
            reason: format!("database is newer than supported version {SCHEMA_VERSION}"),
        });
    }

    if current_version == SCHEMA_VERSION {
        return Ok(());
    }

    let steps: [(i32, fn(&Connection) -> Result<()>); 2] = [(1, migrate_v1), (2, migrate_v2)];
    for (version, migrate) in steps {
        if current_version < version {
            migrate(conn)?;
        }
    }

    set_schema_version(conn, SCHEMA_VERSION)
}

fn get_schema_version(conn: &Connection) -> Result<i32> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL)",
        [],
    )?;

    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;

    Ok(version.unwrap_or(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute_batch("DELETE FROM schema_version")?;
    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])?;
    Ok(())
}

fn migrate_v1(conn: &Connection) -> Result<()> {
    tracing::info!("Running migration v1: settings");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#,
    )?;

    Ok(())
}

fn migrate_v2(conn: &Connection) -> Result<()> {
    tracing::info!("Running migration v2: recently viewed transactions");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS recently_viewed (
            tx_id TEXT PRIMARY KEY,
            tx_type TEXT NOT NULL,
            tx_status TEXT NOT NULL,
            payload TEXT NOT NULL,
            viewed_at TEXT NOT NULL,
            view_count INTEGER NOT NULL DEFAULT 1,
            seq INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_recently_viewed_seq ON recently_viewed(seq);
    "#,
    )?;

    Ok(())
}
