//! Recently viewed transactions
//!
//! One row per transaction id. Viewing the same transaction again moves it
//! to the front and bumps its view count.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use explorer_api::Transaction;
use explorer_storage::Database;

use crate::Result;

const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentlyViewedEntry {
    pub transaction: Transaction,
    pub viewed_at: DateTime<Utc>,
    pub view_count: i64,
}

pub struct RecentlyViewed {
    db: Database,
    capacity: usize,
}

impl RecentlyViewed {
    pub fn new(db: Database) -> Self {
        Self::with_capacity(db, DEFAULT_CAPACITY)
    }

    /// Keep at most `capacity` entries; older ones are dropped on insert.
    pub fn with_capacity(db: Database, capacity: usize) -> Self {
        Self {
            db,
            capacity: capacity.max(1),
        }
    }

    /// Record that a transaction was viewed
    pub fn record_view(&self, transaction: &Transaction) -> Result<()> {
        let payload = serde_json::to_string(transaction)?;
        let viewed_at = Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true);
        let capacity = self.capacity as i64;

        self.db.transaction(|conn| {
            let next_seq: i64 = conn.query_row(
                "SELECT COALESCE(MAX(seq), 0) + 1 FROM recently_viewed",
                [],
                |row| row.get(0),
            )?;

            let updated = conn.execute(
                "UPDATE recently_viewed
                 SET tx_type = ?1, tx_status = ?2, payload = ?3, viewed_at = ?4,
                     view_count = view_count + 1, seq = ?5
                 WHERE tx_id = ?6",
                rusqlite::params![
                    transaction.tx_type.as_str(),
                    transaction.tx_status.as_str(),
                    payload,
                    viewed_at,
                    next_seq,
                    transaction.tx_id,
                ],
            )?;

            if updated == 0 {
                conn.execute(
                    "INSERT INTO recently_viewed
                     (tx_id, tx_type, tx_status, payload, viewed_at, view_count, seq)
                     VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)",
                    rusqlite::params![
                        transaction.tx_id,
                        transaction.tx_type.as_str(),
                        transaction.tx_status.as_str(),
                        payload,
                        viewed_at,
                        next_seq,
                    ],
                )?;
            }

            conn.execute(
                "DELETE FROM recently_viewed WHERE seq NOT IN
                 (SELECT seq FROM recently_viewed ORDER BY seq DESC LIMIT ?1)",
                [capacity],
            )?;

            Ok(())
        })?;

        tracing::debug!(tx_id = %transaction.tx_id, "Recorded transaction view");

        Ok(())
    }

    /// Most recently viewed first
    pub fn recent(&self, limit: usize) -> Result<Vec<RecentlyViewedEntry>> {
        let rows: Vec<(String, String, i64)> = self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT payload, viewed_at, view_count FROM recently_viewed
                 ORDER BY seq DESC
                 LIMIT ?1",
            )?;

            let rows: Vec<(String, String, i64)> = stmt
                .query_map([limit as i64], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
                .filter_map(|r| r.ok())
                .collect();

            Ok(rows)
        })?;

        let entries = rows
            .into_iter()
            .filter_map(|(payload, viewed_str, view_count)| {
                let transaction: Transaction = match serde_json::from_str(&payload) {
                    Ok(tx) => tx,
                    Err(e) => {
                        tracing::warn!(error = %e, "Skipping unreadable recently viewed entry");
                        return None;
                    }
                };
                let viewed_at = match DateTime::parse_from_rfc3339(&viewed_str) {
                    Ok(dt) => dt.with_timezone(&Utc),
                    Err(e) => {
                        tracing::warn!(
                            tx_id = %transaction.tx_id,
                            viewed_at = %viewed_str,
                            error = %e,
                            "Skipping recently viewed entry with unreadable timestamp"
                        );
                        return None;
                    }
                };

                Some(RecentlyViewedEntry {
                    transaction,
                    viewed_at,
                    view_count,
                })
            })
            .collect();

        Ok(entries)
    }

    pub fn remove(&self, tx_id: &str) -> Result<()> {
        Ok(self.db.with_connection(|conn| {
            conn.execute("DELETE FROM recently_viewed WHERE tx_id = ?1", [tx_id])?;
            Ok(())
        })?)
    }

    pub fn clear_all(&self) -> Result<()> {
        Ok(self.db.with_connection(|conn| {
            conn.execute("DELETE FROM recently_viewed", [])?;
            Ok(())
        })?)
    }
}

impl Clone for RecentlyViewed {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            capacity: self.capacity,
        }
    }
}
