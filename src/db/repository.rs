use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use tokio_rusqlite::Connection;

use crate::error::Result;
use crate::models::SummaryNote;

use super::schema::SCHEMA;

/// Durable store for summary notes. Cloning hands out another handle to the
/// same background connection thread.
#[derive(Clone)]
pub struct Repository {
    conn: Connection,
}

impl Repository {
    /// Open the database file and ensure the schema exists.
    ///
    /// If the file cannot be opened the store degrades to an in-memory
    /// database: notes stop surviving restarts, but the app keeps working.
    pub async fn open(db_path: &str) -> Result<Self> {
        let conn = match Connection::open(db_path).await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!(
                    "failed to open database at {}: {}; notes will not survive restart",
                    db_path,
                    e
                );
                return Self::open_in_memory().await;
            }
        };
        Ok(Self::init(conn).await)
    }

    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().await?;
        Ok(Self::init(conn).await)
    }

    /// Apply the schema. Safe to run on every start; a failure is logged and
    /// the handle is still returned, leaving later calls to report their own
    /// errors.
    async fn init(conn: Connection) -> Self {
        let result = conn
            .call(|conn| {
                // journal_mode returns a row, so it can't go in the batch
                conn.pragma_update(None, "journal_mode", "WAL")?;
                conn.execute_batch(SCHEMA)?;
                Ok(())
            })
            .await;

        if let Err(e) = result {
            tracing::error!("failed to initialize database schema: {}", e);
        }

        Self { conn }
    }

    /// Insert a new note stamped with the current time. Returns the new id.
    pub async fn insert_summary(
        &self,
        url: String,
        title: Option<String>,
        body: String,
    ) -> Result<i64> {
        let created_at = Utc::now().to_rfc3339();
        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO summaries (url, title, body, created_at) VALUES (?1, ?2, ?3, ?4)",
                    params![url, title, body, created_at],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await?;
        Ok(id)
    }

    /// All notes, newest first. Rows sharing a timestamp come back in
    /// reverse insertion order.
    pub async fn get_all_summaries(&self) -> Result<Vec<SummaryNote>> {
        let notes = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, url, title, body, created_at FROM summaries
                     ORDER BY created_at DESC, id DESC",
                )?;
                let notes = stmt
                    .query_map([], |row| Ok(summary_from_row(row)))?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(notes)
            })
            .await?;
        Ok(notes)
    }

    /// Overwrite title and body; url and created_at are untouched. No-op
    /// when the id does not exist.
    pub async fn update_summary(&self, id: i64, title: String, body: String) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute(
                    "UPDATE summaries SET title = ?1, body = ?2 WHERE id = ?3",
                    params![title, body, id],
                )?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    /// Remove a note. No-op when the id does not exist.
    pub async fn delete_summary(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute("DELETE FROM summaries WHERE id = ?1", params![id])?;
                Ok(())
            })
            .await?;
        Ok(())
    }
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    // Try RFC3339 first (e.g., "2026-01-11T12:34:56+00:00")
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Try SQLite datetime format (e.g., "2026-01-11 12:34:56")
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    None
}

fn summary_from_row(row: &Row) -> SummaryNote {
    SummaryNote {
        id: row.get(0).unwrap(),
        url: row.get(1).unwrap(),
        title: row.get(2).unwrap(),
        body: row.get(3).unwrap(),
        created_at: row
            .get::<_, String>(4)
            .ok()
            .and_then(|s| parse_datetime(&s))
            .unwrap_or_else(Utc::now),
    }
}
