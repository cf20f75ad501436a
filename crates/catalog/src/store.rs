use crate::error::Result;
use crate::types::{Band, BreakerRow, MaterialRow, ProcessType};
use rusqlite::{params, Connection, OpenFlags};
use std::path::{Path, PathBuf};

const SCHEMA: &str = r#"
DROP TABLE IF EXISTS breakers;
DROP TABLE IF EXISTS materials;

CREATE TABLE breakers (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    process_type TEXT NOT NULL,
    depth_min REAL NOT NULL,
    depth_recommended REAL NOT NULL,
    depth_max REAL NOT NULL,
    feed_min REAL NOT NULL,
    feed_recommended REAL NOT NULL,
    feed_max REAL NOT NULL
);

CREATE TABLE materials (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    process_type TEXT NOT NULL,
    final_priority TEXT NOT NULL,
    speed_min REAL NOT NULL,
    speed_recommended REAL NOT NULL,
    speed_max REAL NOT NULL
);
"#;

/// Handle to the on-disk catalog database.
///
/// Holds only the path; each operation opens its own connection and releases
/// it before returning, so concurrent read-only sessions never share state.
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drop and recreate both catalog tables. Import-time only; the query
    /// path never writes.
    pub fn create(&self) -> Result<()> {
        log::info!("Initializing catalog schema at {:?}", self.path);
        let conn = self.open_rw()?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    pub fn insert_breakers(&self, rows: &[BreakerRow]) -> Result<()> {
        let mut conn = self.open_rw()?;
        let tx = conn.transaction()?;
        for row in rows {
            tx.execute(
                "INSERT INTO breakers
                 (id, name, process_type,
                  depth_min, depth_recommended, depth_max,
                  feed_min, feed_recommended, feed_max)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    row.id,
                    row.name,
                    row.process_type.as_str(),
                    row.depth_of_cut.min,
                    row.depth_of_cut.recommended,
                    row.depth_of_cut.max,
                    row.feed_rate.min,
                    row.feed_rate.recommended,
                    row.feed_rate.max,
                ],
            )?;
        }
        tx.commit()?;
        log::info!("Inserted {} breaker rows", rows.len());
        Ok(())
    }

    pub fn insert_materials(&self, rows: &[MaterialRow]) -> Result<()> {
        let mut conn = self.open_rw()?;
        let tx = conn.transaction()?;
        for row in rows {
            tx.execute(
                "INSERT INTO materials
                 (id, name, process_type, final_priority,
                  speed_min, speed_recommended, speed_max)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    row.id,
                    row.name,
                    row.process_type.as_str(),
                    row.final_priority,
                    row.cutting_speed.min,
                    row.cutting_speed.recommended,
                    row.cutting_speed.max,
                ],
            )?;
        }
        tx.commit()?;
        log::info!("Inserted {} material rows", rows.len());
        Ok(())
    }

    /// All breaker rows in primary-key order.
    pub fn all_breakers(&self) -> Result<Vec<BreakerRow>> {
        let conn = self.open_read_only()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, process_type,
                    depth_min, depth_recommended, depth_max,
                    feed_min, feed_recommended, feed_max
             FROM breakers ORDER BY id ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(BreakerRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    process_type: read_process_type(row, 2)?,
                    depth_of_cut: Band::new(row.get(3)?, row.get(4)?, row.get(5)?),
                    feed_rate: Band::new(row.get(6)?, row.get(7)?, row.get(8)?),
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        log::debug!("Loaded {} breaker rows", rows.len());
        Ok(rows)
    }

    /// All material rows in primary-key order.
    pub fn all_materials(&self) -> Result<Vec<MaterialRow>> {
        let conn = self.open_read_only()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, process_type, final_priority,
                    speed_min, speed_recommended, speed_max
             FROM materials ORDER BY id ASC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(MaterialRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    process_type: read_process_type(row, 2)?,
                    final_priority: row.get(3)?,
                    cutting_speed: Band::new(row.get(4)?, row.get(5)?, row.get(6)?),
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        log::debug!("Loaded {} material rows", rows.len());
        Ok(rows)
    }

    fn open_rw(&self) -> Result<Connection> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Connection::open(&self.path)?)
    }

    fn open_read_only(&self) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(conn)
    }
}

fn read_process_type(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<ProcessType> {
    let raw: String = row.get(idx)?;
    raw.parse::<ProcessType>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}
