use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension, Row, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::types::*;

const CAFE_COLUMNS: &str = "id, name, map_url, img_url, location, seats, \
     has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns a guard to the underlying database connection.
    /// This allows consuming applications to execute custom SQL.
    pub fn connection(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn()
    }
}

fn cafe_from_row(row: &Row) -> rusqlite::Result<Cafe> {
    Ok(Cafe {
        id: row.get(0)?,
        name: row.get(1)?,
        map_url: row.get(2)?,
        img_url: row.get(3)?,
        location: row.get(4)?,
        seats: row.get(5)?,
        has_toilet: row.get(6)?,
        has_wifi: row.get(7)?,
        has_sockets: row.get(8)?,
        can_take_calls: row.get(9)?,
        coffee_price: row.get(10)?,
    })
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    fn create_cafe(&self, cafe: &NewCafe) -> Result<Cafe> {
        let conn = self.conn();
        let result = conn.execute(
            "INSERT INTO cafes (name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                cafe.name,
                cafe.map_url,
                cafe.img_url,
                cafe.location,
                cafe.seats,
                cafe.has_toilet,
                cafe.has_wifi,
                cafe.has_sockets,
                cafe.can_take_calls,
                cafe.coffee_price,
            ],
        );

        match result {
            Ok(_) => Ok(cafe.clone().into_cafe(conn.last_insert_rowid())),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(Error::Conflict(format!(
                    "a cafe named '{}' already exists",
                    cafe.name
                )))
            }
            Err(e) => Err(Error::from(e)),
        }
    }

    fn get_cafe(&self, id: i64) -> Result<Option<Cafe>> {
        let conn = self.conn();
        conn.query_row(
            &format!("SELECT {CAFE_COLUMNS} FROM cafes WHERE id = ?1"),
            params![id],
            cafe_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn random_cafe(&self) -> Result<Option<Cafe>> {
        let conn = self.conn();
        conn.query_row(
            &format!("SELECT {CAFE_COLUMNS} FROM cafes ORDER BY RANDOM() LIMIT 1"),
            [],
            cafe_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_cafes(&self) -> Result<Vec<Cafe>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!("SELECT {CAFE_COLUMNS} FROM cafes ORDER BY name"))?;

        let rows = stmt.query_map([], cafe_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn find_cafes_by_location(&self, location: &str) -> Result<Vec<Cafe>> {
        let conn = self.conn();
        // Exact, case-sensitive equality; no trimming
        let mut stmt = conn.prepare(&format!(
            "SELECT {CAFE_COLUMNS} FROM cafes WHERE location = ?1 ORDER BY name"
        ))?;

        let rows = stmt.query_map(params![location], cafe_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn update_coffee_price(&self, id: i64, new_price: Option<&str>) -> Result<()> {
        let rows = self.conn().execute(
            "UPDATE cafes SET coffee_price = ?1 WHERE id = ?2",
            params![new_price, id],
        )?;

        if rows == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    fn delete_cafe(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM cafes WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }
}
