//! In-memory SQLite table for the Iranian education enrollment dataset.
//!
//! The dataset is loaded once from CSV (typically embedded with
//! `include_str!` by the consuming crate) and is read-only afterwards.
//! Queries return typed, serializable structs ready for the D3.js bridge.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV parsing and header checks live in `ied-core`; this crate only stores rows
//!
//! # Usage
//!
//! ```rust
//! use ied_core::level::EducationLevel;
//! use ied_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_enrollment("\
//! Years,Girls Kindergarten,Boys Kindergarten,Girls Grade School,Boys Grade School,Girls High School,Boys High School
//! 1990,120,130,3000,3300,900,1100
//! ").unwrap();
//!
//! let kindergarten = db.query_level(EducationLevel::Kindergarten).unwrap();
//! assert_eq!(kindergarten[0].girls, 120);
//! ```

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// In-memory SQLite database holding the enrollment table.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use
    /// [`load_enrollment`](Self::load_enrollment) to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database and load `csv_data` into it in one step.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_enrollment(csv_data)?;
        Ok(db)
    }
}

impl PartialEq for Database {
    /// Two handles are equal when they share the same connection.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("handles", &Rc::strong_count(&self.conn))
            .finish_non_exhaustive()
    }
}
