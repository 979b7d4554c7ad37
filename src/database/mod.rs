//! SkillSwap database layer.
//!
//! Provides SQLite connection management and schema migrations. The schema
//! is a single `local_store` table of JSON blobs keyed by string, the
//! native rendition of the browser's per-origin local storage.
//!
//! # Usage
//!
//! ```no_run
//! use skillswap::database::Database;
//!
//! // Open a persistent database
//! let db = Database::open("skillswap.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! // Access the underlying connection for queries
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
