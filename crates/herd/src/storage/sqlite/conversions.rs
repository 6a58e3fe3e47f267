//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without a pool.

use herd_core::unicorn::Unicorn;
use rusqlite::Row;

/// Convert a SQLite row to a Unicorn.
///
/// Expected columns: id, unicorn_name, age, color, powerstrength
pub fn row_to_unicorn(row: &Row) -> rusqlite::Result<Unicorn> {
    Ok(Unicorn {
        id: Some(row.get("id")?),
        name: row.get("unicorn_name")?,
        age: row.get("age")?,
        color: row.get("color")?,
        power_strength: row.get("powerstrength")?,
    })
}
