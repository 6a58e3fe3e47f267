//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the unicorns table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS unicorns (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    unicorn_name TEXT,
    age INTEGER,
    color TEXT,
    powerstrength REAL
);
"#;

pub const INSERT_UNICORN: &str = r#"
INSERT INTO unicorns (unicorn_name, age, color, powerstrength)
VALUES (?1, ?2, ?3, ?4)
RETURNING id
"#;

pub const INSERT_UNICORN_WITH_ID: &str = r#"
INSERT INTO unicorns (id, unicorn_name, age, color, powerstrength)
VALUES (?1, ?2, ?3, ?4, ?5)
RETURNING id
"#;

pub const SELECT_UNICORN_BY_ID: &str = r#"
SELECT id, unicorn_name, age, color, powerstrength
FROM unicorns
WHERE id = ?1
"#;

pub const SELECT_ALL_UNICORNS: &str = r#"
SELECT id, unicorn_name, age, color, powerstrength
FROM unicorns
ORDER BY id ASC
"#;

pub const UPDATE_UNICORN: &str = r#"
UPDATE unicorns
SET unicorn_name = ?2, age = ?3, color = ?4, powerstrength = ?5
WHERE id = ?1
"#;

pub const DELETE_UNICORN: &str = r#"
DELETE FROM unicorns
WHERE id = ?1
"#;

pub const DELETE_ALL_UNICORNS: &str = r#"
DELETE FROM unicorns
"#;
