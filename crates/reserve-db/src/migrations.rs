use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

/// Columns every table must carry, with the DDL used to add them to a table
/// created by an older build. Primary keys are only ever created with the table.
const COLUMNS: &[(&str, &[(&str, &str)])] = &[
    (
        "users",
        &[
            ("username", "TEXT"),
            ("password", "TEXT NOT NULL DEFAULT ''"),
            ("avatar", "TEXT NOT NULL DEFAULT ''"),
            ("nick_name", "TEXT NOT NULL DEFAULT ''"),
            ("phone_number", "TEXT NOT NULL DEFAULT ''"),
        ],
    ),
    (
        "locations",
        &[
            ("name", "TEXT NOT NULL DEFAULT ''"),
            ("description", "TEXT NOT NULL DEFAULT ''"),
        ],
    ),
    (
        "records",
        &[
            ("user_id", "INTEGER NOT NULL DEFAULT 0"),
            ("location_id", "INTEGER NOT NULL DEFAULT 0"),
            ("date", "TEXT NOT NULL DEFAULT ''"),
            ("time", "TEXT NOT NULL DEFAULT ''"),
        ],
    ),
    (
        "tokens",
        &[
            ("user_id", "INTEGER NOT NULL DEFAULT 0"),
            ("token", "TEXT"),
            ("created_at", "INTEGER NOT NULL DEFAULT 0"),
        ],
    ),
];

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            username        TEXT UNIQUE,
            password        TEXT NOT NULL DEFAULT '',
            avatar          TEXT NOT NULL DEFAULT '',
            nick_name       TEXT NOT NULL DEFAULT '',
            phone_number    TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS locations (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            name            TEXT NOT NULL DEFAULT '',
            description     TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS records (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id         INTEGER NOT NULL DEFAULT 0,
            location_id     INTEGER NOT NULL DEFAULT 0,
            date            TEXT NOT NULL DEFAULT '',
            time            TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS tokens (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id         INTEGER NOT NULL DEFAULT 0,
            token           TEXT UNIQUE,
            created_at      INTEGER NOT NULL DEFAULT 0
        );
        ",
    )?;

    for (table, columns) in COLUMNS {
        let existing = column_names(conn, table)?;
        for (column, ddl) in columns.iter() {
            if existing.iter().any(|c| c == column) {
                continue;
            }
            // SQLite cannot add a UNIQUE column in place; the index carries it.
            conn.execute_batch(&format!("ALTER TABLE {table} ADD COLUMN {column} {ddl}"))?;
            info!("Added column {}.{}", table, column);
        }
    }

    conn.execute_batch(
        "
        CREATE UNIQUE INDEX IF NOT EXISTS idx_users_username ON users(username);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_tokens_token ON tokens(token);
        CREATE INDEX IF NOT EXISTS idx_records_user ON records(user_id);
        CREATE INDEX IF NOT EXISTS idx_locations_name ON locations(name);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}

fn column_names(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(names)
}
