use crate::models::{LocationRow, ProfileUpdate, RecordDetailRow, RecordRow, TokenRow, UserRow};
use crate::Database;
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, Row};

impl Database {
    // -- Users --

    /// Inserts a user with empty profile fields and returns its id.
    pub fn create_user(&self, username: &str, password: &str) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (username, password) VALUES (?1, ?2)",
                (username, password),
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "username = ?1", rusqlite::params![username]))
    }

    pub fn get_user_by_id(&self, id: i64) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "id = ?1", rusqlite::params![id]))
    }

    /// Overwrites every profile column. Returns the number of rows touched.
    pub fn update_user(&self, id: i64, profile: &ProfileUpdate<'_>) -> Result<usize> {
        self.with_conn(|conn| {
            let n = conn.execute(
                "UPDATE users
                 SET username = ?1, password = ?2, avatar = ?3, nick_name = ?4, phone_number = ?5
                 WHERE id = ?6",
                rusqlite::params![
                    profile.username,
                    profile.password,
                    profile.avatar,
                    profile.nick_name,
                    profile.phone_number,
                    id
                ],
            )?;
            Ok(n)
        })
    }

    // -- Tokens --

    pub fn insert_token(&self, user_id: i64, token: &str, created_at: i64) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO tokens (user_id, token, created_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![user_id, token, created_at],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_token(&self, token: &str) -> Result<Option<TokenRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, user_id, token, created_at FROM tokens WHERE token = ?1",
                    [token],
                    |row| {
                        Ok(TokenRow {
                            id: row.get(0)?,
                            user_id: row.get(1)?,
                            token: row.get(2)?,
                            created_at: row.get(3)?,
                        })
                    },
                )
                .optional()?;
            Ok(row)
        })
    }

    // -- Locations --

    pub fn insert_location(&self, name: &str, description: &str) -> Result<LocationRow> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO locations (name, description) VALUES (?1, ?2)",
                (name, description),
            )?;
            Ok(LocationRow {
                id: conn.last_insert_rowid(),
                name: name.to_string(),
                description: description.to_string(),
            })
        })
    }

    pub fn get_location(&self, id: i64) -> Result<Option<LocationRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, name, description FROM locations WHERE id = ?1",
                    [id],
                    location_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    pub fn update_location(&self, id: i64, name: &str, description: &str) -> Result<usize> {
        self.with_conn(|conn| {
            let n = conn.execute(
                "UPDATE locations SET name = ?1, description = ?2 WHERE id = ?3",
                rusqlite::params![name, description, id],
            )?;
            Ok(n)
        })
    }

    /// `name LIKE '%keyword%'`; the keyword is not escaped, so `%` and `_`
    /// keep their wildcard meaning.
    pub fn search_locations(&self, keyword: &str) -> Result<Vec<LocationRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, description FROM locations
                 WHERE name LIKE '%' || ?1 || '%'
                 ORDER BY id",
            )?;
            let rows = stmt
                .query_map([keyword], location_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Records --

    pub fn insert_record(&self, user_id: i64, location_id: i64, date: &str, time: &str) -> Result<RecordRow> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO records (user_id, location_id, date, time) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![user_id, location_id, date, time],
            )?;
            Ok(RecordRow {
                id: conn.last_insert_rowid(),
                user_id,
                location_id,
                date: date.to_string(),
                time: time.to_string(),
            })
        })
    }

    pub fn get_records_by_user(&self, user_id: i64) -> Result<Vec<RecordRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, location_id, date, time FROM records
                 WHERE user_id = ?1
                 ORDER BY id",
            )?;
            let rows = stmt
                .query_map([user_id], record_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn get_record_details_by_user(&self, user_id: i64) -> Result<Vec<RecordDetailRow>> {
        self.with_conn(|conn| {
            // LEFT JOIN so records pointing at a missing location still come back
            let mut stmt = conn.prepare(
                "SELECT r.id, r.user_id, r.location_id, r.date, r.time, l.name, l.description
                 FROM records r
                 LEFT JOIN locations l ON r.location_id = l.id
                 WHERE r.user_id = ?1
                 ORDER BY r.id",
            )?;
            let rows = stmt
                .query_map([user_id], |row| {
                    Ok(RecordDetailRow {
                        record: record_from_row(row)?,
                        location_name: row.get(5)?,
                        location_description: row.get(6)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }
}

fn query_user(conn: &Connection, filter: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Option<UserRow>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT id, username, password, avatar, nick_name, phone_number FROM users WHERE {filter}"
    ))?;

    let row = stmt
        .query_row(params, |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
                avatar: row.get(3)?,
                nick_name: row.get(4)?,
                phone_number: row.get(5)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn location_from_row(row: &Row<'_>) -> rusqlite::Result<LocationRow> {
    Ok(LocationRow {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<RecordRow> {
    Ok(RecordRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        location_id: row.get(2)?,
        date: row.get(3)?,
        time: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_unique_violation;

    fn db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_username_is_unique() {
        let db = db();
        let id = db.create_user("alice", "pw1").unwrap();

        let err = db.create_user("alice", "other").unwrap_err();
        assert!(is_unique_violation(&err));

        let user = db.get_user_by_username("alice").unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.password, "pw1");
        assert_eq!(user.avatar, "");
    }

    #[test]
    fn test_token_is_unique() {
        let db = db();
        db.insert_token(1, "tok", 100).unwrap();
        let err = db.insert_token(2, "tok", 200).unwrap_err();
        assert!(is_unique_violation(&err));

        let row = db.get_token("tok").unwrap().unwrap();
        assert_eq!(row.user_id, 1);
        assert_eq!(row.created_at, 100);
        assert!(db.get_token("nope").unwrap().is_none());
    }

    #[test]
    fn test_update_user_overwrites_every_column() {
        let db = db();
        let id = db.create_user("alice", "pw1").unwrap();
        let touched = db
            .update_user(
                id,
                &ProfileUpdate {
                    username: "alice2",
                    password: "",
                    avatar: "a.png",
                    nick_name: "Al",
                    phone_number: "",
                },
            )
            .unwrap();
        assert_eq!(touched, 1);

        let user = db.get_user_by_id(id).unwrap().unwrap();
        assert_eq!(user.username, "alice2");
        assert_eq!(user.password, "");
        assert_eq!(user.avatar, "a.png");
        assert!(db.get_user_by_username("alice").unwrap().is_none());
    }

    #[test]
    fn test_search_locations_matches_substring() {
        let db = db();
        db.insert_location("Main Library", "books").unwrap();
        db.insert_location("Gym", "weights").unwrap();
        db.insert_location("Law library", "more books").unwrap();

        let names: Vec<String> = db
            .search_locations("ibrary")
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["Main Library", "Law library"]);

        assert_eq!(db.search_locations("").unwrap().len(), 3);
        assert!(db.search_locations("pool").unwrap().is_empty());
    }

    #[test]
    fn test_update_location_reports_missing_row() {
        let db = db();
        let loc = db.insert_location("Gym", "weights").unwrap();
        assert_eq!(db.update_location(loc.id, "Pool", "").unwrap(), 1);
        assert_eq!(db.update_location(loc.id + 100, "x", "y").unwrap(), 0);

        let loc = db.get_location(loc.id).unwrap().unwrap();
        assert_eq!(loc.name, "Pool");
        assert_eq!(loc.description, "");
    }

    #[test]
    fn test_record_details_left_join() {
        let db = db();
        let loc = db.insert_location("Lib", "Library").unwrap();
        db.insert_record(1, loc.id, "2024-01-01", "10:00").unwrap();
        db.insert_record(1, 999, "2024-01-02", "11:00").unwrap();
        db.insert_record(2, loc.id, "2024-01-01", "10:00").unwrap();

        let rows = db.get_record_details_by_user(1).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].location_name.as_deref(), Some("Lib"));
        assert_eq!(rows[1].record.location_id, 999);
        assert!(rows[1].location_name.is_none());
        assert!(rows[1].location_description.is_none());

        let plain = db.get_records_by_user(1).unwrap();
        assert_eq!(plain.len(), 2);
        assert!(plain[0].id < plain[1].id);
        assert!(db.get_records_by_user(3).unwrap().is_empty());
    }
}
