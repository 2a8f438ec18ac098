//! Cafe repository for database operations.
//!
//! All access to the `cafe` table goes through [`CafeRepository`]; handlers
//! never touch the pool directly. Every operation reads or writes at most one
//! record, so no explicit transactions are needed beyond what SQLite provides.

use rand::seq::IndexedRandom;
use sqlx::SqlitePool;

use brewdex_core::CafeId;

use super::RepositoryError;
use crate::models::cafe::{Cafe, NewCafe};

/// Column list shared by every query that materializes a [`Cafe`].
const CAFE_COLUMNS: &str = "id, name, map_url, img_url, location, seats, \
                            has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

/// Repository for cafe database operations.
pub struct CafeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CafeRepository<'a> {
    /// Create a new cafe repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every cafe, sorted by name ascending.
    ///
    /// An empty store yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Cafe>, RepositoryError> {
        let cafes =
            sqlx::query_as::<_, Cafe>(&format!("SELECT {CAFE_COLUMNS} FROM cafe ORDER BY name ASC"))
                .fetch_all(self.pool)
                .await?;

        Ok(cafes)
    }

    /// Pick one cafe uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Empty` when the store holds no records.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_random(&self) -> Result<Cafe, RepositoryError> {
        let cafes = sqlx::query_as::<_, Cafe>(&format!("SELECT {CAFE_COLUMNS} FROM cafe"))
            .fetch_all(self.pool)
            .await?;

        cafes
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(RepositoryError::Empty)
    }

    /// Find cafes whose location exactly equals `location`.
    ///
    /// The match is case-sensitive (BINARY collation); `"paris"` does not
    /// match `"Paris"`. No matches is an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_location(&self, location: &str) -> Result<Vec<Cafe>, RepositoryError> {
        let cafes =
            sqlx::query_as::<_, Cafe>(&format!("SELECT {CAFE_COLUMNS} FROM cafe WHERE location = ?"))
                .bind(location)
                .fetch_all(self.pool)
                .await?;

        Ok(cafes)
    }

    /// Create a new cafe record.
    ///
    /// The duplicate check trims surrounding whitespace from the candidate
    /// name, so `" Blue Bottle "` collides with an existing `"Blue Bottle"`.
    /// A concurrent insert racing past the check is caught by the UNIQUE
    /// constraint and mapped to the same error. The record is durable before
    /// this call returns.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a cafe with the same name
    /// already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, new_cafe: &NewCafe) -> Result<Cafe, RepositoryError> {
        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM cafe WHERE name = ?")
            .bind(new_cafe.name.trim())
            .fetch_optional(self.pool)
            .await?;

        if existing.is_some() {
            return Err(RepositoryError::Conflict(
                "a cafe with this name already exists".to_owned(),
            ));
        }

        let cafe = sqlx::query_as::<_, Cafe>(&format!(
            "INSERT INTO cafe (name, map_url, img_url, location, seats, \
                               has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {CAFE_COLUMNS}"
        ))
        .bind(&new_cafe.name)
        .bind(&new_cafe.map_url)
        .bind(&new_cafe.img_url)
        .bind(&new_cafe.location)
        .bind(&new_cafe.seats)
        .bind(new_cafe.amenities.has_toilet)
        .bind(new_cafe.amenities.has_wifi)
        .bind(new_cafe.amenities.has_sockets)
        .bind(new_cafe.amenities.can_take_calls)
        .bind(&new_cafe.coffee_price)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict(
                    "a cafe with this name already exists".to_owned(),
                );
            }
            RepositoryError::Database(e)
        })?;

        Ok(cafe)
    }

    /// Overwrite the coffee price of one cafe; no other column changes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidInput` if `new_price` is empty.
    /// Returns `RepositoryError::NotFound` if no cafe has that id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_price(&self, id: CafeId, new_price: &str) -> Result<Cafe, RepositoryError> {
        if new_price.is_empty() {
            return Err(RepositoryError::InvalidInput(
                "price must not be empty".to_owned(),
            ));
        }

        let cafe = sqlx::query_as::<_, Cafe>(&format!(
            "UPDATE cafe SET coffee_price = ? WHERE id = ? RETURNING {CAFE_COLUMNS}"
        ))
        .bind(new_price)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(cafe)
    }

    /// Permanently remove one cafe record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no cafe has that id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: CafeId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM cafe WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
