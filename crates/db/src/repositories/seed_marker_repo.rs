//! Repository for the one-row `seed_marker` table.

use sqlx::PgPool;

pub struct SeedMarkerRepo;

impl SeedMarkerRepo {
    /// Insert the marker row. Returns `true` if this call inserted it and
    /// `false` if it was already present.
    pub async fn claim(pool: &PgPool) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO seed_marker (id) VALUES (1) ON CONFLICT (id) DO NOTHING")
                .execute(pool)
                .await?;
        Ok(result.rows_affected() == 1)
    }
}
