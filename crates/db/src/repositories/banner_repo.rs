//! Repository for the singleton `construction_banner` table.

use sqlx::PgPool;

use crate::models::banner::{ConstructionBanner, UpdateConstructionBanner};

const COLUMNS: &str =
    "id, enabled, title, subtitle, start_date, end_date, message, created_at, updated_at";

/// Reads and upserts the one construction banner row.
pub struct BannerRepo;

impl BannerRepo {
    /// Fetch the banner, if one has been created.
    pub async fn get(pool: &PgPool) -> Result<Option<ConstructionBanner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM construction_banner LIMIT 1");
        sqlx::query_as::<_, ConstructionBanner>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Merge `input` into the banner, inserting it from the default copy if
    /// it does not exist yet.
    ///
    /// The unique `singleton` column turns concurrent first writes into one
    /// insert and one update instead of two rows.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpdateConstructionBanner,
    ) -> Result<ConstructionBanner, sqlx::Error> {
        let fields = input.with_defaults();
        let query = format!(
            "INSERT INTO construction_banner (enabled, title, subtitle, start_date, end_date, message)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (singleton) DO UPDATE SET
                enabled = COALESCE($7, construction_banner.enabled),
                title = COALESCE($8, construction_banner.title),
                subtitle = COALESCE($9, construction_banner.subtitle),
                start_date = COALESCE($10, construction_banner.start_date),
                end_date = COALESCE($11, construction_banner.end_date),
                message = COALESCE($12, construction_banner.message),
                updated_at = GREATEST(
                    clock_timestamp(),
                    construction_banner.updated_at + INTERVAL '1 microsecond'
                )
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ConstructionBanner>(&query)
            .bind(fields.enabled)
            .bind(&fields.title)
            .bind(&fields.subtitle)
            .bind(&fields.start_date)
            .bind(&fields.end_date)
            .bind(&fields.message)
            .bind(input.enabled)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.start_date)
            .bind(&input.end_date)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }
}
