//! One-time default content bootstrap.
//!
//! Seeding is gated by the persisted seed marker, which is claimed *before*
//! any rows are written: a second instance starting at the same time sees
//! the marker and does nothing. A crash between the claim and the inserts
//! leaves the store partially seeded with no automatic repair.
//!
//! The run that claims the marker also removes duplicate rows (same natural
//! key, keeping the earliest) and moves image references off the legacy
//! asset prefix, cleaning up data left by older deployments.

pub mod defaults;

use std::collections::HashSet;

use crate::error::StoreError;
use crate::models::equipment::Equipment;
use crate::models::process_step::ProcessStep;
use crate::models::project::Project;
use crate::models::service::Service;
use crate::models::testimonial::Testimonial;
use crate::models::ContentEntity;
use crate::store::ContentStore;

/// What a seeding run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// `false` when the marker was already present and nothing ran.
    pub claimed: bool,
    pub rows_inserted: usize,
    pub duplicates_removed: usize,
    pub assets_rewritten: usize,
}

/// Seed default content if this store has never been seeded.
pub async fn seed_defaults(store: &dyn ContentStore) -> Result<SeedReport, StoreError> {
    if !store.seed_marker().claim_seed_marker().await? {
        return Ok(SeedReport::default());
    }

    let mut report = SeedReport {
        claimed: true,
        ..Default::default()
    };

    report.rows_inserted += seed_collection::<Service>(store, defaults::services()).await?;
    report.rows_inserted += seed_collection::<Project>(store, defaults::projects()).await?;
    report.rows_inserted += seed_collection::<Equipment>(store, defaults::equipment()).await?;
    report.rows_inserted +=
        seed_collection::<ProcessStep>(store, defaults::process_steps()).await?;
    report.rows_inserted +=
        seed_collection::<Testimonial>(store, defaults::testimonials()).await?;

    if store.banner().get_banner().await?.is_none() {
        store.banner().upsert_banner(&defaults::banner()).await?;
        report.rows_inserted += 1;
    }

    report.duplicates_removed += remove_duplicates::<Service>(store).await?;
    report.duplicates_removed += remove_duplicates::<Project>(store).await?;
    report.duplicates_removed += remove_duplicates::<Equipment>(store).await?;
    report.duplicates_removed += remove_duplicates::<ProcessStep>(store).await?;
    report.duplicates_removed += remove_duplicates::<Testimonial>(store).await?;

    report.assets_rewritten += rewrite_legacy_assets::<Service>(store).await?;
    report.assets_rewritten += rewrite_legacy_assets::<Project>(store).await?;
    report.assets_rewritten += rewrite_legacy_assets::<Equipment>(store).await?;
    report.assets_rewritten += rewrite_legacy_assets::<Testimonial>(store).await?;

    Ok(report)
}

/// Run [`seed_defaults`], logging the outcome. Errors are logged and
/// swallowed; the server keeps serving either way.
pub async fn run(store: &dyn ContentStore) {
    match seed_defaults(store).await {
        Ok(report) if report.claimed => tracing::info!(
            rows_inserted = report.rows_inserted,
            duplicates_removed = report.duplicates_removed,
            assets_rewritten = report.assets_rewritten,
            "Default content seeded"
        ),
        Ok(_) => tracing::debug!("Seed marker present, skipping default content"),
        Err(e) => tracing::error!(error = %e, "Seeding default content failed"),
    }
}

/// Insert `rows` when the collection is empty. Returns the number inserted.
async fn seed_collection<E: ContentEntity>(
    store: &dyn ContentStore,
    rows: Vec<E::Create>,
) -> Result<usize, StoreError> {
    let collection = E::collection(store);
    if collection.count().await? > 0 {
        tracing::debug!(entity = E::ENTITY, "Collection not empty, skipping defaults");
        return Ok(0);
    }
    for row in &rows {
        collection.create(row).await?;
    }
    Ok(rows.len())
}

/// Delete every row whose natural key repeats an earlier row's.
async fn remove_duplicates<E: ContentEntity>(store: &dyn ContentStore) -> Result<usize, StoreError> {
    let collection = E::collection(store);
    let mut rows = collection.list().await?;
    rows.sort_by_key(|row| row.created_at());

    let mut seen = HashSet::new();
    let mut removed = 0;
    for row in &rows {
        if !seen.insert(row.natural_key().to_string()) && collection.delete(row.id()).await? {
            tracing::info!(
                entity = E::ENTITY,
                id = %row.id(),
                key = row.natural_key(),
                "Removed duplicate row"
            );
            removed += 1;
        }
    }
    Ok(removed)
}

async fn rewrite_legacy_assets<E: ContentEntity>(
    store: &dyn ContentStore,
) -> Result<usize, StoreError> {
    let collection = E::collection(store);
    let mut rewritten = 0;
    for row in collection.list().await? {
        if let Some(patch) = row.legacy_asset_patch() {
            if collection.update(row.id(), &patch).await?.is_some() {
                rewritten += 1;
            }
        }
    }
    Ok(rewritten)
}
