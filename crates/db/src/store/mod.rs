//! The storage seam between the API and the database.
//!
//! The API holds an `Arc<dyn ContentStore>`. Production wires in
//! [`postgres::PgContentStore`]; tests use `memory::MemoryContentStore`
//! (feature `test-support`). Every operation touches a single row or a
//! single table; nothing spans entities.

pub mod postgres;

#[cfg(any(test, feature = "test-support"))]
pub mod memory;

use async_trait::async_trait;
use makerslab_core::types::ContentId;

use crate::error::StoreError;
use crate::models::banner::{ConstructionBanner, UpdateConstructionBanner};
use crate::models::contact::{ContactSubmission, CreateContactSubmission};
use crate::models::equipment::Equipment;
use crate::models::newsletter::{CreateNewsletterSignup, NewsletterSignup};
use crate::models::process_step::ProcessStep;
use crate::models::project::Project;
use crate::models::service::Service;
use crate::models::session::{AdminSession, CreateSession};
use crate::models::testimonial::Testimonial;
use crate::models::ContentEntity;

pub use postgres::PgContentStore;

/// CRUD over one content collection.
#[async_trait]
pub trait Collection<E: ContentEntity>: Send + Sync {
    /// All rows, ascending by the numeric rank of `order`, ties in arrival order.
    async fn list(&self) -> Result<Vec<E>, StoreError>;

    async fn find_by_id(&self, id: ContentId) -> Result<Option<E>, StoreError>;

    /// Insert a row. The store assigns `id`, `created_at`, and `updated_at`.
    async fn create(&self, input: &E::Create) -> Result<E, StoreError>;

    /// Merge `patch` into the row and advance `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    async fn update(&self, id: ContentId, patch: &E::Update) -> Result<Option<E>, StoreError>;

    /// Delete a row. Returns `true` if a row was removed; absent ids are not an error.
    async fn delete(&self, id: ContentId) -> Result<bool, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;
}

/// The singleton construction banner.
#[async_trait]
pub trait BannerStore: Send + Sync {
    async fn get_banner(&self) -> Result<Option<ConstructionBanner>, StoreError>;

    /// Update the banner in place, or create it from the defaults merged
    /// with `patch` when none exists yet.
    async fn upsert_banner(
        &self,
        patch: &UpdateConstructionBanner,
    ) -> Result<ConstructionBanner, StoreError>;
}

/// Create-only public inquiries, listed newest first.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    async fn create_contact_submission(
        &self,
        input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, StoreError>;

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError>;

    /// Fails with [`StoreError::AlreadyExists`] if the e-mail is already signed up.
    async fn create_newsletter_signup(
        &self,
        input: &CreateNewsletterSignup,
    ) -> Result<NewsletterSignup, StoreError>;

    async fn list_newsletter_signups(&self) -> Result<Vec<NewsletterSignup>, StoreError>;
}

/// Durable admin sessions keyed by token digest.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create_session(&self, input: &CreateSession) -> Result<AdminSession, StoreError>;

    /// Find a session that has not yet expired.
    async fn find_active_session(
        &self,
        token_hash: &str,
    ) -> Result<Option<AdminSession>, StoreError>;

    /// Slide the expiry of a live session. Returns `true` if it was extended.
    async fn touch_session(
        &self,
        token_hash: &str,
        expires_at: makerslab_core::types::Timestamp,
    ) -> Result<bool, StoreError>;

    async fn delete_session(&self, token_hash: &str) -> Result<bool, StoreError>;

    /// Remove expired sessions, returning how many were deleted.
    async fn delete_expired_sessions(&self) -> Result<u64, StoreError>;
}

/// The persisted "default content has been seeded" sentinel.
#[async_trait]
pub trait SeedMarkerStore: Send + Sync {
    /// Atomically insert the marker. Returns `true` if this call created it,
    /// `false` if it already existed.
    async fn claim_seed_marker(&self) -> Result<bool, StoreError>;
}

/// Everything the site persists, behind one object-safe handle.
pub trait ContentStore: Send + Sync {
    fn services(&self) -> &dyn Collection<Service>;
    fn projects(&self) -> &dyn Collection<Project>;
    fn equipment(&self) -> &dyn Collection<Equipment>;
    fn process_steps(&self) -> &dyn Collection<ProcessStep>;
    fn testimonials(&self) -> &dyn Collection<Testimonial>;
    fn banner(&self) -> &dyn BannerStore;
    fn inquiries(&self) -> &dyn InquiryStore;
    fn sessions(&self) -> &dyn SessionStore;
    fn seed_marker(&self) -> &dyn SeedMarkerStore;
}
