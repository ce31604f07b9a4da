//! PostgreSQL-backed [`ContentStore`].

use async_trait::async_trait;
use makerslab_core::types::{ContentId, Timestamp};

use super::{BannerStore, Collection, ContentStore, InquiryStore, SeedMarkerStore, SessionStore};
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
use crate::repositories::{
    BannerRepo, ContactRepo, EquipmentRepo, NewsletterRepo, ProcessStepRepo, ProjectRepo,
    SeedMarkerRepo, ServiceRepo, SessionRepo, TestimonialRepo,
};
use crate::DbPool;

/// Content store over a shared connection pool.
///
/// Cloning is cheap; clones share the pool.
#[derive(Clone)]
pub struct PgContentStore {
    pool: DbPool,
}

impl PgContentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Implement [`Collection`] for an entity by delegating to its repository.
macro_rules! pg_collection {
    ($entity:ty, $repo:ty) => {
        #[async_trait]
        impl Collection<$entity> for PgContentStore {
            async fn list(&self) -> Result<Vec<$entity>, StoreError> {
                Ok(<$repo>::list(&self.pool).await?)
            }

            async fn find_by_id(&self, id: ContentId) -> Result<Option<$entity>, StoreError> {
                Ok(<$repo>::find_by_id(&self.pool, id).await?)
            }

            async fn create(
                &self,
                input: &<$entity as ContentEntity>::Create,
            ) -> Result<$entity, StoreError> {
                Ok(<$repo>::create(&self.pool, input).await?)
            }

            async fn update(
                &self,
                id: ContentId,
                patch: &<$entity as ContentEntity>::Update,
            ) -> Result<Option<$entity>, StoreError> {
                Ok(<$repo>::update(&self.pool, id, patch).await?)
            }

            async fn delete(&self, id: ContentId) -> Result<bool, StoreError> {
                Ok(<$repo>::delete(&self.pool, id).await?)
            }

            async fn count(&self) -> Result<i64, StoreError> {
                Ok(<$repo>::count(&self.pool).await?)
            }
        }
    };
}

pg_collection!(Service, ServiceRepo);
pg_collection!(Project, ProjectRepo);
pg_collection!(Equipment, EquipmentRepo);
pg_collection!(ProcessStep, ProcessStepRepo);
pg_collection!(Testimonial, TestimonialRepo);

#[async_trait]
impl BannerStore for PgContentStore {
    async fn get_banner(&self) -> Result<Option<ConstructionBanner>, StoreError> {
        Ok(BannerRepo::get(&self.pool).await?)
    }

    async fn upsert_banner(
        &self,
        patch: &UpdateConstructionBanner,
    ) -> Result<ConstructionBanner, StoreError> {
        Ok(BannerRepo::upsert(&self.pool, patch).await?)
    }
}

#[async_trait]
impl InquiryStore for PgContentStore {
    async fn create_contact_submission(
        &self,
        input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, StoreError> {
        Ok(ContactRepo::create(&self.pool, input).await?)
    }

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        Ok(ContactRepo::list(&self.pool).await?)
    }

    async fn create_newsletter_signup(
        &self,
        input: &CreateNewsletterSignup,
    ) -> Result<NewsletterSignup, StoreError> {
        NewsletterRepo::create(&self.pool, &input.email)
            .await?
            .ok_or_else(|| StoreError::AlreadyExists {
                entity: "NewsletterSignup",
                key: input.email.clone(),
            })
    }

    async fn list_newsletter_signups(&self) -> Result<Vec<NewsletterSignup>, StoreError> {
        Ok(NewsletterRepo::list(&self.pool).await?)
    }
}

#[async_trait]
impl SessionStore for PgContentStore {
    async fn create_session(&self, input: &CreateSession) -> Result<AdminSession, StoreError> {
        Ok(SessionRepo::create(&self.pool, input).await?)
    }

    async fn find_active_session(
        &self,
        token_hash: &str,
    ) -> Result<Option<AdminSession>, StoreError> {
        Ok(SessionRepo::find_active(&self.pool, token_hash).await?)
    }

    async fn touch_session(
        &self,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<bool, StoreError> {
        Ok(SessionRepo::touch(&self.pool, token_hash, expires_at).await?)
    }

    async fn delete_session(&self, token_hash: &str) -> Result<bool, StoreError> {
        Ok(SessionRepo::delete(&self.pool, token_hash).await?)
    }

    async fn delete_expired_sessions(&self) -> Result<u64, StoreError> {
        Ok(SessionRepo::delete_expired(&self.pool).await?)
    }
}

#[async_trait]
impl SeedMarkerStore for PgContentStore {
    async fn claim_seed_marker(&self) -> Result<bool, StoreError> {
        Ok(SeedMarkerRepo::claim(&self.pool).await?)
    }
}

impl ContentStore for PgContentStore {
    fn services(&self) -> &dyn Collection<Service> {
        self
    }

    fn projects(&self) -> &dyn Collection<Project> {
        self
    }

    fn equipment(&self) -> &dyn Collection<Equipment> {
        self
    }

    fn process_steps(&self) -> &dyn Collection<ProcessStep> {
        self
    }

    fn testimonials(&self) -> &dyn Collection<Testimonial> {
        self
    }

    fn banner(&self) -> &dyn BannerStore {
        self
    }

    fn inquiries(&self) -> &dyn InquiryStore {
        self
    }

    fn sessions(&self) -> &dyn SessionStore {
        self
    }

    fn seed_marker(&self) -> &dyn SeedMarkerStore {
        self
    }
}
