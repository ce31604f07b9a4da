//! In-memory [`ContentStore`] used as a test double.
//!
//! Mirrors the PostgreSQL behavior that callers can observe: ids are fresh
//! UUIDs, listings are ranked by `order` with ties in insertion order,
//! `updated_at` only moves forward, newsletter e-mails are unique, and the
//! banner is a singleton.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use makerslab_core::ordering::sort_by_order;
use makerslab_core::types::{next_updated_at, ContentId, Timestamp};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BannerStore, Collection, ContentStore, InquiryStore, SeedMarkerStore, SessionStore};
use crate::error::StoreError;
use crate::models::banner::{ConstructionBanner, UpdateConstructionBanner};
use crate::models::contact::{ContactSubmission, CreateContactSubmission};
use crate::models::equipment::{CreateEquipment, Equipment, UpdateEquipment};
use crate::models::newsletter::{CreateNewsletterSignup, NewsletterSignup};
use crate::models::process_step::{CreateProcessStep, ProcessStep, UpdateProcessStep};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::service::{CreateService, Service, UpdateService};
use crate::models::session::{AdminSession, CreateSession};
use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use crate::models::ContentEntity;

/// How a content row is built from its create DTO and patched in memory.
pub trait MemoryRecord: ContentEntity {
    fn from_create(id: ContentId, input: &Self::Create, now: Timestamp) -> Self;

    /// Merge `patch` into the row, leaving `updated_at` to the caller.
    fn apply(&mut self, patch: &Self::Update);

    fn updated_at_mut(&mut self) -> &mut Timestamp;
}

/// One collection held in insertion order.
pub struct MemoryCollection<E> {
    rows: RwLock<Vec<E>>,
}

impl<E> Default for MemoryCollection<E> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl<E: MemoryRecord> Collection<E> for MemoryCollection<E> {
    async fn list(&self) -> Result<Vec<E>, StoreError> {
        let mut rows = self.rows.read().await.clone();
        sort_by_order(&mut rows, |row| row.order());
        Ok(rows)
    }

    async fn find_by_id(&self, id: ContentId) -> Result<Option<E>, StoreError> {
        Ok(self.rows.read().await.iter().find(|r| r.id() == id).cloned())
    }

    async fn create(&self, input: &E::Create) -> Result<E, StoreError> {
        let row = E::from_create(Uuid::new_v4(), input, Utc::now());
        self.rows.write().await.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: ContentId, patch: &E::Update) -> Result<Option<E>, StoreError> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };
        row.apply(patch);
        let updated_at = row.updated_at_mut();
        *updated_at = next_updated_at(*updated_at);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: ContentId) -> Result<bool, StoreError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        Ok(rows.len() < before)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.rows.read().await.len() as i64)
    }
}

/// Every table of the site, held in process memory.
#[derive(Default)]
pub struct MemoryContentStore {
    services: MemoryCollection<Service>,
    projects: MemoryCollection<Project>,
    equipment: MemoryCollection<Equipment>,
    process_steps: MemoryCollection<ProcessStep>,
    testimonials: MemoryCollection<Testimonial>,
    banner: RwLock<Option<ConstructionBanner>>,
    contacts: RwLock<Vec<ContactSubmission>>,
    signups: RwLock<Vec<NewsletterSignup>>,
    sessions: RwLock<HashMap<String, AdminSession>>,
    seeded: RwLock<bool>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions, expired ones included.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl BannerStore for MemoryContentStore {
    async fn get_banner(&self) -> Result<Option<ConstructionBanner>, StoreError> {
        Ok(self.banner.read().await.clone())
    }

    async fn upsert_banner(
        &self,
        patch: &UpdateConstructionBanner,
    ) -> Result<ConstructionBanner, StoreError> {
        let mut slot = self.banner.write().await;
        let banner = match slot.as_mut() {
            Some(existing) => {
                if let Some(enabled) = patch.enabled {
                    existing.enabled = enabled;
                }
                merge(&mut existing.title, &patch.title);
                merge(&mut existing.subtitle, &patch.subtitle);
                merge(&mut existing.start_date, &patch.start_date);
                merge(&mut existing.end_date, &patch.end_date);
                merge(&mut existing.message, &patch.message);
                existing.updated_at = next_updated_at(existing.updated_at);
                existing.clone()
            }
            None => {
                let fields = patch.with_defaults();
                let now = Utc::now();
                let created = ConstructionBanner {
                    id: Uuid::new_v4(),
                    enabled: fields.enabled,
                    title: fields.title,
                    subtitle: fields.subtitle,
                    start_date: fields.start_date,
                    end_date: fields.end_date,
                    message: fields.message,
                    created_at: now,
                    updated_at: now,
                };
                *slot = Some(created.clone());
                created
            }
        };
        Ok(banner)
    }
}

#[async_trait]
impl InquiryStore for MemoryContentStore {
    async fn create_contact_submission(
        &self,
        input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, StoreError> {
        let row = ContactSubmission {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            budget: input.budget.clone(),
            timeline: input.timeline.clone(),
            description: input.description.clone(),
            created_at: Utc::now(),
        };
        self.contacts.write().await.push(row.clone());
        Ok(row)
    }

    async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        Ok(self.contacts.read().await.iter().rev().cloned().collect())
    }

    async fn create_newsletter_signup(
        &self,
        input: &CreateNewsletterSignup,
    ) -> Result<NewsletterSignup, StoreError> {
        let mut signups = self.signups.write().await;
        if signups.iter().any(|s| s.email == input.email) {
            return Err(StoreError::AlreadyExists {
                entity: "NewsletterSignup",
                key: input.email.clone(),
            });
        }
        let row = NewsletterSignup {
            id: Uuid::new_v4(),
            email: input.email.clone(),
            created_at: Utc::now(),
        };
        signups.push(row.clone());
        Ok(row)
    }

    async fn list_newsletter_signups(&self) -> Result<Vec<NewsletterSignup>, StoreError> {
        Ok(self.signups.read().await.iter().rev().cloned().collect())
    }
}

#[async_trait]
impl SessionStore for MemoryContentStore {
    async fn create_session(&self, input: &CreateSession) -> Result<AdminSession, StoreError> {
        let now = Utc::now();
        let row = AdminSession {
            token_hash: input.token_hash.clone(),
            state: input.state.as_str().to_string(),
            expires_at: input.expires_at,
            created_at: now,
            updated_at: now,
        };
        self.sessions
            .write()
            .await
            .insert(row.token_hash.clone(), row.clone());
        Ok(row)
    }

    async fn find_active_session(
        &self,
        token_hash: &str,
    ) -> Result<Option<AdminSession>, StoreError> {
        let now = Utc::now();
        Ok(self
            .sessions
            .read()
            .await
            .get(token_hash)
            .filter(|s| s.expires_at > now)
            .cloned())
    }

    async fn touch_session(
        &self,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<bool, StoreError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(token_hash) {
            Some(session) if session.expires_at > now => {
                session.expires_at = expires_at;
                session.updated_at = now;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_session(&self, token_hash: &str) -> Result<bool, StoreError> {
        Ok(self.sessions.write().await.remove(token_hash).is_some())
    }

    async fn delete_expired_sessions(&self) -> Result<u64, StoreError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at > now);
        Ok((before - sessions.len()) as u64)
    }
}

#[async_trait]
impl SeedMarkerStore for MemoryContentStore {
    async fn claim_seed_marker(&self) -> Result<bool, StoreError> {
        let mut seeded = self.seeded.write().await;
        if *seeded {
            return Ok(false);
        }
        *seeded = true;
        Ok(true)
    }
}

impl ContentStore for MemoryContentStore {
    fn services(&self) -> &dyn Collection<Service> {
        &self.services
    }

    fn projects(&self) -> &dyn Collection<Project> {
        &self.projects
    }

    fn equipment(&self) -> &dyn Collection<Equipment> {
        &self.equipment
    }

    fn process_steps(&self) -> &dyn Collection<ProcessStep> {
        &self.process_steps
    }

    fn testimonials(&self) -> &dyn Collection<Testimonial> {
        &self.testimonials
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

fn merge<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

impl MemoryRecord for Service {
    fn from_create(id: ContentId, input: &CreateService, now: Timestamp) -> Self {
        Self {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            icon: input.icon.clone(),
            image_url: input.image_url.clone(),
            order: input.order.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: &UpdateService) {
        merge(&mut self.title, &patch.title);
        merge(&mut self.description, &patch.description);
        merge(&mut self.icon, &patch.icon);
        merge(&mut self.image_url, &patch.image_url);
        merge(&mut self.order, &patch.order);
    }

    fn updated_at_mut(&mut self) -> &mut Timestamp {
        &mut self.updated_at
    }
}

impl MemoryRecord for Project {
    fn from_create(id: ContentId, input: &CreateProject, now: Timestamp) -> Self {
        Self {
            id,
            title: input.title.clone(),
            category: input.category.clone(),
            description: input.description.clone(),
            image_url: input.image_url.clone(),
            tags: input.tags.clone(),
            order: input.order.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: &UpdateProject) {
        merge(&mut self.title, &patch.title);
        merge(&mut self.category, &patch.category);
        merge(&mut self.description, &patch.description);
        merge(&mut self.image_url, &patch.image_url);
        merge(&mut self.tags, &patch.tags);
        merge(&mut self.order, &patch.order);
    }

    fn updated_at_mut(&mut self) -> &mut Timestamp {
        &mut self.updated_at
    }
}

impl MemoryRecord for Equipment {
    fn from_create(id: ContentId, input: &CreateEquipment, now: Timestamp) -> Self {
        Self {
            id,
            label: input.label.clone(),
            spec: input.spec.clone(),
            image_url: input.image_url.clone(),
            order: input.order.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: &UpdateEquipment) {
        merge(&mut self.label, &patch.label);
        merge(&mut self.spec, &patch.spec);
        merge(&mut self.image_url, &patch.image_url);
        merge(&mut self.order, &patch.order);
    }

    fn updated_at_mut(&mut self) -> &mut Timestamp {
        &mut self.updated_at
    }
}

impl MemoryRecord for ProcessStep {
    fn from_create(id: ContentId, input: &CreateProcessStep, now: Timestamp) -> Self {
        Self {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            icon: input.icon.clone(),
            order: input.order.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: &UpdateProcessStep) {
        merge(&mut self.title, &patch.title);
        merge(&mut self.description, &patch.description);
        merge(&mut self.icon, &patch.icon);
        merge(&mut self.order, &patch.order);
    }

    fn updated_at_mut(&mut self) -> &mut Timestamp {
        &mut self.updated_at
    }
}

impl MemoryRecord for Testimonial {
    fn from_create(id: ContentId, input: &CreateTestimonial, now: Timestamp) -> Self {
        Self {
            id,
            quote: input.quote.clone(),
            author: input.author.clone(),
            company: input.company.clone(),
            project: input.project.clone(),
            avatar_url: input.avatar_url.clone(),
            order: input.order.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: &UpdateTestimonial) {
        merge(&mut self.quote, &patch.quote);
        merge(&mut self.author, &patch.author);
        merge(&mut self.company, &patch.company);
        merge(&mut self.project, &patch.project);
        merge(&mut self.avatar_url, &patch.avatar_url);
        merge(&mut self.order, &patch.order);
    }

    fn updated_at_mut(&mut self) -> &mut Timestamp {
        &mut self.updated_at
    }
}
