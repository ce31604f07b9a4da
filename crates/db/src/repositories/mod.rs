//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Content listings are fetched in
//! creation order and then ranked by `order` in Rust, since `order` is
//! free text.

pub mod banner_repo;
pub mod contact_repo;
pub mod equipment_repo;
pub mod newsletter_repo;
pub mod process_step_repo;
pub mod project_repo;
pub mod seed_marker_repo;
pub mod service_repo;
pub mod session_repo;
pub mod testimonial_repo;

pub use banner_repo::BannerRepo;
pub use contact_repo::ContactRepo;
pub use equipment_repo::EquipmentRepo;
pub use newsletter_repo::NewsletterRepo;
pub use process_step_repo::ProcessStepRepo;
pub use project_repo::ProjectRepo;
pub use seed_marker_repo::SeedMarkerRepo;
pub use service_repo::ServiceRepo;
pub use session_repo::SessionRepo;
pub use testimonial_repo::TestimonialRepo;

/// Assignment advancing `updated_at` strictly past its previous value, even
/// when two writes land within the same clock tick.
pub(crate) const TOUCH_UPDATED_AT: &str =
    "updated_at = GREATEST(clock_timestamp(), updated_at + INTERVAL '1 microsecond')";
