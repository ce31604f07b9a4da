pub mod admin;
pub mod banner;
pub mod content;
pub mod files;
pub mod health;
pub mod inquiry;
pub mod upload;

use axum::Router;
use makerslab_db::models::equipment::Equipment;
use makerslab_db::models::process_step::ProcessStep;
use makerslab_db::models::project::Project;
use makerslab_db::models::service::Service;
use makerslab_db::models::testimonial::Testimonial;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /services                      list (public), create (admin)
/// /services/{id}                 get (public), update, delete (admin)
/// /projects[/{id}]               same shape as /services
/// /equipment[/{id}]              same shape as /services
/// /process-steps[/{id}]          same shape as /services
/// /testimonials[/{id}]           same shape as /services
///
/// /construction-banner           get (public), upsert (admin)
///
/// /contact                       submit (public), list (admin)
/// /newsletter                    subscribe (public), list (admin)
///
/// /admin/login                   login (public)
/// /admin/logout                  logout
/// /admin/check                   session status (public)
///
/// /upload                        image upload (admin, multipart)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/services", content::router::<Service>())
        .nest("/projects", content::router::<Project>())
        .nest("/equipment", content::router::<Equipment>())
        .nest("/process-steps", content::router::<ProcessStep>())
        .nest("/testimonials", content::router::<Testimonial>())
        .merge(banner::router())
        .merge(inquiry::router())
        .nest("/admin", admin::router())
        .merge(upload::router())
}
