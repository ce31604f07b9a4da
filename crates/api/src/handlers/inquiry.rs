//! Handlers for public inquiries: quote requests and newsletter signups.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use makerslab_core::inquiry::{normalize_email, validate_email, validate_required};
use makerslab_core::types::ContentId;
use makerslab_db::models::contact::{ContactSubmission, CreateContactSubmission};
use makerslab_db::models::newsletter::{CreateNewsletterSignup, NewsletterSignup};
use makerslab_db::StoreError;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::{Keyed, MessageResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub id: ContentId,
}

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<CreateContactSubmission>, JsonRejection>,
) -> AppResult<Json<ContactResponse>> {
    let Json(input) =
        payload.map_err(|_| AppError::BadRequest("Failed to submit quote request".into()))?;

    validate_required("name", &input.name)?;
    validate_required("description", &input.description)?;
    validate_email(input.email.trim())?;

    let submission = state
        .store
        .inquiries()
        .create_contact_submission(&input)
        .await?;
    tracing::info!(id = %submission.id, "Quote request received");

    Ok(Json(ContactResponse {
        success: true,
        message: "Quote request received successfully".into(),
        id: submission.id,
    }))
}

/// GET /api/contact (admin)
pub async fn list_contacts(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<Keyed<Vec<ContactSubmission>>>> {
    let submissions = state.store.inquiries().list_contact_submissions().await?;
    Ok(Json(Keyed::new("submissions", submissions)))
}

/// POST /api/newsletter
///
/// Addresses are compared after trimming and lower-casing.
pub async fn subscribe(
    State(state): State<AppState>,
    payload: Result<Json<CreateNewsletterSignup>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(input) =
        payload.map_err(|_| AppError::BadRequest("Failed to subscribe to newsletter".into()))?;

    let email = normalize_email(&input.email);
    validate_email(&email)?;

    let signup = state
        .store
        .inquiries()
        .create_newsletter_signup(&CreateNewsletterSignup { email })
        .await
        .map_err(|e| match e {
            StoreError::AlreadyExists { .. } => {
                AppError::BadRequest("This email is already subscribed".into())
            }
            other => other.into(),
        })?;
    tracing::info!(id = %signup.id, "Newsletter signup");

    Ok(Json(MessageResponse::ok("Successfully subscribed to newsletter")))
}

/// GET /api/newsletter (admin)
pub async fn list_signups(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<Keyed<Vec<NewsletterSignup>>>> {
    let signups = state.store.inquiries().list_newsletter_signups().await?;
    Ok(Json(Keyed::new("signups", signups)))
}
