//! Construction banner model and DTO.
//!
//! The banner is a singleton: there is no create DTO, only an upsert patch
//! that is merged onto the existing row or onto the default copy.

use makerslab_core::banner;
use makerslab_core::types::{ContentId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single row of the `construction_banner` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructionBanner {
    pub id: ContentId,
    pub enabled: bool,
    pub title: String,
    pub subtitle: String,
    pub start_date: String,
    pub end_date: String,
    pub message: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Patch applied by the banner upsert. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConstructionBanner {
    pub enabled: Option<bool>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub message: Option<String>,
}

/// Complete banner field values, used when the upsert has to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerFields {
    pub enabled: bool,
    pub title: String,
    pub subtitle: String,
    pub start_date: String,
    pub end_date: String,
    pub message: String,
}

impl UpdateConstructionBanner {
    /// The patch merged onto the default banner copy.
    pub fn with_defaults(&self) -> BannerFields {
        BannerFields {
            enabled: self.enabled.unwrap_or(banner::DEFAULT_ENABLED),
            title: self
                .title
                .clone()
                .unwrap_or_else(|| banner::DEFAULT_TITLE.into()),
            subtitle: self
                .subtitle
                .clone()
                .unwrap_or_else(|| banner::DEFAULT_SUBTITLE.into()),
            start_date: self.start_date.clone().unwrap_or_default(),
            end_date: self.end_date.clone().unwrap_or_default(),
            message: self
                .message
                .clone()
                .unwrap_or_else(|| banner::DEFAULT_MESSAGE.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_yields_default_copy() {
        let fields = UpdateConstructionBanner::default().with_defaults();
        assert!(!fields.enabled);
        assert_eq!(fields.title, banner::DEFAULT_TITLE);
        assert_eq!(fields.subtitle, banner::DEFAULT_SUBTITLE);
        assert_eq!(fields.message, banner::DEFAULT_MESSAGE);
        assert!(fields.start_date.is_empty());
        assert!(fields.end_date.is_empty());
    }

    #[test]
    fn patch_values_override_defaults() {
        let patch = UpdateConstructionBanner {
            enabled: Some(true),
            start_date: Some("2025-07-01".into()),
            ..Default::default()
        };
        let fields = patch.with_defaults();
        assert!(fields.enabled);
        assert_eq!(fields.start_date, "2025-07-01");
        assert_eq!(fields.title, banner::DEFAULT_TITLE);
    }
}
