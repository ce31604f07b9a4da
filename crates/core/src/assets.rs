//! Static asset path migration.
//!
//! Image references stored before the asset directory moved point at
//! [`LEGACY_ASSET_PREFIX`]; they are rewritten to [`CURRENT_ASSET_PREFIX`].

pub const LEGACY_ASSET_PREFIX: &str = "/attached_assets/";
pub const CURRENT_ASSET_PREFIX: &str = "/assets/";

/// Rewrite `url` onto the current asset prefix.
///
/// Returns `None` when `url` does not use the legacy prefix.
pub fn rewrite_legacy_asset_url(url: &str) -> Option<String> {
    url.strip_prefix(LEGACY_ASSET_PREFIX)
        .map(|rest| format!("{CURRENT_ASSET_PREFIX}{rest}"))
}

/// Apply [`rewrite_legacy_asset_url`] to an optional reference.
pub fn rewrite_optional(url: Option<&str>) -> Option<String> {
    url.and_then(rewrite_legacy_asset_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_prefix_is_rewritten() {
        assert_eq!(
            rewrite_legacy_asset_url("/attached_assets/generated_images/a.png").as_deref(),
            Some("/assets/generated_images/a.png")
        );
    }

    #[test]
    fn other_urls_are_left_alone() {
        assert_eq!(rewrite_legacy_asset_url("/assets/a.png"), None);
        assert_eq!(rewrite_legacy_asset_url("/uploads/a.png"), None);
        assert_eq!(rewrite_legacy_asset_url("https://cdn.example.com/attached_assets/a.png"), None);
        assert_eq!(rewrite_optional(None), None);
    }
}
