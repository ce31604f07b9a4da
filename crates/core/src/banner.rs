//! Default copy for the site-wide construction banner.

pub const DEFAULT_ENABLED: bool = false;
pub const DEFAULT_TITLE: &str = "Site Under Construction";
pub const DEFAULT_SUBTITLE: &str = "We're making some improvements to serve you better!";
pub const DEFAULT_MESSAGE: &str =
    "Some features may be temporarily unavailable during this time. We appreciate your patience.";
