/// Content rows are keyed by an opaque UUID assigned by the store.
pub type ContentId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Compute the `updated_at` value for a row last touched at `previous`.
///
/// Uses the current time unless the clock has not moved past `previous`, in
/// which case the value is bumped by one microsecond so that successive
/// updates always move `updated_at` strictly forward.
pub fn next_updated_at(previous: Timestamp) -> Timestamp {
    let now = chrono::Utc::now();
    if now > previous {
        now
    } else {
        previous + chrono::Duration::microseconds(1)
    }
}
