//! Domain-level constants.
//!
//! These constants define business rules and wire formats.

// =============================================================================
// Timestamps
// =============================================================================

/// Sub-second digits kept on `created_at` (microseconds)
pub const CREATED_AT_PRECISION: u16 = 6;

/// Wire format of `createdAt` in API responses
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Events
// =============================================================================

/// Operation name sent when a user is created
pub const OPERATION_CREATE: &str = "CREATE";

/// Operation name sent when a user is deleted
pub const OPERATION_DELETE: &str = "DELETE";

/// Default channel user events are published on
pub const DEFAULT_EVENTS_CHANNEL: &str = "user-events";

// =============================================================================
// Validation
// =============================================================================

/// Check if a value is empty or whitespace only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
