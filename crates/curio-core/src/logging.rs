//! Logging conventions and field constants for curio.
//!
//! Structured fields keep log output queryable. Every event emitted from a
//! curio crate should use the field names below rather than ad-hoc keys.
//!
//! ## Log Level Contract
//!
//! | Level | Meaning |
//! |-------|---------|
//! | ERROR | Unrecoverable setup failure; the extraction path never emits it |
//! | WARN  | Recoverable failure, a local fallback was applied |
//! | INFO  | Lifecycle events (backend construction, CLI startup) |
//! | DEBUG | Decision points (mode selection, credential checks, timings) |
//! | TRACE | Per-field matcher detail |
//!
//! The extraction engine degrades instead of failing, so a request that
//! ends in fallback logs WARN exactly once with the reason and then
//! completes normally.

// ─── Identity ───────────────────────────────────────────────────────────────

/// Subsystem name, constant per crate ("assist", "match").
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem ("anthropic", "engine").
pub const COMPONENT: &str = "component";

/// Operation being performed ("generate", "extract").
pub const OPERATION: &str = "op";

// ─── Request shape ──────────────────────────────────────────────────────────

/// Generation model in use.
pub const MODEL: &str = "model";

/// Extraction mode ("external", "local").
pub const MODE: &str = "mode";

/// Length of the listing text under extraction.
pub const TEXT_LEN: &str = "text_len";

/// Length of the prompt sent to the backend.
pub const PROMPT_LEN: &str = "prompt_len";

// ─── Outcome ────────────────────────────────────────────────────────────────

/// Length of the raw backend response.
pub const RESPONSE_LEN: &str = "response_len";

/// Wall-clock duration of the operation in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Error message accompanying a WARN or ERROR event.
pub const ERROR_MSG: &str = "error";

/// Marker for operations that exceeded the slow-call threshold.
pub const SLOW: &str = "slow";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_distinct() {
        let fields = [
            SUBSYSTEM,
            COMPONENT,
            OPERATION,
            MODEL,
            MODE,
            TEXT_LEN,
            PROMPT_LEN,
            RESPONSE_LEN,
            DURATION_MS,
            ERROR_MSG,
            SLOW,
        ];
        let mut seen = std::collections::HashSet::new();
        for field in fields {
            assert!(seen.insert(field), "duplicate field name: {}", field);
        }
    }

    #[test]
    fn test_operation_field_is_short_form() {
        assert_eq!(OPERATION, "op");
    }
}
