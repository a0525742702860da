//! Common types used throughout the reader
//!
//! Shared type aliases used across multiple modules.

use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Attribute name to value, ordered by name
pub type Attributes = BTreeMap<String, String>;

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;
