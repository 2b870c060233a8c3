//! Hash collections used across the workspace.
//!
//! FxHash is not DoS-resistant; keys here are rule positions and label
//! strings from trusted in-process models.

pub use rustc_hash::{FxHashMap, FxHashSet};
