//! # transit-core - Core Domain Types
//!
//! Foundation crate for AccessibleTransit. Provides domain types, the static
//! content catalog and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Route`] - Client-side routes and their URL paths
//! - [`Theme`] - Light/dark presentation flag
//! - [`IssueType`], [`Urgency`] - Report form choices
//! - [`Trend`], [`FacilityState`], [`UpdateSeverity`] - Dashboard variants
//! - [`Icon`] - Icon references by lucide asset name
//!
//! ### Catalog (`catalog`)
//! - Hardcoded features, highlight stats, station snapshots, recent updates
//!   and explainer steps
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use transit_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod types;

/// Prelude for common imports used throughout all AccessibleTransit crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use catalog::{
    CallToAction, FacilityReading, FeatureItem, HighlightStat, HowItWorksStep, StatusSnapshot,
    UpdateEntry,
};
pub use error::{Error, Result, ResultExt};
pub use types::{
    AnimationDelay, CountFraction, FacilityState, Icon, IssueType, Route, Theme, Trend,
    UpdateSeverity, Urgency,
};
