//! # cartview-core: Read-Only State and Selectors
//!
//! This crate holds the application state model and the selectors that read
//! it. Everything here is a pure function over owned data.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        cartview Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/cartview (bootstrap)                       │   │
//! │  │    config ──► load snapshot / sample ──► render ──► stdout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 cartview-render                                 │   │
//! │  │         UserInfo / CartInfo  (text, HTML)                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ selectors                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cartview-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ selectors │  │  observe  │  │ snapshot  │  │   │
//! │  │   │   State   │  │ select_*  │  │  Probe    │  │ parse /   │  │   │
//! │  │   │ Cart,User │  │ Observed  │  │  Counting │  │ to_json   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • NO CACHING                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - State, User, Cart, CartItem
//! - [`money`] - Integer-cent Money and its display forms
//! - [`selectors`] - Field projections, plain and observed
//! - [`observe`] - Probe / Observer instrumentation
//! - [`snapshot`] - JSON document parsing and writing
//! - [`validation`] - Construction rules
//! - [`sample`] - Demo state
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cartview_core::sample::sample_state;
//! use cartview_core::selectors::{select_cart_items, select_user_name};
//!
//! let state = sample_state();
//!
//! assert_eq!(select_user_name(&state), "Grzenio");
//! let names: Vec<&str> = select_cart_items(&state).iter().map(|i| i.name()).collect();
//! assert_eq!(names, ["Cup", "Pen"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod observe;
pub mod sample;
pub mod selectors;
pub mod snapshot;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use observe::{CountingObserver, NoopObserver, Observer, Probe, TracingObserver};
pub use selectors::ObservedSelectors;
pub use types::*;
