//! # Observers
//!
//! Optional instrumentation for selector and render calls.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Probes Come From                             │
//! │                                                                         │
//! │  ObservedSelectors::user()  ──► observe(Probe::SelectUser)             │
//! │  ObservedSelectors::cart()  ──► observe(Probe::SelectCart)             │
//! │  render_cart_info(...)      ──► observe(Probe::RenderCartInfo)         │
//! │                                         │                               │
//! │                 ┌───────────────────────┼───────────────────────┐       │
//! │                 ▼                       ▼                       ▼       │
//! │          NoopObserver          CountingObserver        TracingObserver │
//! │          (default)             (render counts)         (debug events)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An observer is always passed in by the caller. The plain selector
//! functions in [`crate::selectors`] never report anything.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

// =============================================================================
// Probe
// =============================================================================

/// A named selector or render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Probe {
    SelectUser,
    SelectUserName,
    SelectUserAge,
    SelectCart,
    SelectCartItems,
    SelectCartUpdatedAt,
    SelectCartTotals,
    RenderUserInfo,
    RenderCartInfo,
}

impl Probe {
    /// Every probe, in declaration order.
    pub const ALL: [Probe; 9] = [
        Probe::SelectUser,
        Probe::SelectUserName,
        Probe::SelectUserAge,
        Probe::SelectCart,
        Probe::SelectCartItems,
        Probe::SelectCartUpdatedAt,
        Probe::SelectCartTotals,
        Probe::RenderUserInfo,
        Probe::RenderCartInfo,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case name, used as a log field.
    pub const fn name(self) -> &'static str {
        match self {
            Probe::SelectUser => "select_user",
            Probe::SelectUserName => "select_user_name",
            Probe::SelectUserAge => "select_user_age",
            Probe::SelectCart => "select_cart",
            Probe::SelectCartItems => "select_cart_items",
            Probe::SelectCartUpdatedAt => "select_cart_updated_at",
            Probe::SelectCartTotals => "select_cart_totals",
            Probe::RenderUserInfo => "render_user_info",
            Probe::RenderCartInfo => "render_cart_info",
        }
    }

    /// True for the two render probes.
    pub const fn is_render(self) -> bool {
        matches!(self, Probe::RenderUserInfo | Probe::RenderCartInfo)
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Observer Trait
// =============================================================================

/// Receives a probe for every instrumented call.
///
/// Implementations must not panic and should be cheap; they run inline with
/// the selector or render call.
pub trait Observer {
    fn observe(&self, probe: Probe);
}

impl<T: Observer + ?Sized> Observer for &T {
    #[inline]
    fn observe(&self, probe: Probe) {
        (**self).observe(probe)
    }
}

impl<T: Observer + ?Sized> Observer for Arc<T> {
    #[inline]
    fn observe(&self, probe: Probe) {
        (**self).observe(probe)
    }
}

// =============================================================================
// Noop
// =============================================================================

/// Ignores every probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline]
    fn observe(&self, _probe: Probe) {}
}

// =============================================================================
// Counting
// =============================================================================

/// Counts probes per kind.
///
/// Counters are atomics so a shared `&CountingObserver` works without locks.
#[derive(Debug, Default)]
pub struct CountingObserver {
    counts: [AtomicU64; Probe::ALL.len()],
}

impl CountingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `probe` was observed.
    pub fn count(&self, probe: Probe) -> u64 {
        self.counts[probe.index()].load(Ordering::Relaxed)
    }

    /// Sum over all probes.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|c| c.load(Ordering::Relaxed)).sum()
    }

    /// Non-zero counts, in [`Probe::ALL`] order.
    pub fn snapshot(&self) -> Vec<(Probe, u64)> {
        Probe::ALL
            .iter()
            .map(|&probe| (probe, self.count(probe)))
            .filter(|&(_, n)| n > 0)
            .collect()
    }

    /// Sets every counter back to zero.
    pub fn reset(&self) {
        for counter in &self.counts {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

impl Observer for CountingObserver {
    fn observe(&self, probe: Probe) {
        self.counts[probe.index()].fetch_add(1, Ordering::Relaxed);
    }
}

// =============================================================================
// Tracing
// =============================================================================

/// Emits a `tracing` debug event per probe.
///
/// Render probes produce `Rendering cart info` / `Rendering user info`,
/// the message used to eyeball how often a component renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn observe(&self, probe: Probe) {
        match probe {
            Probe::RenderCartInfo => debug!(probe = %probe, "Rendering cart info"),
            Probe::RenderUserInfo => debug!(probe = %probe, "Rendering user info"),
            _ => debug!(probe = %probe, "Selector called"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
