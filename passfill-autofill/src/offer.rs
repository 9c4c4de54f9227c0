//! Passive fill-offer flow.
//!
//! The content layer rescans after page load and whenever the DOM gains a
//! `form` element, and may then surface a dismissible prompt offering a
//! one-click fill. Two pieces of policy live here: mutation coalescing (no
//! rescan storm while a page is still rendering) and prompt lifecycle (one
//! live prompt, auto-expiring, fill only on explicit accept).
//!
//! Everything is driven by caller-supplied [`Instant`]s so the host's event
//! loop stays in charge of time.

use std::time::{Duration, Instant};

/// Quiet window after the last form-adding mutation before a rescan fires.
pub const RESCAN_QUIET_WINDOW: Duration = Duration::from_millis(500);

/// Delay after page load before the initial scan, giving dynamically
/// rendered forms a chance to appear.
pub const INITIAL_SCAN_DELAY: Duration = Duration::from_secs(1);

/// How long an unanswered fill offer stays on screen.
pub const OFFER_TTL: Duration = Duration::from_secs(10);

/// Coalesces form-adding DOM mutations into rescan ticks.
///
/// Each recorded mutation pushes the deadline out to `now + quiet window`;
/// [`MutationDebouncer::poll`] reports `true` exactly once when a deadline
/// passes.
#[derive(Debug)]
pub struct MutationDebouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl MutationDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// A mutation added a `form` element (directly or in a subtree).
    pub fn record_form_mutation(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// Whether a rescan is due. Consumes the pending deadline when it fires.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for MutationDebouncer {
    fn default() -> Self {
        Self::new(RESCAN_QUIET_WINDOW)
    }
}

/// A surfaced fill offer for one credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillOffer {
    pub credential_id: String,
    pub username: String,
    created_at: Instant,
}

impl FillOffer {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.created_at + OFFER_TTL
    }
}

/// Holds at most one live offer and owns its lifecycle.
///
/// Filling only ever happens through [`OfferSlot::accept`] — page load and
/// rescans can propose, but nothing fills without that explicit step (or a
/// popup-driven fill request outside this flow).
#[derive(Debug, Default)]
pub struct OfferSlot {
    offer: Option<FillOffer>,
}

impl OfferSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Proposes an offer for the first credential matching the page origin.
    /// Refused (returns `false`) while an unexpired offer is already up.
    pub fn propose(&mut self, credential_id: &str, username: &str, now: Instant) -> bool {
        if matches!(&self.offer, Some(offer) if !offer.is_expired(now)) {
            return false;
        }
        self.offer = Some(FillOffer {
            credential_id: credential_id.to_string(),
            username: username.to_string(),
            created_at: now,
        });
        true
    }

    /// The live offer, if any; expired offers are cleared on access.
    pub fn current(&mut self, now: Instant) -> Option<&FillOffer> {
        if matches!(&self.offer, Some(offer) if offer.is_expired(now)) {
            self.offer = None;
        }
        self.offer.as_ref()
    }

    /// User clicked "fill": consumes the offer, returning the credential id
    /// to fetch and fill. Expired offers yield nothing.
    pub fn accept(&mut self, now: Instant) -> Option<FillOffer> {
        match self.offer.take() {
            Some(offer) if !offer.is_expired(now) => Some(offer),
            _ => None,
        }
    }

    /// User dismissed the prompt.
    pub fn dismiss(&mut self) {
        self.offer = None;
    }
}
