use std::time::{Duration, Instant};

use passfill_autofill::{MutationDebouncer, OfferSlot, OFFER_TTL, RESCAN_QUIET_WINDOW};

#[test]
fn debouncer_fires_once_after_quiet_window() {
    let start = Instant::now();
    let mut debouncer = MutationDebouncer::default();

    debouncer.record_form_mutation(start);
    assert!(!debouncer.poll(start));
    assert!(debouncer.is_pending());

    let after = start + RESCAN_QUIET_WINDOW;
    assert!(debouncer.poll(after));
    // Consumed: no second tick without a new mutation
    assert!(!debouncer.poll(after + Duration::from_secs(5)));
}

#[test]
fn mutations_during_the_window_push_the_deadline_out() {
    let start = Instant::now();
    let mut debouncer = MutationDebouncer::new(Duration::from_millis(500));

    debouncer.record_form_mutation(start);
    debouncer.record_form_mutation(start + Duration::from_millis(400));

    // Original deadline passed, but the second mutation superseded it
    assert!(!debouncer.poll(start + Duration::from_millis(600)));
    assert!(debouncer.poll(start + Duration::from_millis(900)));
}

#[test]
fn quiet_page_never_ticks() {
    let mut debouncer = MutationDebouncer::default();
    assert!(!debouncer.is_pending());
    assert!(!debouncer.poll(Instant::now() + Duration::from_secs(60)));
}

#[test]
fn offer_expires_after_ttl() {
    let start = Instant::now();
    let mut slot = OfferSlot::new();

    assert!(slot.propose("cred-1", "alice", start));
    assert!(slot.current(start + Duration::from_secs(9)).is_some());
    assert!(slot.current(start + OFFER_TTL).is_none());
    assert!(slot.accept(start + OFFER_TTL).is_none());
}

#[test]
fn only_one_live_offer_at_a_time() {
    let start = Instant::now();
    let mut slot = OfferSlot::new();

    assert!(slot.propose("cred-1", "alice", start));
    // Rescan while the prompt is up must not stack a second one
    assert!(!slot.propose("cred-2", "bob", start + Duration::from_secs(2)));

    // After expiry a new proposal goes through
    assert!(slot.propose("cred-2", "bob", start + OFFER_TTL + Duration::from_secs(1)));
}

#[test]
fn accept_consumes_the_offer() {
    let start = Instant::now();
    let mut slot = OfferSlot::new();
    slot.propose("cred-1", "alice", start);

    let accepted = slot.accept(start + Duration::from_secs(3)).unwrap();
    assert_eq!(accepted.credential_id, "cred-1");
    assert_eq!(accepted.username, "alice");

    // Consumed: nothing left to accept or show
    assert!(slot.accept(start + Duration::from_secs(4)).is_none());
    assert!(slot.current(start + Duration::from_secs(4)).is_none());
}

#[test]
fn dismiss_clears_the_offer() {
    let start = Instant::now();
    let mut slot = OfferSlot::new();
    slot.propose("cred-1", "alice", start);

    slot.dismiss();
    assert!(slot.current(start).is_none());
    assert!(slot.accept(start).is_none());

    // Dismissal frees the slot for the next rescan
    assert!(slot.propose("cred-1", "alice", start + Duration::from_secs(1)));
}
