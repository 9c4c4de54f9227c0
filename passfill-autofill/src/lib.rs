//! Login form detection and fill heuristics for passfill.
//!
//! Works on an owned snapshot of the page's forms ([`Document`]) rather
//! than a live DOM: the host content layer mirrors the elements in, runs
//! detection or fill, and replays recorded values and [`SyntheticEvent`]s
//! back onto the real page.
//!
//! - [`detect_login_forms`] / [`select_fields`]: heuristic scan for forms
//!   with a password input plus a username-marked text/email input.
//! - [`fill_login_form`]: writes a credential into the best-guess fields,
//!   recording the event sequence reactive frameworks need to see.
//! - [`MutationDebouncer`] / [`OfferSlot`]: policy for the passive
//!   "fill this login?" prompt.

mod detect;
mod dom;
mod fill;
mod offer;

pub use detect::{detect_login_forms, is_login_form, select_fields, FieldPair};
pub use dom::{Document, FormElement, InputField, InputKind, SyntheticEvent};
pub use fill::fill_login_form;
pub use offer::{
    FillOffer, MutationDebouncer, OfferSlot, INITIAL_SCAN_DELAY, OFFER_TTL, RESCAN_QUIET_WINDOW,
};
