//! Login form detection and field selection heuristics.

use tracing::debug;

use crate::dom::{Document, FormElement, InputField, InputKind};

/// Substrings that mark a text/email input as a username candidate, matched
/// case-insensitively against name, id, and placeholder.
const USERNAME_MARKERS: &[&str] = &["user", "email", "login"];

fn attrs_contain(field: &InputField, needles: &[&str]) -> bool {
    [&field.name, &field.id, &field.placeholder].iter().any(|attr| {
        let attr = attr.to_lowercase();
        needles.iter().any(|needle| attr.contains(needle))
    })
}

fn is_username_candidate(field: &InputField) -> bool {
    matches!(field.kind, InputKind::Text | InputKind::Email)
}

/// Whether a form looks like a login form: at least one password input and
/// at least one text/email input whose attributes carry a username marker.
pub fn is_login_form(form: &FormElement) -> bool {
    let has_password = form.inputs.iter().any(|f| f.kind == InputKind::Password);
    let has_username = form
        .inputs
        .iter()
        .any(|f| is_username_candidate(f) && attrs_contain(f, USERNAME_MARKERS));
    has_password && has_username
}

/// Indices of all candidate login forms, in document order.
pub fn detect_login_forms(document: &Document) -> Vec<usize> {
    let candidates: Vec<usize> = document
        .forms
        .iter()
        .enumerate()
        .filter(|(_, form)| is_login_form(form))
        .map(|(index, _)| index)
        .collect();
    debug!(
        forms = document.forms.len(),
        candidates = candidates.len(),
        "login form scan"
    );
    candidates
}

/// The chosen username/password input indices within a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPair {
    pub username: usize,
    pub password: usize,
}

/// Picks exactly one username and one password field.
///
/// Password: first password-type input in document order. Username, in
/// priority order: (a) first text/email input matching "email"; (b) first
/// text/email input matching "user" or "login"; (c) first plain text input
/// regardless of attributes. Email-typed inputs are only selectable through
/// rule (a).
pub fn select_fields(form: &FormElement) -> Option<FieldPair> {
    let password = form
        .inputs
        .iter()
        .position(|f| f.kind == InputKind::Password)?;

    let username = form
        .inputs
        .iter()
        .position(|f| is_username_candidate(f) && attrs_contain(f, &["email"]))
        .or_else(|| {
            form.inputs
                .iter()
                .position(|f| is_username_candidate(f) && attrs_contain(f, &["user", "login"]))
        })
        .or_else(|| form.inputs.iter().position(|f| f.kind == InputKind::Text))?;

    Some(FieldPair { username, password })
}
