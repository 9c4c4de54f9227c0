//! Filling a detected login form.

use tracing::debug;

use crate::detect::{detect_login_forms, select_fields};
use crate::dom::{Document, InputField, SyntheticEvent};

/// Writes a value into a field and records the notification sequence the
/// host must replay: input/change plus a key-press pair, then a final input
/// event re-dispatched after the write.
///
/// The host must apply the trailing write through the element's *native*
/// value setter (not the instance property) before dispatching that last
/// input event — frameworks that shadow the value setter will otherwise
/// never observe the programmatic change.
fn write_field(field: &mut InputField, value: &str) {
    field.value.clear();
    field.value.push_str(value);
    field.events.extend([
        SyntheticEvent::Input,
        SyntheticEvent::Change,
        SyntheticEvent::KeyDown,
        SyntheticEvent::KeyUp,
    ]);
    field.events.push(SyntheticEvent::Input);
}

/// Fills the first detected login form with the given credential.
///
/// Returns `false` — never an error — when the page has no candidate form
/// or the candidate lacks a fillable username/password pair.
pub fn fill_login_form(document: &mut Document, username: &str, password: &str) -> bool {
    let Some(form_index) = detect_login_forms(document).into_iter().next() else {
        debug!("fill skipped: no login form detected");
        return false;
    };
    let Some(pair) = select_fields(&document.forms[form_index]) else {
        debug!(form_index, "fill skipped: no fillable field pair");
        return false;
    };

    let form = &mut document.forms[form_index];
    write_field(&mut form.inputs[pair.username], username);
    write_field(&mut form.inputs[pair.password], password);

    debug!(form_index, "login form filled");
    true
}
