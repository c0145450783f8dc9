//! Download-form submission machine.
//!
//! The submit flow used to live as a tangle of nested callbacks; it is now an
//! explicit state machine with a fixed transition table, and every DOM effect
//! goes through [`FormView`] so the machine itself can run (and be tested)
//! without a browser.

use log::{debug, warn};

pub const EMAIL_ERROR_MESSAGE: &str = "Please enter a valid email address.";
pub const FILL_ALL_FIELDS_MESSAGE: &str = "Please fill in all fields.";
pub const SUCCESS_MESSAGE: &str = "Success! Check your email for the download link.";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitState {
    Idle,
    Validating,
    Invalid,
    Sending,
    Succeeded,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldKind {
    Text,
    Email,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FieldSnapshot {
    pub kind: FieldKind,
    pub value: String,
}

impl FieldSnapshot {
    pub fn text(value: impl Into<String>) -> Self {
        Self { kind: FieldKind::Text, value: value.into() }
    }

    pub fn email(value: impl Into<String>) -> Self {
        Self { kind: FieldKind::Email, value: value.into() }
    }
}

/// Everything the machine is allowed to do to the page. The concrete
/// implementation binds real elements; tests substitute a recorder.
pub trait FormView {
    /// Toggle the error cue on the field at `index`. Turning it on also arms
    /// a one-shot reset on the field's next input event.
    fn set_field_error(&mut self, index: usize, on: bool);
    /// Disable the submit control and swap its label for a loading indicator
    /// (or back).
    fn set_submit_busy(&mut self, busy: bool);
    fn clear_form(&mut self);
    fn show_notification(&mut self, message: &str, severity: Severity);
}

/// What a submit attempt resolved to, synchronously.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Disposition {
    /// Validation failed; the machine is back at `Idle`.
    Rejected,
    /// Fields were valid; the machine is `Sending` until [`FormMachine::finish_send`].
    Accepted,
}

const TRANSITIONS: &[(SubmitState, SubmitState)] = &[
    (SubmitState::Idle, SubmitState::Validating),
    (SubmitState::Validating, SubmitState::Invalid),
    (SubmitState::Validating, SubmitState::Sending),
    (SubmitState::Invalid, SubmitState::Idle),
    (SubmitState::Sending, SubmitState::Succeeded),
    (SubmitState::Succeeded, SubmitState::Idle),
];

impl SubmitState {
    fn may_become(self, next: SubmitState) -> bool {
        TRANSITIONS.iter().any(|&(from, to)| from == self && to == next)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldOutcome {
    Valid,
    Empty,
    BadEmail,
}

pub fn check_field(field: &FieldSnapshot) -> FieldOutcome {
    if field.value.trim().is_empty() {
        FieldOutcome::Empty
    } else if field.kind == FieldKind::Email && !is_valid_email(&field.value) {
        FieldOutcome::BadEmail
    } else {
        FieldOutcome::Valid
    }
}

/// `local@domain.tld` where neither side contains whitespace or another `@`,
/// and the domain has a dot somewhere in its interior.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let chars: Vec<char> = domain.chars().collect();
    (1..chars.len().saturating_sub(1)).any(|i| chars[i] == '.')
}

pub struct FormMachine {
    state: SubmitState,
}

impl Default for FormMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl FormMachine {
    pub fn new() -> Self {
        Self { state: SubmitState::Idle }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    fn advance(&mut self, next: SubmitState) {
        if self.state.may_become(next) {
            debug!("form state {:?} -> {:?}", self.state, next);
            self.state = next;
        } else {
            warn!("refusing form transition {:?} -> {:?}", self.state, next);
        }
    }

    /// Run one submit attempt against the captured field values.
    ///
    /// Every field is checked and annotated; there is no short-circuit, so a
    /// form with two bad fields gets two error cues in one pass.
    pub fn submit(&mut self, fields: &[FieldSnapshot], view: &mut dyn FormView) -> Disposition {
        if self.state != SubmitState::Idle {
            warn!("submit ignored while {:?}", self.state);
            return Disposition::Rejected;
        }
        self.advance(SubmitState::Validating);

        let mut all_valid = true;
        let mut email_error_shown = false;
        for (index, field) in fields.iter().enumerate() {
            match check_field(field) {
                FieldOutcome::Valid => view.set_field_error(index, false),
                FieldOutcome::Empty => {
                    all_valid = false;
                    view.set_field_error(index, true);
                }
                FieldOutcome::BadEmail => {
                    all_valid = false;
                    view.set_field_error(index, true);
                    view.show_notification(EMAIL_ERROR_MESSAGE, Severity::Error);
                    email_error_shown = true;
                }
            }
        }

        if all_valid {
            self.advance(SubmitState::Sending);
            view.set_submit_busy(true);
            return Disposition::Accepted;
        }

        self.advance(SubmitState::Invalid);
        // Suppress the generic message when the first two fields are filled:
        // with the fixed name+email layout that means the email-format error
        // above already fired. Positional, do not generalize past two fields.
        let first_two_filled = fields.len() >= 2
            && !fields[0].value.trim().is_empty()
            && !fields[1].value.trim().is_empty();
        if !first_two_filled {
            view.show_notification(FILL_ALL_FIELDS_MESSAGE, Severity::Error);
        } else if !email_error_shown {
            debug!("generic validation notice suppressed although no email error fired");
        }
        self.advance(SubmitState::Idle);
        Disposition::Rejected
    }

    /// Called when the simulated send timer fires.
    pub fn finish_send(&mut self, view: &mut dyn FormView) {
        if self.state != SubmitState::Sending {
            warn!("finish_send ignored while {:?}", self.state);
            return;
        }
        self.advance(SubmitState::Succeeded);
        view.set_submit_busy(false);
        view.clear_form();
        view.show_notification(SUCCESS_MESSAGE, Severity::Success);
        self.advance(SubmitState::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Debug)]
    enum ViewCall {
        FieldError(usize, bool),
        SubmitBusy(bool),
        ClearForm,
        Notify(String, Severity),
    }

    #[derive(Default)]
    struct RecordingView {
        calls: Vec<ViewCall>,
    }

    impl RecordingView {
        fn notifications(&self) -> Vec<(String, Severity)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    ViewCall::Notify(message, severity) => Some((message.clone(), *severity)),
                    _ => None,
                })
                .collect()
        }
    }

    impl FormView for RecordingView {
        fn set_field_error(&mut self, index: usize, on: bool) {
            self.calls.push(ViewCall::FieldError(index, on));
        }

        fn set_submit_busy(&mut self, busy: bool) {
            self.calls.push(ViewCall::SubmitBusy(busy));
        }

        fn clear_form(&mut self) {
            self.calls.push(ViewCall::ClearForm);
        }

        fn show_notification(&mut self, message: &str, severity: Severity) {
            self.calls.push(ViewCall::Notify(message.to_string(), severity));
        }
    }

    fn name_and_email(name: &str, email: &str) -> Vec<FieldSnapshot> {
        vec![FieldSnapshot::text(name), FieldSnapshot::email(email)]
    }

    #[test]
    fn valid_fields_start_the_send() {
        let mut machine = FormMachine::new();
        let mut view = RecordingView::default();

        let disposition = machine.submit(&name_and_email("Jane", "jane@example.com"), &mut view);

        assert_eq!(disposition, Disposition::Accepted);
        assert_eq!(machine.state(), SubmitState::Sending);
        assert_eq!(
            view.calls,
            vec![
                ViewCall::FieldError(0, false),
                ViewCall::FieldError(1, false),
                ViewCall::SubmitBusy(true),
            ]
        );
    }

    #[test]
    fn finishing_the_send_clears_and_celebrates() {
        let mut machine = FormMachine::new();
        let mut view = RecordingView::default();
        machine.submit(&name_and_email("Jane", "jane@example.com"), &mut view);

        view.calls.clear();
        machine.finish_send(&mut view);

        assert_eq!(machine.state(), SubmitState::Idle);
        assert_eq!(
            view.calls,
            vec![
                ViewCall::SubmitBusy(false),
                ViewCall::ClearForm,
                ViewCall::Notify(SUCCESS_MESSAGE.to_string(), Severity::Success),
            ]
        );
    }

    #[test]
    fn empty_field_rejects_without_touching_the_submit_control() {
        let mut machine = FormMachine::new();
        let mut view = RecordingView::default();

        let disposition = machine.submit(&name_and_email("", "jane@example.com"), &mut view);

        assert_eq!(disposition, Disposition::Rejected);
        assert_eq!(machine.state(), SubmitState::Idle);
        assert!(view.calls.iter().all(|call| !matches!(call, ViewCall::SubmitBusy(_))));
        assert!(view.calls.iter().all(|call| !matches!(call, ViewCall::ClearForm)));
        assert_eq!(
            view.notifications(),
            vec![(FILL_ALL_FIELDS_MESSAGE.to_string(), Severity::Error)]
        );
        assert!(view.calls.contains(&ViewCall::FieldError(0, true)));
    }

    #[test]
    fn bad_email_with_filled_fields_shows_only_the_format_error() {
        let mut machine = FormMachine::new();
        let mut view = RecordingView::default();

        let disposition = machine.submit(&name_and_email("Jane", "bad"), &mut view);

        assert_eq!(disposition, Disposition::Rejected);
        assert_eq!(
            view.notifications(),
            vec![(EMAIL_ERROR_MESSAGE.to_string(), Severity::Error)]
        );
    }

    #[test]
    fn empty_name_and_bad_email_reports_both() {
        let mut machine = FormMachine::new();
        let mut view = RecordingView::default();

        machine.submit(&name_and_email("  ", "bad"), &mut view);

        // Format error fires inline during validation, then the generic
        // message fires because the first field is blank.
        assert_eq!(
            view.notifications(),
            vec![
                (EMAIL_ERROR_MESSAGE.to_string(), Severity::Error),
                (FILL_ALL_FIELDS_MESSAGE.to_string(), Severity::Error),
            ]
        );
        assert!(view.calls.contains(&ViewCall::FieldError(0, true)));
        assert!(view.calls.contains(&ViewCall::FieldError(1, true)));
    }

    #[test]
    fn resubmit_while_sending_is_ignored() {
        let mut machine = FormMachine::new();
        let mut view = RecordingView::default();
        machine.submit(&name_and_email("Jane", "jane@example.com"), &mut view);

        view.calls.clear();
        let disposition = machine.submit(&name_and_email("Jane", "jane@example.com"), &mut view);

        assert_eq!(disposition, Disposition::Rejected);
        assert_eq!(machine.state(), SubmitState::Sending);
        assert!(view.calls.is_empty());
    }

    #[test]
    fn finish_send_outside_of_sending_is_a_no_op() {
        let mut machine = FormMachine::new();
        let mut view = RecordingView::default();

        machine.finish_send(&mut view);

        assert_eq!(machine.state(), SubmitState::Idle);
        assert!(view.calls.is_empty());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert_eq!(check_field(&FieldSnapshot::text("   ")), FieldOutcome::Empty);
        assert_eq!(check_field(&FieldSnapshot::email(" \t ")), FieldOutcome::Empty);
    }

    #[test]
    fn email_pattern_matches_the_shipped_regex() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        // Any interior dot in the domain satisfies the pattern.
        assert!(is_valid_email("a@b..c"));

        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane@com."));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email("ja ne@example.com"));
        assert!(!is_valid_email("jane@exa mple.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn transition_table_refuses_shortcuts() {
        assert!(SubmitState::Idle.may_become(SubmitState::Validating));
        assert!(!SubmitState::Idle.may_become(SubmitState::Sending));
        assert!(!SubmitState::Sending.may_become(SubmitState::Idle));
        assert!(!SubmitState::Invalid.may_become(SubmitState::Sending));
    }
}
