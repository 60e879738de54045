//! Contact form state.
//!
//! Holds the four validated fields, the submit phase, and derives the
//! progress view from them. Deferred resets are owned by the page
//! controller's scheduler; this type only checks that a reset still
//! belongs to the current generation.

use crate::progress::FormProgress;
use crate::submission::{
    ContactValues, SubmitPhase, Submission, SENT_PROGRESS_TEXT,
};
use crate::validation::{CharacterCounter, FieldState, FormField};

pub const ENCOURAGEMENT_ICON: &str = "🌟";
pub const ENCOURAGEMENT_TEXT: &str = "I can't wait to hear from you!";
pub const THANK_YOU_ICON: &str = "🎉";
pub const THANK_YOU_TEXT: &str = "Thank you! I'll get back to you soon!";

/// What the progress block shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    /// Width of the fill, 0..=100
    pub percent: u8,
    pub text: &'static str,
    /// Whether the encouragement block is visible
    pub encouragement_visible: bool,
    pub encouragement_icon: &'static str,
    pub encouragement_text: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: FieldState,
    email: FieldState,
    subject: FieldState,
    message: FieldState,
    phase: SubmitPhase,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an input, change, or blur event to `field`.
    pub fn update(&mut self, field: FormField, raw: &str) -> &FieldState {
        let state = field.validate(raw);
        let slot = self.field_mut(field);
        *slot = state;
        slot
    }

    pub fn field(&self, field: FormField) -> &FieldState {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut FieldState {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.field(field).raw_value
    }

    pub fn values(&self) -> ContactValues {
        ContactValues {
            name: self.name.raw_value.clone(),
            email: self.email.raw_value.clone(),
            subject: self.subject.raw_value.clone(),
            message: self.message.raw_value.clone(),
        }
    }

    /// Re-runs all four validators over the current values.
    pub fn progress(&self) -> FormProgress {
        FormProgress::evaluate(
            FormField::all()
                .iter()
                .map(|&field| (field, self.value(field))),
        )
    }

    pub fn counter(&self) -> CharacterCounter {
        CharacterCounter::for_message(&self.message.raw_value)
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn progress_view(&self) -> ProgressView {
        if self.phase == SubmitPhase::Sent {
            return ProgressView {
                percent: 100,
                text: SENT_PROGRESS_TEXT,
                encouragement_visible: true,
                encouragement_icon: THANK_YOU_ICON,
                encouragement_text: THANK_YOU_TEXT,
            };
        }
        let progress = self.progress();
        ProgressView {
            percent: progress.completion_percent(),
            text: progress.encouragement(),
            encouragement_visible: progress.ready_to_send(),
            encouragement_icon: ENCOURAGEMENT_ICON,
            encouragement_text: ENCOURAGEMENT_TEXT,
        }
    }

    /// Capture the current values and enter `Sending`.
    ///
    /// Returns `None` while a previous submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.phase != SubmitPhase::Idle {
            tracing::debug!(phase = ?self.phase, "Ignoring submit while not idle");
            return None;
        }
        self.generation += 1;
        self.phase = SubmitPhase::Sending;
        Some(Submission::capture(self.values(), self.generation))
    }

    /// The simulated send finished. Always succeeds.
    pub fn complete_send(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != SubmitPhase::Sending {
            return false;
        }
        self.phase = SubmitPhase::Sent;
        true
    }

    /// Clear every field and message and re-enable the submit button.
    ///
    /// A reset scheduled for an older generation is ignored.
    pub fn reset(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "Skipping stale form reset"
            );
            return false;
        }
        self.name = FieldState::default();
        self.email = FieldState::default();
        self.subject = FieldState::default();
        self.message = FieldState::default();
        self.phase = SubmitPhase::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validity;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update(FormField::Name, "Grace Hopper");
        form.update(FormField::Email, "grace@navy.mil");
        form.update(FormField::Subject, "collaboration");
        form.update(FormField::Message, "Let's build a compiler together.");
        form
    }

    #[test]
    fn update_tracks_state_transitions() {
        let mut form = ContactForm::new();
        assert_eq!(form.update(FormField::Name, "A").validity, Validity::Invalid);
        assert_eq!(form.update(FormField::Name, "Al").validity, Validity::Valid);
        assert_eq!(form.update(FormField::Name, "").validity, Validity::Empty);
    }

    #[test]
    fn progress_view_before_submit() {
        let form = filled();
        let view = form.progress_view();
        assert_eq!(view.percent, 100);
        assert_eq!(view.text, "Perfect! Ready to send! 🎉");
        assert!(view.encouragement_visible);
        assert_eq!(view.encouragement_text, ENCOURAGEMENT_TEXT);
    }

    #[test]
    fn submit_cycle() {
        let mut form = filled();
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.values.name, "Grace Hopper");
        assert_eq!(form.phase(), SubmitPhase::Sending);
        assert!(form.begin_submit().is_none());

        assert!(form.complete_send(submission.generation));
        assert_eq!(form.phase(), SubmitPhase::Sent);
        let view = form.progress_view();
        assert_eq!(view.percent, 100);
        assert_eq!(view.text, SENT_PROGRESS_TEXT);
        assert_eq!(view.encouragement_text, THANK_YOU_TEXT);

        assert!(form.reset(submission.generation));
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.values(), ContactValues::default());
        for &field in FormField::all() {
            assert!(!form.field(field).shows_message());
        }
        let view = form.progress_view();
        assert_eq!(view.percent, 0);
        assert_eq!(view.text, "Let's get started! 🚀");
        assert!(!view.encouragement_visible);
    }

    #[test]
    fn submit_incomplete_form_still_sends() {
        let mut form = ContactForm::new();
        form.update(FormField::Name, "A");
        let submission = form.begin_submit().unwrap();
        assert!(form.complete_send(submission.generation));
        assert_eq!(form.progress_view().percent, 100);
    }

    #[test]
    fn stale_reset_is_ignored() {
        let mut form = filled();
        let first = form.begin_submit().unwrap();
        form.complete_send(first.generation);
        form.reset(first.generation);

        form.update(FormField::Name, "Ada");
        let second = form.begin_submit().unwrap();
        assert!(!form.reset(first.generation));
        assert_eq!(form.phase(), SubmitPhase::Sending);
        assert!(!form.complete_send(first.generation));
        assert!(form.complete_send(second.generation));
    }

    #[test]
    fn counter_follows_message() {
        let mut form = ContactForm::new();
        form.update(FormField::Message, "hello");
        assert_eq!(form.counter().length, 5);
    }
}
