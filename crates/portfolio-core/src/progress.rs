//! Form completion progress.

use crate::validation::{FieldState, FormField};

/// Number of fields that count towards completion.
pub const REQUIRED_FIELDS: usize = 4;

/// Encouragement line for each valid-field count, 0 through 4.
pub const ENCOURAGEMENTS: [&str; REQUIRED_FIELDS + 1] = [
    "Let's get started! 🚀",
    "You're off to a great start! 🌟",
    "Halfway there! Keep going! 💪",
    "Almost done! Looking good! ✨",
    "Perfect! Ready to send! 🎉",
];

/// Derived completion state. Never stored; always rebuilt from the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormProgress {
    pub valid_field_count: usize,
}

impl FormProgress {
    /// Re-run every validator over the current values.
    pub fn evaluate<'a>(values: impl IntoIterator<Item = (FormField, &'a str)>) -> Self {
        let valid_field_count = values
            .into_iter()
            .filter(|(field, raw)| field.validate(raw).is_valid())
            .count()
            .min(REQUIRED_FIELDS);
        Self { valid_field_count }
    }

    /// Count valid entries among already-evaluated field states.
    pub fn from_states<'a>(states: impl IntoIterator<Item = &'a FieldState>) -> Self {
        let valid_field_count = states
            .into_iter()
            .filter(|s| s.is_valid())
            .count()
            .min(REQUIRED_FIELDS);
        Self { valid_field_count }
    }

    pub fn completion_percent(&self) -> u8 {
        (self.valid_field_count * 100 / REQUIRED_FIELDS) as u8
    }

    pub fn encouragement(&self) -> &'static str {
        ENCOURAGEMENTS[self.valid_field_count.min(REQUIRED_FIELDS)]
    }

    /// The "ready to send" affordance is visible only with every field valid.
    pub fn ready_to_send(&self) -> bool {
        self.valid_field_count == REQUIRED_FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_is_zero() {
        let progress = FormProgress::evaluate([
            (FormField::Name, ""),
            (FormField::Email, ""),
            (FormField::Subject, ""),
            (FormField::Message, ""),
        ]);
        assert_eq!(progress.valid_field_count, 0);
        assert_eq!(progress.completion_percent(), 0);
        assert_eq!(progress.encouragement(), "Let's get started! 🚀");
        assert!(!progress.ready_to_send());
    }

    #[test]
    fn partial_form() {
        let progress = FormProgress::evaluate([
            (FormField::Name, "Grace"),
            (FormField::Email, "grace@navy"),
            (FormField::Subject, "question"),
            (FormField::Message, ""),
        ]);
        assert_eq!(progress.valid_field_count, 2);
        assert_eq!(progress.completion_percent(), 50);
        assert_eq!(progress.encouragement(), "Halfway there! Keep going! 💪");
    }

    #[test]
    fn complete_form() {
        let progress = FormProgress::evaluate([
            (FormField::Name, "Grace Hopper"),
            (FormField::Email, "grace@navy.mil"),
            (FormField::Subject, "collaboration"),
            (FormField::Message, "Let's build a compiler together."),
        ]);
        assert_eq!(progress.valid_field_count, 4);
        assert_eq!(progress.completion_percent(), 100);
        assert!(progress.ready_to_send());
        assert_eq!(progress.encouragement(), "Perfect! Ready to send! 🎉");
    }

    #[test]
    fn three_quarters() {
        let states = [
            FormField::Name.validate("Al"),
            FormField::Email.validate("a@b.c"),
            FormField::Subject.validate("other"),
            FormField::Message.validate("too short"),
        ];
        let progress = FormProgress::from_states(&states);
        assert_eq!(progress.completion_percent(), 75);
        assert_eq!(progress.encouragement(), "Almost done! Looking good! ✨");
    }
}
