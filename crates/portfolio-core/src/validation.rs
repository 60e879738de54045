//! Contact form field validators.
//!
//! Every validator is a pure function from the raw field value to a
//! [`FieldState`]. Lengths count Unicode scalar values.

use std::sync::LazyLock;

use regex::Regex;

/// Character budget of the message field.
pub const MESSAGE_MAX_CHARS: usize = 500;
/// Minimum trimmed length of the message field.
pub const MESSAGE_MIN_CHARS: usize = 10;
/// Minimum trimmed length of the name field.
pub const NAME_MIN_CHARS: usize = 2;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Responses for each subject option of the topic dropdown.
const SUBJECT_RESPONSES: &[(&str, &str)] = &[
    ("collaboration", "Awesome! I love collaborating on projects! 🤝"),
    ("question", "Feel free to ask me anything! 🤔"),
    ("feedback", "I really appreciate feedback! 💭"),
    ("project", "Can't wait to see what you're working on! 🎨"),
    ("mentorship", "I'd love to learn from your experience! 🌟"),
    ("other", "Just saying hi is always welcome! 👋"),
];

const SUBJECT_FALLBACK: &str = "Thanks for choosing a topic!";

/// (value, label) of each dropdown option, in display order.
pub const SUBJECT_OPTIONS: &[(&str, &str)] = &[
    ("collaboration", "🤝 Collaboration"),
    ("question", "🤔 Question"),
    ("feedback", "💭 Feedback"),
    ("project", "🎨 Project Idea"),
    ("mentorship", "🌟 Mentorship"),
    ("other", "👋 Just Saying Hi"),
];

/// Tri-state classification of a field's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Empty,
    Invalid,
    Valid,
}

impl Validity {
    /// Modifier class of the validation hint
    pub fn class(&self) -> &'static str {
        match self {
            Validity::Empty => "neutral",
            Validity::Invalid => "invalid",
            Validity::Valid => "valid",
        }
    }
}

/// The four validated fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Email,
            FormField::Subject,
            FormField::Message,
        ]
    }

    /// Form control name
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn validate(&self, raw: &str) -> FieldState {
        match self {
            FormField::Name => validate_name(raw),
            FormField::Email => validate_email(raw),
            FormField::Subject => validate_subject(raw),
            FormField::Message => validate_message(raw),
        }
    }
}

/// Current value of a field and what the user is told about it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    pub raw_value: String,
    pub validity: Validity,
    pub message: String,
}

impl FieldState {
    fn new(raw: &str, validity: Validity, message: impl Into<String>) -> Self {
        Self {
            raw_value: raw.to_string(),
            validity,
            message: message.into(),
        }
    }

    fn empty(raw: &str) -> Self {
        Self::new(raw, Validity::Empty, "")
    }

    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }

    /// Whether the hint element should be shown at all.
    pub fn shows_message(&self) -> bool {
        !self.message.is_empty()
    }

    /// Full class list of the hint element.
    pub fn hint_class(&self) -> String {
        if self.shows_message() {
            format!("input-validation {} show", self.validity.class())
        } else {
            format!("input-validation {}", self.validity.class())
        }
    }
}

pub fn validate_name(raw: &str) -> FieldState {
    let value = raw.trim();
    if value.is_empty() {
        FieldState::empty(raw)
    } else if value.chars().count() < NAME_MIN_CHARS {
        FieldState::new(raw, Validity::Invalid, "Name should be at least 2 characters")
    } else {
        let first = value.split(' ').next().unwrap_or(value);
        FieldState::new(
            raw,
            Validity::Valid,
            format!("Great! Nice to meet you, {}! 👋", first),
        )
    }
}

pub fn validate_email(raw: &str) -> FieldState {
    let value = raw.trim();
    if value.is_empty() {
        FieldState::empty(raw)
    } else if !EMAIL_SHAPE.is_match(value) {
        FieldState::new(raw, Validity::Invalid, "Please enter a valid email address")
    } else {
        FieldState::new(raw, Validity::Valid, "Perfect! I'll reply to this email ✉️")
    }
}

/// The subject is a dropdown: it is either unchosen or valid.
pub fn validate_subject(raw: &str) -> FieldState {
    if raw.is_empty() {
        return FieldState::empty(raw);
    }
    let response = SUBJECT_RESPONSES
        .iter()
        .find(|(option, _)| *option == raw)
        .map(|(_, response)| *response)
        .unwrap_or(SUBJECT_FALLBACK);
    FieldState::new(raw, Validity::Valid, response)
}

pub fn validate_message(raw: &str) -> FieldState {
    let value = raw.trim();
    let len = value.chars().count();
    if len == 0 {
        FieldState::empty(raw)
    } else if len < MESSAGE_MIN_CHARS {
        FieldState::new(
            raw,
            Validity::Invalid,
            "Tell me a bit more! I'd love to hear your thoughts",
        )
    } else if len > MESSAGE_MAX_CHARS {
        FieldState::new(
            raw,
            Validity::Invalid,
            "Your message is getting quite long! Maybe split it into parts?",
        )
    } else {
        FieldState::new(
            raw,
            Validity::Valid,
            "This looks great! I'm excited to read it! 📖",
        )
    }
}

/// Advisory color band of the character counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    /// Above 70% of the budget
    Warning,
    /// Above 90% of the budget
    Danger,
}

impl CounterLevel {
    pub fn color(&self) -> &'static str {
        match self {
            CounterLevel::Normal => "var(--text-secondary)",
            CounterLevel::Warning => "#f59e0b",
            CounterLevel::Danger => "#ef4444",
        }
    }
}

/// Display-only counter under the message field. Counts the raw,
/// untrimmed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterCounter {
    pub length: usize,
    pub max: usize,
}

impl CharacterCounter {
    pub fn for_message(raw: &str) -> Self {
        Self {
            length: raw.chars().count(),
            max: MESSAGE_MAX_CHARS,
        }
    }

    pub fn level(&self) -> CounterLevel {
        if self.length * 10 > self.max * 9 {
            CounterLevel::Danger
        } else if self.length * 10 > self.max * 7 {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        }
    }

    pub fn text(&self) -> String {
        format!("{}/{} characters", self.length, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_boundaries() {
        assert_eq!(validate_name("").validity, Validity::Empty);
        assert_eq!(validate_name("   ").validity, Validity::Empty);
        assert_eq!(validate_name("A").validity, Validity::Invalid);
        assert_eq!(validate_name(" A ").validity, Validity::Invalid);
        assert_eq!(validate_name("Al").validity, Validity::Valid);
    }

    #[test]
    fn name_greets_first_token() {
        let state = validate_name("Grace Hopper");
        assert!(state.is_valid());
        assert_eq!(state.message, "Great! Nice to meet you, Grace! 👋");

        let state = validate_name("  Ada  ");
        assert_eq!(state.message, "Great! Nice to meet you, Ada! 👋");
    }

    #[test]
    fn name_empty_has_no_message() {
        let state = validate_name("");
        assert!(!state.shows_message());
        assert_eq!(state.hint_class(), "input-validation neutral");
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("a@b.c").is_valid());
        assert!(validate_email(" grace@navy.mil ").is_valid());
        assert_eq!(validate_email("a@b").validity, Validity::Invalid);
        assert_eq!(validate_email("a b@c.d").validity, Validity::Invalid);
        assert_eq!(validate_email("a@@b.c").validity, Validity::Invalid);
        assert_eq!(validate_email("@b.c").validity, Validity::Invalid);

        let empty = validate_email("");
        assert_eq!(empty.validity, Validity::Empty);
        assert!(empty.message.is_empty());
    }

    #[test]
    fn subject_mapping_and_fallback() {
        assert_eq!(validate_subject("").validity, Validity::Empty);
        assert_eq!(
            validate_subject("feedback").message,
            "I really appreciate feedback! 💭"
        );
        let other = validate_subject("something-new");
        assert!(other.is_valid());
        assert_eq!(other.message, "Thanks for choosing a topic!");
    }

    #[test]
    fn message_boundaries() {
        assert_eq!(validate_message("123456789").validity, Validity::Invalid);
        assert!(validate_message("1234567890").is_valid());
        assert!(validate_message(&"x".repeat(500)).is_valid());
        let long = validate_message(&"x".repeat(501));
        assert_eq!(long.validity, Validity::Invalid);
        assert!(long.message.contains("quite long"));
    }

    #[test]
    fn message_trims_before_counting() {
        assert_eq!(
            validate_message("   short   ").validity,
            Validity::Invalid
        );
        assert!(validate_message(&format!("  {}  ", "x".repeat(500))).is_valid());
    }

    #[test]
    fn hint_class_shows_when_message_present() {
        let state = validate_email("nope");
        assert_eq!(state.hint_class(), "input-validation invalid show");
    }

    #[test]
    fn counter_levels() {
        assert_eq!(CharacterCounter::for_message("").level(), CounterLevel::Normal);
        assert_eq!(
            CharacterCounter::for_message(&"x".repeat(350)).level(),
            CounterLevel::Normal
        );
        assert_eq!(
            CharacterCounter::for_message(&"x".repeat(351)).level(),
            CounterLevel::Warning
        );
        assert_eq!(
            CharacterCounter::for_message(&"x".repeat(450)).level(),
            CounterLevel::Warning
        );
        assert_eq!(
            CharacterCounter::for_message(&"x".repeat(451)).level(),
            CounterLevel::Danger
        );
    }

    #[test]
    fn counter_uses_raw_length() {
        let counter = CharacterCounter::for_message("  hi  ");
        assert_eq!(counter.length, 6);
        assert_eq!(counter.text(), "6/500 characters");
    }

    #[test]
    fn field_dispatch() {
        assert!(FormField::Name.validate("Al").is_valid());
        assert!(FormField::Subject.validate("question").is_valid());
        assert_eq!(FormField::Message.as_str(), "message");
        assert_eq!(FormField::all().len(), 4);
    }

    #[test]
    fn every_option_has_a_response() {
        for (value, _) in SUBJECT_OPTIONS {
            assert_ne!(validate_subject(value).message, SUBJECT_FALLBACK, "{value}");
        }
    }
}
