//! Interest category filters and expandable interest items.

use std::collections::HashSet;
use std::time::Duration;

/// Delay between successive categories fading in after a filter change.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterestKind {
    CreativeArts,
    Technology,
    Academic,
    Lifestyle,
}

impl InterestKind {
    pub fn all() -> &'static [InterestKind] {
        &[
            InterestKind::CreativeArts,
            InterestKind::Technology,
            InterestKind::Academic,
            InterestKind::Lifestyle,
        ]
    }

    /// Class on the category element, also the filter value
    pub fn class(&self) -> &'static str {
        match self {
            InterestKind::CreativeArts => "creative-arts",
            InterestKind::Technology => "technology",
            InterestKind::Academic => "academic",
            InterestKind::Lifestyle => "lifestyle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InterestKind::CreativeArts => "Creative Arts",
            InterestKind::Technology => "Technology",
            InterestKind::Academic => "Academic",
            InterestKind::Lifestyle => "Lifestyle",
        }
    }

    pub fn from_class(class: &str) -> Option<InterestKind> {
        Self::all().iter().copied().find(|k| k.class() == class)
    }
}

/// Active filter button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterestFilter {
    #[default]
    All,
    Only(InterestKind),
}

impl InterestFilter {
    /// Parse a filter button value. Unknown values match nothing.
    pub fn parse(value: &str) -> Option<InterestFilter> {
        if value == "all" {
            Some(InterestFilter::All)
        } else {
            InterestKind::from_class(value).map(InterestFilter::Only)
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            InterestFilter::All => "all",
            InterestFilter::Only(kind) => kind.class(),
        }
    }

    pub fn shows(&self, kind: InterestKind) -> bool {
        match self {
            InterestFilter::All => true,
            InterestFilter::Only(selected) => *selected == kind,
        }
    }

    /// Fade-in delay of the `index`-th category.
    pub fn reveal_delay(index: usize) -> Duration {
        REVEAL_STAGGER * index as u32
    }
}

/// Which expandable interest items are open. Items are keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ExpandedItems {
    open: HashSet<String>,
}

impl ExpandedItems {
    /// Toggle `id`; returns whether it is now expanded.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.open.remove(id) {
            false
        } else {
            self.open.insert(id.to_string());
            true
        }
    }

    /// Keyboard activation: Enter and Space toggle like a click.
    pub fn handle_key(&mut self, id: &str, key: &str) -> Option<bool> {
        match key {
            "Enter" | " " => Some(self.toggle(id)),
            _ => None,
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Values for `aria-expanded` and the content's `aria-hidden`.
    pub fn aria(&self, id: &str) -> (&'static str, &'static str) {
        if self.is_expanded(id) {
            ("true", "false")
        } else {
            ("false", "true")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_all_shows_everything() {
        for &kind in InterestKind::all() {
            assert!(InterestFilter::All.shows(kind));
        }
    }

    #[test]
    fn filter_only_matching() {
        let filter = InterestFilter::parse("technology").unwrap();
        assert!(filter.shows(InterestKind::Technology));
        assert!(!filter.shows(InterestKind::Lifestyle));
        assert_eq!(filter.value(), "technology");
        assert!(InterestFilter::parse("sports").is_none());
    }

    #[test]
    fn reveal_is_staggered() {
        assert_eq!(InterestFilter::reveal_delay(0), Duration::ZERO);
        assert_eq!(InterestFilter::reveal_delay(3), Duration::from_millis(300));
    }

    #[test]
    fn expandable_toggle_and_keys() {
        let mut items = ExpandedItems::default();
        assert_eq!(items.aria("art"), ("false", "true"));
        assert!(items.toggle("art"));
        assert_eq!(items.aria("art"), ("true", "false"));
        assert_eq!(items.handle_key("art", "Enter"), Some(false));
        assert_eq!(items.handle_key("art", " "), Some(true));
        assert_eq!(items.handle_key("art", "a"), None);
        assert!(items.is_expanded("art"));
    }
}
