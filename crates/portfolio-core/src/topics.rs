//! "Let's talk about" topic tags next to the contact form.

/// Icon and reply for one topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicResponse {
    pub icon: &'static str,
    pub text: &'static str,
}

/// (topic id, label, response)
pub const TOPICS: &[(&str, &str, TopicResponse)] = &[
    (
        "creative",
        "Creative Projects",
        TopicResponse {
            icon: "🎨",
            text: "I absolutely love creative projects! From digital art to web design, creativity is at the heart of everything I do. There's nothing quite like bringing an idea to life through art and code!",
        },
    ),
    (
        "coding",
        "Coding",
        TopicResponse {
            icon: "💻",
            text: "Coding is like magic to me! I love how a few lines of code can create amazing interactive experiences. Whether it's building websites, creating animations, or solving problems - programming never stops being exciting!",
        },
    ),
    (
        "learning",
        "School & Learning",
        TopicResponse {
            icon: "📚",
            text: "High school has been such an adventure! I'm always curious about new subjects and love connecting what I learn in class with my creative projects. Every day brings new discoveries!",
        },
    ),
    (
        "music",
        "Music",
        TopicResponse {
            icon: "🎵",
            text: "Music is the soundtrack to my creativity! I love discovering new artists and genres that inspire my work. My Beat by Beat project actually came from my fascination with how music and visuals can work together!",
        },
    ),
    (
        "dreams",
        "Future Dreams",
        TopicResponse {
            icon: "🌟",
            text: "I dream big! My goal is to use technology and creativity to make a positive impact on the world. Whether that's through innovative apps, beautiful designs, or inspiring others to pursue their passions!",
        },
    ),
    (
        "collab",
        "Collaboration",
        TopicResponse {
            icon: "🤝",
            text: "Collaboration makes everything better! I love working with others because everyone brings unique perspectives and skills. Some of my best ideas have come from brainstorming with friends and fellow creators!",
        },
    ),
    (
        "projects",
        "Fun Projects",
        TopicResponse {
            icon: "🎮",
            text: "Fun projects are the best kind of learning! Whether it's a coding challenge, an art experiment, or just trying something completely new - I believe play and creativity go hand in hand!",
        },
    ),
    (
        "inspiration",
        "Inspiration",
        TopicResponse {
            icon: "💡",
            text: "Inspiration is everywhere! From nature walks to browsing amazing websites, reading books to watching other creators - I'm always looking for that spark that leads to the next big idea!",
        },
    ),
];

pub fn topic_response(topic: &str) -> Option<TopicResponse> {
    TOPICS
        .iter()
        .find(|(id, _, _)| *id == topic)
        .map(|(_, _, response)| *response)
}

/// Which tag is active and what the response panel shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicSelection {
    active: Option<String>,
    response: Option<TopicResponse>,
}

impl TopicSelection {
    /// Make `topic` the single active tag. An unknown topic still becomes
    /// active but leaves the previous response in place.
    pub fn select(&mut self, topic: &str) {
        self.active = Some(topic.to_string());
        if let Some(response) = topic_response(topic) {
            self.response = Some(response);
        }
    }

    pub fn is_active(&self, topic: &str) -> bool {
        self.active.as_deref() == Some(topic)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Shown response, `None` while the panel is hidden.
    pub fn response(&self) -> Option<TopicResponse> {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_a_response() {
        assert_eq!(TOPICS.len(), 8);
        for (id, _, _) in TOPICS {
            assert!(topic_response(id).is_some(), "missing {}", id);
        }
    }

    #[test]
    fn select_is_exclusive() {
        let mut selection = TopicSelection::default();
        assert!(selection.response().is_none());

        selection.select("music");
        assert!(selection.is_active("music"));
        assert_eq!(selection.response().unwrap().icon, "🎵");

        selection.select("coding");
        assert!(!selection.is_active("music"));
        assert!(selection.is_active("coding"));
        assert_eq!(selection.response().unwrap().icon, "💻");
    }

    #[test]
    fn unknown_topic_keeps_previous_response() {
        let mut selection = TopicSelection::default();
        selection.select("unknown");
        assert!(selection.is_active("unknown"));
        assert!(selection.response().is_none());

        selection.select("dreams");
        selection.select("unknown");
        assert_eq!(selection.response().unwrap().icon, "🌟");
    }
}
