pub mod hooks;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

pub use hooks::pick_hook;

/// What a visitor appears to want, judged from their latest message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Recruiter,
    Developer,
    Collaboration,
    Learner,
    Casual,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::Recruiter,
        Intent::Developer,
        Intent::Collaboration,
        Intent::Learner,
        Intent::Casual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Recruiter => "recruiter",
            Intent::Developer => "developer",
            Intent::Collaboration => "collaboration",
            Intent::Learner => "learner",
            Intent::Casual => "casual",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn keyword_pattern(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("invalid intent keyword regex")
}

/// Keyword sets in priority order. The first set with a match wins.
static RULES: LazyLock<[(Intent, Regex); 4]> = LazyLock::new(|| {
    [
        (
            Intent::Recruiter,
            keyword_pattern(&[
                "hire",
                "hiring",
                "job",
                "position",
                "opportunity",
                "recruit",
                "available",
                "interview",
                "resume",
                "cv",
            ]),
        ),
        (
            Intent::Developer,
            keyword_pattern(&[
                "code",
                "github",
                "technical",
                "implementation",
                "how did",
                "architecture",
                "built",
                "stack",
                "api",
                "database",
            ]),
        ),
        (
            Intent::Collaboration,
            keyword_pattern(&[
                "collaborate",
                "partnership",
                "work together",
                "project",
                "contribute",
            ]),
        ),
        (
            Intent::Learner,
            keyword_pattern(&["learn", "tutorial", "how to", "teach", "guide", "beginner"]),
        ),
    ]
});

/// Classify a message by whole-word keyword match.
///
/// Priority: recruiter > developer > collaboration > learner, else casual.
pub fn classify(message: &str) -> Intent {
    RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(message))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Casual)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_words_only() {
        // "coder" and "projection" must not hit "code" / "project"
        assert_eq!(classify("I am a coder with a projection"), Intent::Casual);
        assert_eq!(classify("show me the code"), Intent::Developer);
    }

    #[test]
    fn multi_word_keywords() {
        assert_eq!(classify("How did you do that?"), Intent::Developer);
        assert_eq!(classify("could we work together"), Intent::Collaboration);
        assert_eq!(classify("how to start with ML"), Intent::Learner);
    }

    #[test]
    fn empty_message_is_casual() {
        assert_eq!(classify(""), Intent::Casual);
    }
}
