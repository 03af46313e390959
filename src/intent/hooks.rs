use rand::Rng;

use super::Intent;

const CASUAL: [&str; 3] = [
    "What else would you like to know?",
    "Any specific project catch your eye?",
    "Want to hear about something else?",
];

/// Follow-up candidates for an intent.
pub fn candidates(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Recruiter => &[
            "Want to know more about his technical achievements?",
            "Curious about his hands-on AI experience?",
            "Should I share details about his recent projects?",
        ],
        Intent::Developer => &[
            "Want to dive into the technical architecture?",
            "Interested in seeing the code on GitHub?",
            "Should I explain the implementation details?",
        ],
        Intent::Collaboration => &[
            "Want to know what tech stack he's most excited about?",
            "Curious about his current learning focus?",
            "Should I share his contact info?",
        ],
        Intent::Learner => &[
            "Want some learning resources he recommends?",
            "Curious about his learning journey?",
            "Should I share more about how he learned this?",
        ],
        Intent::Casual => &CASUAL,
    }
}

/// Pick a closing follow-up prompt for the given intent, uniformly at random.
///
/// The random source is injected so callers (and tests) control the sequence.
pub fn pick_hook<R: Rng + ?Sized>(intent: Intent, rng: &mut R) -> &'static str {
    let mut options = candidates(intent);
    if options.is_empty() {
        options = &CASUAL;
    }
    options[rng.gen_range(0..options.len())]
}
