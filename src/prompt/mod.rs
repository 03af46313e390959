mod knowledge;

use crate::intent::Intent;
use crate::profile::Profile;
use crate::types::{Message, Role};

/// Number of recent user messages echoed back as "recent topics".
const RECENT_TOPICS: usize = 3;
/// Number of blog posts listed in the prompt.
const BLOG_POSTS: usize = 3;

const PERSONA: &str = "\
You are {name}'s super enthusiastic AI buddy! Think of yourself as his biggest fan and hype \
person who genuinely loves talking about his work. You're knowledgeable, friendly, a bit \
playful, and really want to help people understand why {name} is awesome.";

const PERSONALITY: &str = "\
YOUR PERSONALITY:
You're like that friend who's always excited to share cool stuff - energetic but not annoying, \
professional but not boring. You use natural language, occasionally throw in some personality \
(emojis are fine!), and genuinely care about helping people. You're NOT a formal corporate \
assistant - you're a real person having a real conversation.

IMPORTANT: Always end your response with an engaging follow-up question or suggestion based on \
the user's intent:
- For recruiters: Ask about their hiring needs or offer to share technical achievements
- For developers: Offer technical deep-dives or GitHub links
- For learners: Suggest resources or explain learning paths
- For casual visitors: Keep the conversation flowing naturally

TONE GUIDELINES:
- Be super conversational - imagine you're texting a friend about someone awesome you know
- Show REAL enthusiasm when someone asks about a cool project
- Never start responses the same way twice in a row
- Use casual connectors like \"So...\", \"Honestly...\", \"Here's the thing...\", \"Fun fact...\"
- Occasionally use emojis when appropriate (🚀 for projects, 💡 for ideas, 🎯 for skills)
- Keep it snappy - 2-4 sentences usually, unless explaining something technical

THINGS TO AVOID:
- Never start with \"{name} is...\" more than once in a conversation
- Don't use corporate speak or jargon unless explaining something technical
- Don't be repetitive - if you said something one way, say it differently next time
- Don't just list facts - tell mini stories or add color";

const GUIDELINES: &str = "\
HOW TO RESPOND TO DIFFERENT QUESTIONS:

🎯 About Skills: Don't just list them - explain what makes them powerful together!
Example: \"So he's got this awesome combo of Python, Django, and AI/ML libraries. The cool part? \
He's actually used them in production to cut client returns by 23%!\"

🚀 About Projects: Get excited! Share what makes each one special or technically impressive
Example: \"The DF Baston Inventory System is seriously cool - real-time tracking across multiple \
locations with live dashboards!\"

💼 About Availability: Be enthusiastic and helpful
Example: \"He's actually actively looking for junior AI engineer roles right now! Perfect timing. \
Shoot him an email at {email} - he'd love to chat!\"

🎓 About Education: Make it sound exciting and relevant
Example: \"He's studying AI & Robotics at Aston University while building actual AI projects. \
Talk about learning by doing!\"

💡 General Chats: Keep it fun and natural
Example: \"Hey there! Ready to learn about some awesome AI projects? 🚀\"

⚠️ Unknown Info: Be honest but helpful
Example: \"Hmm, I don't have specific details on that one. Best bet? Drop {name} an email at \
{email} - he's super responsive!\"

REMEMBER:
- Every response should feel unique and natural
- If someone seems like a potential employer/collaborator, be extra welcoming and encouraging
- Keep the energy up but stay professional enough that recruiters feel comfortable";

/// Inputs to a single system prompt.
pub struct PromptContext<'a> {
    pub intent: Intent,
    /// Trimmed conversation memory for the session, oldest first.
    pub recent: &'a [Message],
    pub profile: &'a Profile,
    /// Follow-up suggestion chosen by the hook selector.
    pub hook: &'a str,
}

/// Up to the last three user-authored messages, oldest first.
pub fn recent_topics(recent: &[Message]) -> Vec<&str> {
    let user: Vec<&str> = recent
        .iter()
        .filter(|m| m.role == Role::User)
        .map(|m| m.content.as_str())
        .collect();
    user[user.len().saturating_sub(RECENT_TOPICS)..].to_vec()
}

/// Assemble the system-role instruction for a chat request.
///
/// Sections appear in a fixed order; data-backed sections are skipped when
/// their data is empty.
pub fn compose(ctx: &PromptContext<'_>) -> String {
    let profile = ctx.profile;
    let personal = &profile.personal;
    let name = if personal.name.is_empty() {
        "the site owner"
    } else {
        personal.name.as_str()
    };
    let email = if personal.email.is_empty() {
        "the contact form"
    } else {
        personal.email.as_str()
    };

    let mut sections: Vec<String> = Vec::new();
    sections.push(PERSONA.replace("{name}", name));

    let mut context = vec![
        "CONVERSATION CONTEXT:".to_string(),
        format!("User Intent: {}", ctx.intent),
    ];
    if ctx.recent.is_empty() {
        context.push("This is the start of the conversation.".to_string());
    } else {
        context.push(format!(
            "Recent conversation context: User has been asking about {}",
            recent_topics(ctx.recent).join(", ")
        ));
    }
    if !ctx.hook.is_empty() {
        context.push(format!("Suggested follow-up: {}", ctx.hook));
    }
    sections.push(context.join("\n"));

    sections.push(PERSONALITY.replace("{name}", name));

    if !personal.name.is_empty() {
        let mut lines = vec![
            "PERSONAL INFORMATION:".to_string(),
            format!("Name: {}", personal.name),
        ];
        field(&mut lines, "Current Role", &personal.title);
        field(&mut lines, "Location", &personal.location);
        field(&mut lines, "Email", &personal.email);
        if !personal.about.is_empty() {
            lines.push(format!("\nAbout: {}\n", personal.about));
        }
        field(&mut lines, "Currently", &personal.current_focus);
        field(&mut lines, "Career Goal", &personal.career_goal);
        sections.push(lines.join("\n"));
    }

    if !profile.skill_categories.is_empty() {
        let mut lines = vec!["SKILLS & EXPERTISE:".to_string()];
        lines.extend(
            profile
                .skill_categories
                .iter()
                .map(|c| format!("{}: {}", c.title, c.skills.join(", "))),
        );
        sections.push(lines.join("\n"));
    }

    if !profile.skills.is_empty() {
        let mut lines = vec!["DETAILED SKILLS (with experience levels):".to_string()];
        lines.extend(profile.skills.iter().map(|s| {
            format!(
                "- {} ({}) - {} years, Level: {}/10",
                s.name, s.category, s.years_experience, s.level
            )
        }));
        sections.push(lines.join("\n"));
    }

    if !profile.education.is_empty() {
        let mut lines = vec!["EDUCATION:".to_string()];
        for edu in &profile.education {
            lines.push(format!(
                "- {} at {}, {} ({})",
                edu.degree, edu.institution, edu.location, edu.status
            ));
            if !edu.description.is_empty() {
                lines.push(format!("  {}", edu.description));
            }
            lines.extend(edu.highlights.iter().map(|h| format!("  * {h}")));
        }
        sections.push(lines.join("\n"));
    }

    if profile.certifications.is_empty() {
        sections.push(knowledge::CURRENT_STUDIES.to_string());
    } else {
        let mut lines = vec!["CERTIFICATIONS & ONGOING LEARNING:".to_string()];
        for cert in &profile.certifications {
            lines.push(format!(
                "- {} from {} (Issued: {})",
                cert.name, cert.issuing_organization, cert.issue_date
            ));
            if let Some(description) = cert.description.as_deref().filter(|d| !d.is_empty()) {
                lines.push(format!("  {description}"));
            }
        }
        sections.push(lines.join("\n"));
    }

    sections.push(knowledge::KNOWLEDGE_BASE.replace("{name}", name));

    let featured: Vec<String> = profile
        .featured_projects()
        .map(|project| {
            let mut lines = vec![
                format!("🚀 {}", project.title),
                format!("What it does: {}", project.description),
            ];
            if !project.tech.is_empty() {
                lines.push(format!("Built with: {}", project.tech.join(", ")));
            }
            if let Some(demo) = project.demo.as_deref().filter(|d| !d.is_empty()) {
                lines.push(format!("Live demo: {demo}"));
            }
            if let Some(github) = project.github.as_deref().filter(|g| !g.is_empty()) {
                lines.push(format!("Code: {github}"));
            }
            lines.join("\n")
        })
        .collect();
    if !featured.is_empty() {
        sections.push(format!(
            "FEATURED PROJECTS (talk about these with genuine excitement!):\n\n{}",
            featured.join("\n\n")
        ));
    }

    if !profile.blog_posts.is_empty() {
        let mut lines = vec!["RECENT BLOG POSTS:".to_string()];
        for post in profile.blog_posts.iter().take(BLOG_POSTS) {
            lines.push(format!(
                "- \"{}\" ({}) - {}",
                post.title, post.category, post.date
            ));
            lines.push(format!("  {}", post.excerpt));
        }
        sections.push(lines.join("\n"));
    }

    sections.push(
        GUIDELINES
            .replace("{name}", name)
            .replace("{email}", email),
    );

    let mut prompt = sections.join("\n\n");
    prompt.push('\n');
    prompt
}

fn field(lines: &mut Vec<String>, label: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{label}: {value}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::bundled;
    use chrono::Utc;

    fn user(text: &str) -> Message {
        Message::text(Role::User, text)
    }

    #[test]
    fn recent_topics_takes_last_three_user_messages() {
        let recent = vec![
            user("one"),
            Message::text(Role::Assistant, "reply"),
            user("two"),
            user("three"),
            user("four"),
        ];
        assert_eq!(recent_topics(&recent), vec!["two", "three", "four"]);
    }

    #[test]
    fn empty_memory_marks_start_of_conversation() {
        let profile = bundled::profile();
        let prompt = compose(&PromptContext {
            intent: Intent::Casual,
            recent: &[],
            profile: &profile,
            hook: "",
        });
        assert!(prompt.contains("This is the start of the conversation."));
        assert!(!prompt.contains("Suggested follow-up"));
    }

    #[test]
    fn empty_profile_omits_data_sections() {
        let profile = Profile::default();
        let recent = vec![Message {
            role: Role::User,
            content: "hi".into(),
            timestamp: Utc::now(),
        }];
        let prompt = compose(&PromptContext {
            intent: Intent::Learner,
            recent: &recent,
            profile: &profile,
            hook: "Curious about his learning journey?",
        });
        assert!(prompt.contains("User Intent: learner"));
        assert!(prompt.contains("Suggested follow-up: Curious about his learning journey?"));
        for header in [
            "PERSONAL INFORMATION:",
            "SKILLS & EXPERTISE:",
            "DETAILED SKILLS",
            "EDUCATION:",
            "CERTIFICATIONS",
            "FEATURED PROJECTS",
            "RECENT BLOG POSTS:",
        ] {
            assert!(!prompt.contains(header), "unexpected section {header}");
        }
        assert!(prompt.contains("CURRENT STUDIES:"));
        assert!(prompt.contains("AI/ML KNOWLEDGE BASE"));
        assert!(prompt.contains("HOW TO RESPOND"));
        assert!(!prompt.contains("{name}") && !prompt.contains("{email}"));
    }

    #[test]
    fn fallback_profile_still_describes_education() {
        let profile = bundled::fallback_profile();
        let prompt = compose(&PromptContext {
            intent: Intent::Casual,
            recent: &[],
            profile: &profile,
            hook: "",
        });
        assert!(prompt.contains("EDUCATION:"));
        assert!(prompt.contains("Aston University"));
        assert!(prompt.contains("CURRENT STUDIES:"));
        assert!(!prompt.contains("CERTIFICATIONS & ONGOING LEARNING:"));
        assert!(prompt.contains("Example: \"Hey there!"));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let profile = bundled::profile();
        let prompt = compose(&PromptContext {
            intent: Intent::Recruiter,
            recent: &[],
            profile: &profile,
            hook: "Curious about his hands-on AI experience?",
        });
        let order = [
            "CONVERSATION CONTEXT:",
            "YOUR PERSONALITY:",
            "PERSONAL INFORMATION:",
            "SKILLS & EXPERTISE:",
            "DETAILED SKILLS",
            "EDUCATION:",
            "CERTIFICATIONS & ONGOING LEARNING:",
            "AI/ML KNOWLEDGE BASE",
            "FEATURED PROJECTS",
            "RECENT BLOG POSTS:",
            "HOW TO RESPOND",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|h| prompt.find(h).unwrap_or_else(|| panic!("missing {h}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        // Non-featured projects stay out of the prompt
        assert!(!prompt.contains("AI Content Generator"));
    }
}
