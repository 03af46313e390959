//! Profile data compiled into the binary.

use super::{
    BlogPost, Certification, Education, PersonalInfo, Profile, Project, Skill, SkillCategory,
};

const GITHUB: &str = "https://github.com/moqayyubok";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Qayyum Bokhari".into(),
        title: "AI and Software Engineer".into(),
        email: "qayyumbokhari77@gmail.com".into(),
        location: "Birmingham, UK".into(),
        about: "Full-Stack Developer transitioning to AI Engineering with real production ML \
                experience. He's delivered a 23% reduction in client return rates through \
                predictive analytics and built AI-powered applications using OpenAI API, \
                Hugging Face Transformers, and Django."
            .into(),
        current_focus: "Pursuing BSc in AI & Robotics at Aston University (2024-2027) while \
                        building intelligent web applications"
            .into(),
        career_goal: "Junior AI Engineer role where he can combine his software engineering \
                      expertise with machine learning implementation"
            .into(),
    }
}

pub fn skill_categories() -> Vec<SkillCategory> {
    let categories: [(&str, &[&str]); 6] = [
        (
            "Core Languages",
            &["Python", "JavaScript (ES6+)", "PHP", "SQL", "HTML5", "CSS3"],
        ),
        ("Backend Frameworks", &["Django", "Flask", "Laravel", "Node.js"]),
        ("Frontend", &["React", "jQuery", "Bootstrap", "Tailwind CSS"]),
        (
            "AI/ML",
            &[
                "TensorFlow",
                "Hugging Face Transformers",
                "OpenAI API",
                "Scikit-learn",
            ],
        ),
        ("Databases", &["PostgreSQL", "MySQL", "MongoDB", "SQLite"]),
        (
            "DevOps & Cloud",
            &[
                "Docker",
                "Git",
                "GitHub",
                "CI/CD",
                "Jenkins",
                "Linux",
                "AWS (EC2, S3, RDS)",
                "Vercel",
                "Heroku",
            ],
        ),
    ];
    categories
        .into_iter()
        .map(|(title, skills)| SkillCategory {
            title: title.into(),
            skills: strings(skills),
        })
        .collect()
}

/// Detailed skills derived from the categories with default levels.
pub fn skills() -> Vec<Skill> {
    skill_categories()
        .into_iter()
        .flat_map(|category| {
            category.skills.into_iter().map(move |name| Skill {
                name,
                category: category.title.clone(),
                years_experience: 3,
                level: 8,
            })
        })
        .collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "AI-Powered CV Chatbot".into(),
            description: "Intelligent chatbot using Retrieval-Augmented Generation (RAG) \
                          architecture to provide context-aware responses about CV content. \
                          Integrated OpenAI GPT-3.5 API and Llama 2 via Hugging Face \
                          Transformers. Achieved 92% response accuracy with FAISS vector database."
                .into(),
            tech: strings(&[
                "Python",
                "Django",
                "OpenAI API",
                "Hugging Face",
                "FAISS",
                "AWS EC2",
                "Docker",
            ]),
            github: Some(GITHUB.into()),
            demo: Some("https://royaltap.shop/".into()),
            featured: true,
        },
        Project {
            title: "DF Baston Inventory UK".into(),
            description: "Comprehensive inventory management system with real-time tracking, \
                          reducing stock discrepancies by 45% and saving 12 hours/week in manual \
                          processes. Implemented RESTful APIs and JWT authentication."
                .into(),
            tech: strings(&[
                "Django",
                "Laravel",
                "PostgreSQL",
                "MySQL",
                "Redis",
                "Docker",
                "CI/CD",
            ]),
            github: Some(GITHUB.into()),
            demo: Some("https://www.dfbastoninventory.co.uk/".into()),
            featured: true,
        },
        Project {
            title: "Retro App - Team Collaboration Platform".into(),
            description: "Secure team collaboration application enabling cross-functional teams \
                          to work together. Optimized database queries and implemented Redis \
                          caching, improving response time by 60% (2.1s → 0.8s)."
                .into(),
            tech: strings(&["Django", "PostgreSQL", "Redis", "JWT", "REST API", "Docker"]),
            github: Some(GITHUB.into()),
            demo: None,
            featured: true,
        },
        Project {
            title: "AI Content Generator".into(),
            description: "Multi-modal content generation platform for blogs, social media, and \
                          marketing materials."
                .into(),
            tech: strings(&["GPT-4", "DALL-E", "React", "Node.js", "MongoDB"]),
            github: None,
            demo: None,
            featured: false,
        },
    ]
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![BlogPost {
        title: "Building DF Baston Inventory System".into(),
        excerpt: "A comprehensive look at developing a full-stack inventory management system \
                  with real-time tracking, user authentication, and dashboard analytics. Learn \
                  about the architecture, challenges, and solutions implemented."
            .into(),
        date: "2025-01-10".into(),
        category: "Web Development".into(),
    }]
}

pub fn education() -> Vec<Education> {
    vec![Education {
        institution: "Aston University".into(),
        degree: "Bachelor of Science in Artificial Intelligence and Robotics".into(),
        location: "Birmingham, UK".into(),
        status: "Current Student".into(),
        description: "Studying cutting-edge AI and robotics technologies, focusing on machine \
                      learning, computer vision, and autonomous systems."
            .into(),
        highlights: strings(&[
            "Machine Learning and RAG (Retrieval-Augmented Generation) coursework",
            "Experience with Design Factory Birmingham",
            "Full-stack development projects using Laravel and Django frameworks",
            "Integration of AI algorithms with robotics applications",
        ]),
    }]
}

pub fn certifications() -> Vec<Certification> {
    vec![Certification {
        name: "Machine Learning Course (RAG)".into(),
        issuing_organization: "In Progress".into(),
        issue_date: "Currently Pursuing".into(),
        description: Some(
            "Advanced studies in Retrieval-Augmented Generation and machine learning applications"
                .into(),
        ),
    }]
}

/// The complete bundled profile.
pub fn profile() -> Profile {
    Profile {
        personal: personal_info(),
        skill_categories: skill_categories(),
        skills: skills(),
        education: education(),
        certifications: certifications(),
        projects: projects(),
        blog_posts: blog_posts(),
    }
}

/// What the chat endpoint falls back to when the content store is down:
/// static bio, categories, education, projects and posts, without the
/// store-only skill levels and certifications.
pub fn fallback_profile() -> Profile {
    Profile {
        skills: Vec::new(),
        certifications: Vec::new(),
        ..profile()
    }
}
