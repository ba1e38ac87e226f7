//! Portfolio Content
//!
//! What the page says: hero text, skills, projects, experience timeline,
//! and social links. `Default` carries the stock content; the config file
//! can replace any part of it.

use serde::{Deserialize, Serialize};

/// Hero section: who, the typed phrases, and the pitch
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Display name (header and greeting)
    pub name: String,
    /// Greeting line prefix shown before the typed phrase
    pub greeting: String,
    /// Short bio paragraph
    pub bio: String,
    /// Phrases cycled by the typed-text engine
    pub phrases: Vec<String>,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            name: "Nishant".to_string(),
            greeting: "I'm a".to_string(),
            bio: "With over 5 years of experience in web development, I specialize in \
                  creating scalable, efficient, and user-friendly applications. My passion \
                  lies in solving complex problems and turning ideas into reality through code."
                .to_string(),
            phrases: vec![
                "Full-Stack Developer".to_string(),
                "UI/UX Enthusiast".to_string(),
                "Problem Solver".to_string(),
            ],
        }
    }
}

/// A single skill with a proficiency percentage
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name
    pub name: String,
    /// Proficiency, 0 to 100
    pub level: u8,
}

impl Skill {
    /// Create a skill
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Level as a 0.0-1.0 fraction (levels above 100 are capped)
    #[must_use]
    pub fn fraction(&self) -> f32 {
        f32::from(self.level.min(100)) / 100.0
    }
}

/// Which skill list is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillTab {
    /// Technical skills
    #[default]
    Technical,
    /// Soft skills
    Soft,
}

impl SkillTab {
    /// The other tab
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Technical => Self::Soft,
            Self::Soft => Self::Technical,
        }
    }

    /// Tab label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technical Skills",
            Self::Soft => "Soft Skills",
        }
    }
}

/// Both skill lists
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    /// Technical skills
    #[serde(default)]
    pub technical: Vec<Skill>,
    /// Soft skills
    #[serde(default)]
    pub soft: Vec<Skill>,
}

impl SkillSet {
    /// Skills for a tab
    #[must_use]
    pub fn for_tab(&self, tab: SkillTab) -> &[Skill] {
        match tab {
            SkillTab::Technical => &self.technical,
            SkillTab::Soft => &self.soft,
        }
    }

    /// Iterate over every skill in both tabs
    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.technical.iter().chain(self.soft.iter())
    }
}

impl Default for SkillSet {
    fn default() -> Self {
        Self {
            technical: vec![
                Skill::new("JavaScript/TypeScript", 95),
                Skill::new("React/Next.js", 90),
                Skill::new("Node.js/Express", 85),
                Skill::new("SQL/NoSQL Databases", 80),
                Skill::new("GraphQL", 75),
                Skill::new("DevOps/CI/CD", 70),
            ],
            soft: vec![
                Skill::new("Problem Solving", 95),
                Skill::new("Team Collaboration", 90),
                Skill::new("Communication", 85),
                Skill::new("Adaptability", 90),
                Skill::new("Project Management", 80),
                Skill::new("Mentoring", 75),
            ],
        }
    }
}

/// A project card and its detail view
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Card title
    pub title: String,
    /// One-line summary on the card
    pub description: String,
    /// Technology badges
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Long description in the detail view
    pub full_description: String,
    /// External link shown in the detail view
    pub link: String,
}

impl Project {
    fn new(
        title: &str,
        description: &str,
        technologies: &[&str],
        full_description: &str,
        link: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            technologies: technologies.iter().map(ToString::to_string).collect(),
            full_description: full_description.to_string(),
            link: link.to_string(),
        }
    }
}

/// One entry on the experience timeline
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Year label
    pub year: String,
    /// Role and company
    pub title: String,
    /// What happened there
    pub description: String,
}

impl TimelineEntry {
    fn new(year: &str, title: &str, description: &str) -> Self {
        Self {
            year: year.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// External profile link
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Label (GitHub, LinkedIn, ...)
    pub label: String,
    /// Target URL
    pub url: String,
}

/// Everything the page renders
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Portfolio {
    /// Hero section
    pub hero: Hero,
    /// Skills section
    pub skills: SkillSet,
    /// Featured projects
    pub projects: Vec<Project>,
    /// Experience timeline
    pub experience: Vec<TimelineEntry>,
    /// Social links in the contact section and footer
    pub links: Vec<SocialLink>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            hero: Hero::default(),
            skills: SkillSet::default(),
            projects: default_projects(),
            experience: default_experience(),
            links: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/normienishant".to_string(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/designsbynishant/".to_string(),
                },
                SocialLink {
                    label: "Twitter".to_string(),
                    url: "https://x.com/normienishant".to_string(),
                },
            ],
        }
    }
}

fn default_projects() -> Vec<Project> {
    vec![
        Project::new(
            "Grievance Tracking & Lodging",
            "A solution for lodging and tracking grievances.",
            &["React", "Node.js", "TypeScript"],
            "Developed a website where you can submit complaints and track their progress.",
            "https://example.com/ecommerce",
        ),
        Project::new(
            "Task Management App",
            "A productivity app for efficient task organization",
            &["React Native", "Firebase", "Redux"],
            "Created a cross-platform mobile application for task management, featuring \
             real-time synchronization, push notifications, and offline support. Implemented \
             drag-and-drop functionality for easy task prioritization and calendar integration \
             for deadline management.",
            "https://example.com/taskapp",
        ),
        Project::new(
            "Portfolio Website",
            "A performant and SEO-optimized personal portfolio",
            &["Next.js", "TypeScript", "Tailwind CSS"],
            "Designed and developed a high-performance portfolio website using Next.js for \
             server-side rendering. Implemented advanced SEO techniques, image optimization, and \
             lazy loading for optimal user experience. Integrated a custom CMS for easy content \
             management.",
            "https://example.com/portfolio",
        ),
        Project::new(
            "Analytics Dashboard",
            "A data visualization tool for business intelligence",
            &["Vue.js", "D3.js", "Node.js", "PostgreSQL"],
            "Built a comprehensive analytics dashboard for visualizing complex business data. \
             Implemented real-time data updates, interactive charts and graphs, and customizable \
             report generation. Integrated machine learning algorithms for predictive analytics \
             and trend forecasting.",
            "https://example.com/dashboard",
        ),
    ]
}

fn default_experience() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry::new(
            "2021",
            "Senior Full-Stack Developer at TechCorp",
            "Led a team of developers in creating a large-scale SaaS platform. Implemented \
             microservices architecture and improved system performance by 40%.",
        ),
        TimelineEntry::new(
            "2019",
            "Full-Stack Developer at WebSolutions Inc.",
            "Developed and maintained multiple client projects using React and Node.js. \
             Introduced automated testing, reducing bug reports by 30%.",
        ),
        TimelineEntry::new(
            "2017",
            "Junior Developer at StartUp Labs",
            "Contributed to the development of a real-time analytics dashboard. Gained \
             expertise in front-end technologies and agile methodologies.",
        ),
    ]
}
