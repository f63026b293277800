use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

const DATASET_FILE: &str = "portfolio.json";

/// Compiled-in content. The portfolio is configuration, not user data.
#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::embedded().unwrap_or_else(|e| panic!("embedded portfolio is invalid: {e}"))
});

/// The process-wide dataset. Panics on first access if the compiled-in data is malformed.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Portfolio data file not embedded: {0}")]
    Missing(&'static str),
    #[error("Couldn't parse portfolio data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate project id {0}")]
    DuplicateId(ProjectId),
    #[error("Project {id} has an empty {field}")]
    EmptyField { id: ProjectId, field: &'static str },
    #[error("Featured project has an empty {0}")]
    EmptyFeatured(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Symbolic glyph reference, rendered through the icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Award,
    BookOpen,
    Brain,
    Cloud,
    Code,
    Cpu,
    Database,
    ExternalLink,
    Github,
    Layers,
    Linkedin,
    Mail,
    MapPin,
    Maximize,
    Terminal,
    Wrench,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::Award => "extra-award",
            Icon::BookOpen => "extra-book-open",
            Icon::Brain => "extra-brain",
            Icon::Cloud => "extra-cloud",
            Icon::Code => "extra-code",
            Icon::Cpu => "extra-cpu",
            Icon::Database => "extra-database",
            Icon::ExternalLink => "extra-link",
            Icon::Github => "devicon-github-plain",
            Icon::Layers => "extra-layers",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Mail => "extra-email",
            Icon::MapPin => "extra-location",
            Icon::Maximize => "extra-maximize",
            Icon::Terminal => "extra-terminal",
            Icon::Wrench => "extra-wrench",
        }
    }
}

/// Colour family used for card gradients, glows and headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    #[default]
    Emerald,
    Orange,
    Blue,
    Cyan,
    Purple,
    Amber,
    Rose,
    Zinc,
}

impl Accent {
    pub fn gradient(self) -> &'static str {
        match self {
            Accent::Emerald => "from-emerald-900/30 to-emerald-950/10 border-emerald-500/30",
            Accent::Orange => "from-orange-900/30 to-orange-950/10 border-orange-500/30",
            Accent::Blue => "from-blue-900/30 to-blue-950/10 border-blue-500/30",
            Accent::Cyan => "from-cyan-900/30 to-cyan-950/10 border-cyan-500/30",
            Accent::Purple => "from-purple-900/30 to-purple-950/10 border-purple-500/30",
            Accent::Amber => "from-amber-900/40 to-amber-950/20 border-amber-500/30",
            Accent::Rose => "from-rose-900/30 to-rose-950/10 border-rose-500/30",
            Accent::Zinc => "from-zinc-900/30 to-zinc-950/10 border-zinc-500/30",
        }
    }

    pub fn glow(self) -> &'static str {
        match self {
            Accent::Emerald => "bg-emerald-500/30",
            Accent::Orange => "bg-orange-500/30",
            Accent::Blue => "bg-blue-500/30",
            Accent::Cyan => "bg-cyan-500/30",
            Accent::Purple => "bg-purple-500/30",
            Accent::Amber => "bg-amber-500/30",
            Accent::Rose => "bg-rose-500/30",
            Accent::Zinc => "bg-zinc-500/30",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Accent::Emerald => "text-emerald-400",
            Accent::Orange => "text-orange-400",
            Accent::Blue => "text-blue-400",
            Accent::Cyan => "text-cyan-400",
            Accent::Purple => "text-purple-400",
            Accent::Amber => "text-amber-400",
            Accent::Rose => "text-rose-400",
            Accent::Zinc => "text-zinc-400",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub surname: String,
    pub headline: String,
    pub focus: Vec<String>,
    pub availability: String,
    pub affiliation: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub school: String,
    pub period: String,
    pub logo: String,
    pub coursework: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: Icon,
    pub accent: Accent,
    /// Spans the full width of the skills grid.
    #[serde(default)]
    pub wide: bool,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub subtitle: String,
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub href: String,
    pub label: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedProject {
    pub badge: String,
    pub title: String,
    pub lead: String,
    pub highlight: String,
    pub description: String,
    pub stack: Vec<String>,
    pub live_url: String,
    pub source_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub icon: Icon,
    #[serde(default)]
    pub accent: Accent,
    pub stack: Vec<String>,
    pub source_link: String,
    pub details: Vec<String>,
}

impl Project {
    fn validate(&self) -> Result<(), ContentError> {
        let empty = |field: &'static str| ContentError::EmptyField { id: self.id, field };
        let required = [
            ("title", &self.title),
            ("short description", &self.short_description),
            ("description", &self.description),
            ("source link", &self.source_link),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(empty(*field));
        }
        if self.stack.is_empty() || self.stack.iter().any(|s| s.trim().is_empty()) {
            return Err(empty("stack"));
        }
        if self.details.is_empty() || self.details.iter().any(|s| s.trim().is_empty()) {
            return Err(empty("details"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub credits: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub education: Education,
    pub skills: Vec<SkillCategory>,
    pub achievement: Achievement,
    pub resume: Resume,
    pub featured: FeaturedProject,
    projects: Vec<Project>,
    pub footer: Footer,
}

impl Portfolio {
    pub fn embedded() -> Result<Self, ContentError> {
        let file = ContentAssets::get(DATASET_FILE).ok_or(ContentError::Missing(DATASET_FILE))?;
        Self::from_slice(&file.data)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Self::from_slice(json.as_bytes())
    }

    fn from_slice(data: &[u8]) -> Result<Self, ContentError> {
        let portfolio = serde_json::from_slice::<Portfolio>(data)?;
        portfolio.validate()?;
        log::debug!(
            "loaded portfolio with {} projects and {} skill categories",
            portfolio.projects.len(),
            portfolio.skills.len()
        );
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateId(project.id));
            }
            project.validate()?;
        }
        let featured = &self.featured;
        if featured.title.trim().is_empty() {
            return Err(ContentError::EmptyFeatured("title"));
        }
        if featured.live_url.trim().is_empty() {
            return Err(ContentError::EmptyFeatured("live url"));
        }
        Ok(())
    }

    /// Projects in display order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn synthetic_json(projects: &str) -> String {
        format!(
            r#"{{
                "profile": {{
                    "name": "Test", "surname": "Person", "headline": "Builds", "focus": ["Things"],
                    "availability": "OPEN", "affiliation": "U", "location": "Here",
                    "email": "a@b.c", "linkedin": "https://l", "github": "https://g"
                }},
                "education": {{
                    "degree": "MS", "field": "SE", "school": "U", "period": "2024",
                    "logo": "/logo.svg", "coursework": ["One"]
                }},
                "skills": [{{ "title": "Langs", "icon": "code", "accent": "orange", "skills": ["Rust"] }}],
                "achievement": {{ "title": "Won", "subtitle": "First", "blurb": "Did it" }},
                "resume": {{ "href": "/cv.pdf", "label": "Resume", "caption": "PDF" }},
                "featured": {{
                    "badge": "LIVE", "title": "Feat", "lead": "A", "highlight": "thing",
                    "description": "that works", "stack": ["Rust"],
                    "live_url": "https://f", "source_url": "https://s"
                }},
                "projects": [{projects}],
                "footer": {{ "credits": "Made" }}
            }}"#
        )
    }

    pub(crate) fn synthetic_project(id: u32, title: &str) -> String {
        format!(
            r#"{{
                "id": {id}, "title": "{title}", "short_description": "short",
                "description": "long", "icon": "code", "stack": ["Rust"],
                "source_link": "https://example.com/{id}", "details": ["did a thing"]
            }}"#
        )
    }

    pub(crate) fn synthetic_portfolio(ids: &[u32]) -> Portfolio {
        let projects = ids
            .iter()
            .map(|id| synthetic_project(*id, &format!("Project {id}")))
            .collect::<Vec<_>>()
            .join(",");
        Portfolio::from_json(&synthetic_json(&projects)).expect("synthetic portfolio should parse")
    }

    #[test]
    fn test_embedded_portfolio_loads() {
        let portfolio = Portfolio::embedded().expect("embedded portfolio should be valid");

        let ids = portfolio.projects().iter().map(|p| p.id.0).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            portfolio.project(ProjectId(2)).map(|p| p.title.as_str()),
            Some("Restaurant Finding System")
        );
        assert_eq!(portfolio.skills.len(), 5);
        assert!(portfolio.skills.iter().filter(|s| s.wide).count() == 1);
        assert_eq!(portfolio.featured.title, "Learneazy.io");
    }

    #[test]
    fn test_embedded_ids_pairwise_unique() {
        let portfolio = portfolio();
        let projects = portfolio.projects();
        for (i, a) in projects.iter().enumerate() {
            for b in &projects[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_embedded_records_complete() {
        for project in portfolio().projects() {
            assert!(!project.title.is_empty());
            assert!(!project.short_description.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.stack.is_empty());
            assert!(project.source_link.starts_with("https://"));
            assert!(!project.details.is_empty());
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let projects = [synthetic_project(7, "A"), synthetic_project(7, "B")].join(",");
        let err = Portfolio::from_json(&synthetic_json(&projects)).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId(ProjectId(7))));
    }

    #[test]
    fn test_empty_fields_rejected() {
        let projects = synthetic_project(1, " ");
        let err = Portfolio::from_json(&synthetic_json(&projects)).unwrap_err();
        assert!(matches!(
            err,
            ContentError::EmptyField {
                id: ProjectId(1),
                field: "title"
            }
        ));

        let projects = synthetic_project(2, "Ok").replace(r#"["did a thing"]"#, "[]");
        let err = Portfolio::from_json(&synthetic_json(&projects)).unwrap_err();
        assert!(matches!(err, ContentError::EmptyField { field: "details", .. }));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let projects = r#"{ "id": 1, "title": "No rest" }"#;
        let err = Portfolio::from_json(&synthetic_json(projects)).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_lookup_unknown_id() {
        let portfolio = synthetic_portfolio(&[4, 5]);
        assert!(portfolio.project(ProjectId(4)).is_some());
        assert!(portfolio.project(ProjectId(6)).is_none());
    }

    #[test]
    fn test_accent_defaults_to_emerald() {
        let portfolio = synthetic_portfolio(&[1]);
        assert_eq!(portfolio.projects()[0].accent, Accent::Emerald);
        assert_eq!(Accent::Orange.glow(), "bg-orange-500/30");
    }
}
