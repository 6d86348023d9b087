//! Portfolio owner's profile.
//!
//! One JSON document feeds both the rendered page and the downloadable CV,
//! so the two never drift apart.

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Profile bundled with the site.
const BUILTIN_PROFILE: &str = include_str!("../assets/profile.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Role line, also the typed hero subtitle.
    pub title: String,
    pub contact: ContactLinks,
    pub summary: String,
    #[serde(default)]
    pub education: Vec<TimelineEntry>,
    #[serde(default)]
    pub experience: Vec<TimelineEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    pub motto: String,
    pub copyright_year: u16,
}

/// Contact handles, stored without scheme as they appear on the CV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLinks {
    pub email: String,
    pub linkedin: String,
    pub github: String,
    /// Handle without the leading `@`.
    pub instagram: String,
}

impl ContactLinks {
    pub fn linkedin_url(&self) -> String {
        https(&self.linkedin)
    }

    pub fn github_url(&self) -> String {
        https(&self.github)
    }

    pub fn instagram_url(&self) -> String {
        format!("https://instagram.com/{}", self.instagram)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Education or experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
}

impl Project {
    pub fn url(&self) -> String {
        https(&self.link)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub date: String,
    pub name: String,
    pub issuer: String,
    pub description: String,
}

fn https(link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        link.to_string()
    } else {
        format!("https://{}", link)
    }
}

impl Profile {
    /// The profile bundled with the site.
    pub fn builtin() -> FolioResult<Self> {
        Self::from_json_str(BUILTIN_PROFILE)
    }

    pub fn from_json_str(json: &str) -> FolioResult<Self> {
        serde_json::from_str(json).map_err(FolioError::Profile)
    }

    /// Greeting logged for developers who open the console.
    pub fn developer_greeting(&self) -> String {
        format!(
            "🚀 Portfolio Website by {}\n\n\
             Halo Developer! 👋\n\n\
             Terima kasih sudah melihat source code website ini.\n\
             Jika kamu tertarik untuk berkolaborasi atau punya saran,\n\
             jangan ragu untuk menghubungi saya!\n\n\
             GitHub: {}\n\
             LinkedIn: {}\n\n\
             Happy Coding! 💻✨",
            self.name,
            self.contact.github_url(),
            self.contact.linkedin_url()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profile_parses() {
        let profile = Profile::builtin().unwrap();
        assert_eq!(profile.name, "Rakha Raihan Alfarizky");
        assert_eq!(profile.projects.len(), 3);
        assert_eq!(profile.skills.len(), 4);
        assert_eq!(profile.experience[1].place.as_deref(), Some("SMA Negeri 1 Katapang"));
    }

    #[test]
    fn links_get_a_scheme() {
        let profile = Profile::builtin().unwrap();
        assert_eq!(profile.contact.github_url(), "https://github.com/rrhka27");
        assert_eq!(profile.contact.instagram_url(), "https://instagram.com/rrahka_");
        assert_eq!(https("https://a.b"), "https://a.b");
    }

    #[test]
    fn greeting_mentions_links() {
        let greeting = Profile::builtin().unwrap().developer_greeting();
        assert!(greeting.contains("GitHub: https://github.com/rrhka27"));
    }

    #[test]
    fn malformed_profile_is_an_error() {
        let err = Profile::from_json_str("{\"name\": 1}").unwrap_err();
        assert!(matches!(err, FolioError::Profile(_)));
    }
}
