use serde::{Deserialize, Serialize};

/// Singleton site configuration. Field names stay camelCase on the wire so
/// the existing frontend keeps parsing it unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub tagline: String,
    pub headline: String,
    pub subtitle: String,
    pub about_title: String,
    #[serde(default)]
    pub about_text: Vec<String>,
    pub location: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon_type: IconType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconType {
    Github,
    Linkedin,
    Twitter,
    Email,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            personal_info: PersonalInfo {
                name: "Your Name".into(),
                tagline: "Creative Developer".into(),
                headline: "Building digital experiences".into(),
                subtitle: "Design-minded developer crafting interfaces with motion and care.".into(),
                about_title: "About me".into(),
                about_text: vec![
                    "I build web applications end to end, with a soft spot for the frontend.".into(),
                    "Away from the keyboard I collect coffee gear and hiking trails.".into(),
                ],
                location: "Remote".into(),
                available: true,
            },
            projects: vec![Project {
                title: "Portfolio".into(),
                category: "Web".into(),
                description: "This site.".into(),
                link: "https://example.com".into(),
            }],
            social_links: vec![
                SocialLink {
                    label: "GitHub".into(),
                    href: "https://github.com".into(),
                    icon_type: IconType::Github,
                },
                SocialLink {
                    label: "Email".into(),
                    href: "mailto:hello@example.com".into(),
                    icon_type: IconType::Email,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let json = serde_json::to_value(SiteConfig::default()).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert!(json["personalInfo"].get("aboutText").is_some());
        assert_eq!(json["socialLinks"][0]["iconType"], "github");
    }

    #[test]
    fn default_is_never_empty() {
        let config = SiteConfig::default();
        assert!(!config.personal_info.name.is_empty());
        assert!(!config.social_links.is_empty());
    }
}
