use serde::{Deserialize, Serialize};
use validator::Validate;

/// One entry of the experience timeline. `order` drives the ascending sort
/// on the public listing; it is not required to be contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub order: u32,
    pub year: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub slug: String,
}

/// Payload for `POST /experiences`. The slug and order are assigned by the
/// handler, never by the client.
#[derive(Debug, Deserialize, Validate)]
pub struct NewExperience {
    #[validate(length(min = 1, message = "Year is required"))]
    pub year: String,

    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
}

impl NewExperience {
    pub fn into_experience(self, order: u32, slug: String) -> Experience {
        Experience {
            order,
            year: self.year,
            title: self.title,
            company: self.company,
            description: self.description.unwrap_or_default(),
            technologies: self.technologies.unwrap_or_default(),
            slug,
        }
    }
}

/// Payload for `PUT /experiences/{slug}`. Absent fields keep the stored
/// value.
#[derive(Debug, Default, Deserialize)]
pub struct ExperienceUpdate {
    pub order: Option<u32>,
    pub year: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
}

impl Experience {
    /// Merges provided fields over the stored record. The slug is the
    /// record's identity and never changes here.
    pub fn merged(&self, update: ExperienceUpdate) -> Experience {
        Experience {
            order: update.order.unwrap_or(self.order),
            year: update.year.unwrap_or_else(|| self.year.clone()),
            title: update.title.unwrap_or_else(|| self.title.clone()),
            company: update.company.unwrap_or_else(|| self.company.clone()),
            description: update.description.unwrap_or_else(|| self.description.clone()),
            technologies: update
                .technologies
                .unwrap_or_else(|| self.technologies.clone()),
            slug: self.slug.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Experience {
        Experience {
            order: 3,
            year: "2020 - 2022".into(),
            title: "Junior Developer".into(),
            company: "Agency Name".into(),
            description: "Built client websites.".into(),
            technologies: vec!["JavaScript".into(), "PHP".into()],
            slug: "03-junior-developer".into(),
        }
    }

    #[test]
    fn merged_keeps_unset_fields_and_slug() {
        let update = ExperienceUpdate {
            company: Some("New Agency".into()),
            ..Default::default()
        };
        let merged = sample().merged(update);
        assert_eq!(merged.company, "New Agency");
        assert_eq!(merged.title, "Junior Developer");
        assert_eq!(merged.order, 3);
        assert_eq!(merged.slug, "03-junior-developer");
    }

    #[test]
    fn merged_replaces_every_provided_field() {
        let update = ExperienceUpdate {
            order: Some(7),
            year: Some("2023".into()),
            title: Some("Engineer".into()),
            company: Some("Acme".into()),
            description: Some("Other work.".into()),
            technologies: Some(vec!["Rust".into()]),
        };
        let merged = sample().merged(update);
        assert_eq!(merged.order, 7);
        assert_eq!(merged.technologies, vec!["Rust".to_string()]);
        assert_eq!(merged.slug, "03-junior-developer");
    }

    #[test]
    fn new_experience_defaults_optional_fields() {
        let new = NewExperience {
            year: "2024".into(),
            title: "Dev".into(),
            company: "Co".into(),
            description: None,
            technologies: None,
        };
        let exp = new.into_experience(1, "01-dev".into());
        assert_eq!(exp.description, "");
        assert!(exp.technologies.is_empty());
    }

    #[test]
    fn missing_required_fields_fail_validation() {
        let new = NewExperience {
            year: "".into(),
            title: "Dev".into(),
            company: "".into(),
            description: None,
            technologies: None,
        };
        let errors = new.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("year"));
        assert!(errors.field_errors().contains_key("company"));
    }
}
