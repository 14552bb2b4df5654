use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::SKILL_CATEGORY_KEYS;
use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One of the three fixed skill groups. `slug` always equals the category
/// key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub title: String,
    pub order: u32,
    pub skills: Vec<Skill>,
    pub slug: String,
}

impl SkillCategory {
    /// Empty placeholder used when a category has no backing record. The
    /// three-key response shape must hold regardless of what is stored.
    pub fn placeholder(key: SkillCategoryKey) -> Self {
        SkillCategory {
            category: key.display_name().to_string(),
            title: key.display_name().to_string(),
            order: key.canonical_order(),
            skills: Vec::new(),
            slug: key.to_string(),
        }
    }

    /// Normalizes a record before it is persisted: the slug is pinned to the
    /// key and skill levels are clamped into 0..=100.
    pub fn normalized(mut self, key: SkillCategoryKey) -> Self {
        self.slug = key.to_string();
        for skill in &mut self.skills {
            skill.level = skill.level.min(100);
        }
        self
    }
}

/// Closed set of category keys. Anything outside it is a validation error,
/// not a not-found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategoryKey {
    Frontend,
    Backend,
    Tools,
}

impl SkillCategoryKey {
    pub const ALL: [SkillCategoryKey; 3] = [
        SkillCategoryKey::Frontend,
        SkillCategoryKey::Backend,
        SkillCategoryKey::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategoryKey::Frontend => "frontend",
            SkillCategoryKey::Backend => "backend",
            SkillCategoryKey::Tools => "tools",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SkillCategoryKey::Frontend => "Frontend",
            SkillCategoryKey::Backend => "Backend",
            SkillCategoryKey::Tools => "Tools",
        }
    }

    pub fn canonical_order(&self) -> u32 {
        match self {
            SkillCategoryKey::Frontend => 1,
            SkillCategoryKey::Backend => 2,
            SkillCategoryKey::Tools => 3,
        }
    }
}

impl fmt::Display for SkillCategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategoryKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(SkillCategoryKey::Frontend),
            "backend" => Ok(SkillCategoryKey::Backend),
            "tools" => Ok(SkillCategoryKey::Tools),
            other => Err(AppError::invalid(
                "category",
                &format!(
                    "Invalid category '{}'. Must be one of: {}",
                    other,
                    SKILL_CATEGORY_KEYS.join(", ")
                ),
            )),
        }
    }
}

/// The fixed three-key map returned by `GET /skills`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsMap {
    pub frontend: SkillCategory,
    pub backend: SkillCategory,
    pub tools: SkillCategory,
}

/// Category payload accepted by `PUT /skills`. Missing fields fall back to
/// key-derived defaults, mirroring the admin editor's loose payloads.
#[derive(Debug, Default, Deserialize)]
pub struct SkillCategoryInput {
    pub category: Option<String>,
    pub title: Option<String>,
    pub order: Option<u32>,
    pub skills: Option<Vec<Skill>>,
}

impl SkillCategoryInput {
    pub fn into_category(self, key: SkillCategoryKey) -> SkillCategory {
        SkillCategory {
            category: self.category.unwrap_or_else(|| key.display_name().to_string()),
            title: self.title.unwrap_or_else(|| key.display_name().to_string()),
            order: self.order.unwrap_or_else(|| key.canonical_order()),
            skills: self.skills.unwrap_or_default(),
            slug: key.to_string(),
        }
        .normalized(key)
    }
}

/// Partial skill update applied at one index by `PATCH /skills`.
#[derive(Debug, Default, Deserialize)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<u8>,
    pub icon: Option<String>,
}

impl Skill {
    pub fn merged(&self, patch: SkillPatch) -> Skill {
        Skill {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            level: patch.level.unwrap_or(self.level).min(100),
            icon: patch.icon.or_else(|| self.icon.clone()),
        }
    }
}
