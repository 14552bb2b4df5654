use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use crate::entities::experience::Experience;
use crate::entities::site_config::SiteConfig;
use crate::entities::skill::{SkillCategory, SkillCategoryKey, SkillsMap};
use crate::errors::AppError;
use crate::repositories::content::ContentRepository;

/// Flat-file content store: one pretty-printed JSON document per record,
/// addressed by slug/key, plus the singleton `config.json`.
///
/// ```text
/// <root>/experiences/<slug>.json
/// <root>/skills/<frontend|backend|tools>.json
/// <root>/config.json
/// ```
///
/// Writes are whole-file replaces; the last writer wins. That is acceptable
/// for a single-operator admin tool and keeps every operation idempotent.
pub struct FsContentRepo {
    root: PathBuf,
}

impl FsContentRepo {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsContentRepo { root: root.into() }
    }

    fn experiences_dir(&self) -> PathBuf {
        self.root.join("experiences")
    }

    fn experience_path(&self, slug: &str) -> Result<PathBuf, AppError> {
        validate_slug(slug)?;
        Ok(self.experiences_dir().join(format!("{slug}.json")))
    }

    fn skill_path(&self, key: SkillCategoryKey) -> PathBuf {
        self.root.join("skills").join(format!("{key}.json"))
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.json")
    }

    async fn read_record<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, AppError> {
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn write_record<T: Serialize>(path: &Path, record: &T) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(record)?;
        fs::write(path, bytes).await?;
        Ok(())
    }
}

/// Slugs become file names; reject anything that could escape the content
/// directory. Unknown-but-safe slugs fall through to a plain not-found.
fn validate_slug(slug: &str) -> Result<(), AppError> {
    let safe = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if safe {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("Experience '{slug}'")))
    }
}

#[async_trait]
impl ContentRepository for FsContentRepo {
    async fn list_experiences(&self) -> Result<Vec<Experience>, AppError> {
        let dir = self.experiences_dir();
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            // An empty store is a valid store.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut experiences = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            // One malformed record must not take the whole listing down.
            match Self::read_record::<Experience>(&path).await {
                Ok(Some(experience)) => experiences.push(experience),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Skipping unreadable experience record {:?}: {}", path, e);
                }
            }
        }

        experiences.sort_by_key(|e| e.order);
        Ok(experiences)
    }

    async fn get_experience(&self, slug: &str) -> Result<Experience, AppError> {
        let path = self.experience_path(slug)?;
        Self::read_record(&path)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Experience '{slug}'")))
    }

    async fn save_experience(&self, slug: &str, experience: &Experience) -> Result<(), AppError> {
        let path = self.experience_path(slug)?;
        Self::write_record(&path, experience).await
    }

    async fn delete_experience(&self, slug: &str) -> Result<(), AppError> {
        let path = self.experience_path(slug)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(AppError::NotFound(format!("Experience '{slug}'")))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_skills(&self) -> Result<SkillsMap, AppError> {
        let mut categories = Vec::with_capacity(SkillCategoryKey::ALL.len());
        for key in SkillCategoryKey::ALL {
            let category = match Self::read_record(&self.skill_path(key)).await {
                Ok(Some(category)) => category,
                Ok(None) => SkillCategory::placeholder(key),
                Err(e) => {
                    tracing::warn!("Skipping unreadable skill category '{}': {}", key, e);
                    SkillCategory::placeholder(key)
                }
            };
            categories.push(category);
        }

        let mut iter = categories.into_iter();
        Ok(SkillsMap {
            frontend: iter.next().expect("three categories"),
            backend: iter.next().expect("three categories"),
            tools: iter.next().expect("three categories"),
        })
    }

    async fn get_skill_category(&self, key: SkillCategoryKey) -> Result<SkillCategory, AppError> {
        Self::read_record(&self.skill_path(key))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Skill category '{key}'")))
    }

    async fn save_skill_category(
        &self,
        key: SkillCategoryKey,
        category: &SkillCategory,
    ) -> Result<(), AppError> {
        Self::write_record(&self.skill_path(key), category).await
    }

    async fn get_site_config(&self) -> Result<SiteConfig, AppError> {
        Ok(Self::read_record(&self.config_path())
            .await?
            .unwrap_or_default())
    }

    async fn save_site_config(&self, config: &SiteConfig) -> Result<(), AppError> {
        Self::write_record(&self.config_path(), config).await
    }

    fn mode(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::skill::Skill;

    fn temp_repo() -> FsContentRepo {
        let dir = std::env::temp_dir().join(format!("portfolio-cms-test-{}", uuid::Uuid::new_v4()));
        FsContentRepo::new(dir)
    }

    fn sample_experience(order: u32, slug: &str) -> Experience {
        Experience {
            order,
            year: "2024".into(),
            title: "Developer".into(),
            company: "Acme".into(),
            description: "Work.".into(),
            technologies: vec!["Rust".into()],
            slug: slug.into(),
        }
    }

    #[tokio::test]
    async fn save_then_get_round_trips_every_field() {
        let repo = temp_repo();
        let experience = sample_experience(1, "01-developer");

        repo.save_experience("01-developer", &experience).await.unwrap();
        let found = repo.get_experience("01-developer").await.unwrap();
        assert_eq!(found, experience);
    }

    #[tokio::test]
    async fn listing_sorts_by_order_and_survives_a_bad_record() {
        let repo = temp_repo();
        repo.save_experience("02-second", &sample_experience(2, "02-second"))
            .await
            .unwrap();
        repo.save_experience("01-first", &sample_experience(1, "01-first"))
            .await
            .unwrap();

        // Corrupt file sitting next to the good ones.
        fs::write(repo.experiences_dir().join("zz-broken.json"), b"{nope")
            .await
            .unwrap();

        let listed = repo.list_experiences().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].slug, "01-first");
        assert_eq!(listed[1].slug, "02-second");
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let repo = temp_repo();
        assert!(repo.list_experiences().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_slug_is_not_found_and_leaves_others_alone() {
        let repo = temp_repo();
        repo.save_experience("01-kept", &sample_experience(1, "01-kept"))
            .await
            .unwrap();

        let err = repo.delete_experience("09-ghost").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(repo.get_experience("01-kept").await.is_ok());
    }

    #[tokio::test]
    async fn traversal_slugs_are_rejected() {
        let repo = temp_repo();
        let err = repo.get_experience("../config").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn skills_map_always_has_three_keys() {
        let repo = temp_repo();

        let empty = repo.list_skills().await.unwrap();
        assert_eq!(empty.frontend.slug, "frontend");
        assert_eq!(empty.backend.slug, "backend");
        assert_eq!(empty.tools.slug, "tools");
        assert!(empty.frontend.skills.is_empty());

        let category = SkillCategory {
            category: "Backend".into(),
            title: "Backend Development".into(),
            order: 2,
            skills: vec![Skill {
                name: "Rust".into(),
                level: 90,
                icon: None,
            }],
            slug: "backend".into(),
        };
        repo.save_skill_category(SkillCategoryKey::Backend, &category)
            .await
            .unwrap();

        let populated = repo.list_skills().await.unwrap();
        assert_eq!(populated.backend, category);
        assert!(populated.tools.skills.is_empty());
    }

    #[tokio::test]
    async fn site_config_defaults_until_saved() {
        let repo = temp_repo();
        assert_eq!(repo.get_site_config().await.unwrap(), SiteConfig::default());

        let mut config = SiteConfig::default();
        config.personal_info.name = "Ada".into();
        repo.save_site_config(&config).await.unwrap();
        assert_eq!(repo.get_site_config().await.unwrap(), config);
    }
}
