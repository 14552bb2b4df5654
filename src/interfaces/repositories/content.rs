use async_trait::async_trait;

use crate::entities::experience::Experience;
use crate::entities::site_config::SiteConfig;
use crate::entities::skill::{SkillCategory, SkillCategoryKey, SkillsMap};
use crate::errors::AppError;

/// Storage interface shared by the file-backed and embedded deployments.
/// Reads behave identically in both; writes return
/// `AppError::Unsupported` wherever the deployment cannot persist at
/// request time.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// All experiences, sorted ascending by `order`.
    async fn list_experiences(&self) -> Result<Vec<Experience>, AppError>;

    /// Single experience by slug.
    async fn get_experience(&self, slug: &str) -> Result<Experience, AppError>;

    /// Creates or replaces the record addressed by `slug`.
    async fn save_experience(&self, slug: &str, experience: &Experience) -> Result<(), AppError>;

    /// Removes the record; unknown slugs are a typed not-found.
    async fn delete_experience(&self, slug: &str) -> Result<(), AppError>;

    /// Always exactly the three fixed keys; missing categories come back as
    /// empty placeholders.
    async fn list_skills(&self) -> Result<SkillsMap, AppError>;

    async fn get_skill_category(&self, key: SkillCategoryKey) -> Result<SkillCategory, AppError>;

    /// Whole-record replace of one category.
    async fn save_skill_category(
        &self,
        key: SkillCategoryKey,
        category: &SkillCategory,
    ) -> Result<(), AppError>;

    /// Stored configuration or the built-in default; never empty.
    async fn get_site_config(&self) -> Result<SiteConfig, AppError>;

    async fn save_site_config(&self, config: &SiteConfig) -> Result<(), AppError>;

    /// Human-readable storage mode, reported by the health endpoint.
    fn mode(&self) -> &'static str;
}
