use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::constants::READ_ONLY_GUIDANCE;
use crate::entities::experience::Experience;
use crate::entities::site_config::SiteConfig;
use crate::entities::skill::{Skill, SkillCategory, SkillCategoryKey, SkillsMap};
use crate::errors::AppError;
use crate::repositories::content::ContentRepository;

/// Read-only repository for the edge deployment: the content set is compiled
/// into the binary and every write reports a distinct unsupported outcome
/// pointing at the redeploy workflow.
pub struct EmbeddedContentRepo;

struct Snapshot {
    experiences: Vec<Experience>,
    skills: SkillsMap,
    config: SiteConfig,
}

static SNAPSHOT: Lazy<Snapshot> = Lazy::new(|| Snapshot {
    experiences: vec![
        experience(
            1,
            "2024 - Present",
            "Senior Frontend Developer",
            "Tech Company",
            "Leading the frontend architecture for a modern SaaS platform. Building scalable \
             component libraries and implementing complex animations and interactions.",
            &["React", "TypeScript", "Next.js", "Framer Motion"],
            "01-senior-developer",
        ),
        experience(
            2,
            "2022 - 2024",
            "Full Stack Developer",
            "Startup Inc",
            "Developed and maintained multiple web applications from concept to deployment. \
             Collaborated with design teams to create pixel-perfect implementations.",
            &["Vue.js", "Node.js", "PostgreSQL", "AWS"],
            "02-fullstack-developer",
        ),
        experience(
            3,
            "2020 - 2022",
            "Junior Developer",
            "Agency Name",
            "Started my professional journey building websites for various clients. Learned \
             the fundamentals of web development and client communication.",
            &["JavaScript", "HTML/CSS", "WordPress", "PHP"],
            "03-junior-developer",
        ),
        experience(
            4,
            "2019",
            "Freelance Developer",
            "Self-Employed",
            "Took on freelance projects while completing my studies. Built small business \
             websites and learned to manage client relationships.",
            &["React", "Firebase", "Figma"],
            "04-freelance-developer",
        ),
    ],
    skills: SkillsMap {
        frontend: category(
            SkillCategoryKey::Frontend,
            "Frontend Development",
            &[
                ("React / Next.js", 95),
                ("TypeScript", 90),
                ("Tailwind CSS", 92),
                ("Framer Motion", 85),
            ],
        ),
        backend: category(
            SkillCategoryKey::Backend,
            "Backend Development",
            &[
                ("Node.js", 85),
                ("Python", 75),
                ("PostgreSQL", 80),
                ("REST APIs", 88),
            ],
        ),
        tools: category(
            SkillCategoryKey::Tools,
            "Tools & Design",
            &[
                ("Git / GitHub", 90),
                ("Figma", 82),
                ("Docker", 70),
                ("CI/CD", 75),
            ],
        ),
    },
    config: SiteConfig::default(),
});

fn experience(
    order: u32,
    year: &str,
    title: &str,
    company: &str,
    description: &str,
    technologies: &[&str],
    slug: &str,
) -> Experience {
    Experience {
        order,
        year: year.into(),
        title: title.into(),
        company: company.into(),
        description: description.into(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        slug: slug.into(),
    }
}

fn category(key: SkillCategoryKey, title: &str, skills: &[(&str, u8)]) -> SkillCategory {
    SkillCategory {
        category: key.display_name().into(),
        title: title.into(),
        order: key.canonical_order(),
        skills: skills
            .iter()
            .map(|(name, level)| Skill {
                name: name.to_string(),
                level: *level,
                icon: None,
            })
            .collect(),
        slug: key.to_string(),
    }
}

fn unsupported() -> AppError {
    AppError::Unsupported(READ_ONLY_GUIDANCE.into())
}

#[async_trait]
impl ContentRepository for EmbeddedContentRepo {
    async fn list_experiences(&self) -> Result<Vec<Experience>, AppError> {
        let mut experiences = SNAPSHOT.experiences.clone();
        experiences.sort_by_key(|e| e.order);
        Ok(experiences)
    }

    async fn get_experience(&self, slug: &str) -> Result<Experience, AppError> {
        SNAPSHOT
            .experiences
            .iter()
            .find(|e| e.slug == slug)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Experience '{slug}'")))
    }

    async fn save_experience(&self, _slug: &str, _experience: &Experience) -> Result<(), AppError> {
        Err(unsupported())
    }

    async fn delete_experience(&self, _slug: &str) -> Result<(), AppError> {
        Err(unsupported())
    }

    async fn list_skills(&self) -> Result<SkillsMap, AppError> {
        Ok(SNAPSHOT.skills.clone())
    }

    async fn get_skill_category(&self, key: SkillCategoryKey) -> Result<SkillCategory, AppError> {
        let skills = &SNAPSHOT.skills;
        let category = match key {
            SkillCategoryKey::Frontend => &skills.frontend,
            SkillCategoryKey::Backend => &skills.backend,
            SkillCategoryKey::Tools => &skills.tools,
        };
        Ok(category.clone())
    }

    async fn save_skill_category(
        &self,
        _key: SkillCategoryKey,
        _category: &SkillCategory,
    ) -> Result<(), AppError> {
        Err(unsupported())
    }

    async fn get_site_config(&self) -> Result<SiteConfig, AppError> {
        Ok(SNAPSHOT.config.clone())
    }

    async fn save_site_config(&self, _config: &SiteConfig) -> Result<(), AppError> {
        Err(unsupported())
    }

    fn mode(&self) -> &'static str {
        "embedded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn snapshot_lists_sorted_experiences() {
        let repo = EmbeddedContentRepo;
        let experiences = repo.list_experiences().await.unwrap();
        assert_eq!(experiences.len(), 4);
        assert!(experiences.windows(2).all(|w| w[0].order <= w[1].order));
    }

    #[tokio::test]
    async fn lookup_by_slug_works() {
        let repo = EmbeddedContentRepo;
        let found = repo.get_experience("03-junior-developer").await.unwrap();
        assert_eq!(found.title, "Junior Developer");

        let missing = repo.get_experience("99-nope").await.unwrap_err();
        assert!(matches!(missing, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn every_write_is_unsupported() {
        let repo = EmbeddedContentRepo;
        let experience = SNAPSHOT.experiences[0].clone();

        let save = repo.save_experience(&experience.slug, &experience).await;
        assert!(matches!(save, Err(AppError::Unsupported(_))));

        let delete = repo.delete_experience(&experience.slug).await;
        assert!(matches!(delete, Err(AppError::Unsupported(_))));

        let config = repo.get_site_config().await.unwrap();
        let save_config = repo.save_site_config(&config).await;
        assert!(matches!(save_config, Err(AppError::Unsupported(_))));
    }

    #[tokio::test]
    async fn skills_snapshot_has_the_three_keys_filled() {
        let repo = EmbeddedContentRepo;
        let skills = repo.list_skills().await.unwrap();
        assert_eq!(skills.frontend.skills.len(), 4);
        assert_eq!(skills.backend.slug, "backend");
        assert_eq!(skills.tools.order, 3);
    }
}
