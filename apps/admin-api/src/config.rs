//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use uuid::Uuid;

use pressroom_core::domain::Tag;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub seed_tags: Vec<Tag>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./uploads")),
            seed_tags: Self::parse_seed_tags(env::var("SEED_TAGS").ok().as_deref()),
        }
    }

    /// Parse the tags seeded into the tag repository at startup.
    /// Format: SEED_TAGS=<name>[,<name>...]; an entry may pin its id with <uuid>:<name>.
    /// Example: SEED_TAGS=rust,web,b7e23ec2-9054-4c0f-8f3e-1f7a2a3c4d5e:tooling
    fn parse_seed_tags(raw: Option<&str>) -> Vec<Tag> {
        let Some(raw) = raw else {
            return Vec::new();
        };

        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once(':') {
                Some((id, name)) => match Uuid::parse_str(id.trim()) {
                    Ok(id) => Tag {
                        id,
                        name: name.trim().to_string(),
                    },
                    Err(_) => Tag::new(entry),
                },
                None => Tag::new(entry),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_names() {
        let tags = AppConfig::parse_seed_tags(Some("rust, web ,"));
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "rust");
        assert_eq!(tags[1].name, "web");
    }

    #[test]
    fn parses_pinned_ids() {
        let id = Uuid::new_v4();
        let tags = AppConfig::parse_seed_tags(Some(&format!("{id}:tooling")));
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].id, id);
        assert_eq!(tags[0].name, "tooling");
    }

    #[test]
    fn no_env_means_no_tags() {
        assert!(AppConfig::parse_seed_tags(None).is_empty());
    }
}
