use crate::{github::github_client::DEFAULT_API_URL, messages::Language};
use anyhow::{bail, Context, Result};
use std::{env, path::PathBuf};

const GITHUB_TOKEN_INPUT: &str = "github-token";
const CUSTOM_TOKEN_INPUT: &str = "custom-token";
const LANGUAGE_INPUT: &str = "language";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Parses the `owner/name` form used by `GITHUB_REPOSITORY`
    pub fn parse(full_name: &str) -> Result<Repository> {
        match full_name.trim().split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Repository {
                    owner: owner.to_owned(),
                    name: name.to_owned(),
                })
            }
            _ => bail!("invalid repository name: {:?}", full_name),
        }
    }
}

/// Everything a run needs, resolved once from the action inputs and the
/// runner environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for listing pull requests and commits
    pub token: String,
    /// Credential for writing the comment, `token` unless `custom-token` is set
    pub comment_token: String,
    pub language: Language,
    pub repository: Repository,
    pub event_name: String,
    pub event_path: Option<PathBuf>,
    pub sha: String,
    pub api_url: String,
}

impl Config {
    pub fn load() -> Result<Config> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let input = |name: &str| {
            var(&format!("INPUT_{}", name.replace(' ', "_").to_uppercase()))
                .map(|value| value.trim().to_owned())
        };

        let token = input(GITHUB_TOKEN_INPUT)
            .or_else(|| var("GITHUB_TOKEN"))
            .with_context(|| format!("Input required and not supplied: {}", GITHUB_TOKEN_INPUT))?;

        let comment_token = input(CUSTOM_TOKEN_INPUT).unwrap_or_else(|| token.clone());

        let language = match input(LANGUAGE_INPUT) {
            Some(value) => value.parse::<Language>().unwrap_or_else(|err| {
                log::warn!("{}, falling back to {}", err, Language::default());
                Language::default()
            }),
            None => Language::default(),
        };

        let repository = var("GITHUB_REPOSITORY")
            .context("GITHUB_REPOSITORY is not set")
            .and_then(|full_name| Repository::parse(&full_name))?;

        Ok(Config {
            token,
            comment_token,
            language,
            repository,
            event_name: var("GITHUB_EVENT_NAME").unwrap_or_default(),
            event_path: var("GITHUB_EVENT_PATH").map(PathBuf::from),
            sha: var("GITHUB_SHA").unwrap_or_default(),
            api_url: var("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
        })
    }

    pub fn has_custom_comment_token(&self) -> bool {
        self.comment_token != self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn should_load_from_action_inputs() -> Result<()> {
        let config = load(&[
            ("INPUT_GITHUB-TOKEN", " reader "),
            ("INPUT_LANGUAGE", "en"),
            ("GITHUB_REPOSITORY", "octo/widgets"),
            ("GITHUB_EVENT_NAME", "push"),
            ("GITHUB_EVENT_PATH", "/tmp/event.json"),
            ("GITHUB_SHA", "abc123"),
        ])?;

        assert_eq!(config.token, "reader");
        assert_eq!(config.comment_token, "reader");
        assert!(!config.has_custom_comment_token());
        assert_eq!(config.language, Language::En);
        assert_eq!(
            config.repository,
            Repository {
                owner: "octo".to_owned(),
                name: "widgets".to_owned()
            }
        );
        assert_eq!(config.event_name, "push");
        assert_eq!(config.event_path, Some(PathBuf::from("/tmp/event.json")));
        assert_eq!(config.sha, "abc123");
        assert_eq!(config.api_url, DEFAULT_API_URL);

        Ok(())
    }

    #[test]
    fn should_use_the_custom_token_for_comments() -> Result<()> {
        let config = load(&[
            ("INPUT_GITHUB-TOKEN", "reader"),
            ("INPUT_CUSTOM-TOKEN", "writer"),
            ("GITHUB_REPOSITORY", "octo/widgets"),
        ])?;

        assert_eq!(config.token, "reader");
        assert_eq!(config.comment_token, "writer");
        assert!(config.has_custom_comment_token());

        Ok(())
    }

    #[test]
    fn should_treat_blank_inputs_as_unset() -> Result<()> {
        let config = load(&[
            ("INPUT_GITHUB-TOKEN", "reader"),
            ("INPUT_CUSTOM-TOKEN", "  "),
            ("INPUT_LANGUAGE", ""),
            ("GITHUB_REPOSITORY", "octo/widgets"),
        ])?;

        assert_eq!(config.comment_token, "reader");
        assert_eq!(config.language, Language::Pt);

        Ok(())
    }

    #[test]
    fn should_fall_back_to_the_default_language() -> Result<()> {
        let config = load(&[
            ("INPUT_GITHUB-TOKEN", "reader"),
            ("INPUT_LANGUAGE", "klingon"),
            ("GITHUB_REPOSITORY", "octo/widgets"),
        ])?;

        assert_eq!(config.language, Language::Pt);

        Ok(())
    }

    #[test]
    fn should_fall_back_to_the_github_token_variable() -> Result<()> {
        let config = load(&[
            ("GITHUB_TOKEN", "ambient"),
            ("GITHUB_REPOSITORY", "octo/widgets"),
            ("GITHUB_API_URL", "https://ghe.example.test/api/v3"),
        ])?;

        assert_eq!(config.token, "ambient");
        assert_eq!(config.api_url, "https://ghe.example.test/api/v3");

        Ok(())
    }

    #[test]
    fn should_require_a_token() {
        let err = load(&[("GITHUB_REPOSITORY", "octo/widgets")]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Input required and not supplied: github-token"
        );
    }

    #[test]
    fn should_require_a_valid_repository() {
        assert!(load(&[("INPUT_GITHUB-TOKEN", "reader")]).is_err());
        assert!(load(&[
            ("INPUT_GITHUB-TOKEN", "reader"),
            ("GITHUB_REPOSITORY", "no-slash")
        ])
        .is_err());
        assert!(Repository::parse("a/b/c").is_err());
        assert!(Repository::parse("/b").is_err());
    }
}
