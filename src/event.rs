use crate::github::response::PullRequest;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const PUSH_EVENT: &str = "push";

/// The part of the webhook payload the checker reads
#[derive(Debug, Default, Deserialize)]
struct Payload {
    pull_request: Option<PullRequest>,
    /// Head commit of a push, used when `GITHUB_SHA` is unavailable
    after: Option<String>,
}

#[derive(Debug, Clone)]
pub enum TriggerEvent {
    PullRequest(PullRequest),
    Push { sha: String },
    Other { name: String },
}

impl TriggerEvent {
    pub async fn load(event_name: &str, sha: &str, path: Option<&Path>) -> Result<TriggerEvent> {
        let payload = match path {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Cannot read event payload {}", path.display()))?,
            None => String::new(),
        };

        Self::from_payload(event_name, sha, &payload)
    }

    /// Any payload carrying a pull request is checked directly, whatever the
    /// event name, so `pull_request_target` and review events work too.
    pub fn from_payload(event_name: &str, sha: &str, payload: &str) -> Result<TriggerEvent> {
        let payload = if payload.trim().is_empty() {
            Payload::default()
        } else {
            serde_json::from_str::<Payload>(payload).context("Cannot parse event payload")?
        };

        if let Some(pr) = payload.pull_request {
            return Ok(TriggerEvent::PullRequest(pr));
        }

        if event_name == PUSH_EVENT {
            let sha = if sha.is_empty() {
                payload.after.unwrap_or_default()
            } else {
                sha.to_owned()
            };

            return Ok(TriggerEvent::Push { sha });
        }

        Ok(TriggerEvent::Other {
            name: event_name.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    #[test]
    fn should_take_the_embedded_pull_request() -> Result<()> {
        let event = TriggerEvent::from_payload(
            "pull_request",
            "abc",
            r#"{ "action": "opened", "pull_request": { "number": 12, "labels": [] } }"#,
        )?;

        match event {
            TriggerEvent::PullRequest(pr) => assert_eq!(pr.number, 12),
            other => panic!("unexpected event {:?}", other),
        }

        Ok(())
    }

    #[test]
    fn should_classify_a_push_with_the_runner_sha() -> Result<()> {
        let event = TriggerEvent::from_payload("push", "abc", r#"{ "after": "def" }"#)?;

        assert!(matches!(event, TriggerEvent::Push { sha } if sha == "abc"));

        Ok(())
    }

    #[test]
    fn should_fall_back_to_the_payload_sha() -> Result<()> {
        let event = TriggerEvent::from_payload("push", "", r#"{ "after": "def" }"#)?;

        assert!(matches!(event, TriggerEvent::Push { sha } if sha == "def"));

        Ok(())
    }

    #[test]
    fn should_keep_other_events_without_a_pull_request() -> Result<()> {
        let event = TriggerEvent::from_payload("workflow_dispatch", "abc", "")?;

        assert!(matches!(event, TriggerEvent::Other { name } if name == "workflow_dispatch"));

        Ok(())
    }

    #[test]
    fn should_reject_a_malformed_payload() {
        assert!(TriggerEvent::from_payload("push", "abc", "{ nope").is_err());
    }

    #[tokio::test]
    async fn should_load_the_payload_from_disk() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("event")?;
        let path = dir.path().join("event.json");
        fs::write(&path, r#"{ "pull_request": { "number": 3 } }"#)?;

        let event = TriggerEvent::load("pull_request_target", "abc", Some(&path)).await?;

        assert!(matches!(event, TriggerEvent::PullRequest(pr) if pr.number == 3));

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_fail_when_the_payload_file_is_missing() {
        let path = Path::new("/nonexistent/event.json");

        let result = TriggerEvent::load("push", "abc", Some(path)).await;

        assert!(result.is_err());
    }
}
