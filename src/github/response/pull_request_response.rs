use serde::Deserialize;

/// A pull request as returned by the REST API or embedded in an event payload.
///
/// `assignees` and `labels` can be `null` or omitted in trimmed payloads, so
/// both are kept optional and read through the `has_*` helpers.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub milestone: Option<Milestone>,
    #[serde(default)]
    pub assignees: Option<Vec<User>>,
    #[serde(default)]
    pub labels: Option<Vec<Label>>,
    #[serde(default)]
    pub head: Option<GitRef>,
}

impl PullRequest {
    pub fn has_milestone(&self) -> bool {
        self.milestone.is_some()
    }

    pub fn has_assignees(&self) -> bool {
        self.assignees.as_ref().is_some_and(|a| !a.is_empty())
    }

    pub fn has_labels(&self) -> bool {
        self.labels.as_ref().is_some_and(|l| !l.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Milestone {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitRef {
    pub sha: String,
    #[serde(rename = "ref", default)]
    pub name: String,
}
