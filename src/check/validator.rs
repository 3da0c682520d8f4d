use crate::{github::response::PullRequest, messages::MessageKind};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Milestone,
    Assignees,
    Labels,
}

impl MissingField {
    pub fn message_kind(&self) -> MessageKind {
        match self {
            MissingField::Milestone => MessageKind::MilestoneMissing,
            MissingField::Assignees => MessageKind::AssigneesMissing,
            MissingField::Labels => MessageKind::LabelsMissing,
        }
    }
}

impl Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            MissingField::Milestone => "milestone",
            MissingField::Assignees => "assignees",
            MissingField::Labels => "labels",
        };
        write!(f, "{}", tag)
    }
}

/// Lists the required fields the pull request lacks, always in
/// milestone, assignees, labels order.
pub fn validate(pr: &PullRequest) -> Vec<MissingField> {
    log::debug!(
        "PR #{} milestone: {:?}, assignees: {:?}, labels: {:?}",
        pr.number,
        pr.milestone.as_ref().map(|m| &m.title),
        pr.assignees
            .iter()
            .flatten()
            .map(|a| &a.login)
            .collect::<Vec<_>>(),
        pr.labels
            .iter()
            .flatten()
            .map(|l| &l.name)
            .collect::<Vec<_>>(),
    );

    [
        (MissingField::Milestone, pr.has_milestone()),
        (MissingField::Assignees, pr.has_assignees()),
        (MissingField::Labels, pr.has_labels()),
    ]
    .into_iter()
    .filter(|(_, present)| !present)
    .map(|(field, _)| {
        log::info!("{} not found", field);
        field
    })
    .collect()
}
