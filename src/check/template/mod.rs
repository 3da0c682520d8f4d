use crate::{
    check::validator::MissingField,
    messages::{MessageKind, Messages},
};
use anyhow::Result;
use handlebars::{no_escape, Handlebars};
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;

pub const COMMENT_TEMPLATE: &str = "comment";

#[derive(Serialize)]
struct CommentData<'a> {
    #[serde(flatten)]
    messages: &'a HashMap<MessageKind, String>,
    missing_fields: String,
}

pub fn handlebars<'hb>() -> Result<Handlebars<'hb>> {
    let mut hb = Handlebars::new();

    let comment = include_str!("./comment.hbs");

    hb.register_template_string(COMMENT_TEMPLATE, comment)?;
    hb.register_escape_fn(no_escape);
    hb.set_strict_mode(true);

    Ok(hb)
}

pub fn render(messages: &Messages, missing: &[MissingField]) -> Result<String> {
    let data = CommentData {
        messages: messages.texts(),
        missing_fields: missing
            .iter()
            .map(|field| messages.get(field.message_kind()))
            .join("\n"),
    };

    let body = handlebars()?.render(COMMENT_TEMPLATE, &data)?;

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Language;

    #[test]
    fn should_render_every_missing_field() {
        let messages = Messages::load(Language::En).unwrap();

        let body = render(
            &messages,
            &[
                MissingField::Milestone,
                MissingField::Assignees,
                MissingField::Labels,
            ],
        )
        .unwrap();

        assert!(body.contains("## ⚠️ Incomplete Pull Request"));
        assert!(body.contains("🔹 **Milestone**\n👤 **Assignees**\n🏷️ **Labels**"));
        assert!(body.contains("1. Pick a milestone in the PR sidebar."));
        assert!(body.contains("_This check runs again every time the PR is updated._"));
    }

    #[test]
    fn should_only_list_the_missing_fields() {
        let messages = Messages::load(Language::Pt).unwrap();

        let body = render(&messages, &[MissingField::Assignees]).unwrap();

        assert!(body.contains(messages.get(MessageKind::AssigneesMissing)));
        assert!(!body.contains(messages.get(MessageKind::MilestoneMissing)));
        assert!(!body.contains(messages.get(MessageKind::LabelsMissing)));
    }

    #[test]
    fn should_not_html_escape_the_messages() {
        let messages = Messages::load(Language::Es).unwrap();

        let body = render(&messages, &[MissingField::Labels]).unwrap();

        assert!(body.contains("¿Por qué es importante?"));
        assert!(!body.contains("&"));
    }
}
