use anyhow::{bail, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display, str::FromStr};

const CATALOG: &str = include_str!("./messages.yaml");

type Catalog = HashMap<Language, HashMap<MessageKind, String>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Pt, Language::En, Language::Es];
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Es => "es",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt" => Ok(Language::Pt),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => bail!("unsupported language: {}", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Title,
    Intro,
    MilestoneMissing,
    AssigneesMissing,
    LabelsMissing,
    Importance,
    MilestoneImportance,
    AssigneesImportance,
    LabelsImportance,
    HowToResolve,
    Step1,
    Step2,
    Step3,
    Footer,
}

impl MessageKind {
    pub const ALL: [MessageKind; 14] = [
        MessageKind::Title,
        MessageKind::Intro,
        MessageKind::MilestoneMissing,
        MessageKind::AssigneesMissing,
        MessageKind::LabelsMissing,
        MessageKind::Importance,
        MessageKind::MilestoneImportance,
        MessageKind::AssigneesImportance,
        MessageKind::LabelsImportance,
        MessageKind::HowToResolve,
        MessageKind::Step1,
        MessageKind::Step2,
        MessageKind::Step3,
        MessageKind::Footer,
    ];
}

/// The message set of a single language, complete for every [`MessageKind`]
#[derive(Debug, Clone)]
pub struct Messages {
    language: Language,
    texts: HashMap<MessageKind, String>,
}

impl Messages {
    pub fn load(language: Language) -> Result<Messages> {
        Self::from_catalog(CATALOG, language)
    }

    fn from_catalog(source: &str, language: Language) -> Result<Messages> {
        let mut catalog = serde_yaml::from_str::<Catalog>(source)?;
        validate(&catalog)?;

        let texts = catalog.remove(&language).unwrap_or_default();

        Ok(Messages { language, texts })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn get(&self, kind: MessageKind) -> &str {
        self.texts.get(&kind).map(String::as_str).unwrap_or_default()
    }

    pub fn texts(&self) -> &HashMap<MessageKind, String> {
        &self.texts
    }
}

/// Every language must carry a non-blank text for every message kind
fn validate(catalog: &Catalog) -> Result<()> {
    let gaps = Language::ALL
        .iter()
        .flat_map(|language| {
            let texts = catalog.get(language);
            MessageKind::ALL.iter().filter_map(move |kind| {
                let present = texts
                    .and_then(|t| t.get(kind))
                    .is_some_and(|text| !text.trim().is_empty());
                (!present).then(|| format!("{}.{:?}", language, kind))
            })
        })
        .collect_vec();

    if !gaps.is_empty() {
        bail!("message catalog is incomplete: {}", gaps.join(", "));
    }

    Ok(())
}
