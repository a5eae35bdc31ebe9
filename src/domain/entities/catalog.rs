//! Catalog entities - race and class records as served by the catalog
//!
//! The upstream API leaves many fields out depending on the record, so every
//! descriptive field is optional and rendering checks presence instead of
//! assuming shape.

use std::fmt;

use serde::Deserialize;

/// The category of catalog entity being queried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Race,
    Class,
}

impl EntityKind {
    /// Capitalized label for headings and prompts
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Race => "Race",
            EntityKind::Class => "Class",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Race => write!(f, "race"),
            EntityKind::Class => write!(f, "class"),
        }
    }
}

/// A named reference inside a catalog record (saving throw, proficiency, subclass)
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: Option<String>,
}

impl NamedRef {
    pub fn name_or_unknown(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// Detail record for a race
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaceDetail {
    pub name: Option<String>,
    pub alignment: Option<String>,
    pub age: Option<String>,
    pub size: Option<String>,
    pub size_description: Option<String>,
    pub language_desc: Option<String>,
}

/// Detail record for a class
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassDetail {
    pub name: Option<String>,
    pub hit_die: Option<u32>,
    #[serde(default)]
    pub saving_throws: Vec<NamedRef>,
    #[serde(default)]
    pub proficiencies: Vec<NamedRef>,
    #[serde(default)]
    pub subclasses: Vec<NamedRef>,
    #[serde(default)]
    pub proficiency_choices: Vec<ChoiceGroup>,
}

/// One "choose N of M" proficiency requirement attached to a class
///
/// Deserialized from the upstream `{ choose, from: { options: [ { item:
/// { name } } ] } }` shape. Options without a plain item name (the API nests
/// sub-choices in some groups) are skipped rather than failing the record.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawChoiceGroup")]
pub struct ChoiceGroup {
    pub choose: usize,
    pub options: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawChoiceGroup {
    #[serde(default)]
    choose: usize,
    #[serde(default)]
    from: RawOptionSet,
}

#[derive(Debug, Default, Deserialize)]
struct RawOptionSet {
    #[serde(default)]
    options: Vec<RawOptionEntry>,
}

#[derive(Debug, Deserialize)]
struct RawOptionEntry {
    #[serde(default)]
    item: Option<NamedRef>,
}

impl From<RawChoiceGroup> for ChoiceGroup {
    fn from(raw: RawChoiceGroup) -> Self {
        let options = raw
            .from
            .options
            .into_iter()
            .filter_map(|entry| entry.item.and_then(|item| item.name))
            .collect();
        Self {
            choose: raw.choose,
            options,
        }
    }
}
