//! Domain entities

mod catalog;
mod draft;

pub use catalog::{ChoiceGroup, ClassDetail, EntityKind, NamedRef, RaceDetail};
pub use draft::{Ability, AbilityScores, CharacterDraft, ProficiencyMode};
