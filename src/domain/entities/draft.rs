//! Character draft - the state accumulated over one wizard session

use std::fmt;
use std::str::FromStr;

/// The five rolled ability scores, in their fixed roll-and-display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intellect,
    Wisdom,
}

impl Ability {
    /// Roll order, identical to summary display order
    pub const ALL: [Ability; 5] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intellect,
        Ability::Wisdom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Intellect => "Intellect",
            Ability::Wisdom => "Wisdom",
        }
    }

    fn slot(&self) -> usize {
        match self {
            Ability::Strength => 0,
            Ability::Dexterity => 1,
            Ability::Constitution => 2,
            Ability::Intellect => 3,
            Ability::Wisdom => 4,
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Scores start at 0 (unset) and are assigned exactly once by the roller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbilityScores {
    scores: [u8; 5],
}

impl AbilityScores {
    pub fn get(&self, ability: Ability) -> u8 {
        self.scores[ability.slot()]
    }

    pub fn set(&mut self, ability: Ability, score: u8) {
        self.scores[ability.slot()] = score;
    }

    /// Iterate scores in the fixed ability order
    pub fn iter(&self) -> impl Iterator<Item = (Ability, u8)> + '_ {
        Ability::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}

/// How proficiency selections accumulate across a class's choice groups
///
/// `Union` merges every group's picks into the summary. `Last` keeps only
/// the final group, the behavior of a wizard that reuses one "current
/// proficiencies" slot per group. `Union` is the default; `Last` exists for
/// sessions that want the single-slot behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProficiencyMode {
    #[default]
    Union,
    Last,
}

impl FromStr for ProficiencyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "union" => Ok(ProficiencyMode::Union),
            "last" => Ok(ProficiencyMode::Last),
            other => Err(format!("unknown proficiency mode '{other}', use: union, last")),
        }
    }
}

/// The accumulated result of one wizard session
#[derive(Debug, Clone)]
pub struct CharacterDraft {
    pub race: String,
    pub class: String,
    pub proficiencies: Vec<String>,
    pub abilities: AbilityScores,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ability_order_is_stable() {
        let names: Vec<&str> = Ability::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            vec!["Strength", "Dexterity", "Constitution", "Intellect", "Wisdom"]
        );
    }

    #[test]
    fn scores_default_to_unset() {
        let scores = AbilityScores::default();
        for (_, score) in scores.iter() {
            assert_eq!(score, 0);
        }
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut scores = AbilityScores::default();
        scores.set(Ability::Intellect, 14);
        assert_eq!(scores.get(Ability::Intellect), 14);
        assert_eq!(scores.get(Ability::Wisdom), 0);
    }

    #[test]
    fn proficiency_mode_parses() {
        assert_eq!("union".parse::<ProficiencyMode>(), Ok(ProficiencyMode::Union));
        assert_eq!("LAST".parse::<ProficiencyMode>(), Ok(ProficiencyMode::Last));
        assert!("both".parse::<ProficiencyMode>().is_err());
    }
}
