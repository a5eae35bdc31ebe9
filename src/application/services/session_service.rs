//! Session pipeline - race → class → proficiencies → abilities → summary
//!
//! The sequence is fixed with no way back. Catalog failures inside a `help`
//! lookup never abort a stage; a failed list or detail fetch at a stage root
//! surfaces to the caller.

use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use rand::Rng;
use tracing::info;

use crate::application::ports::outbound::{CatalogPort, Prompt};
use crate::application::services::{ability_service, allocation_service, choice_service};
use crate::domain::entities::{CharacterDraft, EntityKind, ProficiencyMode};
use crate::infrastructure::console;

/// Drives one character-creation session over the injected catalog and
/// prompt. Owns the draft for the lifetime of the run.
pub struct SessionRunner {
    catalog: Arc<dyn CatalogPort>,
    mode: ProficiencyMode,
}

impl SessionRunner {
    pub fn new(catalog: Arc<dyn CatalogPort>, mode: ProficiencyMode) -> Self {
        Self { catalog, mode }
    }

    /// Run the full pipeline and return the completed draft.
    pub async fn run<R: Rng + ?Sized>(
        &self,
        prompt: &mut dyn Prompt,
        rng: &mut R,
    ) -> Result<CharacterDraft> {
        let race = self.select_race(prompt, rng).await?;
        let class = self.select_class(prompt, rng).await?;
        let proficiencies = self.select_proficiencies(&class, prompt, rng).await?;

        console::section("ABILITY SCORES", "🎯");
        console::step(
            4,
            "Roll Your Ability Scores",
            "You'll roll 4d6, drop the lowest, and sum the rest for each ability.",
        );
        let abilities = ability_service::roll_ability_scores(prompt, rng);

        let draft = CharacterDraft {
            race,
            class,
            proficiencies,
            abilities,
        };

        console::section("CHARACTER SUMMARY", "🏰");
        console::summary(&draft);
        Ok(draft)
    }

    async fn select_race<R: Rng + ?Sized>(
        &self,
        prompt: &mut dyn Prompt,
        rng: &mut R,
    ) -> Result<String> {
        console::section("RACE SELECTION", "🎲");
        console::step(
            1,
            "Choose Your Character's Race",
            "Your race affects many aspects of your character - abilities, traits, and roleplay opportunities!",
        );

        let races = self
            .catalog
            .list(EntityKind::Race)
            .await
            .context("fetching the race list")?;
        ensure!(!races.is_empty(), "the catalog returned no races");

        println!("\nAvailable Races:");
        console::numbered_list(&races);

        let race =
            choice_service::resolve(EntityKind::Race, &races, self.catalog.as_ref(), prompt, rng)
                .await;
        info!(%race, "race selected");
        Ok(race)
    }

    async fn select_class<R: Rng + ?Sized>(
        &self,
        prompt: &mut dyn Prompt,
        rng: &mut R,
    ) -> Result<String> {
        console::section("CLASS SELECTION", "🧭");
        console::step(
            2,
            "Choose Your Character's Class",
            "Your class defines your vocation, combat style, and special talents.",
        );

        let classes = self
            .catalog
            .list(EntityKind::Class)
            .await
            .context("fetching the class list")?;
        ensure!(!classes.is_empty(), "the catalog returned no classes");

        println!("\nAvailable Classes:");
        console::numbered_list(&classes);

        let class =
            choice_service::resolve(EntityKind::Class, &classes, self.catalog.as_ref(), prompt, rng)
                .await;
        info!(%class, "class selected");
        Ok(class)
    }

    /// Run one allocation per choice group declared by the class. Selections
    /// accumulate per the configured mode: union of all groups, or only the
    /// last group.
    async fn select_proficiencies<R: Rng + ?Sized>(
        &self,
        class: &str,
        prompt: &mut dyn Prompt,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        console::section("PROFICIENCIES", "📜");
        console::step(
            3,
            "Choose Your Proficiencies",
            "Proficiencies represent skills your character excels at. They grant bonuses to checks, saves, or attacks where applicable.",
        );

        let detail = self
            .catalog
            .class_detail(class)
            .await
            .with_context(|| format!("fetching class detail for '{class}'"))?;

        let mut accumulated: Vec<String> = Vec::new();
        for group in &detail.proficiency_choices {
            println!(
                "\nYou may choose {} from the following options:",
                group.choose
            );
            console::pool_list(&group.options);

            let picked =
                allocation_service::allocate(group.choose, group.options.clone(), prompt, rng);
            console::selections(&picked);

            match self.mode {
                ProficiencyMode::Union => accumulated.extend(picked),
                ProficiencyMode::Last => accumulated = picked,
            }
        }

        Ok(accumulated)
    }
}
