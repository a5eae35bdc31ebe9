//! Choice resolver - picks exactly one catalog entry from an ordered list
//!
//! Each prompt cycle accepts, in precedence order: empty input (random pick
//! with a yes/no confirmation sub-loop), the literal `help` (detail lookup),
//! a 1-based number, or an exact entry name. Anything else re-prompts. The
//! loop only exits through a successful selection.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::application::ports::outbound::{CatalogPort, Prompt};
use crate::domain::entities::EntityKind;
use crate::infrastructure::console;

/// Resolve one selection from `options`. `options` must be non-empty.
pub async fn resolve<R: Rng + ?Sized>(
    kind: EntityKind,
    options: &[String],
    catalog: &dyn CatalogPort,
    prompt: &mut dyn Prompt,
    rng: &mut R,
) -> String {
    debug_assert!(
        !options.is_empty(),
        "selection requires a non-empty option list"
    );

    loop {
        print_menu(kind, options.len());
        let input = prompt.ask("\n🎲 Your choice: ");
        let input = input.trim();

        if input.is_empty() {
            return confirm_random_pick(kind, options, prompt, rng);
        }

        if input == "help" {
            show_detail(kind, options, catalog, prompt).await;
            continue;
        }

        if input.chars().all(|c| c.is_ascii_digit()) {
            match input.parse::<usize>() {
                Ok(v) if v >= 1 && v <= options.len() => {
                    let choice = options[v - 1].clone();
                    println!("✅ You have chosen: {}", console::title_case(&choice));
                    return choice;
                }
                _ => {
                    println!("❌ Invalid input. Please choose from the available options above.");
                    continue;
                }
            }
        }

        if let Some(choice) = options.iter().find(|o| o.as_str() == input) {
            println!("✅ You have chosen: {}", console::title_case(choice));
            return choice.clone();
        }

        println!("❌ Invalid input. Please choose from the available options above.");
    }
}

/// Draw uniformly until the user accepts a pick. Only `yes`/`y` (any case)
/// accepts; every other answer triggers a fresh draw.
fn confirm_random_pick<R: Rng + ?Sized>(
    kind: EntityKind,
    options: &[String],
    prompt: &mut dyn Prompt,
    rng: &mut R,
) -> String {
    loop {
        let pick = options
            .choose(rng)
            .expect("selection requires a non-empty option list");
        println!(
            "\n🎲 Randomly selected {kind}: {}",
            console::title_case(pick)
        );
        let answer = prompt.ask(&format!("✅ Keep this {kind}? (yes/no): "));
        if matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") {
            return pick.clone();
        }
    }
}

/// `help` path: ask for a name, fetch and render its detail record.
/// Catalog failures are reported and swallowed; the selection loop continues.
async fn show_detail(
    kind: EntityKind,
    options: &[String],
    catalog: &dyn CatalogPort,
    prompt: &mut dyn Prompt,
) {
    let name = prompt.ask(&format!("🎲 Enter the {kind} name for more information: "));
    let name = name.trim();

    if !options.iter().any(|o| o == name) {
        println!("❌ {} not found. Please check the spelling.", kind.label());
        return;
    }

    match kind {
        EntityKind::Race => match catalog.race_detail(name).await {
            Ok(detail) => console::race_detail(&detail),
            Err(e) => println!("❌ Error fetching {kind} info: {e}"),
        },
        EntityKind::Class => match catalog.class_detail(name).await {
            Ok(detail) => console::class_detail(&detail),
            Err(e) => println!("❌ Error fetching {kind} info: {e}"),
        },
    }
}

fn print_menu(kind: EntityKind, count: usize) {
    println!("\n💭 What would you like to do?");
    println!("   • Type a {kind} name to select it");
    println!("   • Type a number (1-{count}) for quick selection");
    println!("   • Press ENTER for random selection");
    println!("   • Type 'help' for detailed {kind} information");
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::application::ports::outbound::{CatalogError, ScriptedPrompt};
    use crate::domain::entities::{ClassDetail, RaceDetail};

    struct StubCatalog {
        fail_details: bool,
    }

    #[async_trait]
    impl CatalogPort for StubCatalog {
        async fn list(&self, _kind: EntityKind) -> Result<Vec<String>, CatalogError> {
            Ok(vec![])
        }

        async fn race_detail(&self, index: &str) -> Result<RaceDetail, CatalogError> {
            if self.fail_details {
                return Err(CatalogError::NotFound {
                    kind: EntityKind::Race,
                    index: index.to_string(),
                });
            }
            Ok(RaceDetail {
                name: Some(index.to_string()),
                ..RaceDetail::default()
            })
        }

        async fn class_detail(&self, index: &str) -> Result<ClassDetail, CatalogError> {
            if self.fail_details {
                return Err(CatalogError::ProviderUnavailable("stub".into()));
            }
            Ok(ClassDetail {
                name: Some(index.to_string()),
                ..ClassDetail::default()
            })
        }
    }

    fn races() -> Vec<String> {
        vec!["elf".to_string(), "human".to_string()]
    }

    #[tokio::test]
    async fn resolves_by_number() {
        let catalog = StubCatalog { fail_details: false };
        let mut prompt = ScriptedPrompt::new(["2"]);
        let mut rng = StdRng::seed_from_u64(1);

        let choice = resolve(EntityKind::Race, &races(), &catalog, &mut prompt, &mut rng).await;
        assert_eq!(choice, "human");
    }

    #[tokio::test]
    async fn resolves_by_exact_name() {
        let catalog = StubCatalog { fail_details: false };
        let mut prompt = ScriptedPrompt::new(["elf"]);
        let mut rng = StdRng::seed_from_u64(1);

        let choice = resolve(EntityKind::Race, &races(), &catalog, &mut prompt, &mut rng).await;
        assert_eq!(choice, "elf");
    }

    #[tokio::test]
    async fn out_of_range_number_reprompts() {
        let catalog = StubCatalog { fail_details: false };
        let mut prompt = ScriptedPrompt::new(["3", "0", "1"]);
        let mut rng = StdRng::seed_from_u64(1);

        let choice = resolve(EntityKind::Race, &races(), &catalog, &mut prompt, &mut rng).await;
        assert_eq!(choice, "elf");
    }

    #[tokio::test]
    async fn invalid_text_reprompts() {
        let catalog = StubCatalog { fail_details: false };
        let mut prompt = ScriptedPrompt::new(["orc", "Elf", "2"]);
        let mut rng = StdRng::seed_from_u64(1);

        // "Elf" is not an exact match for the lowercase catalog key
        let choice = resolve(EntityKind::Race, &races(), &catalog, &mut prompt, &mut rng).await;
        assert_eq!(choice, "human");
    }

    #[tokio::test]
    async fn random_pick_loops_until_accepted() {
        let catalog = StubCatalog { fail_details: false };
        // Empty input enters the confirmation sub-loop; three rejections,
        // then an acceptance. There is no cancel path.
        let mut prompt = ScriptedPrompt::new(["", "no", "nah", "", "y"]);
        let mut rng = StdRng::seed_from_u64(7);

        let choice = resolve(EntityKind::Race, &races(), &catalog, &mut prompt, &mut rng).await;
        assert!(races().contains(&choice));
    }

    #[tokio::test]
    async fn help_renders_detail_and_continues() {
        let catalog = StubCatalog { fail_details: false };
        let mut prompt = ScriptedPrompt::new(["help", "elf", "1"]);
        let mut rng = StdRng::seed_from_u64(1);

        let choice = resolve(EntityKind::Race, &races(), &catalog, &mut prompt, &mut rng).await;
        assert_eq!(choice, "elf");
    }

    #[tokio::test]
    async fn help_fetch_failure_does_not_abort() {
        let catalog = StubCatalog { fail_details: true };
        let mut prompt = ScriptedPrompt::new(["help", "elf", "2"]);
        let mut rng = StdRng::seed_from_u64(1);

        let choice = resolve(EntityKind::Race, &races(), &catalog, &mut prompt, &mut rng).await;
        assert_eq!(choice, "human");
    }

    #[tokio::test]
    async fn help_unknown_name_reports_and_continues() {
        let catalog = StubCatalog { fail_details: false };
        let mut prompt = ScriptedPrompt::new(["help", "orc", "1"]);
        let mut rng = StdRng::seed_from_u64(1);

        let choice = resolve(EntityKind::Race, &races(), &catalog, &mut prompt, &mut rng).await;
        assert_eq!(choice, "elf");
    }

    #[tokio::test]
    #[should_panic(expected = "non-empty option list")]
    async fn empty_option_list_is_a_contract_violation() {
        let catalog = StubCatalog { fail_details: false };
        let mut prompt = ScriptedPrompt::new([""]);
        let mut rng = StdRng::seed_from_u64(1);

        // Callers guard with ensure!; an empty list must never produce a
        // phantom empty-string selection
        resolve(EntityKind::Race, &[], &catalog, &mut prompt, &mut rng).await;
    }

    #[tokio::test]
    async fn help_is_case_sensitive() {
        let catalog = StubCatalog { fail_details: false };
        // "HELP" is not the help command, and not an option either
        let mut prompt = ScriptedPrompt::new(["HELP", "1"]);
        let mut rng = StdRng::seed_from_u64(1);

        let choice = resolve(EntityKind::Race, &races(), &catalog, &mut prompt, &mut rng).await;
        assert_eq!(choice, "elf");
    }
}
