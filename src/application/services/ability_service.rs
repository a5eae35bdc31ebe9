//! Ability roller - 4d6 drop the lowest, once per ability
//!
//! Rolls the five abilities in their fixed order. Each roll waits on an
//! acknowledgment prompt purely as a pacing gate; the answer is ignored.

use rand::Rng;

use crate::application::ports::outbound::Prompt;
use crate::domain::entities::{Ability, AbilityScores};

const DICE_PER_ABILITY: usize = 4;
const DIE_SIDES: u8 = 6;

/// Roll all five ability scores and return the completed set.
pub fn roll_ability_scores<R: Rng + ?Sized>(
    prompt: &mut dyn Prompt,
    rng: &mut R,
) -> AbilityScores {
    let mut scores = AbilityScores::default();

    for ability in Ability::ALL {
        prompt.ask(&format!("Press Enter to roll for {ability}: "));

        let mut rolls = [0u8; DICE_PER_ABILITY];
        for roll in &mut rolls {
            *roll = rng.gen_range(1..=DIE_SIDES);
        }
        rolls.sort_unstable();
        let score = score_from_rolls(rolls);

        println!("{}", "─".repeat(40));
        println!("🎲 Rolls for {ability}: {rolls:?}  → drop {}", rolls[0]);
        println!("✅ {ability} score: {score}\n");

        scores.set(ability, score);
    }

    println!("{}", "─".repeat(40));
    println!("Ability Scores:");
    for (ability, score) in scores.iter() {
        println!("  {:<12} {score}", ability.name());
    }
    println!("{}", "─".repeat(40));

    scores
}

/// Sum of the three largest of four dice.
pub fn score_from_rolls(mut rolls: [u8; DICE_PER_ABILITY]) -> u8 {
    rolls.sort_unstable();
    rolls[1..].iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::application::ports::outbound::ScriptedPrompt;

    #[test]
    fn score_drops_the_lowest_die() {
        assert_eq!(score_from_rolls([1, 6, 6, 6]), 18);
        assert_eq!(score_from_rolls([4, 3, 2, 1]), 9);
    }

    #[test]
    fn tied_minima_drop_only_one() {
        // [2,2,2,6]: whichever 2 is dropped, the sum is 10
        assert_eq!(score_from_rolls([2, 2, 2, 6]), 10);
        assert_eq!(score_from_rolls([6, 2, 2, 2]), 10);
    }

    #[test]
    fn score_bounds() {
        assert_eq!(score_from_rolls([1, 1, 1, 1]), 3);
        assert_eq!(score_from_rolls([6, 6, 6, 6]), 18);
    }

    #[test]
    fn all_five_abilities_are_rolled_in_range() {
        for seed in 0..10 {
            let mut prompt = ScriptedPrompt::new([""; 5]);
            let mut rng = StdRng::seed_from_u64(seed);

            let scores = roll_ability_scores(&mut prompt, &mut rng);
            for (ability, score) in scores.iter() {
                assert!(
                    (3..=18).contains(&score),
                    "{ability} rolled {score} with seed {seed}"
                );
            }
        }
    }
}
