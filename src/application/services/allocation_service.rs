//! Allocation engine - choose exactly N distinct items from a shrinking pool
//!
//! Commands per cycle: `ls` reprints the pool, `rand` auto-fills from the
//! current pool, a comma-separated list mixes 1-based numbers and
//! case-insensitive names, and empty input re-prompts. Every confirmed pick
//! leaves the pool, so nothing can be selected twice.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::application::ports::outbound::Prompt;
use crate::infrastructure::console;

/// Run one allocation to completion and return the selections in pick order.
///
/// Terminates when `choose` items are selected, or early if the pool drains
/// first (a catalog group promising more picks than it offers).
pub fn allocate<R: Rng + ?Sized>(
    choose: usize,
    mut pool: Vec<String>,
    prompt: &mut dyn Prompt,
    rng: &mut R,
) -> Vec<String> {
    let mut selected: Vec<String> = Vec::new();

    while selected.len() < choose && !pool.is_empty() {
        let remaining = choose - selected.len();
        let input = prompt.ask(&format!(
            "➡️  Select by number or name (comma-separated), 'rand' to auto-fill, 'ls' to show list — {remaining} left: "
        ));
        let input = input.trim();

        if input.eq_ignore_ascii_case("ls") {
            console::pool_list(&pool);
            continue;
        }

        if input.eq_ignore_ascii_case("rand") {
            random_fill(remaining, &mut pool, &mut selected, rng);
            continue;
        }

        let tokens: Vec<&str> = input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            println!("❌ No input detected. Please enter numbers, names, 'rand', or 'ls'.");
            continue;
        }

        let additions = resolve_tokens(&tokens, &pool, choose - selected.len());
        for name in additions {
            apply_pick(&name, &mut pool, &mut selected);
        }
    }

    selected
}

/// Draw `remaining` uniform picks from the current pool (with replacement,
/// in-round duplicates discarded) and apply the survivors. Collisions mean
/// one call can add fewer than `remaining`; the outer loop re-invokes.
fn random_fill<R: Rng + ?Sized>(
    remaining: usize,
    pool: &mut Vec<String>,
    selected: &mut Vec<String>,
    rng: &mut R,
) {
    let fill_count = remaining.min(pool.len());
    let mut picks: Vec<String> = Vec::new();
    for _ in 0..fill_count {
        if let Some(pick) = pool.choose(rng) {
            if !picks.contains(pick) {
                picks.push(pick.clone());
            }
        }
    }
    for pick in picks {
        apply_pick(&pick, pool, selected);
    }
}

/// Resolve tokens against the current pool: a digit string is a 1-based
/// index, anything else a case-insensitive name. Unresolvable tokens are
/// reported but do not abort the rest; resolution stops once the quota
/// would be met. Duplicate names within one round collapse to one addition.
fn resolve_tokens(tokens: &[&str], pool: &[String], quota: usize) -> Vec<String> {
    let mut additions: Vec<String> = Vec::new();

    for token in tokens {
        if additions.len() >= quota {
            break;
        }
        if token.chars().all(|c| c.is_ascii_digit()) {
            match token.parse::<usize>() {
                Ok(v) if v >= 1 && v <= pool.len() => {
                    let name = pool[v - 1].clone();
                    if !additions.contains(&name) {
                        additions.push(name);
                    }
                }
                _ => println!("❌ {token} is out of range."),
            }
        } else if let Some(name) = pool.iter().find(|o| o.eq_ignore_ascii_case(token)) {
            if !additions.contains(name) {
                additions.push(name.clone());
            }
        } else {
            println!("❌ '{token}' not found in available options. Type 'ls' to list.");
        }
    }

    additions
}

fn apply_pick(name: &str, pool: &mut Vec<String>, selected: &mut Vec<String>) {
    if let Some(pos) = pool.iter().position(|o| o == name) {
        pool.remove(pos);
        println!("✅ Added: {name}");
        selected.push(name.to_string());
    }
}
