//! Terminal rendering and the interactive stdin prompt

use std::io::{self, BufRead, Write};

use crate::application::ports::outbound::Prompt;
use crate::domain::entities::{CharacterDraft, ClassDetail, RaceDetail};

const WIDE_RULE: usize = 80;
const RULE: usize = 60;
const NARROW_RULE: usize = 40;

/// Stdin-backed prompt used by the wizard binary
///
/// A closed or unreadable stdin ends the session with a non-zero exit. An
/// empty line is a meaningful command (random selection), so end-of-input
/// must never be reported as one.
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn ask(&mut self, message: &str) -> String {
        print!("{message}");
        let _ = io::stdout().flush();

        match read_input_line(&mut io::stdin().lock()) {
            Some(line) => line,
            None => {
                eprintln!("\nInput stream closed, exiting.");
                std::process::exit(1);
            }
        }
    }
}

/// Read one line without its trailing newline. `None` means the stream is
/// exhausted or unreadable, as opposed to `Some("")` for an empty line.
fn read_input_line(reader: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(_) => None,
    }
}

/// Print the branded banner and intro separators
pub fn banner() {
    println!("{}", "=".repeat(WIDE_RULE));
    println!(
        r"
    ╔══════════════════════════════════════════════════════════════════════════════╗
    ║                                                                              ║
    ║                            _____             _____                           ║
    ║                           |  __ \    ___    |  __ \                          ║
    ║                           | |  | |  ( _ )   | |  | |                         ║
    ║                           | |  | |  / _ \/\ | |  | |                         ║
    ║                           | |__| | | (_>  < | |__| |                         ║
    ║                           |_____/   \___/\/ |_____/                          ║
    ║                                                                              ║
    ║                              CHARACTER GENERATOR 🎲                          ║
    ║                                                                              ║
    ╚══════════════════════════════════════════════════════════════════════════════╝
    "
    );
    println!("{}", "=".repeat(WIDE_RULE));
}

/// Print the welcome text shown before the first prompt
pub fn intro() {
    println!("Welcome to the D&D Character builder! You will be guided through a series of");
    println!("prompts to create your character. You'll choose a race (such as human or");
    println!("halfling) and a class (such as fighter or wizard).");
    println!("\nYou can also randomly generate each step or use the help feature to learn");
    println!("more about your options!");
    println!("\n{}", "=".repeat(WIDE_RULE));
}

/// Print a visual section divider with a title and emoji
pub fn section(title: &str, emoji: &str) {
    println!("\n{}", "=".repeat(WIDE_RULE));
    println!("  {emoji} {} {emoji}", title.to_uppercase());
    println!("{}", "=".repeat(WIDE_RULE));
}

/// Print a step header with a one-line description
pub fn step(number: u32, title: &str, description: &str) {
    println!("\n STEP {number}: {title}");
    if !description.is_empty() {
        println!("   {description}");
    }
    println!("{}", "-".repeat(RULE));
}

/// Print a 1-based, title-cased option list between rules
pub fn numbered_list(items: &[String]) {
    println!("{}", "─".repeat(NARROW_RULE));
    for (i, item) in items.iter().enumerate() {
        println!("  {:2}. {}", i + 1, title_case(item));
    }
    println!("{}", "─".repeat(NARROW_RULE));
}

/// Print an allocation pool, 1-based, names verbatim
pub fn pool_list(options: &[String]) {
    println!("{}", "─".repeat(RULE));
    for (i, option) in options.iter().enumerate() {
        println!("  {:2}. {}", i + 1, option);
    }
    println!("{}", "─".repeat(RULE));
}

/// Render race details, skipping absent fields
pub fn race_detail(detail: &RaceDetail) {
    println!("\n{}", "─".repeat(RULE));
    if let Some(name) = &detail.name {
        println!("🏷️  RACE: {}", name.to_uppercase());
    }
    if let Some(alignment) = &detail.alignment {
        println!("⚖️  ALIGNMENT: {alignment}");
    }
    if let Some(age) = &detail.age {
        println!("⌛ AGE: {age}");
    }
    if let Some(size) = &detail.size {
        match &detail.size_description {
            Some(desc) => println!("📏 SIZE: {size} - {desc}"),
            None => println!("📏 SIZE: {size}"),
        }
    }
    if let Some(languages) = &detail.language_desc {
        println!("🗣️  LANGUAGES: {languages}");
    }
    println!("{}", "─".repeat(RULE));
}

/// Render class details, skipping absent fields and truncating long lists
pub fn class_detail(detail: &ClassDetail) {
    println!("\n{}", "─".repeat(RULE));
    println!(
        "🛡️  CLASS: {}",
        detail.name.as_deref().unwrap_or("Unknown").to_uppercase()
    );
    if let Some(hit_die) = detail.hit_die {
        println!("🎲 HIT DIE: d{hit_die}");
    }
    if !detail.saving_throws.is_empty() {
        let saving = join_names(&detail.saving_throws);
        println!("💪 SAVING THROWS: {saving}");
    }
    if !detail.proficiencies.is_empty() {
        let shown: Vec<_> = detail.proficiencies.iter().take(8).collect();
        let profs = shown
            .iter()
            .map(|p| p.name_or_unknown())
            .collect::<Vec<_>>()
            .join(", ");
        let ellipsis = if detail.proficiencies.len() > 8 { " …" } else { "" };
        println!("📜 PROFICIENCIES: {profs}{ellipsis}");
    }
    if !detail.subclasses.is_empty() {
        println!("🏷️  SUBCLASSES: {}", join_names(&detail.subclasses));
    }
    println!("{}", "─".repeat(RULE));
}

/// Print one group's confirmed selections
pub fn selections(selected: &[String]) {
    println!("\n🎯 You selected:");
    for item in selected {
        println!("  • {item}");
    }
    println!("{}", "─".repeat(RULE));
}

/// Print the final character summary
pub fn summary(draft: &CharacterDraft) {
    println!("Here is your adventurer:");
    println!("{}", "─".repeat(NARROW_RULE));
    println!("RACE:  {}", title_case(&draft.race));
    println!("CLASS: {}", title_case(&draft.class));
    println!("PROFICIENCIES:");
    for proficiency in &draft.proficiencies {
        println!("  • {proficiency}");
    }
    println!("STATS:");
    for (ability, score) in draft.abilities.iter() {
        println!("  {:<12} {score}", ability.name());
    }
    println!("{}", "─".repeat(NARROW_RULE));
}

fn join_names(refs: &[crate::domain::entities::NamedRef]) -> String {
    refs.iter()
        .map(|r| r.name_or_unknown())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Capitalize the first letter of each word, like catalog keys rendered
/// for display ("half-elf" -> "Half-Elf")
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;
    for c in s.chars() {
        if c.is_alphanumeric() {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn title_case_handles_hyphenated_keys() {
        assert_eq!(title_case("half-elf"), "Half-Elf");
        assert_eq!(title_case("human"), "Human");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn input_lines_are_read_without_newlines() {
        let mut reader = Cursor::new("elf\nhuman\r\n");
        assert_eq!(read_input_line(&mut reader), Some("elf".to_string()));
        assert_eq!(read_input_line(&mut reader), Some("human".to_string()));
    }

    #[test]
    fn empty_line_is_a_command_not_end_of_input() {
        let mut reader = Cursor::new("\n");
        assert_eq!(read_input_line(&mut reader), Some(String::new()));
    }

    #[test]
    fn exhausted_stream_is_none_not_empty_line() {
        // A closed stdin must not look like the empty-line random command,
        // or the confirmation sub-loop would redraw forever
        let mut reader = Cursor::new("");
        assert_eq!(read_input_line(&mut reader), None);

        let mut reader = Cursor::new("last\n");
        assert_eq!(read_input_line(&mut reader), Some("last".to_string()));
        assert_eq!(read_input_line(&mut reader), None);
    }
}
