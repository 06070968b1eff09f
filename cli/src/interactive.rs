use crate::error_formatter;
use crate::formatter::Formatter;
use anyhow::{Context, Result};
use inquire::{InquireError, Select, Text};
use mathema::Engine;

const SOLVE: &str = "Λύση (κεφάλαιο, πεδίο ορισμού, λύσεις)";
const CLASSIFY: &str = "Μόνο κατάταξη σε κεφάλαια";
const NORMALIZE: &str = "Μόνο κανονικοποίηση";

/// Prompt for queries until an empty line, Esc or Ctrl-C
///
/// Errors in a query are printed and the loop continues with the next one.
pub fn run_interactive(engine: &Engine) -> Result<()> {
    let formatter = Formatter::default();
    let mut history: Vec<String> = Vec::new();

    loop {
        let Some(input) = prompt_input(history.last())? else {
            break;
        };

        let action = select_action()?;
        match action {
            Some(SOLVE) => match engine.analyze(&input) {
                Ok(response) => print!("{}", formatter.format_response(&response, 3)),
                Err(e) => eprintln!("{}", error_formatter::format_error(&e)),
            },
            Some(CLASSIFY) => {
                for m in engine.classify(&input) {
                    println!("{}", formatter.format_match_summary(&m));
                }
            }
            Some(_) => println!("{}", engine.normalize(&input)),
            None => break,
        }
        println!();
        history.push(input);
    }

    Ok(())
}

fn prompt_input(previous: Option<&String>) -> Result<Option<String>> {
    let mut prompt = Text::new("Εξίσωση:")
        .with_help_message("π.χ. x^2-5x+6=0, ημ(x)=0.5 ή x+y=5, x-y=1 (κενό για έξοδο)");
    if let Some(previous) = previous {
        prompt = prompt.with_placeholder(previous);
    }

    match prompt.prompt() {
        Ok(text) if text.trim().is_empty() => Ok(None),
        Ok(text) => Ok(Some(text)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e).context("Failed to read equation"),
    }
}

fn select_action() -> Result<Option<&'static str>> {
    match Select::new("Ενέργεια:", vec![SOLVE, CLASSIFY, NORMALIZE])
        .with_help_message("Use arrow keys to navigate, Enter to select")
        .prompt()
    {
        Ok(action) => Ok(Some(action)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e).context("Failed to get action selection"),
    }
}
