use wordup_types::UiEvent;

pub const USAGE: &str = "commands: type <text> | search [text] | history <term> | remove <term> | \
clear | synonym <word> | resize <width> | toggle | quit";

/// One console line as UI events, in the order they fire
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Events(Vec<UiEvent>),
    Unknown(String),
    Blank,
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Command::Blank;
    }

    let (verb, rest) = match line.trim_start().split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim(), ""),
    };

    let events = match (verb, rest) {
        // Raw text; validation happens at search time
        ("type", text) => vec![UiEvent::SetSearchTerm(text.to_string())],
        ("search", "") => vec![UiEvent::Search],
        ("search", text) => vec![UiEvent::SetSearchTerm(text.to_string()), UiEvent::Search],
        ("history", term) if !term.is_empty() => vec![UiEvent::SelectHistory(term.to_string())],
        ("remove", term) if !term.is_empty() => vec![UiEvent::RemoveHistory(term.to_string())],
        ("synonym", word) if !word.is_empty() => vec![UiEvent::SelectSynonym(word.to_string())],
        ("clear", "") => vec![UiEvent::ClearHistory],
        ("toggle", "") => vec![UiEvent::ToggleDrawer],
        ("quit" | "exit", "") => vec![UiEvent::Quit],
        ("resize", width) => match width.trim().parse() {
            Ok(width) => vec![UiEvent::Resize { width }],
            Err(_) => return Command::Unknown(line.to_string()),
        },
        _ => return Command::Unknown(line.to_string()),
    };

    Command::Events(events)
}
