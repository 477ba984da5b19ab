//! Line commands and their mapping to console intents.
//!
//! Positions typed by the user are 1-based; intents carry 0-based indices.

use shiftsearch_core::request::validate_results_per_page;
use shiftsearch_core::{Intent, Operator, PageTarget, Setting, SortMethod};

pub const HELP: &str = "\
commands:
  type <text>          set the search input (shows a suggestion)
  accept               take the current suggestion
  search [text]        search from page 1, optionally replacing the input
  page <n>|next|prev   go to a result page
  set operator <AND|OR|NOT>
  set per-page <10|25|50|100>
  set sort <hits|alphabetical>
  set exclude <chars>  characters stripped before searching
  remove <n>           remove result n as outdated
  open <n>             open result n
  show                 print the current state
  help                 print this message
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Intent>),
    Show,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid position: {0} (positions start at 1)")]
    InvalidPosition(String),

    #[error("{0}")]
    InvalidSetting(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };
    let arg = rest.trim();

    let command = match word.to_ascii_lowercase().as_str() {
        // Leading separators are dropped; trailing spaces are part of the input.
        "type" => Command::Dispatch(vec![Intent::Input(rest.trim_start().trim_end_matches(['\r', '\n']).to_string())]),
        "accept" => Command::Dispatch(vec![Intent::AcceptSuggestion]),
        "search" if arg.is_empty() => Command::Dispatch(vec![Intent::Submit]),
        "search" => Command::Dispatch(vec![Intent::Input(arg.to_string()), Intent::Submit]),
        "page" => Command::Dispatch(vec![Intent::ChangePage(parse_page(arg)?)]),
        "set" => Command::Dispatch(vec![Intent::ChangeSetting(parse_setting(rest)?)]),
        "remove" => Command::Dispatch(vec![Intent::RemoveItem(parse_position(arg)?)]),
        "open" => Command::Dispatch(vec![Intent::ActivateResult(parse_position(arg)?)]),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_position(arg: &str) -> Result<usize, ParseError> {
    if arg.is_empty() {
        return Err(ParseError::MissingArgument("position"));
    }
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ParseError::InvalidPosition(arg.to_string())),
    }
}

fn parse_page(arg: &str) -> Result<PageTarget, ParseError> {
    match arg.to_ascii_lowercase().as_str() {
        "next" => Ok(PageTarget::Next),
        "prev" | "previous" => Ok(PageTarget::Previous),
        _ => {
            let index = u32::try_from(parse_position(arg)?).map_err(|_| ParseError::InvalidPosition(arg.to_string()))?;
            Ok(PageTarget::Index(index))
        }
    }
}

fn parse_setting(rest: &str) -> Result<Setting, ParseError> {
    let rest = rest.trim_start();
    let (name, value) = match rest.split_once(char::is_whitespace) {
        Some((name, value)) => (name, value),
        None => (rest, ""),
    };

    if name.is_empty() {
        return Err(ParseError::MissingArgument("setting name"));
    }

    let invalid = |e: shiftsearch_core::Error| ParseError::InvalidSetting(e.to_string());
    match name.to_ascii_lowercase().as_str() {
        // Spaces are meaningful here; only the line ending is dropped.
        "exclude" => Ok(Setting::ExcludedChars(value.trim_end_matches(['\r', '\n']).to_string())),
        _ if value.trim().is_empty() => Err(ParseError::MissingArgument("setting value")),
        "operator" => value.parse::<Operator>().map(Setting::Operator).map_err(invalid),
        "sort" => value.parse::<SortMethod>().map(Setting::SortMethod).map_err(invalid),
        "per-page" => {
            let n = value
                .trim()
                .parse::<u32>()
                .map_err(|_| ParseError::InvalidSetting(format!("not a number: {}", value.trim())))?;
            validate_results_per_page(n).map(Setting::ResultsPerPage).map_err(invalid)
        }
        other => Err(ParseError::InvalidSetting(format!("unknown setting: {other}"))),
    }
}
