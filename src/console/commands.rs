// src/console/commands.rs

use crate::scene::FilterMode;

/// Where a `load` command should read courses from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// The bundled example CSV.
    Example,
    /// A CSV file on disk.
    Path(String),
}

/// A parsed console command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Toggle(String),
    Reset,
    /// `y`/`yes`; only meaningful while a reset prompt is pending.
    Confirm,
    Filter(FilterMode),
    Search(String),
    Details(String),
    Load(LoadSource),
    Generate(String),
    Map,
    Progress,
    Help,
    Quit,
    Empty,
    /// Anything unparseable; carries the notice to show the user.
    Invalid(String),
}

/// Parse one console line into a [`Command`].
///
/// Total function: bad input maps to `Command::Invalid` with a usage
/// notice, never an error. The first whitespace-separated token is the
/// verb (case-insensitive); the rest of the line, trimmed, is the
/// argument, so IDs, paths, and topics may contain spaces.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "toggle" => require_arg(rest, "usage: toggle <course-id>", Command::Toggle),
        "reset" => Command::Reset,
        "y" | "yes" => Command::Confirm,
        "filter" => match rest.parse::<FilterMode>() {
            Ok(mode) => Command::Filter(mode),
            Err(_) => Command::Invalid("usage: filter <all|next|completed>".to_string()),
        },
        "search" => require_arg(rest, "usage: search <text>", Command::Search),
        "details" => require_arg(rest, "usage: details <course-id>", Command::Details),
        "load" => {
            if rest.is_empty() {
                Command::Invalid("usage: load <path>  (or: load example)".to_string())
            } else if rest.eq_ignore_ascii_case("example") {
                Command::Load(LoadSource::Example)
            } else {
                Command::Load(LoadSource::Path(rest.to_string()))
            }
        }
        "generate" => require_arg(rest, "usage: generate <topic>", Command::Generate),
        "map" => Command::Map,
        "progress" => Command::Progress,
        "help" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Invalid(format!("Unknown command '{other}'; try 'help'.")),
    }
}

fn require_arg(rest: &str, usage: &str, make: impl FnOnce(String) -> Command) -> Command {
    if rest.is_empty() {
        Command::Invalid(usage.to_string())
    } else {
        make(rest.to_string())
    }
}
