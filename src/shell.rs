use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::bookmark::NewBookmark;
use crate::render::render_view;
use crate::session::Session;
use crate::state::{AddRequest, Command, ExportRequest, ToggleRequest};
use crate::storage::KeyValueStore;
use crate::utils::split_tags;

pub const HELP: &str = "\
Type to search. Commands:
  :pin URL                                  toggle a pin
  :add TITLE | URL [| DESCRIPTION [| tags]] add a bookmark
  :export [PATH]                            export your bookmarks
  :clear                                    erase local data
  :help                                     show this help
  :quit                                     leave";

/// What a line typed into the shell asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    Command(Command),
    Help,
    Quit,
    /// A command line that could not be understood
    Invalid(String),
}

/// Map one input line to a shell action.
///
/// Lines starting with `:` are commands, everything else replaces the query.
pub fn parse_line(line: &str, default_export: &str) -> ShellInput {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(rest) = line.strip_prefix(':') else {
        return ShellInput::Command(Command::QueryChanged(line.to_string()));
    };

    let (name, argument) = match rest.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (rest, ""),
    };

    match name {
        "pin" if !argument.is_empty() => ShellInput::Command(Command::TogglePin(ToggleRequest {
            url: argument.to_string(),
        })),
        "add" => parse_add(argument),
        "export" => {
            let path = if argument.is_empty() {
                default_export
            } else {
                argument
            };
            ShellInput::Command(Command::Export(ExportRequest {
                path: PathBuf::from(path),
            }))
        }
        "clear" => ShellInput::Command(Command::Clear),
        "help" | "h" | "?" => ShellInput::Help,
        "quit" | "q" | "exit" => ShellInput::Quit,
        _ => ShellInput::Invalid(line.to_string()),
    }
}

fn parse_add(argument: &str) -> ShellInput {
    let mut fields = argument.splitn(4, '|').map(str::trim);
    let title = fields.next().unwrap_or_default();
    let url = fields.next().unwrap_or_default();
    let description = fields.next().filter(|d| !d.is_empty());
    let tags = fields.next().map(split_tags).unwrap_or_default();

    let mut candidate = NewBookmark::new(title, url).with_tags(tags);
    if let Some(description) = description {
        candidate = candidate.with_description(description);
    }
    ShellInput::Command(Command::Add(AddRequest(candidate)))
}

/// Read lines from `input` until it ends or the user quits, printing the
/// view after every command
pub fn run<S, R, W>(
    session: &mut Session<S>,
    input: R,
    mut output: W,
    default_export: &str,
) -> io::Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", HELP)?;
    write!(output, "{}", render_view(&session.view(), &session.take_notices()))?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line, default_export) {
            ShellInput::Command(command) => command,
            ShellInput::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            ShellInput::Quit => break,
            ShellInput::Invalid(line) => {
                writeln!(output, "Unknown command: {} (try :help)", line)?;
                continue;
            }
        };

        match session.handle(command) {
            Ok(view) => {
                let notices = session.take_notices();
                write!(output, "\n{}", render_view(&view, &notices))?;
            }
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
        output.flush()?;
    }

    Ok(())
}
