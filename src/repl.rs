use colored::Colorize;
use shoebox_core::{FacetDimension, FacetFilter};
use std::io::{BufRead, Write};

use crate::errors::map_catalog_load_error;
use crate::handlers::{Controller, Event};
use crate::ui::{render_facets, render_results, render_view, show_error};

const HELP: &str = "\
Commands:
  search <text>              fuzzy search (alias: q); no text clears the query
  collection <value|all>     filter by collection
  brand <value|all>          filter by brand
  type <value|all>           filter by type
  tag <value|all>            filter by tag
  clear                      reset the search and every facet
  open <id>                  show one item in full
  close                      back to the result list
  photo <n>                  make photo n of the open item the hero
  facets                     list facet options
  list                       show the result list
  reload                     re-read the catalog file, keeping filters
  help                       show this help
  quit                       leave (alias: exit)";

/// One parsed line of interactive input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(Event),
    Facets,
    List,
    Reload,
    Help,
    Quit,
    Empty,
}

/// Parse a line of input into a command
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "" => Command::Empty,
        "search" | "q" => Command::Event(Event::QueryChanged(rest.to_string())),
        "clear" => Command::Event(Event::ClearAll),
        "open" if rest.is_empty() => return Err("usage: open <id>".to_string()),
        "open" => Command::Event(Event::OpenItem(rest.to_string())),
        "close" => Command::Event(Event::CloseItem),
        "photo" => {
            let number: usize = rest
                .parse()
                .map_err(|_| format!("usage: photo <n>, got '{}'", rest))?;
            if number == 0 {
                return Err("photos are numbered from 1".to_string());
            }
            Command::Event(Event::SelectPhoto(number - 1))
        }
        "facets" => Command::Facets,
        "list" => Command::List,
        "reload" => Command::Reload,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => match other.parse::<FacetDimension>() {
            Ok(dimension) if rest.is_empty() => {
                return Err(format!("usage: {} <value|all>", dimension))
            }
            Ok(dimension) => Command::Event(Event::FacetChanged(dimension, FacetFilter::from(rest))),
            Err(_) => return Err(format!("unknown command '{}', try 'help'", word)),
        },
    };

    Ok(command)
}

/// Run an interactive session until `quit` or end of input
pub fn run_repl<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    controller: &mut Controller,
) -> anyhow::Result<()> {
    writeln!(out, "{}", controller.state.get_title().bold())?;
    writeln!(out, "Type 'help' for commands.\n")?;
    render_results(out, &controller.state)?;

    let mut line = String::new();
    loop {
        write!(out, "\n{} ", ">".cyan())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{}", message.yellow())?;
                continue;
            }
        };

        match command {
            Command::Event(event) => {
                controller.dispatch(event);
                render_view(out, controller)?;
            }
            Command::Facets => render_facets(out, &controller.state)?,
            Command::List => render_results(out, &controller.state)?,
            Command::Reload => match controller.reload() {
                Ok(()) => render_view(out, controller)?,
                Err(error) => {
                    let path = controller
                        .state
                        .source
                        .as_ref()
                        .map(|source| source.path().to_path_buf())
                        .unwrap_or_default();
                    let (title, message, details) = map_catalog_load_error(&error, &path);
                    show_error(out, &title, &message, &details)?;
                }
            },
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => break,
            Command::Empty => {}
        }
    }

    Ok(())
}
