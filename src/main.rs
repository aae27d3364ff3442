mod cli;
mod errors;
mod handlers;
mod operations;
mod repl;
mod state;
mod ui;

use anyhow::Context;
use clap::Parser;
use shoebox_core::{project_cards, project_detail};
use std::io::{self, Write};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::errors::{map_catalog_load_error, map_other_error};
use crate::handlers::{Controller, Event};
use crate::operations::CatalogSource;
use crate::state::AppState;
use crate::ui::{render_facets, render_results, render_view, show_error};

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let source = CatalogSource::new(&cli.file, cli.schema.clone());
    let state = match AppState::load(source, cli.search_options()) {
        Ok(state) => state,
        Err(error) => {
            let (title, message, details) = map_catalog_load_error(&error, &cli.file);
            exit_with_error(&title, &message, &details);
        }
    };

    if let Err(error) = run(&cli, Controller::new(state)) {
        let (title, message, details) = map_other_error(&error);
        exit_with_error(&title, &message, &details);
    }
}

fn exit_with_error(title: &str, message: &str, details: &str) -> ! {
    tracing::error!(title, message, "shoebox failed");
    let _ = show_error(&mut io::stderr(), title, message, details);
    process::exit(1);
}

fn run(cli: &Cli, mut controller: Controller) -> anyhow::Result<()> {
    controller.state.set_filters(cli.filter_state()?);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.interactive {
        let stdin = io::stdin();
        return repl::run_repl(stdin.lock(), &mut out, &mut controller);
    }

    if cli.list_facets {
        if cli.json {
            serde_json::to_writer_pretty(&mut out, &controller.state.facets)?;
            writeln!(out)?;
        } else {
            render_facets(&mut out, &controller.state)?;
        }
        return Ok(());
    }

    if let Some(ref id) = cli.show {
        controller.dispatch(Event::OpenItem(id.clone()));
        if !controller.ui.is_open() {
            anyhow::bail!("No item with id '{}' in {}", id, cli.file.display());
        }

        if cli.json {
            let item = controller
                .state
                .get_item(id)
                .context("Opened item vanished from the catalog")?;
            serde_json::to_writer_pretty(&mut out, &project_detail(item))?;
            writeln!(out)?;
        } else {
            render_view(&mut out, &controller)?;
        }
        return Ok(());
    }

    if cli.json {
        let summary = project_cards(&controller.state.visible_items());
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
    } else {
        render_results(&mut out, &controller.state)?;
    }

    Ok(())
}
