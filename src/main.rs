use std::sync::{Arc, Mutex};

use clap::Parser;
use typeahead_tui::{
    tui,
    widget::{InputState, TypeAhead},
};

#[derive(Parser)]
#[command(name = "typeahead-tui")]
#[command(about = "Type-ahead suggestion widget demo")]
struct Cli {
    /// Static candidate list, comma separated
    #[arg(long, value_delimiter = ',')]
    list: Option<Vec<String>>,
    /// Remote endpoint returning a JSON array of suggestions
    #[arg(long)]
    source: Option<String>,
    /// Label field for object-shaped remote results
    #[arg(long, default_value = "name")]
    property: String,
    /// Style class for the active item
    #[arg(long, default_value = "highlight")]
    active_class: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // The TUI owns the terminal, so diagnostics go to a file.
    let log_file =
        std::fs::File::create("/tmp/typeahead-tui.log").expect("Failed to create log file");
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("typeahead_tui=info".parse().unwrap()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false)
        .init();

    let chosen: tui::SelectionSink = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&chosen);

    let mut builder = TypeAhead::builder()
        .input(InputState::default())
        .property(cli.property)
        .active_class(cli.active_class)
        .on_select(move |_, item| {
            if let Ok(mut slot) = sink.lock() {
                *slot = Some(item.label().to_string());
            }
        });
    if let Some(list) = cli.list {
        builder = builder.list(list);
    }
    if let Some(source) = cli.source {
        builder = builder.source(source);
    }

    let result = match builder.build() {
        Ok(widget) => tui::run(widget, chosen).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
