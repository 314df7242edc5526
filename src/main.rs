use clap::Parser;
use quick_links::parsers::Parser as ImportParser;
use quick_links::render::render_view;
use quick_links::storage::FileStore;
use quick_links::{
    AddRequest, Command, ExportRequest, NewBookmark, QuickLinks, Session, ToggleRequest,
    shell,
};
use std::error::Error;
use std::path::Path;
use url::Url;

mod args;
use args::{Args, CommandArg};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut app = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from file: {}", path.display());
            QuickLinks::default().with_config_file(path)?
        }
        None => QuickLinks::default(),
    };
    if let Some(source) = args.source {
        app = app.with_source(source);
    }
    if let Some(data_dir) = args.data_dir {
        app = app.with_data_dir(data_dir);
    }

    // The only asynchronous step: everything after this runs to completion in order
    let mut session = app.open().await;
    let export_file = app.config().export_file.clone();

    let command = match args.command.unwrap_or(CommandArg::List { query: None }) {
        CommandArg::List { query } => Command::QueryChanged(query.unwrap_or_default()),
        CommandArg::Pin { url } => Command::TogglePin(ToggleRequest { url }),
        CommandArg::Add {
            title,
            url,
            description,
            tags,
        } => {
            let mut candidate = NewBookmark::new(title, url).with_tags(tags);
            if let Some(description) = description {
                candidate = candidate.with_description(description);
            }
            Command::Add(AddRequest(candidate))
        }
        CommandArg::Export { path } => Command::Export(ExportRequest {
            path: path.unwrap_or_else(|| export_file.into()),
        }),
        CommandArg::Import { path, base } => {
            let base = base.as_deref().map(Url::parse).transpose()?;
            import(&mut session, &path, base.as_ref())?;
            Command::QueryChanged(String::new())
        }
        CommandArg::Clear => Command::Clear,
        CommandArg::Shell => {
            let stdin = std::io::stdin();
            shell::run(&mut session, stdin.lock(), std::io::stdout(), &export_file)?;
            return Ok(());
        }
    };

    let view = session.handle(command)?;
    print!("{}", render_view(&view, &session.take_notices()));

    Ok(())
}

/// Add every candidate found in an import file, skipping invalid ones
fn import(
    session: &mut Session<FileStore>,
    path: &Path,
    base: Option<&Url>,
) -> Result<(), Box<dyn Error>> {
    let content = std::fs::read_to_string(path)?;
    let candidates = ImportParser::parse_import_from_path(&content, path, base)?;
    ::log::info!("Importing {} bookmarks from {}", candidates.len(), path.display());

    let mut added = 0;
    for candidate in candidates {
        match session.handle(Command::Add(AddRequest(candidate))) {
            Ok(_) => added += 1,
            Err(e) => ::log::warn!("Skipping imported bookmark: {}", e),
        }
    }

    println!("Imported {} bookmarks from {}", added, path.display());
    Ok(())
}
