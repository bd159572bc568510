use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use note_shelf_config::Config;
use note_shelf_engine::{NoteCatalog, NoteEntry, io, render_markdown, view};
use relative_path::RelativePathBuf;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "note-shelf")]
#[command(version, about = "Render category-organised notes as HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    note-shelf list                   List categories and notes
    note-shelf show queue             Print the viewer body for Queue.md
    note-shelf render README.md       Render any Markdown file")]
struct Cli {
    /// Config file (default: ~/.config/note-shelf/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print categories and their notes
    List,
    /// Print the viewer body HTML for a note
    Show {
        /// File name, slug or title; the first note when omitted
        identifier: Option<String>,

        /// Notes directory, overriding the config file
        #[arg(long, value_name = "DIR")]
        notes: Option<PathBuf>,
    },
    /// Render a Markdown file, or stdin, to HTML
    Render {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Print the category list HTML
    Categories,
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::List => {
            let config = require_config(cli.config.as_deref())?;
            let catalog = config.catalog();
            for category in catalog.categories() {
                println!("{}", category.title);
                for note in &category.notes {
                    println!("  {}  {}", note.slug(), note.title);
                }
            }

            match io::validate_notes_dir(&config.notes_path) {
                Ok(()) => {
                    let missing = uncatalogued_notes(&config.notes_path, &catalog)?;
                    if !missing.is_empty() {
                        println!("Not in catalog");
                        for filename in missing {
                            println!("  {filename}");
                        }
                    }
                }
                Err(e) => log::warn!(
                    "skipping scan of {}: {e}",
                    config.notes_path.display()
                ),
            }
        }
        Command::Show { identifier, notes } => {
            let config = load_config(cli.config.as_deref())?;
            return show(config, identifier.as_deref(), notes);
        }
        Command::Render { file } => {
            let source = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            println!("{}", render_markdown(&source));
        }
        Command::Categories => {
            let config = require_config(cli.config.as_deref())?;
            println!("{}", view::render_category_list(&config.catalog()));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn show(
    config: Option<Config>,
    identifier: Option<&str>,
    notes: Option<PathBuf>,
) -> Result<ExitCode> {
    let label = config
        .as_ref()
        .map_or(view::DEFAULT_LAST_UPDATED_LABEL, |c| {
            c.last_updated_label.as_str()
        })
        .to_string();

    let notes_path = match (notes, &config) {
        (Some(path), _) => path,
        (None, Some(config)) => config.notes_path.clone(),
        (None, None) => anyhow::bail!(
            "no notes directory: pass --notes or create a config file at {}",
            Config::config_path().display()
        ),
    };
    io::validate_notes_dir(&notes_path)
        .with_context(|| format!("notes path '{}' is invalid", notes_path.display()))?;

    let catalog = config.map(|c| c.catalog()).unwrap_or_default();
    let Some(note) = note_for(catalog.resolve(identifier), identifier) else {
        anyhow::bail!("nothing to show: the catalog is empty and no note was named");
    };
    log::info!("showing {} from {}", note.filename, notes_path.display());

    match io::load_note(&notes_path, &note.filename) {
        Ok(loaded) => {
            println!("{}", view::render_note_body(&loaded, &label));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::warn!("failed to load {}: {e}", note.filename);
            println!("{}", view::render_error(&note.title, &e.to_string()));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// The catalog match, or a note named directly by file name when the
/// catalog is empty.
fn note_for(resolved: Option<&NoteEntry>, identifier: Option<&str>) -> Option<NoteEntry> {
    if let Some(entry) = resolved {
        return Some(entry.clone());
    }
    let filename = identifier.map(str::trim).filter(|s| !s.is_empty())?;
    Some(NoteEntry::new(filename, filename))
}

/// Note files under `notes_root` that no catalog entry points at, as
/// `/`-separated paths relative to the root.
fn uncatalogued_notes(notes_root: &Path, catalog: &NoteCatalog) -> Result<Vec<String>> {
    let mut missing = Vec::new();
    for path in io::scan_note_files(notes_root)? {
        let relative = path.strip_prefix(notes_root).unwrap_or(path.as_path());
        let relative = RelativePathBuf::from_path(relative)
            .with_context(|| format!("unexpected note path {}", path.display()))?;
        if !catalog.notes().any(|n| n.filename == relative.as_str()) {
            missing.push(relative.into_string());
        }
    }
    Ok(missing)
}

fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(config) = &config {
        log::debug!(
            "config: {} categories, notes at {}",
            config.categories.len(),
            config.notes_path.display()
        );
    }
    Ok(config)
}

fn require_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path.map_or_else(Config::config_path, Path::to_path_buf);
    load_config(path)?.with_context(|| {
        format!(
            "no config file found; create one at {}",
            config_path.display()
        )
    })
}
