use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;

use listmark::{Config, Document, DocumentStateStore, StrictValidator, code_regions, validator};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = listmark::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }
    Ok(cfg)
}

fn display_name(file: &Option<PathBuf>) -> String {
    file.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string())
}

fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Annotate { file, cursor, path } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let id = path.unwrap_or_else(|| display_name(&file));

            let mut store = DocumentStateStore::new();
            let instructions = listmark::process(&mut store, &id, &input, cursor, &cfg);
            print_json(&instructions)
        }
        Commands::Labels { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let id = display_name(&file);

            let mut store = DocumentStateStore::new();
            listmark::process(&mut store, &id, &input, None, &cfg);
            match store.get(&id) {
                Some(state) => print_json(state),
                None => Ok(()),
            }
        }
        Commands::Validate { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let name = display_name(&file);

            let document = Document::new(input);
            let excluded = code_regions::detect(&document);
            let mut issues = StrictValidator.validate(&document, &excluded);
            validator::retain_enabled(&mut issues, &document, &cfg.extensions);

            if issues.is_empty() {
                if file.is_some() {
                    println!("No issues found");
                }
                return Ok(());
            }

            for issue in &issues {
                println!("{}:{}: {} [{}]", name, issue.line, issue.message, issue.code);
            }
            eprintln!("Found {} issue(s)", issues.len());
            std::process::exit(1);
        }
    }
}
