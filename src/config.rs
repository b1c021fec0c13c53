use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// List and span syntaxes the pipeline renders.
/// Each field toggles one family of processors.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Extensions {
    // ===== Lists =====
    /// Auto-numbered `#.` items
    pub hash_lists: bool,
    /// Letter and roman numeral markers: `a.`, `B)`, `(iv)`
    pub fancy_lists: bool,
    /// `(@label)` items and their in-text references
    pub example_lists: bool,
    /// `{::LABEL}` items with `(#name)` placeholders and references
    pub custom_labels: bool,
    /// Term lines followed by `:` or `~` definitions
    pub definition_lists: bool,

    // ===== Inline =====
    /// `^text^`
    pub superscript: bool,
    /// `~text~`
    pub subscript: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            hash_lists: true,
            fancy_lists: true,
            example_lists: true,
            custom_labels: true,
            definition_lists: true,
            superscript: true,
            subscript: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub extensions: Extensions,
    /// Leave list markers that break Pandoc's rules as raw text
    pub strict_pandoc_mode: bool,
    /// Maximum characters of label content shown in tooltips
    pub tooltip_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: Extensions::default(),
            strict_pandoc_mode: false,
            tooltip_length: 50,
        }
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn strict_pandoc_mode(mut self, strict: bool) -> Self {
        self.config.strict_pandoc_mode = strict;
        self
    }

    pub fn tooltip_length(mut self, length: usize) -> Self {
        self.config.tooltip_length = length;
        self
    }

    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.config.extensions = extensions;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".listmark.toml", "listmark.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("listmark").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("listmark")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .listmark.toml, listmark.toml
/// 3) XDG: $XDG_CONFIG_HOME/listmark/config.toml or ~/.config/listmark/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir)
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    if let Some(p) = xdg_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
