use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "listmark")]
#[command(author, version)]
#[command(about = "Rendering annotations for Pandoc extended lists")]
#[command(
    long_about = "listmark scans Pandoc Markdown for fancy, hash, example, custom-label and \
    definition lists plus superscript and subscript spans, resolves label numbering and \
    cross-references, and prints the rendering instructions an editor would apply."
)]
#[command(after_help = "\
EXAMPLES:

    # Print rendering instructions for a file
    listmark annotate notes.md

    # Simulate the cursor sitting at byte 42
    listmark annotate --cursor 42 notes.md

    # Show example and custom label numbering
    listmark labels notes.md

    # Check strict Pandoc list rules
    listmark validate notes.md

CONFIGURATION:

listmark looks for configuration files in this order:
  1. Explicit --config path
  2. listmark.toml or .listmark.toml in current/parent directories
  3. ~/.config/listmark/config.toml (XDG)
  4. Built-in defaults

Example .listmark.toml:

    strict_pandoc_mode = true
    tooltip_length = 60

    [extensions]
    subscript = false")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, listmark will \
        search for .listmark.toml or listmark.toml in the current directory and its parents, \
        then fall back to ~/.config/listmark/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the rendering instructions for a document as JSON
    #[command(
        long_about = "Run one annotation pass over a document and print the resulting \
        rendering instructions as JSON, ordered by position. Offsets are byte offsets into \
        the input."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Annotate a file
    listmark annotate notes.md

    # Annotate stdin
    echo '#. first' | listmark annotate

    # Keep the marker under the cursor editable
    listmark annotate --cursor 3 notes.md")]
    Annotate {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Cursor position as a byte offset
        #[arg(long)]
        #[arg(
            long_help = "Byte offset of the editor cursor. Markers and references touching the \
            cursor are left as editable source instead of being replaced."
        )]
        cursor: Option<usize>,

        /// Document identity used for numbering state
        #[arg(long)]
        #[arg(
            long_help = "Identifier of the document for per-document numbering state. \
            Defaults to the input path, or <stdin>."
        )]
        path: Option<String>,
    },
    /// Print example and custom label registries as JSON
    #[command(
        long_about = "Scan a document for example items (`(@label)`) and custom-label items \
        (`{::LABEL}`) and print their numbering, first-occurrence content and duplicates, \
        together with the placeholder numbers assigned while scanning."
    )]
    Labels {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
    /// Check list lines against strict Pandoc rules
    #[command(
        long_about = "Report lines that break Pandoc's stricter list rules, such as a list \
        starting without a blank line before it. Markers of list families disabled under \
        [extensions] in the configuration are not reported. Exits with code 1 when issues \
        are found."
    )]
    Validate {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
}
