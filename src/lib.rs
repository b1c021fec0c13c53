pub mod code_regions;
pub mod config;
pub mod document;
pub mod instruction;
pub mod labels;
pub mod markers;
pub mod pipeline;
pub mod placeholder;
pub mod state;
pub mod utils;
pub mod validator;

pub use config::Config;
pub use config::ConfigBuilder;
pub use document::Document;
pub use instruction::{Payload, RenderingInstruction, Widget};
pub use pipeline::{PassInput, ProcessingPipeline};
pub use state::{DocumentState, DocumentStateStore};
pub use validator::{LineValidator, NoValidation, StrictValidator};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs one annotation pass over `text` with the built-in processors.
///
/// Code regions are detected automatically and, when strict Pandoc mode is
/// on, lines breaking Pandoc's list rules are left unrendered. Numbering
/// state for `path` is created on first use and kept in `store`.
///
/// # Examples
///
/// ```rust
/// use listmark::{Config, DocumentStateStore, Widget};
///
/// let mut store = DocumentStateStore::new();
/// let out = listmark::process(&mut store, "notes.md", "#. one\n#. two", None, &Config::default());
/// let numbers: Vec<_> = out.iter().filter_map(|i| i.widget()).collect();
/// assert_eq!(numbers[1], &Widget::HashNumber { number: 2 });
/// ```
pub fn process(
    store: &mut DocumentStateStore,
    path: &str,
    text: &str,
    cursor: Option<usize>,
    config: &Config,
) -> Vec<RenderingInstruction> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let document = Document::new(text);
    let excluded = code_regions::detect(&document);
    let validator: &dyn LineValidator = if config.strict_pandoc_mode {
        &StrictValidator
    } else {
        &NoValidation
    };
    let invalid_lines = validator.invalid_lines(&document, &excluded);

    let input = PassInput {
        document: &document,
        cursor,
        excluded: &excluded,
        invalid_lines: &invalid_lines,
    };
    let pipeline = ProcessingPipeline::from_config(config);
    pipeline.process(store.get_or_create(path), &input, config)
}
