// src/config.rs
use crate::constants::DEFAULT_CODE_SEPARATOR;
use crate::error::AppError;
use crate::types::ValidationError;
use clap::{Parser, ValueEnum};
use std::default::Default;
use std::fmt;
use std::path::PathBuf;

/// Representation a document is rendered into.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// HTML element tree, one element per document node
    #[default]
    Html,
    /// Plain markdown text
    Markdown,
    /// JSON dump of the folded constructor tree
    Tree,
}

impl OutputFormat {
    /// File extension used for outputs of this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "md",
            OutputFormat::Tree => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Tree => write!(f, "tree"),
        }
    }
}

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Document bundle JSON files (`{"content": [...], "positions": {...}}`)
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Output file for a single input, or output directory for several (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output representation
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Wrap HTML output in a complete page
    #[arg(long, default_value_t = false)]
    pub standalone: bool,

    /// Handlebars page template (.hbs) used with --standalone
    #[arg(long)]
    pub template: Option<String>,

    /// Text placed after every move group inside a paragraph
    #[arg(long, default_value = DEFAULT_CODE_SEPARATOR)]
    pub separator: String,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved rendering configuration, validated and ready to drive the pipeline.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub inputs: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub standalone: bool,
    pub template: Option<PathBuf>,
    pub separator: String,
}

impl RenderConfig {
    /// Resolves a complete configuration from CLI input.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        if cli.inputs.is_empty() {
            return Err(ValidationError::EmptyField("inputs").into());
        }

        let inputs: Vec<PathBuf> = cli.inputs.into_iter().map(PathBuf::from).collect();
        let output = cli.output.map(PathBuf::from);

        if let Some(path) = &output {
            if inputs.len() > 1 && path.is_file() {
                return Err(ValidationError::InvalidFilePath {
                    path: path.display().to_string(),
                    reason: "several inputs need an output directory".to_string(),
                }
                .into());
            }
        }

        let template = cli.template.map(PathBuf::from);
        if let Some(path) = &template {
            if path.extension().and_then(|ext| ext.to_str()) != Some("hbs") {
                return Err(ValidationError::InvalidTemplateName {
                    name: path.display().to_string(),
                    reason: "expected a .hbs file".to_string(),
                }
                .into());
            }
        }

        let standalone = cli.standalone || template.is_some();
        if standalone && cli.format != OutputFormat::Html {
            log::warn!(
                "--standalone only applies to html output; ignoring it for {}",
                cli.format
            );
        }

        Ok(RenderConfig {
            inputs,
            output,
            format: cli.format,
            standalone: standalone && cli.format == OutputFormat::Html,
            template,
            separator: cli.separator,
        })
    }

    /// Whether each input gets its own file inside the output directory.
    pub fn writes_directory(&self) -> bool {
        match &self.output {
            Some(path) => self.inputs.len() > 1 || path.is_dir(),
            None => false,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: None,
            format: OutputFormat::Html,
            standalone: false,
            template: None,
            separator: DEFAULT_CODE_SEPARATOR.to_string(),
        }
    }
}
