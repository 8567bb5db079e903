// src/main.rs

use anyhow::Context;
use chessdoc::constants::{DEFAULT_PAGE_TITLE, LOG_FILE_NAME};
use chessdoc::{
    deliver, measure_document, output_path_for, render_document, AppError, Block, ChessDocument,
    CommandLineInput, DeliveryTarget, DocumentComposer, DocumentDelivery, DocumentSource,
    OutputPlan, OutputReport, RenderConfig, RenderedDocument,
};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// Sets up logging configuration.
///
/// Console logs go to stderr so rendered documents can be piped from stdout.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join(LOG_FILE_NAME);
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the three-stage pipeline for every input: load → render → deliver.
fn execute_pipeline(config: &RenderConfig) -> Result<OutputReport, AppError> {
    let pipeline = ChessDocToOutput::new(config);

    let rendered = config
        .inputs
        .par_iter()
        .map(|input| {
            let document = pipeline.load(input)?;
            pipeline.log_document(input, &document)?;
            let title = document_title(&document, input);
            let rendered = pipeline.compose(&document, &title)?;
            Ok((input.as_path(), rendered))
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let report = pipeline.deliver(rendered)?;
    pipeline.report_completion(&report);
    Ok(report)
}

/// Title for a standalone page: the first headline, else the input's file stem.
fn document_title(document: &ChessDocument, input: &Path) -> String {
    document
        .content
        .blocks
        .iter()
        .find_map(|block| match block {
            Block::HeadLine(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
            _ => None,
        })
        .or_else(|| {
            input
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string())
}

/// Orchestrates loading, rendering and delivery of chess documents.
struct ChessDocToOutput<'a> {
    config: &'a RenderConfig,
}

impl<'a> ChessDocToOutput<'a> {
    fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// Logs what the fold will see in a loaded document.
    fn log_document(&self, input: &Path, document: &ChessDocument) -> Result<(), AppError> {
        let stats = measure_document(&document.content)?;
        log::info!(
            "{}: {} blocks, {} moves on {} lines ({} sub-variations), highest ply {}",
            input.display(),
            stats.blocks,
            stats.moves,
            stats.lines.len(),
            stats.branch_lines.len(),
            stats.highest_ply
        );
        log::debug!(
            "{}: {} headlines, {} paragraphs, {} boards, {} fens, {} code elements",
            input.display(),
            stats.headlines,
            stats.paragraphs,
            stats.boards,
            stats.fens,
            stats.code_elements
        );

        for line in &stats.lines {
            if document.positions.line(line).is_none() {
                log::debug!("{}: no positions for line '{}'", input.display(), line);
            }
        }
        Ok(())
    }

    /// Plans where each rendered document goes.
    fn plan_delivery(&self, rendered: Vec<(&Path, RenderedDocument)>) -> OutputPlan {
        let extension = self.config.format.extension();
        let writes_directory = self.config.writes_directory();

        rendered
            .into_iter()
            .fold(OutputPlan::new(), |plan, (input, document)| {
                let target = match &self.config.output {
                    Some(dir) if writes_directory => {
                        DeliveryTarget::File(output_path_for(input, dir, extension))
                    }
                    Some(path) => DeliveryTarget::File(path.clone()),
                    None => DeliveryTarget::Stdout,
                };
                plan.with_delivery(input, target, document)
            })
    }

    /// Reports completion to the user with delivery confirmations.
    fn report_completion(&self, report: &OutputReport) {
        for delivered in &report.delivered {
            if let DeliveryTarget::File(path) = &delivered.target {
                eprintln!("✓ {} saved to {}", delivered.source.display(), path.display());
            }
        }
    }
}

impl DocumentSource for ChessDocToOutput<'_> {
    fn load(&self, path: &Path) -> Result<ChessDocument, AppError> {
        log::info!("Loading document bundle {}", path.display());
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|source| AppError::JsonParseError {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl DocumentComposer for ChessDocToOutput<'_> {
    fn compose(&self, document: &ChessDocument, title: &str) -> Result<RenderedDocument, AppError> {
        let rendered = render_document(document, self.config, title)?;
        log::info!("Rendered '{}': {} bytes", title, rendered.len());
        Ok(rendered)
    }
}

impl DocumentDelivery for ChessDocToOutput<'_> {
    fn deliver(&self, rendered: Vec<(&Path, RenderedDocument)>) -> Result<OutputReport, AppError> {
        let report = deliver(self.plan_delivery(rendered))?;

        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failed.iter().map(ToString::to_string).collect(),
            });
        }

        Ok(report)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).context("failed to initialise logging")?;

    let config = RenderConfig::resolve(cli)?;

    let report = execute_pipeline(&config)?;
    log::info!(
        "Delivered {} documents ({} bytes)",
        report.delivered.len(),
        report.bytes_written()
    );

    Ok(())
}
