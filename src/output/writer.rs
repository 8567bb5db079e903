// src/output/writer.rs
//! Executes output operations by performing actual I/O.

use super::types::*;
use crate::error::AppError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Delivers every planned document.
///
/// A failing delivery does not stop the others; check
/// [`OutputReport::is_success`].
pub fn deliver(plan: OutputPlan) -> Result<OutputReport, AppError> {
    let mut report = OutputReport::default();

    log::info!("Delivering {} documents", plan.len());

    for Delivery {
        source,
        target,
        document,
    } in plan.deliveries
    {
        match send(&target, document.as_str()) {
            Ok(bytes) => report.delivered.push(Delivered {
                source,
                target,
                bytes,
            }),
            Err(e) => {
                log::error!("Delivery of {} failed: {}", source.display(), e);
                report.failed.push(FailedDelivery {
                    source,
                    target,
                    error: e.to_string(),
                });
            }
        }
    }

    log::info!(
        "Delivery complete: {} succeeded, {} failed",
        report.delivered.len(),
        report.failed.len()
    );

    Ok(report)
}

fn send(target: &DeliveryTarget, content: &str) -> Result<usize, AppError> {
    match target {
        DeliveryTarget::File(path) => write_file(path, content),
        DeliveryTarget::Stdout => {
            print_to_stdout(content)?;
            Ok(content.len())
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<usize, AppError> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;

    log::info!("Wrote file: {}", path.display());
    Ok(content.len())
}

fn print_to_stdout(content: &str) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
