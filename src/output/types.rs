// src/output/types.rs
//! Deliveries planned for rendered documents and what became of them.

use crate::types::RenderedDocument;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a rendered document is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// A file, created along with its parent directories.
    File(PathBuf),
    Stdout,
}

impl fmt::Display for DeliveryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdout => write!(f, "stdout"),
        }
    }
}

/// One input bundle's rendering and the target it goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub source: PathBuf,
    pub target: DeliveryTarget,
    pub document: RenderedDocument,
}

/// Every delivery of a run, in input order.
#[derive(Debug, Clone, Default)]
pub struct OutputPlan {
    pub deliveries: Vec<Delivery>,
}

impl OutputPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delivery(
        mut self,
        source: impl AsRef<Path>,
        target: DeliveryTarget,
        document: RenderedDocument,
    ) -> Self {
        self.deliveries.push(Delivery {
            source: source.as_ref().to_path_buf(),
            target,
            document,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }
}

/// A document that reached its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivered {
    pub source: PathBuf,
    pub target: DeliveryTarget,
    pub bytes: usize,
}

/// A document that did not reach its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDelivery {
    pub source: PathBuf,
    pub target: DeliveryTarget,
    pub error: String,
}

impl fmt::Display for FailedDelivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.source.display(), self.target, self.error)
    }
}

/// Outcome of delivering a plan.
#[derive(Debug, Clone, Default)]
pub struct OutputReport {
    pub delivered: Vec<Delivered>,
    pub failed: Vec<FailedDelivery>,
}

impl OutputReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn bytes_written(&self) -> usize {
        self.delivered.iter().map(|d| d.bytes).sum()
    }

    /// The target the document read from `source` was delivered to.
    pub fn target_of(&self, source: &Path) -> Option<&DeliveryTarget> {
        self.delivered
            .iter()
            .find(|d| d.source == source)
            .map(|d| &d.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_tracks_each_source() {
        let report = OutputReport {
            delivered: vec![
                Delivered {
                    source: PathBuf::from("a.json"),
                    target: DeliveryTarget::File(PathBuf::from("out/a.md")),
                    bytes: 10,
                },
                Delivered {
                    source: PathBuf::from("b.json"),
                    target: DeliveryTarget::Stdout,
                    bytes: 5,
                },
            ],
            failed: Vec::new(),
        };

        assert!(report.is_success());
        assert_eq!(report.bytes_written(), 15);
        assert_eq!(
            report.target_of(Path::new("a.json")),
            Some(&DeliveryTarget::File(PathBuf::from("out/a.md")))
        );
        assert_eq!(report.target_of(Path::new("c.json")), None);
    }

    #[test]
    fn failure_names_source_and_target() {
        let failed = FailedDelivery {
            source: PathBuf::from("game.json"),
            target: DeliveryTarget::File(PathBuf::from("out/game.html")),
            error: "permission denied".to_string(),
        };
        assert_eq!(failed.to_string(), "game.json -> out/game.html: permission denied");
    }
}
