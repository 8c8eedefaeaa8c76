//! Per-source outcomes collected over one run.

use std::fmt;
use std::path::PathBuf;

use crate::image::AssetError;

/// What happened to one source.
#[derive(Debug)]
pub enum SourceOutcome {
    /// Every output was written.
    Completed { outputs: Vec<PathBuf> },
    /// Nothing exists at the source path; nothing was written.
    Missing,
    /// Decoding, transforming or writing failed part way.
    Failed {
        #[allow(dead_code)]
        error: AssetError,
    },
}

/// Outcome of one source, with enough context to print it.
#[derive(Debug)]
pub struct SourceReport {
    pub name: &'static str,
    pub path: PathBuf,
    pub outcome: SourceOutcome,
}

/// Outcomes of every source attempted in a run, in processing order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub sources: Vec<SourceReport>,
    /// Whether icon sources went through background removal.
    pub background_removed: bool,
}

impl RunReport {
    pub fn new(background_removed: bool) -> Self {
        Self {
            sources: Vec::new(),
            background_removed,
        }
    }

    pub fn push(&mut self, report: SourceReport) {
        self.sources.push(report);
    }

    pub fn completed_count(&self) -> usize {
        self.count(|o| matches!(o, SourceOutcome::Completed { .. }))
    }

    pub fn missing_count(&self) -> usize {
        self.count(|o| matches!(o, SourceOutcome::Missing))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, SourceOutcome::Failed { .. }))
    }

    /// Total files written, masters included.
    pub fn output_count(&self) -> usize {
        self.sources
            .iter()
            .map(|s| match &s.outcome {
                SourceOutcome::Completed { outputs } => outputs.len(),
                _ => 0,
            })
            .sum()
    }

    /// Look up a source by name.
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&SourceReport> {
        self.sources.iter().find(|s| s.name == name)
    }

    fn count(&self, pred: impl Fn(&SourceOutcome) -> bool) -> usize {
        self.sources.iter().filter(|s| pred(&s.outcome)).count()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outputs = self.output_count();
        let completed = self.completed_count();
        write!(
            f,
            "{} file{} from {} source{}",
            outputs,
            plural_s(outputs),
            completed,
            plural_s(completed)
        )?;

        let missing = self.missing_count();
        let failed = self.failed_count();
        if missing > 0 {
            write!(f, ", {missing} missing")?;
        }
        if failed > 0 {
            write!(f, ", {failed} failed")?;
        }
        if !self.background_removed {
            write!(f, " (backgrounds kept)")?;
        }
        Ok(())
    }
}

#[inline]
fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
