//! Survey CSV ingestion and the engagement sync onto the fact store.

mod parser;

use crate::engagement::{compute_engagement, EngagementRecord};
use crate::facts::{FactStore, FactStoreError};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    #[error("failed to read survey export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid survey CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("could not record engagement: {0}")]
    FactStore(#[from] FactStoreError),
}

/// Loads a survey export and classifies every row.
pub struct SurveyImporter;

impl SurveyImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<EngagementRecord>, SurveyError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let records = Self::from_reader(file)?;
        info!(path = %path.display(), rows = records.len(), "survey loaded");
        Ok(records)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<EngagementRecord>, SurveyError> {
        let responses = parser::parse_responses(reader)?;
        Ok(compute_engagement(&responses))
    }
}

/// Outcome of writing survey engagement into the fact store.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SyncSummary {
    /// Rows that landed on an employee already on the org chart.
    pub updated: usize,
    /// Ids recorded from the survey alone.
    pub survey_only: Vec<String>,
}

/// Records every row's engagement. Later rows for the same id overwrite earlier
/// ones; ids missing from the org chart are kept as survey-only records.
pub fn sync_engagement<S>(
    store: &S,
    records: &[EngagementRecord],
) -> Result<SyncSummary, SurveyError>
where
    S: FactStore + ?Sized,
{
    let mut summary = SyncSummary::default();

    for record in records {
        if store.record_engagement(&record.employee_id, record.engagement)? {
            summary.updated += 1;
        } else {
            debug!(employee_id = %record.employee_id, "survey-only engagement recorded");
            summary.survey_only.push(record.employee_id.to_string());
        }
    }

    info!(
        updated = summary.updated,
        survey_only = summary.survey_only.len(),
        "survey engagement synced"
    );
    Ok(summary)
}
