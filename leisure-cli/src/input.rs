//! Loading catalog and feedback files, and writing reports.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use leisure_core::{ActivityId, Catalog, CatalogRecord, UserFeedback};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::CliError;

/// On-disk shape of a feedback file.
///
/// Entries stay loose so one malformed id cannot discard the rest.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FeedbackFile {
    pub(crate) liked: Vec<Value>,
    pub(crate) disliked: Vec<Value>,
}

impl From<FeedbackFile> for UserFeedback {
    fn from(file: FeedbackFile) -> Self {
        let liked = activity_ids("liked", file.liked);
        let disliked = activity_ids("disliked", file.disliked);
        Self::from_lists(&liked, &disliked)
    }
}

/// Keep the entries that are non-negative integers, warning about the rest.
fn activity_ids(list: &str, entries: Vec<Value>) -> Vec<ActivityId> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let id = entry.as_u64();
            if id.is_none() {
                log::warn!("Skipping {list} feedback entry {entry}: not an activity id");
            }
            id
        })
        .collect()
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match leisure_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn read_input(path: &Utf8Path) -> Result<String, CliError> {
    leisure_fs::read_utf8_file(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON array of catalog records.
///
/// Unusable records are skipped with a warning by
/// [`Catalog::from_records`].
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Catalog, CliError> {
    let payload = read_input(path)?;
    let records: Vec<CatalogRecord> =
        serde_json::from_str(&payload).map_err(|source| CliError::ParseCatalog {
            path: path.to_path_buf(),
            source,
        })?;
    let total = records.len();
    let catalog = Catalog::from_records(records).map_err(|source| CliError::InvalidCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded {} of {total} catalog records from {path}", catalog.len());
    Ok(catalog)
}

/// Load a `{"liked": [..], "disliked": [..]}` feedback file.
///
/// Entries that are not activity ids are skipped with a warning. Only a file
/// that is not a JSON object of lists fails.
pub(crate) fn load_feedback(path: &Utf8Path) -> Result<UserFeedback, CliError> {
    let payload = read_input(path)?;
    let file: FeedbackFile =
        serde_json::from_str(&payload).map_err(|source| CliError::ParseFeedback {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(file.into())
}

/// Serialise `report` as pretty JSON to `output`, or to `writer` when no
/// output path is configured.
pub(crate) fn write_report<T: Serialize>(
    report: &T,
    output: Option<&Utf8PathBuf>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    payload.push('\n');
    match output {
        Some(path) => {
            leisure_fs::write_utf8_file(path, &payload).map_err(|source| {
                CliError::WriteReportFile {
                    path: path.clone(),
                    source,
                }
            })
        }
        None => writer
            .write_all(payload.as_bytes())
            .map_err(CliError::WriteOutput),
    }
}
