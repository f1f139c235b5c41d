//! Answer knowledge store
//!
//! A persisted mapping of (year, day, part) to a previously confirmed
//! solution and/or numeric bounds, used to verify freshly computed answers.
//! The on-disk form is a single JSON document, year -> day -> part (string
//! keys) -> entry; a missing file is a valid empty store, a malformed file is
//! fatal. Every record operation re-reads the file, merges the one entry
//! being updated and rewrites the whole document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from knowledge store I/O. These always surface to the caller:
/// silently misreporting answer correctness would be worse than a crash.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    /// Reading or writing the store file failed
    #[error("Knowledge file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but does not decode
    #[error("Malformed knowledge file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A recorded exact solution. Most answers are integers, but some puzzles
/// answer with a string, so the exact-match path stays string-typed while the
/// bounds stay numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recorded {
    Int(i64),
    Text(String),
}

impl fmt::Display for Recorded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recorded::Int(v) => write!(f, "{v}"),
            Recorded::Text(s) => f.write_str(s),
        }
    }
}

/// One stored entry. All fields optional; absent fields are written as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KnowledgeEntry {
    pub upper_bound: Option<i64>,
    pub lower_bound: Option<i64>,
    pub solution: Option<Recorded>,
}

/// The whole on-disk document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeFile(BTreeMap<String, BTreeMap<String, BTreeMap<String, KnowledgeEntry>>>);

impl KnowledgeFile {
    fn get(&self, year: u16, day: u8, part: u8) -> Option<&KnowledgeEntry> {
        self.0
            .get(&year.to_string())?
            .get(&day.to_string())?
            .get(&part.to_string())
    }

    fn insert(&mut self, year: u16, day: u8, part: u8, entry: KnowledgeEntry) {
        self.0
            .entry(year.to_string())
            .or_default()
            .entry(day.to_string())
            .or_default()
            .insert(part.to_string(), entry);
    }
}

/// Outcome of checking a candidate answer against the store
#[derive(Debug, Clone, PartialEq)]
pub enum CheckResult {
    /// Matches the recorded solution
    Correct,
    /// Differs from the recorded solution (reference attached)
    Incorrect(Recorded),
    /// At or above a recorded upper bound
    TooBig(i64),
    /// At or below a recorded lower bound
    TooSmall(i64),
    /// Nothing recorded that decides this candidate
    Unknown,
}

/// Fields to merge into an entry. `None` fields leave whatever is already
/// recorded untouched, so a record call can never null out earlier knowledge.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeUpdate {
    pub solution: Option<Recorded>,
    pub upper_bound: Option<i64>,
    pub lower_bound: Option<i64>,
}

/// The knowledge store service: a read-through in-memory snapshot over the
/// JSON file. Constructed once at process start and handed to the runner.
pub struct Knowledge {
    path: PathBuf,
    file: KnowledgeFile,
}

impl Knowledge {
    /// Load the store. A missing file yields an empty store; a file that
    /// exists but does not decode is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, KnowledgeError> {
        let path = path.into();
        let file = Self::read_file(&path)?;
        Ok(Self { path, file })
    }

    fn read_file(path: &Path) -> Result<KnowledgeFile, KnowledgeError> {
        if !path.exists() {
            return Ok(KnowledgeFile::default());
        }
        let text = fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| KnowledgeError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check a candidate answer for (year, day, part).
    ///
    /// A recorded exact solution is compared by string form, which keeps
    /// string-typed answers working. Only when no exact solution is recorded
    /// is the candidate parsed as an integer and compared against the bounds;
    /// a candidate that does not parse stays Unknown.
    pub fn check(&self, year: u16, day: u8, part: u8, candidate: &str) -> CheckResult {
        let Some(entry) = self.file.get(year, day, part) else {
            return CheckResult::Unknown;
        };

        if let Some(solution) = &entry.solution {
            return if candidate == solution.to_string() {
                CheckResult::Correct
            } else {
                CheckResult::Incorrect(solution.clone())
            };
        }

        let Ok(numeric) = candidate.parse::<i64>() else {
            return CheckResult::Unknown;
        };

        if let Some(upper) = entry.upper_bound
            && numeric >= upper
        {
            return CheckResult::TooBig(upper);
        }

        if let Some(lower) = entry.lower_bound
            && numeric <= lower
        {
            return CheckResult::TooSmall(lower);
        }

        CheckResult::Unknown
    }

    /// Merge `update` into the entry for (year, day, part) and persist.
    ///
    /// Reloads the current disk state first, then rewrites the whole file.
    /// Fields already populated are kept unless the update sets them.
    pub fn record(
        &mut self,
        year: u16,
        day: u8,
        part: u8,
        update: KnowledgeUpdate,
    ) -> Result<(), KnowledgeError> {
        let mut file = Self::read_file(&self.path)?;
        let previous = file.get(year, day, part).cloned().unwrap_or_default();

        let entry = KnowledgeEntry {
            upper_bound: update.upper_bound.or(previous.upper_bound),
            lower_bound: update.lower_bound.or(previous.lower_bound),
            solution: update.solution.or(previous.solution),
        };
        file.insert(year, day, part, entry);

        let text = serde_json::to_string_pretty(&file).map_err(|source| {
            KnowledgeError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, text).map_err(|source| KnowledgeError::Io {
            path: self.path.clone(),
            source,
        })?;

        self.file = file;
        Ok(())
    }

    /// Mark (year, day, part) as attempted this run without claiming an
    /// answer. Never clobbers recorded fields.
    pub fn record_attempt(&mut self, year: u16, day: u8, part: u8) -> Result<(), KnowledgeError> {
        self.record(year, day, part, KnowledgeUpdate::default())
    }

    /// Whether any entry exists for (year, day, part)
    pub fn contains(&self, year: u16, day: u8, part: u8) -> bool {
        self.file.get(year, day, part).is_some()
    }
}
