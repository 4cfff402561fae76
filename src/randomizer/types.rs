//! Request and result types
//!
//! Field names serialize in camelCase so a presentation layer can consume the
//! result directly:
//!
//! ```json
//! { "sequence": [{ "treatment": "A", "blockIndex": 0, "subjectIndex": 0 }],
//!   "targetSampleSize": 25, "actualAllocationSize": 30, "numBlocks": 5,
//!   "blockSize": 6, "numTreatments": 3, "warning": "..." }
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

use super::error::GenerationError;

/// Number of symbols in the treatment alphabet (A-Z)
pub const ALPHABET_SIZE: usize = 26;

/// Parameters for one generation call
///
/// Fields are signed so that out-of-range input (zero, negative) reaches
/// validation and is reported as data instead of failing at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub target_sample_size: i64,
    pub block_size: i64,
    pub num_treatments: i64,
}

impl GenerationRequest {
    pub fn new(target_sample_size: i64, block_size: i64, num_treatments: i64) -> Self {
        Self {
            target_sample_size,
            block_size,
            num_treatments,
        }
    }
}

/// Treatment label: the k-th letter of the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TreatmentLabel(u8);

impl TreatmentLabel {
    /// Label for the zero-based position `index`
    ///
    /// Returns `None` past the end of the alphabet.
    pub fn new(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Zero-based position in the alphabet
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// The first `count` labels in order, capped at the alphabet size
    pub fn first(count: usize) -> Vec<TreatmentLabel> {
        (0..count.min(ALPHABET_SIZE)).filter_map(TreatmentLabel::new).collect()
    }
}

impl fmt::Display for TreatmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for TreatmentLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One subject's assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub treatment: TreatmentLabel,
    /// Zero-based block this subject belongs to
    pub block_index: usize,
    /// Zero-based position in the whole sequence
    pub subject_index: usize,
}

/// Successful generation: the sequence plus the numbers it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub sequence: Vec<Assignment>,
    pub target_sample_size: usize,
    /// `num_blocks * block_size`, at least `target_sample_size`
    pub actual_allocation_size: usize,
    pub num_blocks: usize,
    pub block_size: usize,
    pub num_treatments: usize,
    /// Present only when the allocation was rounded up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl Allocation {
    /// Iterate blocks in order, each a slice of `block_size` assignments
    pub fn blocks(&self) -> impl Iterator<Item = &[Assignment]> {
        self.sequence.chunks(self.block_size.max(1))
    }

    /// Treatment labels used by this allocation, in order
    pub fn labels(&self) -> Vec<TreatmentLabel> {
        TreatmentLabel::first(self.num_treatments)
    }

    /// Whether the allocation was rounded up from the target
    pub fn is_adjusted(&self) -> bool {
        self.actual_allocation_size != self.target_sample_size
    }

    /// Number of subjects assigned to each label, in label order
    pub fn treatment_totals(&self) -> Vec<(TreatmentLabel, usize)> {
        let mut counts = vec![0usize; self.num_treatments];
        for assignment in &self.sequence {
            if let Some(count) = counts.get_mut(assignment.treatment.index()) {
                *count += 1;
            }
        }
        self.labels().into_iter().zip(counts).collect()
    }
}

/// Failure payload in the result shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// Always empty; no partial results
    pub sequence: Vec<Assignment>,
    pub error: String,
    pub kind: &'static str,
}

impl From<GenerationError> for Failure {
    fn from(err: GenerationError) -> Self {
        Self {
            sequence: Vec::new(),
            error: err.to_string(),
            kind: err.kind(),
        }
    }
}

/// Outcome handed to the presentation layer: success or failure, never both
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Success(Allocation),
    Failure(Failure),
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success(_))
    }

    pub fn allocation(&self) -> Option<&Allocation> {
        match self {
            GenerationResult::Success(allocation) => Some(allocation),
            GenerationResult::Failure(_) => None,
        }
    }

    /// Assignments; empty on failure
    pub fn sequence(&self) -> &[Assignment] {
        match self {
            GenerationResult::Success(allocation) => &allocation.sequence,
            GenerationResult::Failure(failure) => &failure.sequence,
        }
    }

    /// Blocking error message, if generation failed
    pub fn error(&self) -> Option<&str> {
        match self {
            GenerationResult::Success(_) => None,
            GenerationResult::Failure(failure) => Some(&failure.error),
        }
    }

    /// Non-blocking rounding annotation, if any
    pub fn warning(&self) -> Option<&str> {
        self.allocation().and_then(|a| a.warning.as_deref())
    }
}

impl From<Result<Allocation, GenerationError>> for GenerationResult {
    fn from(result: Result<Allocation, GenerationError>) -> Self {
        match result {
            Ok(allocation) => GenerationResult::Success(allocation),
            Err(err) => GenerationResult::Failure(err.into()),
        }
    }
}
