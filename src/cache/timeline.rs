//! Per-step outcome log.

use serde::{Deserialize, Serialize};

use crate::common::Key;

/// Classification of one access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessResult {
    Hit,
    Miss,
}

impl AccessResult {
    #[inline]
    pub fn is_hit(self) -> bool {
        self == AccessResult::Hit
    }
}

/// What happened when one trace entry was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    /// Trace index of the processed entry.
    pub index: usize,

    /// Key requested at `index`.
    pub key: Key,

    pub result: AccessResult,

    /// Key pushed out to make room, if the miss hit a full cache.
    pub evicted: Option<Key>,
}

/// Append-only log of step outcomes, in trace order.
///
/// Entry `i` always describes trace index `i`, so the timeline length equals
/// the number of processed accesses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    steps: Vec<StepOutcome>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, outcome: StepOutcome) {
        debug_assert_eq!(outcome.index, self.steps.len());
        self.steps.push(outcome);
    }

    pub(crate) fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StepOutcome> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&StepOutcome> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepOutcome> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[StepOutcome] {
        &self.steps
    }

    /// Number of logged hits.
    pub fn hits(&self) -> usize {
        self.steps.iter().filter(|s| s.result.is_hit()).count()
    }

    /// Number of logged misses.
    pub fn misses(&self) -> usize {
        self.len() - self.hits()
    }

    /// Number of steps that evicted a key.
    pub fn evictions(&self) -> usize {
        self.steps.iter().filter(|s| s.evicted.is_some()).count()
    }

    /// One-line caption for a timeline chart, e.g. `Steps: 4  Hit 1 / Miss 3`.
    pub fn summary(&self) -> String {
        format!(
            "Steps: {}  Hit {} / Miss {}",
            self.len(),
            self.hits(),
            self.misses()
        )
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a StepOutcome;
    type IntoIter = std::slice::Iter<'a, StepOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
