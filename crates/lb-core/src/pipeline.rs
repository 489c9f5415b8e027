//! Board view model: leads partitioned into stage columns plus the four
//! headline aggregates.
//!
//! Everything here is a pure function of the lead slice and is recomputed on
//! every read. Nothing is cached.

use serde::Serialize;

use crate::store::LeadStore;
use crate::types::{Lead, LeadStage, StageDefinition, STAGES};

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

/// One board column: a stage definition and the leads currently in it.
#[derive(Debug, Clone)]
pub struct StageColumn<'a> {
    pub definition: &'static StageDefinition,
    pub leads: Vec<&'a Lead>,
}

impl StageColumn<'_> {
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

/// Partition `leads` into the five board columns, preserving collection order
/// within each column. Leads with an unrecognized stage land in no column.
pub fn group_by_stage(leads: &[Lead]) -> Vec<StageColumn<'_>> {
    STAGES
        .iter()
        .map(|definition| StageColumn {
            definition,
            leads: leads.iter().filter(|l| l.stage == definition.stage).collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStats {
    /// Every lead, whatever its stage.
    pub total: usize,
    /// Leads in `qualified` or `negotiating`.
    pub qualified: usize,
    pub total_value: f64,
    /// Mean score rounded half-up; 0 for an empty collection.
    pub avg_score: i64,
}

impl PipelineStats {
    pub fn compute(leads: &[Lead]) -> Self {
        let qualified = leads
            .iter()
            .filter(|l| matches!(l.stage, LeadStage::Qualified | LeadStage::Negotiating))
            .count();
        // Starts at +0.0 so an empty board never totals -0.
        let total_value = leads.iter().fold(0.0, |acc, l| acc + l.value);
        let score_sum: i64 = leads.iter().map(|l| i64::from(l.score)).sum();

        Self {
            total: leads.len(),
            qualified,
            total_value,
            avg_score: rounded_mean(score_sum, leads.len()),
        }
    }
}

/// `round(sum / count)` with halves rounded toward positive infinity, done in
/// integer arithmetic. An empty collection averages to 0.
fn rounded_mean(sum: i64, count: usize) -> i64 {
    if count == 0 {
        return 0;
    }
    let n = count as i64;
    (2 * sum + n).div_euclid(2 * n)
}

// ---------------------------------------------------------------------------
// PipelineView
// ---------------------------------------------------------------------------

/// Columns and aggregates derived together from one store snapshot.
#[derive(Debug, Clone)]
pub struct PipelineView<'a> {
    pub columns: Vec<StageColumn<'a>>,
    pub stats: PipelineStats,
}

impl<'a> PipelineView<'a> {
    pub fn derive(store: &'a LeadStore) -> Self {
        Self::from_leads(store.leads())
    }

    pub fn from_leads(leads: &'a [Lead]) -> Self {
        Self {
            columns: group_by_stage(leads),
            stats: PipelineStats::compute(leads),
        }
    }

    /// Number of leads placed in some column.
    pub fn placed(&self) -> usize {
        self.columns.iter().map(StageColumn::len).sum()
    }
}
