use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// LeadStage
// ---------------------------------------------------------------------------

/// Pipeline phase a lead occupies.
///
/// Stage values read from data that match none of the five pipeline phases
/// are kept verbatim in [`LeadStage::Unrecognized`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeadStage {
    New,
    Contacted,
    Qualified,
    Negotiating,
    Closed,
    Unrecognized(String),
}

impl LeadStage {
    /// Parse a stage identifier. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "new" => LeadStage::New,
            "contacted" => LeadStage::Contacted,
            "qualified" => LeadStage::Qualified,
            "negotiating" => LeadStage::Negotiating,
            "closed" => LeadStage::Closed,
            other => LeadStage::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LeadStage::New => "new",
            LeadStage::Contacted => "contacted",
            LeadStage::Qualified => "qualified",
            LeadStage::Negotiating => "negotiating",
            LeadStage::Closed => "closed",
            LeadStage::Unrecognized(raw) => raw,
        }
    }

    /// Returns the board definition for this stage, or `None` when the stage
    /// has no column.
    pub fn definition(&self) -> Option<&'static StageDefinition> {
        STAGES.iter().find(|def| def.stage == *self)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, LeadStage::Unrecognized(_))
    }
}

impl From<String> for LeadStage {
    fn from(raw: String) -> Self {
        LeadStage::parse(&raw)
    }
}

impl From<LeadStage> for String {
    fn from(stage: LeadStage) -> Self {
        match stage {
            LeadStage::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for LeadStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Stage definitions
// ---------------------------------------------------------------------------

/// Visual grouping tag for a board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageTag {
    Gray,
    Blue,
    Yellow,
    Orange,
    Green,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageDefinition {
    pub stage: LeadStage,
    pub label: &'static str,
    pub tag: StageTag,
}

/// The five board columns, left to right.
pub static STAGES: [StageDefinition; 5] = [
    StageDefinition {
        stage: LeadStage::New,
        label: "New Leads",
        tag: StageTag::Gray,
    },
    StageDefinition {
        stage: LeadStage::Contacted,
        label: "Contacted",
        tag: StageTag::Blue,
    },
    StageDefinition {
        stage: LeadStage::Qualified,
        label: "Qualified",
        tag: StageTag::Yellow,
    },
    StageDefinition {
        stage: LeadStage::Negotiating,
        label: "Negotiating",
        tag: StageTag::Orange,
    },
    StageDefinition {
        stage: LeadStage::Closed,
        label: "Closed",
        tag: StageTag::Green,
    },
];

// ---------------------------------------------------------------------------
// Lead
// ---------------------------------------------------------------------------

/// A sales prospect tracked through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub source: String,
    /// Quality rating, nominally 0-100. Not clamped.
    pub score: i32,
    pub stage: LeadStage,
    /// Estimated deal value in currency units.
    pub value: f64,
    /// Human-readable recency, e.g. "2 hours ago".
    pub last_contact: String,
    #[serde(default)]
    pub notes: String,
}

impl Lead {
    pub fn new(name: impl Into<String>, stage: LeadStage) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            source: String::new(),
            score: 0,
            stage,
            value: 0.0,
            last_contact: String::new(),
            notes: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

/// The leads the board starts with when no seed file is configured.
pub fn sample_leads() -> Vec<Lead> {
    vec![
        Lead {
            id: "1".into(),
            name: "John Smith".into(),
            email: "john@email.com".into(),
            phone: "(555) 123-4567".into(),
            source: "Website".into(),
            score: 85,
            stage: LeadStage::Qualified,
            value: 450_000.0,
            last_contact: "2 hours ago".into(),
            notes: "Looking for 3BR in Fort Myers".into(),
        },
        Lead {
            id: "2".into(),
            name: "Sarah Johnson".into(),
            email: "sarah@email.com".into(),
            phone: "(555) 987-6543".into(),
            source: "Referral".into(),
            score: 92,
            stage: LeadStage::Negotiating,
            value: 325_000.0,
            last_contact: "1 day ago".into(),
            notes: "First-time buyer, pre-approved".into(),
        },
        Lead {
            id: "3".into(),
            name: "Mike Davis".into(),
            email: "mike@email.com".into(),
            phone: "(555) 456-7890".into(),
            source: "Open House".into(),
            score: 65,
            stage: LeadStage::Contacted,
            value: 280_000.0,
            last_contact: "3 days ago".into(),
            notes: "Interested in condos".into(),
        },
    ]
}
