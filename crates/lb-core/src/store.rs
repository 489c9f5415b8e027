use std::collections::HashSet;
use std::path::Path;

use crate::types::{sample_leads, Lead};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("duplicate lead id: {0}")]
    DuplicateId(String),
}

// ---------------------------------------------------------------------------
// LeadStore
// ---------------------------------------------------------------------------

/// In-memory lead collection for one session.
///
/// The store is never edited in place: [`LeadStore::with_lead`] returns a new
/// store and leaves the receiver untouched. Lead ids are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadStore {
    leads: Vec<Lead>,
}

impl LeadStore {
    /// Store holding the built-in sample leads.
    pub fn seeded() -> Self {
        Self {
            leads: sample_leads(),
        }
    }

    pub fn from_leads(leads: Vec<Lead>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(leads.len());
        for lead in &leads {
            if !seen.insert(lead.id.as_str()) {
                return Err(StoreError::DuplicateId(lead.id.clone()));
            }
        }
        Ok(Self { leads })
    }

    /// Load a JSON array of leads.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| StoreError::Io(e.to_string()))?;
        let leads: Vec<Lead> =
            serde_json::from_str(&text).map_err(|e| StoreError::Parse(e.to_string()))?;
        let store = Self::from_leads(leads)?;
        tracing::debug!(path = %path.display(), leads = store.len(), "loaded lead seed file");
        Ok(store)
    }

    /// Returns a new store with `lead` appended.
    pub fn with_lead(&self, lead: Lead) -> Result<Self, StoreError> {
        if self.get(&lead.id).is_some() {
            return Err(StoreError::DuplicateId(lead.id));
        }
        let mut leads = self.leads.clone();
        leads.push(lead);
        Ok(Self { leads })
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn get(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}
