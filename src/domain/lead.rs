use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{LeadId, LeadName, LeadOwner, LeadSource, LeadStage, TypeConstraintError};

/// Stage assigned to every freshly created lead.
pub const DEFAULT_STAGE: &str = "New Lead";

/// A sales lead tracked through the pipeline.
///
/// `name` and `source` are immutable once created; `stage` and `owner` change
/// through the dedicated mutation operations, each of which also refreshes
/// `updated_at`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub name: LeadName,
    pub source: LeadSource,
    pub owner: LeadOwner,
    pub stage: LeadStage,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload for inserting a lead.
///
/// Construction validates all labels and stamps both timestamps with the same
/// instant so that `created_at == updated_at` holds on the stored record.
#[derive(Clone, Debug)]
pub struct NewLead {
    pub name: LeadName,
    pub source: LeadSource,
    pub owner: LeadOwner,
    pub stage: LeadStage,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewLead {
    pub fn try_new(
        name: impl Into<String>,
        source: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        let now = Utc::now().naive_utc();
        Ok(Self {
            name: LeadName::new(name)?,
            source: LeadSource::new(source)?,
            owner: LeadOwner::new(owner)?,
            stage: LeadStage::new(DEFAULT_STAGE)?,
            created_at: now,
            updated_at: now,
        })
    }
}
