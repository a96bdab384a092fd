use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::lead::{Lead, NewLead};
use crate::domain::types::{LeadId, LeadOwner, LeadStage};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod errors;
pub mod lead;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Conjunctive filter over the leads table. Every populated field narrows the
/// result set; `None` fields are omitted from the predicate entirely.
#[derive(Debug, Clone, Default)]
pub struct LeadListQuery {
    /// Exact, case-sensitive match on the acquisition source.
    pub source: Option<String>,
    /// Exact, case-sensitive match on the responsible party.
    pub owner: Option<String>,
    /// Substring match against the lead name.
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl LeadListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait LeadReader {
    fn get_lead_by_id(&self, id: LeadId) -> RepositoryResult<Option<Lead>>;
    fn list_leads(&self, query: LeadListQuery) -> RepositoryResult<(usize, Vec<Lead>)>;
}

pub trait LeadWriter {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead>;
    fn set_lead_stage(&self, id: LeadId, stage: &LeadStage) -> RepositoryResult<Lead>;
    fn set_lead_owner(&self, id: LeadId, owner: &LeadOwner) -> RepositoryResult<Lead>;
}

/// Diesel-backed repository. Cheap to clone; each operation checks a
/// connection out of the pool and releases it on return.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> Result<DbConnection, RepositoryError> {
        Ok(get_connection(&self.pool)?)
    }
}
