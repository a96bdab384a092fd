//! Transport-agnostic lead operations.
//!
//! Each function is generic over the repository traits so it can run against
//! the Diesel repository in production and a mock in tests.

use crate::domain::lead::{Lead, NewLead};
use crate::domain::types::{LeadId, LeadOwner, LeadStage};
use crate::dto::lead::{CreateLeadPayload, LeadsPage, ListLeadsQuery};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, total_pages};
use crate::repository::errors::RepositoryError;
use crate::repository::{LeadListQuery, LeadReader, LeadWriter};
use crate::services::{ServiceError, ServiceResult};

/// Parses an optional pagination parameter. Absent or blank values fall back
/// to the default; anything that is not an integer is a client error.
fn parse_index_param(raw: Option<&str>, default: usize) -> ServiceResult<usize> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(value) => value
            .parse::<usize>()
            .map_err(|_| ServiceError::InvalidParameter),
    }
}

/// Treats absent, empty, and whitespace-only filter strings as "no filter".
fn normalize_filter(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Returns the requested page of leads matching the conjunction of the
/// supplied filters, with the page-count metadata.
pub fn list_leads<R>(repo: &R, params: ListLeadsQuery) -> ServiceResult<LeadsPage>
where
    R: LeadReader + ?Sized,
{
    let page = parse_index_param(params.page.as_deref(), 1)?;
    let page = if page == 0 { 1 } else { page };
    let per_page = match parse_index_param(params.limit.as_deref(), DEFAULT_ITEMS_PER_PAGE)? {
        0 => DEFAULT_ITEMS_PER_PAGE,
        limit => limit,
    };

    let mut query = LeadListQuery::new().paginate(page, per_page);
    if let Some(source) = normalize_filter(params.source) {
        query = query.source(source);
    }
    if let Some(owner) = normalize_filter(params.owner) {
        query = query.owner(owner);
    }
    if let Some(search) = normalize_filter(params.query) {
        query = query.search(search);
    }

    let (total, leads) = repo.list_leads(query)?;

    Ok(LeadsPage {
        count: leads.len(),
        total_pages: total_pages(total, per_page),
        leads,
    })
}

/// Validates and persists a new lead with the default stage.
pub fn create_lead<R>(repo: &R, payload: CreateLeadPayload) -> ServiceResult<Lead>
where
    R: LeadWriter + ?Sized,
{
    let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());

    if !present(&payload.name) || !present(&payload.source) || !present(&payload.owner) {
        return Err(ServiceError::MissingField("name, source, owner".to_string()));
    }

    let new_lead = NewLead::try_new(
        payload.name.unwrap_or_default(),
        payload.source.unwrap_or_default(),
        payload.owner.unwrap_or_default(),
    )?;

    repo.create_lead(&new_lead).map_err(ServiceError::from)
}

/// Moves an existing lead to the given pipeline stage, refreshing its
/// `updated_at` timestamp.
pub fn set_lead_stage<R>(repo: &R, id: i32, stage: Option<String>) -> ServiceResult<Lead>
where
    R: LeadWriter + ?Sized,
{
    let stage = stage
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ServiceError::MissingField("stage".to_string()))?;
    let stage = LeadStage::new(stage)?;

    let id = LeadId::new(id).map_err(|_| ServiceError::NotFound)?;

    repo.set_lead_stage(id, &stage).map_err(|err| match err {
        RepositoryError::NotFound => ServiceError::NotFound,
        other => ServiceError::from(other),
    })
}

/// Reassigns an existing lead to the given owner, refreshing its
/// `updated_at` timestamp.
pub fn set_lead_owner<R>(repo: &R, id: i32, owner: Option<String>) -> ServiceResult<Lead>
where
    R: LeadWriter + ?Sized,
{
    let owner = owner
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ServiceError::MissingField("owner".to_string()))?;
    let owner = LeadOwner::new(owner)?;

    let id = LeadId::new(id).map_err(|_| ServiceError::NotFound)?;

    repo.set_lead_owner(id, &owner).map_err(|err| match err {
        RepositoryError::NotFound => ServiceError::NotFound,
        other => ServiceError::from(other),
    })
}
