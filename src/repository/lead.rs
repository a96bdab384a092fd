//! Repository implementation for pipeline leads.

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::lead::{Lead, NewLead};
use crate::domain::types::{LeadId, LeadOwner, LeadStage};
use crate::models::lead::{
    Lead as DbLead, NewLead as DbNewLead, UpdateLeadOwner as DbUpdateLeadOwner,
    UpdateLeadStage as DbUpdateLeadStage,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, LeadListQuery, LeadReader, LeadWriter};
use crate::schema::leads;

/// Builds the conjunctive predicate for a listing query. Both the page read
/// and the count read go through this so they always agree on what matches.
fn filtered_leads(query: &LeadListQuery) -> leads::BoxedQuery<'_, Sqlite> {
    let mut filtered = leads::table.into_boxed();
    if let Some(source) = &query.source {
        filtered = filtered.filter(leads::source.eq(source));
    }
    if let Some(owner) = &query.owner {
        filtered = filtered.filter(leads::owner.eq(owner));
    }
    if let Some(search) = &query.search {
        filtered = filtered.filter(leads::name.like(format!("%{search}%")));
    }
    filtered
}

impl LeadReader for DieselRepository {
    fn get_lead_by_id(&self, id: LeadId) -> RepositoryResult<Option<Lead>> {
        let mut conn = self.conn()?;

        let lead = leads::table
            .find(id.get())
            .first::<DbLead>(&mut conn)
            .optional()?;

        lead.map(Lead::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_leads(&self, query: LeadListQuery) -> RepositoryResult<(usize, Vec<Lead>)> {
        let mut conn = self.conn()?;

        let total: i64 = filtered_leads(&query).count().get_result(&mut conn)?;

        let mut page_query = filtered_leads(&query).order(leads::id.asc());
        if let Some(pagination) = &query.pagination {
            let page = if pagination.page == 0 {
                1
            } else {
                pagination.page
            } as i64;
            let per_page = pagination.per_page as i64;
            page_query = page_query.limit(per_page).offset((page - 1) * per_page);
        }

        let items = page_query
            .load::<DbLead>(&mut conn)?
            .into_iter()
            .map(Lead::try_from)
            .collect::<Result<Vec<Lead>, _>>()?;

        Ok((total as usize, items))
    }
}

impl LeadWriter for DieselRepository {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead> {
        let mut conn = self.conn()?;

        let db_new_lead: DbNewLead = new_lead.into();
        let created = diesel::insert_into(leads::table)
            .values(&db_new_lead)
            .get_result::<DbLead>(&mut conn)?;

        Ok(Lead::try_from(created)?)
    }

    fn set_lead_stage(&self, id: LeadId, stage: &LeadStage) -> RepositoryResult<Lead> {
        let mut conn = self.conn()?;

        let changes = DbUpdateLeadStage {
            stage: stage.as_str(),
            updated_at: Utc::now().naive_utc(),
        };

        let updated = diesel::update(leads::table.find(id.get()))
            .set(&changes)
            .get_result::<DbLead>(&mut conn)?;

        Ok(Lead::try_from(updated)?)
    }

    fn set_lead_owner(&self, id: LeadId, owner: &LeadOwner) -> RepositoryResult<Lead> {
        let mut conn = self.conn()?;

        let changes = DbUpdateLeadOwner {
            owner: owner.as_str(),
            updated_at: Utc::now().naive_utc(),
        };

        let updated = diesel::update(leads::table.find(id.get()))
            .set(&changes)
            .get_result::<DbLead>(&mut conn)?;

        Ok(Lead::try_from(updated)?)
    }
}
