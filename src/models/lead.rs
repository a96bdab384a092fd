use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::lead::{Lead as DomainLead, NewLead as DomainNewLead};
use crate::domain::types::{LeadId, LeadName, LeadOwner, LeadSource, LeadStage, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::leads)]
/// Diesel model for [`crate::domain::lead::Lead`].
pub struct Lead {
    pub id: i32,
    pub name: String,
    pub source: String,
    pub owner: String,
    pub stage: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::leads)]
/// Insertable form of [`Lead`].
pub struct NewLead<'a> {
    pub name: &'a str,
    pub source: &'a str,
    pub owner: &'a str,
    pub stage: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::leads)]
/// Changeset moving a lead to another pipeline stage.
pub struct UpdateLeadStage<'a> {
    pub stage: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::leads)]
/// Changeset reassigning a lead to another owner.
pub struct UpdateLeadOwner<'a> {
    pub owner: &'a str,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Lead> for DomainLead {
    type Error = TypeConstraintError;

    fn try_from(lead: Lead) -> Result<Self, Self::Error> {
        Ok(Self {
            id: LeadId::new(lead.id)?,
            name: LeadName::new(lead.name)?,
            source: LeadSource::new(lead.source)?,
            owner: LeadOwner::new(lead.owner)?,
            stage: LeadStage::new(lead.stage)?,
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewLead> for NewLead<'a> {
    fn from(lead: &'a DomainNewLead) -> Self {
        Self {
            name: lead.name.as_str(),
            source: lead.source.as_str(),
            owner: lead.owner.as_str(),
            stage: lead.stage.as_str(),
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        }
    }
}
