use serde::Serialize;

use crate::domain::lead::Lead;

/// Query parameters accepted by the lead listing service.
///
/// `page` and `limit` stay raw strings here: the listing service owns the
/// integer parse so that an unparseable value surfaces as its own error kind
/// rather than a transport-level rejection.
#[derive(Debug, Default)]
pub struct ListLeadsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub source: Option<String>,
    pub owner: Option<String>,
    pub query: Option<String>,
}

/// Payload for creating a lead. Fields are optional so the service can report
/// which required fields were left out.
#[derive(Debug, Default)]
pub struct CreateLeadPayload {
    pub name: Option<String>,
    pub source: Option<String>,
    pub owner: Option<String>,
}

/// One page of leads plus the metadata a client needs to render pagination.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadsPage {
    /// Leads on the requested page.
    pub leads: Vec<Lead>,
    /// Number of leads on this page (not the total match count).
    pub count: usize,
    /// Total number of pages matching the filter.
    pub total_pages: usize,
}
