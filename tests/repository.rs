use leadflow::domain::lead::{DEFAULT_STAGE, NewLead};
use leadflow::domain::types::{LeadId, LeadOwner, LeadStage};
use leadflow::repository::errors::RepositoryError;
use leadflow::repository::{DieselRepository, LeadListQuery, LeadReader, LeadWriter};

mod common;

fn seed_three_leads(repo: &DieselRepository) {
    for (name, source, owner) in [
        ("A", "web", "alice"),
        ("B", "web", "bob"),
        ("C", "email", "alice"),
    ] {
        repo.create_lead(&NewLead::try_new(name, source, owner).unwrap())
            .unwrap();
    }
}

#[test]
fn test_create_lead_defaults() {
    let test_db = common::TestDb::new("test_create_lead_defaults.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let created = repo
        .create_lead(&NewLead::try_new("Acme", "web", "alice").unwrap())
        .unwrap();

    assert_eq!(created.name.as_str(), "Acme");
    assert_eq!(created.stage.as_str(), DEFAULT_STAGE);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = repo.get_lead_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn test_list_filters_are_conjunctive() {
    let test_db = common::TestDb::new("test_list_filters_are_conjunctive.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed_three_leads(&repo);

    let (total, items) = repo.list_leads(LeadListQuery::new().source("web")).unwrap();
    assert_eq!(total, 2);
    let names: Vec<_> = items.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);

    let (total, items) = repo
        .list_leads(LeadListQuery::new().owner("alice"))
        .unwrap();
    assert_eq!(total, 2);
    let names: Vec<_> = items.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);

    let (total, items) = repo
        .list_leads(LeadListQuery::new().source("web").owner("alice"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name.as_str(), "A");
}

#[test]
fn test_list_filters_are_case_sensitive_and_exact() {
    let test_db = common::TestDb::new("test_list_filters_exact.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed_three_leads(&repo);

    let (total, _) = repo.list_leads(LeadListQuery::new().source("Web")).unwrap();
    assert_eq!(total, 0);

    let (total, _) = repo.list_leads(LeadListQuery::new().owner("ali")).unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_list_search_matches_name_substring() {
    let test_db = common::TestDb::new("test_list_search_substring.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    for name in ["Acme Corp", "Acme Labs", "Globex"] {
        repo.create_lead(&NewLead::try_new(name, "web", "alice").unwrap())
            .unwrap();
    }

    let (total, items) = repo.list_leads(LeadListQuery::new().search("cme")).unwrap();
    assert_eq!(total, 2);
    assert!(items.iter().all(|l| l.name.as_str().contains("cme")));

    let (total, _) = repo
        .list_leads(LeadListQuery::new().search("missing"))
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_list_pagination_bounds_page() {
    let test_db = common::TestDb::new("test_list_pagination_bounds_page.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed_three_leads(&repo);

    let (total, items) = repo
        .list_leads(LeadListQuery::new().paginate(2, 1))
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name.as_str(), "B");

    // Page past the end is empty but the total still counts every match.
    let (total, items) = repo
        .list_leads(LeadListQuery::new().paginate(4, 1))
        .unwrap();
    assert_eq!(total, 3);
    assert!(items.is_empty());
}

#[test]
fn test_set_stage_updates_record_and_timestamp() {
    let test_db = common::TestDb::new("test_set_stage_updates_record.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let created = repo
        .create_lead(&NewLead::try_new("Acme", "web", "alice").unwrap())
        .unwrap();

    let stage = LeadStage::new("Contacted").unwrap();
    let updated = repo.set_lead_stage(created.id, &stage).unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.stage.as_str(), "Contacted");
    assert_eq!(updated.owner, created.owner);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn test_set_owner_updates_record() {
    let test_db = common::TestDb::new("test_set_owner_updates_record.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let created = repo
        .create_lead(&NewLead::try_new("Acme", "web", "alice").unwrap())
        .unwrap();

    let owner = LeadOwner::new("bob").unwrap();
    let updated = repo.set_lead_owner(created.id, &owner).unwrap();

    assert_eq!(updated.owner.as_str(), "bob");
    assert_eq!(updated.stage, created.stage);
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn test_set_stage_unknown_id_is_not_found() {
    let test_db = common::TestDb::new("test_set_stage_unknown_id.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    seed_three_leads(&repo);

    let stage = LeadStage::new("Contacted").unwrap();
    let result = repo.set_lead_stage(LeadId::new(9999).unwrap(), &stage);
    assert!(matches!(result, Err(RepositoryError::NotFound)));

    // Table unchanged: nothing was created or mutated.
    let (total, items) = repo.list_leads(LeadListQuery::new()).unwrap();
    assert_eq!(total, 3);
    assert!(items.iter().all(|l| l.stage.as_str() == DEFAULT_STAGE));
}

#[test]
fn test_get_lead_by_id_missing_is_none() {
    let test_db = common::TestDb::new("test_get_lead_by_id_missing.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let lead = repo.get_lead_by_id(LeadId::new(42).unwrap()).unwrap();
    assert!(lead.is_none());
}

#[test]
fn test_ids_are_not_reused() {
    let test_db = common::TestDb::new("test_ids_are_not_reused.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let first = repo
        .create_lead(&NewLead::try_new("First", "web", "alice").unwrap())
        .unwrap();
    let second = repo
        .create_lead(&NewLead::try_new("Second", "web", "alice").unwrap())
        .unwrap();

    assert!(second.id.get() > first.id.get());
}
