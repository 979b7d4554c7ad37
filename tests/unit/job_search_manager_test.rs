//! Unit tests for the JobSearchManager: query composition, fetch
//! resolution with the sample fallback, save/hide actions, and the
//! payload-shape tolerant extraction.

use std::sync::Arc;

use skillswap::database::connection::Database;
use skillswap::managers::job_search_manager::JobSearchManager;
use skillswap::services::job_api::extract_listings;
use skillswap::services::local_store::{keys, LocalStore};
use skillswap::types::errors::JobApiError;
use skillswap::types::listing::{ListingMode, ListingSource, SearchFilters};
use skillswap::types::portfolio::Portfolio;
use skillswap::types::toast::ToastLevel;
use skillswap::views::ListingsView;

fn setup() -> (LocalStore, JobSearchManager) {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let store = LocalStore::new(Arc::new(db));
    let manager = JobSearchManager::offline(store.clone()).expect("manager init");
    (store, manager)
}

#[test]
fn test_build_query_composition() {
    let (_store, mut manager) = setup();

    let (query, location) = manager.build_query(&SearchFilters::default());
    assert_eq!(query, "developer jobs");
    assert_eq!(location, "india");

    let filters = SearchFilters {
        skill: Some("rust".to_string()),
        location: Some("Berlin".to_string()),
        platform: Some("LinkedIn".to_string()),
    };
    let (query, location) = manager.build_query(&filters);
    assert_eq!(query, "rust developer jobs in Berlin on LinkedIn");
    assert_eq!(location, "Berlin");

    manager.set_mode(ListingMode::Internships);
    let (query, _) = manager.build_query(&SearchFilters {
        skill: Some("python".to_string()),
        ..Default::default()
    });
    assert_eq!(query, "python internship");
}

/// A failed fetch resolves to the sample set, never a blank result area.
#[test]
fn test_fetch_error_falls_back_to_samples() {
    let (_store, manager) = setup();

    let outcome = manager.resolve_fetch(Err(JobApiError::NetworkError("down".to_string())));
    assert_eq!(outcome.source, ListingSource::Sample);
    assert!(!outcome.listings.is_empty());
    let toast = outcome.toast.expect("fallback should explain itself");
    assert_eq!(toast.level, ToastLevel::Warning);
}

/// An empty result list also falls back, with a distinct message.
#[test]
fn test_empty_result_falls_back_with_danger_toast() {
    let (_store, manager) = setup();

    let outcome = manager.resolve_fetch(Ok(Vec::new()));
    assert_eq!(outcome.source, ListingSource::Sample);
    assert!(!outcome.listings.is_empty());
    assert_eq!(outcome.toast.expect("toast").level, ToastLevel::Danger);
}

/// The fallback respects the jobs/internships toggle.
#[test]
fn test_fallback_filtered_by_mode() {
    let (_store, mut manager) = setup();

    let jobs = manager.fallback_listings();
    assert!(!jobs.is_empty());
    assert!(jobs.iter().all(|l| l.employment_type != "Internship"));

    manager.set_mode(ListingMode::Internships);
    let internships = manager.fallback_listings();
    assert!(!internships.is_empty());
    assert!(internships.iter().all(|l| l.employment_type == "Internship"));
}

#[test]
fn test_live_results_pass_through_normalized() {
    let (_store, manager) = setup();
    let payload = serde_json::json!({
        "jobs": [
            {"id": "j1", "title": "Dev", "company": "A"},
            {"id": "j2", "title": "Ops", "company": "B"}
        ]
    });

    let outcome = manager.resolve_fetch(Ok(extract_listings(&payload)));
    assert_eq!(outcome.source, ListingSource::Live);
    assert_eq!(outcome.listings.len(), 2);
    assert!(outcome.toast.is_none());
    assert_eq!(outcome.listings[0].id, "j1");
}

/// Extraction accepts all three payload shapes seen across revisions.
#[test]
fn test_extract_listings_payload_shapes() {
    let wrapped = serde_json::json!({"jobs": [{"id": "1"}]});
    let bare = serde_json::json!([{"id": "2"}]);
    let data = serde_json::json!({"data": [{"id": "3"}]});
    let neither = serde_json::json!({"message": "rate limit exceeded"});

    assert_eq!(extract_listings(&wrapped).len(), 1);
    assert_eq!(extract_listings(&bare).len(), 1);
    assert_eq!(extract_listings(&data).len(), 1);
    assert!(extract_listings(&neither).is_empty());
}

/// Saving adds to the mode's list; toggling again restores the prior state.
#[test]
fn test_toggle_save_roundtrip() {
    let (store, mut manager) = setup();
    let listing = manager.fallback_listings().remove(0);

    let before: Portfolio = store.get_or_default(keys::PORTFOLIO).unwrap();
    assert!(before.is_empty());

    manager.toggle_save(&listing).expect("add");
    assert!(manager.is_saved(&listing.id));
    let saved: Portfolio = store.get_or_default(keys::PORTFOLIO).unwrap();
    assert_eq!(saved.jobs.len(), 1);
    assert_eq!(saved.jobs[0].id, listing.id);
    assert_eq!(saved.jobs[0].title, listing.title);

    manager.toggle_save(&listing).expect("remove");
    assert!(!manager.is_saved(&listing.id));
    let after: Portfolio = store.get_or_default(keys::PORTFOLIO).unwrap();
    assert_eq!(after, before);
}

#[test]
fn test_internship_saves_land_in_internship_list() {
    let (store, mut manager) = setup();
    manager.set_mode(ListingMode::Internships);
    let listing = manager.fallback_listings().remove(0);

    manager.toggle_save(&listing).expect("add");
    let saved: Portfolio = store.get_or_default(keys::PORTFOLIO).unwrap();
    assert!(saved.jobs.is_empty());
    assert_eq!(saved.internships.len(), 1);
}

/// Hiding is idempotent: the card disappears and the persisted list holds
/// the id exactly once no matter how many times it is hidden.
#[test]
fn test_hide_is_idempotent_and_deduplicated() {
    let (store, mut manager) = setup();
    let listings = manager.fallback_listings();
    let id = listings[0].id.clone();

    manager.hide(&id).expect("first hide");
    manager.hide(&id).expect("second hide");
    manager.hide(&id).expect("third hide");

    assert!(manager.is_hidden(&id));
    let persisted: Vec<String> = store.get_or_default(keys::HIDDEN_JOBS).unwrap();
    assert_eq!(persisted.iter().filter(|h| *h == &id).count(), 1);

    match manager.listing_view(&listings) {
        ListingsView::Cards(cards) => {
            assert!(cards.iter().all(|card| card.id != id));
        }
        other => panic!("expected cards, got {:?}", other),
    }
}

/// Hiding every listing yields the distinct "all hidden" state, not the
/// "no results" state.
#[test]
fn test_all_hidden_view_state() {
    let (_store, mut manager) = setup();
    let listings = manager.fallback_listings();
    for listing in &listings {
        manager.hide(&listing.id).expect("hide");
    }

    assert_eq!(manager.listing_view(&listings), ListingsView::AllHidden);
    assert_eq!(manager.listing_view(&[]), ListingsView::NoResults);
}

/// Persisted saved/hidden sets are restored on construction.
#[test]
fn test_persisted_state_restored_on_construction() {
    let (store, mut manager) = setup();
    let listing = manager.fallback_listings().remove(0);
    manager.toggle_save(&listing).expect("save");
    manager.hide("gone-1").expect("hide");

    let reloaded = JobSearchManager::offline(store).expect("manager init");
    assert!(reloaded.is_saved(&listing.id));
    assert!(reloaded.is_hidden("gone-1"));
}
