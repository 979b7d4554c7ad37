//! Job Search Manager for SkillSwap.
//!
//! Owns the search page state: the jobs/internships mode, the saved-id and
//! hidden-id sets, query composition, fetching with the built-in sample
//! fallback, and save/hide actions against the persisted portfolio.

use std::collections::HashSet;

use chrono::{Duration, Utc};
use log::warn;

use crate::services::job_api::JobApiClient;
use crate::services::local_store::{keys, LocalStore};
use crate::types::errors::{JobApiError, StoreError};
use crate::types::listing::{
    JobProvider, Listing, ListingMode, ListingSource, RawListing, SearchFilters,
};
use crate::types::portfolio::{Portfolio, SavedItem};
use crate::types::toast::Toast;
use crate::views::{build_listings_view, ListingsView};

/// Result of one search: the listings to show, where they came from, and an
/// optional toast explaining a fallback.
#[derive(Debug)]
pub struct SearchOutcome {
    pub listings: Vec<Listing>,
    pub source: ListingSource,
    pub toast: Option<Toast>,
}

/// Search-page manager. One instance per page load.
pub struct JobSearchManager {
    store: LocalStore,
    api: Option<JobApiClient>,
    mode: ListingMode,
    saved_ids: HashSet<String>,
    hidden_ids: HashSet<String>,
}

impl JobSearchManager {
    /// Creates a manager with a live API client, loading the persisted
    /// saved/hidden id sets.
    pub fn new(store: LocalStore, api: JobApiClient) -> Result<Self, StoreError> {
        Self::build(store, Some(api))
    }

    /// Creates a manager without an API client, so every fetch resolves to
    /// the sample fallback. Used by tests and the offline demo.
    pub fn offline(store: LocalStore) -> Result<Self, StoreError> {
        Self::build(store, None)
    }

    fn build(store: LocalStore, api: Option<JobApiClient>) -> Result<Self, StoreError> {
        let hidden_list: Vec<String> = store.get_or_default(keys::HIDDEN_JOBS)?;
        let portfolio: Portfolio = store.get_or_default(keys::PORTFOLIO)?;

        Ok(Self {
            store,
            api,
            mode: ListingMode::Jobs,
            saved_ids: portfolio.ids().into_iter().collect(),
            hidden_ids: hidden_list.into_iter().collect(),
        })
    }

    pub fn mode(&self) -> ListingMode {
        self.mode
    }

    /// Switches between jobs and internships. The caller re-runs the search.
    pub fn set_mode(&mut self, mode: ListingMode) {
        self.mode = mode;
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved_ids.contains(id)
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden_ids.contains(id)
    }

    /// Composes the free-text query and location from the filter controls.
    ///
    /// The location falls back to "india" when the filter is empty, matching
    /// the app's default market.
    pub fn build_query(&self, filters: &SearchFilters) -> (String, String) {
        let base = self.mode.default_query();
        let mut query = match filters.skill.as_deref().filter(|s| !s.is_empty()) {
            Some(skill) => format!("{} {}", skill, base),
            None => base.to_string(),
        };
        if let Some(location) = filters.location.as_deref().filter(|l| !l.is_empty()) {
            query.push_str(&format!(" in {}", location));
        }
        if let Some(platform) = filters.platform.as_deref().filter(|p| !p.is_empty()) {
            query.push_str(&format!(" on {}", platform));
        }

        let location = filters
            .location
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| "india".to_string());
        (query, location)
    }

    /// Runs a search from the filter controls.
    pub async fn search(&mut self, filters: &SearchFilters) -> SearchOutcome {
        let (query, location) = self.build_query(filters);
        self.fetch_jobs(&query, &location).await
    }

    /// Loads the default listings shown before any search.
    pub async fn load_default(&mut self) -> SearchOutcome {
        let query = match self.mode {
            ListingMode::Jobs => "software developer jobs",
            ListingMode::Internships => "software developer internship",
        };
        self.fetch_jobs(query, "india").await
    }

    /// Fetches listings for a query, resolving failures to the sample set.
    pub async fn fetch_jobs(&mut self, query: &str, location: &str) -> SearchOutcome {
        let result = match &self.api {
            Some(api) => api.search(query, location).await,
            None => Err(JobApiError::ClientError("no API client configured".to_string())),
        };
        self.resolve_fetch(result)
    }

    /// Turns a raw fetch result into the final outcome.
    ///
    /// Transport/parse failures and empty result lists both fall back to
    /// the built-in samples filtered by the current mode; the page never
    /// shows a blank container purely because the network failed.
    pub fn resolve_fetch(&self, result: Result<Vec<RawListing>, JobApiError>) -> SearchOutcome {
        match result {
            Ok(raw) if !raw.is_empty() => {
                let now = Utc::now();
                SearchOutcome {
                    listings: raw.iter().map(|r| Listing::from_raw(r, now)).collect(),
                    source: ListingSource::Live,
                    toast: None,
                }
            }
            Ok(_) => SearchOutcome {
                listings: self.fallback_listings(),
                source: ListingSource::Sample,
                toast: Some(Toast::danger("No jobs found for your search criteria.")),
            },
            Err(e) => {
                warn!("job fetch failed, showing samples: {}", e);
                SearchOutcome {
                    listings: self.fallback_listings(),
                    source: ListingSource::Sample,
                    toast: Some(Toast::warning("Failed to fetch jobs. Showing sample jobs.")),
                }
            }
        }
    }

    /// The built-in sample set, filtered by the current mode and normalized.
    pub fn fallback_listings(&self) -> Vec<Listing> {
        let now = Utc::now();
        sample_raw_listings()
            .into_iter()
            .filter(|raw| {
                let is_intern = raw.employment_type.as_deref() == Some("intern");
                match self.mode {
                    ListingMode::Internships => is_intern,
                    ListingMode::Jobs => !is_intern,
                }
            })
            .map(|raw| Listing::from_raw(&raw, now))
            .collect()
    }

    /// Builds the card view for a result set, excluding hidden listings.
    pub fn listing_view(&self, listings: &[Listing]) -> ListingsView {
        build_listings_view(listings, &self.hidden_ids, &self.saved_ids)
    }

    /// Adds the listing to the portfolio, or removes it if already saved.
    pub fn toggle_save(&mut self, listing: &Listing) -> Result<Toast, StoreError> {
        if self.saved_ids.contains(&listing.id) {
            self.remove_saved(&listing.id)
        } else {
            self.add_saved(listing)
        }
    }

    fn add_saved(&mut self, listing: &Listing) -> Result<Toast, StoreError> {
        let mut portfolio: Portfolio = self.store.get_or_default(keys::PORTFOLIO)?;
        portfolio
            .list_mut(self.mode)
            .push(SavedItem::from_listing(listing, Utc::now()));
        self.store.set(keys::PORTFOLIO, &portfolio)?;

        self.saved_ids.insert(listing.id.clone());
        Ok(Toast::success(format!(
            "{} added to portfolio!",
            self.mode.singular()
        )))
    }

    fn remove_saved(&mut self, id: &str) -> Result<Toast, StoreError> {
        let mut portfolio: Portfolio = self.store.get_or_default(keys::PORTFOLIO)?;
        portfolio.list_mut(self.mode).retain(|item| item.id != id);
        self.store.set(keys::PORTFOLIO, &portfolio)?;

        self.saved_ids.remove(id);
        Ok(Toast::info(format!(
            "{} removed from portfolio!",
            self.mode.singular()
        )))
    }

    /// Hides a listing from search results, immediately and permanently.
    ///
    /// Idempotent: hiding an already-hidden id changes nothing, and the
    /// persisted list holds each id at most once.
    pub fn hide(&mut self, id: &str) -> Result<Toast, StoreError> {
        self.hidden_ids.insert(id.to_string());

        let mut hidden_list: Vec<String> = self.store.get_or_default(keys::HIDDEN_JOBS)?;
        if !hidden_list.iter().any(|hidden| hidden == id) {
            hidden_list.push(id.to_string());
            self.store.set(keys::HIDDEN_JOBS, &hidden_list)?;
        }

        Ok(Toast::info("Job removed from search results"))
    }
}

/// Fixed sample listings shown when the live API is unavailable.
///
/// Shaped exactly like upstream records so they flow through the same
/// normalization path as live data.
fn sample_raw_listings() -> Vec<RawListing> {
    let now = Utc::now();
    let provider = |name: &str, url: &str| JobProvider {
        job_provider: Some(name.to_string()),
        url: Some(url.to_string()),
    };

    vec![
        RawListing {
            id: Some("sample-1".into()),
            title: Some("Frontend Developer".to_string()),
            company: Some("Tech Solutions Ltd".to_string()),
            description: Some(
                "We are looking for a skilled Frontend Developer to join our team. \
                 Experience with React, JavaScript, and modern web technologies required."
                    .to_string(),
            ),
            location: Some("Bangalore, India".to_string()),
            employment_type: Some("fulltime".to_string()),
            date_posted: Some(now.to_rfc3339()),
            salary_range: Some("₹5,00,000 - ₹8,00,000".to_string()),
            job_providers: vec![provider("LinkedIn", "https://example.com/apply/1")],
            ..Default::default()
        },
        RawListing {
            id: Some("sample-2".into()),
            title: Some("Full Stack Developer".to_string()),
            company: Some("Innovation Hub".to_string()),
            description: Some(
                "Join our dynamic team as a Full Stack Developer. Work with Node.js, \
                 React, MongoDB, and cloud technologies."
                    .to_string(),
            ),
            location: Some("Mumbai, India".to_string()),
            employment_type: Some("fulltime".to_string()),
            date_posted: Some((now - Duration::days(1)).to_rfc3339()),
            salary_range: Some("₹6,00,000 - ₹10,00,000".to_string()),
            job_providers: vec![provider("Naukri", "https://example.com/apply/2")],
            ..Default::default()
        },
        RawListing {
            id: Some("sample-3".into()),
            title: Some("Software Engineer Intern".to_string()),
            company: Some("StartupXYZ".to_string()),
            description: Some(
                "Great opportunity for students to gain hands-on experience in software \
                 development. Work on real projects with modern technologies."
                    .to_string(),
            ),
            location: Some("Remote, India".to_string()),
            employment_type: Some("intern".to_string()),
            date_posted: Some((now - Duration::days(2)).to_rfc3339()),
            salary_range: Some("₹15,000 - ₹25,000".to_string()),
            job_providers: vec![provider("Internshala", "https://example.com/apply/3")],
            ..Default::default()
        },
        RawListing {
            id: Some("sample-4".into()),
            title: Some("Backend Developer".to_string()),
            company: Some("DataCorp Solutions".to_string()),
            description: Some(
                "Looking for a Backend Developer with expertise in Python, Django, and \
                 database management. Great growth opportunities."
                    .to_string(),
            ),
            location: Some("Hyderabad, India".to_string()),
            employment_type: Some("fulltime".to_string()),
            date_posted: Some((now - Duration::days(3)).to_rfc3339()),
            salary_range: Some("₹7,00,000 - ₹12,00,000".to_string()),
            job_providers: vec![provider("Glassdoor", "https://example.com/apply/4")],
            ..Default::default()
        },
    ]
}
