use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::listing::{Listing, ListingMode};

/// The user's locally saved listings, split into jobs and internships.
///
/// Persisted as one JSON blob; an item existing in either list is the sole
/// signal that a listing has been added (drives card highlight state).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Portfolio {
    pub jobs: Vec<SavedItem>,
    pub internships: Vec<SavedItem>,
}

impl Portfolio {
    pub fn list(&self, mode: ListingMode) -> &[SavedItem] {
        match mode {
            ListingMode::Jobs => &self.jobs,
            ListingMode::Internships => &self.internships,
        }
    }

    pub fn list_mut(&mut self, mode: ListingMode) -> &mut Vec<SavedItem> {
        match mode {
            ListingMode::Jobs => &mut self.jobs,
            ListingMode::Internships => &mut self.internships,
        }
    }

    /// True when the id exists in either list.
    pub fn contains(&self, id: &str) -> bool {
        self.jobs.iter().chain(self.internships.iter()).any(|item| item.id == id)
    }

    /// All saved ids across both lists.
    pub fn ids(&self) -> Vec<String> {
        self.jobs
            .iter()
            .chain(self.internships.iter())
            .map(|item| item.id.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty() && self.internships.is_empty()
    }
}

/// A saved listing as kept in the portfolio: the display subset of the
/// listing fields plus the date it was added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedItem {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub salary: String,
    pub remote: bool,
    pub platform: String,
    pub posted_date: String,
    pub apply_link: Option<String>,
    pub added_date: DateTime<Utc>,
}

impl SavedItem {
    /// Captures the display fields of a listing at save time.
    pub fn from_listing(listing: &Listing, added_date: DateTime<Utc>) -> Self {
        SavedItem {
            id: listing.id.clone(),
            title: listing.title.clone(),
            company: listing.employer.clone(),
            location: listing.location_label(),
            employment_type: listing.employment_type.clone(),
            salary: listing.salary_label(),
            remote: listing.remote,
            platform: listing.platform.clone(),
            posted_date: listing.posted_label(),
            apply_link: listing.apply_link.clone(),
            added_date,
        }
    }
}
