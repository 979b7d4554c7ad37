//! Typed view models for SkillSwap.
//!
//! Everything here is a plain data projection of the domain types, the
//! boundary between normalization and markup. HTML rendering lives in
//! [`html`]; nothing in this module touches a template.

pub mod html;

use std::collections::HashSet;

use crate::types::listing::Listing;
use crate::types::platform::{Platform, PlatformStats};
use crate::types::portfolio::SavedItem;

/// Maximum description length on a job card before truncation.
const DESCRIPTION_SNIPPET_LEN: usize = 120;

/// The apply affordance on a card.
///
/// A listing without an apply link still shows the button (dimmed, and
/// explaining itself when clicked) rather than hiding the action.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyAction {
    Link(String),
    Unavailable,
}

impl ApplyAction {
    /// Message shown when an unavailable apply affordance is activated.
    pub const UNAVAILABLE_MESSAGE: &'static str = "Application link not available";

    fn from_link(link: Option<&str>) -> Self {
        match link {
            Some(url) if !url.is_empty() => ApplyAction::Link(url.to_string()),
            _ => ApplyAction::Unavailable,
        }
    }
}

/// One search-result card.
#[derive(Debug, Clone, PartialEq)]
pub struct JobCardView {
    pub id: String,
    pub title: String,
    pub employer: String,
    pub location: String,
    pub posted: String,
    pub employment_type: String,
    pub salary: String,
    /// "Remote" or "On-site".
    pub remote_label: &'static str,
    pub platform: String,
    pub description_snippet: String,
    pub apply: ApplyAction,
    pub saved: bool,
}

impl JobCardView {
    pub fn from_listing(listing: &Listing, saved: bool) -> Self {
        JobCardView {
            id: listing.id.clone(),
            title: listing.title.clone(),
            employer: listing.employer.clone(),
            location: listing.location_label(),
            posted: listing.posted_label(),
            employment_type: listing.employment_type.clone(),
            salary: listing.salary_label(),
            remote_label: if listing.remote { "Remote" } else { "On-site" },
            platform: listing.platform.clone(),
            description_snippet: truncate(&listing.description, DESCRIPTION_SNIPPET_LEN),
            apply: ApplyAction::from_link(listing.apply_link.as_deref()),
            saved,
        }
    }
}

/// The search-result area in one of its three states.
///
/// "All hidden" (results existed but every one was dismissed) renders a
/// different message from "no results".
#[derive(Debug, Clone, PartialEq)]
pub enum ListingsView {
    Cards(Vec<JobCardView>),
    AllHidden,
    NoResults,
}

/// Builds the card list for a result set, excluding hidden ids.
pub fn build_listings_view(
    listings: &[Listing],
    hidden_ids: &HashSet<String>,
    saved_ids: &HashSet<String>,
) -> ListingsView {
    if listings.is_empty() {
        return ListingsView::NoResults;
    }

    let cards: Vec<JobCardView> = listings
        .iter()
        .filter(|listing| !hidden_ids.contains(&listing.id))
        .map(|listing| JobCardView::from_listing(listing, saved_ids.contains(&listing.id)))
        .collect();

    if cards.is_empty() {
        ListingsView::AllHidden
    } else {
        ListingsView::Cards(cards)
    }
}

/// One saved-item card on the portfolio page.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioCardView {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted: String,
    pub employment_type: String,
    pub salary: String,
    pub remote_label: &'static str,
    pub platform: String,
    pub added: String,
    pub apply: ApplyAction,
}

impl PortfolioCardView {
    pub fn from_item(item: &SavedItem) -> Self {
        PortfolioCardView {
            id: item.id.clone(),
            title: item.title.clone(),
            company: item.company.clone(),
            location: item.location.clone(),
            posted: item.posted_date.clone(),
            employment_type: item.employment_type.clone(),
            salary: item.salary.clone(),
            remote_label: if item.remote { "Remote" } else { "On-site" },
            platform: item.platform.clone(),
            added: item.added_date.format("%b %-d, %Y").to_string(),
            apply: ApplyAction::from_link(item.apply_link.as_deref()),
        }
    }
}

/// One platform stats card.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformCardView {
    pub platform: Platform,
    pub display_name: &'static str,
    pub theme_color: &'static str,
    pub username: String,
    /// (field, value) rows in the platform's declared field order.
    pub rows: Vec<(String, String)>,
    pub connected: bool,
    /// "Connected" or "Connect".
    pub button_label: &'static str,
}

impl PlatformCardView {
    pub fn from_stats(platform: Platform, stats: &PlatformStats) -> Self {
        let config = platform.config();
        let connected = stats.is_connected();
        PlatformCardView {
            platform,
            display_name: config.display_name,
            theme_color: config.theme_color,
            username: stats.username.clone(),
            rows: config
                .fields
                .iter()
                .map(|field| (field.to_string(), stats.field(field).to_string()))
                .collect(),
            connected,
            button_label: if connected { "Connected" } else { "Connect" },
        }
    }
}

/// Truncates to `max_len` characters, appending an ellipsis when cut.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{}...", cut)
}
