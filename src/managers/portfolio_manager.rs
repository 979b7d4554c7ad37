//! Portfolio Manager for SkillSwap.
//!
//! Renders the saved jobs/internships lists and integrates the six
//! coding-platform stat cards: connect prompts, loading/refreshing
//! placeholder states, persisted profiles, and per-error fallbacks. No
//! failure here is fatal to the page: every path resolves to a renderable
//! card plus a toast.

use log::warn;

use crate::services::local_store::{keys, LocalStore};
use crate::services::platform_stats::StatsClient;
use crate::types::errors::{PlatformError, PortfolioError, StoreError};
use crate::types::listing::ListingMode;
use crate::types::platform::{Platform, PlatformStats};
use crate::types::portfolio::Portfolio;
use crate::types::toast::Toast;

/// Result of a connect/refresh call: the stats to render and an optional
/// toast describing a failure.
#[derive(Debug)]
pub struct StatsOutcome {
    pub stats: PlatformStats,
    pub toast: Option<Toast>,
}

/// Portfolio-page manager. One instance per page load.
pub struct PortfolioManager {
    store: LocalStore,
    stats: StatsClient,
}

impl PortfolioManager {
    pub fn new(store: LocalStore) -> Result<Self, PlatformError> {
        Ok(Self {
            store,
            stats: StatsClient::new()?,
        })
    }

    /// Reads the persisted portfolio. A corrupt blob resets to empty.
    pub fn load(&self) -> Result<Portfolio, StoreError> {
        self.store.get_or_default(keys::PORTFOLIO)
    }

    /// Removes one saved item from the given list and persists the result.
    pub fn remove_item(&self, id: &str, mode: ListingMode) -> Result<Toast, PortfolioError> {
        let mut portfolio: Portfolio = self
            .store
            .get_or_default(keys::PORTFOLIO)
            .map_err(|e| PortfolioError::StoreError(e.to_string()))?;

        let list = portfolio.list_mut(mode);
        let before = list.len();
        list.retain(|item| item.id != id);
        if list.len() == before {
            return Err(PortfolioError::NotFound(id.to_string()));
        }

        self.store
            .set(keys::PORTFOLIO, &portfolio)
            .map_err(|e| PortfolioError::StoreError(e.to_string()))?;

        Ok(Toast::info(format!(
            "{} removed from portfolio",
            mode.singular()
        )))
    }

    /// The persisted profile for a platform, if one exists.
    pub fn profile(&self, platform: Platform) -> Result<Option<PlatformStats>, StoreError> {
        self.store.get(&platform.store_key())
    }

    /// The stats a platform card should currently show: the persisted
    /// profile, or the not-connected default.
    pub fn display_stats(&self, platform: Platform) -> PlatformStats {
        self.profile(platform)
            .ok()
            .flatten()
            .unwrap_or_else(|| PlatformStats::default_for(platform))
    }

    /// Placeholder card rendered while a connect call is in flight.
    pub fn connecting_placeholder(platform: Platform, username: &str) -> PlatformStats {
        PlatformStats::pending(platform, username, "Loading...")
    }

    /// Placeholder card rendered while a refresh call is in flight.
    pub fn refreshing_placeholder(platform: Platform, username: &str) -> PlatformStats {
        PlatformStats::pending(platform, username, "Refreshing...")
    }

    /// Connects a platform profile: fetches stats for the entered username,
    /// persists them on success, and reverts to the not-connected default
    /// on failure.
    ///
    /// The UI renders [`Self::connecting_placeholder`] while this runs.
    pub async fn connect(&self, platform: Platform, username: &str) -> StatsOutcome {
        let username = username.trim();
        if username.is_empty() {
            return StatsOutcome {
                stats: PlatformStats::default_for(platform),
                toast: Some(Toast::warning("Please enter a username")),
            };
        }

        match self.stats.fetch(platform, username).await {
            Ok(stats) => {
                let toast = self.persist_profile(platform, &stats);
                StatsOutcome { stats, toast }
            }
            Err(e) => {
                warn!("{} connect failed: {}", platform.key(), e);
                StatsOutcome {
                    stats: PlatformStats::default_for(platform),
                    toast: Some(Toast::danger(e.to_string())),
                }
            }
        }
    }

    /// Re-fetches a connected platform profile using the stored username.
    ///
    /// Requires an existing profile; on fetch failure the previously
    /// persisted stats are re-rendered unchanged. The UI renders
    /// [`Self::refreshing_placeholder`] while this runs.
    pub async fn refresh(&self, platform: Platform) -> StatsOutcome {
        let previous = match self.profile(platform) {
            Ok(Some(stats)) => stats,
            Ok(None) => {
                return StatsOutcome {
                    stats: PlatformStats::default_for(platform),
                    toast: Some(Toast::warning(PlatformError::NotConnected.to_string())),
                }
            }
            Err(e) => {
                return StatsOutcome {
                    stats: PlatformStats::default_for(platform),
                    toast: Some(Toast::danger(e.to_string())),
                }
            }
        };

        if !previous.is_connected() {
            return StatsOutcome {
                stats: PlatformStats::default_for(platform),
                toast: Some(Toast::danger("Invalid profile data. Please reconnect.")),
            };
        }

        match self.stats.fetch(platform, &previous.username).await {
            Ok(stats) => {
                let toast = self.persist_profile(platform, &stats);
                StatsOutcome { stats, toast }
            }
            Err(e) => {
                warn!("{} refresh failed: {}", platform.key(), e);
                StatsOutcome {
                    stats: previous,
                    toast: Some(Toast::danger(e.to_string())),
                }
            }
        }
    }

    /// Refreshes all six platform cards concurrently on page load.
    ///
    /// The calls run as independent pending operations with no ordering
    /// guarantee; each touches only its own store key. Platforms with no
    /// connected profile resolve immediately to their default card.
    pub async fn refresh_all(&self) -> Vec<(Platform, StatsOutcome)> {
        let [leetcode, github, codechef, hackerrank, codeforces, gfg] = Platform::ALL;
        let outcomes = tokio::join!(
            self.refresh(leetcode),
            self.refresh(github),
            self.refresh(codechef),
            self.refresh(hackerrank),
            self.refresh(codeforces),
            self.refresh(gfg),
        );
        let outcomes = [
            outcomes.0, outcomes.1, outcomes.2, outcomes.3, outcomes.4, outcomes.5,
        ];
        Platform::ALL.into_iter().zip(outcomes).collect()
    }

    fn persist_profile(&self, platform: Platform, stats: &PlatformStats) -> Option<Toast> {
        match self.store.set(&platform.store_key(), stats) {
            Ok(()) => None,
            Err(e) => Some(Toast::danger(e.to_string())),
        }
    }
}
