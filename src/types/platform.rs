use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel for a stat field the platform did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Username shown while no profile is connected.
pub const NOT_CONNECTED: &str = "Not connected";

/// Field value shown in the default (not connected) card state.
pub const FIELD_PLACEHOLDER: &str = "...";

/// Supported coding platforms for portfolio statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LeetCode,
    GitHub,
    CodeChef,
    HackerRank,
    Codeforces,
    GeeksforGeeks,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::LeetCode,
        Platform::GitHub,
        Platform::CodeChef,
        Platform::HackerRank,
        Platform::Codeforces,
        Platform::GeeksforGeeks,
    ];

    /// Stable lowercase identifier, used in store keys and element ids.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::LeetCode => "leetcode",
            Platform::GitHub => "github",
            Platform::CodeChef => "codechef",
            Platform::HackerRank => "hackerrank",
            Platform::Codeforces => "codeforces",
            Platform::GeeksforGeeks => "geeksforgeeks",
        }
    }

    /// Local-store key holding this platform's cached profile.
    pub fn store_key(&self) -> String {
        format!("{}_profile", self.key())
    }

    /// Static display configuration for this platform's card.
    pub fn config(&self) -> &'static PlatformConfig {
        match self {
            Platform::LeetCode => &LEETCODE_CONFIG,
            Platform::GitHub => &GITHUB_CONFIG,
            Platform::CodeChef => &CODECHEF_CONFIG,
            Platform::HackerRank => &HACKERRANK_CONFIG,
            Platform::Codeforces => &CODEFORCES_CONFIG,
            Platform::GeeksforGeeks => &GEEKSFORGEEKS_CONFIG,
        }
    }
}

static LEETCODE_CONFIG: PlatformConfig = PlatformConfig {
    display_name: "LeetCode",
    theme_color: "#FFA116",
    fields: &["Problems Solved", "Ranking", "Easy", "Medium", "Hard"],
    live_api: true,
};

static GITHUB_CONFIG: PlatformConfig = PlatformConfig {
    display_name: "GitHub",
    theme_color: "#24292E",
    fields: &["Public Repos", "Followers", "Following", "Total Stars"],
    live_api: true,
};

static CODECHEF_CONFIG: PlatformConfig = PlatformConfig {
    display_name: "CodeChef",
    theme_color: "#5B4638",
    fields: &["Rating", "Stars", "Global Rank"],
    live_api: false,
};

static HACKERRANK_CONFIG: PlatformConfig = PlatformConfig {
    display_name: "HackerRank",
    theme_color: "#00EA64",
    fields: &["Badges", "Level"],
    live_api: false,
};

static CODEFORCES_CONFIG: PlatformConfig = PlatformConfig {
    display_name: "Codeforces",
    theme_color: "#1F8ACB",
    fields: &["Rating", "Max Rating", "Rank"],
    live_api: true,
};

static GEEKSFORGEEKS_CONFIG: PlatformConfig = PlatformConfig {
    display_name: "GeeksforGeeks",
    theme_color: "#2F8D46",
    fields: &["Problems Solved", "Coding Score", "Institute Rank"],
    live_api: false,
};

/// Static display configuration for one platform card: the fields its card
/// populates, its accent color, and whether a live JSON API exists (the
/// rest are scraped from public profile pages).
#[derive(Debug)]
pub struct PlatformConfig {
    pub display_name: &'static str,
    pub theme_color: &'static str,
    pub fields: &'static [&'static str],
    pub live_api: bool,
}

/// Cached statistics fetched from a coding platform.
///
/// `fields` holds the platform's declared display fields; values the
/// upstream did not report carry the [`NOT_AVAILABLE`] sentinel. A username
/// other than [`NOT_CONNECTED`] signals a connected profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformStats {
    pub username: String,
    pub fields: BTreeMap<String, String>,
}

impl PlatformStats {
    /// The "not connected" default card for a platform.
    pub fn default_for(platform: Platform) -> Self {
        Self::uniform(platform, NOT_CONNECTED, FIELD_PLACEHOLDER)
    }

    /// Placeholder card shown while a connect/refresh call is in flight.
    pub fn pending(platform: Platform, username: &str, label: &str) -> Self {
        Self::uniform(platform, username, label)
    }

    /// Builds stats with every declared field set to the same value.
    fn uniform(platform: Platform, username: &str, value: &str) -> Self {
        let fields = platform
            .config()
            .fields
            .iter()
            .map(|name| (name.to_string(), value.to_string()))
            .collect();
        PlatformStats {
            username: username.to_string(),
            fields,
        }
    }

    /// Builds stats from `(field, value)` pairs, filling any declared field
    /// that is missing with the [`NOT_AVAILABLE`] sentinel.
    pub fn from_pairs(
        platform: Platform,
        username: &str,
        pairs: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let mut fields: BTreeMap<String, String> = pairs.into_iter().collect();
        for name in platform.config().fields {
            fields
                .entry(name.to_string())
                .or_insert_with(|| NOT_AVAILABLE.to_string());
        }
        PlatformStats {
            username: username.to_string(),
            fields,
        }
    }

    /// True when a real username is attached.
    pub fn is_connected(&self) -> bool {
        !self.username.is_empty() && self.username != NOT_CONNECTED
    }

    /// Field value, or the [`NOT_AVAILABLE`] sentinel for unknown names.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or(NOT_AVAILABLE)
    }
}
