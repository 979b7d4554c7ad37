//! Coding-platform statistics fetchers for SkillSwap.
//!
//! One fetch routine per supported platform, all normalized into the
//! uniform [`PlatformStats`] display model. LeetCode, GitHub, and
//! Codeforces expose JSON APIs; CodeChef, HackerRank, and GeeksforGeeks
//! have no stable public API, so their public profile pages are fetched
//! and scraped best-effort. Fields a platform does not report populate as
//! the not-available sentinel instead of failing the fetch.
//!
//! Every request goes through one shared client with a uniform 10-second
//! timeout. Failures are never retried automatically.

use std::time::Duration;

use log::{debug, warn};
use reqwest::StatusCode;
use scraper::{Html, Selector};
use serde_json::Value;

use crate::types::errors::PlatformError;
use crate::types::platform::{Platform, PlatformStats};

/// Uniform timeout applied to every platform request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("skillswap/", env!("CARGO_PKG_VERSION"));

/// Client for all six platform integrations.
pub struct StatsClient {
    http: reqwest::Client,
}

impl StatsClient {
    pub fn new() -> Result<Self, PlatformError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PlatformError::NetworkError(e.to_string()))?;
        Ok(Self { http })
    }

    /// Fetches and normalizes stats for one platform.
    ///
    /// Dispatch is an explicit match on the platform identifier; each arm
    /// owns its upstream protocol and response shape.
    pub async fn fetch(&self, platform: Platform, username: &str) -> Result<PlatformStats, PlatformError> {
        debug!("fetching {} stats for {}", platform.key(), username);
        match platform {
            Platform::LeetCode => self.fetch_leetcode(username).await,
            Platform::GitHub => self.fetch_github(username).await,
            Platform::Codeforces => self.fetch_codeforces(username).await,
            Platform::CodeChef => self.fetch_codechef(username).await,
            Platform::HackerRank => self.fetch_hackerrank(username).await,
            Platform::GeeksforGeeks => self.fetch_geeksforgeeks(username).await,
        }
    }

    async fn fetch_leetcode(&self, username: &str) -> Result<PlatformStats, PlatformError> {
        let url = format!("https://leetcode-stats-api.herokuapp.com/{}", username);
        let payload = self.get_json(&url, username).await?;
        normalize_leetcode(username, &payload)
    }

    async fn fetch_github(&self, username: &str) -> Result<PlatformStats, PlatformError> {
        let profile = self
            .get_json(&format!("https://api.github.com/users/{}", username), username)
            .await?;
        // Separate repos sub-request for the star total.
        let repos = self
            .get_json(
                &format!("https://api.github.com/users/{}/repos?per_page=100", username),
                username,
            )
            .await
            .unwrap_or(Value::Null);
        normalize_github(username, &profile, &repos)
    }

    async fn fetch_codeforces(&self, username: &str) -> Result<PlatformStats, PlatformError> {
        let url = format!("https://codeforces.com/api/user.info?handles={}", username);
        let payload = self.get_json(&url, username).await?;
        normalize_codeforces(username, &payload)
    }

    async fn fetch_codechef(&self, username: &str) -> Result<PlatformStats, PlatformError> {
        let url = format!("https://www.codechef.com/users/{}", username);
        let html = self.get_html(&url, username).await?;
        parse_codechef_page(username, &html)
    }

    async fn fetch_hackerrank(&self, username: &str) -> Result<PlatformStats, PlatformError> {
        let url = format!("https://www.hackerrank.com/{}", username);
        let html = self.get_html(&url, username).await?;
        parse_hackerrank_page(username, &html)
    }

    async fn fetch_geeksforgeeks(&self, username: &str) -> Result<PlatformStats, PlatformError> {
        let url = format!("https://www.geeksforgeeks.org/user/{}/", username);
        let html = self.get_html(&url, username).await?;
        parse_geeksforgeeks_page(username, &html)
    }

    async fn get_json(&self, url: &str, username: &str) -> Result<Value, PlatformError> {
        let response = self.http.get(url).send().await.map_err(map_request_error)?;
        check_status(response.status(), username)?;
        response
            .json()
            .await
            .map_err(|e| PlatformError::InvalidResponse(e.to_string()))
    }

    async fn get_html(&self, url: &str, username: &str) -> Result<String, PlatformError> {
        let response = self.http.get(url).send().await.map_err(map_request_error)?;
        check_status(response.status(), username)?;
        response
            .text()
            .await
            .map_err(|e| PlatformError::InvalidResponse(e.to_string()))
    }
}

fn map_request_error(e: reqwest::Error) -> PlatformError {
    if e.is_timeout() {
        PlatformError::Timeout
    } else {
        PlatformError::NetworkError(e.to_string())
    }
}

fn check_status(status: StatusCode, username: &str) -> Result<(), PlatformError> {
    if status == StatusCode::NOT_FOUND {
        return Err(PlatformError::UserNotFound(username.to_string()));
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(PlatformError::RateLimited);
    }
    if !status.is_success() {
        return Err(PlatformError::NetworkError(format!("HTTP {}", status)));
    }
    Ok(())
}

/// Normalizes the LeetCode stats-proxy payload.
///
/// The proxy reports `status: "error"` (with HTTP 200) for unknown users.
pub fn normalize_leetcode(username: &str, payload: &Value) -> Result<PlatformStats, PlatformError> {
    let errored = payload.get("status").and_then(Value::as_str) == Some("error");
    if errored || payload.get("totalSolved").is_none() {
        return Err(PlatformError::UserNotFound(username.to_string()));
    }

    let num = |key: &str| payload.get(key).and_then(Value::as_u64);
    let mut pairs = Vec::new();
    if let Some(total) = num("totalSolved") {
        pairs.push(("Problems Solved".to_string(), total.to_string()));
    }
    if let Some(ranking) = num("ranking") {
        pairs.push(("Ranking".to_string(), format!("#{}", ranking)));
    }
    if let Some(easy) = num("easySolved") {
        pairs.push(("Easy".to_string(), easy.to_string()));
    }
    if let Some(medium) = num("mediumSolved") {
        pairs.push(("Medium".to_string(), medium.to_string()));
    }
    if let Some(hard) = num("hardSolved") {
        pairs.push(("Hard".to_string(), hard.to_string()));
    }

    Ok(PlatformStats::from_pairs(Platform::LeetCode, username, pairs))
}

/// Normalizes a GitHub user payload plus the repos sub-request.
pub fn normalize_github(
    username: &str,
    profile: &Value,
    repos: &Value,
) -> Result<PlatformStats, PlatformError> {
    if profile.get("login").and_then(Value::as_str).is_none() {
        return Err(PlatformError::UserNotFound(username.to_string()));
    }

    let num = |key: &str| profile.get(key).and_then(Value::as_u64);
    let mut pairs = Vec::new();
    if let Some(repos_count) = num("public_repos") {
        pairs.push(("Public Repos".to_string(), repos_count.to_string()));
    }
    if let Some(followers) = num("followers") {
        pairs.push(("Followers".to_string(), followers.to_string()));
    }
    if let Some(following) = num("following") {
        pairs.push(("Following".to_string(), following.to_string()));
    }
    if let Some(repo_list) = repos.as_array() {
        let stars: u64 = repo_list
            .iter()
            .filter_map(|r| r.get("stargazers_count").and_then(Value::as_u64))
            .sum();
        pairs.push(("Total Stars".to_string(), stars.to_string()));
    }

    Ok(PlatformStats::from_pairs(Platform::GitHub, username, pairs))
}

/// Normalizes a Codeforces `user.info` payload.
///
/// Unrated accounts legitimately lack rating fields; those surface as the
/// not-available sentinel rather than an error.
pub fn normalize_codeforces(username: &str, payload: &Value) -> Result<PlatformStats, PlatformError> {
    if payload.get("status").and_then(Value::as_str) == Some("FAILED") {
        return Err(PlatformError::UserNotFound(username.to_string()));
    }
    let user = payload
        .get("result")
        .and_then(Value::as_array)
        .and_then(|r| r.first())
        .ok_or_else(|| PlatformError::UserNotFound(username.to_string()))?;

    let mut pairs = Vec::new();
    if let Some(rating) = user.get("rating").and_then(Value::as_u64) {
        pairs.push(("Rating".to_string(), rating.to_string()));
    }
    if let Some(max_rating) = user.get("maxRating").and_then(Value::as_u64) {
        pairs.push(("Max Rating".to_string(), max_rating.to_string()));
    }
    if let Some(rank) = user.get("rank").and_then(Value::as_str) {
        pairs.push(("Rank".to_string(), rank.to_string()));
    }

    Ok(PlatformStats::from_pairs(Platform::Codeforces, username, pairs))
}

/// Scrapes the public CodeChef profile page.
pub fn parse_codechef_page(username: &str, html: &str) -> Result<PlatformStats, PlatformError> {
    let document = Html::parse_document(html);
    let mut pairs = Vec::new();

    if let Some(rating) = select_text(&document, ".rating-number") {
        pairs.push(("Rating".to_string(), rating));
    }
    if let Some(stars) = select_text(&document, ".rating-star") {
        pairs.push(("Stars".to_string(), stars));
    }
    if let Some(rank) = select_text(&document, ".rating-ranks strong") {
        pairs.push(("Global Rank".to_string(), rank));
    }

    if pairs.is_empty() {
        warn!("codechef page for {} had no recognizable stats", username);
    }
    Ok(PlatformStats::from_pairs(Platform::CodeChef, username, pairs))
}

/// Scrapes the public HackerRank profile page.
pub fn parse_hackerrank_page(username: &str, html: &str) -> Result<PlatformStats, PlatformError> {
    let document = Html::parse_document(html);
    let mut pairs = Vec::new();

    if let Ok(selector) = Selector::parse(".hacker-badge") {
        let badges = document.select(&selector).count();
        if badges > 0 {
            pairs.push(("Badges".to_string(), badges.to_string()));
        }
    }
    if let Some(level) = select_text(&document, ".badge-title") {
        pairs.push(("Level".to_string(), level));
    }

    Ok(PlatformStats::from_pairs(Platform::HackerRank, username, pairs))
}

/// Scrapes the public GeeksforGeeks profile page.
///
/// GFG ships hashed CSS class names, so the selectors match on stable
/// prefixes. Score cards appear in page order: coding score, problems
/// solved, contest rating.
pub fn parse_geeksforgeeks_page(username: &str, html: &str) -> Result<PlatformStats, PlatformError> {
    let document = Html::parse_document(html);
    let mut pairs = Vec::new();

    let scores = select_all_text(&document, "[class*='scoreCard_head_left--score']");
    if let Some(score) = scores.first() {
        pairs.push(("Coding Score".to_string(), score.clone()));
    }
    if let Some(solved) = scores.get(1) {
        pairs.push(("Problems Solved".to_string(), solved.clone()));
    }
    if let Some(rank) = select_text(&document, "[class*='educationDetails_head_left_userRankContainer--rank']") {
        pairs.push(("Institute Rank".to_string(), rank));
    }

    Ok(PlatformStats::from_pairs(Platform::GeeksforGeeks, username, pairs))
}

/// First non-empty trimmed text for a selector, if it parses and matches.
fn select_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .find(|text| !text.is_empty())
}

/// All non-empty trimmed texts for a selector, in document order.
fn select_all_text(document: &Html, selector: &str) -> Vec<String> {
    let Some(selector) = Selector::parse(selector).ok() else {
        return Vec::new();
    };
    document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}
