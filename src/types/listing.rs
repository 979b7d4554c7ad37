use std::sync::OnceLock;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether the search page is currently showing jobs or internships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingMode {
    Jobs,
    Internships,
}

impl ListingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingMode::Jobs => "jobs",
            ListingMode::Internships => "internships",
        }
    }

    /// Singular display label ("Job" / "Internship").
    pub fn singular(&self) -> &'static str {
        match self {
            ListingMode::Jobs => "Job",
            ListingMode::Internships => "Internship",
        }
    }

    /// Heading shown above the result list.
    pub fn page_title(&self) -> &'static str {
        match self {
            ListingMode::Jobs => "Job Listings",
            ListingMode::Internships => "Internship Listings",
        }
    }

    /// Base free-text query when no skill filter is given.
    pub fn default_query(&self) -> &'static str {
        match self {
            ListingMode::Jobs => "developer jobs",
            ListingMode::Internships => "internship",
        }
    }
}

/// Optional search filter controls.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub skill: Option<String>,
    pub location: Option<String>,
    pub platform: Option<String>,
}

/// Where a result set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    /// Live response from the job-search API.
    Live,
    /// Built-in sample listings shown when the API failed or returned nothing.
    Sample,
}

/// A single job provider entry from the upstream API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobProvider {
    #[serde(rename = "jobProvider")]
    pub job_provider: Option<String>,
    pub url: Option<String>,
}

/// Raw listing record as returned by the job-search API.
///
/// Upstream field names vary between vendors and revisions, so every logical
/// field accepts all of its known spellings via serde aliases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawListing {
    #[serde(alias = "job_id")]
    pub id: Option<serde_json::Value>,
    #[serde(alias = "job_title")]
    pub title: Option<String>,
    #[serde(alias = "employer_name", alias = "companyName")]
    pub company: Option<String>,
    #[serde(alias = "job_description", alias = "summary")]
    pub description: Option<String>,
    #[serde(alias = "job_location")]
    pub location: Option<String>,
    #[serde(rename = "employmentType", alias = "job_employment_type", alias = "type")]
    pub employment_type: Option<String>,
    #[serde(
        rename = "datePosted",
        alias = "job_posted_at_datetime_utc",
        alias = "postedDate"
    )]
    pub date_posted: Option<String>,
    #[serde(rename = "salaryRange", alias = "salary", alias = "job_salary")]
    pub salary_range: Option<String>,
    #[serde(rename = "isRemote")]
    pub is_remote: Option<bool>,
    #[serde(alias = "logo", alias = "company_logo")]
    pub image: Option<String>,
    #[serde(alias = "job_apply_link", alias = "applicationUrl")]
    pub apply_link: Option<String>,
    #[serde(rename = "jobProviders")]
    pub job_providers: Vec<JobProvider>,
}

/// A normalized job or internship record shown in search results.
///
/// `id` is unique within a single rendered result set; it is used as the
/// card/lookup key. Collisions are not deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub employer: String,
    pub description: String,
    pub city: Option<String>,
    pub country: Option<String>,
    /// Display label, e.g. "Full-time". Unmapped upstream values pass through raw.
    pub employment_type: String,
    pub posted_at: Option<DateTime<Utc>>,
    pub apply_link: Option<String>,
    pub salary_currency: Option<String>,
    pub min_salary: Option<u64>,
    pub max_salary: Option<u64>,
    pub remote: bool,
    /// Source platform, e.g. "LinkedIn". "Direct" when no provider is listed.
    pub platform: String,
    pub logo: Option<String>,
}

impl Listing {
    /// Normalizes one raw upstream record into the canonical listing shape.
    ///
    /// `now` anchors relative posting dates ("3 days ago"); passing it in
    /// keeps normalization deterministic for tests.
    pub fn from_raw(raw: &RawListing, now: DateTime<Utc>) -> Self {
        let provider = raw.job_providers.first();
        let (city, country) = split_location(raw.location.as_deref());

        Listing {
            id: raw
                .id
                .as_ref()
                .and_then(id_to_string)
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: raw
                .title
                .clone()
                .unwrap_or_else(|| "Job Title Not Available".to_string()),
            employer: raw
                .company
                .clone()
                .unwrap_or_else(|| "Company Not Specified".to_string()),
            description: raw
                .description
                .clone()
                .unwrap_or_else(|| "No description available".to_string()),
            city,
            country,
            employment_type: map_employment_type(raw.employment_type.as_deref()),
            posted_at: raw
                .date_posted
                .as_deref()
                .and_then(|d| parse_posted_date(d, now)),
            apply_link: provider
                .and_then(|p| p.url.clone())
                .or_else(|| raw.apply_link.clone()),
            salary_currency: extract_salary_currency(raw.salary_range.as_deref()),
            min_salary: extract_salary_bound(raw.salary_range.as_deref(), 0),
            max_salary: extract_salary_bound(raw.salary_range.as_deref(), 1),
            remote: is_remote(raw),
            platform: provider
                .and_then(|p| p.job_provider.clone())
                .unwrap_or_else(|| "Direct".to_string()),
            logo: raw.image.clone(),
        }
    }

    /// "City, Country" with graceful degradation to either half.
    pub fn location_label(&self) -> String {
        match (&self.city, &self.country) {
            (Some(city), Some(country)) => format!("{}, {}", city, country),
            (None, Some(country)) => country.clone(),
            (Some(city), None) => city.clone(),
            (None, None) => "Location not specified".to_string(),
        }
    }

    /// "₹ 500000 - 800000" style range, or a not-specified label.
    pub fn salary_label(&self) -> String {
        match (&self.salary_currency, self.min_salary) {
            (Some(currency), Some(min)) => match self.max_salary {
                Some(max) => format!("{} {} - {}", currency, min, max),
                None => format!("{} {}", currency, min),
            },
            _ => "Salary not specified".to_string(),
        }
    }

    /// "Jan 5, 2026" style posting date, or a not-available label.
    pub fn posted_label(&self) -> String {
        match self.posted_at {
            Some(posted) => posted.format("%b %-d, %Y").to_string(),
            None => "Date not available".to_string(),
        }
    }
}

fn id_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Splits "City, Region, Country" into (city, country): city is the first
/// comma-separated part, country the last when more than one part exists.
pub fn split_location(location: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(location) = location else {
        return (None, None);
    };
    let parts: Vec<&str> = location.split(',').map(str::trim).collect();
    let city = parts.first().filter(|p| !p.is_empty()).map(|p| p.to_string());
    let country = if parts.len() > 1 {
        parts.last().filter(|p| !p.is_empty()).map(|p| p.to_string())
    } else {
        None
    };
    (city, country)
}

/// Maps the upstream employment-type vocabulary to display labels.
/// Unmapped values pass through unchanged; missing values become "Not specified".
pub fn map_employment_type(employment_type: Option<&str>) -> String {
    let Some(raw) = employment_type.filter(|t| !t.is_empty()) else {
        return "Not specified".to_string();
    };
    match raw.to_lowercase().as_str() {
        "fulltime" => "Full-time".to_string(),
        "parttime" => "Part-time".to_string(),
        "intern" => "Internship".to_string(),
        "volunteer" => "Volunteer".to_string(),
        "contract" => "Contract".to_string(),
        _ => raw.to_string(),
    }
}

/// Parses a posting date string into an absolute timestamp.
///
/// Relative forms ("3 days ago") are resolved against `now` using fixed
/// offsets: hour 3.6e6 ms, day 8.64e7, week 6.048e8, month 2.592e9. These
/// are approximations, not calendar arithmetic. Absolute forms are tried as
/// RFC 3339 and then as a bare date.
pub fn parse_posted_date(date: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if date.contains("ago") {
        let n: i64 = relative_count_regex()
            .find(date)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
        let offset_ms = if date.contains("hour") {
            3_600_000
        } else if date.contains("day") {
            86_400_000
        } else if date.contains("week") {
            604_800_000
        } else if date.contains("month") {
            2_592_000_000
        } else {
            return None;
        };
        return Some(now - Duration::milliseconds(n * offset_ms));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// First currency symbol (£, $, €, ₹) found in a salary range string.
pub fn extract_salary_currency(salary_range: Option<&str>) -> Option<String> {
    let range = salary_range?;
    range
        .chars()
        .find(|c| matches!(c, '£' | '$' | '€' | '₹'))
        .map(|c| c.to_string())
}

/// The `index`-th comma-grouped number in a salary range string, with
/// grouping separators stripped (so "₹5,00,000" parses as 500000).
pub fn extract_salary_bound(salary_range: Option<&str>, index: usize) -> Option<u64> {
    let range = salary_range?;
    salary_number_regex()
        .find_iter(range)
        .nth(index)
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
}

/// A listing counts as remote when its location or description mentions
/// "remote" (case-insensitive) or the upstream flag says so.
pub fn is_remote(raw: &RawListing) -> bool {
    if raw.is_remote == Some(true) {
        return true;
    }
    let mentions_remote =
        |text: &Option<String>| text.as_deref().is_some_and(|t| t.to_lowercase().contains("remote"));
    mentions_remote(&raw.location) || mentions_remote(&raw.description)
}

fn relative_count_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("relative count pattern"))
}

fn salary_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\d][\d,]*").expect("salary number pattern"))
}
