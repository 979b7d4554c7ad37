// SkillSwap services
// Services provide core functionality: the local key/value store, password
// hashing, the job-search API client, and coding-platform stat fetchers.

pub mod crypto_service;
pub mod job_api;
pub mod local_store;
pub mod platform_stats;
