//! App Core for SkillSwap.
//!
//! Central struct holding all managers and services, managing application
//! lifecycle. Each page of the UI drives one of the managers; they all
//! share a single database handle through the local store.

use std::sync::Arc;

use crate::database::connection::Database;
use crate::managers::auth_manager::{AuthManager, AuthManagerTrait};
use crate::managers::job_search_manager::JobSearchManager;
use crate::managers::portfolio_manager::PortfolioManager;
use crate::managers::resume_manager::ResumeManager;
use crate::services::job_api::JobApiClient;
use crate::services::local_store::LocalStore;
use crate::types::user::UiState;

/// Central application struct holding all managers and services.
pub struct App {
    pub db: Arc<Database>,
    pub store: LocalStore,
    pub auth: AuthManager,
    pub jobs: JobSearchManager,
    pub portfolio: PortfolioManager,
    pub resume: ResumeManager,
}

impl App {
    /// Creates a new App, initializing all managers and services.
    ///
    /// With `api_key` set, job searches go to the live job-search API;
    /// without it, every search resolves to the built-in sample listings.
    pub fn new(db_path: &str, api_key: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        let store = LocalStore::new(db.clone());

        let auth = AuthManager::new(store.clone());
        let jobs = match api_key {
            Some(key) => JobSearchManager::new(store.clone(), JobApiClient::new(key)?)
                .map_err(|e| format!("JobSearchManager init failed: {}", e))?,
            None => JobSearchManager::offline(store.clone())
                .map_err(|e| format!("JobSearchManager init failed: {}", e))?,
        };
        let portfolio = PortfolioManager::new(store.clone())
            .map_err(|e| format!("PortfolioManager init failed: {}", e))?;
        let resume = ResumeManager::new(store.clone());

        Ok(Self {
            db,
            store,
            auth,
            jobs,
            portfolio,
            resume,
        })
    }

    /// Startup sequence: restore the persisted session into a UI state.
    pub fn startup(&self) -> UiState {
        self.auth.ui_state()
    }
}
