//! SkillSwap — client-side engine for a job-search and developer-portfolio app.
//!
//! Entry point: runs an interactive console demo walking each component
//! against an in-memory database. Job fetches run offline here, so the
//! search demo exercises the sample-fallback path.

use std::sync::Arc;

use skillswap::database::connection::Database;
use skillswap::managers::auth_manager::{AuthManager, AuthManagerTrait};
use skillswap::managers::job_search_manager::JobSearchManager;
use skillswap::managers::portfolio_manager::PortfolioManager;
use skillswap::managers::resume_manager::{ResumeManager, ResumeManagerTrait};
use skillswap::services::local_store::LocalStore;
use skillswap::types::listing::{ListingMode, SearchFilters};
use skillswap::types::platform::Platform;
use skillswap::types::user::SignUpForm;
use skillswap::views::{self, PlatformCardView, PortfolioCardView};

#[tokio::main]
async fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               SkillSwap v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║      Job search & developer portfolio engine               ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let db = Arc::new(Database::open_in_memory().expect("Failed to open database"));
    let store = LocalStore::new(db.clone());

    demo_database(&db);
    demo_auth(&store);
    demo_job_search(&store).await;
    demo_portfolio(&store);
    demo_platform_cards(&store);
    demo_resume(&store);
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_database(db: &Arc<Database>) {
    section("Database Layer");

    let tables: Vec<String> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));
    println!("  ✓ Database + migrations OK");
    println!();
}

fn demo_auth(store: &LocalStore) {
    section("Auth Manager");

    let mut auth = AuthManager::new(store.clone());
    let form = SignUpForm {
        name: "Demo User".to_string(),
        email: "demo@skillswap.dev".to_string(),
        password: "Passw0rd".to_string(),
        confirm_password: "Passw0rd".to_string(),
    };
    auth.sign_up(&form).expect("sign-up should succeed");
    println!("  Signed up {}", form.email);

    let session = auth
        .sign_in(&form.email, &form.password)
        .expect("sign-in should succeed");
    println!("  Signed in, session timestamp {}", session.timestamp);
    println!("  UI state: {:?}", auth.ui_state());

    auth.logout().expect("logout should succeed");
    println!("  Logged out, UI state: {:?}", auth.ui_state());
    println!();
}

async fn demo_job_search(store: &LocalStore) {
    section("Job Search Manager (offline → sample fallback)");

    let mut jobs = JobSearchManager::offline(store.clone()).expect("manager init");
    let outcome = jobs
        .search(&SearchFilters {
            skill: Some("rust".to_string()),
            ..Default::default()
        })
        .await;
    println!(
        "  Search resolved to {} listings from {:?}",
        outcome.listings.len(),
        outcome.source
    );
    if let Some(toast) = &outcome.toast {
        println!("  Toast [{}]: {}", toast.level.as_str(), toast.message);
    }

    if let Some(first) = outcome.listings.first() {
        let toast = jobs.toggle_save(first).expect("save should succeed");
        println!("  Saved '{}': {}", first.title, toast.message);
    }
    if let Some(last) = outcome.listings.last() {
        let toast = jobs.hide(&last.id).expect("hide should succeed");
        println!("  Hid '{}': {}", last.title, toast.message);
    }

    let view = jobs.listing_view(&outcome.listings);
    println!("  Rendered view: {} chars of HTML", views::html::render_listings(&view).len());

    jobs.set_mode(ListingMode::Internships);
    let internships = jobs.fallback_listings();
    println!("  Internship fallback: {} listings", internships.len());
    println!();
}

fn demo_portfolio(store: &LocalStore) {
    section("Portfolio Manager");

    let portfolio = PortfolioManager::new(store.clone()).expect("manager init");
    let saved = portfolio.load().expect("load should succeed");
    println!(
        "  Portfolio holds {} jobs, {} internships",
        saved.jobs.len(),
        saved.internships.len()
    );
    for item in &saved.jobs {
        let card = PortfolioCardView::from_item(item);
        println!("  - {} at {} (added {})", card.title, card.company, card.added);
    }
    println!();
}

fn demo_platform_cards(store: &LocalStore) {
    section("Platform Stats Cards");

    let portfolio = PortfolioManager::new(store.clone()).expect("manager init");
    for platform in Platform::ALL {
        let stats = portfolio.display_stats(platform);
        let card = PlatformCardView::from_stats(platform, &stats);
        println!(
            "  {:14} [{}] username={}",
            card.display_name, card.button_label, card.username
        );
    }
    println!();
}

fn demo_app_core() {
    section("App Core");

    let db_path = std::env::temp_dir().join("skillswap-demo.db");
    let app = skillswap::app::App::new(&db_path.to_string_lossy(), None)
        .expect("App init should succeed");
    println!("  App wired over {}", db_path.display());
    println!("  Startup UI state: {:?}", app.startup());

    let _ = std::fs::remove_file(&db_path);
    println!();
}

fn demo_resume(store: &LocalStore) {
    section("Resume Manager");

    let mut resume = ResumeManager::new(store.clone());
    let uploaded = resume
        .upload("resume.pdf", "application/pdf", b"%PDF-1.4 demo")
        .expect("upload should succeed");
    println!(
        "  Uploaded {} ({} chars stored)",
        uploaded.file_name,
        uploaded.content.len()
    );

    let rejected = resume.upload("notes.txt", "text/plain", b"hello");
    println!("  Rejected non-PDF: {}", rejected.unwrap_err());

    resume.delete(true).expect("delete should succeed");
    println!("  Deleted stored resume");
    println!();
}
