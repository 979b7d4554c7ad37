//! HTML renderers for the view models.
//!
//! Kept strictly downstream of [`super`]'s view models so the data side
//! stays testable without any markup concerns. The markup mirrors the
//! app's Bootstrap card layout.

use super::{ApplyAction, JobCardView, ListingsView, PlatformCardView, PortfolioCardView};

/// Escapes text for safe interpolation into HTML.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders the search-result area.
pub fn render_listings(view: &ListingsView) -> String {
    match view {
        ListingsView::Cards(cards) => cards.iter().map(render_job_card).collect(),
        ListingsView::AllHidden => r#"<div class="col-12 text-center py-5"><p class="text-muted">All jobs have been hidden. Try a new search or reset filters.</p></div>"#.to_string(),
        ListingsView::NoResults => r#"<div class="col-12 text-center py-5"><p class="text-muted">No jobs found for your search criteria.</p></div>"#.to_string(),
    }
}

/// Renders one search-result card.
pub fn render_job_card(card: &JobCardView) -> String {
    let card_class = if card.saved {
        "card job-card h-100 border-success"
    } else {
        "card job-card h-100"
    };
    let save_class = if card.saved {
        "btn btn-sm btn-outline-success"
    } else {
        "btn btn-sm btn-outline-info"
    };
    let save_title = if card.saved {
        "Remove from Portfolio"
    } else {
        "Add to Portfolio"
    };

    format!(
        r#"<div class="col-md-6 mb-4">
  <div class="{card_class}" data-job-id="{id}">
    <div class="card-header d-flex justify-content-between align-items-start">
      <div class="flex-grow-1">
        <h5 class="card-title text-primary mb-2">{title}</h5>
        <p class="mb-1 text-cyan fw-semibold">{employer}</p>
        <p class="mb-0 text-muted small">{location}</p>
      </div>
      <small class="text-muted">{posted}</small>
    </div>
    <div class="card-body">
      <div class="mb-3">
        <span class="badge bg-secondary me-2">{employment_type}</span>
        <span class="badge bg-success">{salary}</span>
        <span class="badge bg-info ms-2">{remote}</span>
        <span class="badge bg-primary ms-2">{platform}</span>
      </div>
      <p class="text-light mb-3">{description}</p>
      <div class="d-flex gap-2 justify-content-between align-items-center">
        <div class="d-flex gap-2">
          <button class="{save_class}" data-action="toggle-save" title="{save_title}"></button>
          <button class="btn btn-sm btn-outline-danger" data-action="hide"></button>
        </div>
        {apply}
      </div>
    </div>
  </div>
</div>"#,
        card_class = card_class,
        id = escape(&card.id),
        title = escape(&card.title),
        employer = escape(&card.employer),
        location = escape(&card.location),
        posted = escape(&card.posted),
        employment_type = escape(&card.employment_type),
        salary = escape(&card.salary),
        remote = card.remote_label,
        platform = escape(&card.platform),
        description = escape(&card.description_snippet),
        save_class = save_class,
        save_title = save_title,
        apply = render_apply(&card.apply, "btn btn-primary btn-sm"),
    )
}

/// Renders one portfolio card.
pub fn render_portfolio_card(card: &PortfolioCardView) -> String {
    format!(
        r#"<div class="col-md-4 mb-2">
  <div class="card portfolio-card pb-0" data-id="{id}">
    <div class="card-header d-flex justify-content-between align-items-start">
      <div class="flex-grow-1">
        <h5 class="card-title text-primary mb-2">{title}</h5>
        <p class="mb-1 text-cyan fw-semibold">{company}</p>
        <p class="mb-0 text-muted small">{location}</p>
      </div>
      <small class="text-muted">{posted}</small>
    </div>
    <div class="card-body">
      <div class="mb-3">
        <span class="badge bg-secondary me-2">{employment_type}</span>
        <span class="badge bg-success">{salary}</span>
        <span class="badge bg-info ms-2">{remote}</span>
        <span class="badge bg-primary ms-2">{platform}</span>
      </div>
      <div class="d-flex gap-2 justify-content-between align-items-center">
        <button class="btn btn-sm btn-outline-danger" data-action="remove" title="Remove from Portfolio"></button>
        {apply}
      </div>
      <div class="mt-2 text-end"><small class="text-muted">Added: {added}</small></div>
    </div>
  </div>
</div>"#,
        id = escape(&card.id),
        title = escape(&card.title),
        company = escape(&card.company),
        location = escape(&card.location),
        posted = escape(&card.posted),
        employment_type = escape(&card.employment_type),
        salary = escape(&card.salary),
        remote = card.remote_label,
        platform = escape(&card.platform),
        added = escape(&card.added),
        apply = render_apply(&card.apply, "btn btn-outline-primary btn-sm"),
    )
}

/// Renders one platform stats card.
pub fn render_platform_card(card: &PlatformCardView) -> String {
    let rows: String = card
        .rows
        .iter()
        .map(|(field, value)| {
            format!(
                r#"<div class="d-flex justify-content-between"><span>{}</span><strong>{}</strong></div>"#,
                escape(field),
                escape(value),
            )
        })
        .collect();
    let button_class = if card.connected {
        "btn btn-sm btn-outline-success flex-fill"
    } else {
        "btn btn-sm btn-outline-warning flex-fill"
    };

    format!(
        r#"<div class="card platform-card" data-platform="{key}" style="border-top: 3px solid {color}">
  <div class="card-header d-flex justify-content-between">
    <h6 class="mb-0">{name}</h6>
    <small class="text-muted">{username}</small>
  </div>
  <div class="card-body">{rows}</div>
  <div class="card-footer d-flex gap-2">
    <button class="{button_class}" data-action="connect">{button_label}</button>
    <button class="btn btn-sm btn-outline-secondary" data-action="refresh">Refresh</button>
  </div>
</div>"#,
        key = card.platform.key(),
        color = card.theme_color,
        name = card.display_name,
        username = escape(&card.username),
        rows = rows,
        button_class = button_class,
        button_label = card.button_label,
    )
}

fn render_apply(apply: &ApplyAction, class: &str) -> String {
    match apply {
        ApplyAction::Link(url) => format!(
            r#"<a href="{}" target="_blank" class="{}">Apply Now</a>"#,
            escape(url),
            class,
        ),
        // Still present, visibly dimmed; activating it explains itself
        // instead of navigating.
        ApplyAction::Unavailable => format!(
            r##"<a href="#" class="{} disabled-apply" style="opacity: 0.6;" data-message="{}">Apply Now</a>"##,
            class,
            ApplyAction::UNAVAILABLE_MESSAGE,
        ),
    }
}
