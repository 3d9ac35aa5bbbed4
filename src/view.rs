//! Text rendering for cards, overlays, and the pagination bar.
//!
//! Everything here is a pure `&state -> String` function so the output is
//! testable without a terminal. Printing happens in `main`.

use chrono::DateTime;

use crate::controller::PageState;
use crate::errors::ErrorInfo;
use crate::models::Repo;
use crate::pagination::PageMarker;

const NO_DESCRIPTION: &str = "No description available";

/// One summary card: name, description, and the three headline counters.
pub fn render_card(index: usize, repo: &Repo) -> String {
    format!(
        "[{index}] {name}\n    {description}\n    ⭐ {stars}  🍴 {forks}  👀 {watchers}",
        index = index,
        name = repo.name,
        description = repo.description.as_deref().unwrap_or(NO_DESCRIPTION),
        stars = repo.stargazers_count,
        forks = repo.forks_count,
        watchers = repo.watchers_count,
    )
}

/// The main surface: loading line, cards, or the empty-state message.
pub fn render_listing(state: &PageState) -> String {
    if state.is_loading() {
        return "Loading...".to_string();
    }

    if state.show_empty_state() {
        return "No repositories found.".to_string();
    }

    state
        .entries
        .iter()
        .enumerate()
        .map(|(index, repo)| render_card(index, repo))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Detail overlay body for a selected repository.
pub fn render_detail(repo: &Repo) -> String {
    let mut lines = vec![
        format!("=== {} ===", repo.name),
        repo.description.as_deref().unwrap_or(NO_DESCRIPTION).to_string(),
        String::new(),
        format!(
            "Language:     {}",
            repo.language.as_deref().unwrap_or("Not specified")
        ),
        format!("Created:      {}", format_date(&repo.created_at)),
        format!("Last Updated: {}", format_date(&repo.updated_at)),
        format!("Size:         {} KB", repo.size),
        String::new(),
        format!(
            "⭐ {} Stars  🍴 {} Forks  👀 {} Watchers  📁 {} Open Issues",
            repo.stargazers_count, repo.forks_count, repo.watchers_count, repo.open_issues_count
        ),
        String::new(),
        format!("View on GitHub: {}", repo.html_url),
    ];

    if let Some(homepage) = &repo.homepage {
        lines.push(format!("Homepage:       {}", homepage));
    }

    lines.push(String::new());
    lines.push("(close / esc to dismiss)".to_string());
    lines.join("\n")
}

/// Error overlay body: status, message, optional documentation link.
pub fn render_error(info: &ErrorInfo) -> String {
    let mut lines = vec![
        "⚠️  API Error — failed to fetch repositories".to_string(),
        format!("Status Code:   {}", info.status_display()),
        format!("Error Message: {}", info.message),
    ];

    if let Some(url) = &info.documentation_url {
        lines.push(format!("Documentation: {}", url));
    }

    lines.push(String::new());
    lines.push("(retry to reload, close / esc to dismiss)".to_string());
    lines.join("\n")
}

/// Pagination bar built from the windower's output. The current page is
/// bracketed; ellipsis slots render as a bare marker.
pub fn render_pagination_bar(state: &PageState) -> String {
    let mut slots = vec!["‹".to_string()];

    for marker in state.visible_pages() {
        slots.push(match marker {
            PageMarker::Number(page) if page == state.current_page => format!("[{}]", page),
            PageMarker::Number(page) => page.to_string(),
            PageMarker::Ellipsis => "…".to_string(),
        });
    }

    slots.push("›".to_string());
    slots.join(" ")
}

fn format_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
