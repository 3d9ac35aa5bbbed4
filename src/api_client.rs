use log::{debug, warn};
use reqwest::header::LINK;
use reqwest::Client;

use crate::errors::ErrorInfo;
use crate::models::{ErrorBody, Repo};

/// Organization whose repositories are listed.
pub const ORG: &str = "godaddy";

/// Fixed page size for every listing request. GitHub supports up to 100.
pub const PER_PAGE: u64 = 10;

/// Result of one successful listing fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFetch {
    pub entries: Vec<Repo>,
    /// Estimated from the `Link` header's last-page relation; 0 when the
    /// header is absent, in which case the listing is a single page.
    pub total_count: u64,
}

/// Fetch one page of the organization's repository listing.
///
/// Exactly one request, no retries, no caching. Every failure is folded into
/// an [`ErrorInfo`] so the caller has a single error surface to render.
pub async fn fetch_page(client: &Client, page: u32) -> Result<PageFetch, ErrorInfo> {
    let url = format!("https://api.github.com/orgs/{}/repos", ORG);

    debug!("Listing endpoint {} page {}", url, page);

    let response = client
        .get(&url)
        .query(&[("page", page.to_string()), ("per_page", PER_PAGE.to_string())])
        .send()
        .await
        .map_err(ErrorInfo::from_transport)?;

    let status = response.status();

    if !status.is_success() {
        // The API response body carries useful information about the problem
        let body = response.text().await.unwrap_or_default();
        let parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
        warn!("Listing request failed with status {}", status);
        return Err(ErrorInfo::from_response(status, parsed));
    }

    let total_count = response
        .headers()
        .get(LINK)
        .and_then(|value| value.to_str().ok())
        .and_then(last_page_from_link)
        .map(|last_page| u64::from(last_page) * PER_PAGE)
        .unwrap_or(0);

    let entries: Vec<Repo> = response.json().await.map_err(ErrorInfo::from_transport)?;

    debug!(
        "Fetched {} entries, estimated total {}",
        entries.len(),
        total_count
    );

    Ok(PageFetch {
        entries,
        total_count,
    })
}

/// Extract the last-page number from a `Link` navigation header.
///
/// The header is a comma-separated list of `<url>; rel="…"` segments; the one
/// tagged `rel="last"` carries the highest page index in its query string.
pub fn last_page_from_link(header: &str) -> Option<u32> {
    for segment in header.split(',') {
        if !segment.contains("rel=\"last\"") {
            continue;
        }

        let url = segment.split('<').nth(1)?.split('>').next()?;
        let query = url.split('?').nth(1)?;

        for pair in query.split('&') {
            if let Some(value) = pair.strip_prefix("page=") {
                return value.parse().ok();
            }
        }
    }

    None
}
