use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    pub id: u64,                     // Unique key for the card list
    pub name: String,                // e.g., "tartufo"
    pub description: Option<String>, // Optional: Not all repos have a description
    pub stargazers_count: u64,       // Number of stars
    pub forks_count: u64,            // Number of forks
    pub watchers_count: u64,         // Number of watchers
    pub language: Option<String>,    // Primary language, if any
    pub created_at: String,          // Creation timestamp (RFC 3339)
    pub updated_at: String,          // Last-update timestamp (RFC 3339)
    pub size: u64,                   // Repository size in kilobytes
    pub open_issues_count: u64,      // Number of open issues
    pub html_url: String,            // Link to repo
    pub homepage: Option<String>,    // Optional project homepage
}

/// Body GitHub sends along with a non-2xx status.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub documentation_url: Option<String>,
}
