//! Repository URL to Releases API endpoint conversion

/// Web URL prefix that identifies a GitHub repository page
pub const WEB_BASE_URL: &str = "https://github.com/";

/// Converts a repository web URL into its latest-release API endpoint.
///
/// `https://github.com/owner/repo` becomes
/// `{api_base_url}/repos/owner/repo/releases/latest`, with or without a
/// trailing slash on the input. A URL without the expected web prefix is
/// left as-is before the release path is appended, so the result is only
/// meaningful for GitHub repository URLs.
pub fn release_endpoint(repo_url: &str, api_base_url: &str) -> String {
    let api_prefix = format!("{}/repos/", api_base_url.trim_end_matches('/'));
    let fixed = repo_url.replacen(WEB_BASE_URL, &api_prefix, 1);
    if fixed.ends_with('/') {
        format!("{fixed}releases/latest")
    } else {
        format!("{fixed}/releases/latest")
    }
}
