//! Update checking against the GitHub Releases API
//!
//! The check runs as a linear sequence: the repository web URL is converted
//! into its latest-release API endpoint, the endpoint is probed for
//! reachability, and only then is the release fetched and its tag compared
//! against the locally installed version.
//!
//! # Modules
//!
//! - [`checker`]: connectivity probe, release fetch, and the public check call
//! - [`endpoint`]: repository URL to API endpoint conversion
//! - [`error`]: error types for update checks

pub mod checker;
pub mod endpoint;
pub mod error;
