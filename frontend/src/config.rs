//! Configuration for the frontend application

/// API base URL, read at compile time.
/// - Served by the recorder itself: "/api" (default)
/// - Dev server on another port: `LIVE_CONSOLE_API_BASE=http://localhost:8080/api`
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("LIVE_CONSOLE_API_BASE") {
    Some(url) => url,
    None => "/api",
};

/// Helper function to construct API URLs
#[cfg(not(feature = "mock"))]
pub fn api_url(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}/{}", API_BASE.trim_end_matches('/'), path)
}
