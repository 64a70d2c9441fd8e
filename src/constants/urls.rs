//! External URLs used by the installer
//!
//! Every value here can be overridden through settings, environment
//! variables, or CLI flags (see `config::settings`).

/// Private registry hosting the scoped package
pub const DEFAULT_PRIVATE_REGISTRY: &str = "https://npm.pkg.github.com/";

/// Public registry for unscoped packages
pub const DEFAULT_PUBLIC_REGISTRY: &str = "https://registry.npmjs.org/";

/// Remote API the installed server talks to
pub const DEFAULT_API_URL: &str = "https://mcnc-rag-search-api.vercel.app/api";

/// Where to get the runtime when it is missing
pub const NODEJS_DOWNLOAD: &str = "https://nodejs.org/";

/// Strip the scheme from a registry URL, keeping a trailing slash.
///
/// `https://npm.pkg.github.com` -> `npm.pkg.github.com/`
pub fn registry_host_path(url: &str) -> String {
    let trimmed = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// Normalize a registry URL so it always ends with a slash.
pub fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
