pub const SITE_NAME: &str = "Toolshelf";

// Share image used when a page has no image of its own.
pub const DEFAULT_SHARE_IMAGE: &str = "/assets/og-default.png";

#[cfg(debug_assertions)]
pub fn get_site_origin() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_origin() -> &'static str {
    "https://toolshelf.dev"
}
