//! Embedded browser client bundle.

/// Pre-built browser client, embedded at compile time and served verbatim
/// for the process lifetime. There is no invalidation; a new bundle means a
/// new build.
const BROWSER_JS: &str = include_str!("../assets/browser.js");

/// The browser client source.
pub fn browser_script() -> &'static str {
    BROWSER_JS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_not_empty() {
        assert!(!browser_script().is_empty());
    }

    #[test]
    fn test_bundle_reads_configuration_element() {
        // The bundle boots from the script element the HTML template renders.
        assert!(browser_script().contains("api-reference"));
        assert!(browser_script().contains("data-configuration"));
    }
}
