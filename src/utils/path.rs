//! Addon path segment helpers.

/// Suffix carried by every addon resource path.
pub const JSON_SUFFIX: &str = ".json";

/// Extracts the resource id from the last path segment, `<id>.json`.
///
/// Returns `None` when the suffix is missing or nothing precedes it; such
/// paths are not addon resources.
pub fn json_resource_id(segment: &str) -> Option<&str> {
    segment
        .strip_suffix(JSON_SUFFIX)
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_resource_id() {
        assert_eq!(json_resource_id("tt0133093.json"), Some("tt0133093"));
        assert_eq!(json_resource_id("tmdb:603.json"), Some("tmdb:603"));
    }

    #[test]
    fn test_missing_suffix_is_rejected() {
        assert_eq!(json_resource_id("tt0133093"), None);
        assert_eq!(json_resource_id("tt0133093.JSON"), None);
        assert_eq!(json_resource_id(".json"), None);
    }

    #[test]
    fn test_strip_only_once() {
        assert_eq!(json_resource_id("a.json.json"), Some("a.json"));
    }
}
