//! Core business logic - framework-agnostic record access for the four
//! entities. Everything here takes an explicit `DatabaseConnection` and
//! returns the crate `Result`; the web layer decides how failures surface.

/// Contact (lead) intake and recency queries
pub mod contacto;
/// Student creation and lookups
pub mod estudiante;
/// Teacher creation and lookups
pub mod profesor;
/// Program catalog: queries and startup seeding
pub mod programa;

/// Trim an optional text field, mapping blank input to `None` so the
/// tables never hold empty-string placeholders.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::non_blank;

    #[test]
    fn non_blank_drops_empty_and_whitespace_input() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some(" 999888777 ")), Some("999888777".to_string()));
    }
}
