//! Expense categories.
//!
//! Categories are free text; the suggested list only seeds pickers.

/// Category assigned to an expense when none is given.
pub const DEFAULT_EXPENSE_CATEGORY: &str = "General";

/// Categories offered when recording an expense.
pub const SUGGESTED_EXPENSE_CATEGORIES: [&str; 8] = [
    DEFAULT_EXPENSE_CATEGORY,
    "Office Supplies",
    "Fuel",
    "Food",
    "Phone/Internet",
    "Marketing",
    "Equipment",
    "Other",
];

/// Returns the trimmed category, or the default one when blank or missing.
pub fn normalize_category(category: Option<&str>) -> String {
    match category.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_EXPENSE_CATEGORY.to_string(),
    }
}

/// Returns `true` when `category` is one of the suggested names (case-insensitive).
pub fn is_suggested_category(category: &str) -> bool {
    SUGGESTED_EXPENSE_CATEGORIES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(category.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_category_falls_back_to_default() {
        assert_eq!(normalize_category(None), "General");
        assert_eq!(normalize_category(Some("   ")), "General");
        assert_eq!(normalize_category(Some(" Fuel ")), "Fuel");
    }

    #[test]
    fn suggested_lookup_ignores_case() {
        assert!(is_suggested_category("office supplies"));
        assert!(!is_suggested_category("Travel"));
    }
}
