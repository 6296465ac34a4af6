//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_order--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records with a search box.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record with its actions.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Application settings.
pub const PAGE_CAT_SYSTEM: &str = "system";
