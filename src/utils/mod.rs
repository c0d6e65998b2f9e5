// Small shared helpers (dates, ordering)
pub mod series_utils;
pub mod time_utils;

// Re-export commonly used items
pub use series_utils::{is_descending_by_date, normalize_ascending};
