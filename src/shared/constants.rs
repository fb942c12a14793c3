/// Page used when the `page` query parameter is missing or not a number
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the `per_page` query parameter is missing or not a number
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Minimum number of characters in a category name (after trimming)
pub const CATEGORY_NAME_MIN_LENGTH: usize = 3;
