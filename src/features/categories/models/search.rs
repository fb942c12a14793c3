/// Columns a category listing may be ordered by.
///
/// Column names cannot be bound as SQL parameters, so caller input is only
/// ever mapped onto one of these variants and never interpolated directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    Name,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Map caller input onto the allow-list. Unknown values sort by `created_at`.
    pub fn resolve(value: &str) -> Self {
        match value {
            "name" => SortField::Name,
            "created_at" => SortField::CreatedAt,
            "updated_at" => SortField::UpdatedAt,
            _ => SortField::default(),
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `"desc"` in any case is descending, everything else ascending
    pub fn resolve(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Search, sort and paging parameters for listing categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCategoryQuery {
    /// 1-indexed
    pub page: i64,
    pub per_page: i64,
    /// Substring matched against name or description
    pub terms: String,
    pub sort: String,
    pub direction: String,
}

impl SearchCategoryQuery {
    pub fn sort_field(&self) -> SortField {
        SortField::resolve(&self.sort)
    }

    pub fn sort_direction(&self) -> SortDirection {
        SortDirection::resolve(&self.direction)
    }

    /// Page actually served. Pages below 1 are treated as page 1.
    pub fn page(&self) -> i64 {
        self.page.max(1)
    }

    /// Rows per page. A negative size yields an empty page.
    pub fn limit(&self) -> i64 {
        self.per_page.max(0)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }

    /// `LIKE` pattern for the search terms, `None` when there is nothing to match
    pub fn terms_pattern(&self) -> Option<String> {
        if self.terms.is_empty() {
            None
        } else {
            Some(format!("%{}%", self.terms))
        }
    }
}
