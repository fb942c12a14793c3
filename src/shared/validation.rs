use std::fmt;

/// Composite validation error.
///
/// Collects every rule an entity violates instead of stopping at the first one.
/// Violations keep the order in which they were recorded; `Display` joins them
/// with a newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violated rule
    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.errors.join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_errors_into_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_display_joins_in_order() {
        let mut errors = ValidationErrors::new();
        errors.push("first");
        errors.push("second");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.to_string(), "first\nsecond");
        assert_eq!(errors.iter().collect::<Vec<_>>(), vec!["first", "second"]);
        assert!(errors.into_result().is_err());
    }
}
