//! Shared test utilities for the catalog crates.
//!
//! - `TestDatabase`: PostgreSQL container with the schema and seed data applied (feature: "postgres")
//! - `TestDataBuilder`: deterministic, collision-free codes and names
//! - `assertions`: small assertion helpers
//!
//! ```rust,ignore
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!     let code = builder.code("cat");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builds test data from a seed so each test gets its own stable values.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds from a hash of the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_category");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// An upper-case code unique to this builder, e.g. `CAT_1A2B3C4D`.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let code = TestDataBuilder::new(0xABCDEF).code("cat");
    /// assert_eq!(code, "CAT_00ABCDEF");
    /// ```
    pub fn code(&self, prefix: &str) -> String {
        format!("{}_{:08X}", prefix.to_uppercase(), self.seed & 0xFFFF_FFFF)
    }

    /// A display name, e.g. `test-category-42-main`.
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

pub mod assertions {
    /// Unwraps `Some` or fails with `context`.
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Asserts `items` is sorted by `key`, ascending.
    pub fn assert_sorted_by<T, K: PartialOrd + std::fmt::Debug>(
        items: &[T],
        key: impl Fn(&T) -> K,
        context: &str,
    ) {
        let keys: Vec<K> = items.iter().map(key).collect();
        assert!(
            keys.windows(2).all(|w| w[0] <= w[1]),
            "{}: not sorted: {:?}",
            context,
            keys
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let a = TestDataBuilder::new(42);
        let b = TestDataBuilder::new(42);

        assert_eq!(a.code("cat"), b.code("cat"));
        assert_eq!(a.name("category", "x"), b.name("category", "x"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let a = TestDataBuilder::from_test_name("test1");
        let b = TestDataBuilder::from_test_name("test2");

        assert_ne!(a.name("category", "x"), b.name("category", "x"));
    }

    #[test]
    fn test_code_is_upper_case_with_prefix() {
        let code = TestDataBuilder::new(255).code("shoe");
        assert_eq!(code, "SHOE_000000FF");
    }

    #[test]
    fn test_assert_sorted_by() {
        assertions::assert_sorted_by(&[1, 2, 2, 5], |n| *n, "numbers");
    }

    #[test]
    #[should_panic(expected = "not sorted")]
    fn test_assert_sorted_by_panics() {
        assertions::assert_sorted_by(&[3, 1], |n| *n, "numbers");
    }
}
