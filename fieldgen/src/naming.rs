//! Naming helpers for code generation
//!
//! Case conversion is delegated to the inflector library. Table-name
//! pluralization is a naive best-effort heuristic that mirrors the inverse
//! rule used by the DDL extractor; it is not a linguistic pluralizer.

use inflector::Inflector;

/// Naming conventions shared by the parser, extractor and emitters
pub struct Naming;

impl Naming {
    /// Convert string to `snake_case`
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldgen::naming::Naming;
    /// assert_eq!(Naming::to_snake_case("UserProfile"), "user_profile");
    /// assert_eq!(Naming::to_snake_case("createdAt"), "created_at");
    /// ```
    #[must_use]
    pub fn to_snake_case(input: &str) -> String {
        input.to_snake_case()
    }

    /// Convert string to camelCase
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldgen::naming::Naming;
    /// assert_eq!(Naming::to_camel_case("created_at"), "createdAt");
    /// assert_eq!(Naming::to_camel_case("title"), "title");
    /// ```
    #[must_use]
    pub fn to_camel_case(input: &str) -> String {
        input.to_camel_case()
    }

    /// Convert string to `PascalCase`
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldgen::naming::Naming;
    /// assert_eq!(Naming::to_pascal_case("user_profile"), "UserProfile");
    /// assert_eq!(Naming::to_pascal_case("account"), "Account");
    /// ```
    #[must_use]
    pub fn to_pascal_case(input: &str) -> String {
        input.to_pascal_case()
    }

    /// Module name for a model (`snake_case` singular)
    #[must_use]
    pub fn to_module_name(model: &str) -> String {
        Self::to_snake_case(model)
    }

    /// Module name of the DAO file generated for a model
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldgen::naming::Naming;
    /// assert_eq!(Naming::dao_module_name("UserProfile"), "user_profile_dao");
    /// ```
    #[must_use]
    pub fn dao_module_name(model: &str) -> String {
        format!("{}_dao", Self::to_module_name(model))
    }

    /// Convert a model name to its table name
    ///
    /// Appends `s` unless the `snake_case` name already ends in `s`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldgen::naming::Naming;
    /// assert_eq!(Naming::to_table_name("Account"), "accounts");
    /// assert_eq!(Naming::to_table_name("UserProfile"), "user_profiles");
    /// assert_eq!(Naming::to_table_name("Address"), "address");
    /// ```
    #[must_use]
    pub fn to_table_name(model: &str) -> String {
        let snake = Self::to_snake_case(model);
        if snake.ends_with('s') {
            snake
        } else {
            format!("{snake}s")
        }
    }

    /// Recover a singular model name from a table name
    ///
    /// `ies` becomes `y`; otherwise one trailing `s` is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldgen::naming::Naming;
    /// assert_eq!(Naming::singularize_table_name("accounts"), "account");
    /// assert_eq!(Naming::singularize_table_name("categories"), "category");
    /// assert_eq!(Naming::singularize_table_name("staff"), "staff");
    /// ```
    #[must_use]
    pub fn singularize_table_name(table: &str) -> String {
        if let Some(stem) = table.strip_suffix("ies") {
            format!("{stem}y")
        } else if let Some(stem) = table.strip_suffix('s') {
            stem.to_string()
        } else {
            table.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(Naming::to_snake_case("UserProfile"), "user_profile");
        assert_eq!(Naming::to_snake_case("HTTPRequest"), "http_request");
        assert_eq!(Naming::to_snake_case("simple"), "simple");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(Naming::to_pascal_case("user_profile"), "UserProfile");
        assert_eq!(Naming::to_pascal_case("http_request"), "HttpRequest");
        assert_eq!(Naming::to_pascal_case("Simple"), "Simple");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(Naming::to_camel_case("user_profile"), "userProfile");
        assert_eq!(Naming::to_camel_case("http_request"), "httpRequest");
        assert_eq!(Naming::to_camel_case("simple"), "simple");
    }

    #[test]
    fn test_table_name() {
        assert_eq!(Naming::to_table_name("Post"), "posts");
        assert_eq!(Naming::to_table_name("UserProfile"), "user_profiles");
        assert_eq!(Naming::to_table_name("news"), "news");
        // naive on purpose: no `y` → `ies` rule
        assert_eq!(Naming::to_table_name("Category"), "categorys");
    }

    #[test]
    fn test_singularize_table_name() {
        assert_eq!(Naming::singularize_table_name("posts"), "post");
        assert_eq!(Naming::singularize_table_name("categories"), "category");
        assert_eq!(Naming::singularize_table_name("user_profiles"), "user_profile");
        assert_eq!(Naming::singularize_table_name("fish"), "fish");
        assert_eq!(Naming::singularize_table_name(""), "");
    }

    #[test]
    fn test_table_name_inverts_for_regular_names() {
        for model in ["account", "post", "user_profile", "device"] {
            let table = Naming::to_table_name(model);
            assert_eq!(Naming::singularize_table_name(&table), model);
        }
    }

    #[test]
    fn test_dao_module_name() {
        assert_eq!(Naming::dao_module_name("Account"), "account_dao");
    }

    fn snake_identifier() -> impl Strategy<Value = String> {
        proptest::collection::vec("[a-z]{2,8}", 1..4).prop_map(|words| words.join("_"))
    }

    fn pascal_identifier() -> impl Strategy<Value = String> {
        proptest::collection::vec("[A-Z][a-z]{1,7}", 1..4).prop_map(|words| words.concat())
    }

    proptest! {
        #[test]
        fn prop_snake_case_idempotent(input in snake_identifier()) {
            let once = Naming::to_snake_case(&input);
            prop_assert_eq!(Naming::to_snake_case(&once), once);
        }

        #[test]
        fn prop_camel_case_idempotent(input in snake_identifier()) {
            let once = Naming::to_camel_case(&input);
            prop_assert_eq!(Naming::to_camel_case(&once), once);
        }

        #[test]
        fn prop_pascal_case_idempotent(input in pascal_identifier()) {
            let once = Naming::to_pascal_case(&input);
            prop_assert_eq!(Naming::to_pascal_case(&once), once);
        }

        #[test]
        fn prop_snake_case_of_pascal_idempotent(input in pascal_identifier()) {
            let once = Naming::to_snake_case(&input);
            prop_assert_eq!(Naming::to_snake_case(&once), once);
        }
    }
}
