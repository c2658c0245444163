//! Naming conventions for target languages.

/// Maps the language-neutral names of a `BuilderSpec` to target identifiers.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Builder type names (`AddBuilder`)
    pub to_type: fn(&str) -> String,
    /// Setter and terminal method names (`setFamily` -> `set_family` in Rust)
    pub to_method: fn(&str) -> String,
    /// Field and parameter names
    pub to_field: fn(&str) -> String,
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn type_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_type)(name))
    }

    pub fn method_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_method)(name))
    }

    pub fn field_name(&self, name: &str) -> String {
        self.safe_name(&(self.to_field)(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(s: &str) -> String {
        s.to_uppercase()
    }

    fn keep(s: &str) -> String {
        s.to_string()
    }

    fn suffix(s: &str) -> String {
        format!("{}_", s)
    }

    const SHOUTING: NamingConvention = NamingConvention {
        to_type: upper,
        to_method: keep,
        to_field: keep,
        reserved_words: &["new", "BUILD"],
        escape_reserved: suffix,
    };

    #[test]
    fn test_names_are_transformed_then_escaped() {
        assert_eq!(SHOUTING.type_name("build"), "BUILD_");
        assert_eq!(SHOUTING.type_name("adder"), "ADDER");
        assert_eq!(SHOUTING.method_name("new"), "new_");
        assert_eq!(SHOUTING.field_name("x"), "x");
        assert!(!SHOUTING.is_reserved("build"));
    }
}
