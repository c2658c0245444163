//! Generic parameter lists.

/// A generic type parameter with its trait bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericParam {
    pub name: String,
    pub bounds: Vec<String>,
}

impl GenericParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bound(mut self, bound: impl Into<String>) -> Self {
        self.bounds.push(bound.into());
        self
    }

    fn declaration(&self) -> String {
        if self.bounds.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.bounds.join(" + "))
        }
    }
}

/// The generic parameters of an item, rendered either as a declaration
/// (`<T: Clone, U>`) or as arguments (`<T, U>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generics {
    params: Vec<GenericParam>,
}

impl Generics {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<T: Clone, U>`, or nothing when empty.
    pub fn declaration(&self) -> String {
        self.wrap(self.params.iter().map(GenericParam::declaration))
    }

    /// `<T, U>`, or nothing when empty.
    pub fn arguments(&self) -> String {
        self.wrap(self.params.iter().map(|p| p.name.clone()))
    }

    fn wrap(&self, parts: impl Iterator<Item = String>) -> String {
        if self.params.is_empty() {
            String::new()
        } else {
            format!("<{}>", parts.collect::<Vec<_>>().join(", "))
        }
    }
}

impl FromIterator<GenericParam> for Generics {
    fn from_iter<I: IntoIterator<Item = GenericParam>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let generics = Generics::new();
        assert_eq!(generics.declaration(), "");
        assert_eq!(generics.arguments(), "");
    }

    #[test]
    fn test_declaration_and_arguments() {
        let generics: Generics = [
            GenericParam::new("F").bound("Into<E>"),
            GenericParam::new("E").bound("Clone").bound("Send"),
            GenericParam::new("X"),
        ]
        .into_iter()
        .collect();

        assert_eq!(generics.declaration(), "<F: Into<E>, E: Clone + Send, X>");
        assert_eq!(generics.arguments(), "<F, E, X>");
    }
}
