//! Inherent and trait impl blocks.

use callbuilder_codegen::builder::{CodeFragment, Renderable};

use super::{Fn, Generics};

/// An impl block for a generated type.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    generics: Generics,
    trait_name: Option<String>,
    methods: Vec<Fn>,
}

impl Impl {
    /// An impl for `type_name`; the type's generic arguments are taken from
    /// the generics given with [`Impl::generics`].
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            generics: Generics::new(),
            trait_name: None,
            methods: Vec::new(),
        }
    }

    pub fn generics(mut self, generics: Generics) -> Self {
        self.generics = generics;
        self
    }

    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    fn header(&self) -> String {
        let target = format!("{}{}", self.type_name, self.generics.arguments());
        match &self.trait_name {
            Some(trait_name) => format!(
                "impl{} {} for {} {{",
                self.generics.declaration(),
                trait_name,
                target
            ),
            None => format!("impl{} {} {{", self.generics.declaration(), target),
        }
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(method.to_fragments());
        }
        vec![CodeFragment::braced(self.header(), body)]
    }
}
