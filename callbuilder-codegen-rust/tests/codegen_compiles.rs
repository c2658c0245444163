//! Integration tests that verify generated builders compile against a model.
//!
//! Each test writes the model and the generated builders into a scratch crate
//! and runs `cargo check` on it.

use callbuilder_codegen::{pipeline::Pipeline, testing::ScratchCrate};
use callbuilder_codegen_rust::{Generator, LanguageCodegen};
use callbuilder_manifest::parse_manifest;

fn assert_builders_compile(model: &str, manifest_toml: &str) {
    let manifest = parse_manifest(manifest_toml, "callbuilder.toml").expect("valid manifest");
    let ctx = Pipeline::new().run(manifest).expect("pipeline should succeed");
    assert!(!ctx.has_errors(), "unexpected errors: {:?}", ctx.diagnostics);

    let files = Generator::from_context(&ctx).preview().expect("emission should succeed");
    let scratch = ScratchCrate::new(model, &files[0].content).expect("scratch crate");

    if let Err(err) = scratch.check() {
        panic!(
            "generated builders failed to compile!\n\n{}\n\n=== builders.rs ===\n{}",
            err, files[0].content
        );
    }
}

#[test]
fn test_instance_and_static_builders_compile() {
    assert_builders_compile(
        r#"
pub struct ConfusingSignatures;

impl ConfusingSignatures {
    pub fn add(&self, x: i32, y: i32, z: i32) -> i32 {
        x + y + z
    }

    pub fn concat(a: String, b: String) -> String {
        a + &b
    }
}
"#,
        r#"
[[impl]]
self = "ConfusingSignatures"

[[impl.fn]]
name = "add"
receiver = "&self"
args = ["x: i32", "y: i32", "z: i32"]
returns = "i32"
call_builder = {}

[[impl.fn]]
name = "concat"
args = ["a: String", "b: String"]
returns = "String"
call_builder = {}
"#,
    );
}

#[test]
fn test_generic_owner_builders_compile() {
    assert_builders_compile(
        r#"
pub struct HasGen<E: Clone> {
    pub items: Vec<E>,
}

impl<E: Clone> HasGen<E> {
    pub fn pick_some(&self, a: E, b: E) -> Vec<E> {
        vec![a, b]
    }

    pub fn to_iterable<F: Into<E>>(&self, first: F, second: F) -> Vec<E> {
        vec![first.into(), second.into()]
    }

    pub fn describe(self, prefix: String) -> String {
        format!("{}{}", prefix, self.items.len())
    }

    pub fn pick_second(_first: String, second: String) -> String {
        second
    }

    pub fn lazy_append<F>(mut all_but_last: Vec<F>, last: F) -> Vec<F> {
        all_but_last.push(last);
        all_but_last
    }
}
"#,
        r#"
[[impl]]
self = "HasGen<E>"
generics = ["E: Clone"]

[[impl.fn]]
name = "pick_some"
receiver = "&self"
args = ["a: E", "b: E"]
returns = "Vec<E>"
call_builder = {}

[[impl.fn]]
name = "to_iterable"
receiver = "&self"
generics = ["F: Into<E>"]
args = ["first: F", "second: F"]
returns = "Vec<E>"
call_builder = {}

[[impl.fn]]
name = "describe"
receiver = "self"
args = ["prefix: String"]
returns = "String"
call_builder = {}

[[impl.fn]]
name = "pick_second"
args = ["first: String", "second: String"]
returns = "String"
call_builder = {}

[[impl.fn]]
name = "lazy_append"
generics = ["F"]
args = ["all_but_last: Vec<F>", "last: F"]
returns = "Vec<F>"
call_builder = {}
"#,
    );
}

#[test]
fn test_constructors_and_phantom_compile() {
    assert_builders_compile(
        r#"
pub struct Container<I> {
    pub items: Vec<I>,
}

impl<I> Container<I> {
    pub fn new(items: Vec<I>) -> Self {
        Self { items }
    }
}

pub struct Factory;

impl Factory {
    pub fn empty<T>(capacity: usize) -> Vec<T> {
        Vec::with_capacity(capacity)
    }
}

pub struct Counter(pub u32);

impl Counter {
    pub fn bump(&mut self, by: u8, twice: bool) {
        self.0 += u32::from(by) * if twice { 2 } else { 1 };
    }
}
"#,
        r#"
[[impl]]
self = "Container<I>"
generics = ["I"]

[[impl.fn]]
name = "new"
constructor = true
args = ["items: Vec<I>"]
call_builder = {}

[[impl]]
self = "Factory"

[[impl.fn]]
name = "empty"
generics = ["T"]
args = ["capacity: usize"]
returns = "Vec<T>"
call_builder = {}

[[impl]]
self = "Counter"

[[impl.fn]]
name = "bump"
receiver = "&mut self"
args = ["by: u8", "twice: bool"]
call_builder = { method_name = "apply" }
"#,
    );
}
