//! List operation - annotated declarations of a manifest.

use callbuilder_codegen::{
    extract::{discover, extract},
    naming,
};
use callbuilder_manifest::{FnDecl, Manifest};

use crate::reports::{DeclarationInfo, ListReport};

/// Collect every annotated declaration in manifest order.
///
/// Declarations that cannot be extracted are still listed, with the reason.
pub fn list(manifest: &Manifest) -> ListReport {
    let declarations = discover(manifest)
        .iter()
        .map(|raw| {
            let (builder, problem) = match extract(raw) {
                Ok(spec) => (Some(naming::builder_name(&spec)), None),
                Err(err) => (None, Some(err.to_string())),
            };
            DeclarationInfo {
                kind: kind_name(raw.decl),
                signature: raw.signature().to_string(),
                builder,
                problem,
            }
        })
        .collect();

    ListReport {
        declarations,
        fn_count: manifest.fn_count(),
    }
}

fn kind_name(decl: &FnDecl) -> &'static str {
    if decl.constructor {
        "constructor"
    } else if let Some(receiver) = decl.receiver {
        receiver.as_str()
    } else {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use callbuilder_manifest::parse_manifest;

    use super::*;

    #[test]
    fn test_list_annotated_only() {
        let manifest = parse_manifest(
            r#"
[[impl]]
self = "Name"

[[impl.fn]]
name = "new"
constructor = true
args = ["family: Option<String>", "given: Option<String>"]
call_builder = { class_name = "PersonName" }

[[impl.fn]]
name = "greet"
receiver = "&self"
args = ["greeting: String"]

[[impl.fn]]
name = "shout"
receiver = "&mut self"
call_builder = {}
"#,
            "test.toml",
        )
        .unwrap();

        let report = list(&manifest);
        assert_eq!(report.fn_count, 3);
        assert_eq!(report.declarations.len(), 2);

        let ctor = &report.declarations[0];
        assert_eq!(ctor.kind, "constructor");
        assert_eq!(ctor.signature, "Name::new(Option<String>, Option<String>)");
        assert_eq!(ctor.builder.as_deref(), Some("PersonName"));
        assert!(ctor.problem.is_none());

        let shout = &report.declarations[1];
        assert_eq!(shout.kind, "&mut self");
        assert!(shout.builder.is_none());
        assert!(shout.problem.as_deref().unwrap().contains("at least one parameter"));
    }
}
