//! Explain operation - the structure of one generated builder.

use callbuilder_manifest::Manifest;
use eyre::{Result, bail};

use super::run_pipeline;
use crate::reports::ExplainReport;

/// Execute the explain operation.
///
/// `name` matches a builder's generated name or its source signature key.
pub fn explain(manifest: &Manifest, name: &str) -> Result<ExplainReport> {
    let ctx = run_pipeline(manifest)?;

    let found = ctx
        .builder(name)
        .or_else(|| ctx.builders.iter().find(|b| b.source.as_str() == name));
    if let Some(builder) = found {
        return Ok(ExplainReport {
            builder: builder.clone(),
        });
    }

    let available = ctx
        .builders
        .iter()
        .map(|b| b.generated_name.as_str())
        .collect::<Vec<_>>();
    let mut message = format!("no builder named '{}'", name);
    if !available.is_empty() {
        message.push_str(&format!(" (available: {})", available.join(", ")));
    }
    if ctx.has_errors() {
        message.push_str(&format!(
            "; {} declaration(s) failed, run `callbuilder check` for details",
            ctx.error_count()
        ));
    }
    bail!(message)
}

#[cfg(test)]
mod tests {
    use callbuilder_manifest::parse_manifest;

    use super::*;

    fn manifest() -> Manifest {
        parse_manifest(
            r#"
[[impl]]
self = "HasGen<E>"
generics = ["E: Clone"]

[[impl.fn]]
name = "to_iterable"
receiver = "&self"
generics = ["F: Into<E>"]
args = ["first: F", "second: Vec<E>"]
returns = "Vec<E>"
call_builder = {}
"#,
            "test.toml",
        )
        .unwrap()
    }

    #[test]
    fn test_explain_by_name() {
        let report = explain(&manifest(), "ToIterableBuilder").unwrap();
        assert_eq!(report.builder.type_var_names(), vec!["F", "E"]);
    }

    #[test]
    fn test_explain_by_signature() {
        let report = explain(&manifest(), "HasGen<E>::to_iterable(F, Vec<E>)").unwrap();
        assert_eq!(report.builder.generated_name, "ToIterableBuilder");
    }

    #[test]
    fn test_unknown_name_lists_available() {
        let err = explain(&manifest(), "AddBuilder").unwrap_err();
        assert_eq!(
            err.to_string(),
            "no builder named 'AddBuilder' (available: ToIterableBuilder)"
        );
    }
}
