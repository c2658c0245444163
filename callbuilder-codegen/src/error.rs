use callbuilder_ir::SignatureKey;
use thiserror::Error;

/// A declaration that cannot be turned into a builder.
///
/// Every variant aborts generation for one declaration only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("malformed declaration {signature}: {reason}")]
    MalformedDeclaration {
        signature: SignatureKey,
        reason: String,
    },

    #[error(
        "unresolved bound in {signature}: {context} references type variable '{name}', which the builder does not declare"
    )]
    UnresolvedBound {
        signature: SignatureKey,
        /// Where the reference occurs, e.g. "parameter 'first'" or "bound of 'F'"
        context: String,
        name: String,
    },

    #[error(
        "cannot instantiate owner of {signature}: type variable '{name}' is bound by '{bound}', which `()` is not known to satisfy"
    )]
    UninstantiableOwner {
        signature: SignatureKey,
        name: String,
        bound: String,
    },
}

impl GenerateError {
    pub fn signature(&self) -> &SignatureKey {
        match self {
            GenerateError::MalformedDeclaration { signature, .. }
            | GenerateError::UnresolvedBound { signature, .. }
            | GenerateError::UninstantiableOwner { signature, .. } => signature,
        }
    }

    /// Short kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerateError::MalformedDeclaration { .. } => "malformed-declaration",
            GenerateError::UnresolvedBound { .. } => "unresolved-bound",
            GenerateError::UninstantiableOwner { .. } => "uninstantiable-owner",
        }
    }
}
