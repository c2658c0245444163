//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an Output target.

mod check;
mod diagnostics;
mod explain;
mod generate;
mod list;
mod output;

pub use check::{BuilderSummary, CheckReport};
pub use explain::ExplainReport;
pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use list::{DeclarationInfo, ListReport};
pub use output::{Report, TerminalOutput};
