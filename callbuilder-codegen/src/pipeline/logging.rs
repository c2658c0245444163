//! Plugin that reports phase boundaries through `tracing`.

use std::{sync::Mutex, time::Instant};

use eyre::Result;
use tracing::{debug, info};

use super::{CompilationContext, Plugin};

/// Logs the start of every phase and, once it finishes, its duration together
/// with the running declaration, builder and diagnostic counts.
#[derive(Debug, Default)]
pub struct TracingPlugin {
    started: Mutex<Option<Instant>>,
}

impl TracingPlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plugin for TracingPlugin {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        debug!(phase, "starting phase");
        if let Ok(mut started) = self.started.lock() {
            *started = Some(Instant::now());
        }
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let elapsed = self
            .started
            .lock()
            .ok()
            .and_then(|mut started| started.take())
            .map(|start| start.elapsed())
            .unwrap_or_default();

        info!(
            phase,
            ?elapsed,
            callables = ctx.callables.len(),
            builders = ctx.builders.len(),
            errors = ctx.error_count(),
            warnings = ctx.warning_count(),
            "phase finished"
        );
        Ok(())
    }
}
