//! Process-wide engine used by the free functions in [`crate::convenience`].

use std::sync::OnceLock;

use ziwei_config::EngineConfig;

use crate::engine::ChartEngine;
use crate::error::ZiweiError;

static ENGINE: OnceLock<ChartEngine> = OnceLock::new();

/// Build the global engine from `config`. Fails if called more than once.
pub fn init(config: EngineConfig) -> Result<(), ZiweiError> {
    let engine = ChartEngine::new(config)?;
    ENGINE
        .set(engine)
        .map_err(|_| ZiweiError::AlreadyInitialized)
}

pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

pub(crate) fn engine() -> Result<&'static ChartEngine, ZiweiError> {
    ENGINE.get().ok_or(ZiweiError::NotInitialized)
}
