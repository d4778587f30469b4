//! Engine factory with lazy creation and cache.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::engine::Engine;
use crate::variant::AlgorithmVariant;

/// Lazily instantiates engines and hands out shared references, so a
/// comparison run touching the same variant twice reuses one instance.
pub struct EngineFactory {
    cache: RwLock<HashMap<AlgorithmVariant, Arc<dyn Engine>>>,
}

impl EngineFactory {
    /// Create an empty factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get or create the engine for a variant.
    #[must_use]
    pub fn get(&self, variant: AlgorithmVariant) -> Arc<dyn Engine> {
        if let Some(engine) = self.cache.read().get(&variant) {
            return Arc::clone(engine);
        }

        let engine: Arc<dyn Engine> = Arc::from(variant.engine());
        self.cache.write().insert(variant, Arc::clone(&engine));
        engine
    }
}

impl Default for EngineFactory {
    fn default() -> Self {
        Self::new()
    }
}
