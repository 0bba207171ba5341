//! Multiplier factory, registry and selection.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::MatrixError;
use crate::multiplier::{DirectMultiplier, MatrixMultiplier, StrassenMultiplier};
use crate::options::EngineOptions;
use crate::scalar::Scalar;

/// Factory trait for creating multipliers by name.
pub trait MultiplierFactory<T: Scalar>: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<Arc<dyn MatrixMultiplier<T>>, MatrixError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory<T> {
    options: EngineOptions,
    cache: RwLock<HashMap<String, Arc<dyn MatrixMultiplier<T>>>>,
}

impl<T: Scalar> DefaultFactory<T> {
    /// Create a factory whose Strassen multipliers use `options`.
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(&self, name: &str) -> Result<Arc<dyn MatrixMultiplier<T>>, MatrixError> {
        match name {
            "direct" | "naive" => Ok(Arc::new(DirectMultiplier::new())),
            "strassen" => Ok(Arc::new(StrassenMultiplier::new(self.options))),
            _ => Err(MatrixError::Config(format!("unknown multiplier: {name}"))),
        }
    }
}

impl<T: Scalar> Default for DefaultFactory<T> {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl<T: Scalar> MultiplierFactory<T> for DefaultFactory<T> {
    fn get(&self, name: &str) -> Result<Arc<dyn MatrixMultiplier<T>>, MatrixError> {
        if let Some(multiplier) = self.cache.read().get(name) {
            return Ok(Arc::clone(multiplier));
        }

        let multiplier = self.create_multiplier(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&multiplier));
        Ok(multiplier)
    }

    fn available(&self) -> Vec<&str> {
        vec!["strassen", "direct"]
    }
}

/// Get the multipliers to run for an algorithm selection (`all` or a name).
pub fn select_multipliers<T: Scalar>(
    algo: &str,
    factory: &dyn MultiplierFactory<T>,
) -> Result<Vec<Arc<dyn MatrixMultiplier<T>>>, MatrixError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all() {
        let factory = DefaultFactory::<i64>::default();
        let multipliers = select_multipliers("all", &factory).unwrap();
        assert_eq!(multipliers.len(), 2);
        assert_eq!(multipliers[0].name(), "Strassen");
        assert_eq!(multipliers[1].name(), "Direct");
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::<i64>::default();
        let multipliers = select_multipliers("direct", &factory).unwrap();
        assert_eq!(multipliers.len(), 1);
        assert_eq!(multipliers[0].name(), "Direct");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::<i64>::default();
        let result = select_multipliers("winograd", &factory);
        assert!(matches!(result, Err(MatrixError::Config(_))));
    }

    #[test]
    fn factory_caches_instances() {
        let factory = DefaultFactory::<i128>::new(EngineOptions::default().with_threshold(4));
        let first = factory.get("strassen").unwrap();
        let second = factory.get("strassen").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
