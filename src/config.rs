use crate::matrix::matrix_dense::SINGULAR_TOLERANCE;
use serde::{Deserialize, Serialize};

/// Tunables of [`crate::engine::MatrixEngine`].
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Absolute bound on `|det|` under which a matrix counts as singular.
    pub singular_tolerance: f64,

    /// Largest order accepted by determinant, inversion and division.
    /// Those run in factorial time; `None` accepts any order.
    pub max_order: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            singular_tolerance: SINGULAR_TOLERANCE,
            max_order: None,
        }
    }
}

impl EngineConfig {
    pub fn with_max_order(mut self, max_order: usize) -> Self {
        self.max_order = Some(max_order);
        self
    }

    pub fn with_singular_tolerance(mut self, tolerance: f64) -> Self {
        self.singular_tolerance = tolerance;
        self
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = EngineConfig::default();
        assert_eq!(config.singular_tolerance, 1e-10);
        assert_eq!(config.max_order, None);
    }

    #[test]
    fn test_from_json() {
        let config: EngineConfig = serde_json::from_str(r#"{"max_order": 8}"#).unwrap();
        assert_eq!(config, EngineConfig::default().with_max_order(8));

        let config: EngineConfig =
            serde_json::from_str(r#"{"singular_tolerance": 1e-6, "max_order": null}"#).unwrap();
        assert_eq!(config.singular_tolerance, 1e-6);
        assert_eq!(config.max_order, None);

        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
