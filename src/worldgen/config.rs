use crate::error::GenError;

/// Map extent configuration.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Map width in abstract units.
    pub width: f64,
    /// Map height in abstract units.
    pub height: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
        }
    }
}

/// Configuration for one world-generation run.
#[derive(Debug, Clone)]
pub struct WorldGenConfig {
    /// World name; a flavor name is generated when unset.
    pub name: Option<String>,
    /// Recorded on the world header, nothing more.
    pub author: Option<String>,
    /// Scale knob, 1..=5. Drives city/district counts.
    pub complexity: u8,
    /// RNG seed; drawn from entropy and recorded on the world when unset.
    pub seed: Option<u64>,
    pub map: MapConfig,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            name: None,
            author: None,
            complexity: 3,
            seed: None,
            map: MapConfig::default(),
        }
    }
}

impl WorldGenConfig {
    /// Reject bad configuration before any entity is created.
    pub fn validate(&self) -> Result<(), GenError> {
        if !(1..=5).contains(&self.complexity) {
            return Err(GenError::Config(format!(
                "complexity {} outside 1..=5",
                self.complexity
            )));
        }
        if self.map.width <= 0.0 || self.map.height <= 0.0 {
            return Err(GenError::Config(format!(
                "map dimensions {}x{} must be positive",
                self.map.width, self.map.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(WorldGenConfig::default().validate().is_ok());
    }

    #[test]
    fn complexity_bounds_enforced() {
        let mut config = WorldGenConfig::default();
        config.complexity = 0;
        assert!(config.validate().is_err());
        config.complexity = 6;
        assert!(config.validate().is_err());
        config.complexity = 5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn degenerate_map_rejected() {
        let mut config = WorldGenConfig::default();
        config.map.width = 0.0;
        assert!(config.validate().is_err());
    }
}
