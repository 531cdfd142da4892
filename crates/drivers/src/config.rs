use std::path::PathBuf;

use communicator_domain::DEFAULT_SLOT_COUNT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub pictogram_root: PathBuf,
    pub cache_dir: PathBuf,
    pub slot_count: usize,
    pub thumbnail_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pictogram_root: PathBuf::from("./pictograms"),
            cache_dir: PathBuf::from("cache"),
            slot_count: DEFAULT_SLOT_COUNT,
            thumbnail_size: 256,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.slot_count == 0 {
            return Err("slot count must be at least 1".to_string());
        }
        if self.thumbnail_size == 0 {
            return Err("thumbnail size must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_local_pictograms_and_six_slots() {
        let config = AppConfig::default();
        assert_eq!(config.pictogram_root, PathBuf::from("./pictograms"));
        assert_eq!(config.cache_dir, PathBuf::from("cache"));
        assert_eq!(config.slot_count, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_slots_are_rejected() {
        let config = AppConfig {
            slot_count: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
