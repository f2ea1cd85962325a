//! Engine configuration.

use tracing::warn;

use crate::requests::MAX_PAGE_SIZE;

pub const DEFAULT_SYNC_DESCRIPTION: &str = "balance sync";

const SYNC_DESCRIPTION_VAR: &str = "MONEYPOOLS_SYNC_DESCRIPTION";
const MAX_PAGE_SIZE_VAR: &str = "MONEYPOOLS_MAX_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Description given to the diffuse entries a balance sync creates.
    pub sync_description: String,
    /// Largest page a listing may request; never above [`MAX_PAGE_SIZE`].
    pub max_page_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sync_description: DEFAULT_SYNC_DESCRIPTION.to_string(),
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl EngineConfig {
    /// Reads `MONEYPOOLS_SYNC_DESCRIPTION` and `MONEYPOOLS_MAX_PAGE_SIZE`.
    /// Unset variables keep their defaults; invalid ones are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(description) = lookup(SYNC_DESCRIPTION_VAR) {
            if description.trim().is_empty() {
                warn!(var = SYNC_DESCRIPTION_VAR, "empty sync description; using default");
            } else {
                config.sync_description = description;
            }
        }

        if let Some(raw) = lookup(MAX_PAGE_SIZE_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => config.max_page_size = size,
                _ => warn!(
                    var = MAX_PAGE_SIZE_VAR,
                    value = %raw,
                    max = MAX_PAGE_SIZE,
                    "invalid max page size; using default"
                ),
            }
        }

        config
    }

    pub fn with_sync_description(mut self, description: impl Into<String>) -> Self {
        self.sync_description = description.into();
        self
    }

    /// Clamped to `1..=MAX_PAGE_SIZE`.
    pub fn with_max_page_size(mut self, size: usize) -> Self {
        self.max_page_size = size.clamp(1, MAX_PAGE_SIZE);
        self
    }
}
