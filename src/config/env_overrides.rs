use super::WizardConfig;
use std::path::PathBuf;

impl WizardConfig {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("INITIATIVE_WIZARD_STORAGE_DIR")
            && !dir.is_empty()
        {
            self.storage_dir = PathBuf::from(dir);
        }

        if let Ok(key) = std::env::var("INITIATIVE_WIZARD_DRAFT_KEY")
            && !key.is_empty()
        {
            self.draft_key = key;
        }

        if let Ok(level) = std::env::var("INITIATIVE_WIZARD_LOG_LEVEL")
            && !level.is_empty()
        {
            self.log_level = level;
        }

        if let Ok(marker) = std::env::var("INITIATIVE_WIZARD_DUPLICATE_TITLE_MARKER")
            && !marker.is_empty()
        {
            self.duplicate_title_marker = marker;
        }

        if let Some(ms) = env_millis("INITIATIVE_WIZARD_TEXT_DEBOUNCE_MS") {
            self.text_debounce_ms = ms;
        }
        if let Some(ms) = env_millis("INITIATIVE_WIZARD_NAVIGATION_DELAY_MS") {
            self.navigation_delay_ms = ms;
        }
        if let Some(ms) = env_millis("INITIATIVE_WIZARD_SUCCESS_REDIRECT_MS") {
            self.success_redirect_ms = ms;
        }
    }
}

fn env_millis(key: &str) -> Option<u64> {
    std::env::var(key).ok()?.trim().parse().ok()
}
