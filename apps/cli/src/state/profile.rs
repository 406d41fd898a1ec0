//! # Profile State
//!
//! The store profile as the menu sees it. Loaded once at startup and
//! replaced only by the configure action; invoices use this copy, not a
//! fresh read of `config.json`.

use tracing::info;

use factura_core::StoreProfile;
use factura_store::{Store, StoreResult};

/// In-memory store profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    profile: Option<StoreProfile>,
}

impl ProfileState {
    /// Loads the saved profile, if any.
    pub fn load(store: &Store) -> StoreResult<Self> {
        let profile = store.profile().load()?;
        let state = ProfileState { profile };
        info!(configured = state.is_configured(), "Store profile state loaded");
        Ok(state)
    }

    pub fn profile(&self) -> Option<&StoreProfile> {
        self.profile.as_ref()
    }

    /// Whether invoices can be generated.
    pub fn is_configured(&self) -> bool {
        self.profile.as_ref().is_some_and(StoreProfile::is_configured)
    }

    /// Replaces the profile after it has been saved.
    pub fn set(&mut self, profile: StoreProfile) {
        self.profile = Some(profile);
    }

    /// Line shown under the main menu.
    pub fn status_line(&self) -> String {
        match &self.profile {
            Some(profile) if profile.is_configured() => {
                format!("Establecimiento: {}", profile.name_display())
            }
            _ => "[!] Establecimiento no configurado".to_string(),
        }
    }
}
