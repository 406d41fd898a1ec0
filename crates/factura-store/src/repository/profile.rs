//! # Store Profile Repository
//!
//! The store profile is a single JSON object in `config.json`.

use tracing::{debug, info};

use crate::error::StoreResult;
use crate::store::{Collection, Store};
use factura_core::StoreProfile;

/// Repository for the store profile singleton.
#[derive(Debug, Clone, Copy)]
pub struct ProfileRepository<'a> {
    store: &'a Store,
}

impl<'a> ProfileRepository<'a> {
    /// Creates a new ProfileRepository.
    pub fn new(store: &'a Store) -> Self {
        ProfileRepository { store }
    }

    /// Loads the saved profile, or `None` if none has been saved.
    ///
    /// A loaded profile may still be unusable for invoicing; check
    /// [`StoreProfile::is_configured`].
    pub fn load(&self) -> StoreResult<Option<StoreProfile>> {
        let profile: Option<StoreProfile> = self.store.load_document(Collection::Profile)?;
        debug!(found = profile.is_some(), "Store profile loaded");
        Ok(profile)
    }

    /// Replaces the saved profile.
    pub fn save(&self, profile: &StoreProfile) -> StoreResult<()> {
        self.store.save(Collection::Profile, profile)?;
        info!(name = profile.name_display(), "Store profile saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::temp_store;

    #[test]
    fn test_load_without_file() {
        let store = temp_store("profile-none");
        assert_eq!(store.profile().load().unwrap(), None);
    }

    #[test]
    fn test_save_and_reload() {
        let store = temp_store("profile-save");
        let profile = StoreProfile {
            name: Some("Ferretería Andes".to_string()),
            address: None,
            owner_name: Some("Luis Andrade".to_string()),
            tax_id: "1790012345001".to_string(),
            phone: None,
        };

        store.profile().save(&profile).unwrap();
        let loaded = store.profile().load().unwrap().unwrap();
        assert_eq!(loaded, profile);
        assert!(loaded.is_configured());
    }

    #[test]
    fn test_loads_legacy_document() {
        let store = temp_store("profile-legacy");
        std::fs::write(
            store.path(Collection::Profile),
            r#"{
    "direccion": "Sin dirección",
    "nombre": "Kiosko",
    "propietario": "Sin propietario",
    "ruc": "0000000000",
    "telefono": "Sin teléfono"
}"#,
        )
        .unwrap();

        let loaded = store.profile().load().unwrap().unwrap();
        assert_eq!(loaded.name.as_deref(), Some("Kiosko"));
        assert_eq!(loaded.tax_id, "0000000000");
        assert!(loaded.is_configured());
    }

    #[test]
    fn test_partial_document_defaults_missing_keys() {
        let store = temp_store("profile-partial");
        std::fs::write(store.path(Collection::Profile), r#"{"nombre": "Kiosko"}"#).unwrap();

        let loaded = store.profile().load().unwrap().unwrap();
        assert_eq!(loaded.tax_id, "");
        assert!(!loaded.is_configured());
    }
}
