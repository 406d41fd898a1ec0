//! # Store Profile Command

use std::io::{BufRead, Write};
use tracing::info;

use crate::app::App;
use crate::error::AppResult;
use factura_core::validation::{optional_field, parse_store_tax_id};
use factura_core::StoreProfile;

/// Asks for the store profile, saves it and makes it the session's profile.
pub fn configure_store<R: BufRead, W: Write>(app: &mut App<R, W>) -> AppResult<()> {
    let console = &mut app.console;
    console.title("CONFIGURAR ESTABLECIMIENTO")?;

    let name = console.prompt_line("Nombre del Establecimiento: ")?;
    let address = console.prompt_line("Dirección: ")?;
    let owner_name = console.prompt_line("Propietario del RUC: ")?;
    let tax_id = console.prompt_until("RUC (mínimo 10 dígitos): ", "ruc", parse_store_tax_id)?;
    let phone = console.prompt_line("Teléfono: ")?;

    let profile = StoreProfile {
        name: optional_field(&name),
        address: optional_field(&address),
        owner_name: optional_field(&owner_name),
        tax_id,
        phone: optional_field(&phone),
    };

    app.store.profile().save(&profile)?;
    app.profile.set(profile);
    info!(configured = app.profile.is_configured(), "Store configured");

    write!(app.console.out(), "\nConfiguración guardada!\n")?;
    app.console.pause()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{app_in, output, temp_dir};

    #[test]
    fn test_configure_saves_and_updates_state() {
        let dir = temp_dir("cmd-configure");
        let mut app = app_in(
            &dir,
            "Tienda Sol\n\nRosa Mena\n12345\n17900123ab\n1790012345001\n022345678\n\n",
        );

        configure_store(&mut app).unwrap();
        assert!(app.profile.is_configured());

        let saved = app.store.profile().load().unwrap().unwrap();
        assert_eq!(saved.name.as_deref(), Some("Tienda Sol"));
        assert_eq!(saved.address, None);
        assert_eq!(saved.tax_id, "1790012345001");

        let out = output(app);
        assert_eq!(out.matches("RUC (mínimo 10 dígitos): ").count(), 3);
        assert!(out.ends_with("\nConfiguración guardada!\nPresione Enter..."));
    }

    #[test]
    fn test_blank_name_still_configures() {
        let dir = temp_dir("cmd-configure-blank");
        let mut app = app_in(&dir, "\n\n\n1790012345\n\n\n");

        configure_store(&mut app).unwrap();
        assert!(app.profile.is_configured());
        assert_eq!(app.profile.status_line(), "Establecimiento: Sin nombre");

        let saved = app.store.profile().load().unwrap().unwrap();
        assert_eq!(saved.name, None);
        assert!(saved.is_configured());
    }
}
