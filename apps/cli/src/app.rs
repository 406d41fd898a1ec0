//! # Application Session
//!
//! Owns the console, the store and the profile state for one run of the
//! menu.

use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use tracing::{error, info};

use crate::commands;
use crate::console::Console;
use crate::error::AppResult;
use crate::menu::{self, MenuOption};
use crate::state::ProfileState;
use factura_store::Store;

/// One interactive session.
pub struct App<R, W> {
    pub console: Console<R, W>,
    pub store: Store,
    pub profile: ProfileState,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Opens a session, loading the store profile.
    pub fn new(console: Console<R, W>, store: Store) -> AppResult<Self> {
        let profile = ProfileState::load(&store)?;
        Ok(App {
            console,
            store,
            profile,
        })
    }

    /// Calendar day stamped on invoices.
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Runs the menu until the user exits.
    ///
    /// A failed action prints its error and returns to the menu. Only
    /// console failures and closed input end the loop early.
    pub fn run(&mut self) -> AppResult<()> {
        menu::print_banner(&mut self.console)?;

        loop {
            menu::print_menu(&mut self.console, &self.profile)?;
            let option = menu::prompt_option(&mut self.console)?;
            info!(?option, "Menu option selected");

            if option == MenuOption::Exit {
                writeln!(self.console.out(), "\n¡Hasta luego!")?;
                return Ok(());
            }

            if let Err(e) = self.dispatch(option) {
                if e.is_fatal() {
                    return Err(e);
                }
                error!(?option, error = %e, "Menu action failed");
                writeln!(self.console.out(), "\nError: {e}")?;
            }
        }
    }

    fn dispatch(&mut self, option: MenuOption) -> AppResult<()> {
        match option {
            MenuOption::ConfigureStore => commands::profile::configure_store(self),
            MenuOption::RegisterCustomer => commands::customer::register_customer(self),
            MenuOption::ListCustomers => commands::customer::list_customers(self),
            MenuOption::RegisterProduct => commands::product::register_product(self),
            MenuOption::ListProducts => commands::product::list_products(self),
            MenuOption::GenerateInvoice => commands::invoice::generate_invoice(self),
            MenuOption::Exit => Ok(()),
        }
    }
}
