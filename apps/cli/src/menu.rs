//! # Main Menu
//!
//! Banner, option list and option prompt.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::AppResult;
use crate::state::ProfileState;
use factura_core::validation::{parse_in_range, ValidationResult};

const BANNER: &str = r"
   ___  _      ___  _____         __    _
  / __\/_\    / __\/__   \/\ /\  /__\  /_\    _     _
 / _\ //_\\  / /     / /\/ / \ \/ \// //_\\ _| |_ _| |_
/ /  /  _  \/ /___  / /  \ \_/ / _  \/  _  \_   _|_   _|
\/   \_/ \_/\____/  \/    \___/\/ \_/\_/ \_/ |_|   |_|

";

const MENU_RULE_WIDTH: usize = 40;

/// The seven menu entries, numbered 1 to 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ConfigureStore,
    RegisterCustomer,
    ListCustomers,
    RegisterProduct,
    ListProducts,
    GenerateInvoice,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 7] = [
        MenuOption::ConfigureStore,
        MenuOption::RegisterCustomer,
        MenuOption::ListCustomers,
        MenuOption::RegisterProduct,
        MenuOption::ListProducts,
        MenuOption::GenerateInvoice,
        MenuOption::Exit,
    ];

    /// Parses the number typed at the menu prompt.
    pub fn parse(s: &str) -> ValidationResult<Self> {
        let choice = parse_in_range(s, 1, Self::ALL.len() as u64, "opción")?;
        Ok(Self::ALL[(choice - 1) as usize])
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::ConfigureStore => "Configurar Establecimiento",
            MenuOption::RegisterCustomer => "Guardar Cliente",
            MenuOption::ListCustomers => "Listar Clientes",
            MenuOption::RegisterProduct => "Guardar Producto",
            MenuOption::ListProducts => "Listar Productos",
            MenuOption::GenerateInvoice => "Generar Factura",
            MenuOption::Exit => "Salir",
        }
    }
}

/// Prints the ASCII banner shown once at startup.
pub fn print_banner<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<()> {
    write!(console.out(), "{BANNER}")?;
    Ok(())
}

/// Prints the option list and the store status line.
pub fn print_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    profile: &ProfileState,
) -> AppResult<()> {
    let rule = "=".repeat(MENU_RULE_WIDTH);
    let out = console.out();

    writeln!(out, "\n{rule}")?;
    writeln!(out, "           SISTEMA DE FACTURACIÓN       ")?;
    writeln!(out, "{rule}")?;
    for (number, option) in MenuOption::ALL.iter().enumerate() {
        writeln!(out, " {}. {}", number + 1, option.label())?;
    }
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", profile.status_line())?;
    Ok(())
}

/// Asks for an option until a number from 1 to 7 is typed.
pub fn prompt_option<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<MenuOption> {
    console.prompt_until("\nSeleccione opción (1-7): ", "opción", MenuOption::parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::tests::{console, output};
    use crate::console::RetryPolicy;

    #[test]
    fn test_parse_options() {
        assert_eq!(MenuOption::parse("1"), Ok(MenuOption::ConfigureStore));
        assert_eq!(MenuOption::parse("6"), Ok(MenuOption::GenerateInvoice));
        assert_eq!(MenuOption::parse("7"), Ok(MenuOption::Exit));
        assert!(MenuOption::parse(" 7 ").is_err());
        assert!(MenuOption::parse("0").is_err());
        assert!(MenuOption::parse("8").is_err());
        assert!(MenuOption::parse("dos").is_err());
        assert!(MenuOption::parse("").is_err());
    }

    #[test]
    fn test_menu_lists_seven_options() {
        let mut c = console("", RetryPolicy::Unbounded);
        print_menu(&mut c, &ProfileState::default()).unwrap();
        let out = output(c);

        assert!(out.contains(" 1. Configurar Establecimiento\n"));
        assert!(out.contains(" 7. Salir\n"));
        assert!(out.ends_with("[!] Establecimiento no configurado\n"));
    }
}
