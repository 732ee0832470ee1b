//! # Console Session
//!
//! The interactive menu loop.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session::run                                         │
//! │                                                                         │
//! │  banner                                                                 │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  ┌──► "=== Main Menu ===" ──► "Enter your choice: "                     │
//! │  │         │                                                            │
//! │  │         ├── 1..8   ──► commands::* ──► Ok / recoverable error        │
//! │  │         │                                │                           │
//! │  └─────────┴── other  ──► "Invalid choice." ◄┘ (message printed)        │
//! │            │                                                            │
//! │            └── 9 / end of input ──► "Thank you! Visit again."           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use kirana_core::Shop;
use tracing::{debug, info};

use crate::commands;
use crate::config::ConfigState;
use crate::error::{ConsoleError, ConsoleResult};
use crate::io::Prompter;

const RULE: &str = "=====================================";

/// Main menu entries, numbered as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenu {
    Browse,
    ViewCart,
    GenerateBill,
    ViewStock,
    PurchaseHistory,
    Crud,
    Undo,
    Search,
    Exit,
}

impl MainMenu {
    pub const ALL: [MainMenu; 9] = [
        MainMenu::Browse,
        MainMenu::ViewCart,
        MainMenu::GenerateBill,
        MainMenu::ViewStock,
        MainMenu::PurchaseHistory,
        MainMenu::Crud,
        MainMenu::Undo,
        MainMenu::Search,
        MainMenu::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainMenu::Browse => "Browse by Category",
            MainMenu::ViewCart => "View Cart",
            MainMenu::GenerateBill => "Generate Bill",
            MainMenu::ViewStock => "View Stock",
            MainMenu::PurchaseHistory => "View Purchase History",
            MainMenu::Crud => "CRUD Operations for Products",
            MainMenu::Undo => "Undo Last Cart Action",
            MainMenu::Search => "Search Products",
            MainMenu::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for MainMenu {
    type Error = i64;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| MainMenu::ALL.get(index).copied())
            .ok_or(choice)
    }
}

/// One operator session: the shop state, its settings and the terminal.
pub struct Session<R, W> {
    pub(crate) shop: Shop,
    pub(crate) config: ConfigState,
    pub(crate) io: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(shop: Shop, config: ConfigState, io: Prompter<R, W>) -> Self {
        Session { shop, config, io }
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    /// Gives back the terminal, e.g. to inspect captured output in tests.
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.io
    }

    /// Runs the menu loop until the operator exits or input ends.
    ///
    /// Only terminal I/O failures are returned; every other error is shown
    /// to the operator and the menu comes back.
    pub fn run(&mut self) -> ConsoleResult<()> {
        self.banner()?;

        loop {
            self.show_menu()?;
            let outcome = match self.io.ask_number("Enter your choice: ") {
                Ok(choice) => match MainMenu::try_from(choice) {
                    Ok(MainMenu::Exit) => break,
                    Ok(item) => self.dispatch(item),
                    Err(_) => self.io.say("Invalid choice."),
                },
                Err(err) => Err(err),
            };

            match outcome {
                Ok(()) => {}
                Err(ConsoleError::EndOfInput) => {
                    debug!("Input closed");
                    self.io.say("")?;
                    break;
                }
                Err(err) if err.is_recoverable() => {
                    debug!(code = ?err.code(), error = %err, "Command rejected");
                    self.io.say(err.user_message())?;
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            bills = self.shop.history().len(),
            revenue = %self.shop.history().revenue(),
            "Session ended"
        );
        self.io.say("Thank you! Visit again.")
    }

    fn banner(&mut self) -> ConsoleResult<()> {
        let title = format!("Welcome to {}", self.config.store_name);
        self.io.say(RULE)?;
        self.io.say(format!("{:^width$}", title, width = RULE.len()))?;
        self.io.say(RULE)
    }

    fn show_menu(&mut self) -> ConsoleResult<()> {
        self.io.say("\n=== Main Menu ===")?;
        for (number, item) in MainMenu::ALL.iter().enumerate() {
            self.io.say(format!("{}. {}", number + 1, item.label()))?;
        }
        Ok(())
    }

    fn dispatch(&mut self, item: MainMenu) -> ConsoleResult<()> {
        match item {
            MainMenu::Browse => commands::browse::browse_categories(self),
            MainMenu::ViewCart => commands::cart::view_cart(self),
            MainMenu::GenerateBill => commands::cart::generate_bill(self),
            MainMenu::ViewStock => commands::reports::view_stock(self),
            MainMenu::PurchaseHistory => commands::reports::view_history(self),
            MainMenu::Crud => commands::catalog::crud_menu(self),
            MainMenu::Undo => commands::undo::undo_last(self),
            MainMenu::Search => commands::search::search_menu(self),
            MainMenu::Exit => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbering() {
        assert_eq!(MainMenu::try_from(1), Ok(MainMenu::Browse));
        assert_eq!(MainMenu::try_from(8), Ok(MainMenu::Search));
        assert_eq!(MainMenu::try_from(9), Ok(MainMenu::Exit));
        assert_eq!(MainMenu::try_from(0), Err(0));
        assert_eq!(MainMenu::try_from(10), Err(10));
        assert_eq!(MainMenu::try_from(-3), Err(-3));
    }

    #[test]
    fn test_banner_centres_store_name() {
        let title = format!("{:^width$}", "Welcome to Billing System", width = RULE.len());
        assert_eq!(title, "      Welcome to Billing System      ");
    }
}
