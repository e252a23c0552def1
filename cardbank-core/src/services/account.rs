//! Account session - the menu shown after a successful login

use crate::domain::result::Result;
use crate::domain::{Account, Command, Menu, MenuOutcome};
use crate::ports::{Console, Notice};

/// The balance is fixed; there is no ledger behind it
pub const BALANCE_LINE: &str = "Balance: $47,339,000";
pub const LOGGED_OUT: &str = "You have successfully logged out!";
pub const BYE: &str = "Bye!";

impl Account {
    /// Print the card number and PIN
    pub fn dump(&self, console: &mut dyn Console) {
        for line in self.dump_lines() {
            console.say(&line);
        }
    }

    fn balance(&mut self, console: &mut dyn Console) -> Result<MenuOutcome> {
        console.say(BALANCE_LINE);
        Ok(MenuOutcome::Continue)
    }

    fn logout(&mut self, console: &mut dyn Console) -> Result<MenuOutcome> {
        console.notify(Notice::Success, LOGGED_OUT);
        Ok(MenuOutcome::ExitMenu)
    }

    /// Ends the whole session, not just this menu
    fn exit(&mut self, console: &mut dyn Console) -> Result<MenuOutcome> {
        console.say(BYE);
        Ok(MenuOutcome::ExitProcess)
    }
}

impl Menu for Account {
    fn commands(&self) -> Vec<Command<Self>> {
        vec![
            Command::new("Exit", Account::exit),
            Command::new("Balance", Account::balance),
            Command::new("Log out", Account::logout),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ScriptedConsole;
    use crate::services::menu::{render, run_menu};

    #[test]
    fn test_account_menu_labels() {
        let account = Account::from_draws(1, 1);
        assert_eq!(render(&account.commands()), "0. Exit\n1. Balance\n2. Log out\n");
    }

    #[test]
    fn test_balance_then_logout() {
        let mut account = Account::from_draws(1, 1);
        let mut console = ScriptedConsole::new(["1", "1", "2"]);

        let outcome = run_menu(&mut account, &mut console).unwrap();

        assert_eq!(outcome, MenuOutcome::ExitMenu);
        assert_eq!(console.count_line(BALANCE_LINE), 2);
        assert_eq!(console.notices(Notice::Success), vec![LOGGED_OUT]);
    }

    #[test]
    fn test_exit_ends_process() {
        let mut account = Account::from_draws(1, 1);
        let mut console = ScriptedConsole::new(["0"]);

        let outcome = run_menu(&mut account, &mut console).unwrap();

        assert_eq!(outcome, MenuOutcome::ExitProcess);
        assert_eq!(console.output(), vec![BYE]);
    }

    #[test]
    fn test_dump() {
        let account = Account::from_draws(123, 45);
        let mut console = ScriptedConsole::new(Vec::<String>::new());

        account.dump(&mut console);

        assert_eq!(
            console.output(),
            vec!["Your card number: 4000123", "Your PIN: 0045"]
        );
    }
}
