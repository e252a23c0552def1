//! Banking system - account creation, login and the main menu

use std::collections::HashMap;

use rand::rngs::{OsRng, SmallRng};
use rand::{CryptoRng, Rng, SeedableRng};

use crate::config::BankConfig;
use crate::domain::result::Result;
use crate::domain::{Account, Command, Menu, MenuOutcome};
use crate::ports::{Console, Notice};
use crate::services::account::BYE;
use crate::services::logging::{LogEvent, LoggingService};
use crate::services::menu::run_menu;

pub const CARD_CREATED: &str = "Your card has been created";
pub const CARD_PROMPT: &str = "Enter your card number: ";
pub const PIN_PROMPT: &str = "Enter your PIN: ";
pub const WRONG_CREDENTIALS: &str = "Wrong card or PIN";
pub const LOGGED_IN: &str = "You have successfully logged in!";

const CREATE_LABEL: &str = "Create an account";
const LOG_IN_LABEL: &str = "Log into an account";

/// In-memory banking system
///
/// Card numbers come from `C`, a fast generator with no security
/// requirement. PINs come from `P`, which must be cryptographically secure.
pub struct BankingSystem<C = SmallRng, P = OsRng> {
    accounts: HashMap<String, Account>,
    config: BankConfig,
    card_rng: C,
    pin_rng: P,
    logger: LoggingService,
}

impl BankingSystem {
    /// Create an empty banking system seeded from the operating system
    pub fn new(config: BankConfig, logger: LoggingService) -> Result<Self> {
        Self::with_rngs(config, logger, SmallRng::from_entropy(), OsRng)
    }
}

impl<C, P> BankingSystem<C, P>
where
    C: Rng,
    P: Rng + CryptoRng,
{
    /// Create an empty banking system with explicit generators
    pub fn with_rngs(
        config: BankConfig,
        logger: LoggingService,
        card_rng: C,
        pin_rng: P,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            accounts: HashMap::new(),
            config,
            card_rng,
            pin_rng,
            logger,
        })
    }

    /// Run the main menu until the session ends
    ///
    /// Returns [`MenuOutcome::ExitMenu`] when the user chose "Exit" here, and
    /// [`MenuOutcome::ExitProcess`] when they chose "Exit" inside an account.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<MenuOutcome> {
        let outcome = run_menu(self, console)?;
        self.logger.log(LogEvent::new("session_exit").with_command(match outcome {
            MenuOutcome::ExitProcess => "account exit",
            _ => "exit",
        }));
        Ok(outcome)
    }

    /// Generate a new account, show its credentials and store it
    ///
    /// A generated card number that is already taken replaces the old account.
    pub fn create_account(&mut self, console: &mut dyn Console) -> Result<MenuOutcome> {
        let account = Account::generate(&mut self.card_rng, &mut self.pin_rng);

        console.notify(Notice::Success, CARD_CREATED);
        account.dump(console);

        if self.accounts.contains_key(&account.card) {
            tracing::debug!("generated card number replaces an existing account");
        }
        self.accounts.insert(account.card.clone(), account);
        self.logger
            .log(LogEvent::new("account_created").with_command(CREATE_LABEL));

        Ok(MenuOutcome::Continue)
    }

    /// Ask for card and PIN, up to `max_login_attempts` times
    ///
    /// An unknown card and a wrong PIN are reported the same way. Every
    /// failure is followed by `failed_login_delay`. On success the account
    /// menu runs; logging out of it ends the login flow.
    pub fn log_in(&mut self, console: &mut dyn Console) -> Result<MenuOutcome> {
        for attempt in 1..=self.config.max_login_attempts {
            let card = console.read_line(CARD_PROMPT)?;
            let pin = console.read_secret(PIN_PROMPT)?;

            match self.accounts.get_mut(&card) {
                Some(account) if account.matches_pin(&pin) => {
                    console.notify(Notice::Success, LOGGED_IN);
                    self.logger.log(
                        LogEvent::new("login_succeeded")
                            .with_command(LOG_IN_LABEL)
                            .with_attempt(attempt),
                    );

                    let outcome = run_menu(account, console)?;
                    if outcome == MenuOutcome::ExitProcess {
                        return Ok(MenuOutcome::ExitProcess);
                    }
                    self.logger
                        .log(LogEvent::new("logged_out").with_command(LOG_IN_LABEL));
                    return Ok(MenuOutcome::Continue);
                }
                _ => {
                    console.notify(Notice::Error, WRONG_CREDENTIALS);
                    self.logger.log(
                        LogEvent::new("login_failed")
                            .with_command(LOG_IN_LABEL)
                            .with_attempt(attempt),
                    );
                    console.pause(self.config.failed_login_delay);
                }
            }
        }

        self.logger.log(
            LogEvent::new("login_locked_out")
                .with_command(LOG_IN_LABEL)
                .with_attempt(self.config.max_login_attempts),
        );
        Ok(MenuOutcome::Continue)
    }

    /// Say goodbye and close the main menu
    pub fn exit(&mut self, console: &mut dyn Console) -> Result<MenuOutcome> {
        console.say(BYE);
        Ok(MenuOutcome::ExitMenu)
    }

    /// Number of stored accounts
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Look up an account by card number
    pub fn account(&self, card: &str) -> Option<&Account> {
        self.accounts.get(card)
    }

    /// All stored accounts, in no particular order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn logger(&self) -> &LoggingService {
        &self.logger
    }
}

impl<C, P> Menu for BankingSystem<C, P>
where
    C: Rng,
    P: Rng + CryptoRng,
{
    fn commands(&self) -> Vec<Command<Self>> {
        vec![
            Command::new("Exit", Self::exit),
            Command::new(CREATE_LABEL, Self::create_account),
            Command::new(LOG_IN_LABEL, Self::log_in),
        ]
    }
}
