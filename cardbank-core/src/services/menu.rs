//! Menu loop - render, read, dispatch, repeat

use crate::domain::result::Result;
use crate::domain::{Command, Menu, MenuOutcome};
use crate::ports::{Console, Notice};

pub const INVALID_INTEGER: &str = "Invalid integer entered";
pub const OUT_OF_RANGE: &str = "Choice out of range";

/// A selection typed at the menu prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Index(usize),
    NotAnInteger,
    OutOfRange,
}

/// Interpret one line of input against a menu of `len` entries
pub fn parse_selection(input: &str, len: usize) -> Selection {
    let input = input.trim();
    match input.parse::<i64>() {
        // Too large for i64 is still an integer, just not a valid choice
        Err(_) if is_integer_literal(input) => Selection::OutOfRange,
        Err(_) => Selection::NotAnInteger,
        Ok(n) if n < 0 => Selection::OutOfRange,
        Ok(n) => match usize::try_from(n) {
            Ok(i) if i < len => Selection::Index(i),
            _ => Selection::OutOfRange,
        },
    }
}

fn is_integer_literal(input: &str) -> bool {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Render commands as `"{index}. {label}"` lines, one per line
pub fn render<M>(commands: &[Command<M>]) -> String {
    let mut prompt = commands
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {}", i, c.label))
        .collect::<Vec<_>>()
        .join("\n");
    prompt.push('\n');
    prompt
}

/// Run `menu` until one of its actions terminates the loop
///
/// Returns the terminating outcome: [`MenuOutcome::ExitMenu`] or
/// [`MenuOutcome::ExitProcess`]. Bad selections are reported and re-prompted.
pub fn run_menu<M: Menu>(menu: &mut M, console: &mut dyn Console) -> Result<MenuOutcome> {
    let commands = menu.commands();
    let prompt = render(&commands);

    loop {
        let input = console.read_line(&prompt)?;

        match parse_selection(&input, commands.len()) {
            Selection::NotAnInteger => console.notify(Notice::Warning, INVALID_INTEGER),
            Selection::OutOfRange => console.notify(Notice::Warning, OUT_OF_RANGE),
            Selection::Index(i) => {
                let command = commands[i];
                tracing::debug!(label = command.label, "menu selection");
                let outcome = (command.action)(menu, console)?;
                if outcome.terminates() {
                    return Ok(outcome);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ScriptedConsole;

    #[derive(Default)]
    struct Counter {
        hits: u32,
    }

    impl Counter {
        fn quit(&mut self, _console: &mut dyn Console) -> Result<MenuOutcome> {
            Ok(MenuOutcome::ExitMenu)
        }

        fn hit(&mut self, _console: &mut dyn Console) -> Result<MenuOutcome> {
            self.hits += 1;
            Ok(MenuOutcome::Continue)
        }

        fn halt(&mut self, _console: &mut dyn Console) -> Result<MenuOutcome> {
            Ok(MenuOutcome::ExitProcess)
        }
    }

    impl Menu for Counter {
        fn commands(&self) -> Vec<Command<Self>> {
            vec![
                Command::new("Quit", Counter::quit),
                Command::new("Hit", Counter::hit),
                Command::new("Halt", Counter::halt),
            ]
        }
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("0", 3), Selection::Index(0));
        assert_eq!(parse_selection(" 2 \n", 3), Selection::Index(2));
        assert_eq!(parse_selection("+1", 3), Selection::Index(1));
        assert_eq!(parse_selection("3", 3), Selection::OutOfRange);
        assert_eq!(parse_selection("-1", 3), Selection::OutOfRange);
        assert_eq!(parse_selection("99999999999999999999", 3), Selection::OutOfRange);
        assert_eq!(parse_selection("one", 3), Selection::NotAnInteger);
        assert_eq!(parse_selection("", 3), Selection::NotAnInteger);
        assert_eq!(parse_selection("1.0", 3), Selection::NotAnInteger);
    }

    #[test]
    fn test_render() {
        let counter = Counter::default();
        assert_eq!(render(&counter.commands()), "0. Quit\n1. Hit\n2. Halt\n");
    }

    #[test]
    fn test_dispatch_until_exit() {
        let mut counter = Counter::default();
        let mut console = ScriptedConsole::new(["1", "1", "0", "1"]);

        let outcome = run_menu(&mut counter, &mut console).unwrap();

        assert_eq!(outcome, MenuOutcome::ExitMenu);
        assert_eq!(counter.hits, 2);
        assert_eq!(console.remaining_input(), 1);
    }

    #[test]
    fn test_bad_input_reprompts_without_dispatch() {
        let mut counter = Counter::default();
        let mut console = ScriptedConsole::new(["abc", "7", "-1", "0"]);

        run_menu(&mut counter, &mut console).unwrap();

        assert_eq!(counter.hits, 0);
        assert_eq!(
            console.notices(Notice::Warning),
            vec![INVALID_INTEGER, OUT_OF_RANGE, OUT_OF_RANGE]
        );
    }

    #[test]
    fn test_exit_process_is_returned() {
        let mut counter = Counter::default();
        let mut console = ScriptedConsole::new(["2"]);

        let outcome = run_menu(&mut counter, &mut console).unwrap();
        assert_eq!(outcome, MenuOutcome::ExitProcess);
    }

    #[test]
    fn test_closed_input_propagates() {
        let mut counter = Counter::default();
        let mut console = ScriptedConsole::new(["1"]);

        let err = run_menu(&mut counter, &mut console).unwrap_err();
        assert!(err.is_input_closed());
        assert_eq!(counter.hits, 1);
    }
}
