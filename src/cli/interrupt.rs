//! Ctrl-C handling
//!
//! An interrupted command prints `Aborted.` and exits with the conventional
//! SIGINT status instead of dying silently. Saves go through a temp file and
//! a rename, so the data file is either the old or the new document.

use crate::error::{ExpenseError, ExpenseResult};

/// Line printed when the user interrupts a command
pub const ABORTED_MESSAGE: &str = "Aborted.";

/// Exit status after an interruption (128 + SIGINT)
pub const ABORTED_EXIT_CODE: i32 = 130;

/// Install the process-wide interrupt handler. Fails if one is already set.
pub fn install_interrupt_handler() -> ExpenseResult<()> {
    ctrlc::set_handler(|| {
        println!("{}", ABORTED_MESSAGE);
        std::process::exit(ABORTED_EXIT_CODE);
    })
    .map_err(|e| ExpenseError::Config(format!("Failed to install interrupt handler: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_installs_once() {
        install_interrupt_handler().unwrap();

        let err = install_interrupt_handler().unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
        assert!(err.to_string().contains("interrupt handler"));
    }
}
