use crate::{
    common::{command::SessionCommand, error::BankError},
    domain::{bank::Bank, projection::Projection},
    worker::handlers::{close, loan, login, logout, sort, transfer},
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    /// Applies one command. On success returns the signed-in account's
    /// projection, or `None` once the session has ended.
    pub fn process(
        &mut self,
        bank: &mut Bank,
        command: SessionCommand,
    ) -> Result<Option<Projection>, BankError> {
        tracing::debug!(command = command.name(), "dispatching");
        match command {
            SessionCommand::Login { handle, pin } => login::handle(bank, &handle, pin).map(Some),
            SessionCommand::Logout => {
                logout::handle(bank);
                Ok(None)
            }
            SessionCommand::Transfer { to, amount } => {
                transfer::handle(bank, &to, amount).map(Some)
            }
            SessionCommand::Loan { amount } => loan::handle(bank, amount).map(Some),
            SessionCommand::Close { handle, pin } => {
                close::handle(bank, &handle, pin)?;
                Ok(None)
            }
            SessionCommand::Sort => sort::handle(bank).map(Some),
        }
    }
}
