use crate::{common::money::Money, domain::account::Pin};

/// One user action, decoded by the reader and dispatched by the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Login { handle: String, pin: Pin },
    Logout,
    Transfer { to: String, amount: Money },
    Loan { amount: Money },
    Close { handle: String, pin: Pin },
    Sort,
}

impl SessionCommand {
    pub fn name(&self) -> &'static str {
        match self {
            SessionCommand::Login { .. } => "login",
            SessionCommand::Logout => "logout",
            SessionCommand::Transfer { .. } => "transfer",
            SessionCommand::Loan { .. } => "loan",
            SessionCommand::Close { .. } => "close",
            SessionCommand::Sort => "sort",
        }
    }
}
