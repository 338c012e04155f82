/// Why a transfer was refused. No ledger is touched in any of these cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferRejection {
    NonPositiveAmount,
    UnknownReceiver,
    InsufficientFunds,
    SelfTransfer,
    BalanceOverflow,
}

impl std::fmt::Display for TransferRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TransferRejection::NonPositiveAmount => "amount must be positive",
            TransferRejection::UnknownReceiver => "receiver not found",
            TransferRejection::InsufficientFunds => "insufficient funds",
            TransferRejection::SelfTransfer => "cannot transfer to own account",
            TransferRejection::BalanceOverflow => "receiver balance would overflow",
        })
    }
}

/// Recoverable failures of session and transaction operations. Returning one
/// of these guarantees that no state changed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("invalid handle or pin")]
    InvalidCredentials,
    #[error("no active session")]
    NoActiveSession,
    #[error("transfer rejected: {0}")]
    InvalidTransfer(TransferRejection),
    #[error("loan rejected")]
    LoanRejected,
    #[error("close confirmation does not match the signed-in account")]
    InvalidConfirmation,
}

impl BankError {
    /// Stable label used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            BankError::InvalidCredentials => "invalid_credentials",
            BankError::NoActiveSession => "no_active_session",
            BankError::InvalidTransfer(_) => "invalid_transfer",
            BankError::LoanRejected => "loan_rejected",
            BankError::InvalidConfirmation => "invalid_confirmation",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("handle {handle:?} is derived by both {first:?} and {second:?}")]
    DuplicateHandle {
        handle: String,
        first: String,
        second: String,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Usage(#[from] clap::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}
