use crate::{common::money::Money, domain::account::Account};

/// Order in which movements are presented. Never affects the ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Original,
    Ascending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Original => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Original,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    pub fn of(amount: Money) -> Self {
        if amount.is_positive() {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdrawal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementRow {
    /// 1-based position in the projected order.
    pub index: usize,
    pub kind: MovementKind,
    pub amount: Money,
}

/// Read-only snapshot of an account handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub owner: String,
    pub first_name: String,
    pub sort: SortOrder,
    pub movements: Vec<MovementRow>,
    pub balance: Money,
    pub total_deposits: Money,
    pub total_withdrawals: Money,
    pub qualifying_interest: Money,
}

impl Projection {
    pub fn of(account: &Account, sort: SortOrder) -> Self {
        let movements = account
            .ledger
            .sorted(sort)
            .into_iter()
            .enumerate()
            .map(|(i, amount)| MovementRow {
                index: i + 1,
                kind: MovementKind::of(amount),
                amount,
            })
            .collect();

        Self {
            owner: account.owner.clone(),
            first_name: account.first_name().to_string(),
            sort,
            movements,
            balance: account.balance(),
            total_deposits: account.ledger.total_deposits(),
            total_withdrawals: account.ledger.total_withdrawals(),
            qualifying_interest: account.qualifying_interest(),
        }
    }

    pub fn greeting(&self) -> String {
        format!("Welcome back, {}", self.first_name)
    }
}
