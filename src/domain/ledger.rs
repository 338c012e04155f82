use crate::{
    common::{money::Money, rate::Rate},
    domain::projection::SortOrder,
};

/// Interest lines below one currency unit are dropped from the summary.
const MIN_INTEREST: Money = Money::ONE_UNIT;

/// Append-only list of signed movements owned by a single account.
///
/// Every figure shown to the user (balance, totals, interest) is derived from
/// `movements` on demand, so the balance can never disagree with the history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    movements: Vec<Money>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            movements: Vec::new(),
        }
    }

    pub fn with_movements(movements: Vec<Money>) -> Self {
        Self { movements }
    }

    /// Appends without validation; callers check preconditions first.
    pub fn record(&mut self, amount: Money) {
        tracing::debug!(%amount, "recording movement");
        self.movements.push(amount);
    }

    pub fn movements(&self) -> &[Money] {
        &self.movements
    }

    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    pub fn balance(&self) -> Money {
        self.movements.iter().sum()
    }

    pub fn total_deposits(&self) -> Money {
        self.deposits().sum()
    }

    pub fn total_withdrawals(&self) -> Money {
        self.movements
            .iter()
            .filter(|m| m.is_negative())
            .sum::<Money>()
            .abs()
    }

    /// Sum of per-deposit interest, keeping only lines of at least one unit.
    ///
    /// The threshold applies to the computed interest, not to the deposit:
    /// a 70 deposit at 1.2 % earns 0.84 and is dropped, while a 200 deposit
    /// earns 2.4 and is kept.
    pub fn qualifying_interest(&self, rate: Rate) -> Money {
        self.deposits()
            .map(|d| rate.apply(d))
            .filter(|interest| *interest >= MIN_INTEREST)
            .sum()
    }

    /// Whether some movement is at least a tenth of `amount`.
    pub fn supports_loan(&self, amount: Money) -> bool {
        let needed = i128::from(amount.as_i64());
        self.movements
            .iter()
            .any(|m| i128::from(m.as_i64()) * 10 >= needed)
    }

    /// Whether recording `amount` keeps the balance representable.
    pub fn accepts(&self, amount: Money) -> bool {
        self.balance().checked_add(amount).is_some()
    }

    /// Copy of the movements in the requested order.
    pub fn sorted(&self, order: SortOrder) -> Vec<Money> {
        let mut view = self.movements.clone();
        if order == SortOrder::Ascending {
            view.sort();
        }
        view
    }

    fn deposits(&self) -> impl Iterator<Item = Money> + '_ {
        self.movements.iter().copied().filter(Money::is_positive)
    }
}
