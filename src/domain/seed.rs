use crate::{
    common::{money::Money, rate::Rate},
    domain::account::{Account, AccountKind, Pin},
};

fn movements(units: &[i64]) -> Vec<Money> {
    units.iter().copied().map(Money::from_units).collect()
}

/// The four demo accounts, in display order.
pub fn accounts() -> Vec<Account> {
    vec![
        Account::new(
            "Jonas Schmedtmann",
            Pin::new(1111),
            Rate::from_basis_points(120),
            AccountKind::Premium,
        )
        .with_movements(movements(&[200, 450, -400, 3000, -650, -130, 70, 1300])),
        Account::new(
            "Jessica Davis",
            Pin::new(2222),
            Rate::from_basis_points(150),
            AccountKind::Standard,
        )
        .with_movements(movements(&[5000, 3400, -150, -790, -3210, -1000, 8500, -30])),
        Account::new(
            "Steven Thomas Williams",
            Pin::new(3333),
            Rate::from_basis_points(70),
            AccountKind::Premium,
        )
        .with_movements(movements(&[200, -200, 340, -300, -20, 50, 400, -460])),
        Account::new(
            "Sarah Smith",
            Pin::new(4444),
            Rate::from_basis_points(100),
            AccountKind::Basic,
        )
        .with_movements(movements(&[430, 1000, 700, 50, 90])),
    ]
}
