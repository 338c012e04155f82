use crate::domain::{bank::Bank, session::Session};

pub fn handle(bank: &mut Bank) {
    if let Some(handle) = bank.session.handle() {
        tracing::info!(handle, "logged out");
    }
    bank.session = Session::Anonymous;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Pin;
    use crate::worker::handlers::login;

    #[test]
    fn logout_is_unconditional() {
        let mut bank = Bank::seeded().unwrap();
        handle(&mut bank);
        assert_eq!(bank.session, Session::Anonymous);

        login::handle(&mut bank, "stw", Pin::new(3333)).unwrap();
        handle(&mut bank);
        assert_eq!(bank.session, Session::Anonymous);
        // the account itself is untouched
        assert!(bank.registry.find("stw").is_some());
    }
}
