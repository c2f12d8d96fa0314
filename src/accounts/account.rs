use rust_decimal::Decimal;

/// A monetary holding identified by its requisite (the account number).
///
/// Two accounts are equal when their requisites match, whatever their
/// balances. The balance can only be changed by the ledger.
#[derive(Debug, Clone)]
pub struct Account {
    requisite: String,
    balance: Decimal,
}

impl Account {
    pub fn new(requisite: impl Into<String>, balance: Decimal) -> Self {
        Self {
            requisite: requisite.into(),
            balance,
        }
    }

    pub fn requisite(&self) -> &str {
        &self.requisite
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Credit the account; refused if the balance would overflow.
    pub(crate) fn deposit(&mut self, amount: Decimal) -> bool {
        match self.balance.checked_add(amount) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }

    /// Debit only if the balance covers the amount; draining to zero is allowed.
    pub(crate) fn withdraw(&mut self, amount: Decimal) -> bool {
        if amount > self.balance {
            return false;
        }
        self.balance -= amount;
        true
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.requisite == other.requisite
    }
}

impl Eq for Account {}


#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    fn decimal(amount: f64) -> Decimal {
        Decimal::from_f64(amount).unwrap()
    }

    #[test]
    fn test_deposit() {
        let mut acc = Account::new("BobsAccount", decimal(10.0));
        assert!(acc.deposit(decimal(5.5)));
        assert_eq!(acc.balance(), decimal(15.5));
    }

    #[test]
    fn test_deposit_overflow() {
        let mut acc = Account::new("BobsAccount", Decimal::MAX);
        assert!(!acc.deposit(Decimal::ONE));
        assert_eq!(acc.balance(), Decimal::MAX);
    }

    #[test]
    fn test_withdraw() {
        let mut acc = Account::new("BobsAccount", decimal(100.0));
        assert!(acc.withdraw(decimal(40.0)));
        assert_eq!(acc.balance(), decimal(60.0));

        // Withdraw more than available → no change
        assert!(!acc.withdraw(decimal(100.0)));
        assert_eq!(acc.balance(), decimal(60.0));

        // Exact balance drains the account
        assert!(acc.withdraw(decimal(60.0)));
        assert_eq!(acc.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_equality_by_requisite() {
        let a = Account::new("BobsAccount", decimal(10.0));
        let b = Account::new("BobsAccount", decimal(0.0));
        let c = Account::new("BobsAccount2", decimal(10.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
