//! Tests for the process-wide default locale and resolver.
//!
//! Kept to a single test so no other test in this binary observes the
//! default locale changing.

use validateable::i18n::{default_locale, set_default_locale, Catalog, Locale};
use validateable::{ErrorCode, Validateable, ValidationState};

struct Payment {
    amount: Option<u64>,
    state: ValidationState,
}

impl Validateable for Payment {
    fn validation_state(&self) -> &ValidationState {
        &self.state
    }

    fn validation_state_mut(&mut self) -> &mut ValidationState {
        &mut self.state
    }

    fn validate(&mut self) {
        if self.amount.unwrap_or(0) == 0 {
            self.errors_mut().add("amount", ErrorCode::Invalid);
        }
    }
}

#[test]
fn test_default_locale_drives_global_resolution() {
    assert_eq!(default_locale(), Locale::english());

    Catalog::global().insert("en", "active_merchant.errors.invalid", "is not valid");
    Catalog::global().insert("pt", "active_merchant.errors.invalid", "e invalido");

    let mut payment = Payment {
        amount: None,
        state: ValidationState::named("ActiveMerchant::Billing::Payment"),
    };

    assert!(!payment.is_valid());
    assert_eq!(payment.errors().on("amount"), Some("is not valid"));

    set_default_locale("pt");
    assert_eq!(payment.errors().on("amount"), Some("is not valid"));

    assert!(!payment.is_valid());
    assert_eq!(payment.errors().on("amount"), Some("e invalido"));

    // An explicit locale wins over the process default
    payment.errors_mut().use_locale("en");
    assert!(!payment.is_valid());
    assert_eq!(payment.errors().on("amount"), Some("is not valid"));

    payment.errors_mut().use_default_locale();
    payment.amount = Some(100);
    assert!(payment.is_valid());

    set_default_locale(Locale::english());
}
