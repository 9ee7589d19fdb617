//! Tests for sharing a catalog and resolver across threads.

use std::sync::Arc;
use std::thread;
use validateable::i18n::{Catalog, Locale};
use validateable::{ErrorCode, Errors, MessageResolver, OwnerScope};

#[test]
fn test_concurrent_resolution() {
    let catalog = Catalog::new();
    catalog.insert("en", "active_merchant.errors.blank", "blank is invalid");
    catalog.insert("pt", "active_merchant.errors.blank", "deve ser preenchido");
    let resolver = Arc::new(MessageResolver::new(catalog));

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                let (locale, expected) = if i % 2 == 0 {
                    ("en", "blank is invalid")
                } else {
                    ("pt", "deve ser preenchido")
                };
                let owner = OwnerScope::new("ActiveMerchant::Billing::Dood");
                let mut errors = Errors::new(owner, resolver);
                errors.use_locale(locale);
                errors.add("name", ErrorCode::Blank);
                assert_eq!(errors.on("name"), Some(expected));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_store_and_lookup() {
    let catalog = Arc::new(Catalog::new());

    let writers: Vec<_> = (0..5)
        .map(|i| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let key = format!("active_merchant.errors.code_{}", i);
                catalog.insert("en", &key, format!("message {}", i));
            })
        })
        .collect();

    for handle in writers {
        handle.join().unwrap();
    }

    let readers: Vec<_> = (0..5)
        .map(|i| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let code = format!("code_{}", i);
                assert_eq!(
                    catalog.lookup(&Locale::english(), "active_merchant.errors", &code),
                    Some(format!("message {}", i))
                );
            })
        })
        .collect();

    for handle in readers {
        handle.join().unwrap();
    }
}
