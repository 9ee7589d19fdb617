//! Tests for loading locale files from disk into a catalog.

use std::fs;
use std::sync::Arc;
use validateable::i18n::{Catalog, CatalogError, Locale};
use validateable::{ErrorCode, Errors, MessageResolver, OwnerScope};

#[test]
fn test_load_dir_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("active_merchant_pt.yml"),
        "pt:\n  active_merchant:\n    errors:\n      blank: deve ser preenchido\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("credit_card_pt.yml"),
        concat!(
            "pt:\n  active_merchant:\n    billing:\n      credit_card:\n",
            "        errors:\n          invalid: numero invalido\n",
        ),
    )
    .unwrap();
    fs::write(dir.path().join("README.txt"), "not a locale file").unwrap();

    let catalog = Catalog::new();
    catalog.load_dir(dir.path()).unwrap();

    let resolver = Arc::new(MessageResolver::new(catalog));
    let mut errors = Errors::new(
        OwnerScope::new("ActiveMerchant::Billing::CreditCard"),
        resolver,
    );
    errors.use_locale("pt");
    errors.add("first_name", ErrorCode::Blank);
    errors.add("number", ErrorCode::Invalid);
    errors.add("month", ErrorCode::Required);

    assert_eq!(
        errors.full_messages(),
        vec![
            "First name deve ser preenchido",
            "Number numero invalido",
            "Month is required"
        ]
    );
}

#[test]
fn test_load_file_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("errors.json");
    fs::write(&path, r#"{"en": {"active_merchant": {"errors": {"empty": "must not be empty"}}}}"#)
        .unwrap();

    let catalog = Catalog::new();
    catalog.load_file(&path).unwrap();

    assert_eq!(
        catalog.lookup(&Locale::english(), "active_merchant.errors", "empty"),
        Some("must not be empty".to_string())
    );
}

#[test]
fn test_load_dir_reports_every_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.yml"), "en: [unclosed\n").unwrap();
    fs::write(dir.path().join("b.json"), "{").unwrap();
    fs::write(dir.path().join("c.yml"), "en:\n  active_merchant:\n    errors:\n      blank: ok\n")
        .unwrap();

    let catalog = Catalog::new();
    let err = catalog.load_dir(dir.path()).unwrap_err();

    match err {
        CatalogError::Multiple(errors) => {
            assert_eq!(errors.len(), 2);
            assert!(matches!(errors[0], CatalogError::Yaml(_, _)));
            assert!(matches!(errors[1], CatalogError::Json(_, _)));
        }
        other => panic!("unexpected error: {}", other),
    }

    assert_eq!(
        catalog.lookup(&Locale::english(), "active_merchant.errors", "blank"),
        Some("ok".to_string())
    );
}

#[test]
fn test_load_missing_dir() {
    let catalog = Catalog::new();
    let result = catalog.load_dir("/definitely/not/a/locale/dir");
    assert!(matches!(result, Err(CatalogError::Io(_, _))));
}

#[test]
fn test_unsupported_file_format() {
    let catalog = Catalog::new();
    let result = catalog.load_file("locales/en.toml");
    assert!(matches!(result, Err(CatalogError::UnsupportedFormat(_))));
}
