use std::sync::Arc;

use chrono::NaiveDate;
use mei_domain::{CompanyInfo, TransactionDraft, TransactionKind, ValidationError};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    storage::{KeyValueStorage, MemoryStorage, StorageKey},
    CoreError, EntryStore,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn store_with_memory() -> (EntryStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let store = EntryStore::new(Box::new(Arc::clone(&storage)));
    (store, storage)
}

#[test]
fn add_transaction_appends_one_entry_with_fields_preserved() {
    let (mut store, _) = store_with_memory();
    let draft = TransactionDraft::new(date(2024, 2, 10), "Paper", Decimal::new(1999, 2))
        .with_category("Office Supplies");

    let id = store
        .add_transaction(TransactionKind::Expense, draft)
        .expect("add expense");

    assert_eq!(store.expenses().len(), 1);
    let stored = store.transaction(TransactionKind::Expense, id).expect("stored");
    assert_eq!(stored.date, date(2024, 2, 10));
    assert_eq!(stored.description, "Paper");
    assert_eq!(stored.value, Decimal::new(1999, 2));
    assert_eq!(stored.category.as_deref(), Some("Office Supplies"));
    assert!(store.incomes().is_empty());
}

#[test]
fn added_entries_get_distinct_ids() {
    let (mut store, _) = store_with_memory();
    let mut ids = Vec::new();
    for n in 0..20 {
        let draft = TransactionDraft::new(date(2024, 2, 1), format!("sale {n}"), Decimal::ONE);
        ids.push(store.add_transaction(TransactionKind::Income, draft).unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[test]
fn add_persists_only_the_touched_collection() {
    let (mut store, storage) = store_with_memory();
    let draft = TransactionDraft::new(date(2024, 2, 1), "Sale", Decimal::new(150000, 2));
    store.add_transaction(TransactionKind::Income, draft).unwrap();

    assert!(storage.get(StorageKey::Incomes.as_str()).unwrap().is_some());
    assert!(storage.get(StorageKey::Expenses.as_str()).unwrap().is_none());
    assert!(storage.get(StorageKey::TaxPaid.as_str()).unwrap().is_none());
    assert!(storage.get(StorageKey::CompanyInfo.as_str()).unwrap().is_none());
}

#[test]
fn blank_expense_description_is_rejected_without_mutation() {
    let (mut store, storage) = store_with_memory();
    let draft = TransactionDraft::new(date(2024, 2, 1), "", Decimal::new(30050, 2));

    let err = store
        .add_transaction(TransactionKind::Expense, draft)
        .expect_err("blank description must fail");

    assert!(
        matches!(err, CoreError::Validation(ValidationError::BlankDescription)),
        "unexpected error: {err:?}"
    );
    assert!(store.expenses().is_empty());
    assert!(storage.is_empty());
}

#[test]
fn negative_value_is_rejected() {
    let (mut store, _) = store_with_memory();
    let draft = TransactionDraft::new(date(2024, 2, 1), "Refund", Decimal::new(-1, 0));
    let err = store
        .add_transaction(TransactionKind::Income, draft)
        .expect_err("negative value must fail");
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::NegativeValue)
    ));
    assert!(store.incomes().is_empty());
}

#[test]
fn edit_replaces_in_place_and_is_idempotent() {
    let (mut store, _) = store_with_memory();
    let first = store
        .add_transaction(
            TransactionKind::Expense,
            TransactionDraft::new(date(2024, 2, 1), "Fuel", Decimal::new(100, 0)),
        )
        .unwrap();
    store
        .add_transaction(
            TransactionKind::Expense,
            TransactionDraft::new(date(2024, 2, 2), "Food", Decimal::new(30, 0)),
        )
        .unwrap();

    let mut updated = store
        .transaction(TransactionKind::Expense, first)
        .cloned()
        .unwrap();
    updated.description = "Fuel (van)".into();
    updated.value = Decimal::new(12050, 2);
    updated.category = Some("Fuel".into());

    assert!(store
        .edit_transaction(TransactionKind::Expense, updated.clone())
        .unwrap());
    let once = store.expenses().to_vec();
    assert!(store
        .edit_transaction(TransactionKind::Expense, updated)
        .unwrap());
    let twice = store.expenses().to_vec();

    assert_eq!(once, twice);
    assert_eq!(twice[0].id, first);
    assert_eq!(twice[0].description, "Fuel (van)");
    assert_eq!(twice[1].description, "Food");
}

#[test]
fn edit_of_unknown_id_is_a_no_op() {
    let (mut store, storage) = store_with_memory();
    let draft = TransactionDraft::new(date(2024, 2, 1), "Sale", Decimal::ONE);
    let id = store.add_transaction(TransactionKind::Income, draft).unwrap();
    let before = storage.get(StorageKey::Incomes.as_str()).unwrap();

    let mut stranger = store.transaction(TransactionKind::Income, id).cloned().unwrap();
    stranger.id = Uuid::new_v4();
    stranger.description = "Other".into();

    assert!(!store
        .edit_transaction(TransactionKind::Income, stranger)
        .unwrap());
    assert_eq!(store.incomes().len(), 1);
    assert_eq!(store.incomes()[0].description, "Sale");
    assert_eq!(storage.get(StorageKey::Incomes.as_str()).unwrap(), before);
}

#[test]
fn edit_with_blank_description_is_rejected() {
    let (mut store, _) = store_with_memory();
    let draft = TransactionDraft::new(date(2024, 2, 1), "Sale", Decimal::ONE);
    let id = store.add_transaction(TransactionKind::Income, draft).unwrap();
    let mut updated = store.transaction(TransactionKind::Income, id).cloned().unwrap();
    updated.description = "   ".into();

    assert!(store
        .edit_transaction(TransactionKind::Income, updated)
        .is_err());
    assert_eq!(store.incomes()[0].description, "Sale");
}

#[test]
fn delete_twice_is_a_no_op_the_second_time() {
    let (mut store, _) = store_with_memory();
    let draft = TransactionDraft::new(date(2024, 2, 1), "Sale", Decimal::ONE);
    let id = store.add_transaction(TransactionKind::Income, draft).unwrap();

    let removed = store.delete_transaction(TransactionKind::Income, id);
    assert_eq!(removed.map(|txn| txn.id), Some(id));
    assert!(store.delete_transaction(TransactionKind::Income, id).is_none());
    assert!(store.transaction(TransactionKind::Income, id).is_none());
    assert!(store.incomes().is_empty());
}

#[test]
fn delete_from_the_other_collection_does_nothing() {
    let (mut store, _) = store_with_memory();
    let draft = TransactionDraft::new(date(2024, 2, 1), "Sale", Decimal::ONE);
    let id = store.add_transaction(TransactionKind::Income, draft).unwrap();
    assert!(store.delete_transaction(TransactionKind::Expense, id).is_none());
    assert_eq!(store.incomes().len(), 1);
}

#[test]
fn tax_paid_is_coerced_to_zero_when_negative_or_not_numeric() {
    let (mut store, storage) = store_with_memory();
    assert_eq!(store.set_tax_paid(Decimal::new(7600, 2)), Decimal::new(7600, 2));
    assert_eq!(
        storage.get(StorageKey::TaxPaid.as_str()).unwrap().as_deref(),
        Some("76.00")
    );
    assert_eq!(store.set_tax_paid(Decimal::new(-5, 0)), Decimal::ZERO);
    assert_eq!(store.set_tax_paid_input("abc"), Decimal::ZERO);
    assert_eq!(store.set_tax_paid_input("76,50"), Decimal::new(7650, 2));
    assert_eq!(store.set_tax_paid_input("-3"), Decimal::ZERO);
    assert_eq!(store.tax_paid(), Decimal::ZERO);
}

#[test]
fn company_info_is_replaced_wholesale() {
    let (mut store, storage) = store_with_memory();
    store.save_company_info(CompanyInfo::new("Maria MEI", "12.345.678/0001-90", "Rua A"));
    store.save_company_info(CompanyInfo::new("Maria MEI", "", ""));

    assert_eq!(store.company_info().tax_id, "");
    let raw = storage
        .get(StorageKey::CompanyInfo.as_str())
        .unwrap()
        .expect("company info persisted");
    assert!(raw.contains("\"name\":\"Maria MEI\""));
}

#[test]
fn monthly_summary_matches_reference_scenario() {
    let (mut store, _) = store_with_memory();
    store
        .add_transaction(
            TransactionKind::Income,
            TransactionDraft::new(date(2024, 2, 5), "Sale", Decimal::new(150000, 2)),
        )
        .unwrap();
    store
        .add_transaction(
            TransactionKind::Expense,
            TransactionDraft::new(date(2024, 2, 6), "Material", Decimal::new(30050, 2)),
        )
        .unwrap();
    store
        .add_transaction(
            TransactionKind::Income,
            TransactionDraft::new(date(2024, 1, 31), "Old sale", Decimal::new(999, 0)),
        )
        .unwrap();
    store.set_tax_paid(Decimal::new(7600, 2));

    let summary = store.monthly_summary(&date(2024, 2, 20));
    assert_eq!(summary.total_income, Decimal::new(150000, 2));
    assert_eq!(summary.total_expenses, Decimal::new(30050, 2));
    assert_eq!(summary.profit, Decimal::new(112350, 2));
}

#[test]
fn monthly_summary_of_huge_entries_does_not_abort() {
    let (mut store, _) = store_with_memory();
    for description in ["Contract", "Second contract"] {
        store
            .add_transaction(
                TransactionKind::Income,
                TransactionDraft::new(date(2024, 2, 5), description, Decimal::MAX),
            )
            .unwrap();
    }
    store.set_tax_paid(Decimal::new(7600, 2));

    let summary = store.monthly_summary(&date(2024, 2, 20));
    assert_eq!(summary.total_income, Decimal::MAX);
    assert_eq!(summary.profit, Decimal::MAX - Decimal::new(7600, 2));
}
