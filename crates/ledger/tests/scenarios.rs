//! End-to-end flows through the balance engine.

use chrono::{DateTime, Duration, Utc};
use moneypools_core::{DomainError, FixedClock, PoolId};
use moneypools_ledger::{
    BalanceEngine, EngineConfig, MoneyPoolAttributesUpdate, NewMoneyPool, NewTransaction,
    Pagination, StoredTransaction, SyncBalanceRequest, TransactionFilter, TransactionOrder,
    TransferMoneyRequest,
};
use moneypools_money::MoneySum;
use rust_decimal_macros::dec;

fn t0() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn engine() -> BalanceEngine<FixedClock> {
    moneypools_observability::init();
    BalanceEngine::with_clock(EngineConfig::default(), FixedClock::new(t0()))
}

fn sum(amount: &str, code: &str) -> MoneySum {
    MoneySum::normalize(amount, code).unwrap()
}

fn amounts(engine: &BalanceEngine<FixedClock>, pool: PoolId) -> Vec<String> {
    engine
        .get_pool(pool)
        .unwrap()
        .balance
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn fractional_cents_round_half_up() -> anyhow::Result<()> {
    let engine = engine();
    let pool = engine.create_pool(NewMoneyPool::new("wallet").with_balance(sum("0.00", "USD")))?;

    engine.record_transaction(NewTransaction::new(pool.id, sum("12.345", "USD"), "books"))?;

    let pool = engine.get_pool(pool.id)?;
    let json = serde_json::to_value(&pool)?;
    assert_eq!(json["balance"][0]["amount"], "12.35");
    assert_eq!(json["balance"][0]["currency"], "USD");
    assert_eq!(json["last_updated"], serde_json::json!(1_700_000_000.0));
    Ok(())
}

#[test]
fn rent_transfer_moves_money_between_pools() -> anyhow::Result<()> {
    let engine = engine();
    let a = engine.create_pool(NewMoneyPool::new("A").with_balance(sum("100.00", "USD")))?;
    let b = engine.create_pool(NewMoneyPool::new("B").with_balance(sum("0.00", "USD")))?;

    let (debit, credit) = engine.transfer(TransferMoneyRequest {
        from_pool: a.id,
        to_pool: b.id,
        sum: sum("50.00", "USD"),
        description: "rent".into(),
    })?;

    assert_eq!(amounts(&engine, a.id), vec!["50.00 USD"]);
    assert_eq!(amounts(&engine, b.id), vec!["50.00 USD"]);

    assert_eq!(debit.pool_id, a.id);
    assert_eq!(debit.sum.amount(), dec!(-50.00));
    assert_eq!(credit.pool_id, b.id);
    assert_eq!(credit.sum.amount(), dec!(50.00));
    assert_eq!(debit.description, "rent");
    assert_eq!(credit.description, "rent");
    assert_eq!(debit.timestamp, credit.timestamp);

    let listed = engine.list_transactions(Pagination::new(0, 10))?;
    assert_eq!(listed.len(), 2);
    // same timestamp, so the credit (inserted last) lists first
    assert_eq!(listed[0].id, credit.id);
    assert_eq!(listed[1].id, debit.id);
    Ok(())
}

#[test]
fn positional_sync_books_only_drifted_currencies() -> anyhow::Result<()> {
    let engine = engine();
    let pool = engine.create_pool(
        NewMoneyPool::new("travel")
            .with_balance(sum("5.00", "USD"))
            .with_balance(sum("10.00", "EUR")),
    )?;

    let created = engine.sync_balance(pool.id, &SyncBalanceRequest::new([5.00, 8.00]))?;

    assert_eq!(created.len(), 1);
    let entry: &StoredTransaction = &created[0];
    assert_eq!(entry.sum.to_string(), "-2.00 EUR");
    assert!(entry.is_diffuse);
    assert_eq!(entry.description, "balance sync");
    assert_eq!(amounts(&engine, pool.id), vec!["5.00 USD", "8.00 EUR"]);

    assert!(engine
        .sync_balance(pool.id, &SyncBalanceRequest::new([5.00, 8.00]))?
        .is_empty());
    assert!(engine.audit(pool.id)?.is_empty());
    Ok(())
}

#[test]
fn pools_may_go_negative_and_stay_consistent() -> anyhow::Result<()> {
    let engine = engine();
    let pool = engine.create_pool(NewMoneyPool::new("credit card"))?;
    assert_eq!(pool.last_updated, None);

    engine.clock().advance(Duration::hours(1));
    let tx = engine.record_transaction(
        NewTransaction::new(pool.id, sum("-120", "GBP"), "flight")
            .with_tags(["travel"])
            .at(t0() - Duration::days(2)),
    )?;

    let stored = engine.get_pool(pool.id)?;
    assert_eq!(amounts(&engine, pool.id), vec!["-120.00 GBP"]);
    assert_eq!(stored.last_updated, Some(t0() + Duration::hours(1)));
    assert_eq!(tx.timestamp, t0() - Duration::days(2));
    assert!(engine.audit(pool.id)?.is_empty());
    Ok(())
}

#[test]
fn filtered_listing_and_hidden_pools() -> anyhow::Result<()> {
    let engine = engine();
    let cash = engine.create_pool(NewMoneyPool::new("cash"))?;
    let bank = engine.create_pool(NewMoneyPool::new("bank").with_color("#00aa00"))?;

    for (pool, amount) in [(cash.id, "-4"), (bank.id, "-90"), (cash.id, "-11"), (bank.id, "1500")] {
        engine.record_transaction(NewTransaction::new(pool, sum(amount, "EUR"), amount))?;
        engine.clock().advance(Duration::minutes(1));
    }
    engine.sync_balance(cash.id, &SyncBalanceRequest::new(["0"]))?;

    let biggest_spend = engine.list_transactions_filtered(
        &TransactionFilter::default().with_diffuse(false),
        TransactionOrder::LargestNegative,
        Pagination::new(0, 1),
    )?;
    assert_eq!(biggest_spend[0].description, "-90");

    let oldest_cash = engine.list_transactions_filtered(
        &TransactionFilter::for_pool(cash.id),
        TransactionOrder::OldestFirst,
        Pagination::new(0, 10),
    )?;
    let descriptions: Vec<_> = oldest_cash.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions, vec!["-4", "-11", "balance sync"]);

    engine.update_pool_attributes(
        bank.id,
        MoneyPoolAttributesUpdate {
            is_visible: Some(false),
            ..Default::default()
        },
    )?;
    let pools = engine.list_pools()?;
    assert_eq!(pools.len(), 2);
    assert_eq!(pools[0].id, cash.id);
    assert!(!pools[1].is_visible);
    assert_eq!(pools[1].display_color.as_deref(), Some("#00aa00"));
    Ok(())
}

#[test]
fn validation_failures_leave_no_trace() {
    let engine = engine();
    let pool = engine
        .create_pool(NewMoneyPool::new("cash").with_balance(sum("1", "USD")))
        .unwrap();

    let duplicate = engine.create_pool(
        NewMoneyPool::new("dup")
            .with_balance(sum("1", "USD"))
            .with_balance(sum("2", "usd")),
    );
    assert_eq!(duplicate.unwrap_err(), DomainError::DuplicateCurrency("USD".into()));

    let shape = engine.sync_balance(pool.id, &SyncBalanceRequest::new(Vec::<f64>::new()));
    assert!(matches!(shape, Err(DomainError::BalanceShapeMismatch { expected: 1, actual: 0 })));

    let page = engine.list_transactions(Pagination::new(0, 201));
    assert!(matches!(page, Err(DomainError::InvalidPagination(_))));

    assert_eq!(engine.list_pools().unwrap().len(), 1);
    assert!(engine.list_transactions(Pagination::default()).unwrap().is_empty());
    assert!(engine.get_transaction(moneypools_core::TransactionId::new()).unwrap_err().is_not_found());
}
