//! The engine shared across threads through `Arc`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use moneypools_ledger::{
    BalanceEngine, EngineConfig, NewMoneyPool, NewTransaction, Pagination, TransferMoneyRequest,
};
use moneypools_money::MoneySum;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn total_usd(engine: &BalanceEngine) -> anyhow::Result<Decimal> {
    Ok(engine
        .list_pools()?
        .iter()
        .flat_map(|p| p.balance.iter())
        .map(MoneySum::amount)
        .sum())
}

#[test]
fn concurrent_transfers_conserve_money() -> anyhow::Result<()> {
    moneypools_observability::init();
    let engine = Arc::new(BalanceEngine::new(EngineConfig::default()));
    let usd = |amount: &str| MoneySum::normalize(amount, "USD");

    let a = engine.create_pool(NewMoneyPool::new("a").with_balance(usd("1000")?))?.id;
    let b = engine.create_pool(NewMoneyPool::new("b").with_balance(usd("1000")?))?.id;

    let workers: Vec<_> = (0..8)
        .map(|worker| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || -> anyhow::Result<()> {
                let (from, to) = if worker % 2 == 0 { (a, b) } else { (b, a) };
                for _ in 0..25 {
                    engine.transfer(TransferMoneyRequest {
                        from_pool: from,
                        to_pool: to,
                        sum: MoneySum::normalize("1.25", "USD")?,
                        description: format!("worker {worker}"),
                    })?;
                    engine.record_transaction(NewTransaction::new(
                        from,
                        MoneySum::normalize("0.01", "USD")?,
                        "interest",
                    ))?;
                }
                Ok(())
            })
        })
        .collect();

    for worker in workers {
        worker.join().expect("worker panicked")?;
    }

    let total = total_usd(&engine)?;
    // 8 workers x 25 rounds x 0.01 interest
    assert_eq!(total, dec!(2002.00));
    assert!(engine.audit(a)?.is_empty());
    assert!(engine.audit(b)?.is_empty());

    let page = engine.list_transactions(Pagination::new(0, 200))?;
    assert_eq!(page.len(), 200);
    Ok(())
}

#[test]
fn readers_never_observe_half_a_write() -> anyhow::Result<()> {
    let engine = Arc::new(BalanceEngine::new(EngineConfig::default()));
    let usd = |amount: &str| MoneySum::normalize(amount, "USD");

    let a = engine.create_pool(NewMoneyPool::new("a").with_balance(usd("1000")?))?.id;
    let b = engine.create_pool(NewMoneyPool::new("b").with_balance(usd("1000")?))?.id;
    let done = Arc::new(AtomicBool::new(false));

    // Interest only ever adds 0.01, so the total stays within
    // 2000.00..=2002.00 and never shrinks. A transfer seen with one leg
    // missing would move it by 5.00.
    let readers: Vec<_> = (0..2)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let done = Arc::clone(&done);
            thread::spawn(move || -> anyhow::Result<usize> {
                let mut last = dec!(2000.00);
                let mut checks = 0;
                loop {
                    let finished = done.load(Ordering::Acquire);
                    let total = total_usd(&engine)?;
                    anyhow::ensure!(
                        (last..=dec!(2002.00)).contains(&total),
                        "total {total} outside {last}..=2002.00"
                    );
                    last = total;
                    for pool in [a, b] {
                        let drifts = engine.audit(pool)?;
                        anyhow::ensure!(drifts.is_empty(), "drift observed: {drifts:?}");
                    }
                    checks += 1;
                    if finished {
                        return Ok(checks);
                    }
                }
            })
        })
        .collect();

    let writers: Vec<_> = (0..4)
        .map(|worker| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || -> anyhow::Result<()> {
                let (from, to) = if worker % 2 == 0 { (a, b) } else { (b, a) };
                for _ in 0..50 {
                    engine.transfer(TransferMoneyRequest {
                        from_pool: from,
                        to_pool: to,
                        sum: MoneySum::normalize("5.00", "USD")?,
                        description: format!("writer {worker}"),
                    })?;
                    engine.record_transaction(NewTransaction::new(
                        to,
                        MoneySum::normalize("0.01", "USD")?,
                        "interest",
                    ))?;
                }
                Ok(())
            })
        })
        .collect();

    for writer in writers {
        writer.join().expect("writer panicked")?;
    }
    done.store(true, Ordering::Release);
    for reader in readers {
        assert!(reader.join().expect("reader panicked")? >= 1);
    }

    assert_eq!(total_usd(&engine)?, dec!(2002.00));
    Ok(())
}
