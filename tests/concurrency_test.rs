use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use transfer_ledger::domain::account::{Account, Balance};
use transfer_ledger::domain::ports::AccountRepository;
use transfer_ledger::domain::transfer::TransferRequest;
use transfer_ledger::error::LedgerError;

mod common;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_debits_sum_exactly() {
    let (ledger, sink) = common::recording_ledger();

    let mut rng = rand::thread_rng();
    let amounts: Vec<Decimal> = (0..200)
        .map(|_| Decimal::new(rng.gen_range(1..=5_000), 2))
        .collect();
    let total: Decimal = amounts.iter().sum();
    let initial = total + dec!(0.01);

    ledger
        .create_account(Account::new("source", initial).unwrap())
        .await
        .unwrap();
    for i in 0..10 {
        ledger
            .create_account(Account::new(format!("dest-{i}"), dec!(0)).unwrap())
            .await
            .unwrap();
    }

    let mut handles = Vec::new();
    for (i, amount) in amounts.into_iter().enumerate() {
        let ledger = ledger.clone();
        handles.push(tokio::spawn(async move {
            let request = TransferRequest::new("source", format!("dest-{}", i % 10), amount).unwrap();
            ledger.transfer(&request).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let source = ledger.get_account("source").await.unwrap().unwrap();
    assert_eq!(source.balance(), Balance::new(dec!(0.01)));

    let credited: Decimal = ledger
        .all_accounts()
        .await
        .unwrap()
        .iter()
        .filter(|a| a.account_id() != "source")
        .map(|a| a.balance().0)
        .sum();
    assert_eq!(credited, total);
    assert_eq!(sink.count_for("source"), 200);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_overdraw_attempts_never_go_negative() {
    let (ledger, _sink) = common::recording_ledger();
    ledger
        .create_account(Account::new("A", dec!(1000)).unwrap())
        .await
        .unwrap();
    ledger
        .create_account(Account::new("B", dec!(0)).unwrap())
        .await
        .unwrap();

    // 64 transfers of 30 against 1000: 33 fit, 31 must be refused.
    let mut handles = Vec::new();
    for _ in 0..64 {
        let ledger = ledger.clone();
        handles.push(tokio::spawn(async move {
            let request = TransferRequest::new("A", "B", dec!(30)).unwrap();
            ledger.transfer(&request).await
        }));
    }

    let mut refused = 0;
    for handle in handles {
        if let Err(e) = handle.await.unwrap() {
            assert!(matches!(e, LedgerError::InsufficientBalance(ref id) if id == "A"));
            refused += 1;
        }
    }

    assert_eq!(refused, 31);
    let a = ledger.get_account("A").await.unwrap().unwrap();
    let b = ledger.get_account("B").await.unwrap().unwrap();
    assert_eq!(a.balance(), Balance::new(dec!(10)));
    assert_eq!(b.balance(), Balance::new(dec!(990)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_opposing_transfers_conserve_total() {
    let (ledger, sink) = common::recording_ledger();
    ledger
        .create_account(Account::new("X", dec!(500)).unwrap())
        .await
        .unwrap();
    ledger
        .create_account(Account::new("Y", dec!(500)).unwrap())
        .await
        .unwrap();

    let mut handles = Vec::new();
    for i in 0..100 {
        let ledger = ledger.clone();
        let (from, to) = if i % 2 == 0 { ("X", "Y") } else { ("Y", "X") };
        handles.push(tokio::spawn(async move {
            let request = TransferRequest::new(from, to, dec!(5)).unwrap();
            ledger.transfer(&request).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let x = ledger.get_account("X").await.unwrap().unwrap();
    let y = ledger.get_account("Y").await.unwrap().unwrap();
    assert_eq!(x.balance() + y.balance(), Balance::new(dec!(1000)));
    assert_eq!(x.balance(), Balance::new(dec!(500)));
    assert_eq!(sink.calls().len(), 200);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_creators_of_same_id() {
    let (ledger, _sink) = common::recording_ledger();

    let mut handles = Vec::new();
    for i in 0..32 {
        let ledger = ledger.clone();
        handles.push(tokio::spawn(async move {
            ledger
                .create_account(Account::new("Id-123", Decimal::from(i)).unwrap())
                .await
        }));
    }

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => created += 1,
            Err(e) => assert!(matches!(e, LedgerError::DuplicateAccount(_))),
        }
    }
    assert_eq!(created, 1);
    assert_eq!(ledger.len(), 1);
}
