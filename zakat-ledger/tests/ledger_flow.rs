use rust_decimal_macros::dec;
use zakat_common::error::{InvalidReason, LedgerError};
use zakat_common::genesis::GenesisState;
use zakat_ledger::{ChainExport, EntryContents, LedgerSession, DEFAULT_COLLECTION_ACCOUNT};

fn session_ab() -> LedgerSession {
    let genesis = GenesisState::new()
        .with_allocation("A", dec!(1000))
        .with_allocation("B", dec!(0));
    LedgerSession::with_genesis("0000", DEFAULT_COLLECTION_ACCOUNT, &genesis).unwrap()
}

#[test]
fn test_reference_scenario() {
    let mut session = session_ab();

    session.transfer("A", "B", dec!(100)).unwrap();
    assert_eq!(session.balance("A"), Some(dec!(897.5)));
    assert_eq!(session.balance("B"), Some(dec!(100)));
    assert_eq!(session.balance("ZAKAT_FUND"), Some(dec!(2.5)));
    assert_eq!(session.pending().len(), 1);

    let receipt = session.commit().unwrap();
    assert_eq!(receipt.chain_length, 2);
    assert_eq!(receipt.committed, 1);
    assert!(session.pending().is_empty());

    let chain = session.chain();
    assert_eq!(chain.len(), 2);
    assert_eq!(chain.blocks()[1].prior_hash, chain.blocks()[0].hash);
    assert!(session.validate().is_ok());
}

#[test]
fn test_empty_commit_keeps_chain() {
    let mut session = session_ab();

    assert!(matches!(session.commit(), Err(LedgerError::EmptyBatch)));
    assert_eq!(session.chain().len(), 1);

    session.transfer("A", "B", dec!(10)).unwrap();
    session.commit().unwrap();
    assert!(matches!(session.commit(), Err(LedgerError::EmptyBatch)));
    assert_eq!(session.chain().len(), 2);
}

#[test]
fn test_insufficient_balance_example() {
    let genesis = GenesisState::new()
        .with_allocation("A", dec!(100))
        .with_allocation("B", dec!(0));
    let mut session = LedgerSession::with_genesis("0000", "ZAKAT_FUND", &genesis).unwrap();

    let err = session.transfer("A", "B", dec!(100)).unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
    assert_eq!(session.balance("A"), Some(dec!(100)));
    assert_eq!(session.balance("B"), Some(dec!(0)));
    assert_eq!(session.balance("ZAKAT_FUND"), None);
    assert!(session.pending().is_empty());
}

#[test]
fn test_many_batches_stay_valid_and_conserve_supply() {
    let mut session = session_ab();
    session.create_account("C", dec!(250.75)).unwrap();
    let supply = session.accounts().total_supply();

    let plan = [
        ("A", "B", dec!(100)),
        ("A", "C", dec!(33.33)),
        ("C", "B", dec!(12.5)),
        ("B", "A", dec!(0.2)),
    ];
    for (round, (from, to, amount)) in plan.iter().enumerate() {
        session.transfer(from, to, *amount).unwrap();
        if round % 2 == 1 {
            session.commit().unwrap();
        }
    }

    assert_eq!(session.chain().len(), 3);
    assert!(session.validate().is_ok());
    assert_eq!(session.accounts().total_supply(), supply);

    let sealed: usize = session.chain().blocks().iter().map(|b| b.transfer_count()).sum();
    assert_eq!(sealed, plan.len());
}

#[test]
fn test_levies_accumulate_in_collection_account() {
    let mut session = session_ab();
    let mut expected = dec!(0);

    for amount in [dec!(10), dec!(20.20), dec!(0.19), dec!(99.99)] {
        let record = session.transfer("A", "B", amount).unwrap();
        assert_eq!(record.total_debit, amount + record.levy);
        expected += record.levy;
    }

    assert_eq!(session.balance("ZAKAT_FUND"), Some(expected));
    assert_eq!(session.accounts().collected(), expected);
}

#[test]
fn test_export_restore_and_tamper() {
    let mut session = session_ab();
    session.transfer("A", "B", dec!(100)).unwrap();
    session.commit().unwrap();
    session.transfer("B", "A", dec!(50)).unwrap();
    session.commit().unwrap();

    let json = session.export_chain().to_json_pretty().unwrap();

    let restored = ChainExport::from_json(&json).unwrap().into_chain().unwrap();
    assert_eq!(restored.len(), 3);
    assert!(restored.validate().is_ok());

    let mut forged = ChainExport::from_json(&json).unwrap();
    forged.entries[1].session_id = "intruder".to_string();
    let forged = forged.into_chain().unwrap();
    assert!(matches!(
        forged.validate(),
        Err(LedgerError::ChainInvalid { index: 1, reason: InvalidReason::HashMismatch })
    ));

    let report = forged.audit();
    assert!(!report.is_valid());
    assert_eq!(report.length, 3);
}

#[test]
fn test_exported_entries_read_model() {
    let mut session = session_ab();
    session.transfer("A", "B", dec!(100)).unwrap();
    session.commit().unwrap();

    let export = session.export_chain();
    assert!(matches!(export.entries[0].contents, Some(EntryContents::Genesis { .. })));
    match &export.entries[1].contents {
        Some(EntryContents::Transfers { transfers }) => {
            assert_eq!(transfers.len(), 1);
            assert_eq!(transfers[0].main_leg(), "A -> B: 100");
            assert_eq!(transfers[0].levy_leg(), "A -> ZAKAT_FUND: 2.50");
        }
        other => panic!("unexpected contents: {:?}", other),
    }

    let accounts = session.export_accounts();
    assert_eq!(accounts.accounts.len(), 3);
    assert_eq!(accounts.total, dec!(1000));
}
