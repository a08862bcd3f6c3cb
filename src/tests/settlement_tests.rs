use crate::constants::{SETTLEMENT_CANCELLED, SETTLEMENT_CONFIRMED, SETTLEMENT_RECORDED};
use crate::error::LedgerError;
use crate::models::{SettlementStatus, SplitSpec};
use crate::tests::create_test_service;

async fn seed_debt(
    service: &crate::service::LedgerService<
        crate::storage::in_memory::InMemoryStorage,
        crate::audit::in_memory::InMemoryAuditLogger,
    >,
) {
    // b owes a 60 after this.
    service
        .record_expense(
            "g1",
            "Hotel".to_string(),
            60.0,
            "a",
            SplitSpec::Custom {
                percentages: vec![("b".to_string(), 100.0)],
            },
            "a",
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn pending_settlement_leaves_balances_untouched() {
    let service = create_test_service();
    seed_debt(&service).await;

    let settlement = service
        .record_settlement("g1", "b", "a", 60.0, "b")
        .await
        .unwrap();
    assert_eq!(settlement.status, SettlementStatus::Pending);

    let debts = service.group_debts("g1", "a").await.unwrap();
    assert_eq!(debts.len(), 1);
    assert_eq!(debts[0].amount, 60.0);
}

#[tokio::test]
async fn confirmed_settlement_clears_the_debt() {
    let service = create_test_service();
    seed_debt(&service).await;

    let settlement = service
        .record_settlement("g1", "b", "a", 60.0, "b")
        .await
        .unwrap();
    let confirmed = service.confirm_settlement(&settlement.id, "a").await.unwrap();
    assert_eq!(confirmed.status, SettlementStatus::Confirmed);
    assert_eq!(confirmed.resolved_by.as_deref(), Some("a"));

    let debts = service.group_debts("g1", "a").await.unwrap();
    assert!(debts.is_empty());
}

#[tokio::test]
async fn only_the_payee_may_confirm() {
    let service = create_test_service();
    seed_debt(&service).await;

    let settlement = service
        .record_settlement("g1", "b", "a", 60.0, "b")
        .await
        .unwrap();

    let result = service.confirm_settlement(&settlement.id, "b").await;
    assert!(matches!(
        result,
        Err(LedgerError::UnauthorizedSettlementConfirmation(_, _))
    ));
}

#[tokio::test]
async fn cancelled_settlement_never_counts() {
    let service = create_test_service();
    seed_debt(&service).await;

    let settlement = service
        .record_settlement("g1", "b", "a", 60.0, "b")
        .await
        .unwrap();
    let cancelled = service.cancel_settlement(&settlement.id, "b").await.unwrap();
    assert_eq!(cancelled.status, SettlementStatus::Cancelled);

    let debts = service.group_debts("g1", "a").await.unwrap();
    assert_eq!(debts.len(), 1);

    // Terminal: a cancelled settlement cannot be confirmed afterwards.
    let result = service.confirm_settlement(&settlement.id, "a").await;
    assert!(matches!(result, Err(LedgerError::SettlementNotPending(_))));
}

#[tokio::test]
async fn outsiders_cannot_cancel() {
    let service = create_test_service();
    seed_debt(&service).await;

    let settlement = service
        .record_settlement("g1", "b", "a", 60.0, "b")
        .await
        .unwrap();

    let result = service.cancel_settlement(&settlement.id, "mallory").await;
    assert!(matches!(
        result,
        Err(LedgerError::UnauthorizedSettlementCancellation(_, _))
    ));
}

#[tokio::test]
async fn self_settlement_is_rejected() {
    let service = create_test_service();
    let result = service.record_settlement("g1", "a", "a", 10.0, "a").await;
    assert!(matches!(result, Err(LedgerError::SelfSettlement)));
}

#[tokio::test]
async fn unknown_settlement_cannot_transition() {
    let service = create_test_service();
    let result = service.confirm_settlement("missing", "a").await;
    assert!(matches!(result, Err(LedgerError::SettlementNotFound(_))));
}

#[tokio::test]
async fn partial_settlement_leaves_the_remainder() {
    let service = create_test_service();
    seed_debt(&service).await;

    let settlement = service
        .record_settlement("g1", "b", "a", 25.0, "b")
        .await
        .unwrap();
    service.confirm_settlement(&settlement.id, "a").await.unwrap();

    let debts = service.group_debts("g1", "a").await.unwrap();
    assert_eq!(debts.len(), 1);
    assert_eq!(debts[0].amount, 35.0);
}

#[tokio::test]
async fn settlement_lifecycle_is_audited() {
    let service = create_test_service();
    let settlement = service
        .record_settlement("g1", "b", "a", 10.0, "b")
        .await
        .unwrap();
    service.confirm_settlement(&settlement.id, "a").await.unwrap();

    let other = service
        .record_settlement("g1", "c", "a", 5.0, "c")
        .await
        .unwrap();
    service.cancel_settlement(&other.id, "c").await.unwrap();

    let actions: Vec<String> = service
        .audit_entries()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.action)
        .collect();
    assert_eq!(
        actions,
        vec![
            SETTLEMENT_RECORDED,
            SETTLEMENT_CONFIRMED,
            SETTLEMENT_RECORDED,
            SETTLEMENT_CANCELLED,
        ]
    );
}

#[tokio::test]
async fn simplified_plan_over_two_groups_stays_scoped() {
    let service = create_test_service();
    seed_debt(&service).await;

    // A second group's history must not leak into g1's plan.
    service
        .record_expense(
            "g2",
            "Lunch".to_string(),
            20.0,
            "x",
            SplitSpec::Even {
                participants: vec!["x".to_string(), "y".to_string()],
            },
            "x",
        )
        .await
        .unwrap();

    let plan = service.simplified_debts("g1", "a").await.unwrap();
    assert_eq!(plan.transactions.len(), 1);
    assert_eq!(plan.transactions[0].from_member_id, "b");
    assert_eq!(plan.transactions[0].to_member_id, "a");
    assert_eq!(plan.transactions[0].amount, 60.0);
    assert_eq!(plan.summary.original_count, 1);
    assert_eq!(plan.summary.simplified_count, 1);
}
