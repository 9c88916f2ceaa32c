// ==========================================
// 餐廳營運儀表板 - 同步協調器整合測試
// ==========================================
// 覆蓋: 建立→推送狀態機、逐筆整批重試、整批更新替換語意
// ==========================================


use mock_transport::{MockTransport, PushMode};
use resto_ops::domain::{DataSource, ReservationDraft, SyncStatus};
use resto_ops::store::JsonStore;
use resto_ops::sync::{SyncCoordinator, SyncError};
use std::sync::Arc;
use tempfile::TempDir;

// ==========================================
// 輔助函式: 建立協調器 + Mock 傳輸
// ==========================================
fn setup() -> (TempDir, Arc<MockTransport>, SyncCoordinator) {
    let tmp = TempDir::new().expect("建立臨時目錄失敗");
    let transport = Arc::new(MockTransport::new());
    let coordinator = SyncCoordinator::new(transport.clone(), JsonStore::new(tmp.path()));
    (tmp, transport, coordinator)
}

fn writable_source(read_fragment: &str) -> DataSource {
    DataSource::new("主來源", format!("https://example.com/{}", read_fragment))
        .with_write_url("https://example.com/push")
}

fn draft(name: &str) -> ReservationDraft {
    ReservationDraft {
        customer_name: name.to_string(),
        time: "18:00".to_string(),
        pax: 2,
        date: "2025-12-18".to_string(),
        ..Default::default()
    }
}

// ==========================================
// 建立與推送狀態機
// ==========================================

#[tokio::test]
async fn test_create_pushes_and_marks_synced() {
    let (_tmp, transport, mut coordinator) = setup();
    coordinator.add_source(writable_source("a.csv"));

    let record = coordinator.create_reservation(draft("陳小姐")).await.unwrap();
    assert!(record.is_local);
    assert_eq!(record.sync_status, Some(SyncStatus::Synced));
    assert_eq!(transport.pushed_ids(), vec![record.id.clone()]);
}

#[tokio::test]
async fn test_create_without_write_target_stays_pending() {
    let (_tmp, transport, mut coordinator) = setup();
    coordinator.add_source(DataSource::new("唯讀", "https://example.com/a.csv"));

    let record = coordinator.create_reservation(draft("王先生")).await.unwrap();
    assert_eq!(record.sync_status, Some(SyncStatus::Pending));
    assert_eq!(transport.push_call_count(), 0);
}

#[tokio::test]
async fn test_push_failure_marks_failed_then_retry_one() {
    let (_tmp, transport, mut coordinator) = setup();
    coordinator.add_source(writable_source("a.csv"));
    transport.set_push_mode(PushMode::AlwaysFail);

    let record = coordinator.create_reservation(draft("林小姐")).await.unwrap();
    assert_eq!(record.sync_status, Some(SyncStatus::Failed));

    // failed 不是終態: 單筆重試可回到 synced
    transport.set_push_mode(PushMode::AlwaysOk);
    let status = coordinator.retry_one(&record.id).await.unwrap();
    assert_eq!(status, SyncStatus::Synced);
}

#[tokio::test]
async fn test_retry_unknown_id_is_not_found() {
    let (_tmp, _transport, mut coordinator) = setup();
    coordinator.add_source(writable_source("a.csv"));
    match coordinator.retry_one("沒有這筆").await {
        Err(SyncError::NotFound(_)) => {}
        other => panic!("預期 NotFound，得到 {:?}", other.map(|s| s.to_string())),
    }
}

// ==========================================
// 整批重試: 嚴格逐筆 + 成功計數
// ==========================================

#[tokio::test]
async fn test_batch_retry_odd_calls_fail_in_order() {
    let (_tmp, transport, mut coordinator) = setup();
    coordinator.add_source(writable_source("a.csv"));

    // 先讓五筆全部 failed
    transport.set_push_mode(PushMode::AlwaysFail);
    let mut ids = Vec::new();
    for i in 0..5 {
        let r = coordinator
            .create_reservation(draft(&format!("客人{}", i)))
            .await
            .unwrap();
        ids.push(r.id);
    }

    // 偶數序成功、奇數序失敗 → 5 筆中成功 ⌈5/2⌉ = 3
    transport.set_push_mode(PushMode::FailOdd);
    transport.reset_push_log();
    let succeeded = coordinator.retry_all().await.unwrap();
    assert_eq!(succeeded, 3);

    // 嚴格依原始順序逐筆送出
    assert_eq!(transport.pushed_ids(), ids);

    // 偶數序（0,2,4）synced、奇數序（1,3）failed
    let statuses: Vec<_> = coordinator
        .reservations()
        .iter()
        .map(|r| r.sync_status.unwrap())
        .collect();
    assert_eq!(
        statuses,
        vec![
            SyncStatus::Synced,
            SyncStatus::Failed,
            SyncStatus::Synced,
            SyncStatus::Failed,
            SyncStatus::Synced,
        ]
    );
}

#[tokio::test]
async fn test_batch_retry_skips_already_synced() {
    let (_tmp, transport, mut coordinator) = setup();
    coordinator.add_source(writable_source("a.csv"));

    let synced = coordinator.create_reservation(draft("已同步")).await.unwrap();
    transport.set_push_mode(PushMode::AlwaysFail);
    let failed = coordinator.create_reservation(draft("失敗的")).await.unwrap();

    transport.set_push_mode(PushMode::AlwaysOk);
    transport.reset_push_log();
    let succeeded = coordinator.retry_all().await.unwrap();
    assert_eq!(succeeded, 1);
    assert_eq!(transport.pushed_ids(), vec![failed.id]);
    // 已 synced 的紀錄不重推
    assert!(!transport.pushed_ids().contains(&synced.id));
}

#[tokio::test]
async fn test_batch_retry_without_target_errors() {
    let (_tmp, _transport, mut coordinator) = setup();
    match coordinator.retry_all().await {
        Err(SyncError::NoWriteTarget) => {}
        other => panic!("預期 NoWriteTarget，得到 {:?}", other.ok()),
    }
}

// ==========================================
// 整批更新: 替換語意與失敗中止
// ==========================================

#[tokio::test]
async fn test_refresh_replaces_remote_keeps_local() {
    let (_tmp, transport, mut coordinator) = setup();
    coordinator.add_source(writable_source("a.csv"));
    transport.stub_page(
        "a.csv",
        "2025-12-18,,內用,12:00,4,陳小姐,0912345678,,A1\n2025-12-19,,外帶,11:00,1,張先生",
    );

    transport.set_push_mode(PushMode::AlwaysFail);
    let local = coordinator.create_reservation(draft("本地客")).await.unwrap();

    let count = coordinator.refresh_all().await.unwrap();
    assert_eq!(count, 2);

    // 遠端在前、本地串接在後，本地狀態原封不動
    let all = coordinator.reservations();
    assert_eq!(all.len(), 3);
    assert!(!all[0].is_local && all[0].sync_status.is_none());
    assert_eq!(all[2].id, local.id);
    assert_eq!(all[2].sync_status, Some(SyncStatus::Failed));

    // 再次整批更新: 遠端子集整批替換，筆數不累加
    let count = coordinator.refresh_all().await.unwrap();
    assert_eq!(count, 2);
    assert_eq!(coordinator.reservations().len(), 3);

    // 來源時間戳已更新
    assert!(coordinator.sources()[0].last_updated.is_some());
}

#[tokio::test]
async fn test_refresh_failure_leaves_state_untouched() {
    let (_tmp, transport, mut coordinator) = setup();
    coordinator.add_source(writable_source("good.csv"));
    coordinator.add_source(DataSource::new("壞來源", "https://example.com/bad.csv"));
    transport.stub_page("good.csv", "2025-12-18,,內用,12:00,4,陳小姐");
    transport.stub_page("bad.csv", "2025-12-20,,內用,12:00,2,王先生");

    let count = coordinator.refresh_all().await.unwrap();
    assert_eq!(count, 2);

    // 第二個來源失敗 → 整批中止，既有紀錄與時間戳不動
    transport.fail_fetch_for("bad.csv");
    let before: Vec<String> = coordinator.reservations().iter().map(|r| r.id.clone()).collect();
    assert!(coordinator.refresh_all().await.is_err());
    let after: Vec<String> = coordinator.reservations().iter().map(|r| r.id.clone()).collect();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_refresh_persists_across_restart() {
    let tmp = TempDir::new().expect("建立臨時目錄失敗");
    let transport = Arc::new(MockTransport::new());
    transport.stub_page("a.csv", "2025-12-18,,內用,12:00,4,陳小姐");

    {
        let mut coordinator =
            SyncCoordinator::new(transport.clone(), JsonStore::new(tmp.path()));
        coordinator.add_source(writable_source("a.csv"));
        coordinator.refresh_all().await.unwrap();
        coordinator.create_reservation(draft("本地客")).await.unwrap();
    }

    // 重啟: 全量自持久層讀回
    let coordinator = SyncCoordinator::new(transport, JsonStore::new(tmp.path()));
    assert_eq!(coordinator.reservations().len(), 2);
    assert_eq!(coordinator.sources().len(), 1);
}

// ==========================================
// 來源管理與搜尋
// ==========================================

#[tokio::test]
async fn test_first_writable_source_is_global_target() {
    let (_tmp, transport, mut coordinator) = setup();
    coordinator.add_source(DataSource::new("唯讀", "https://example.com/r.csv"));
    coordinator.add_source(
        DataSource::new("可寫一", "https://example.com/a.csv")
            .with_write_url("https://example.com/push-1"),
    );
    coordinator.add_source(
        DataSource::new("可寫二", "https://example.com/b.csv")
            .with_write_url("https://example.com/push-2"),
    );

    // 推送走第一個帶 write_url 的來源（單一全域目標）
    let record = coordinator.create_reservation(draft("陳小姐")).await.unwrap();
    assert_eq!(record.sync_status, Some(SyncStatus::Synced));
    assert_eq!(transport.push_call_count(), 1);
}

#[tokio::test]
async fn test_remove_source_and_search() {
    let (_tmp, transport, mut coordinator) = setup();
    coordinator.add_source(writable_source("a.csv"));
    transport.stub_page(
        "a.csv",
        "2025-12-18,,內用,12:00,4,陳小姐,0912345678\n2025-12-19,,內用,18:00,2,王先生,0987654321",
    );
    coordinator.refresh_all().await.unwrap();

    assert_eq!(coordinator.search("陳小姐").len(), 1);
    assert_eq!(coordinator.search("0987").len(), 1);
    assert_eq!(coordinator.search("2025-12").len(), 2);
    assert_eq!(coordinator.search("沒這人").len(), 0);
    // 空白查詢回傳全部
    assert_eq!(coordinator.search("  ").len(), 2);

    let source_id = coordinator.sources()[0].id.clone();
    coordinator.remove_source(&source_id).unwrap();
    assert!(coordinator.sources().is_empty());
    match coordinator.remove_source(&source_id) {
        Err(SyncError::NotFound(_)) => {}
        other => panic!("預期 NotFound，得到 {:?}", other.ok()),
    }
}
