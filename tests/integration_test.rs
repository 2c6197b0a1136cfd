use chrono::{DateTime, TimeZone, Utc};
use pemesanan::dashboard::DashboardState;
use pemesanan::lifecycle::OrderSystem;
use pemesanan::model::{ConsumptionItem, Order, OrderInput, OrderStatus, COMPLETED_LABEL};
use pemesanan::order_actor::{OrderContext, OrderError};
use pemesanan::view::{OrderQuery, SortOrder, StatusFilter};
use std::sync::Arc;
use store_actor::{
    ActorClient, ActorSettings, FileStorage, MemoryStorage, NoticeLevel, StorageAdapter,
};

const KEY: &str = "pemesanan_data";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn input(acara: &str, delivery: &str) -> OrderInput {
    OrderInput {
        acara: acara.to_string(),
        tanggal_permintaan: "2024-06-01".to_string(),
        tanggal_pengiriman: delivery.to_string(),
        waktu: "Pagi".to_string(),
        lokasi: "Aula".to_string(),
        tamu: "Internal".to_string(),
        yang_mengajukan: "Budi".to_string(),
        untuk_bagian: "Umum".to_string(),
        approval: "Sari".to_string(),
        catatan: String::new(),
        konsumsi: vec![ConsumptionItem::new("Snack", 10, "box")],
    }
}

fn start(storage: Arc<dyn StorageAdapter>) -> OrderSystem {
    OrderSystem::start(storage, ActorSettings::new(KEY), OrderContext::fixed(now()))
}

fn stored(storage: &MemoryStorage) -> Vec<Order> {
    let raw = storage.get(KEY).unwrap().expect("collection persisted");
    serde_json::from_str(&raw).unwrap()
}

#[tokio::test]
async fn test_add_order_starts_waiting() {
    let storage = Arc::new(MemoryStorage::new());
    let system = start(storage.clone());
    let client = &system.order_client;
    client.ready().await.unwrap();

    let before = client.dashboard(&OrderQuery::default()).await.unwrap().counts.total;
    let id = client.add_order(input("Rapat", "2024-07-01")).await.unwrap();
    let after = client.dashboard(&OrderQuery::default()).await.unwrap().counts.total;
    assert_eq!(after, before + 1);

    let order = client.get(id.clone()).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Menunggu);
    assert_eq!(order.status_history.len(), 1);
    assert_eq!(order.status_history[0].status, "Pesanan Dibuat");
    assert_eq!(order.status_history[0].by, "Budi");
    assert_eq!(order.created_at, now());

    // Newest first, and persisted.
    let second = client.add_order(input("Seminar", "2024-07-02")).await.unwrap();
    let all = client.list().await.unwrap();
    assert_eq!(all[0].id, second);
    assert_eq!(stored(&storage), all);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_order_is_rejected_without_mutation() {
    let storage = Arc::new(MemoryStorage::new());
    let system = start(storage.clone());
    let mut notices = system.notifier.subscribe();

    let mut bad = input("Rapat", "2024-07-01");
    bad.konsumsi[0].qty = 0;
    let err = system.order_client.add_order(bad).await.unwrap_err();
    assert!(matches!(err, OrderError::Validation { ref field, .. } if field == "konsumsi[0].qty"));

    let notice = notices.recv().await.unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Jumlah minimal 1");

    assert!(system.order_client.list().await.unwrap().is_empty());
    assert!(storage.get(KEY).unwrap().is_none());
}

#[tokio::test]
async fn test_status_updates_append_history_only_on_change() {
    let system = start(Arc::new(MemoryStorage::new()));
    let client = &system.order_client;
    let mut notices = system.notifier.subscribe();
    let id = client.add_order(input("Rapat", "2024-07-01")).await.unwrap();
    notices.recv().await.unwrap();

    let outcome = client.approve(&id, "Admin").await.unwrap();
    assert!(outcome.changed);
    assert_eq!(outcome.status, OrderStatus::Disetujui);
    assert_eq!(notices.recv().await.unwrap().level, NoticeLevel::Success);

    // Same status again: no entry, still a notice.
    let outcome = client.approve(&id, "Admin").await.unwrap();
    assert!(!outcome.changed);
    assert_eq!(notices.recv().await.unwrap().level, NoticeLevel::Success);

    let order = client.get(id.clone()).await.unwrap().unwrap();
    assert_eq!(order.status_history.len(), 2);
    assert_eq!(order.status_history[1].status, "Pesanan Disetujui");
    assert_eq!(order.status_history[1].by, "Admin");
    assert_eq!(order.status_history[1].timestamp, now());

    client.cancel(&id, "Budi").await.unwrap();
    let order = client.get(id.clone()).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Dibatalkan);
    assert_eq!(order.status_history.len(), 3);
    assert_eq!(order.status_history[2].status, "Pesanan Dibatalkan");
}

#[tokio::test]
async fn test_update_unknown_order() {
    let system = start(Arc::new(MemoryStorage::new()));
    let err = system.order_client.reject("tidak-ada", "Admin").await.unwrap_err();
    assert_eq!(err, OrderError::NotFound("tidak-ada".to_string()));
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let storage = Arc::new(MemoryStorage::new());
    let system = start(storage.clone());
    let client = &system.order_client;

    let first = client.add_order(input("Rapat", "2024-07-01")).await.unwrap();
    let second = client.add_order(input("Seminar", "2024-07-02")).await.unwrap();

    assert!(client.delete_order(&first).await.unwrap());
    let remaining = client.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second);

    // Absent id: no-op.
    assert!(!client.delete_order(&first).await.unwrap());
    assert!(!client.delete_order("tidak-ada").await.unwrap());
    assert_eq!(stored(&storage).len(), 1);
}

#[tokio::test]
async fn test_add_approve_delete_scenario() {
    let storage = Arc::new(MemoryStorage::new());
    let system = start(storage.clone());
    let client = &system.order_client;
    let mut state = DashboardState::new();

    let id = client.add_order(input("Rapat", "2024-07-01")).await.unwrap();
    client.approve(&id, "Admin").await.unwrap();

    let order = client.get(id.clone()).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Disetujui);
    assert_eq!(order.status_history.len(), 2);
    state.select(&id);

    state.open_delete(&id, order.summary());
    assert!(state.confirm_delete(client).await.unwrap());
    assert!(state.pending_delete().is_none());
    assert_eq!(state.selected(), None);

    assert!(client.list().await.unwrap().is_empty());
    assert!(stored(&storage).is_empty());

    // Nothing pending: confirming does nothing.
    assert!(!state.confirm_delete(client).await.unwrap());
}

#[tokio::test]
async fn test_dashboard_filters_and_sorts() {
    let system = start(Arc::new(MemoryStorage::new()));
    let client = &system.order_client;

    let early = client.add_order(input("A", "2024-07-01")).await.unwrap();
    let late = client.add_order(input("B", "2024-08-01")).await.unwrap();
    let middle = client.add_order(input("C", "2024-07-15")).await.unwrap();
    client.reject(&middle, "Admin").await.unwrap();

    let view = client.dashboard(&OrderQuery::default()).await.unwrap();
    let ids: Vec<_> = view.orders.iter().map(|o| o.id.clone()).collect();
    assert_eq!(ids, vec![late.clone(), middle.clone(), early.clone()]);
    assert_eq!(view.counts.menunggu, 2);
    assert_eq!(view.counts.ditolak, 1);

    let oldest = client
        .dashboard(&OrderQuery::default().with_sort(SortOrder::Oldest))
        .await
        .unwrap();
    let reversed: Vec<_> = oldest.orders.iter().rev().map(|o| o.id.clone()).collect();
    assert_eq!(reversed, ids);

    let waiting = client
        .dashboard(&OrderQuery::default().with_filter(StatusFilter::Only(OrderStatus::Menunggu)))
        .await
        .unwrap();
    assert_eq!(waiting.orders.len(), 2);
    assert!(waiting.orders.iter().all(|o| o.status == OrderStatus::Menunggu));
    assert_eq!(waiting.counts.total, 3);
}

#[tokio::test]
async fn test_load_completes_past_due_orders_once() {
    let storage = Arc::new(MemoryStorage::new());

    let system = start(storage.clone());
    let past = system
        .order_client
        .add_order(input("Lampau", "2024-06-01"))
        .await
        .unwrap();
    let approved_past = system
        .order_client
        .add_order(input("Lampau Disetujui", "2024-06-02"))
        .await
        .unwrap();
    let future = system
        .order_client
        .add_order(input("Mendatang", "2024-12-01"))
        .await
        .unwrap();
    let rejected_past = system
        .order_client
        .add_order(input("Ditolak", "2024-06-03"))
        .await
        .unwrap();
    system.order_client.approve(&approved_past, "Admin").await.unwrap();
    system.order_client.reject(&rejected_past, "Admin").await.unwrap();
    system.shutdown().await.unwrap();

    // Restart: the sweep runs on load and is written back without any request.
    let system = start(storage.clone());
    system.order_client.ready().await.unwrap();
    let after_first = stored(&storage);
    let find = |orders: &[Order], id: &str| orders.iter().find(|o| o.id == id).cloned().unwrap();

    for id in [&past, &approved_past] {
        let order = find(&after_first, id);
        assert_eq!(order.status, OrderStatus::Selesai);
        let last = order.status_history.last().unwrap();
        assert_eq!(last.status, COMPLETED_LABEL);
        assert_eq!(last.by, "Sistem");
    }
    assert_eq!(find(&after_first, &future).status, OrderStatus::Menunggu);
    assert_eq!(find(&after_first, &rejected_past).status, OrderStatus::Ditolak);
    system.shutdown().await.unwrap();

    // Second restart: nothing new is appended.
    let system = start(storage.clone());
    system.order_client.ready().await.unwrap();
    assert_eq!(system.order_client.list().await.unwrap(), after_first);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_malformed_storage_loads_empty() {
    let storage = Arc::new(MemoryStorage::seeded(KEY, "[{\"id\": 1"));
    let system = start(storage);
    let mut notices = system.notifier.subscribe();
    system.order_client.ready().await.unwrap();

    assert!(system.order_client.list().await.unwrap().is_empty());
    assert!(!system.order_client.is_loading());
    assert_eq!(notices.recv().await.unwrap().level, NoticeLevel::Error);

    // The store still works afterwards.
    system
        .order_client
        .add_order(input("Rapat", "2024-07-01"))
        .await
        .unwrap();
    assert_eq!(notices.recv().await.unwrap().level, NoticeLevel::Success);
}

#[tokio::test]
async fn test_export_writes_visible_view() {
    let dir = tempfile::tempdir().unwrap();
    let system = start(Arc::new(MemoryStorage::new()));
    let client = &system.order_client;
    let mut notices = system.notifier.subscribe();

    // Empty view: info notice, no file.
    let path = client.export_csv(&OrderQuery::default(), dir.path()).await.unwrap();
    assert!(path.is_none());
    let notice = notices.recv().await.unwrap();
    assert_eq!(notice.level, NoticeLevel::Info);
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());

    let id = client.add_order(input("Rapat", "2024-07-01")).await.unwrap();
    client.add_order(input("Seminar", "2024-07-02")).await.unwrap();
    client.approve(&id, "Admin").await.unwrap();

    let query = OrderQuery::default().with_filter(StatusFilter::Only(OrderStatus::Disetujui));
    let path = client.export_csv(&query, dir.path()).await.unwrap().unwrap();
    assert!(path.file_name().unwrap().to_string_lossy().starts_with("riwayat_pemesanan_"));

    let csv = std::fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with(&format!("\"{id}\",\"Rapat\"")));
    assert!(lines[1].contains("\"Disetujui\",\"15/06/2024 12:00\""));
}

#[tokio::test]
async fn test_file_storage_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let storage = Arc::new(FileStorage::open(dir.path()).unwrap());
    let system = start(storage);
    let id = system
        .order_client
        .add_order(input("Rapat", "2024-07-01"))
        .await
        .unwrap();
    system.shutdown().await.unwrap();
    assert!(dir.path().join("pemesanan_data.json").exists());

    let storage = Arc::new(FileStorage::open(dir.path()).unwrap());
    let system = start(storage);
    system.order_client.ready().await.unwrap();
    let order = system.order_client.get(id).await.unwrap().unwrap();
    assert_eq!(order.acara, "Rapat");
    system.shutdown().await.unwrap();
}
