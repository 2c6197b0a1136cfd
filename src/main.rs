use pemesanan::config::load_config;
use pemesanan::lifecycle::{setup_tracing, OrderSystem};
use pemesanan::model::{ConsumptionItem, OrderInput};
use pemesanan::view::{OrderQuery, StatusFilter};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = load_config().map_err(|e| e.to_string())?;
    let system = OrderSystem::from_config(&config).map_err(|e| e.to_string())?;
    let client = system.order_client.clone();

    client.ready().await.map_err(|e| e.to_string())?;
    info!("Order store ready");

    let today = chrono::Local::now().date_naive();
    let input = OrderInput {
        acara: "Rapat Koordinasi Bulanan".to_string(),
        tanggal_permintaan: today.format("%Y-%m-%d").to_string(),
        tanggal_pengiriman: (today + chrono::Duration::days(3))
            .format("%Y-%m-%d")
            .to_string(),
        waktu: "Siang".to_string(),
        lokasi: "Ruang Rapat Utama".to_string(),
        tamu: "Internal".to_string(),
        yang_mengajukan: "Budi Santoso".to_string(),
        untuk_bagian: "Umum".to_string(),
        approval: "Sari Dewi".to_string(),
        catatan: "Satu peserta vegetarian".to_string(),
        konsumsi: vec![
            ConsumptionItem::new("Nasi Kotak", 25, "kotak"),
            ConsumptionItem::new("Air Mineral", 25, "botol"),
        ],
    };

    let span = tracing::info_span!("order_processing");
    let result = async {
        let id = client.add_order(input).await?;
        client.approve(&id, &config.admin_label).await?;
        Ok::<_, pemesanan::order_actor::OrderError>(id)
    }
    .instrument(span)
    .await;

    match result {
        Ok(id) => info!(order_id = %id, "Order submitted and approved"),
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    let dashboard = client
        .dashboard(&OrderQuery::default())
        .await
        .map_err(|e| e.to_string())?;
    info!(
        total = dashboard.counts.total,
        menunggu = dashboard.counts.menunggu,
        disetujui = dashboard.counts.disetujui,
        selesai = dashboard.counts.selesai,
        "Dashboard"
    );

    let query = OrderQuery::default().with_filter(StatusFilter::All);
    match client.export_csv(&query, &config.export_dir).await {
        Ok(Some(path)) => info!(path = %path.display(), "Exported"),
        Ok(None) => info!("Nothing to export"),
        Err(e) => error!(error = %e, "Export failed"),
    }

    drop(client);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
