//! CSV export of the visible order list.

use crate::model::Order;
use crate::order_actor::OrderError;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CSV_HEADER: &str = "ID,Acara,Tgl Permintaan,Tgl Pengiriman,Waktu,Lokasi,Tamu,Pengaju,Bagian,Approval,Status,Dibuat Pada,Catatan,Konsumsi (Jenis|Satuan|Qty)";

const CREATED_AT_FORMAT: &str = "%d/%m/%Y %H:%M";

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn consumption(order: &Order) -> String {
    order
        .konsumsi
        .iter()
        .map(|item| format!("{}|{}|{}", item.jenis, item.satuan, item.qty))
        .collect::<Vec<_>>()
        .join("; ")
}

fn row(order: &Order) -> String {
    let created = order.created_at.format(CREATED_AT_FORMAT).to_string();
    let consumption = consumption(order);
    let fields: [&str; 14] = [
        &order.id,
        &order.acara,
        &order.tanggal_permintaan,
        &order.tanggal_pengiriman,
        &order.waktu,
        &order.lokasi,
        &order.tamu,
        &order.yang_mengajukan,
        &order.untuk_bagian,
        &order.approval,
        order.status.label(),
        &created,
        &order.catatan,
        &consumption,
    ];
    fields
        .iter()
        .map(|field| quote(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Header plus one row per order, in the given order, joined by `\n`.
pub fn to_csv(orders: &[Order]) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(orders.iter().map(row))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("riwayat_pemesanan_{}.csv", date.format("%Y-%m-%d"))
}

/// Writes `orders` into `dir` under the file name for `date`.
///
/// Returns `Ok(None)` without touching the filesystem when there is nothing to
/// export.
pub fn write_csv(dir: &Path, orders: &[Order], date: NaiveDate) -> Result<Option<PathBuf>, OrderError> {
    if orders.is_empty() {
        return Ok(None);
    }
    std::fs::create_dir_all(dir).map_err(|e| OrderError::Export(e.to_string()))?;
    let path = dir.join(export_file_name(date));
    std::fs::write(&path, to_csv(orders)).map_err(|e| OrderError::Export(e.to_string()))?;
    info!(path = %path.display(), rows = orders.len(), "CSV exported");
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConsumptionItem, OrderInput, OrderStatus};
    use chrono::{TimeZone, Utc};

    fn order() -> Order {
        OrderInput {
            acara: "Rapat \"Besar\"".into(),
            tanggal_permintaan: "2024-06-01".into(),
            tanggal_pengiriman: "2024-06-10".into(),
            waktu: "Pagi".into(),
            lokasi: "Aula, Lt. 2".into(),
            tamu: "VIP".into(),
            yang_mengajukan: "Budi".into(),
            untuk_bagian: "Umum".into(),
            approval: "Sari".into(),
            catatan: String::new(),
            konsumsi: vec![
                ConsumptionItem::new("Nasi Kotak", 20, "kotak"),
                ConsumptionItem::new("Air Mineral", 24, "botol"),
            ],
        }
        .into_order(
            "id-1".into(),
            Utc.with_ymd_and_hms(2024, 6, 1, 7, 5, 0).unwrap(),
        )
    }

    #[test]
    fn test_row_format() {
        let csv = to_csv(&[order()]);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            "\"id-1\",\"Rapat \"\"Besar\"\"\",\"2024-06-01\",\"2024-06-10\",\"Pagi\",\"Aula, Lt. 2\",\"VIP\",\"Budi\",\"Umum\",\"Sari\",\"Menunggu\",\"01/06/2024 07:05\",\"\",\"Nasi Kotak|kotak|20; Air Mineral|botol|24\""
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_rows_follow_input_order() {
        let mut second = order();
        second.id = "id-2".into();
        second.status = OrderStatus::Ditolak;
        let csv = to_csv(&[second, order()]);
        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[1].starts_with("\"id-2\""));
        assert!(lines[1].contains("\"Ditolak\""));
        assert!(lines[2].starts_with("\"id-1\""));
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        assert_eq!(export_file_name(date), "riwayat_pemesanan_2024-02-09.csv");
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        assert_eq!(write_csv(dir.path(), &[], date).unwrap(), None);
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());

        let path = write_csv(dir.path(), &[order()], date).unwrap().unwrap();
        assert_eq!(path, dir.path().join("riwayat_pemesanan_2024-06-01.csv"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), to_csv(&[order()]));
    }
}
