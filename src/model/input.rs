//! Creation payload for orders and its validation rules.

use crate::model::order::{
    ConsumptionItem, HistoryEntry, Order, OrderStatus, CREATED_LABEL, DATE_FORMAT,
};
use crate::order_actor::OrderError;
use chrono::{DateTime, NaiveDate, Utc};
use validator::{Validate, ValidationError};

/// Fields in the order they are checked and reported.
const INPUT_FIELDS: [&str; 11] = [
    "acara",
    "tanggal_permintaan",
    "tanggal_pengiriman",
    "waktu",
    "lokasi",
    "tamu",
    "yang_mengajukan",
    "untuk_bagian",
    "approval",
    "catatan",
    "konsumsi",
];

const ITEM_FIELDS: [&str; 3] = ["jenis", "qty", "satuan"];

/// Everything a requester fills in. The store adds id, status, history and
/// creation time.
#[derive(Debug, Clone, Default, Validate)]
pub struct OrderInput {
    #[validate(length(min = 1, message = "Nama acara wajib diisi"))]
    pub acara: String,
    #[validate(custom = "validate_date")]
    pub tanggal_permintaan: String,
    #[validate(custom = "validate_date")]
    pub tanggal_pengiriman: String,
    #[validate(length(min = 1, message = "Waktu wajib diisi"))]
    pub waktu: String,
    #[validate(length(min = 1, message = "Lokasi wajib diisi"))]
    pub lokasi: String,
    #[validate(length(min = 1, message = "Jenis tamu wajib diisi"))]
    pub tamu: String,
    #[validate(length(min = 1, message = "Nama pengaju wajib diisi"))]
    pub yang_mengajukan: String,
    #[validate(length(min = 1, message = "Bagian wajib diisi"))]
    pub untuk_bagian: String,
    #[validate(length(min = 1, message = "Approval wajib diisi"))]
    pub approval: String,
    pub catatan: String,
    #[validate(length(min = 1, message = "Minimal satu item konsumsi"))]
    pub konsumsi: Vec<ConsumptionItem>,
}

fn validate_date(value: &str) -> Result<(), ValidationError> {
    if NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok() {
        return Ok(());
    }
    let mut error = ValidationError::new("date");
    error.message = Some("Tanggal harus berformat YYYY-MM-DD".into());
    Err(error)
}

fn first_message(fields: &[&str], errors: &validator::ValidationErrors) -> Option<(String, String)> {
    let by_field = errors.field_errors();
    fields.iter().find_map(|field| {
        let error = by_field.get(*field)?.first()?;
        let message = error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| error.code.to_string());
        Some((field.to_string(), message))
    })
}

impl OrderInput {
    /// Runs every rule and reports the first failure.
    ///
    /// Top-level fields come first in declaration order, then consumption items
    /// in list order as `konsumsi[i].field`.
    pub fn check(&self) -> Result<(), OrderError> {
        if let Err(errors) = self.validate() {
            let (field, message) = first_message(&INPUT_FIELDS, &errors)
                .unwrap_or_else(|| ("pesanan".to_string(), errors.to_string()));
            return Err(OrderError::Validation { field, message });
        }

        for (index, item) in self.konsumsi.iter().enumerate() {
            if let Err(errors) = item.validate() {
                let (field, message) = first_message(&ITEM_FIELDS, &errors)
                    .unwrap_or_else(|| ("item".to_string(), errors.to_string()));
                return Err(OrderError::Validation {
                    field: format!("konsumsi[{index}].{field}"),
                    message,
                });
            }
        }
        Ok(())
    }

    /// Builds a fresh waiting order with its creation entry.
    pub fn into_order(self, id: String, now: DateTime<Utc>) -> Order {
        let created = HistoryEntry {
            timestamp: now,
            status: CREATED_LABEL.to_string(),
            by: self.yang_mengajukan.clone(),
        };
        Order {
            id,
            acara: self.acara,
            tanggal_permintaan: self.tanggal_permintaan,
            tanggal_pengiriman: self.tanggal_pengiriman,
            waktu: self.waktu,
            lokasi: self.lokasi,
            tamu: self.tamu,
            yang_mengajukan: self.yang_mengajukan,
            untuk_bagian: self.untuk_bagian,
            approval: self.approval,
            catatan: self.catatan,
            status: OrderStatus::Menunggu,
            konsumsi: self.konsumsi,
            status_history: vec![created],
            created_at: now,
        }
    }
}
