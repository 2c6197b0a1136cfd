/// A consumption request ("pemesanan").
///
/// # Store Actor
/// This struct implements the [`ActorEntity`](store_actor::ActorEntity) trait,
/// so a [`ResourceActor`](store_actor::ResourceActor) can own and persist it.
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderInput`](crate::model::OrderInput))
/// - Status changes ([`OrderAction`](crate::order_actor::OrderAction))
/// - The past-due sweep run on load
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use validator::Validate;

/// Format of every date the user types in.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// History label written when an order is created.
pub const CREATED_LABEL: &str = "Pesanan Dibuat";

/// History label written by the past-due sweep.
pub const COMPLETED_LABEL: &str = "Pesanan Selesai";

/// Actor recorded for system-made transitions.
pub const SYSTEM_ACTOR: &str = "Sistem";

/// Lifecycle state of an order. Serialized as its Indonesian label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Menunggu,
    Disetujui,
    Ditolak,
    Selesai,
    Dibatalkan,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Menunggu,
        OrderStatus::Disetujui,
        OrderStatus::Ditolak,
        OrderStatus::Selesai,
        OrderStatus::Dibatalkan,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Menunggu => "Menunggu",
            OrderStatus::Disetujui => "Disetujui",
            OrderStatus::Ditolak => "Ditolak",
            OrderStatus::Selesai => "Selesai",
            OrderStatus::Dibatalkan => "Dibatalkan",
        }
    }

    /// Parses a label back into a status.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A status a caller may ask for.
///
/// `Menunggu` and `Selesai` are only ever set by the store itself, so they have
/// no counterpart here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    Approved,
    Rejected,
    Cancelled,
}

impl From<StatusChange> for OrderStatus {
    fn from(change: StatusChange) -> Self {
        match change {
            StatusChange::Approved => OrderStatus::Disetujui,
            StatusChange::Rejected => OrderStatus::Ditolak,
            StatusChange::Cancelled => OrderStatus::Dibatalkan,
        }
    }
}

/// One line of the consumption list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ConsumptionItem {
    #[validate(length(min = 1, message = "Jenis konsumsi wajib diisi"))]
    pub jenis: String,
    #[validate(range(min = 1, message = "Jumlah minimal 1"))]
    pub qty: u32,
    #[validate(length(min = 1, message = "Satuan wajib diisi"))]
    pub satuan: String,
}

impl ConsumptionItem {
    pub fn new(jenis: impl Into<String>, qty: u32, satuan: impl Into<String>) -> Self {
        Self {
            jenis: jenis.into(),
            qty,
            satuan: satuan.into(),
        }
    }
}

/// Immutable audit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub status: String,
    pub by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub acara: String,
    pub tanggal_permintaan: String,
    pub tanggal_pengiriman: String,
    pub waktu: String,
    pub lokasi: String,
    pub tamu: String,
    pub yang_mengajukan: String,
    pub untuk_bagian: String,
    pub approval: String,
    #[serde(default)]
    pub catatan: String,
    pub status: OrderStatus,
    pub konsumsi: Vec<ConsumptionItem>,
    #[serde(default)]
    pub status_history: Vec<HistoryEntry>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Parsed delivery date, `None` when missing or malformed.
    pub fn delivery_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.tanggal_pengiriman, DATE_FORMAT).ok()
    }

    /// Moves the order to `target`, appending one history entry.
    ///
    /// Returns `false` and leaves the order untouched when it already has that
    /// status.
    pub fn change_status(&mut self, target: OrderStatus, by: &str, at: DateTime<Utc>) -> bool {
        if self.status == target {
            return false;
        }
        self.status_history.push(HistoryEntry {
            timestamp: at,
            status: format!("Pesanan {}", target.label()),
            by: by.to_string(),
        });
        self.status = target;
        true
    }

    /// Completes a waiting or approved order whose delivery date is before `today`.
    ///
    /// Orders already carrying a completion entry are skipped, so running the
    /// sweep twice never stacks entries.
    pub fn complete_if_past_due(&mut self, today: NaiveDate, at: DateTime<Utc>) -> bool {
        let open = matches!(self.status, OrderStatus::Menunggu | OrderStatus::Disetujui);
        let past_due = self.delivery_date().is_some_and(|date| date < today);
        let already_completed = self
            .status_history
            .iter()
            .any(|entry| entry.status == COMPLETED_LABEL);

        if !open || !past_due || already_completed {
            return false;
        }
        self.change_status(OrderStatus::Selesai, SYSTEM_ACTOR, at)
    }

    /// Short human label used in confirmations and logs.
    pub fn summary(&self) -> String {
        format!("{} ({})", self.acara, self.tanggal_pengiriman)
    }
}
