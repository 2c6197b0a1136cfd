//! Derived views over the order collection: per-status counts and the
//! filtered, sorted list the dashboard and the export both show.

use crate::model::{Order, OrderStatus};
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Reverse;

/// Which statuses the view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Label shown for the catch-all filter.
    pub const ALL_LABEL: &'static str = "Semua";

    /// Parses `Semua` or a status label.
    pub fn parse(label: &str) -> Option<Self> {
        if label == Self::ALL_LABEL {
            return Some(StatusFilter::All);
        }
        OrderStatus::from_label(label).map(StatusFilter::Only)
    }

    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

/// Ordering by delivery date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Latest delivery date first.
    #[default]
    Newest,
    Oldest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub filter: StatusFilter,
    pub sort: SortOrder,
    /// Exact `YYYY-MM-DD` delivery date to match; empty matches everything.
    pub search_date: String,
}

impl OrderQuery {
    pub fn with_filter(mut self, filter: StatusFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_search_date(mut self, date: impl Into<String>) -> Self {
        self.search_date = date.into();
        self
    }

    fn matches(&self, order: &Order) -> bool {
        self.filter.matches(order.status)
            && (self.search_date.is_empty() || order.tanggal_pengiriman == self.search_date)
    }
}

/// Number of orders per status over the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub menunggu: usize,
    pub disetujui: usize,
    pub ditolak: usize,
    pub selesai: usize,
    pub dibatalkan: usize,
}

impl StatusCounts {
    pub fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Menunggu => self.menunggu,
            OrderStatus::Disetujui => self.disetujui,
            OrderStatus::Ditolak => self.ditolak,
            OrderStatus::Selesai => self.selesai,
            OrderStatus::Dibatalkan => self.dibatalkan,
        }
    }

    fn add(&mut self, status: OrderStatus) {
        self.total += 1;
        let slot = match status {
            OrderStatus::Menunggu => &mut self.menunggu,
            OrderStatus::Disetujui => &mut self.disetujui,
            OrderStatus::Ditolak => &mut self.ditolak,
            OrderStatus::Selesai => &mut self.selesai,
            OrderStatus::Dibatalkan => &mut self.dibatalkan,
        };
        *slot += 1;
    }
}

/// Counts plus the visible list.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub counts: StatusCounts,
    pub orders: Vec<Order>,
}

pub fn status_counts(orders: &[Order]) -> StatusCounts {
    orders.iter().fold(StatusCounts::default(), |mut counts, order| {
        counts.add(order.status);
        counts
    })
}

/// Orders matching `query`, sorted by delivery date.
///
/// Missing or malformed delivery dates sort as the oldest possible date. The
/// sort is stable, so orders sharing a date keep their collection order.
pub fn filter_and_sort(orders: &[Order], query: &OrderQuery) -> Vec<Order> {
    let mut visible: Vec<Order> = orders
        .iter()
        .filter(|order| query.matches(order))
        .cloned()
        .collect();

    let key = |order: &Order| order.delivery_date().unwrap_or(NaiveDate::MIN);
    match query.sort {
        SortOrder::Newest => visible.sort_by_key(|order| Reverse(key(order))),
        SortOrder::Oldest => visible.sort_by_key(key),
    }
    visible
}

pub fn dashboard(orders: &[Order], query: &OrderQuery) -> Dashboard {
    Dashboard {
        counts: status_counts(orders),
        orders: filter_and_sort(orders, query),
    }
}
