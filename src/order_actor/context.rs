//! Clock injected into the Order actor at `run` time.

use chrono::{DateTime, Local, NaiveDate, Utc};
use std::fmt;
use std::sync::Arc;

type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Runtime context for the Order actor.
///
/// Every timestamp the store writes and the "today" used by the past-due sweep
/// come from here, which lets tests pin time.
#[derive(Clone)]
pub struct OrderContext {
    clock: Clock,
}

impl OrderContext {
    /// Wall-clock time.
    pub fn system() -> Self {
        Self {
            clock: Arc::new(Utc::now),
        }
    }

    /// A clock frozen at `at`.
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self {
            clock: Arc::new(move || at),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Today's date in the local time zone.
    pub fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

impl Default for OrderContext {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for OrderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderContext").field("now", &self.now()).finish()
    }
}
