//! Order ledger
//!
//! The full set of orders lives as one JSON array in the `activeOrders`
//! slot. Every write rewrites the slot wholesale. No operation here returns
//! an error: storage trouble degrades to the seed data on read and to a
//! dropped write on save/update, and the caller learns which through
//! [`Outcome`] / [`WriteOutcome`].

mod seed;

pub use seed::{SEED_ORDER_ID, seed_orders};
pub use shared::util::generate_order_id;

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, Utc};
use shared::{Order, OrderPatch};

use crate::outcome::{Degradation, Outcome, WriteOutcome};
use crate::storage::LocalStorage;

/// Slot holding the ledger
pub const ORDERS_KEY: &str = "activeOrders";

/// Time source for `createdDate` / `lastUpdate` stamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Local calendar date
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Order ledger over a local slot store
#[derive(Clone)]
pub struct OrderLedger {
    storage: Arc<dyn LocalStorage>,
    clock: Arc<dyn Clock>,
}

impl OrderLedger {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self::with_clock(storage, Arc::new(SystemClock))
    }

    pub fn with_clock(storage: Arc<dyn LocalStorage>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// All orders, or the seed when the slot is missing, blank or unreadable
    pub fn list_orders(&self) -> Outcome<Vec<Order>> {
        let raw = match self.storage.get_item(ORDERS_KEY) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => return Outcome::fallback(seed_orders(), Degradation::Empty),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read orders, using seed data");
                return Outcome::fallback(seed_orders(), Degradation::Storage(e.to_string()));
            }
        };

        match serde_json::from_str::<Vec<Order>>(&raw) {
            Ok(orders) => Outcome::Fresh(orders),
            Err(e) => {
                tracing::warn!(error = %e, "Stored orders are unreadable, using seed data");
                Outcome::fallback(seed_orders(), Degradation::Corrupt(e.to_string()))
            }
        }
    }

    /// First order with a matching id
    pub fn get_order_by_id(&self, id: &str) -> Outcome<Option<Order>> {
        self.list_orders()
            .map(|orders| orders.into_iter().find(|order| order.id == id))
    }

    /// Append an order to the current snapshot
    ///
    /// When the slot was empty the snapshot is the seed, so the seed order
    /// becomes persistent alongside the new one. Duplicate ids are accepted.
    pub fn save_order(&self, order: Order) -> WriteOutcome {
        let mut orders = self.list_orders().into_value();
        tracing::debug!(order_id = %order.id, "Saving order");
        orders.push(order);
        self.write_orders(&orders)
    }

    /// Shallow-merge `patch` into the order with `id` and stamp `lastUpdate`
    ///
    /// Unknown ids are ignored.
    pub fn update_order(&self, id: &str, patch: OrderPatch) -> WriteOutcome {
        let mut orders = self.list_orders().into_value();
        let Some(order) = orders.iter_mut().find(|order| order.id == id) else {
            tracing::debug!(order_id = %id, "Update skipped, order not found");
            return WriteOutcome::Skipped;
        };

        patch.apply(order);
        order.last_update = self.clock.now();
        tracing::debug!(order_id = %id, "Updating order");
        self.write_orders(&orders)
    }

    fn write_orders(&self, orders: &[Order]) -> WriteOutcome {
        let json = match serde_json::to_string(orders) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize orders");
                return WriteOutcome::Dropped(Degradation::Corrupt(e.to_string()));
            }
        };

        match self.storage.set_item(ORDERS_KEY, &json) {
            Ok(()) => WriteOutcome::Written,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to write orders");
                WriteOutcome::Dropped(Degradation::Storage(e.to_string()))
            }
        }
    }
}
