//! Dashboard figures derived from the ledger

use chrono::Datelike;
use shared::{Department, Order, OrderStatus};

/// Order counts by conventional status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderSummary {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Orders whose status is outside the conventional labels
    pub other: usize,
}

impl OrderSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        orders.iter().fold(Self::default(), |mut summary, order| {
            summary.total += 1;
            match order.status_label() {
                Some(OrderStatus::Pending) => summary.pending += 1,
                Some(OrderStatus::InProgress) => summary.in_progress += 1,
                Some(OrderStatus::Completed) => summary.completed += 1,
                None => summary.other += 1,
            }
            summary
        })
    }
}

/// Orders created in the given calendar month
pub fn created_in_month(orders: &[Order], year: i32, month: u32) -> usize {
    orders
        .iter()
        .filter(|order| order.created_date.year() == year && order.created_date.month() == month)
        .count()
}

/// Whether `progress` has passed `department` on the production timeline
///
/// Stages are spread evenly over 0..=100 in [`Department::ALL`] order, so
/// sales sits at 0 and bag-cutting at 100.
pub fn stage_passed(progress: u8, department: Department) -> bool {
    let last = (Department::ALL.len() - 1) as f64;
    let index = Department::ALL
        .iter()
        .position(|dept| *dept == department)
        .unwrap_or_default() as f64;
    f64::from(progress) > index * (100.0 / last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(status: &str, created: (i32, u32, u32)) -> Order {
        Order {
            status: status.into(),
            created_date: NaiveDate::from_ymd_opt(created.0, created.1, created.2).unwrap(),
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_counts() {
        let orders = [
            order("pending", (2025, 1, 2)),
            order("in-progress", (2025, 1, 3)),
            order("in-progress", (2025, 2, 1)),
            order("completed", (2024, 12, 30)),
            order("on-hold", (2025, 1, 9)),
        ];

        let summary = OrderSummary::from_orders(&orders);
        assert_eq!(
            summary,
            OrderSummary {
                total: 5,
                pending: 1,
                in_progress: 2,
                completed: 1,
                other: 1,
            }
        );
        assert_eq!(created_in_month(&orders, 2025, 1), 3);
        assert_eq!(created_in_month(&orders, 2024, 1), 0);
    }

    #[test]
    fn test_summary_counts_legacy_labels() {
        let orders = [
            order("進行中", (2025, 1, 2)),
            order("已完成", (2025, 1, 3)),
            order("待開始", (2025, 1, 4)),
        ];
        let summary = OrderSummary::from_orders(&orders);
        assert_eq!((summary.pending, summary.in_progress, summary.completed), (1, 1, 1));
        assert_eq!(summary.other, 0);
    }

    #[test]
    fn test_stage_passed() {
        assert!(stage_passed(10, Department::Sales));
        assert!(!stage_passed(0, Department::Sales));
        assert!(!stage_passed(10, Department::BagForming));
        assert!(stage_passed(21, Department::BagForming));
        assert!(!stage_passed(100, Department::BagCutting));
    }
}
