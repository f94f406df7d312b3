//! Sales intake form
//!
//! A draft order as typed by the sales assistant. Submitting validates the
//! required fields, stamps the ledger-owned fields and appends the order.

use shared::{AppError, Department, ErrorCode, Order, OrderStatus, WorkRecord};
use thiserror::Error;
use validator::Validate;

use crate::ledger::{OrderLedger, generate_order_id};
use crate::outcome::WriteOutcome;

/// Creator recorded when the draft names none
pub const DEFAULT_CREATOR: &str = "業務助理";

/// Rows offered by an empty draft
pub const BLANK_ROWS: u32 = 5;

/// Progress of a freshly submitted order
pub const INITIAL_PROGRESS: u8 = 10;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Invalid intake form: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl IntakeError {
    /// Names of the fields that failed, sorted
    pub fn fields(&self) -> Vec<String> {
        let Self::Validation(errors) = self;
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        fields
    }
}

impl From<IntakeError> for AppError {
    fn from(err: IntakeError) -> Self {
        let fields = err.fields();
        AppError::with_message(ErrorCode::OrderIncomplete, err.to_string())
            .with_detail("fields", fields)
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct IntakeForm {
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: String,
    #[validate(length(min = 1, message = "Product name is required"))]
    pub product_name: String,
    pub custom_number: String,
    #[validate(length(min = 1, message = "Delivery date is required"))]
    pub delivery_date: String,
    #[validate(length(min = 1, message = "Order quantity is required"))]
    pub order_quantity: String,
    pub config_number: String,
    pub production_conditions: String,
    pub bag_forming_notes: String,
    pub bag_forming_image: Option<String>,
    pub printing_notes_left: String,
    pub printing_notes_right: String,
    pub cutting_notes_left: String,
    pub cutting_notes_right: String,
    pub work_records: Vec<WorkRecord>,
    pub created_by: Option<String>,
    pub approver: String,
    pub manager: String,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeForm {
    /// Empty draft with five blank work-record rows
    pub fn new() -> Self {
        Self {
            customer_name: String::new(),
            product_name: String::new(),
            custom_number: String::new(),
            delivery_date: String::new(),
            order_quantity: String::new(),
            config_number: String::new(),
            production_conditions: String::new(),
            bag_forming_notes: String::new(),
            bag_forming_image: None,
            printing_notes_left: String::new(),
            printing_notes_right: String::new(),
            cutting_notes_left: String::new(),
            cutting_notes_right: String::new(),
            work_records: (1..=BLANK_ROWS).map(WorkRecord::blank).collect(),
            created_by: None,
            approver: String::new(),
            manager: String::new(),
        }
    }

    /// Append a blank row numbered after the last one
    pub fn add_row(&mut self) -> &mut WorkRecord {
        let next = self.work_records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        self.work_records.push(WorkRecord::blank(next));
        let last = self.work_records.len() - 1;
        &mut self.work_records[last]
    }

    fn trim_required(&mut self) {
        for field in [
            &mut self.customer_name,
            &mut self.product_name,
            &mut self.delivery_date,
            &mut self.order_quantity,
        ] {
            let trimmed = field.trim();
            if trimmed.len() != field.len() {
                *field = trimmed.to_string();
            }
        }
    }

    /// Validate and turn the draft into a new order
    pub fn into_order(mut self, ledger: &OrderLedger) -> Result<Order, IntakeError> {
        self.trim_required();
        self.validate()?;

        let clock = ledger.clock();
        let created_by = self
            .created_by
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CREATOR.to_string());

        Ok(Order {
            id: generate_order_id(),
            customer_name: self.customer_name,
            product_name: self.product_name,
            custom_number: self.custom_number,
            delivery_date: self.delivery_date,
            order_quantity: self.order_quantity,
            config_number: self.config_number,
            production_conditions: self.production_conditions,
            bag_forming_notes: self.bag_forming_notes,
            bag_forming_image: self.bag_forming_image,
            printing_notes_left: self.printing_notes_left,
            printing_notes_right: self.printing_notes_right,
            cutting_notes_left: self.cutting_notes_left,
            cutting_notes_right: self.cutting_notes_right,
            status: OrderStatus::InProgress.as_str().to_string(),
            current_dept: Department::Sales.id().to_string(),
            progress: INITIAL_PROGRESS,
            created_by,
            created_date: clock.today(),
            last_update: clock.now(),
            work_records: self
                .work_records
                .into_iter()
                .filter(|record| !record.is_blank())
                .collect(),
            approver: self.approver,
            manager: self.manager,
        })
    }

    /// Validate, build and append to the ledger
    pub fn submit(self, ledger: &OrderLedger) -> Result<(Order, WriteOutcome), IntakeError> {
        let order = self.into_order(ledger)?;
        tracing::debug!(order_id = %order.id, "Submitting intake form");
        let written = ledger.save_order(order.clone());
        Ok((order, written))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    fn filled() -> IntakeForm {
        IntakeForm {
            customer_name: "ACME".into(),
            product_name: "Shopping bag".into(),
            delivery_date: "2025-05-01".into(),
            order_quantity: "1000".into(),
            ..IntakeForm::new()
        }
    }

    #[test]
    fn test_new_draft_has_five_blank_rows() {
        let form = IntakeForm::new();
        let ids: Vec<_> = form.work_records.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
        assert!(form.work_records.iter().all(WorkRecord::is_blank));
    }

    #[test]
    fn test_add_row_numbers_after_last() {
        let mut form = IntakeForm::new();
        form.add_row().machine = "3".into();
        assert_eq!(form.work_records.len(), 6);
        assert_eq!(form.work_records[5].id, 6);
        assert_eq!(form.work_records[5].machine, "3");
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        let ledger = OrderLedger::new(Arc::new(MemoryStorage::new()));
        let form = IntakeForm {
            customer_name: "   ".into(),
            ..filled()
        };

        let err = form.submit(&ledger).unwrap_err();
        assert_eq!(err.fields(), ["customer_name"]);

        let app_err = AppError::from(err);
        assert_eq!(app_err.code, ErrorCode::OrderIncomplete);
        // Nothing written
        assert!(ledger.list_orders().is_fallback());
    }

    #[test]
    fn test_submit_stamps_initial_state() {
        let storage = Arc::new(MemoryStorage::new());
        let ledger = OrderLedger::new(storage);
        let mut form = filled();
        form.work_records[1].operator = "Somchai".into();

        let (order, written) = form.submit(&ledger).unwrap();

        assert!(written.is_written());
        assert!(order.id.starts_with('K'));
        assert_eq!(order.status, "in-progress");
        assert_eq!(order.current_dept, "sales");
        assert_eq!(order.progress, INITIAL_PROGRESS);
        assert_eq!(order.created_by, DEFAULT_CREATOR);
        assert_eq!(order.work_records.len(), 1);
        assert_eq!(order.work_records[0].id, 2);

        let stored = ledger.get_order_by_id(&order.id).into_value();
        assert_eq!(stored, Some(order));
    }

    #[test]
    fn test_explicit_creator_kept() {
        let ledger = OrderLedger::new(Arc::new(MemoryStorage::new()));
        let form = IntakeForm {
            created_by: Some("Mei".into()),
            ..filled()
        };
        let order = form.into_order(&ledger).unwrap();
        assert_eq!(order.created_by, "Mei");
    }
}
