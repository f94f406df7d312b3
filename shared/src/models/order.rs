//! Order Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::{lenient_date, lenient_timestamp};

/// Conventional order status labels
///
/// `Order::status` stays a free-text string; this enum only names the three
/// labels the UI colours. No transition graph is enforced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
}

impl OrderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Match a stored label, `None` for anything outside the conventional set
    ///
    /// Chinese labels written by older UI builds count as their English
    /// counterpart.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "pending" | "待開始" => Some(Self::Pending),
            "in-progress" | "進行中" => Some(Self::InProgress),
            "completed" | "已完成" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the operation log attached to an order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkRecord {
    /// 1-based row number on the paper form
    pub id: u32,
    pub operation_date: String,
    pub shift: String,
    pub time: String,
    /// Machine number
    pub machine: String,
    pub operator: String,
    pub production_qty: String,
    pub material_qty: String,
}

impl WorkRecord {
    /// Blank placeholder row
    pub fn blank(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// A row is blank when every user-editable cell is empty
    pub fn is_blank(&self) -> bool {
        [
            &self.operation_date,
            &self.shift,
            &self.time,
            &self.machine,
            &self.operator,
            &self.production_qty,
            &self.material_qty,
        ]
        .iter()
        .all(|cell| cell.is_empty())
    }
}

/// Customer production order travelling through the departments
///
/// Deserialization is permissive: any missing key falls back to its default,
/// and `createdDate` / `lastUpdate` accept every format older UI builds
/// wrote, defaulting when unparseable. One odd record never makes the ledger
/// unreadable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub product_name: String,
    pub custom_number: String,
    pub delivery_date: String,
    pub order_quantity: String,
    pub config_number: String,
    pub production_conditions: String,
    pub bag_forming_notes: String,
    /// Embedded reference image (data URL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bag_forming_image: Option<String>,
    pub printing_notes_left: String,
    pub printing_notes_right: String,
    pub cutting_notes_left: String,
    pub cutting_notes_right: String,
    pub status: String,
    pub current_dept: String,
    /// 0..=100, caller supplied
    pub progress: u8,
    pub created_by: String,
    #[serde(deserialize_with = "lenient_date")]
    pub created_date: NaiveDate,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub last_update: DateTime<Utc>,
    pub work_records: Vec<WorkRecord>,
    pub approver: String,
    pub manager: String,
}

impl Order {
    /// Conventional status, if the stored label is one
    pub fn status_label(&self) -> Option<OrderStatus> {
        OrderStatus::from_label(&self.status)
    }
}

/// Partial update payload
///
/// Every present field replaces the stored one. `id` and `lastUpdate` are
/// not part of the patch: the ledger owns both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bag_forming_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bag_forming_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printing_notes_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printing_notes_right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutting_notes_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutting_notes_right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_dept: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_records: Option<Vec<WorkRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
}

macro_rules! merge_fields {
    ($patch:ident => $order:ident { $($field:ident),* $(,)? }) => {
        $(
            if let Some(value) = $patch.$field {
                $order.$field = value;
            }
        )*
    };
}

impl OrderPatch {
    /// Status-only patch
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Default::default()
        }
    }

    /// Progress-only patch
    pub fn progress(progress: u8) -> Self {
        Self {
            progress: Some(progress),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge into `order`
    pub fn apply(self, order: &mut Order) {
        let patch = self;
        merge_fields!(patch => order {
            customer_name,
            product_name,
            custom_number,
            delivery_date,
            order_quantity,
            config_number,
            production_conditions,
            bag_forming_notes,
            printing_notes_left,
            printing_notes_right,
            cutting_notes_left,
            cutting_notes_right,
            status,
            current_dept,
            progress,
            created_by,
            created_date,
            work_records,
            approver,
            manager,
        });
        if let Some(image) = patch.bag_forming_image {
            order.bag_forming_image = Some(image);
        }
    }
}
