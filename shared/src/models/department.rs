//! Department Model
//!
//! Production stages an order flows through, and the default form checklist
//! each stage starts with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::form::FormDescriptor;

/// Fixed production stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Department {
    Sales,
    BagForming,
    Printing,
    Lamination,
    Slitting,
    BagCutting,
}

const BAG_FORMING_FORMS: &[(&str, &str)] = &[
    ("領料單(製前領料)", "倉管"),
    ("入庫單(料沒用完入庫)", "倉管"),
    ("製程品質查驗表(抽袋)", "中文+泰文"),
    ("抽袋課生產檢驗日報表", "號機"),
    ("半成品標示單", "給下一課"),
    ("操作日期記錄", "生產細節"),
];

const PRINTING_FORMS: &[(&str, &str)] = &[
    ("領料單(製前領染料)", "倉管"),
    ("入庫單(染料沒用完入庫)", "倉管"),
    ("抽袋課袋卷標示單1", "接收"),
    ("抽袋課袋卷標示單2", "接收"),
    ("領料單(製前領袋子)", "倉管"),
    ("製程品質查驗表(印刷)", "中文+泰文"),
    ("印刷課生產檢驗日報表", "號機"),
    ("半成品標示單", "給下一課"),
    ("操作日期記錄", "生產細節"),
];

const BAG_CUTTING_FORMS: &[(&str, &str)] = &[
    ("印刷/貼合標示單", "接收"),
    ("摺邊/分條標示單", "接收"),
    ("領料單(製前領袋)", "倉管"),
    ("裁袋課生產檢驗日報表1", "號機"),
    ("裁袋課生產檢驗日報表2", "號機"),
    ("半成品標示單1", "給QC"),
    ("半成品標示單2", "給QC"),
    ("入庫單(白色-採購)", "倉管"),
    ("入庫單(藍色-倉管)", "倉管"),
    ("操作日期記錄", "生產細節"),
];

impl Department {
    pub const ALL: [Department; 6] = [
        Self::Sales,
        Self::BagForming,
        Self::Printing,
        Self::Lamination,
        Self::Slitting,
        Self::BagCutting,
    ];

    /// Stable id used in URLs, cache keys and `Order::current_dept`
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::BagForming => "bag-forming",
            Self::Printing => "printing",
            Self::Lamination => "lamination",
            Self::Slitting => "slitting",
            Self::BagCutting => "bag-cutting",
        }
    }

    /// Shop-floor label shown in the UI
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sales => "業務課",
            Self::BagForming => "抽袋課",
            Self::Printing => "印刷課",
            Self::Lamination => "貼合課",
            Self::Slitting => "分條課",
            Self::BagCutting => "裁袋課",
        }
    }

    /// Local cache key for this department's form list
    pub fn form_cache_key(&self) -> String {
        format!("formOrder:{}", self.id())
    }

    /// Hardcoded checklist a department starts from
    pub fn default_forms(&self) -> Vec<FormDescriptor> {
        let table: &[(&str, &str)] = match self {
            Self::BagForming => BAG_FORMING_FORMS,
            Self::Printing => PRINTING_FORMS,
            Self::BagCutting => BAG_CUTTING_FORMS,
            Self::Sales | Self::Lamination | Self::Slitting => &[],
        };
        table.iter().copied().map(FormDescriptor::from).collect()
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Department id outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown department: {0}")]
pub struct UnknownDepartment(pub String);

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dept| dept.id() == s)
            .ok_or_else(|| UnknownDepartment(s.to_string()))
    }
}
