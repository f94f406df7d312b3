//! Demonstration order shown while the ledger slot is empty or unreadable

use chrono::{NaiveDate, TimeZone, Utc};
use shared::{Order, OrderStatus};

use crate::intake::DEFAULT_CREATOR;

pub const SEED_ORDER_ID: &str = "K011404140001";

/// Built on every call; callers own and may mutate the result
pub fn seed_orders() -> Vec<Order> {
    vec![seed_order()]
}

fn seed_order() -> Order {
    Order {
        id: SEED_ORDER_ID.to_string(),
        customer_name: "XX/KW8010".into(),
        product_name: "XX8入染白壹字袋114.5*41.2C".into(),
        custom_number: "W8010-B02001".into(),
        delivery_date: "2025-04-29".into(),
        order_quantity: "12800只/20箱".into(),
        config_number: "EW-28-1".into(),
        production_conditions: "抽3000M*2R/約260K/染白雙理".into(),
        bag_forming_notes: "厚度: 0.04mm, 處理面中間94cm\n寬度: 抽足114.5cm 雙剖雙收過轉模".into(),
        bag_forming_image: None,
        printing_notes_left: "獨立印刷2色版圓周420mm*1300mm\n1. 特橘 2.黑\n捲收後拉出方向尾出".into(),
        printing_notes_right: "印3000M*2R/約260K\n條碼: 4712425028076".into(),
        cutting_notes_left: concat!(
            "1.套字袋長41.2cm      2.內折4.5cm\n",
            "3.信封口4±0.3cm       4.手提部份寬度2cm\n",
            "5.孔距23cm            6.消風孔10mm*2個\n",
            "7.孔距孔離邊1.5公分    8.80PC/把, 640只/箱\n",
            "9.握把除料高度0.8~1.3cm 10.撕裂線1~1.5cm",
        )
        .into(),
        cutting_notes_right: "塑膠扣方向成品:短邊朝上\n長扣在上 短扣在下\n\n1.請拿2A紙箱,6箱下層,貼紙額外".into(),
        status: OrderStatus::InProgress.as_str().into(),
        current_dept: shared::Department::Sales.id().into(),
        progress: 10,
        created_by: DEFAULT_CREATOR.into(),
        created_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap_or_default(),
        last_update: Utc
            .with_ymd_and_hms(2025, 1, 10, 14, 30, 0)
            .single()
            .unwrap_or_default(),
        work_records: Vec::new(),
        approver: "陳經理 07/14".into(),
        manager: "業務助理 07/14".into(),
    }
}
