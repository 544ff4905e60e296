use chrono::{
    NaiveDate,
    NaiveDateTime
};

/// 一列銷售資料：訂單編號、付款時間、金額、品項名稱、店別。
/// 同一訂單可能有多列（每品項一列），彙整時以訂單編號去重。
#[derive(Clone, Debug)]
pub struct SalesRecord {
    record_id: String,
    date_paid: NaiveDateTime,
    amount: f64,
    title: String,
    store: String
}

impl SalesRecord {
    pub fn new(
        record_id: String,
        date_paid: NaiveDateTime,
        amount: f64,
        title: String,
        store: String
    ) -> SalesRecord {
        SalesRecord { record_id, date_paid, amount, title, store }
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn date_paid(&self) -> NaiveDateTime {
        self.date_paid
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn store(&self) -> &str {
        &self.store
    }

    /// 付款時間所屬的日曆日。
    pub fn day(&self) -> NaiveDate {
        self.date_paid.date()
    }

    /// 付款月份，格式 `YYYY-MM`。
    pub fn month(&self) -> String {
        self.date_paid.format("%Y-%m").to_string()
    }
}
