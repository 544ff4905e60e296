use std::cmp::Ordering;
use std::collections::{
    BTreeMap,
    HashSet
};

use chrono::NaiveDate;

use crate::math::round::round;
use crate::sales::salesrecord::SalesRecord;

// 銷售彙整：所有金額欄位皆四捨五入至分。分組一律走 BTreeMap，
// 日期／月份／名稱因此自然有序，輸出具確定性。

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DailySales {
    day: NaiveDate,
    total: f64
}

impl DailySales {
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

#[derive(Clone, Debug)]
pub struct MonthlySales {
    month: String,
    total: f64,
    growth_pct: Option<f64>
}

impl MonthlySales {
    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// 對前一個月的變動百分比；首月或前月總額為零時無值。
    pub fn growth_pct(&self) -> Option<f64> {
        self.growth_pct
    }
}

#[derive(Clone, Debug)]
pub struct ProductSales {
    title: String,
    total: f64
}

impl ProductSales {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

#[derive(Clone, Debug)]
pub struct StoreSales {
    store: String,
    total: f64
}

impl StoreSales {
    pub fn store(&self) -> &str {
        &self.store
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SalesSummary {
    total_sales: f64,
    avg_daily_sales: f64,
    last_day: Option<NaiveDate>
}

impl SalesSummary {
    pub fn total_sales(&self) -> f64 {
        self.total_sales
    }

    pub fn avg_daily_sales(&self) -> f64 {
        self.avg_daily_sales
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.last_day
    }
}

/// 每日營收。同一訂單編號只取首列（多品項訂單每品項一列，
/// 首列帶整筆訂單金額），再依付款日加總。
pub fn daily_sales(records: &[SalesRecord]) -> Vec<DailySales> {
    let mut seen = HashSet::new();
    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        if !seen.insert(record.record_id().to_owned()) {
            continue;
        }
        *by_day.entry(record.day()).or_insert(0.0) += record.amount();
    }
    by_day
        .into_iter()
        .map(|(day, total)| DailySales { day, total: round(total, 2) })
        .collect()
}

/// 每月營收與對前月的成長率。月彙總涵蓋「全部」保留列，不做訂單去重，
/// 與來源報表的月報口徑一致。
pub fn monthly_sales(records: &[SalesRecord]) -> Vec<MonthlySales> {
    let mut by_month: BTreeMap<String, f64> = BTreeMap::new();
    for record in records {
        *by_month.entry(record.month()).or_insert(0.0) += record.amount();
    }

    let mut result = Vec::with_capacity(by_month.len());
    let mut prev_total: Option<f64> = None;
    for (month, total) in by_month {
        let total = round(total, 2);
        let growth_pct = match prev_total {
            Some(prev) if prev != 0.0 => Some((total - prev) / prev * 100.0),
            _ => None
        };
        prev_total = Some(total);
        result.push(MonthlySales { month, total, growth_pct });
    }
    result
}

/// 每日營收的累計數列。
pub fn cumulative_sales(daily: &[DailySales]) -> Vec<DailySales> {
    let mut running = 0.0;
    daily
        .iter()
        .map(|entry| {
            running += entry.total();
            DailySales { day: entry.day(), total: round(running, 2) }
        })
        .collect()
}

pub fn summary(daily: &[DailySales]) -> SalesSummary {
    let total: f64 = daily.iter().map(DailySales::total).sum();
    let avg = if daily.is_empty() { 0.0 } else { total / daily.len() as f64 };
    SalesSummary {
        total_sales: round(total, 2),
        avg_daily_sales: round(avg, 2),
        last_day: daily.last().map(DailySales::day)
    }
}

/// 營收前 `limit` 名的品項，由高至低。
pub fn top_products(records: &[SalesRecord], limit: usize) -> Vec<ProductSales> {
    let mut by_title: BTreeMap<String, f64> = BTreeMap::new();
    for record in records {
        *by_title.entry(record.title().to_owned()).or_insert(0.0) += record.amount();
    }

    let mut products: Vec<ProductSales> = by_title
        .into_iter()
        .map(|(title, total)| ProductSales { title, total: round(total, 2) })
        .collect();
    products.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    products.truncate(limit);
    products
}

/// 指定品項的每日營收（訂單去重同 `daily_sales`）。
pub fn product_daily_sales(records: &[SalesRecord], title: &str) -> Vec<DailySales> {
    let subset: Vec<SalesRecord> = records
        .iter()
        .filter(|record| record.title() == title)
        .cloned()
        .collect();
    daily_sales(&subset)
}

/// 各店別營收，店名字母序。
pub fn store_sales(records: &[SalesRecord]) -> Vec<StoreSales> {
    let mut by_store: BTreeMap<String, f64> = BTreeMap::new();
    for record in records {
        *by_store.entry(record.store().to_owned()).or_insert(0.0) += record.amount();
    }
    by_store
        .into_iter()
        .map(|(store, total)| StoreSales { store, total: round(total, 2) })
        .collect()
}
