use chrono::NaiveDateTime;
use log::info;
use thiserror::Error;

use crate::sales::salesrecord::SalesRecord;

/// 來源報表的付款時間格式，例如 `03/15/2024 02:30:00 PM`。
pub const DATE_PAID_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

pub const RECORD_ID_COLUMN: &str = "Record #";
pub const DATE_PAID_COLUMN: &str = "Date Paid";
pub const AMOUNT_COLUMN: &str = "Amt Paid";
pub const TITLE_COLUMN: &str = "Title";
pub const STORE_COLUMN: &str = "Store";

#[derive(Debug, Error)]
pub enum MissingInputError {
    #[error("cannot read sales file '{path}': {source}")]
    UnreadableFile {
        path: String,
        #[source]
        source: csv::Error
    },
    #[error("sales file '{path}' is missing required column '{column}'")]
    MissingColumn {
        path: String,
        column: &'static str
    }
}

fn column_index(
    headers: &csv::StringRecord,
    path: &str,
    column: &'static str
) -> Result<usize, MissingInputError> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| MissingInputError::MissingColumn { path: path.to_owned(), column })
}

/// 讀入銷售 CSV。
///
/// 檔案不存在、不可讀或缺少必要欄位時整批失敗；個別資料列若沒有
/// 可解析的付款時間或金額不為正，則跳過該列並記錄筆數（未付款或
/// 退款列不列入分析）。
pub fn load_sales_csv(path: &str) -> Result<Vec<SalesRecord>, MissingInputError> {
    let unreadable = |source| MissingInputError::UnreadableFile { path: path.to_owned(), source };

    let mut reader = csv::Reader::from_path(path).map_err(unreadable)?;
    let headers = reader.headers().map_err(unreadable)?.clone();

    let record_id_idx = column_index(&headers, path, RECORD_ID_COLUMN)?;
    let date_paid_idx = column_index(&headers, path, DATE_PAID_COLUMN)?;
    let amount_idx = column_index(&headers, path, AMOUNT_COLUMN)?;
    let title_idx = column_index(&headers, path, TITLE_COLUMN)?;
    let store_idx = column_index(&headers, path, STORE_COLUMN)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.records() {
        let row = row.map_err(unreadable)?;

        let date_raw = row.get(date_paid_idx).unwrap_or("").trim();
        let amount: f64 = row
            .get(amount_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .unwrap_or(0.0);

        let Ok(date_paid) = NaiveDateTime::parse_from_str(date_raw, DATE_PAID_FORMAT) else {
            skipped += 1;
            continue;
        };
        if amount <= 0.0 {
            skipped += 1;
            continue;
        }

        records.push(SalesRecord::new(
            row.get(record_id_idx).unwrap_or("").trim().to_owned(),
            date_paid,
            amount,
            row.get(title_idx).unwrap_or("").trim().to_owned(),
            row.get(store_idx).unwrap_or("").trim().to_owned()
        ));
    }

    if skipped > 0 {
        info!("skipped {skipped} sales rows without a paid date or positive amount");
    }
    Ok(records)
}
