use serde::Deserialize;
use thiserror::Error;

use crate::sample::distributionsample::DataIntegrityError;

/// # 變更說明
/// 原本以手刻 `enum` + `Display` 實作；改用 `thiserror` derive 之後，
/// `std::error::Error`／`source()` 鏈與 `?` 轉換（`#[from]`）都由巨集產生，
/// 呼叫方可直接搭配 `anyhow` 等 error crate。
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error(transparent)]
    DataIntegrityError(#[from] DataIntegrityError)
}

impl ManagerError {
    pub fn from_json_or_json_parse_error<T>(json_value: serde_json::Value) -> Result<T, Self>
        where T: for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }
}
