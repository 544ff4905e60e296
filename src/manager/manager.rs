use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use log::warn;
use serde::Deserialize;

use super::managererror::ManagerError;

#[derive(Deserialize)]
struct NamedJsonProp {
    name: String
}

pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    /// 逐筆插入；單筆驗證失敗記錄警告後跳過，不中斷整批。
    /// 回傳被跳過項目的錯誤清單。
    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Vec<ManagerError> {
        let mut failures = Vec::new();
        for json_value in json_vec {
            if let Err(error) = self.insert_obj_from_json(json_value.clone()) {
                warn!("skipping invalid entry: {error}");
                failures.push(error);
            }
        }
        failures
    }

    /// 檔案開啟或 JSON 解析失敗屬致命錯誤（`Err`）；
    /// 個別項目的驗證失敗只回報於成功值中的清單。
    fn from_reader(&self, file_path: &str) -> Result<Vec<ManagerError>, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> =
                ManagerError::from_json_or_json_parse_error(json_value)?;
            Ok(self.insert_obj_from_json_vec(&json_array))
        } else {
            Ok(self.insert_obj_from_json_vec(std::slice::from_ref(&json_value)))
        }
    }
}

pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    order_cell: RefCell<Vec<String>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}

impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {
            map_cell: RefCell::new(HashMap::new()),
            order_cell: RefCell::new(Vec::new()),
            get_obj_from_json
        }
    }

    /// 依插入順序回傳所有值；重複名稱以後者覆蓋、保留原位置。
    pub fn values(&self) -> Vec<V> {
        let map = self.map_cell.borrow();
        self.order_cell
            .borrow()
            .iter()
            .filter_map(|name| map.get(name).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.map_cell.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map_cell.borrow().is_empty()
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named: NamedJsonProp = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        if self.map_cell.borrow_mut().insert(named.name.clone(), v).is_none() {
            self.order_cell.borrow_mut().push(named.name);
        }
        Ok(())
    }
}
