use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::rc::Rc;

use serde::Deserialize;

use crate::manager::manager::{
    IManager,
    Manager
};
use crate::manager::managererror::ManagerError;
use crate::sample::distributionsample::DistributionSample;
use crate::sample::samplemanager::SampleManager;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    samples: Vec<serde_json::Value>,
    baseline: Option<String>,
    sales_file: Option<String>
}

pub struct Configuration {
    sample_manager_cell: RefCell<Manager<Rc<DistributionSample>>>,
    baseline_cell: RefCell<Option<String>>,
    sales_file_cell: RefCell<Option<String>>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            sample_manager_cell: RefCell::new(SampleManager::new()),
            baseline_cell: RefCell::new(None),
            sales_file_cell: RefCell::new(None)
        }
    }

    pub fn sample_manager(&self) -> RefMut<'_, Manager<Rc<DistributionSample>>> {
        self.sample_manager_cell.borrow_mut()
    }

    pub fn baseline(&self) -> Option<String> {
        self.baseline_cell.borrow().clone()
    }

    pub fn sales_file(&self) -> Option<String> {
        self.sales_file_cell.borrow().clone()
    }

    /// 讀取設定檔並載入樣本。檔案層級的錯誤（開檔、JSON 解析）為致命；
    /// 個別樣本的驗證失敗收集於回傳清單，載入流程繼續。
    pub fn from_reader(&self, file_path: &str) -> Result<Vec<ManagerError>, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        *self.baseline_cell.borrow_mut() = json_prop.baseline;
        *self.sales_file_cell.borrow_mut() = json_prop.sales_file;
        let sample_manager = self.sample_manager_cell.borrow_mut();
        Ok(sample_manager.insert_obj_from_json_vec(&json_prop.samples))
    }
}
