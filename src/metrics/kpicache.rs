// ── kpicache.rs ─────────────────────────────────────────────────────────────

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::metrics::kpi::KpiRecord;

/// 呼叫端持有的 KPI 快取：查詢 + 計算並存入 + 顯式失效。
///
/// # Cache key 設計：pointer address（usize）
///
/// 樣本建構後不可變，想知道的只是「是不是同一個樣本物件」——
/// 即 pointer identity。取 key 一行即可：
///
/// ```text
/// let id = Rc::as_ptr(&sample) as usize;   // Arc 同理
/// ```
///
/// 同一個 `Rc`（或其 clone）位址相同；重新載入的樣本位址不同，舊條目
/// 由呼叫端以 `invalidate` / `clear` 清除。KPI 計算本身保持純函數、
/// 無快取；快取屬於呼叫端，不屬於計算核心。
pub trait KpiCacheBackend {
    fn get_or_compute(
        &self,
        sample_ptr: usize,   // Rc::as_ptr(&sample) as usize
        compute: impl FnOnce() -> KpiRecord,
    ) -> KpiRecord;

    fn invalidate(&self, sample_ptr: usize);

    fn clear(&self);
}

// ── 單執行緒版：RefCell ──────────────────────────────────────────────────────

pub struct RefCellBackend {
    cache: RefCell<HashMap<usize, KpiRecord>>
}

impl RefCellBackend {
    pub fn new() -> Self {
        Self { cache: RefCell::new(HashMap::new()) }
    }
}

impl KpiCacheBackend for RefCellBackend {
    fn get_or_compute(
        &self,
        sample_ptr: usize,
        compute: impl FnOnce() -> KpiRecord,
    ) -> KpiRecord {
        *self.cache.borrow_mut().entry(sample_ptr).or_insert_with(compute)
    }

    fn invalidate(&self, sample_ptr: usize) {
        self.cache.borrow_mut().remove(&sample_ptr);
    }

    fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

// ── 多執行緒版：RwLock ───────────────────────────────────────────────────────
//
// # 已知 trade-off：double-compute
//
// 讀鎖未命中與寫鎖寫入之間，兩條執行緒可能同時發現 key 不存在而各算一次。
// 同一樣本的 KPI 具確定性，雙重計算只是浪費而非錯誤；宿主按樣本
// fan out 時，各樣本 key 不同，實際上不會爭用。

pub struct RwLockBackend {
    cache: RwLock<HashMap<usize, KpiRecord>>
}

impl RwLockBackend {
    pub fn new() -> Self {
        Self { cache: RwLock::new(HashMap::new()) }
    }
}

impl KpiCacheBackend for RwLockBackend {
    fn get_or_compute(
        &self,
        sample_ptr: usize,
        compute: impl FnOnce() -> KpiRecord,
    ) -> KpiRecord {
        if let Some(&kpi) = self.cache.read().unwrap().get(&sample_ptr) {
            return kpi;
        }

        // 持鎖外計算，再寫入。
        let kpi = compute();
        self.cache.write().unwrap().insert(sample_ptr, kpi);
        kpi
    }

    fn invalidate(&self, sample_ptr: usize) {
        self.cache.write().unwrap().remove(&sample_ptr);
    }

    fn clear(&self) {
        self.cache.write().unwrap().clear();
    }
}
