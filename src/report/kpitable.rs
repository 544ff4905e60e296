use std::rc::Rc;

use crate::metrics::kpi::{
    self,
    KpiRecord
};
use crate::sample::distributionsample::DistributionSample;

/// KPI 表單列：樣本名稱加六欄數值。
pub struct KpiRow {
    sample: String,
    kpi: KpiRecord
}

impl KpiRow {
    pub fn new(sample: String, kpi: KpiRecord) -> KpiRow {
        KpiRow { sample, kpi }
    }

    pub fn sample(&self) -> &str {
        &self.sample
    }

    pub fn kpi(&self) -> &KpiRecord {
        &self.kpi
    }

    /// 以具名數值欄位輸出，交由外部視覺化層繪製。
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "sample": self.sample,
            "d10_um": self.kpi.d10(),
            "d50_um": self.kpi.d50(),
            "d90_um": self.kpi.d90(),
            "span": self.kpi.span(),
            "fines_pct": self.kpi.fines_pct(),
            "oversize_pct": self.kpi.oversize_pct()
        })
    }
}

pub struct KpiTable {
    rows: Vec<KpiRow>
}

impl KpiTable {
    pub fn from_rows(rows: Vec<KpiRow>) -> KpiTable {
        KpiTable { rows }
    }

    pub fn build(samples: &[Rc<DistributionSample>]) -> KpiTable {
        let rows = samples
            .iter()
            .map(|sample| KpiRow {
                sample: sample.name().to_owned(),
                kpi: kpi::extract(sample)
            })
            .collect();
        KpiTable { rows }
    }

    pub fn rows(&self) -> &[KpiRow] {
        &self.rows
    }

    pub fn get(&self, sample_name: &str) -> Option<&KpiRow> {
        self.rows.iter().find(|row| row.sample == sample_name)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.rows.iter().map(KpiRow::to_json).collect())
    }

    /// 文字表格，欄位精度沿用儀器報告慣例：D10 一位小數、D50/D90 取整、
    /// Span 與百分比兩位小數。
    pub fn render_text(&self) -> String {
        let mut out = format!(
            "{:<16} {:>8} {:>8} {:>8} {:>6} {:>10} {:>11}\n",
            "Sample", "D10 um", "D50 um", "D90 um", "Span", "% <100um", "% >1000um"
        );
        for row in &self.rows {
            out.push_str(&format!(
                "{:<16} {:>8.1} {:>8.0} {:>8.0} {:>6.2} {:>10.2} {:>11.2}\n",
                row.sample,
                row.kpi.d10(),
                row.kpi.d50(),
                row.kpi.d90(),
                row.kpi.span(),
                row.kpi.fines_pct(),
                row.kpi.oversize_pct()
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::builtinsamples::builtin_samples;

    #[test]
    fn one_row_per_sample_in_input_order() {
        let table = KpiTable::build(&builtin_samples());
        assert_eq!(table.rows().len(), 4);
        assert_eq!(table.rows()[0].sample(), "Ditting");
        assert_eq!(table.rows()[3].sample(), "Plastic Pod");
    }

    #[test]
    fn lookup_by_sample_name() {
        let table = KpiTable::build(&builtin_samples());
        assert!(table.get("Colombini T1").is_some());
        assert!(table.get("MAC-3").is_none());
    }

    #[test]
    fn text_rendering_uses_report_precision() {
        let table = KpiTable::build(&builtin_samples());
        let text = table.render_text();
        let ditting = text.lines().nth(1).unwrap();
        assert!(ditting.contains("45.8"));
        assert!(ditting.contains("456"));
        assert!(ditting.contains("827"));
        assert!(ditting.contains("1.71"));
        assert!(ditting.contains("16.88"));
        assert!(ditting.contains("3.49"));
    }

    #[test]
    fn json_rows_carry_named_numeric_fields() {
        let table = KpiTable::build(&builtin_samples());
        let json = table.to_json();
        let first = &json.as_array().unwrap()[0];
        assert_eq!(first["sample"], "Ditting");
        assert_eq!(first["fines_pct"], 16.88);
        assert!(first["d50_um"].as_f64().unwrap() > 0.0);
    }
}
