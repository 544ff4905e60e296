use std::rc::Rc;

use serde::Serialize;

use crate::metrics::density;
use crate::sample::distributionsample::DistributionSample;

// 繪圖層要的扁平紀錄：每列帶樣本名稱，兩個序列分別對應累積分佈圖
// 與密度圖。核心只負責輸出結構化資料，不負責任何繪製。

#[derive(Serialize, Clone, Debug)]
pub struct CumulativeSeriesPoint {
    pub sample: String,
    pub size: f64,
    pub undersize: f64
}

#[derive(Serialize, Clone, Debug)]
pub struct DensitySeriesPoint {
    pub sample: String,
    pub size: f64,
    pub density: f64
}

pub fn cumulative_series(samples: &[Rc<DistributionSample>]) -> Vec<CumulativeSeriesPoint> {
    samples
        .iter()
        .flat_map(|sample| {
            density::cumulative_points(sample)
                .into_iter()
                .map(|point| CumulativeSeriesPoint {
                    sample: sample.name().to_owned(),
                    size: point.x(),
                    undersize: point.y()
                })
        })
        .collect()
}

pub fn density_series(samples: &[Rc<DistributionSample>]) -> Vec<DensitySeriesPoint> {
    samples
        .iter()
        .flat_map(|sample| {
            density::density_points(sample)
                .into_iter()
                .map(|point| DensitySeriesPoint {
                    sample: sample.name().to_owned(),
                    size: point.size(),
                    density: point.density()
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::builtinsamples::builtin_samples;

    #[test]
    fn cumulative_series_flattens_every_tabulated_point() {
        let samples = builtin_samples();
        let expected: usize = samples.iter().map(|s| s.point_count()).sum();
        let series = cumulative_series(&samples);
        assert_eq!(series.len(), expected);
        assert!(series.iter().any(|p| p.sample == "Plastic Pod"));
    }

    #[test]
    fn density_series_has_one_point_per_gap() {
        let samples = builtin_samples();
        let expected: usize = samples.iter().map(|s| s.point_count() - 1).sum();
        assert_eq!(density_series(&samples).len(), expected);
    }

    #[test]
    fn points_serialize_with_named_fields() {
        let samples = builtin_samples();
        let series = cumulative_series(&samples);
        let json = serde_json::to_value(&series[0]).unwrap();
        assert_eq!(json["sample"], "Ditting");
        assert_eq!(json["size"], 10.0);
        assert_eq!(json["undersize"], 0.19);
    }
}
