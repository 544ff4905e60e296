use thiserror::Error;

use crate::math::curve::curve::Point2D;
use crate::math::curve::piecewiselinear::PiecewiseLinear;

#[derive(Debug, Error)]
pub enum DataIntegrityError {
    #[error("sample '{name}': sizes and undersize must have the same length: {sizes_len} vs {undersize_len}")]
    MismatchedLengths {
        name: String,
        sizes_len: usize,
        undersize_len: usize
    },
    #[error("sample '{name}': at least one tabulated point is required")]
    Empty {
        name: String
    }
}

/// 一筆粒徑分佈樣本：粒徑（µm，嚴格遞增）對累積過篩百分比（非遞減，
/// 介於 0–100）。兩序列等長且非空於建構時驗證；建構後不可變。
#[derive(Clone, Debug)]
pub struct DistributionSample {
    name: String,
    sizes: Vec<f64>,
    undersize: Vec<f64>
}

impl DistributionSample {
    pub fn new(
        name: String,
        sizes: Vec<f64>,
        undersize: Vec<f64>
    ) -> Result<DistributionSample, DataIntegrityError> {
        if sizes.len() != undersize.len() {
            return Err(DataIntegrityError::MismatchedLengths {
                name,
                sizes_len: sizes.len(),
                undersize_len: undersize.len()
            });
        }
        if sizes.is_empty() {
            return Err(DataIntegrityError::Empty { name });
        }
        Ok(DistributionSample { name, sizes, undersize })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    pub fn undersize(&self) -> &[f64] {
        &self.undersize
    }

    pub fn point_count(&self) -> usize {
        self.sizes.len()
    }

    /// 依表列順序回傳 (size, undersize) 節點。
    pub fn points(&self) -> Vec<Point2D> {
        self.sizes
            .iter()
            .zip(self.undersize.iter())
            .map(|(&size, &undersize)| Point2D::new(size, undersize))
            .collect()
    }

    /// 粒徑 → 累積過篩百分比的內插曲線。
    pub fn undersize_curve(&self) -> PiecewiseLinear {
        PiecewiseLinear::from_xy(&self.sizes, &self.undersize)
            .expect("validated sample always has at least one point")
    }

    /// 累積過篩百分比 → 粒徑的反函數內插曲線，用於 D10/D50/D90 查詢。
    pub fn percentile_curve(&self) -> PiecewiseLinear {
        PiecewiseLinear::from_xy(&self.undersize, &self.sizes)
            .expect("validated sample always has at least one point")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_equal_length_sequences() {
        let sample = DistributionSample::new(
            "Test".to_owned(),
            vec![10.0, 100.0, 1000.0],
            vec![0.0, 50.0, 100.0]
        )
        .unwrap();
        assert_eq!(sample.name(), "Test");
        assert_eq!(sample.point_count(), 3);
        assert_eq!(sample.points().len(), 3);
    }

    #[test]
    fn rejects_mismatched_lengths_without_truncating() {
        let sizes: Vec<f64> = (0..34).map(|i| i as f64).collect();
        let undersize: Vec<f64> = (0..33).map(|i| i as f64).collect();
        let err = DistributionSample::new("Ditting".to_owned(), sizes, undersize).unwrap_err();
        match err {
            DataIntegrityError::MismatchedLengths { name, sizes_len, undersize_len } => {
                assert_eq!(name, "Ditting");
                assert_eq!(sizes_len, 34);
                assert_eq!(undersize_len, 33);
            }
            other => panic!("unexpected error: {other}")
        }
    }

    #[test]
    fn rejects_empty_sample() {
        let err = DistributionSample::new("Empty".to_owned(), vec![], vec![]).unwrap_err();
        assert!(matches!(err, DataIntegrityError::Empty { .. }));
    }
}
