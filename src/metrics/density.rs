use crate::math::curve::curve::{
    Curve,
    Point2D
};
use crate::sample::distributionsample::DistributionSample;

/// 單一密度點：相鄰兩個表列粒徑的中點，與該區間的 undersize 曲線斜率。
#[derive(Clone, Copy, Debug)]
pub struct DensityPoint {
    size: f64,
    density: f64
}

impl DensityPoint {
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn density(&self) -> f64 {
        self.density
    }
}

/// 累積曲線原樣輸出（identity pass-through），供繪圖層直接取用。
pub fn cumulative_points(sample: &DistributionSample) -> Vec<Point2D> {
    sample.points()
}

/// 密度點序列：每對相鄰節點產生一點，長度為樣本節點數減一。
///
/// 這是 undersize 曲線的離散有限差分近似（Δ% / Δµm），「未經正規化」，
/// 各點對區間寬度的加權和等於首末累積值之差而非 1——不可當作真正的
/// 機率密度函數使用。每次呼叫重新計算，不做快取；重算便宜且冪等。
pub fn density_points(sample: &DistributionSample) -> Vec<DensityPoint> {
    let curve = sample.undersize_curve();
    sample
        .sizes()
        .windows(2)
        .map(|pair| {
            let size = (pair[0] + pair[1]) / 2.0;
            DensityPoint { size, density: curve.derivative(size) }
        })
        .collect()
}
