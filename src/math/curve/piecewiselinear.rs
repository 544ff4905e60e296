use crate::math::curve::curve::{
    Curve,
    Point2D
};

// ─────────────────────────────────────────────
// Segment
// ─────────────────────────────────────────────

struct Segment {
    lhs_x: f64,
    lhs_y: f64,
    slope: f64
}

impl Segment {
    fn value(&self, x: f64) -> f64 {
        f64::mul_add(self.slope, x - self.lhs_x, self.lhs_y)
    }
}

// ─────────────────────────────────────────────
// PiecewiseLinear
// ─────────────────────────────────────────────

/// 以 (x, y) 節點表建立的折線內插曲線。
///
/// # 邊界行為
/// 查詢值超出節點範圍時 clamp 至首/末節點的 y 值，不做外插。
///
/// # 重複 x 節點
/// 水平區段的反函數表會出現相同的 x。查詢值恰等於重複節點時取「較後」
/// 一筆的 y，與 `np.interp` 一致；寬度為零的區段沒有內部點，永遠不會被
/// `find_segment` 選中，其斜率（±inf 或 NaN）不影響任何查詢結果。
///
/// # 退化情形
/// 單一節點退化為常數曲線（斜率處處為 0）。
pub struct PiecewiseLinear {
    segment_list: Vec<Segment>,
    max_x: f64,
    max_y: f64
}

impl PiecewiseLinear {
    /// 節點須依 x 非遞減排序；空節點表回傳 `None`。
    pub fn new(points: Vec<Point2D>) -> Option<PiecewiseLinear> {
        let last = points.last()?;
        let (max_x, max_y) = (last.x(), last.y());
        let segment_list = points
            .windows(2)
            .map(|pair| Segment {
                lhs_x: pair[0].x(),
                lhs_y: pair[0].y(),
                slope: Point2D::slope(&pair[0], &pair[1])
            })
            .collect();
        Some(PiecewiseLinear { segment_list, max_x, max_y })
    }

    /// 兩序列長度不一致視為建構失敗，不做截斷。
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Option<PiecewiseLinear> {
        if xs.len() != ys.len() {
            return None;
        }
        Self::new(
            xs.iter()
                .zip(ys.iter())
                .map(|(&x, &y)| Point2D::new(x, y))
                .collect()
        )
    }

    pub fn min_x(&self) -> f64 {
        self.segment_list.first().map_or(self.max_x, |segment| segment.lhs_x)
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    // 僅在 min_x < x < max_x 時呼叫；partition_point 回傳「lhs_x <= x 的
    // 區段數」，最後一個符合者的索引即為 count - 1。
    fn find_segment(&self, x: f64) -> usize {
        self.segment_list.partition_point(|segment| segment.lhs_x <= x) - 1
    }
}

impl Curve for PiecewiseLinear {
    fn value(&self, x: f64) -> f64 {
        if self.segment_list.is_empty() {
            self.max_y
        } else if x <= self.min_x() {
            self.segment_list[0].lhs_y
        } else if x >= self.max_x {
            self.max_y
        } else {
            self.segment_list[self.find_segment(x)].value(x)
        }
    }

    fn derivative(&self, x: f64) -> f64 {
        if self.segment_list.is_empty() || x <= self.min_x() || x >= self.max_x {
            0.0
        } else {
            self.segment_list[self.find_segment(x)].slope
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(xs: &[f64], ys: &[f64]) -> PiecewiseLinear {
        PiecewiseLinear::from_xy(xs, ys).unwrap()
    }

    #[test]
    fn interpolates_between_knots() {
        let c = curve(&[0.0, 10.0, 20.0], &[0.0, 100.0, 40.0]);
        assert_eq!(c.value(5.0), 50.0);
        assert_eq!(c.value(15.0), 70.0);
    }

    #[test]
    fn exact_at_knots() {
        let c = curve(&[0.0, 10.0, 20.0], &[0.0, 100.0, 40.0]);
        assert_eq!(c.value(0.0), 0.0);
        assert_eq!(c.value(10.0), 100.0);
        assert_eq!(c.value(20.0), 40.0);
    }

    #[test]
    fn clamps_outside_range() {
        let c = curve(&[10.0, 20.0], &[1.0, 2.0]);
        assert_eq!(c.value(-100.0), 1.0);
        assert_eq!(c.value(9.99), 1.0);
        assert_eq!(c.value(20.01), 2.0);
        assert_eq!(c.value(1000.0), 2.0);
    }

    #[test]
    fn duplicate_knot_takes_later_value() {
        let c = curve(&[0.0, 1.0, 1.0, 2.0], &[0.0, 10.0, 20.0, 30.0]);
        assert_eq!(c.value(0.5), 5.0);
        assert_eq!(c.value(1.0), 20.0);
        assert_eq!(c.value(1.5), 25.0);
    }

    #[test]
    fn trailing_duplicate_knot_clamps_to_last_value() {
        let c = curve(&[0.0, 1.0, 1.0], &[0.0, 10.0, 20.0]);
        assert_eq!(c.value(1.0), 20.0);
        assert_eq!(c.value(5.0), 20.0);
        assert_eq!(c.value(0.5), 5.0);
    }

    #[test]
    fn derivative_is_segment_slope() {
        let c = curve(&[0.0, 10.0, 20.0], &[0.0, 100.0, 40.0]);
        assert_eq!(c.derivative(5.0), 10.0);
        assert_eq!(c.derivative(15.0), -6.0);
        assert_eq!(c.derivative(-1.0), 0.0);
        assert_eq!(c.derivative(25.0), 0.0);
    }

    #[test]
    fn single_point_is_constant() {
        let c = curve(&[5.0], &[42.0]);
        assert_eq!(c.value(0.0), 42.0);
        assert_eq!(c.value(5.0), 42.0);
        assert_eq!(c.value(100.0), 42.0);
        assert_eq!(c.derivative(5.0), 0.0);
    }

    #[test]
    fn mismatched_lengths_rejected() {
        assert!(PiecewiseLinear::from_xy(&[1.0, 2.0], &[1.0]).is_none());
        assert!(PiecewiseLinear::from_xy(&[], &[]).is_none());
    }
}
