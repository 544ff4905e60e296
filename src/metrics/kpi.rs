use crate::math::curve::curve::Curve;
use crate::sample::distributionsample::DistributionSample;

/// 細粉判定粒徑（µm）：低於此粒徑的體積百分比即 fines。
pub const FINES_THRESHOLD_UM: f64 = 100.0;

/// 過大顆粒判定粒徑（µm）：高於此粒徑的體積百分比即 oversize。
pub const OVERSIZE_THRESHOLD_UM: f64 = 1000.0;

/// 單一樣本的研磨 KPI。衍生的唯讀值物件；樣本變動時整筆重算。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KpiRecord {
    d10: f64,
    d50: f64,
    d90: f64,
    span: f64,
    fines_pct: f64,
    oversize_pct: f64
}

impl KpiRecord {
    pub fn new(
        d10: f64,
        d50: f64,
        d90: f64,
        span: f64,
        fines_pct: f64,
        oversize_pct: f64
    ) -> KpiRecord {
        KpiRecord { d10, d50, d90, span, fines_pct, oversize_pct }
    }

    pub fn d10(&self) -> f64 {
        self.d10
    }

    pub fn d50(&self) -> f64 {
        self.d50
    }

    pub fn d90(&self) -> f64 {
        self.d90
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn fines_pct(&self) -> f64 {
        self.fines_pct
    }

    pub fn oversize_pct(&self) -> f64 {
        self.oversize_pct
    }
}

/// 自樣本的累積分佈表導出 KPI。
///
/// D10/D50/D90 以「累積百分比 → 粒徑」反函數表做線性內插，超出表列範圍
/// 時 clamp 至首/末粒徑；fines/oversize 以「粒徑 → 累積百分比」正向表在
/// 100 µm / 1000 µm 求值。Span = (D90 − D10) / D50，D50 為零時回傳 NaN
/// 哨兵值而非拋出算術錯誤。純函數，無副作用。
pub fn extract(sample: &DistributionSample) -> KpiRecord {
    let percentile = sample.percentile_curve();
    let undersize = sample.undersize_curve();

    let d10 = percentile.value(10.0);
    let d50 = percentile.value(50.0);
    let d90 = percentile.value(90.0);
    let span = if d50 == 0.0 { f64::NAN } else { (d90 - d10) / d50 };
    let fines_pct = undersize.value(FINES_THRESHOLD_UM);
    let oversize_pct = 100.0 - undersize.value(OVERSIZE_THRESHOLD_UM);

    KpiRecord::new(d10, d50, d90, span, fines_pct, oversize_pct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::builtinsamples::builtin_samples;

    fn sample(name: &str, sizes: &[f64], undersize: &[f64]) -> DistributionSample {
        DistributionSample::new(name.to_owned(), sizes.to_vec(), undersize.to_vec()).unwrap()
    }

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn three_point_scenario() {
        let s = sample("Scenario", &[10.0, 100.0, 1000.0], &[0.0, 50.0, 100.0]);
        let kpi = extract(&s);
        assert_eq!(kpi.d50(), 100.0);
        assert_eq!(kpi.fines_pct(), 50.0);
        assert_eq!(kpi.oversize_pct(), 0.0);
        assert_close(kpi.d10(), 28.0, 1e-12);
        assert_close(kpi.d90(), 820.0, 1e-12);
        assert_close(kpi.span(), 7.92, 1e-12);
    }

    #[test]
    fn matches_reference_values_for_ditting() {
        let samples = builtin_samples();
        let kpi = extract(&samples[0]);
        assert_close(kpi.d10(), 45.7812, 1e-3);
        assert_close(kpi.d50(), 456.1819, 1e-3);
        assert_close(kpi.d90(), 827.4138, 1e-3);
        assert_close(kpi.span(), 1.7134, 1e-3);
        assert_eq!(kpi.fines_pct(), 16.88);
        assert_close(kpi.oversize_pct(), 3.49, 1e-12);
    }

    #[test]
    fn percentiles_are_monotone_for_all_builtin_samples() {
        for s in builtin_samples() {
            let kpi = extract(&s);
            assert!(kpi.d10() <= kpi.d50(), "{}", s.name());
            assert!(kpi.d50() <= kpi.d90(), "{}", s.name());
            assert!(kpi.span() >= 0.0, "{}", s.name());
        }
    }

    #[test]
    fn fines_is_exact_when_threshold_is_a_knot() {
        // 100 µm 為表列粒徑時，內插須恰好等於表列值。
        for s in builtin_samples() {
            let i = s.sizes().iter().position(|&x| x == FINES_THRESHOLD_UM).unwrap();
            assert_eq!(extract(&s).fines_pct(), s.undersize()[i], "{}", s.name());
        }
    }

    #[test]
    fn percentile_clamps_below_first_tabulated_undersize() {
        // 首筆累積值已超過 10%：D10 clamp 至首粒徑，不外插。
        let s = sample("Coarse", &[50.0, 500.0, 1500.0], &[20.0, 60.0, 100.0]);
        let kpi = extract(&s);
        assert_eq!(kpi.d10(), 50.0);
    }

    #[test]
    fn zero_d50_yields_nan_span() {
        let s = sample("Degenerate", &[-10.0, 0.0, 10.0], &[0.0, 50.0, 100.0]);
        assert!(extract(&s).span().is_nan());
    }

    #[test]
    fn single_point_sample_clamps_everywhere() {
        let s = sample("Point", &[200.0], &[50.0]);
        let kpi = extract(&s);
        assert_eq!(kpi.d10(), 200.0);
        assert_eq!(kpi.d50(), 200.0);
        assert_eq!(kpi.d90(), 200.0);
        assert_eq!(kpi.span(), 0.0);
        assert_eq!(kpi.fines_pct(), 50.0);
        assert_eq!(kpi.oversize_pct(), 50.0);
    }
}
