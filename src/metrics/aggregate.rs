use thiserror::Error;

use crate::metrics::kpi::KpiRecord;

#[derive(Debug, Error)]
#[error("no candidate samples to compare against baseline '{baseline}'")]
pub struct EmptyCandidateSetError {
    baseline: String
}

impl EmptyCandidateSetError {
    pub fn baseline(&self) -> &str {
        &self.baseline
    }
}

/// 基準與候選平均之間的單一 KPI 差值；有號值與絕對值並陳，
/// 下游敘述文字兩者都會用到。
#[derive(Clone, Copy, Debug)]
pub struct KpiDelta {
    signed: f64
}

impl KpiDelta {
    fn new(signed: f64) -> KpiDelta {
        KpiDelta { signed }
    }

    pub fn signed(&self) -> f64 {
        self.signed
    }

    pub fn absolute(&self) -> f64 {
        self.signed.abs()
    }
}

/// 管理層摘要：候選樣本的平均 KPI，與基準在 fines / oversize / span
/// 三項上的差值。
#[derive(Debug)]
pub struct ExecutiveSummary {
    baseline_name: String,
    baseline: KpiRecord,
    candidate_mean: KpiRecord,
    fines_delta: KpiDelta,
    oversize_delta: KpiDelta,
    span_delta: KpiDelta
}

impl ExecutiveSummary {
    pub fn baseline_name(&self) -> &str {
        &self.baseline_name
    }

    pub fn baseline(&self) -> &KpiRecord {
        &self.baseline
    }

    pub fn candidate_mean(&self) -> &KpiRecord {
        &self.candidate_mean
    }

    pub fn fines_delta(&self) -> &KpiDelta {
        &self.fines_delta
    }

    pub fn oversize_delta(&self) -> &KpiDelta {
        &self.oversize_delta
    }

    pub fn span_delta(&self) -> &KpiDelta {
        &self.span_delta
    }
}

fn mean_kpi(candidates: &[KpiRecord]) -> KpiRecord {
    let n = candidates.len() as f64;
    KpiRecord::new(
        candidates.iter().map(KpiRecord::d10).sum::<f64>() / n,
        candidates.iter().map(KpiRecord::d50).sum::<f64>() / n,
        candidates.iter().map(KpiRecord::d90).sum::<f64>() / n,
        candidates.iter().map(KpiRecord::span).sum::<f64>() / n,
        candidates.iter().map(KpiRecord::fines_pct).sum::<f64>() / n,
        candidates.iter().map(KpiRecord::oversize_pct).sum::<f64>() / n
    )
}

/// 差值方向為「基準 − 候選平均」：正值表示基準較高。
/// 候選集合為空時回傳 `EmptyCandidateSetError`，不產生任何部分結果。
pub fn summarize(
    baseline_name: &str,
    baseline: &KpiRecord,
    candidates: &[KpiRecord]
) -> Result<ExecutiveSummary, EmptyCandidateSetError> {
    if candidates.is_empty() {
        return Err(EmptyCandidateSetError { baseline: baseline_name.to_owned() });
    }

    let candidate_mean = mean_kpi(candidates);
    Ok(ExecutiveSummary {
        baseline_name: baseline_name.to_owned(),
        baseline: *baseline,
        candidate_mean,
        fines_delta: KpiDelta::new(baseline.fines_pct() - candidate_mean.fines_pct()),
        oversize_delta: KpiDelta::new(baseline.oversize_pct() - candidate_mean.oversize_pct()),
        span_delta: KpiDelta::new(baseline.span() - candidate_mean.span())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kpi(span: f64, fines: f64, oversize: f64) -> KpiRecord {
        KpiRecord::new(50.0, 450.0, 850.0, span, fines, oversize)
    }

    #[test]
    fn empty_candidate_set_is_rejected() {
        let baseline = kpi(1.7, 16.9, 1.9);
        let err = summarize("Ditting", &baseline, &[]).unwrap_err();
        assert_eq!(err.baseline(), "Ditting");
        assert_eq!(
            err.to_string(),
            "no candidate samples to compare against baseline 'Ditting'"
        );
    }

    #[test]
    fn means_and_deltas_over_two_candidates() {
        let baseline = kpi(1.70, 16.88, 1.87);
        let candidates = [kpi(1.66, 12.49, 2.46), kpi(1.70, 15.70, 0.26)];
        let summary = summarize("Ditting", &baseline, &candidates).unwrap();

        assert!((summary.candidate_mean().fines_pct() - 14.095).abs() < 1e-12);
        assert!((summary.fines_delta().signed() - 2.785).abs() < 1e-12);
        assert_eq!(summary.fines_delta().absolute(), summary.fines_delta().signed());

        assert!((summary.oversize_delta().signed() - 0.51).abs() < 1e-12);
        assert!((summary.span_delta().signed() - 0.02).abs() < 1e-12);
    }

    #[test]
    fn negative_delta_keeps_sign_and_magnitude_apart() {
        let baseline = kpi(1.6, 10.0, 1.0);
        let candidates = [kpi(1.8, 14.0, 3.0)];
        let summary = summarize("Base", &baseline, &candidates).unwrap();
        assert!((summary.fines_delta().signed() + 4.0).abs() < 1e-12);
        assert!((summary.fines_delta().absolute() - 4.0).abs() < 1e-12);
    }
}
