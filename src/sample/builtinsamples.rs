use std::rc::Rc;

use crate::sample::distributionsample::DistributionSample;

// 內建樣本：Ditting 基準機、Colombini MAC-3 兩次試磨，以及塑膠膠囊
// 產線樣本的累積粒徑分佈（µm 對 %-undersize）。

const DITTING_SIZES: [f64; 34] = [
    10.0, 20.0, 30.0, 40.0, 60.0, 70.0, 80.0, 90.0, 100.0, 120.0, 140.0, 160.0, 180.0, 200.0,
    250.0, 300.0, 350.0, 400.0, 500.0, 550.0, 600.0, 650.0, 700.0, 750.0, 800.0, 850.0, 900.0,
    950.0, 1000.0, 1100.0, 1200.0, 1300.0, 1400.0, 1500.0
];
const DITTING_UNDERSIZE: [f64; 34] = [
    0.19, 2.65, 6.04, 8.89, 12.73, 14.08, 15.19, 16.12, 16.88, 18.00, 18.74, 19.27, 19.77, 20.40,
    23.05, 27.64, 33.84, 41.23, 56.84, 64.00, 70.49, 76.19, 80.97, 85.21, 88.41, 91.31, 93.36,
    95.14, 96.51, 98.36, 99.23, 99.75, 99.94, 100.00
];

const COLOMBINI_T1_SIZES: [f64; 33] = [
    10.0, 20.0, 30.0, 40.0, 60.0, 70.0, 80.0, 90.0, 100.0, 120.0, 140.0, 160.0, 180.0, 200.0,
    250.0, 300.0, 350.0, 400.0, 500.0, 550.0, 600.0, 650.0, 700.0, 750.0, 800.0, 850.0, 900.0,
    950.0, 1000.0, 1100.0, 1200.0, 1300.0, 1400.0
];
const COLOMBINI_T1_UNDERSIZE: [f64; 33] = [
    0.10, 1.75, 4.01, 5.97, 8.87, 9.99, 10.96, 11.79, 12.49, 13.58, 14.36, 14.99, 15.62, 16.41,
    19.48, 24.39, 30.80, 38.29, 53.99, 61.21, 67.78, 73.01, 78.56, 82.97, 86.38, 89.49, 91.76,
    93.75, 95.32, 97.54, 99.43, 99.77, 99.77
];

const COLOMBINI_T2_SIZES: [f64; 33] = [
    10.0, 20.0, 30.0, 40.0, 60.0, 70.0, 80.0, 90.0, 100.0, 120.0, 140.0, 160.0, 180.0, 200.0,
    250.0, 300.0, 350.0, 400.0, 500.0, 550.0, 600.0, 650.0, 700.0, 750.0, 800.0, 850.0, 900.0,
    950.0, 1000.0, 1100.0, 1200.0, 1300.0, 1400.0
];
const COLOMBINI_T2_UNDERSIZE: [f64; 33] = [
    0.18, 2.31, 5.13, 7.61, 11.33, 12.73, 13.91, 14.89, 15.70, 16.90, 17.78, 18.59, 19.53, 20.74,
    25.22, 31.72, 39.53, 48.01, 64.21, 71.09, 77.10, 82.16, 86.23, 89.75, 92.25, 94.48, 95.96,
    97.21, 98.13, 99.26, 99.70, 99.93, 99.98
];

const PLASTIC_POD_SIZES: [f64; 33] = [
    10.0, 20.0, 30.0, 40.0, 60.0, 70.0, 80.0, 90.0, 100.0, 120.0, 140.0, 160.0, 180.0, 200.0,
    250.0, 300.0, 350.0, 400.0, 500.0, 550.0, 600.0, 650.0, 700.0, 750.0, 800.0, 850.0, 900.0,
    950.0, 1000.0, 1100.0, 1200.0, 1500.0, 2900.0
];
const PLASTIC_POD_UNDERSIZE: [f64; 33] = [
    0.25, 3.39, 7.22, 10.13, 13.54, 14.62, 15.52, 16.29, 16.96, 18.02, 18.77, 19.28, 19.65, 20.00,
    21.38, 24.15, 28.47, 34.22, 47.98, 54.92, 61.49, 67.60, 73.01, 77.93, 81.94, 85.62, 88.44,
    90.97, 93.01, 95.04, 97.75, 99.52, 100.00
];

pub const BASELINE_SAMPLE_NAME: &str = "Ditting";

fn build(name: &str, sizes: &[f64], undersize: &[f64]) -> Rc<DistributionSample> {
    let sample = DistributionSample::new(name.to_owned(), sizes.to_vec(), undersize.to_vec())
        .expect("built-in sample tables are length-consistent");
    Rc::new(sample)
}

/// 內建的四筆樣本，依原始儀器報告的順序排列。
pub fn builtin_samples() -> Vec<Rc<DistributionSample>> {
    vec![
        build("Ditting", &DITTING_SIZES, &DITTING_UNDERSIZE),
        build("Colombini T1", &COLOMBINI_T1_SIZES, &COLOMBINI_T1_UNDERSIZE),
        build("Colombini T2", &COLOMBINI_T2_SIZES, &COLOMBINI_T2_UNDERSIZE),
        build("Plastic Pod", &PLASTIC_POD_SIZES, &PLASTIC_POD_UNDERSIZE)
    ]
}
