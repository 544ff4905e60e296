use std::rc::Rc;

use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::sample::distributionsample::DistributionSample;

#[derive(Deserialize)]
struct DistributionSampleJsonProp {
    name: String,
    sizes: Vec<f64>,
    undersize: Vec<f64>
}

fn get_distribution_sample_from_json(
    json_value: serde_json::Value
) -> Result<Rc<DistributionSample>, ManagerError> {
    let json_prop: DistributionSampleJsonProp =
        ManagerError::from_json_or_json_parse_error(json_value)?;
    let sample = DistributionSample::new(json_prop.name, json_prop.sizes, json_prop.undersize)?;
    Ok(Rc::new(sample))
}

pub struct SampleManager;

impl SampleManager {
    pub fn new() -> Manager<Rc<DistributionSample>> {
        Manager::new(get_distribution_sample_from_json)
    }
}
