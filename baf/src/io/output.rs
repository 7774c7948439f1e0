use cutpack::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::BafConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct BafOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: BafConfig,
}
