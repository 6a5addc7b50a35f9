use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Customer record as served by the REST layer. Display attributes are
/// passed through unchanged, the engine only ever looks at `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}
