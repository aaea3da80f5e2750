// Dashboard embed request domain model
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Body of an embed-token request, forwarded to the upstream API as-is.
///
/// Absent and `null` fields decode to their empty value so a sparse body is
/// still relayed; a field of the wrong JSON type is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub dashboard_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub datasource_id: String,
    #[serde(default, deserialize_with = "variables_or_empty")]
    pub variables: HashMap<String, Vec<Value>>,
}

impl DashboardRequest {
    /// Decode an inbound body. A bare `null` is an empty request.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        Ok(serde_json::from_slice::<Option<Self>>(body)?.unwrap_or_default())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// A `null` variable value becomes an empty list.
fn variables_or_empty<'de, D>(deserializer: D) -> Result<HashMap<String, Vec<Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<HashMap<String, Option<Vec<Value>>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, values)| (name, values.unwrap_or_default()))
        .collect())
}
