use serde::de::DeserializeOwned;
use serde_json::Value;

/// Field the records API puts its result list under.
pub const DEFAULT_RESULT_KEY: &str = "items";

/// Pull the result list out of a response body.
///
/// Uses the `key` field when the body has a non-null one, otherwise treats
/// the whole body as the list.
pub fn extract_results<T>(mut body: Value, key: &str) -> Result<Vec<T>, serde_json::Error>
where
    T: DeserializeOwned,
{
    let list = match body.get_mut(key).map(Value::take) {
        Some(list) if !list.is_null() => list,
        _ => body,
    };
    serde_json::from_value(list)
}
