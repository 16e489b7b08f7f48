/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/25
******************************************************************************/
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use url::form_urlencoded;

/// Builds `/<script>?accion=<accion>&k=v...` with URL-encoded parameters
///
/// Parameters whose value is `None` are left out.
///
/// # Example
/// ```
/// use educa_client::model::utils::accion_path;
///
/// let path = accion_path("/admins.php", "buscar_usuario", &[("query", Some("ana maría"))]);
/// assert_eq!(path, "/admins.php?accion=buscar_usuario&query=ana+mar%C3%ADa");
/// ```
pub fn accion_path(script: &str, accion: &str, params: &[(&str, Option<&str>)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("accion", accion);
    for (key, value) in params {
        if let Some(value) = value {
            query.append_pair(key, value);
        }
    }
    format!("{}?{}", script, query.finish())
}

/// Deserializes an id sent either as a JSON number or as a numeric string
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| de::Error::custom(format!("id out of range: {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid id: {s}"))),
        other => Err(de::Error::custom(format!("invalid id: {other}"))),
    }
}

/// Deserializes a flag sent as a bool, `0`/`1` or `"0"`/`"1"`; null means false
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "" | "0" | "false" => Ok(false),
            "1" | "true" => Ok(true),
            _ => Err(de::Error::custom(format!("invalid flag: {s}"))),
        },
        other => Err(de::Error::custom(format!("invalid flag: {other}"))),
    }
}

/// Deserializes an optional string, mapping `null` and `""` to `None`
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
