// src/api/dto/common.rs

use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// 未指定と明示的な null を区別する
///
/// `#[serde(default, deserialize_with = "double_option")]` と組み合わせて使う。
/// 未指定は `None`、null は `Some(None)`、値は `Some(Some(v))`。
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// クエリの空文字（`?month=`）を未指定として扱う
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}
