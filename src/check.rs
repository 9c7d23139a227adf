//! 数値判定コマンド

use crate::error::Result;
use serde_json::Value;
use std::io::Write;
use tecnica_common::is_valid_number;

/// CLI引数を判定対象の値に変換
///
/// `as_json` の場合はJSONとして解釈し、失敗したら文字列として扱う。
pub fn to_value(raw: &str, as_json: bool) -> Value {
    if as_json {
        serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
    } else {
        Value::String(raw.to_string())
    }
}

/// 各値の判定結果を `値: true|false` で書き出す
pub fn run_check<W: Write>(values: &[String], as_json: bool, mut writer: W) -> Result<Vec<bool>> {
    let mut results = Vec::with_capacity(values.len());

    for raw in values {
        let value = to_value(raw, as_json);
        let valid = is_valid_number(&value);
        tracing::debug!(input = %raw, kind = value_kind(&value), valid, "number checked");

        writeln!(writer, "{}: {}", raw, valid)?;
        results.push(valid);
    }

    Ok(results)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
