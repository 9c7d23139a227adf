//! 数値判定モジュール
//!
//! 任意の値を浮動小数点数として解釈できるかを判定する。
//! 失敗は「書式不正」と「型不適合」の2種類のみで、
//! `is_valid_number` 系はどちらも `false` に正規化する。

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

/// 数値変換の失敗種別
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// 文字列が浮動小数点リテラルとして不正
    #[error("valor nao numerico: '{0}'")]
    InvalidFormat(String),

    /// 数値に変換できない型（null、配列、オブジェクト）
    #[error("tipo incompativel com numero: {0}")]
    IncompatibleType(&'static str),
}

lazy_static! {
    // 数字に挟まれていないアンダースコア
    static ref STRAY_UNDERSCORE: Regex = Regex::new(r"(^|[^0-9])_|_($|[^0-9])").unwrap();
}

/// 文字列を浮動小数点数に変換
///
/// 前後の空白は無視する。`inf` / `infinity` / `nan`（大小文字・符号付き可）、
/// 指数表記、数字間の単一アンダースコア区切り（`1_000`）を受け付ける。
/// 数字はASCIIのみ。アラビア・インド数字や全角数字（`١٢٣`, `１２`）は書式不正とする。
///
/// # Examples
/// ```
/// use tecnica_common::parse_number_str;
///
/// assert_eq!(parse_number_str(" 1_000.5 ").unwrap(), 1000.5);
/// assert!(parse_number_str("abc").is_err());
/// ```
pub fn parse_number_str(text: &str) -> Result<f64, NumberError> {
    let trimmed = text.trim();
    let invalid = || NumberError::InvalidFormat(text.to_string());

    if trimmed.is_empty() {
        return Err(invalid());
    }

    let literal = if trimmed.contains('_') {
        if STRAY_UNDERSCORE.is_match(trimmed) {
            return Err(invalid());
        }
        std::borrow::Cow::Owned(trimmed.replace('_', ""))
    } else {
        std::borrow::Cow::Borrowed(trimmed)
    };

    literal.parse::<f64>().map_err(|_| invalid())
}

/// 任意の値を浮動小数点数に変換
///
/// - 数値: そのまま
/// - 真偽値: `true` → 1.0、`false` → 0.0
/// - 文字列: [`parse_number_str`] に委譲
/// - null / 配列 / オブジェクト: [`NumberError::IncompatibleType`]
pub fn parse_number(value: &Value) -> Result<f64, NumberError> {
    match value {
        Value::Null => Err(NumberError::IncompatibleType("null")),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| NumberError::InvalidFormat(n.to_string())),
        Value::String(s) => parse_number_str(s),
        Value::Array(_) => Err(NumberError::IncompatibleType("array")),
        Value::Object(_) => Err(NumberError::IncompatibleType("object")),
    }
}

/// 値が浮動小数点数として解釈できるか判定
///
/// # Examples
/// ```
/// use serde_json::json;
/// use tecnica_common::is_valid_number;
///
/// assert!(is_valid_number(&json!("42")));
/// assert!(!is_valid_number(&json!("forty-two")));
/// assert!(!is_valid_number(&json!(null)));
/// ```
pub fn is_valid_number(value: &Value) -> bool {
    parse_number(value).is_ok()
}

/// 文字列版の [`is_valid_number`]
pub fn is_valid_number_str(text: &str) -> bool {
    parse_number_str(text).is_ok()
}

/// 値が存在しない場合も扱える [`is_valid_number`]
pub fn is_valid_number_opt(value: Option<&Value>) -> bool {
    value.is_some_and(is_valid_number)
}
