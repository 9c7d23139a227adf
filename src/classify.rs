//! 技法フレーズ分類の入出力
//!
//! 1行読み取り → 前後空白除去 → 分類 → 1行出力。

use crate::error::Result;
use std::io::{BufRead, Write};
use tecnica_common::{describe_technique, Technique};

/// 入力から1行読み取り、説明文を1行書き出す
///
/// EOF（空入力）は空行として扱い、既定の説明を返す。
/// 不正なUTF-8は置換文字に変換し、既定の説明になる。
pub fn run_classifier<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<&'static str> {
    let mut buf = Vec::new();
    let bytes = reader.read_until(b'\n', &mut buf)?;
    let line = String::from_utf8_lossy(&buf);
    let technique = line.trim();

    let description = describe_technique(technique);
    tracing::debug!(
        bytes,
        chars = technique.chars().count(),
        matched = Technique::from_phrase(technique).is_some(),
        "technique classified"
    );

    writeln!(writer, "{}", description)?;
    writer.flush()?;
    Ok(description)
}

/// 既知フレーズの一覧を書き出す
pub fn list_techniques<W: Write>(mut writer: W) -> Result<()> {
    for (i, technique) in Technique::ALL.iter().enumerate() {
        writeln!(writer, "{}. {}", i + 1, technique.phrase())?;
        writeln!(writer, "   → {}", technique.description())?;
    }
    Ok(())
}
