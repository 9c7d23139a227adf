//! プロンプト技法の分類
//!
//! 固定の4フレーズを完全一致で照合し、説明文を返す。
//! 大文字小文字・空白の正規化は行わない。

/// 未登録フレーズに対する説明
pub const UNKNOWN_TECHNIQUE: &str = "Tecnica desconhecida";

/// 既知のプロンプト技法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    /// 明確で具体的なプロンプト
    ClearPrompt,
    /// システムペルソナ
    SystemPersona,
    /// Few-shot
    FewShot,
    /// 思考の連鎖
    ChainOfThought,
}

impl Technique {
    /// 照合順
    pub const ALL: [Technique; 4] = [
        Technique::ClearPrompt,
        Technique::SystemPersona,
        Technique::FewShot,
        Technique::ChainOfThought,
    ];

    /// 照合キーとなるフレーズ
    pub fn phrase(&self) -> &'static str {
        match self {
            Technique::ClearPrompt => "Prompt claro e especifico para tarefa de programacao",
            Technique::SystemPersona => "Persona de sistema definindo papel e tom da IA",
            Technique::FewShot => "Few-shot prompting com poucos exemplos no proprio prompt",
            Technique::ChainOfThought => "Cadeia de pensamento pedindo raciocinio detalhado",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Technique::ClearPrompt => "Define o objetivo e as restricoes da tarefa de forma precisa",
            Technique::SystemPersona => "Atribui um papel ou identidade especifica a IA",
            Technique::FewShot => "Fornece exemplos de entrada e saida para guiar a resposta",
            Technique::ChainOfThought => "Solicita que a IA explique o raciocinio passo a passo",
        }
    }

    /// フレーズから技法を取得（完全一致のみ）
    pub fn from_phrase(phrase: &str) -> Option<Technique> {
        Self::ALL.into_iter().find(|t| t.phrase() == phrase)
    }
}

/// 技法フレーズを説明文に変換
///
/// 入力は呼び出し側で前後の空白を除去済みであること。
/// 一致しない場合は [`UNKNOWN_TECHNIQUE`] を返す。
///
/// # Examples
/// ```
/// use tecnica_common::describe_technique;
///
/// assert_eq!(
///     describe_technique("Persona de sistema definindo papel e tom da IA"),
///     "Atribui um papel ou identidade especifica a IA"
/// );
/// assert_eq!(describe_technique("outra coisa"), "Tecnica desconhecida");
/// ```
pub fn describe_technique(technique: &str) -> &'static str {
    Technique::from_phrase(technique)
        .map(|t| t.description())
        .unwrap_or(UNKNOWN_TECHNIQUE)
}
