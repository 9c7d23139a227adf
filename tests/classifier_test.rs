//! 分類・数値判定の結合テスト

use clap::Parser;
use serde_json::json;
use std::io::Cursor;
use tecnica_cli::check::run_check;
use tecnica_cli::classify::run_classifier;
use tecnica_cli::cli::{Cli, Commands};
use tecnica_common::{describe_technique, is_valid_number, is_valid_number_opt, Technique};

const OUTPUTS: [&str; 5] = [
    "Define o objetivo e as restricoes da tarefa de forma precisa",
    "Atribui um papel ou identidade especifica a IA",
    "Fornece exemplos de entrada e saida para guiar a resposta",
    "Solicita que a IA explique o raciocinio passo a passo",
    "Tecnica desconhecida",
];

fn classify_line(input: &str) -> String {
    let mut output = Vec::new();
    run_classifier(Cursor::new(input.to_string()), &mut output).expect("classificacao falhou");
    String::from_utf8(output).expect("saida nao e UTF-8")
}

/// 既知フレーズは対応する説明を1行で出力
#[test]
fn test_driver_known_phrases() {
    for technique in Technique::ALL {
        let output = classify_line(&format!("{}\n", technique.phrase()));
        assert_eq!(output, format!("{}\n", technique.description()));
    }
}

/// 前後の空白・改行は除去される
#[test]
fn test_driver_trims_line() {
    let output = classify_line("\t Prompt claro e especifico para tarefa de programacao  \r\n");
    assert_eq!(output, "Define o objetivo e as restricoes da tarefa de forma precisa\n");
}

/// 未知の入力は既定の説明
#[test]
fn test_driver_unknown() {
    assert_eq!(classify_line("something else entirely\n"), "Tecnica desconhecida\n");
    assert_eq!(classify_line(""), "Tecnica desconhecida\n");
}

/// 常に5種類のいずれかを返す
#[test]
fn test_describe_is_total() {
    let inputs = [
        "",
        " ",
        "few-shot prompting com poucos exemplos no proprio prompt",
        "Persona de sistema definindo papel e tom da IA.",
        "日本語の入力",
        "Cadeia de pensamento pedindo raciocinio detalhado",
    ];
    for input in inputs {
        let first = describe_technique(input);
        assert!(OUTPUTS.contains(&first), "saida inesperada para {:?}", input);
        assert_eq!(first, describe_technique(input));
    }
}

/// 数値判定の代表例
#[test]
fn test_number_examples() {
    assert!(is_valid_number(&json!("42")));
    assert!(!is_valid_number(&json!("forty-two")));
    assert!(!is_valid_number_opt(None));
    assert!(!is_valid_number(&json!(null)));
    assert!(is_valid_number(&json!("inf")));
    assert!(!is_valid_number(&json!("   ")));
    assert!(!is_valid_number(&json!({"valor": 1})));
}

/// checkコマンドの出力
#[test]
fn test_check_command_output() {
    let values: Vec<String> = ["3.14", "-2", "1e10", "abc", ""]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut output = Vec::new();

    let results = run_check(&values, false, &mut output).unwrap();
    assert_eq!(results, vec![true, true, true, false, false]);

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("3.14: true\n"));
    assert!(text.ends_with(": false\n"));
}

/// 負数・符号付きの値もcheckの引数として受け付ける
#[test]
fn test_check_accepts_signed_values() {
    let cli = Cli::try_parse_from(["tecnica", "check", "-2", "-inf", "3", "-1e5"])
        .expect("argumentos rejeitados");
    let Some(Commands::Check { values, json }) = cli.command else {
        panic!("subcomando check esperado");
    };
    assert!(!json);
    assert_eq!(values, vec!["-2", "-inf", "3", "-1e5"]);

    let results = run_check(&values, json, std::io::sink()).unwrap();
    assert_eq!(results, vec![true, true, true, true]);
}

/// --json は値より前に指定
#[test]
fn test_check_json_flag_before_values() {
    let cli = Cli::try_parse_from(["tecnica", "check", "--json", "null", "-2"])
        .expect("argumentos rejeitados");
    let Some(Commands::Check { values, json }) = cli.command else {
        panic!("subcomando check esperado");
    };
    assert!(json);

    let results = run_check(&values, json, std::io::sink()).unwrap();
    assert_eq!(results, vec![false, true]);
}
