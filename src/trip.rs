//! 移動行程の組み立て
//!
//! CLI引数・JSONファイル・定義済みルート・対話入力から [`Trip`] を構築する。

use crate::config::Config;
use crate::error::{Result, TecnicaError};
use dialoguer::{Input, Select};
use std::path::Path;
use tecnica_common::{parse_number_str, LegInput, PresetRoute, TransportMode, Trip};

/// 非対話の入力元から行程を構築
///
/// 追加順: JSONファイル → `--leg` → `--preset`
pub fn build_trip(
    config: &Config,
    file: Option<&Path>,
    leg_specs: &[String],
    presets: &[String],
    mode: Option<TransportMode>,
) -> Result<Trip> {
    let mut trip = Trip::new(config.emission_factors);

    if let Some(path) = file {
        if !path.exists() {
            return Err(TecnicaError::FileNotFound(path.display().to_string()));
        }
        for input in LegInput::list_from_file(path)? {
            let leg = trip.add_input(&input)?;
            tracing::debug!(id = leg.id, km = leg.km, mode = %leg.mode, "leg added from file");
        }
    }

    for spec in leg_specs {
        let input = LegInput::parse_spec(spec)?;
        let leg = trip.add_input(&input)?;
        tracing::debug!(id = leg.id, km = leg.km, mode = %leg.mode, "leg added");
    }

    for key in presets {
        let route = PresetRoute::find(key)?;
        let leg = trip.add_preset(route, mode)?;
        tracing::debug!(id = leg.id, preset = route.key, "preset leg added");
    }

    Ok(trip)
}

/// 対話アクション
#[derive(Debug, Clone, PartialEq)]
pub enum TripAction {
    /// 区間を追加
    Add,
    /// 区間を削除
    Remove(u32),
    /// 全区間を削除
    Clear,
    /// 入力終了
    Done,
    /// 不明な入力
    Unknown(String),
}

/// 対話アクションの入力をパース
///
/// `a`/空: 追加、`r N`: 削除、`c`: 全削除、`q`: 終了
pub fn parse_action(input: &str) -> TripAction {
    let trimmed = input.trim();
    let mut parts = trimmed.split_whitespace();

    match parts.next() {
        None | Some("a") | Some("A") => TripAction::Add,
        Some("c") | Some("C") => TripAction::Clear,
        Some("q") | Some("Q") => TripAction::Done,
        Some("r") | Some("R") => match parts.next().and_then(|id| id.parse().ok()) {
            Some(id) => TripAction::Remove(id),
            None => TripAction::Unknown(trimmed.to_string()),
        },
        Some(_) => TripAction::Unknown(trimmed.to_string()),
    }
}

/// 対話式で区間を追加・削除
pub fn run_interactive(trip: &mut Trip) -> Result<()> {
    println!("---");
    println!("Ações: [Enter/a] adicionar  [r N] remover  [c] limpar  [q] concluir");
    println!("---\n");

    loop {
        let input: String = Input::new()
            .with_prompt("Ação")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| TecnicaError::Prompt(e.to_string()))?;

        match parse_action(&input) {
            TripAction::Add => {
                if let Err(e) = prompt_leg(trip) {
                    match e {
                        TecnicaError::Common(e) => println!("  ✘ {}\n", e),
                        other => return Err(other),
                    }
                }
            }
            TripAction::Remove(id) => match trip.remove_leg(id) {
                Some(leg) => println!("  → Trecho {} removido\n", leg.id),
                None => println!("  → Trecho {} não encontrado\n", id),
            },
            TripAction::Clear => match trip.clear() {
                Ok(count) => println!("  → {} trechos removidos\n", count),
                Err(e) => println!("  ✘ {}\n", e),
            },
            TripAction::Done => break,
            TripAction::Unknown(text) => println!("  ? Ação desconhecida: {}\n", text),
        }
    }

    Ok(())
}

/// 1区間分を入力
fn prompt_leg(trip: &mut Trip) -> Result<()> {
    let labels: Vec<&str> = TransportMode::ALL.iter().map(|m| m.label()).collect();
    let selected = Select::new()
        .with_prompt("Modo de locomoção")
        .items(&labels)
        .default(1)
        .interact_opt()
        .map_err(|e| TecnicaError::Prompt(e.to_string()))?;
    // 未選択なら残りの項目は聞かない
    let mode = selected_mode(selected)?;

    let origin: String = prompt_text("Origem")?;
    let destination: String = prompt_text("Destino")?;
    let km_text: String = prompt_text("Distância (km)")?;
    // 数値として解釈できなければ 0 として扱い、距離エラーにする
    let km = parse_number_str(&km_text).unwrap_or(0.0);

    let leg = trip.add_leg(&origin, &destination, km, Some(mode))?;
    println!("  ✔ Trecho {} adicionado ({:.2} kg CO₂)\n", leg.id, leg.co2_kg);
    Ok(())
}

/// 選択肢のインデックスを移動手段に変換
fn selected_mode(selected: Option<usize>) -> Result<TransportMode> {
    selected
        .and_then(|i| TransportMode::ALL.get(i).copied())
        .ok_or_else(|| tecnica_common::Error::MissingMode.into())
}

fn prompt_text(prompt: &str) -> Result<String> {
    Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| TecnicaError::Prompt(e.to_string()))
}
