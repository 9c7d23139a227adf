//! Tecnica Common Library
//!
//! CLIから利用される入出力なしのロジック:
//! - 数値判定
//! - プロンプト技法フレーズの分類
//! - 移動行程のCO₂計算

pub mod error;
pub mod format;
pub mod number;
pub mod technique;
pub mod trip;

pub use error::{Error, Result};
pub use format::format_number_br;
pub use number::{
    is_valid_number, is_valid_number_opt, is_valid_number_str, parse_number, parse_number_str,
    NumberError,
};
pub use technique::{describe_technique, Technique, UNKNOWN_TECHNIQUE};
pub use trip::{
    co2_for_leg, CarbonCredit, EmissionFactors, Leg, LegInput, PresetRoute, Totals,
    TransportMode, Trip, PRESET_ROUTES,
};
