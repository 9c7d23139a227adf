use crate::error::{Result, TecnicaError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tecnica_common::{CarbonCredit, EmissionFactors};

/// 設定ファイルパスを上書きする環境変数
pub const CONFIG_ENV: &str = "TECNICA_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 排出係数（kg CO₂ / km）
    pub emission_factors: EmissionFactors,
    /// カーボンクレジット換算
    pub carbon_credit: CarbonCredit,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（存在しなければデフォルト）
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "config loaded");
            Ok(config)
        } else {
            tracing::debug!(path = %config_path.display(), "config not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        // 環境変数を優先
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let home = dirs::home_dir()
            .ok_or_else(|| TecnicaError::Config("diretorio home nao encontrado".into()))?;
        Ok(home.join(".config").join("tecnica").join("config.json"))
    }

    pub fn set_kg_per_credit(&mut self, kg: f64) -> Result<()> {
        if kg.is_nan() || kg <= 0.0 {
            return Err(TecnicaError::Config(format!(
                "kg por credito deve ser maior que zero: {}",
                kg
            )));
        }
        self.carbon_credit.kg_per_credit = kg;
        Ok(())
    }

    pub fn set_price_range(&mut self, min: f64, max: f64) -> Result<()> {
        if min.is_nan() || max.is_nan() || min < 0.0 || min > max {
            return Err(TecnicaError::Config(format!(
                "faixa de preco invalida: {} - {}",
                min, max
            )));
        }
        self.carbon_credit.price_min_brl = min;
        self.carbon_credit.price_max_brl = max;
        Ok(())
    }

    /// CLI指定の変更を反映し、変更があったかを返す
    ///
    /// `price_range` は `[MIN, MAX]` の2要素。
    pub fn apply_updates(
        &mut self,
        kg_per_credit: Option<f64>,
        price_range: Option<&[f64]>,
    ) -> Result<bool> {
        let mut changed = false;

        if let Some(kg) = kg_per_credit {
            self.set_kg_per_credit(kg)?;
            changed = true;
        }

        if let Some(range) = price_range {
            let [min, max] = range else {
                return Err(TecnicaError::Config(format!(
                    "faixa de preco requer MIN e MAX: {:?}",
                    range
                )));
            };
            self.set_price_range(*min, *max)?;
            changed = true;
        }

        Ok(changed)
    }
}
