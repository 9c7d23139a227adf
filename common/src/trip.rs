//! 移動行程のCO₂排出量計算
//!
//! 区間（Leg）ごとに 距離 × 排出係数 でCO₂を算出し、
//! 合計からカーボンクレジット数と費用レンジ（BRL）を求める。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 移動手段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Bicicleta,
    Carro,
    Onibus,
    Caminhao,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Bicicleta,
        TransportMode::Carro,
        TransportMode::Onibus,
        TransportMode::Caminhao,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Bicicleta => "bicicleta",
            TransportMode::Carro => "carro",
            TransportMode::Onibus => "onibus",
            TransportMode::Caminhao => "caminhao",
        }
    }

    /// 表示用（先頭大文字）
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Bicicleta => "Bicicleta",
            TransportMode::Carro => "Carro",
            TransportMode::Onibus => "Onibus",
            TransportMode::Caminhao => "Caminhao",
        }
    }
}

impl std::str::FromStr for TransportMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bicicleta" | "bike" => Ok(TransportMode::Bicicleta),
            "carro" | "car" => Ok(TransportMode::Carro),
            "onibus" | "ônibus" | "bus" => Ok(TransportMode::Onibus),
            "caminhao" | "caminhão" | "truck" => Ok(TransportMode::Caminhao),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 排出係数（kg CO₂ / km）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactors {
    pub bicicleta: f64,
    pub carro: f64,
    pub onibus: f64,
    pub caminhao: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            bicicleta: 0.01,
            carro: 0.192,
            onibus: 0.089,
            caminhao: 0.62,
        }
    }
}

impl EmissionFactors {
    pub fn factor(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Bicicleta => self.bicicleta,
            TransportMode::Carro => self.carro,
            TransportMode::Onibus => self.onibus,
            TransportMode::Caminhao => self.caminhao,
        }
    }
}

/// カーボンクレジットの換算設定
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonCredit {
    /// 1クレジットあたりのCO₂量（kg）
    pub kg_per_credit: f64,
    pub price_min_brl: f64,
    pub price_max_brl: f64,
}

impl Default for CarbonCredit {
    fn default() -> Self {
        Self {
            kg_per_credit: 100.0,
            price_min_brl: 50.0,
            price_max_brl: 150.0,
        }
    }
}

/// 区間CO₂排出量
pub fn co2_for_leg(km: f64, mode: TransportMode, factors: &EmissionFactors) -> f64 {
    km * factors.factor(mode)
}

/// 行程の1区間
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub id: u32,
    pub origin: String,
    pub destination: String,
    pub km: f64,
    pub mode: TransportMode,
    pub co2_kg: f64,
}

impl Leg {
    pub fn origin_label(&self) -> &str {
        if self.origin.is_empty() {
            "Origem não informada"
        } else {
            &self.origin
        }
    }

    pub fn destination_label(&self) -> &str {
        if self.destination.is_empty() {
            "Destino não informado"
        } else {
            &self.destination
        }
    }
}

/// JSONファイルからの区間入力
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegInput {
    pub origin: String,
    pub destination: String,
    pub km: f64,
    pub mode: Option<TransportMode>,
}

impl LegInput {
    /// `MODE:KM[:ORIGIN:DESTINATION]` 形式をパース
    pub fn parse_spec(spec: &str) -> Result<Self> {
        let mut parts = spec.splitn(4, ':');
        let mode = parts.next().unwrap_or_default().parse::<TransportMode>()?;
        let km_text = parts.next().unwrap_or_default();
        let km = crate::number::parse_number_str(km_text)
            .map_err(|e| Error::Config(format!("{}: {}", spec, e)))?;

        Ok(Self {
            origin: parts.next().unwrap_or_default().to_string(),
            destination: parts.next().unwrap_or_default().to_string(),
            km,
            mode: Some(mode),
        })
    }

    /// JSON配列文字列から読み込み
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSONファイルから読み込み
    pub fn list_from_file(path: &std::path::Path) -> Result<Vec<Self>> {
        let content = std::fs::read_to_string(path)?;
        Self::list_from_json(&content)
    }
}

/// 定義済みルート
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetRoute {
    pub key: &'static str,
    pub origin: &'static str,
    pub destination: &'static str,
    pub km: f64,
}

pub const PRESET_ROUTES: [PresetRoute; 4] = [
    PresetRoute { key: "sp-rj", origin: "São Paulo", destination: "Rio de Janeiro", km: 430.0 },
    PresetRoute { key: "sp-campinas", origin: "São Paulo", destination: "Campinas", km: 95.0 },
    PresetRoute { key: "rj-bh", origin: "Rio de Janeiro", destination: "Belo Horizonte", km: 440.0 },
    PresetRoute { key: "bsb-goiania", origin: "Brasília", destination: "Goiânia", km: 210.0 },
];

impl PresetRoute {
    pub fn find(key: &str) -> Result<&'static PresetRoute> {
        PRESET_ROUTES
            .iter()
            .find(|r| r.key.eq_ignore_ascii_case(key.trim()))
            .ok_or_else(|| Error::UnknownPreset(key.to_string()))
    }
}

/// 合計値
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub total_co2: f64,
    pub credits: u64,
    pub cost_min: f64,
    pub cost_max: f64,
}

/// 行程（区間の集合）
#[derive(Debug, Clone)]
pub struct Trip {
    legs: Vec<Leg>,
    next_id: u32,
    factors: EmissionFactors,
}

impl Default for Trip {
    fn default() -> Self {
        Self::new(EmissionFactors::default())
    }
}

impl Trip {
    pub fn new(factors: EmissionFactors) -> Self {
        Self {
            legs: Vec::new(),
            next_id: 1,
            factors,
        }
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// 区間を追加
    ///
    /// 移動手段未選択は [`Error::MissingMode`]、
    /// 距離が正の有限値でなければ（NaN・無限大含む）[`Error::InvalidDistance`]。
    pub fn add_leg(
        &mut self,
        origin: &str,
        destination: &str,
        km: f64,
        mode: Option<TransportMode>,
    ) -> Result<&Leg> {
        let mode = mode.ok_or(Error::MissingMode)?;
        if !km.is_finite() || km <= 0.0 {
            return Err(Error::InvalidDistance(km));
        }

        let leg = Leg {
            id: self.next_id,
            origin: origin.trim().to_string(),
            destination: destination.trim().to_string(),
            km,
            mode,
            co2_kg: co2_for_leg(km, mode, &self.factors),
        };
        self.next_id += 1;
        self.legs.push(leg);

        Ok(&self.legs[self.legs.len() - 1])
    }

    pub fn add_input(&mut self, input: &LegInput) -> Result<&Leg> {
        self.add_leg(&input.origin, &input.destination, input.km, input.mode)
    }

    pub fn add_preset(&mut self, route: &PresetRoute, mode: Option<TransportMode>) -> Result<&Leg> {
        self.add_leg(route.origin, route.destination, route.km, mode)
    }

    /// 区間を削除（存在しないIDは何もしない）
    pub fn remove_leg(&mut self, id: u32) -> Option<Leg> {
        let idx = self.legs.iter().position(|l| l.id == id)?;
        Some(self.legs.remove(idx))
    }

    /// 全区間を削除し、削除件数を返す
    pub fn clear(&mut self) -> Result<usize> {
        if self.legs.is_empty() {
            return Err(Error::NoLegs);
        }
        let count = self.legs.len();
        self.legs.clear();
        Ok(count)
    }

    pub fn totals(&self, credit: &CarbonCredit) -> Totals {
        let total_co2: f64 = self.legs.iter().map(|l| l.co2_kg).sum();
        let credits = if credit.kg_per_credit > 0.0 {
            (total_co2 / credit.kg_per_credit).ceil() as u64
        } else {
            0
        };

        Totals {
            total_co2,
            credits,
            cost_min: credits as f64 * credit.price_min_brl,
            cost_max: credits as f64 * credit.price_max_brl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_co2_for_leg() {
        let factors = EmissionFactors::default();
        assert!((co2_for_leg(100.0, TransportMode::Carro, &factors) - 19.2).abs() < 1e-9);
        assert!((co2_for_leg(10.0, TransportMode::Caminhao, &factors) - 6.2).abs() < 1e-9);
    }

    #[test]
    fn test_add_leg_assigns_ids() {
        let mut trip = Trip::default();
        let first = trip.add_leg(" São Paulo ", "Santos", 80.0, Some(TransportMode::Onibus)).unwrap().id;
        let second = trip.add_leg("", "", 5.0, Some(TransportMode::Bicicleta)).unwrap().id;

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(trip.legs()[0].origin, "São Paulo");
        assert_eq!(trip.legs()[1].origin_label(), "Origem não informada");
        assert_eq!(trip.legs()[1].destination_label(), "Destino não informado");
    }

    #[test]
    fn test_add_leg_validation() {
        let mut trip = Trip::default();
        assert!(matches!(trip.add_leg("a", "b", 10.0, None), Err(Error::MissingMode)));
        assert!(matches!(
            trip.add_leg("a", "b", 0.0, Some(TransportMode::Carro)),
            Err(Error::InvalidDistance(_))
        ));
        assert!(matches!(
            trip.add_leg("a", "b", f64::NAN, Some(TransportMode::Carro)),
            Err(Error::InvalidDistance(_))
        ));
        assert!(matches!(
            trip.add_leg("a", "b", f64::INFINITY, Some(TransportMode::Carro)),
            Err(Error::InvalidDistance(_))
        ));
        assert!(trip.is_empty());
    }

    #[test]
    fn test_remove_leg_keeps_ids() {
        let mut trip = Trip::default();
        trip.add_leg("", "", 1.0, Some(TransportMode::Carro)).unwrap();
        trip.add_leg("", "", 2.0, Some(TransportMode::Carro)).unwrap();

        assert_eq!(trip.remove_leg(1).map(|l| l.km), Some(1.0));
        assert!(trip.remove_leg(99).is_none());
        assert_eq!(trip.legs().len(), 1);

        // 削除後もIDは再利用しない
        let id = trip.add_leg("", "", 3.0, Some(TransportMode::Carro)).unwrap().id;
        assert_eq!(id, 3);
    }

    #[test]
    fn test_clear() {
        let mut trip = Trip::default();
        assert!(matches!(trip.clear(), Err(Error::NoLegs)));
        trip.add_leg("", "", 1.0, Some(TransportMode::Carro)).unwrap();
        assert_eq!(trip.clear().unwrap(), 1);
        assert!(trip.is_empty());
    }

    #[test]
    fn test_totals() {
        let mut trip = Trip::default();
        trip.add_leg("", "", 430.0, Some(TransportMode::Carro)).unwrap(); // 82.56kg
        trip.add_leg("", "", 100.0, Some(TransportMode::Onibus)).unwrap(); // 8.9kg

        let totals = trip.totals(&CarbonCredit::default());
        assert!((totals.total_co2 - 91.46).abs() < 1e-9);
        assert_eq!(totals.credits, 1);
        assert_eq!(totals.cost_min, 50.0);
        assert_eq!(totals.cost_max, 150.0);
    }

    #[test]
    fn test_totals_empty() {
        let totals = Trip::default().totals(&CarbonCredit::default());
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Carro".parse::<TransportMode>().unwrap(), TransportMode::Carro);
        assert_eq!("ônibus".parse::<TransportMode>().unwrap(), TransportMode::Onibus);
        assert!(matches!("aviao".parse::<TransportMode>(), Err(Error::UnknownMode(_))));
    }

    #[test]
    fn test_parse_spec() {
        let input = LegInput::parse_spec("carro:12.5:Casa:Trabalho").unwrap();
        assert_eq!(input.mode, Some(TransportMode::Carro));
        assert_eq!(input.km, 12.5);
        assert_eq!(input.origin, "Casa");
        assert_eq!(input.destination, "Trabalho");

        let short = LegInput::parse_spec("bicicleta:3").unwrap();
        assert!(short.origin.is_empty());

        assert!(LegInput::parse_spec("carro:muito").is_err());
        assert!(LegInput::parse_spec("foguete:10").is_err());
    }

    #[test]
    fn test_list_from_json() {
        let json = r#"[{"origin": "A", "destination": "B", "km": 10, "mode": "caminhao"}, {"km": 2}]"#;
        let inputs = LegInput::list_from_json(json).unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].mode, Some(TransportMode::Caminhao));
        assert_eq!(inputs[1].mode, None);
    }

    #[test]
    fn test_preset_routes() {
        let route = PresetRoute::find("SP-RJ").unwrap();
        assert_eq!(route.destination, "Rio de Janeiro");
        assert!(matches!(PresetRoute::find("lua"), Err(Error::UnknownPreset(_))));

        let mut trip = Trip::default();
        let leg = trip.add_preset(route, Some(TransportMode::Onibus)).unwrap();
        assert_eq!(leg.km, 430.0);
    }

    #[test]
    fn test_custom_factors() {
        let factors = EmissionFactors { carro: 0.5, ..Default::default() };
        let mut trip = Trip::new(factors);
        let leg = trip.add_leg("", "", 10.0, Some(TransportMode::Carro)).unwrap();
        assert_eq!(leg.co2_kg, 5.0);
    }
}
