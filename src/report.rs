//! 行程レポートの出力

use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use tecnica_common::{format_number_br, CarbonCredit, Leg, Totals, TransportMode, Trip};

/// JSON出力用
#[derive(Debug, Serialize)]
pub struct TripReport<'a> {
    pub legs: &'a [Leg],
    pub totals: Totals,
    pub carbon_credit: &'a CarbonCredit,
}

impl<'a> TripReport<'a> {
    pub fn new(trip: &'a Trip, credit: &'a CarbonCredit) -> Self {
        Self {
            legs: trip.legs(),
            totals: trip.totals(credit),
            carbon_credit: credit,
        }
    }
}

/// 1区間の表示行
pub fn format_leg(leg: &Leg) -> String {
    format!(
        "#{} {} — {} → {} · {} km · {} kg CO₂",
        leg.id,
        leg.mode.as_str().to_uppercase(),
        leg.origin_label(),
        leg.destination_label(),
        format_number_br(leg.km, 1),
        format_number_br(leg.co2_kg, 2),
    )
}

/// テキストレポートを書き出す
pub fn write_report<W: Write>(mut writer: W, trip: &Trip, credit: &CarbonCredit) -> Result<()> {
    writeln!(writer, "Trechos:")?;
    if trip.is_empty() {
        writeln!(writer, "  (nenhum)")?;
    }
    for leg in trip.legs() {
        writeln!(writer, "  {}", format_leg(leg))?;
    }

    writeln!(writer, "\nFatores de emissão:")?;
    for mode in TransportMode::ALL {
        writeln!(
            writer,
            "  {}: {} kg CO₂ / km",
            mode.label(),
            format_number_br(trip.factors().factor(mode), 3)
        )?;
    }

    let totals = trip.totals(credit);
    writeln!(writer, "\nTotal de CO₂: {} kg", format_number_br(totals.total_co2, 2))?;
    writeln!(
        writer,
        "Créditos necessários: {} (1 crédito = {} kg)",
        totals.credits,
        format_number_br(credit.kg_per_credit, 0)
    )?;
    writeln!(
        writer,
        "Custo estimado: R$ {} — R$ {}",
        format_number_br(totals.cost_min, 2),
        format_number_br(totals.cost_max, 2)
    )?;

    Ok(())
}

/// JSONレポートを書き出す
pub fn write_json_report<W: Write>(mut writer: W, trip: &Trip, credit: &CarbonCredit) -> Result<()> {
    let report = TripReport::new(trip, credit);
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writeln!(writer)?;
    Ok(())
}
