//! Insight engine: turns indoor, outdoor and power readings into advice.
//!
//! Rules are checked in a fixed order and every rule that matches adds one
//! insight. When none match, a single "System Optimal" insight is returned,
//! so the result is never empty. Rules that need outdoor readings are skipped
//! when those are unavailable.

use ecosmart_domain::insight::{IndoorState, InsightPriority, OutdoorConditions, SmartInsight};

/// Outdoor temperature below which an open window wastes heating, in °C.
pub const HEAT_LOSS_OUTDOOR_TEMP: f64 = 15.0;
/// Indoor CO₂ above which the air needs refreshing, in ppm.
pub const HIGH_CO2_PPM: f64 = 1000.0;
/// Outdoor AQI above which opening a window lets smog in.
pub const SMOG_AQI: f64 = 35.0;
/// Indoor humidity below which the air is too dry, in %.
pub const DRY_AIR_HUMIDITY: f64 = 30.0;
/// Indoor humidity above which mold can grow when warm, in %.
pub const MOLD_HUMIDITY: f64 = 60.0;
/// Indoor temperature above which humid air favors mold, in °C.
pub const MOLD_TEMP: f64 = 25.0;
/// Whole-house load above which standby consumption is suspected, in kW.
pub const VAMPIRE_POWER_KW: f64 = 1.5;

const HEAT_LOSS_SAVINGS_KZT: f64 = 45.0;
const VAMPIRE_POWER_SAVINGS_KZT: f64 = 2000.0;

/// Evaluate every rule against the current readings.
#[must_use]
pub fn evaluate(
    indoor: &IndoorState,
    outdoor: Option<&OutdoorConditions>,
    power_kw: f64,
) -> Vec<SmartInsight> {
    let mut insights = Vec::new();

    if let Some(outdoor) = outdoor {
        if indoor.window_open && indoor.heating_on && outdoor.temp < HEAT_LOSS_OUTDOOR_TEMP {
            insights.push(
                SmartInsight::new(
                    "critical-money-burner",
                    InsightPriority::Critical,
                    "Heat Loss Detected",
                    "Window is open while heating is active! You are venting expensive heat.",
                    "Close window immediately.",
                )
                .with_savings(HEAT_LOSS_SAVINGS_KZT),
            );
        }

        if indoor.co2 > HIGH_CO2_PPM && outdoor.aqi > SMOG_AQI {
            insights.push(SmartInsight::new(
                "critical-smog-trap",
                InsightPriority::Critical,
                "Smog Warning",
                "Indoor CO₂ is high, but outdoor air quality is poor.",
                "Keep windows closed. Use Air Purifier & HVAC recirculation.",
            ));
        }
    }

    if indoor.humidity < DRY_AIR_HUMIDITY {
        insights.push(SmartInsight::new(
            "warning-dry-air",
            InsightPriority::Warning,
            "Air is Too Dry",
            format!(
                "Indoor humidity is {}% (<30%). Risk of respiratory irritation.",
                indoor.humidity
            ),
            "Turn on Humidifier.",
        ));
    }

    if indoor.humidity > MOLD_HUMIDITY && indoor.temp > MOLD_TEMP {
        insights.push(SmartInsight::new(
            "warning-mold-risk",
            InsightPriority::Warning,
            "High Humidity & Heat",
            "Conditions are favorable for mold growth.",
            "Ventilate room or use AC to dehumidify.",
        ));
    }

    if power_kw > VAMPIRE_POWER_KW {
        insights.push(
            SmartInsight::new(
                "info-vampire-power",
                InsightPriority::Info,
                "High Baseline Power",
                format!("Current load is {power_kw:.2} kW. Possible standby devices active."),
                "Check TVs/PCs in standby.",
            )
            .with_savings(VAMPIRE_POWER_SAVINGS_KZT),
        );
    }

    if insights.is_empty() {
        insights.push(SmartInsight::new(
            "info-optimal",
            InsightPriority::Info,
            "System Optimal",
            "Your home is running efficiently. No immediate actions required.",
            "View Historical Data",
        ));
    }

    insights
}
