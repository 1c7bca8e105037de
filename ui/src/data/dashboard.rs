//! Summary cards on the dashboard: today's weather, three price highlights and
//! the day's farming tips.

use super::weather::{Condition, CURRENT};
use super::{text, LocalizedText, Tone};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TodaySummary {
    pub temperature: i32,
    pub condition: Condition,
    pub humidity: u8,
    pub wind_speed: u16,
    pub uv_index: u8,
}

/// Drawn from the current conditions on the weather page.
pub fn today() -> TodaySummary {
    TodaySummary {
        temperature: CURRENT.temperature,
        condition: CURRENT.condition,
        humidity: CURRENT.humidity,
        wind_speed: CURRENT.wind_speed,
        uv_index: CURRENT.uv_index,
    }
}

/// A headline price quoted with its weekly movement.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHighlight {
    pub crop: LocalizedText,
    /// Rupees per quintal.
    pub price: u32,
    pub change_percent: f64,
}

impl PriceHighlight {
    pub fn is_rise(&self) -> bool {
        self.change_percent >= 0.0
    }
}

pub static MARKET_HIGHLIGHTS: [PriceHighlight; 3] = [
    PriceHighlight {
        crop: text("Wheat", "गेहूं"),
        price: 2150,
        change_percent: 2.5,
    },
    PriceHighlight {
        crop: text("Rice", "धान"),
        price: 1850,
        change_percent: 1.2,
    },
    PriceHighlight {
        crop: text("Maize", "मक्का"),
        price: 1680,
        change_percent: -0.8,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct DailyTip {
    pub title: LocalizedText,
    pub body: LocalizedText,
    pub tone: Tone,
}

pub static DAILY_TIPS: [DailyTip; 3] = [
    DailyTip {
        title: text("Irrigation", "सिंचाई की सलाह"),
        body: text(
            "Humidity is moderate today. Water your crops in the evening.",
            "आज मौसम में नमी है, शाम को सिंचाई करें।",
        ),
        tone: Tone::Green,
    },
    DailyTip {
        title: text("Pest protection", "कीट सुरक्षा"),
        body: text(
            "Watch out for aphids in the wheat crop.",
            "गेहूं की फसल में माहू कीट का ध्यान रखें।",
        ),
        tone: Tone::Yellow,
    },
    DailyTip {
        title: text("Selling advice", "बिक्री सलाह"),
        body: text(
            "Prices of pulses are expected to rise.",
            "दलहन की कीमतें बढ़ने की संभावना है।",
        ),
        tone: Tone::Blue,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_maize_is_falling() {
        let falling: Vec<_> = MARKET_HIGHLIGHTS
            .iter()
            .filter(|item| !item.is_rise())
            .map(|item| item.crop.en)
            .collect();
        assert_eq!(falling, ["Maize"]);
    }

    #[test]
    fn today_mirrors_current_conditions() {
        let summary = today();
        assert_eq!(summary.temperature, 28);
        assert_eq!(summary.humidity, 65);
        assert_eq!(summary.condition, Condition::Sunny);
    }
}
