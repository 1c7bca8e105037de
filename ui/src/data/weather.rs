//! Current conditions, a seven-day forecast and weather-driven advice.

use super::{text, LocalizedText, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rain,
    HeavyRain,
}

impl Condition {
    pub fn label_key(self) -> &'static str {
        match self {
            Condition::Sunny => "common-sunny",
            Condition::PartlyCloudy => "common-partly-cloudy",
            Condition::Cloudy => "common-cloudy",
            Condition::Rain => "common-rain",
            Condition::HeavyRain => "common-heavy-rain",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Condition::Sunny => "☀",
            Condition::PartlyCloudy => "⛅",
            Condition::Cloudy => "☁",
            Condition::Rain => "🌦",
            Condition::HeavyRain => "🌧",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Condition::Sunny => "condition--sunny",
            Condition::PartlyCloudy => "condition--partly-cloudy",
            Condition::Cloudy => "condition--cloudy",
            Condition::Rain => "condition--rain",
            Condition::HeavyRain => "condition--heavy-rain",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub location: LocalizedText,
    pub temperature: i32,
    pub condition: Condition,
    /// Percent.
    pub humidity: u8,
    /// km/h.
    pub wind_speed: u16,
    /// km.
    pub visibility: u16,
    pub uv_index: u8,
    pub sunrise: &'static str,
    pub sunset: &'static str,
}

pub static CURRENT: CurrentWeather = CurrentWeather {
    location: text("New Delhi, India", "नई दिल्ली, भारत"),
    temperature: 28,
    condition: Condition::Sunny,
    humidity: 65,
    wind_speed: 12,
    visibility: 10,
    uv_index: 6,
    sunrise: "06:15",
    sunset: "18:45",
};

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub day: LocalizedText,
    pub high: i32,
    pub low: i32,
    pub condition: Condition,
    /// Chance of rain in percent.
    pub rain_chance: u8,
}

const fn day(
    day: LocalizedText,
    high: i32,
    low: i32,
    condition: Condition,
    rain_chance: u8,
) -> ForecastDay {
    ForecastDay {
        day,
        high,
        low,
        condition,
        rain_chance,
    }
}

pub static FORECAST: [ForecastDay; 7] = [
    day(text("Today", "आज"), 32, 22, Condition::Sunny, 0),
    day(text("Tomorrow", "कल"), 30, 20, Condition::PartlyCloudy, 10),
    day(text("Day after", "परसों"), 28, 18, Condition::Rain, 80),
    day(text("Thursday", "गुरुवार"), 26, 17, Condition::HeavyRain, 90),
    day(text("Friday", "शुक्रवार"), 29, 19, Condition::Cloudy, 20),
    day(text("Saturday", "शनिवार"), 31, 21, Condition::Sunny, 0),
    day(text("Sunday", "रविवार"), 33, 23, Condition::Sunny, 0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Urgent,
    High,
    Medium,
}

impl Priority {
    pub fn label(self) -> LocalizedText {
        match self {
            Priority::Urgent => text("Urgent", "तत्काल"),
            Priority::High => text("High", "उच्च"),
            Priority::Medium => text("Medium", "मध्यम"),
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Priority::Urgent => "priority--urgent",
            Priority::High => "priority--high",
            Priority::Medium => "priority--medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FarmingAdvice {
    pub title: LocalizedText,
    pub body: LocalizedText,
    pub priority: Priority,
}

pub static FARMING_ADVICE: [FarmingAdvice; 3] = [
    FarmingAdvice {
        title: text("Irrigation", "सिंचाई की सलाह"),
        body: text(
            "Rain is likely in the next 2 days, so postpone irrigation.",
            "अगले 2 दिनों में बारिश की संभावना है, इसलिए सिंचाई को स्थगित करें।",
        ),
        priority: Priority::High,
    },
    FarmingAdvice {
        title: text("Pesticide spraying", "कीटनाशक छिड़काव"),
        body: text(
            "Today is a good day to spray pesticide. The weather is dry and wind is light.",
            "आज कीटनाशक छिड़काव के लिए अच्छा दिन है। मौसम साफ और हवा कम है।",
        ),
        priority: Priority::Medium,
    },
    FarmingAdvice {
        title: text("Harvesting", "फसल कटाई"),
        body: text(
            "Heavy rain is expected on Thursday. Finish harvesting crops that are ready.",
            "गुरुवार को भारी बारिश की संभावना है। पकी हुई फसल की कटाई जल्दी करें।",
        ),
        priority: Priority::Urgent,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherAlert {
    pub title: LocalizedText,
    pub body: LocalizedText,
    pub tone: Tone,
}

pub static ALERTS: [WeatherAlert; 2] = [
    WeatherAlert {
        title: text("Strong wind warning", "तेज हवा की चेतावनी"),
        body: text(
            "Winds of 25-30 km/h are possible tomorrow afternoon.",
            "कल दोपहर 25-30 किमी/घंटा की रफ्तार से हवा चल सकती है।",
        ),
        tone: Tone::Yellow,
    },
    WeatherAlert {
        title: text("Heavy rain warning", "भारी बारिश की चेतावनी"),
        body: text(
            "Heavy rain is likely on Thursday and Friday.",
            "गुरुवार और शुक्रवार को भारी बारिश की संभावना है।",
        ),
        tone: Tone::Blue,
    },
];

/// Advice ordered most pressing first.
pub fn advice_by_priority(advice: &[FarmingAdvice]) -> Vec<&FarmingAdvice> {
    let mut sorted: Vec<_> = advice.iter().collect();
    sorted.sort_by_key(|item| item.priority);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_covers_a_week_with_sane_ranges() {
        assert_eq!(FORECAST.len(), 7);
        for entry in &FORECAST {
            assert!(entry.low < entry.high, "{}", entry.day.en);
            assert!(entry.rain_chance <= 100);
        }
        assert_eq!(FORECAST[3].condition, Condition::HeavyRain);
    }

    #[test]
    fn urgent_advice_sorts_first() {
        let sorted = advice_by_priority(&FARMING_ADVICE);
        assert_eq!(sorted[0].priority, Priority::Urgent);
        assert_eq!(sorted[2].priority, Priority::Medium);
    }
}
