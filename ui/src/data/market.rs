//! Crop prices from a handful of mandis.

use std::collections::HashSet;

use super::{text, LocalizedText, Tone};
use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropCategory {
    Grains,
    Pulses,
    Oilseeds,
    Vegetables,
    Fruits,
    Spices,
}

impl CropCategory {
    pub const ALL: [CropCategory; 6] = [
        CropCategory::Grains,
        CropCategory::Pulses,
        CropCategory::Oilseeds,
        CropCategory::Vegetables,
        CropCategory::Fruits,
        CropCategory::Spices,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            CropCategory::Grains => "market-grains",
            CropCategory::Pulses => "market-pulses",
            CropCategory::Oilseeds => "market-oilseeds",
            CropCategory::Vegetables => "market-vegetables",
            CropCategory::Fruits => "market-fruits",
            CropCategory::Spices => "market-spices",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    Super,
    Standard,
}

impl Grade {
    pub fn label_key(self) -> &'static str {
        match self {
            Grade::A => "common-grade-a",
            Grade::Super => "common-super",
            Grade::Standard => "common-standard",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CropPrice {
    pub name: LocalizedText,
    pub category: CropCategory,
    /// Rupees per `unit`.
    pub current_price: u32,
    pub previous_price: u32,
    pub unit: LocalizedText,
    pub market: LocalizedText,
    pub grade: Grade,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceChange {
    pub amount: i64,
    pub percent: f64,
}

impl PriceChange {
    pub fn is_rise(&self) -> bool {
        self.amount >= 0
    }
}

impl CropPrice {
    pub fn change(&self) -> PriceChange {
        let amount = i64::from(self.current_price) - i64::from(self.previous_price);
        let percent = if self.previous_price == 0 {
            0.0
        } else {
            amount as f64 / f64::from(self.previous_price) * 100.0
        };
        PriceChange { amount, percent }
    }

    /// Caption naming the crop and its pricing unit, e.g. "अरहर दाल · प्रति क्विंटल".
    pub fn unit_caption(&self, per: &str, language: Locale) -> String {
        format!(
            "{} · {per} {}",
            self.name.get(language),
            self.unit.get(language)
        )
    }
}

const QUINTAL: LocalizedText = text("quintal", "क्विंटल");

pub static CROP_PRICES: [CropPrice; 10] = [
    CropPrice {
        name: text("Wheat", "गेहूं"),
        category: CropCategory::Grains,
        current_price: 2150,
        previous_price: 2100,
        unit: QUINTAL,
        market: text("Delhi Mandi", "दिल्ली मंडी"),
        grade: Grade::A,
    },
    CropPrice {
        name: text("Rice (Basmati)", "चावल (बासमती)"),
        category: CropCategory::Grains,
        current_price: 3200,
        previous_price: 3180,
        unit: QUINTAL,
        market: text("Karnal Mandi", "करनाल मंडी"),
        grade: Grade::Super,
    },
    CropPrice {
        name: text("Maize", "मक्का"),
        category: CropCategory::Grains,
        current_price: 1680,
        previous_price: 1695,
        unit: QUINTAL,
        market: text("Bihar Mandi", "बिहार मंडी"),
        grade: Grade::Standard,
    },
    CropPrice {
        name: text("Pigeon Pea (Arhar)", "अरहर दाल"),
        category: CropCategory::Pulses,
        current_price: 5500,
        previous_price: 5450,
        unit: QUINTAL,
        market: text("Maharashtra Mandi", "महाराष्ट्र मंडी"),
        grade: Grade::A,
    },
    CropPrice {
        name: text("Chickpea (Chana)", "चना दाल"),
        category: CropCategory::Pulses,
        current_price: 4200,
        previous_price: 4180,
        unit: QUINTAL,
        market: text("Rajasthan Mandi", "राजस्थान मंडी"),
        grade: Grade::Standard,
    },
    CropPrice {
        name: text("Mustard", "सरसों"),
        category: CropCategory::Oilseeds,
        current_price: 4800,
        previous_price: 4750,
        unit: QUINTAL,
        market: text("Haryana Mandi", "हरियाणा मंडी"),
        grade: Grade::A,
    },
    CropPrice {
        name: text("Soybean", "सोयाबीन"),
        category: CropCategory::Oilseeds,
        current_price: 3900,
        previous_price: 3920,
        unit: QUINTAL,
        market: text("Madhya Pradesh Mandi", "मध्यप्रदेश मंडी"),
        grade: Grade::Standard,
    },
    CropPrice {
        name: text("Onion", "प्याज"),
        category: CropCategory::Vegetables,
        current_price: 1200,
        previous_price: 1150,
        unit: QUINTAL,
        market: text("Nashik Mandi", "नासिक मंडी"),
        grade: Grade::A,
    },
    CropPrice {
        name: text("Potato", "आलू"),
        category: CropCategory::Vegetables,
        current_price: 800,
        previous_price: 820,
        unit: QUINTAL,
        market: text("Agra Mandi", "आगरा मंडी"),
        grade: Grade::Standard,
    },
    CropPrice {
        name: text("Tomato", "टमाटर"),
        category: CropCategory::Vegetables,
        current_price: 1500,
        previous_price: 1400,
        unit: QUINTAL,
        market: text("Bangalore Mandi", "बैंगलोर मंडी"),
        grade: Grade::A,
    },
];

/// Case-insensitive substring match on the crop name in `locale`, optionally
/// narrowed to one category (`None` means all).
pub fn filter_crops<'a>(
    crops: &'a [CropPrice],
    query: &str,
    category: Option<CropCategory>,
    locale: Locale,
) -> Vec<&'a CropPrice> {
    let needle = query.trim().to_lowercase();
    crops
        .iter()
        .filter(|crop| category.map_or(true, |wanted| crop.category == wanted))
        .filter(|crop| needle.is_empty() || crop.name.get(locale).to_lowercase().contains(&needle))
        .collect()
}

pub fn highest_price<'a>(crops: &[&'a CropPrice]) -> Option<&'a CropPrice> {
    crops.iter().copied().max_by_key(|crop| crop.current_price)
}

/// Mean percentage change; zero for an empty slice.
pub fn average_change_percent(crops: &[&CropPrice]) -> f64 {
    if crops.is_empty() {
        return 0.0;
    }
    let total: f64 = crops.iter().map(|crop| crop.change().percent).sum();
    total / crops.len() as f64
}

pub fn distinct_markets(crops: &[&CropPrice]) -> usize {
    crops
        .iter()
        .map(|crop| crop.market.en)
        .collect::<HashSet<_>>()
        .len()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketTip {
    pub title_key: &'static str,
    pub body: LocalizedText,
    pub tone: Tone,
}

pub static MARKET_TIPS: [MarketTip; 4] = [
    MarketTip {
        title_key: "market-selling-advice",
        body: text(
            "Wheat and mustard prices are rising. Selling in the next 2-3 days will pay off.",
            "गेहूं और सरसों की कीमतें बढ़ रही हैं। अगले 2-3 दिन में बेचना फायदेमंद होगा।",
        ),
        tone: Tone::Green,
    },
    MarketTip {
        title_key: "market-quality-focus",
        body: text(
            "A grade produce is fetching higher prices. Focus on cleaning and grading your harvest.",
            "A ग्रेड की फसल का मूल्य अधिक मिल रहा है। फसल की सफाई और ग्रेडिंग पर ध्यान दें।",
        ),
        tone: Tone::Blue,
    },
    MarketTip {
        title_key: "market-market-selection",
        body: text(
            "If the nearest mandi pays less, check other mandis too. Compare after adding transport costs.",
            "नजदीकी मंडी में भाव कम है तो दूसरी मंडी का भाव भी जांचें। परिवहन खर्च जोड़कर तुलना करें।",
        ),
        tone: Tone::Orange,
    },
    MarketTip {
        title_key: "market-storage-advice",
        body: text(
            "Pulse prices are stable. Storing properly and selling after 2-3 months may be better.",
            "दाल की कीमतें स्थिर हैं। उचित भंडारण कर 2-3 महीने बाद बेचना बेहतर हो सकता है।",
        ),
        tone: Tone::Purple,
    },
];
