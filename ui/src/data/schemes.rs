//! Government schemes for farmers.

use super::{text, LocalizedText};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeCategory {
    CropInsurance,
    Subsidy,
    Loan,
    FarmerWelfare,
    TechnicalSupport,
}

impl SchemeCategory {
    pub const ALL: [SchemeCategory; 5] = [
        SchemeCategory::CropInsurance,
        SchemeCategory::Subsidy,
        SchemeCategory::Loan,
        SchemeCategory::FarmerWelfare,
        SchemeCategory::TechnicalSupport,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            SchemeCategory::CropInsurance => "schemes-crop-insurance",
            SchemeCategory::Subsidy => "schemes-subsidy",
            SchemeCategory::Loan => "schemes-loan",
            SchemeCategory::FarmerWelfare => "schemes-farmer-welfare",
            SchemeCategory::TechnicalSupport => "schemes-technical-support",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scheme {
    pub title: LocalizedText,
    pub category: SchemeCategory,
    pub description: LocalizedText,
    pub benefits: &'static [LocalizedText],
    pub eligibility: LocalizedText,
    pub amount: LocalizedText,
    pub deadline: LocalizedText,
    pub active: bool,
    pub documents: &'static [LocalizedText],
}

const AADHAAR: LocalizedText = text("Aadhaar card", "आधार कार्ड");
const PASSBOOK: LocalizedText = text("Bank passbook", "बैंक पासबुक");
const LAND_RECORDS: LocalizedText = text("Land records", "भूमि दस्तावेज");
const ONGOING: LocalizedText = text("Ongoing", "चालू");

pub static SCHEMES: [Scheme; 6] = [
    Scheme {
        title: text("PM Crop Insurance Scheme", "प्रधानमंत्री फसल बीमा योजना"),
        category: SchemeCategory::CropInsurance,
        description: text(
            "Insurance cover for farmers when crops are lost",
            "फसल के नुकसान की स्थिति में किसानों को बीमा कवर प्रदान करना",
        ),
        benefits: &[
            text("Protection against natural disasters", "प्राकृतिक आपदा से सुरक्षा"),
            text("Low premium rate", "कम प्रीमियम दर"),
            text("Quick claim settlement", "तुरंत क्लेम सेटलमेंट"),
        ],
        eligibility: text(
            "All farmers (landowners and tenants)",
            "सभी किसान (भूमिधारक और गैर-भूमिधारक)",
        ),
        amount: text("Up to ₹2 lakh", "₹2 लाख तक"),
        deadline: text("31 December 2024", "31 दिसंबर 2024"),
        active: true,
        documents: &[
            AADHAAR,
            PASSBOOK,
            LAND_RECORDS,
            text("Sowing certificate", "बुआई प्रमाण पत्र"),
        ],
    },
    Scheme {
        title: text("Kisan Samman Nidhi", "किसान सम्मान निधि योजना"),
        category: SchemeCategory::FarmerWelfare,
        description: text(
            "Yearly income support for small and marginal farmers",
            "छोटे और सीमांत किसानों को प्रतिवर्ष आर्थिक सहायता",
        ),
        benefits: &[
            text("₹6000 per year", "₹6000 प्रति वर्ष"),
            text("Paid directly into the bank account", "सीधे बैंक खाते में"),
            text("Paid in three instalments", "तीन किस्तों में भुगतान"),
        ],
        eligibility: text("Farmers with up to 2 hectares", "2 हेक्टेयर तक भूमि वाले किसान"),
        amount: text("₹6,000/year", "₹6,000/वर्ष"),
        deadline: ONGOING,
        active: true,
        documents: &[AADHAAR, PASSBOOK, LAND_RECORDS],
    },
    Scheme {
        title: text("Farm Machinery Subsidy", "कृषि यंत्र अनुदान योजना"),
        category: SchemeCategory::Subsidy,
        description: text(
            "Subsidy on the purchase of modern farm machinery",
            "आधुनिक कृषि यंत्रों की खरीद पर सब्सिडी",
        ),
        benefits: &[
            text("Up to 50% subsidy", "50% तक सब्सिडी"),
            text("Modern equipment", "आधुनिक यंत्र"),
            text("Higher productivity", "उत्पादकता वृद्धि"),
        ],
        eligibility: text("Farmers of all categories", "सभी श्रेणी के किसान"),
        amount: text("Up to ₹1 lakh", "₹1 लाख तक"),
        deadline: text("15 January 2025", "15 जनवरी 2025"),
        active: true,
        documents: &[
            AADHAAR,
            PASSBOOK,
            text("Agricultural land records", "कृषि भूमि दस्तावेज"),
            text("Income certificate", "आय प्रमाण पत्र"),
        ],
    },
    Scheme {
        title: text("Kisan Credit Card", "किसान क्रेडिट कार्ड योजना"),
        category: SchemeCategory::Loan,
        description: text(
            "Low-interest credit for farmers",
            "किसानों को कम ब्याज दर पर ऋण सुविधा",
        ),
        benefits: &[
            text("4% interest rate", "4% ब्याज दर"),
            text("Easy instalments", "आसान किस्तें"),
            text("No collateral", "कोई गारंटी नहीं"),
        ],
        eligibility: text("All practising farmers", "खेती करने वाले सभी किसान"),
        amount: text("Up to ₹3 lakh", "₹3 लाख तक"),
        deadline: ONGOING,
        active: true,
        documents: &[
            AADHAAR,
            PASSBOOK,
            LAND_RECORDS,
            text("Proof of income", "आय प्रमाण"),
        ],
    },
    Scheme {
        title: text("Soil Health Card Scheme", "सॉयल हेल्थ कार्ड स्कीम"),
        category: SchemeCategory::TechnicalSupport,
        description: text(
            "Soil testing and fertilizer recommendations",
            "मिट्टी की जांच और उर्वरक की सलाह",
        ),
        benefits: &[
            text("Free soil testing", "निःशुल्क मिट्टी जांच"),
            text("Fertilizer suggestions", "उर्वरक सुझाव"),
            text("Advice to raise productivity", "उत्पादकता बढ़ाने की सलाह"),
        ],
        eligibility: text("All farmers", "सभी किसान"),
        amount: text("Free", "निःशुल्क"),
        deadline: ONGOING,
        active: true,
        documents: &[AADHAAR, LAND_RECORDS],
    },
    Scheme {
        title: text("Organic Farming Promotion Scheme", "ऑर्गेनिक फार्मिंग प्रमोशन स्कीम"),
        category: SchemeCategory::Subsidy,
        description: text(
            "Support for adopting organic farming",
            "जैविक खेती को बढ़ावा देने के लिए सहायता",
        ),
        benefits: &[
            text("Subsidy on organic manure", "जैविक खाद पर सब्सिडी"),
            text("Certification support", "सर्टिफिकेशन सहायता"),
            text("Better prices", "बेहतर मूल्य"),
        ],
        eligibility: text("Farmers practising organic farming", "जैविक खेती करने वाले किसान"),
        amount: text("₹50,000/hectare", "₹50,000/हेक्टेयर"),
        deadline: text("28 February 2025", "28 फरवरी 2025"),
        active: true,
        documents: &[
            AADHAAR,
            LAND_RECORDS,
            text("Organic farming certificate", "जैविक खेती प्रमाण पत्र"),
        ],
    },
];

/// Combined headline figures shown in the summary cards.
pub const TOTAL_BENEFIT_LABEL: &str = "₹12.5L+";
pub const PROCESSING_DAYS_LABEL: &str = "7-15";

pub fn filter_schemes(schemes: &[Scheme], category: Option<SchemeCategory>) -> Vec<&Scheme> {
    schemes
        .iter()
        .filter(|scheme| category.map_or(true, |wanted| scheme.category == wanted))
        .collect()
}

pub fn active_count(schemes: &[Scheme]) -> usize {
    schemes.iter().filter(|scheme| scheme.active).count()
}
