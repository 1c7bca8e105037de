//! Agricultural experts, past and upcoming consultations, and the quick
//! question chat.

use super::{text, LocalizedText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Busy,
}

impl Availability {
    pub fn label_key(self) -> &'static str {
        match self {
            Availability::Available => "expert-available",
            Availability::Busy => "expert-busy",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expert {
    pub name: LocalizedText,
    pub specialization: LocalizedText,
    pub experience: LocalizedText,
    /// Out of five.
    pub rating: f32,
    pub availability: Availability,
    pub languages: &'static [LocalizedText],
    pub location: LocalizedText,
}

impl Expert {
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// Two-letter monogram for the avatar.
    pub fn initials(&self) -> String {
        self.name
            .en
            .split_whitespace()
            .filter(|word| !word.ends_with('.'))
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

const HINDI: LocalizedText = text("Hindi", "हिंदी");
const ENGLISH: LocalizedText = text("English", "अंग्रेजी");

pub static EXPERTS: [Expert; 3] = [
    Expert {
        name: text("Dr. Rajesh Sharma", "डॉ. राजेश शर्मा"),
        specialization: text("Crop disease specialist", "फसल रोग विशेषज्ञ"),
        experience: text("15 years", "15 वर्ष"),
        rating: 4.8,
        availability: Availability::Available,
        languages: &[HINDI, ENGLISH],
        location: text("Delhi", "दिल्ली"),
    },
    Expert {
        name: text("Prof. Sunita Patel", "प्रो. सुनीता पटेल"),
        specialization: text("Soil scientist", "मिट्टी विज्ञान"),
        experience: text("20 years", "20 वर्ष"),
        rating: 4.9,
        availability: Availability::Busy,
        languages: &[HINDI, text("Gujarati", "गुजराती")],
        location: text("Ahmedabad", "अहमदाबाद"),
    },
    Expert {
        name: text("Dr. Amit Kumar", "डॉ. अमित कुमार"),
        specialization: text("Organic farming", "जैविक खेती"),
        experience: text("12 years", "12 वर्ष"),
        rating: 4.7,
        availability: Availability::Available,
        languages: &[HINDI, ENGLISH, text("Punjabi", "पंजाबी")],
        location: text("Jaipur", "जयपुर"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsultationStatus {
    Completed,
    Upcoming,
}

impl ConsultationStatus {
    pub fn label_key(self) -> &'static str {
        match self {
            ConsultationStatus::Completed => "expert-completed",
            ConsultationStatus::Upcoming => "expert-upcoming",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Consultation {
    pub expert: LocalizedText,
    pub topic: LocalizedText,
    pub date: LocalizedText,
    pub status: ConsultationStatus,
    /// Set once a completed session has been rated.
    pub rating: Option<u8>,
}

pub static CONSULTATIONS: [Consultation; 2] = [
    Consultation {
        expert: text("Dr. Rajesh Sharma", "डॉ. राजेश शर्मा"),
        topic: text("Wheat disease", "गेहूं में रोग"),
        date: text("2 days ago", "2 दिन पहले"),
        status: ConsultationStatus::Completed,
        rating: Some(5),
    },
    Consultation {
        expert: text("Dr. Amit Kumar", "डॉ. अमित कुमार"),
        topic: text("Organic fertilizer", "जैविक खाद"),
        date: text("Tomorrow 10:00 AM", "कल सुबह 10:00 बजे"),
        status: ConsultationStatus::Upcoming,
        rating: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Farmer,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u32,
    pub sender: Sender,
    pub body: String,
}

/// Messages exchanged through the quick question box, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u32,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Record a farmer's question. Blank input is ignored and yields `None`.
    pub fn push_question(&mut self, question: &str) -> Option<u32> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        Some(self.push(Sender::Farmer, question.to_string()))
    }

    pub fn push_reply(&mut self, reply: impl Into<String>) -> u32 {
        self.push(Sender::Expert, reply.into())
    }

    fn push(&mut self, sender: Sender, body: String) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, sender, body });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_questions_are_ignored() {
        let mut log = ChatLog::new();
        assert_eq!(log.push_question("   "), None);
        assert!(log.is_empty());
    }

    #[test]
    fn question_and_reply_alternate_in_order() {
        let mut log = ChatLog::new();
        let asked = log.push_question("  My wheat leaves are yellow  ").unwrap();
        let replied = log.push_reply("Check nitrogen levels.");
        assert!(asked < replied);

        let messages = log.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::Farmer);
        assert_eq!(messages[0].body, "My wheat leaves are yellow");
        assert_eq!(messages[1].sender, Sender::Expert);
    }

    #[test]
    fn expert_initials_skip_titles() {
        assert_eq!(EXPERTS[0].initials(), "RS");
        assert_eq!(EXPERTS[1].initials(), "SP");
        assert_eq!(EXPERTS.iter().filter(|e| e.is_available()).count(), 2);
    }

    #[test]
    fn only_completed_sessions_carry_a_rating() {
        for session in &CONSULTATIONS {
            assert_eq!(
                session.rating.is_some(),
                session.status == ConsultationStatus::Completed
            );
        }
    }
}
