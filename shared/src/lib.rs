use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod booking;
pub mod chat;
pub mod mood;

pub use booking::{filter_slots, AppointmentBook, BookingAction, Selection, SelectionMode};
pub use chat::ChatTranscript;
pub use mood::{MoodFlow, MoodSubmission};

/// A bookable appointment time block tied to one Personal Supervisor.
///
/// Slots are seed data: none are created or destroyed at runtime. Booking
/// flips `available` to false and assigns a student; cancellation flips it
/// back and clears the assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentSlot {
    pub id: String,
    /// Calendar date in ISO format (YYYY-MM-DD)
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    /// Display name of the Personal Supervisor who owns this slot
    pub supervisor: String,
    pub available: bool,
    /// ID of the assigned student; only meaningful while the slot is booked
    pub student: Option<String>,
}

impl AppointmentSlot {
    /// Parse the slot's date string into a calendar date.
    ///
    /// Returns `None` for malformed dates; callers treat such slots as
    /// never matching a calendar predicate.
    pub fn calendar_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Case-insensitive substring match against supervisor name, date and
    /// both time strings. `query` must already be lowercased.
    pub fn matches_query(&self, query: &str) -> bool {
        self.supervisor.to_lowercase().contains(query)
            || self.date.to_lowercase().contains(query)
            || self.start_time.to_lowercase().contains(query)
            || self.end_time.to_lowercase().contains(query)
    }
}

/// A student known to the portal; read-only reference data used when a
/// supervisor books a slot on a student's behalf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
}

/// Which side of the booking flow the current user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Student,
    Supervisor,
}

/// Date predicate applied to the appointment slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Tomorrow,
    ThisWeek,
}

impl DateFilter {
    /// Wire value used by the filter `<select>` control.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateFilter::All => "all",
            DateFilter::Today => "today",
            DateFilter::Tomorrow => "tomorrow",
            DateFilter::ThisWeek => "this-week",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateFilter::All => "All Dates",
            DateFilter::Today => "Today",
            DateFilter::Tomorrow => "Tomorrow",
            DateFilter::ThisWeek => "This Week",
        }
    }

    pub fn all_filters() -> [DateFilter; 4] {
        [
            DateFilter::All,
            DateFilter::Today,
            DateFilter::Tomorrow,
            DateFilter::ThisWeek,
        ]
    }
}

impl FromStr for DateFilter {
    type Err = DateFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DateFilter::All),
            "today" => Ok(DateFilter::Today),
            "tomorrow" => Ok(DateFilter::Tomorrow),
            "this-week" => Ok(DateFilter::ThisWeek),
            _ => Err(DateFilterError::Unknown(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DateFilterError {
    Unknown(String),
}

impl fmt::Display for DateFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFilterError::Unknown(value) => write!(f, "Unknown date filter: {}", value),
        }
    }
}

impl std::error::Error for DateFilterError {}

/// One of the five fixed self-reported progress/wellbeing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoodLevel {
    Great,
    Good,
    Okay,
    Struggling,
    Overwhelmed,
}

impl MoodLevel {
    /// Wire value emitted to the hosting surface on submission.
    pub fn value(&self) -> &'static str {
        match self {
            MoodLevel::Great => "great",
            MoodLevel::Good => "good",
            MoodLevel::Okay => "okay",
            MoodLevel::Struggling => "low",
            MoodLevel::Overwhelmed => "bad",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodLevel::Great => "Great",
            MoodLevel::Good => "Good",
            MoodLevel::Okay => "Okay",
            MoodLevel::Struggling => "Struggling",
            MoodLevel::Overwhelmed => "Overwhelmed",
        }
    }

    /// CSS class tag for the mood swatch.
    pub fn color_class(&self) -> &'static str {
        match self {
            MoodLevel::Great => "mood-swatch-wellness",
            MoodLevel::Good => "mood-swatch-mint",
            MoodLevel::Okay => "mood-swatch-calm",
            MoodLevel::Struggling => "mood-swatch-amber",
            MoodLevel::Overwhelmed => "mood-swatch-red",
        }
    }

    /// RGB color used when the level is drawn on a chart canvas.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            MoodLevel::Great => (0x0e, 0xa5, 0xe9),
            MoodLevel::Good => (0x14, 0xb8, 0xa6),
            MoodLevel::Okay => (0x73, 0x8a, 0xa9),
            MoodLevel::Struggling => (0xf5, 0x9e, 0x0b),
            MoodLevel::Overwhelmed => (0xef, 0x44, 0x44),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MoodLevel::Great => "I'm making excellent progress with my studies!",
            MoodLevel::Good => "I'm keeping up with my coursework and feeling positive.",
            MoodLevel::Okay => "I'm managing my workload adequately.",
            MoodLevel::Struggling => {
                "I'm finding it difficult to keep up with some aspects of my course."
            }
            MoodLevel::Overwhelmed => {
                "I'm having significant difficulty with my studies and wellbeing."
            }
        }
    }

    /// All five levels, best to worst, in display order.
    pub fn all() -> [MoodLevel; 5] {
        [
            MoodLevel::Great,
            MoodLevel::Good,
            MoodLevel::Okay,
            MoodLevel::Struggling,
            MoodLevel::Overwhelmed,
        ]
    }
}

impl FromStr for MoodLevel {
    type Err = MoodLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "great" => Ok(MoodLevel::Great),
            "good" => Ok(MoodLevel::Good),
            "okay" => Ok(MoodLevel::Okay),
            "low" => Ok(MoodLevel::Struggling),
            "bad" => Ok(MoodLevel::Overwhelmed),
            _ => Err(MoodLevelError::Unknown(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MoodLevelError {
    Unknown(String),
}

impl fmt::Display for MoodLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoodLevelError::Unknown(value) => write!(f, "Unknown mood level: {}", value),
        }
    }
}

impl std::error::Error for MoodLevelError {}

/// Tri-state outcome display for the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BookingStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Who authored a crisis chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatSender {
    User,
    Support,
}

/// One message in the crisis chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
}

/// Fixed UI timings and contact strings for the portal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalConfig {
    /// How long the mood acknowledgment stays up before auto-reset
    pub acknowledgment_ms: u32,
    /// Delay before the simulated chat support reply arrives
    pub chat_reply_delay_ms: u32,
    pub crisis_line: String,
    pub support_email: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            acknowledgment_ms: 3000,
            chat_reply_delay_ms: 1000,
            crisis_line: "1-800-273-8255".to_string(),
            support_email: "support@safespace.edu".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_level_value_round_trip() {
        for level in MoodLevel::all() {
            assert_eq!(level.value().parse::<MoodLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_mood_level_rejects_unknown_value() {
        assert!("ecstatic".parse::<MoodLevel>().is_err());
        assert!("".parse::<MoodLevel>().is_err());
    }

    #[test]
    fn test_mood_levels_in_display_order() {
        let labels: Vec<&str> = MoodLevel::all().iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec!["Great", "Good", "Okay", "Struggling", "Overwhelmed"]
        );
    }

    #[test]
    fn test_date_filter_round_trip() {
        for filter in DateFilter::all_filters() {
            assert_eq!(filter.as_str().parse::<DateFilter>().unwrap(), filter);
        }
        assert!("yesterday".parse::<DateFilter>().is_err());
    }

    #[test]
    fn test_slot_calendar_date_parsing() {
        let mut slot = AppointmentSlot {
            id: "1".to_string(),
            date: "2023-10-15".to_string(),
            start_time: "9:00 AM".to_string(),
            end_time: "10:00 AM".to_string(),
            supervisor: "Prof. Sarah Johnson".to_string(),
            available: true,
            student: None,
        };
        assert_eq!(
            slot.calendar_date(),
            chrono::NaiveDate::from_ymd_opt(2023, 10, 15)
        );

        slot.date = "15/10/2023".to_string();
        assert_eq!(slot.calendar_date(), None);
    }

    #[test]
    fn test_slot_query_matching_is_case_insensitive() {
        let slot = AppointmentSlot {
            id: "4".to_string(),
            date: "2023-10-16".to_string(),
            start_time: "4:00 PM".to_string(),
            end_time: "5:00 PM".to_string(),
            supervisor: "Prof. James Wilson".to_string(),
            available: false,
            student: None,
        };
        assert!(slot.matches_query("wilson"));
        assert!(slot.matches_query("2023-10"));
        assert!(slot.matches_query("4:00 pm"));
        assert!(!slot.matches_query("chen"));
    }

    #[test]
    fn test_portal_config_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.acknowledgment_ms, 3000);
        assert_eq!(config.chat_reply_delay_ms, 1000);
        assert_eq!(config.crisis_line, "1-800-273-8255");
    }
}
