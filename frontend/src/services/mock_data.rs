//! Seed collections for the demo portal. Every page takes its own
//! in-memory copy; nothing here is shared or persisted.

use shared::{AppointmentSlot, MoodLevel, Student};

fn slot(
    id: &str,
    date: &str,
    start_time: &str,
    end_time: &str,
    supervisor: &str,
    available: bool,
    student: Option<&str>,
) -> AppointmentSlot {
    AppointmentSlot {
        id: id.to_string(),
        date: date.to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        supervisor: supervisor.to_string(),
        available,
        student: student.map(str::to_string),
    }
}

/// Appointment slots offered by the Personal Supervisors.
pub fn appointment_slots() -> Vec<AppointmentSlot> {
    vec![
        slot("1", "2023-10-15", "9:00 AM", "10:00 AM", "Prof. Sarah Johnson", true, None),
        slot("2", "2023-10-15", "11:00 AM", "12:00 PM", "Prof. Mark Williams", true, None),
        slot("3", "2023-10-16", "2:00 PM", "3:00 PM", "Prof. Emily Chen", true, None),
        slot("4", "2023-10-16", "4:00 PM", "5:00 PM", "Prof. James Wilson", false, Some("1")),
        slot("5", "2023-10-17", "10:00 AM", "11:00 AM", "Prof. Sarah Johnson", true, None),
        slot("6", "2023-10-17", "1:00 PM", "2:00 PM", "Prof. Mark Williams", true, None),
        slot("7", "2023-10-18", "9:00 AM", "10:00 AM", "Prof. Emily Chen", true, None),
        slot("8", "2023-10-18", "3:00 PM", "4:00 PM", "Prof. James Wilson", false, Some("4")),
    ]
}

/// Students a supervisor can book on behalf of.
pub fn students() -> Vec<Student> {
    [
        ("1", "John Doe"),
        ("2", "Jane Smith"),
        ("3", "Alex Johnson"),
        ("4", "Emma Williams"),
        ("5", "Michael Brown"),
    ]
    .into_iter()
    .map(|(id, name)| Student {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// The signed-in student a self-service booking is assigned to.
pub fn current_student() -> Student {
    Student {
        id: "student-demo".to_string(),
        name: "Demo Student".to_string(),
    }
}

/// One week of mood check-in counts for the insights charts.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyMoodCounts {
    pub day: &'static str,
    /// Check-ins per level, in [`MoodLevel::all`] order
    pub counts: [u32; 5],
}

pub fn weekly_mood_counts() -> Vec<DailyMoodCounts> {
    vec![
        DailyMoodCounts { day: "Mon", counts: [1, 0, 0, 0, 0] },
        DailyMoodCounts { day: "Tue", counts: [0, 1, 0, 0, 0] },
        DailyMoodCounts { day: "Wed", counts: [0, 0, 1, 0, 0] },
        DailyMoodCounts { day: "Thu", counts: [0, 1, 0, 0, 0] },
        DailyMoodCounts { day: "Fri", counts: [1, 0, 0, 0, 0] },
        DailyMoodCounts { day: "Sat", counts: [0, 1, 0, 0, 0] },
        DailyMoodCounts { day: "Sun", counts: [0, 0, 0, 1, 0] },
    ]
}

/// Overall mood distribution shown next to the trend chart.
pub fn mood_distribution() -> Vec<(MoodLevel, u32)> {
    MoodLevel::all()
        .into_iter()
        .zip([8, 12, 5, 3, 2])
        .collect()
}

/// Self-reported stress level per week, 0-10 scale.
pub fn stress_levels() -> Vec<(&'static str, f64)> {
    vec![
        ("Week 1", 7.0),
        ("Week 2", 6.0),
        ("Week 3", 8.0),
        ("Week 4", 5.0),
        ("Week 5", 4.0),
        ("Week 6", 6.0),
        ("Week 7", 3.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_slots_are_consistent() {
        for slot in appointment_slots() {
            assert!(slot.calendar_date().is_some(), "slot {} has a bad date", slot.id);
            if slot.available {
                assert!(slot.student.is_none());
            }
        }
    }

    #[test]
    fn test_seed_slot_ids_are_unique() {
        let slots = appointment_slots();
        let mut ids: Vec<&str> = slots.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), slots.len());
    }

    #[test]
    fn test_booked_seed_slots_reference_known_students() {
        let students = students();
        for slot in appointment_slots() {
            if let Some(student_id) = &slot.student {
                assert!(students.iter().any(|s| &s.id == student_id));
            }
        }
    }

    #[test]
    fn test_mood_distribution_covers_all_levels() {
        assert_eq!(mood_distribution().len(), 5);
    }
}
