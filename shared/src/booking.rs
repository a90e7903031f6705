//! Slot filtering and the booking/cancellation selection engine.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{AppointmentSlot, BookingStatus, DateFilter, Role, Student};

/// Produce the visible subset of `slots` for the given date filter and
/// search query.
///
/// The current date is an explicit parameter so the function stays pure;
/// callers obtain it from the host environment. Both predicates compose
/// with logical AND, an empty query means "show all", and the original
/// collection order is preserved.
pub fn filter_slots(
    slots: &[AppointmentSlot],
    filter: DateFilter,
    query: &str,
    today: NaiveDate,
) -> Vec<AppointmentSlot> {
    let query = query.trim().to_lowercase();
    slots
        .iter()
        .filter(|slot| matches_date_filter(slot, filter, today))
        .filter(|slot| query.is_empty() || slot.matches_query(&query))
        .cloned()
        .collect()
}

fn matches_date_filter(slot: &AppointmentSlot, filter: DateFilter, today: NaiveDate) -> bool {
    if filter == DateFilter::All {
        return true;
    }
    // A slot whose date string does not parse never matches a calendar
    // predicate.
    let date = match slot.calendar_date() {
        Some(date) => date,
        None => return false,
    };
    match filter {
        DateFilter::All => true,
        DateFilter::Today => date == today,
        DateFilter::Tomorrow => date == today + Duration::days(1),
        DateFilter::ThisWeek => date >= today && date <= end_of_week(today),
    }
}

/// The last day of the current calendar week: the upcoming Sunday, a full
/// week out when `today` is itself a Sunday.
pub fn end_of_week(today: NaiveDate) -> NaiveDate {
    let days_left = 7 - i64::from(today.weekday().num_days_from_sunday());
    today + Duration::days(days_left)
}

/// Whether a pending confirmation would book or cancel the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    Book,
    Cancel,
}

/// The single slot currently held in confirmation, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub slot_id: String,
    pub mode: SelectionMode,
}

/// Fire-and-forget notification handed to the hosting surface after a
/// confirmed transition.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingAction {
    Booked {
        slot_id: String,
        /// Present only when a supervisor booked on a student's behalf
        student_id: Option<String>,
    },
    Cancelled {
        slot_id: String,
    },
}

/// Session state for the appointment page: the slot collection plus the
/// selection/confirmation state machine.
///
/// Each UI session owns its own copy of the seed collections; nothing here
/// is shared across sessions or persisted. At most one slot is in
/// confirmation at any time, and after every operation an available slot
/// has no assigned student.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentBook {
    slots: Vec<AppointmentSlot>,
    students: Vec<Student>,
    /// Identity slots are assigned to when a student books for themselves
    self_student: Student,
    role: Role,
    selection: Option<Selection>,
    chosen_student: Option<String>,
    status: BookingStatus,
}

impl AppointmentBook {
    pub fn new(slots: Vec<AppointmentSlot>, students: Vec<Student>, self_student: Student) -> Self {
        Self {
            slots,
            students,
            self_student,
            role: Role::Student,
            selection: None,
            chosen_student: None,
            status: BookingStatus::Idle,
        }
    }

    pub fn slots(&self) -> &[AppointmentSlot] {
        &self.slots
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn chosen_student(&self) -> Option<&str> {
        self.chosen_student.as_deref()
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    /// The slot currently held in confirmation, if any.
    pub fn selected_slot(&self) -> Option<&AppointmentSlot> {
        let selection = self.selection.as_ref()?;
        self.slots.iter().find(|slot| slot.id == selection.slot_id)
    }

    /// Convenience wrapper over [`filter_slots`] for this book's collection.
    pub fn visible_slots(
        &self,
        filter: DateFilter,
        query: &str,
        today: NaiveDate,
    ) -> Vec<AppointmentSlot> {
        filter_slots(&self.slots, filter, query, today)
    }

    /// Open the booking confirmation for an available slot. Inert for
    /// unavailable or unknown slot ids.
    pub fn begin_booking(&mut self, slot_id: &str) {
        let bookable = self
            .slots
            .iter()
            .any(|slot| slot.id == slot_id && slot.available);
        if !bookable {
            return;
        }
        self.selection = Some(Selection {
            slot_id: slot_id.to_string(),
            mode: SelectionMode::Book,
        });
        self.status = BookingStatus::Idle;
        // Supervisors book on a student's behalf; default to the first one.
        self.chosen_student = match self.role {
            Role::Supervisor => self.students.first().map(|s| s.id.clone()),
            Role::Student => None,
        };
    }

    /// Open the cancellation confirmation for a booked slot. Cancellation
    /// is only offered for slots that are not available.
    pub fn begin_cancellation(&mut self, slot_id: &str) {
        let cancellable = self
            .slots
            .iter()
            .any(|slot| slot.id == slot_id && !slot.available);
        if !cancellable {
            return;
        }
        self.selection = Some(Selection {
            slot_id: slot_id.to_string(),
            mode: SelectionMode::Cancel,
        });
        self.status = BookingStatus::Idle;
        self.chosen_student = None;
    }

    /// Close the confirmation without mutating any slot.
    pub fn dismiss(&mut self) {
        self.selection = None;
        self.chosen_student = None;
        self.status = BookingStatus::Idle;
    }

    /// Replace the student a supervisor is booking for.
    pub fn choose_student(&mut self, student_id: &str) {
        if self.students.iter().any(|s| s.id == student_id) {
            self.chosen_student = Some(student_id.to_string());
        }
    }

    /// Apply the pending confirmation.
    ///
    /// Booking marks the slot unavailable and assigns the chosen student
    /// (or the acting student themselves), then shows the success panel
    /// until [`Self::book_another`]. Cancellation frees the slot and
    /// returns straight to idle. A no-op when nothing is selected.
    pub fn confirm(&mut self) -> Option<BookingAction> {
        let selection = self.selection.clone()?;
        match selection.mode {
            SelectionMode::Book => {
                let assignee = match self.role {
                    Role::Supervisor => self.chosen_student.clone(),
                    Role::Student => None,
                };
                let assigned_id = assignee
                    .clone()
                    .unwrap_or_else(|| self.self_student.id.clone());
                let slot = self
                    .slots
                    .iter_mut()
                    .find(|slot| slot.id == selection.slot_id && slot.available)?;
                slot.available = false;
                slot.student = Some(assigned_id);
                self.selection = None;
                self.chosen_student = None;
                self.status = BookingStatus::Success;
                Some(BookingAction::Booked {
                    slot_id: selection.slot_id,
                    student_id: assignee,
                })
            }
            SelectionMode::Cancel => {
                let slot = self
                    .slots
                    .iter_mut()
                    .find(|slot| slot.id == selection.slot_id && !slot.available)?;
                slot.available = true;
                slot.student = None;
                self.selection = None;
                self.status = BookingStatus::Idle;
                Some(BookingAction::Cancelled {
                    slot_id: selection.slot_id,
                })
            }
        }
    }

    /// Record a host-reported side-effect failure. The selection stays in
    /// confirmation so the user can retry or dismiss; no slot was mutated.
    pub fn mark_failed(&mut self) {
        if self.selection.is_some() {
            self.status = BookingStatus::Error;
        }
    }

    /// Leave the success panel and return to the slot list.
    pub fn book_another(&mut self) {
        self.status = BookingStatus::Idle;
    }

    /// Switch between student and supervisor view, clearing any
    /// in-progress confirmation.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.selection = None;
        self.chosen_student = None;
        self.status = BookingStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str, date: &str, start: &str, end: &str, supervisor: &str, available: bool) -> AppointmentSlot {
        AppointmentSlot {
            id: id.to_string(),
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            supervisor: supervisor.to_string(),
            available,
            student: None,
        }
    }

    fn seed_slots() -> Vec<AppointmentSlot> {
        vec![
            slot("1", "2023-10-15", "9:00 AM", "10:00 AM", "Prof. Sarah Johnson", true),
            slot("2", "2023-10-15", "11:00 AM", "12:00 PM", "Prof. Mark Williams", true),
            slot("3", "2023-10-16", "2:00 PM", "3:00 PM", "Prof. Emily Chen", true),
            slot("4", "2023-10-16", "4:00 PM", "5:00 PM", "Prof. James Wilson", false),
            slot("5", "2023-10-17", "10:00 AM", "11:00 AM", "Prof. Sarah Johnson", true),
            slot("6", "2023-10-17", "1:00 PM", "2:00 PM", "Prof. Mark Williams", true),
            slot("7", "2023-10-18", "9:00 AM", "10:00 AM", "Prof. Emily Chen", true),
            slot("8", "2023-10-18", "3:00 PM", "4:00 PM", "Prof. James Wilson", false),
        ]
    }

    fn seed_students() -> Vec<Student> {
        vec![
            Student { id: "1".to_string(), name: "John Doe".to_string() },
            Student { id: "2".to_string(), name: "Jane Smith".to_string() },
            Student { id: "3".to_string(), name: "Alex Johnson".to_string() },
        ]
    }

    fn acting_self() -> Student {
        Student { id: "self".to_string(), name: "Current Student".to_string() }
    }

    fn seed_book() -> AppointmentBook {
        AppointmentBook::new(seed_slots(), seed_students(), acting_self())
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let slots = seed_slots();
        let visible = filter_slots(&slots, DateFilter::All, "", day(2023, 10, 16));
        assert_eq!(visible, slots);
    }

    #[test]
    fn test_filter_today_requires_exact_day_match() {
        let slots = seed_slots();
        let visible = filter_slots(&slots, DateFilter::Today, "", day(2023, 10, 16));
        let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "4"]);
    }

    #[test]
    fn test_filter_tomorrow() {
        let slots = seed_slots();
        let visible = filter_slots(&slots, DateFilter::Tomorrow, "", day(2023, 10, 16));
        let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "6"]);
    }

    #[test]
    fn test_filter_this_week_spans_today_through_sunday() {
        let slots = seed_slots();
        // 2023-10-16 is a Monday; the week runs through Sunday 2023-10-22.
        let visible = filter_slots(&slots, DateFilter::ThisWeek, "", day(2023, 10, 16));
        let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_filter_this_week_excludes_past_days() {
        let slots = seed_slots();
        let visible = filter_slots(&slots, DateFilter::ThisWeek, "", day(2023, 10, 17));
        assert!(visible.iter().all(|s| s.date.as_str() >= "2023-10-17"));
    }

    #[test]
    fn test_end_of_week_boundaries() {
        // Monday -> the following Sunday
        assert_eq!(end_of_week(day(2023, 10, 16)), day(2023, 10, 22));
        // Saturday -> the next day
        assert_eq!(end_of_week(day(2023, 10, 21)), day(2023, 10, 22));
        // Sunday -> a full week out, matching the weekday-offset formula
        assert_eq!(end_of_week(day(2023, 10, 22)), day(2023, 10, 29));
    }

    #[test]
    fn test_this_week_includes_closing_sunday_excludes_following_monday() {
        let slots = vec![
            slot("sun", "2023-10-22", "9:00 AM", "10:00 AM", "Prof. Emily Chen", true),
            slot("mon", "2023-10-23", "9:00 AM", "10:00 AM", "Prof. Emily Chen", true),
        ];
        let visible = filter_slots(&slots, DateFilter::ThisWeek, "", day(2023, 10, 16));
        let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["sun"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_composes_with_date_filter() {
        let slots = seed_slots();
        let visible = filter_slots(&slots, DateFilter::Today, "WILLIAMS", day(2023, 10, 15));
        let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
        // Williams also has slot 6 on the 17th, excluded by the date filter.
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_search_matches_date_and_time_fields() {
        let slots = seed_slots();
        let today = day(2023, 10, 16);

        let by_date = filter_slots(&slots, DateFilter::All, "2023-10-17", today);
        let ids: Vec<&str> = by_date.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "6"]);

        let by_time = filter_slots(&slots, DateFilter::All, "11:00 am", today);
        let ids: Vec<&str> = by_time.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "5"]);
    }

    #[test]
    fn test_empty_and_whitespace_query_shows_all() {
        let slots = seed_slots();
        let today = day(2023, 10, 16);
        assert_eq!(filter_slots(&slots, DateFilter::All, "", today).len(), 8);
        assert_eq!(filter_slots(&slots, DateFilter::All, "   ", today).len(), 8);
    }

    #[test]
    fn test_unparseable_slot_date_fails_calendar_predicates_but_passes_all() {
        let mut slots = seed_slots();
        slots[0].date = "not-a-date".to_string();
        let today = day(2023, 10, 15);
        assert!(filter_slots(&slots, DateFilter::Today, "", today)
            .iter()
            .all(|s| s.id != "1"));
        assert!(filter_slots(&slots, DateFilter::All, "", today)
            .iter()
            .any(|s| s.id == "1"));
    }

    #[test]
    fn test_wilson_scenario() {
        // Seed includes the unavailable 2023-10-16 slot with Prof. James
        // Wilson plus his second slot on the 18th; "wilson" with a date
        // narrowed to the 16th returns exactly the first.
        let book = seed_book();
        let visible = book.visible_slots(DateFilter::All, "wilson", day(2023, 10, 16));
        let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "8"]);

        let visible = book.visible_slots(DateFilter::Today, "wilson", day(2023, 10, 16));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "4");
        assert!(!visible[0].available);

        // Booking the unavailable slot is refused.
        let mut book = seed_book();
        book.begin_booking("4");
        assert!(book.selection().is_none());

        // Cancelling it opens a cancel confirmation for that id.
        book.begin_cancellation("4");
        let selection = book.selection().unwrap();
        assert_eq!(selection.slot_id, "4");
        assert_eq!(selection.mode, SelectionMode::Cancel);
    }

    #[test]
    fn test_student_booking_assigns_self() {
        let mut book = seed_book();
        book.begin_booking("1");
        let selection = book.selection().unwrap();
        assert_eq!(selection.mode, SelectionMode::Book);
        assert_eq!(book.chosen_student(), None);

        let action = book.confirm().unwrap();
        assert_eq!(
            action,
            BookingAction::Booked { slot_id: "1".to_string(), student_id: None }
        );
        let slot = book.slots().iter().find(|s| s.id == "1").unwrap();
        assert!(!slot.available);
        assert_eq!(slot.student.as_deref(), Some("self"));
        assert_eq!(book.status(), BookingStatus::Success);
        assert!(book.selection().is_none());

        book.book_another();
        assert_eq!(book.status(), BookingStatus::Idle);
    }

    #[test]
    fn test_supervisor_booking_defaults_and_chooses_student() {
        let mut book = seed_book();
        book.set_role(Role::Supervisor);
        book.begin_booking("3");
        // First seed student is the default choice.
        assert_eq!(book.chosen_student(), Some("1"));

        book.choose_student("2");
        assert_eq!(book.chosen_student(), Some("2"));
        // Unknown ids are ignored.
        book.choose_student("99");
        assert_eq!(book.chosen_student(), Some("2"));

        let action = book.confirm().unwrap();
        assert_eq!(
            action,
            BookingAction::Booked {
                slot_id: "3".to_string(),
                student_id: Some("2".to_string()),
            }
        );
        let slot = book.slots().iter().find(|s| s.id == "3").unwrap();
        assert!(!slot.available);
        assert_eq!(slot.student.as_deref(), Some("2"));
    }

    #[test]
    fn test_cancellation_frees_slot_and_clears_student() {
        let mut book = seed_book();
        book.begin_booking("1");
        book.confirm().unwrap();
        book.book_another();

        book.begin_cancellation("1");
        let action = book.confirm().unwrap();
        assert_eq!(action, BookingAction::Cancelled { slot_id: "1".to_string() });
        let slot = book.slots().iter().find(|s| s.id == "1").unwrap();
        assert!(slot.available);
        assert_eq!(slot.student, None);
        assert_eq!(book.status(), BookingStatus::Idle);
        assert!(book.selection().is_none());
    }

    #[test]
    fn test_cancellation_only_offered_for_booked_slots() {
        let mut book = seed_book();
        book.begin_cancellation("1");
        assert!(book.selection().is_none());
        assert!(book.confirm().is_none());
    }

    #[test]
    fn test_dismiss_closes_without_mutation() {
        let mut book = seed_book();
        let before = book.slots().to_vec();
        book.begin_booking("2");
        book.dismiss();
        assert!(book.selection().is_none());
        assert_eq!(book.slots(), before.as_slice());
        assert!(book.confirm().is_none());
    }

    #[test]
    fn test_confirm_without_selection_is_noop() {
        let mut book = seed_book();
        assert!(book.confirm().is_none());
        assert_eq!(book.status(), BookingStatus::Idle);
    }

    #[test]
    fn test_role_switch_clears_in_progress_confirmation() {
        let mut book = seed_book();
        book.begin_booking("1");
        assert!(book.selection().is_some());
        book.set_role(Role::Supervisor);
        assert!(book.selection().is_none());
        assert_eq!(book.chosen_student(), None);
        assert_eq!(book.role(), Role::Supervisor);
    }

    #[test]
    fn test_mark_failed_keeps_selection_for_retry() {
        let mut book = seed_book();
        book.begin_booking("1");
        book.mark_failed();
        assert_eq!(book.status(), BookingStatus::Error);
        let selection = book.selection().unwrap();
        assert_eq!(selection.slot_id, "1");
        // The slot itself is untouched.
        assert!(book.slots().iter().find(|s| s.id == "1").unwrap().available);

        // Retrying still works.
        let action = book.confirm().unwrap();
        assert!(matches!(action, BookingAction::Booked { .. }));
        assert_eq!(book.status(), BookingStatus::Success);
    }

    #[test]
    fn test_mark_failed_without_selection_is_noop() {
        let mut book = seed_book();
        book.mark_failed();
        assert_eq!(book.status(), BookingStatus::Idle);
    }

    #[test]
    fn test_availability_student_invariant_holds_throughout() {
        let mut book = seed_book();
        let check = |book: &AppointmentBook| {
            for slot in book.slots() {
                if slot.available {
                    assert!(slot.student.is_none(), "available slot {} has a student", slot.id);
                }
            }
        };
        check(&book);
        book.begin_booking("1");
        check(&book);
        book.confirm().unwrap();
        check(&book);
        book.book_another();
        book.begin_cancellation("1");
        book.confirm().unwrap();
        check(&book);
    }

    #[test]
    fn test_at_most_one_slot_in_confirmation() {
        let mut book = seed_book();
        book.begin_booking("1");
        book.begin_booking("2");
        let selection = book.selection().unwrap();
        assert_eq!(selection.slot_id, "2");
    }

    #[test]
    fn test_selected_slot_lookup() {
        let mut book = seed_book();
        assert!(book.selected_slot().is_none());
        book.begin_booking("5");
        assert_eq!(book.selected_slot().unwrap().supervisor, "Prof. Sarah Johnson");
    }
}
