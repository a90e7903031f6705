use shared::{AppointmentBook, BookingAction, DateFilter, Role};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{AppointmentList, SearchBar};
use crate::services::date_utils::today;
use crate::services::logging::Logger;
use crate::services::mock_data;

/// Appointment booking page. Owns the session's [`AppointmentBook`] plus
/// the date filter and search query; everything below it is
/// presentational.
#[function_component(Appointments)]
pub fn appointments() -> Html {
    let book = use_state(|| {
        AppointmentBook::new(
            mock_data::appointment_slots(),
            mock_data::students(),
            mock_data::current_student(),
        )
    });
    let filter = use_state(|| DateFilter::All);
    let query = use_state(String::new);

    let is_supervisor = book.role() == Role::Supervisor;

    let on_search = {
        let query = query.clone();
        Callback::from(move |q: String| {
            Logger::debug_with_component("appointments", &format!("Searching for: {}", q));
            query.set(q);
        })
    };
    let on_clear_search = {
        let query = query.clone();
        Callback::from(move |_: ()| query.set(String::new()))
    };

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(parsed) = select.value().parse::<DateFilter>() {
                filter.set(parsed);
            }
        })
    };

    let on_toggle_role = {
        let book = book.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*book).clone();
            let role = match next.role() {
                Role::Student => Role::Supervisor,
                Role::Supervisor => Role::Student,
            };
            next.set_role(role);
            Logger::info_with_component(
                "appointments",
                &format!(
                    "Switched to {} view",
                    match role {
                        Role::Supervisor => "Personal Supervisor",
                        Role::Student => "Student",
                    }
                ),
            );
            book.set(next);
        })
    };

    let on_begin_booking = {
        let book = book.clone();
        Callback::from(move |slot_id: String| {
            let mut next = (*book).clone();
            next.begin_booking(&slot_id);
            book.set(next);
        })
    };
    let on_begin_cancel = {
        let book = book.clone();
        Callback::from(move |slot_id: String| {
            let mut next = (*book).clone();
            next.begin_cancellation(&slot_id);
            book.set(next);
        })
    };
    let on_dismiss = {
        let book = book.clone();
        Callback::from(move |_: ()| {
            let mut next = (*book).clone();
            next.dismiss();
            book.set(next);
        })
    };
    let on_choose_student = {
        let book = book.clone();
        Callback::from(move |student_id: String| {
            let mut next = (*book).clone();
            next.choose_student(&student_id);
            book.set(next);
        })
    };
    let on_confirm = {
        let book = book.clone();
        Callback::from(move |_: ()| {
            let mut next = (*book).clone();
            let action = next.confirm();
            match &action {
                Some(BookingAction::Booked { slot_id, student_id }) => {
                    match student_id {
                        Some(student_id) => {
                            let name = next
                                .students()
                                .iter()
                                .find(|s| &s.id == student_id)
                                .map(|s| s.name.clone())
                                .unwrap_or_else(|| student_id.clone());
                            Logger::info_with_component(
                                "appointments",
                                &format!(
                                    "Booked slot {} for student {}",
                                    slot_id, name
                                ),
                            );
                        }
                        None => Logger::info_with_component(
                            "appointments",
                            &format!("Booked slot {}", slot_id),
                        ),
                    }
                }
                Some(BookingAction::Cancelled { slot_id }) => {
                    Logger::info_with_component(
                        "appointments",
                        &format!("Cancelled booking for slot {}", slot_id),
                    );
                }
                None => {}
            }
            book.set(next);
        })
    };
    let on_book_another = {
        let book = book.clone();
        Callback::from(move |_: ()| {
            let mut next = (*book).clone();
            next.book_another();
            book.set(next);
        })
    };

    let on_view_all = {
        let filter = filter.clone();
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            filter.set(DateFilter::All);
            query.set(String::new());
        })
    };

    let visible = book.visible_slots(*filter, query.as_str(), today());

    html! {
        <div class="page appointments-page">
            <section class="section appointments-toolbar">
                <SearchBar
                    placeholder="Search by supervisor name, date, or time..."
                    on_search={on_search}
                    on_clear={on_clear_search}
                />
                <button class="btn btn-secondary role-toggle-btn" onclick={on_toggle_role}>
                    {if is_supervisor {
                        "Switch to Student View"
                    } else {
                        "Switch to Supervisor View"
                    }}
                </button>
            </section>

            <section class="section appointments-hero">
                <span class="page-badge">{"🗓️ Appointment Booking"}</span>
                <h1>
                    {if is_supervisor {
                        "Schedule Meetings with Your Students"
                    } else {
                        "Schedule a Meeting with Your Personal Supervisor"
                    }}
                </h1>
                <p class="appointments-hero-text">
                    {if is_supervisor {
                        "Book appointments with your students to discuss their academic \
                         progress, wellbeing needs, or any concerns they may have."
                    } else {
                        "Book an appointment with your Personal Supervisor to discuss your \
                         academic progress, wellbeing needs, or any concerns you may have."
                    }}
                </p>
            </section>

            <section class="section appointments-body">
                <aside class="appointments-sidebar">
                    <div class="info-panel">
                        <h3>{"Meeting Types"}</h3>
                        <ul class="info-list">
                            <li>
                                <p class="info-name">{"Academic Progress Review"}</p>
                                <p class="info-note">{"45-60 minutes"}</p>
                            </li>
                            <li>
                                <p class="info-name">{"Wellbeing Check-in"}</p>
                                <p class="info-note">{"30-45 minutes"}</p>
                            </li>
                            <li>
                                <p class="info-name">{"Support Session"}</p>
                                <p class="info-note">{"60 minutes"}</p>
                            </li>
                        </ul>
                    </div>
                    <div class="info-panel">
                        <h3>{"What to Expect"}</h3>
                        <ul class="info-list info-list-bulleted">
                            <li>{"Arrive 5 minutes before your appointment"}</li>
                            <li>{"Bring your student ID"}</li>
                            <li>{"All sessions are confidential"}</li>
                            <li>{"Virtual options are available"}</li>
                            <li>{"24-hour cancellation policy"}</li>
                        </ul>
                    </div>
                </aside>

                <div class="appointments-main">
                    <div class="slot-list-panel">
                        <div class="slot-list-header">
                            <h2>
                                {if is_supervisor {
                                    "Book Student Appointments"
                                } else {
                                    "Available Appointments"
                                }}
                            </h2>
                            <select
                                class="date-filter-select"
                                onchange={on_filter_change}
                                value={filter.as_str()}
                            >
                                {for DateFilter::all_filters().into_iter().map(|f| html! {
                                    <option value={f.as_str()} selected={f == *filter}>
                                        {f.label()}
                                    </option>
                                })}
                            </select>
                        </div>

                        {if visible.is_empty() {
                            html! {
                                <div class="slot-list-empty">
                                    <div class="slot-list-empty-icon">{"📅"}</div>
                                    <h3>{"No appointments available"}</h3>
                                    <p>
                                        {"There are no available appointments for the \
                                         selected filter."}
                                    </p>
                                    <button class="btn btn-secondary" onclick={on_view_all}>
                                        {"View All Dates"}
                                    </button>
                                </div>
                            }
                        } else {
                            html! {
                                <AppointmentList
                                    book={(*book).clone()}
                                    visible_slots={visible}
                                    on_begin_booking={on_begin_booking}
                                    on_begin_cancel={on_begin_cancel}
                                    on_dismiss={on_dismiss}
                                    on_choose_student={on_choose_student}
                                    on_confirm={on_confirm}
                                    on_book_another={on_book_another}
                                />
                            }
                        }}
                    </div>

                    <div class="urgent-contact-panel">
                        <h3>{"Need to speak with your Senior Tutor?"}</h3>
                        <p>
                            {"If you need to speak with your Senior Tutor urgently, please \
                             contact the student support office."}
                        </p>
                        <a href="tel:+15551234567" class="btn btn-primary">
                            {"Contact Student Support"}
                        </a>
                    </div>
                </div>
            </section>
        </div>
    }
}
