use shared::{
    AppointmentBook, AppointmentSlot, BookingStatus, Role, SelectionMode,
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::services::date_utils::format_display_date;

#[derive(Properties, PartialEq)]
pub struct AppointmentListProps {
    pub book: AppointmentBook,
    /// Slots to render, already filtered by the hosting page.
    pub visible_slots: Vec<AppointmentSlot>,
    pub on_begin_booking: Callback<String>,
    pub on_begin_cancel: Callback<String>,
    pub on_dismiss: Callback<()>,
    pub on_choose_student: Callback<String>,
    pub on_confirm: Callback<()>,
    pub on_book_another: Callback<()>,
}

/// Purely presentational slot list plus the confirmation modal and the
/// post-booking success panel. All state lives in the hosting page's
/// [`AppointmentBook`].
#[function_component(AppointmentList)]
pub fn appointment_list(props: &AppointmentListProps) -> Html {
    if props.book.status() == BookingStatus::Success {
        return success_panel(props);
    }

    html! {
        <>
            <div class="slot-grid">
                {for props.visible_slots.iter().map(|slot| slot_card(props, slot))}
            </div>
            {confirmation_modal(props)}
        </>
    }
}

fn slot_card(props: &AppointmentListProps, slot: &AppointmentSlot) -> Html {
    let student_name = slot.student.as_deref().and_then(|id| {
        props
            .book
            .students()
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.clone())
    });

    let action = if slot.available {
        let on_begin_booking = props.on_begin_booking.clone();
        let slot_id = slot.id.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_begin_booking.emit(slot_id.clone()));
        html! {
            <button class="btn btn-primary slot-book-btn" {onclick}>{"Book Slot"}</button>
        }
    } else {
        let on_begin_cancel = props.on_begin_cancel.clone();
        let slot_id = slot.id.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_begin_cancel.emit(slot_id.clone()));
        html! {
            <button class="btn btn-secondary slot-cancel-btn" {onclick}>
                {"Cancel Booking"}
            </button>
        }
    };

    html! {
        <div class={classes!("slot-card", (!slot.available).then_some("slot-card-booked"))}>
            <div class="slot-card-header">
                <span class="slot-date">{format_display_date(&slot.date)}</span>
                <span class={classes!(
                    "slot-badge",
                    if slot.available { "slot-badge-open" } else { "slot-badge-booked" },
                )}>
                    {if slot.available { "Available" } else { "Booked" }}
                </span>
            </div>
            <div class="slot-time">{format!("{} - {}", slot.start_time, slot.end_time)}</div>
            <div class="slot-supervisor">{&slot.supervisor}</div>
            {if props.book.role() == Role::Supervisor {
                if let Some(name) = &student_name {
                    html! { <div class="slot-student">{"Booked for "}{name}</div> }
                } else { html! {} }
            } else { html! {} }}
            {action}
        </div>
    }
}

fn confirmation_modal(props: &AppointmentListProps) -> Html {
    let Some(selection) = props.book.selection() else {
        return html! {};
    };
    let Some(slot) = props.book.selected_slot() else {
        return html! {};
    };

    let on_backdrop = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    // Keep clicks inside the dialog from reaching the backdrop.
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let (title, confirm_label) = match selection.mode {
        SelectionMode::Book => ("Confirm Booking", "Confirm"),
        SelectionMode::Cancel => ("Cancel This Booking?", "Yes, Cancel It"),
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal booking-modal" onclick={swallow_click}>
                <h3 class="modal-title">{title}</h3>

                <div class="modal-slot-summary">
                    <p>{format_display_date(&slot.date)}</p>
                    <p>{format!("{} - {}", slot.start_time, slot.end_time)}</p>
                    <p>{&slot.supervisor}</p>
                </div>

                {if selection.mode == SelectionMode::Book
                    && props.book.role() == Role::Supervisor
                {
                    student_picker(props)
                } else { html! {} }}

                {if props.book.status() == BookingStatus::Error {
                    html! {
                        <div class="form-message error">
                            {"Something went wrong. Please try again."}
                        </div>
                    }
                } else { html! {} }}

                <div class="modal-actions">
                    <button class="btn btn-secondary" onclick={on_dismiss}>{"Go Back"}</button>
                    <button class="btn btn-primary" onclick={on_confirm}>{confirm_label}</button>
                </div>
            </div>
        </div>
    }
}

fn student_picker(props: &AppointmentListProps) -> Html {
    let on_choose_student = props.on_choose_student.clone();
    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_choose_student.emit(select.value());
    });
    let chosen = props.book.chosen_student();

    html! {
        <div class="form-group">
            <label for="booking-student">{"Booking on behalf of"}</label>
            <select id="booking-student" class="student-select" {onchange}>
                {for props.book.students().iter().map(|student| {
                    html! {
                        <option
                            value={student.id.clone()}
                            selected={chosen == Some(student.id.as_str())}
                        >
                            {&student.name}
                        </option>
                    }
                })}
            </select>
        </div>
    }
}

fn success_panel(props: &AppointmentListProps) -> Html {
    let on_book_another = {
        let on_book_another = props.on_book_another.clone();
        Callback::from(move |_: MouseEvent| on_book_another.emit(()))
    };

    html! {
        <div class="booking-success">
            <div class="booking-success-icon">{"✓"}</div>
            <h3 class="booking-success-title">{"Appointment Booked!"}</h3>
            <p class="booking-success-text">
                {"Your appointment has been confirmed. You'll receive a reminder before it starts."}
            </p>
            <button class="btn btn-primary" onclick={on_book_another}>
                {"Book Another Appointment"}
            </button>
        </div>
    }
}
