//! The car form and the modal dialog that hosts it.
//!
//! Validation error responses swap only the form element (`hx-target="this"`),
//! so the alert and the inline errors all live inside the `<form>` tag.
use maud::{Markup, html};

use crate::{
    alert::Alert,
    car::{
        CarForm, Mode, TransmissionType, ValidationErrors, VehicleSize,
        validation::{MIN_MSRP, MIN_YEAR},
    },
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_ERROR_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, MODAL_OVERLAY_STYLE, MODAL_PANEL_STYLE, loading_spinner,
    },
};

/// The modal dialog hosting the car form.
///
/// Every render seeds the form and clears old errors, so opening the modal
/// for car A, then car B, then car A again reproduces identical state.
pub fn car_modal(
    mode: &Mode,
    form: &CarForm,
    errors: &ValidationErrors,
    alert: Option<Alert>,
    max_year: i32,
) -> Markup {
    let title = match mode {
        Mode::Create => "Create a New Car",
        Mode::Edit(_) => "Edit Car",
    };

    html! {
        div class=(MODAL_OVERLAY_STYLE)
        {
            div class=(MODAL_PANEL_STYLE)
            {
                div class="flex items-center justify-between"
                {
                    h2 class="text-xl font-bold" { (title) }

                    (close_button())
                }

                (car_form_view(mode, form, errors, alert, max_year))
            }
        }
    }
}

/// The modal dialog shown when the car to edit could not be loaded.
pub fn car_modal_error(message: &str, details: &str) -> Markup {
    html! {
        div class=(MODAL_OVERLAY_STYLE)
        {
            div class=(MODAL_PANEL_STYLE)
            {
                (Alert::error(message, details).into_html())

                (close_button())
            }
        }
    }
}

fn close_button() -> Markup {
    html! {
        button
            type="button"
            class=(BUTTON_SECONDARY_STYLE)
            onclick="document.getElementById('car-modal').replaceChildren()"
        {
            "Close"
        }
    }
}

/// The car form element with the current field values, inline validation
/// errors, and an optional alert about the previous submission.
pub fn car_form_view(
    mode: &Mode,
    form: &CarForm,
    errors: &ValidationErrors,
    alert: Option<Alert>,
    max_year: i32,
) -> Markup {
    let (post_endpoint, put_endpoint, submit_label) = match mode {
        Mode::Create => (Some(endpoints::CARS_API.to_owned()), None, "Create"),
        Mode::Edit(car_id) => (
            None,
            Some(endpoints::format_endpoint(endpoints::PUT_CAR, car_id)),
            "Save",
        ),
    };

    html! {
        form
            hx-post=[post_endpoint]
            hx-put=[put_endpoint]
            hx-target="this"
            hx-swap="outerHTML"
            hx-indicator="#indicator"
            hx-disabled-elt="#submit-button"
            class="space-y-4"
        {
            @if let Some(alert) = alert
            {
                (alert.into_html())
            }

            div
            {
                label for="make" class=(FORM_LABEL_STYLE) { "Make" }

                input
                    type="text"
                    name="make"
                    id="make"
                    placeholder="Make"
                    value=(form.make)
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);

                @if let Some(error_message) = &errors.make
                {
                    p class=(FORM_ERROR_STYLE) { (error_message) }
                }
            }

            div
            {
                label for="model" class=(FORM_LABEL_STYLE) { "Model" }

                input
                    type="text"
                    name="model"
                    id="model"
                    placeholder="Model"
                    value=(form.model)
                    class=(FORM_TEXT_INPUT_STYLE);

                @if let Some(error_message) = &errors.model
                {
                    p class=(FORM_ERROR_STYLE) { (error_message) }
                }
            }

            div
            {
                label for="transmission_type" class=(FORM_LABEL_STYLE) { "Transmission Type" }

                select
                    name="transmission_type"
                    id="transmission_type"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "Select a transmission type" }

                    @for transmission_type in TransmissionType::ALL {
                        @if form.transmission_type == transmission_type.as_str() {
                            option value=(transmission_type) selected { (transmission_type) }
                        } @else {
                            option value=(transmission_type) { (transmission_type) }
                        }
                    }
                }

                @if let Some(error_message) = &errors.transmission_type
                {
                    p class=(FORM_ERROR_STYLE) { (error_message) }
                }
            }

            div
            {
                label for="vehicle_size" class=(FORM_LABEL_STYLE) { "Size" }

                select
                    name="vehicle_size"
                    id="vehicle_size"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "Select a size" }

                    @for vehicle_size in VehicleSize::ALL {
                        @if form.vehicle_size == vehicle_size.as_str() {
                            option value=(vehicle_size) selected { (vehicle_size) }
                        } @else {
                            option value=(vehicle_size) { (vehicle_size) }
                        }
                    }
                }

                @if let Some(error_message) = &errors.vehicle_size
                {
                    p class=(FORM_ERROR_STYLE) { (error_message) }
                }
            }

            div
            {
                label for="vehicle_style" class=(FORM_LABEL_STYLE) { "Style" }

                input
                    type="text"
                    name="vehicle_style"
                    id="vehicle_style"
                    placeholder="Style"
                    value=(form.vehicle_style)
                    class=(FORM_TEXT_INPUT_STYLE);

                @if let Some(error_message) = &errors.vehicle_style
                {
                    p class=(FORM_ERROR_STYLE) { (error_message) }
                }
            }

            div class="flex gap-4"
            {
                div class="flex-1"
                {
                    label for="year" class=(FORM_LABEL_STYLE) { "Year" }

                    input
                        type="number"
                        name="year"
                        id="year"
                        min=(MIN_YEAR)
                        max=(max_year)
                        step="1"
                        value=(form.year)
                        class=(FORM_TEXT_INPUT_STYLE);

                    @if let Some(error_message) = &errors.year
                    {
                        p class=(FORM_ERROR_STYLE) { (error_message) }
                    }
                }

                div class="flex-1"
                {
                    label for="msrp" class=(FORM_LABEL_STYLE) { "MSRP" }

                    input
                        type="number"
                        name="msrp"
                        id="msrp"
                        min=(MIN_MSRP)
                        step="1"
                        value=(form.msrp)
                        class=(FORM_TEXT_INPUT_STYLE);

                    @if let Some(error_message) = &errors.msrp
                    {
                        p class=(FORM_ERROR_STYLE) { (error_message) }
                    }
                }
            }

            button
                type="submit" id="submit-button" tabindex="0"
                class=(format!("w-full {BUTTON_PRIMARY_STYLE}"))
            {
                span class="inline htmx-indicator" id="indicator"
                {
                    (loading_spinner())
                }
                (submit_label)
            }
        }
    }
}
