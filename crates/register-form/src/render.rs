// File: src/render.rs
// Purpose: Server-side markup for the form, driven by the controller's state

use maud::{html, Markup};

use crate::form::{FieldView, RegisterForm};
use crate::state::Presentation;

/// Render one labelled input, plus its inline error when invalid
pub fn render_field(view: &FieldView<'_>) -> Markup {
    let field = view.field;
    let marker = if field.is_required() { "*" } else { "" };

    html! {
        div.field data-field=(field.as_str()) data-state=(view.presentation.tag()) {
            label for=(field.as_str()) {
                (marker) (field.label()) ":"
            }
            input
                id=(field.as_str())
                name=(field.as_str())
                type=(field.input_type())
                value=(view.value)
                required[field.is_required()];
            @if let Presentation::Error(message) = view.presentation {
                p.field-error { (message) }
            }
        }
    }
}

/// Render the whole form. Styling is left to the host page.
pub fn render_form(form: &RegisterForm) -> Markup {
    html! {
        form.register-form method="post" novalidate {
            h2.title { "Register Form" }
            @for view in form.fields() {
                (render_field(&view))
            }
            input type="submit" value="submit";
        }
    }
}
