//! Fields of the create/edit dialog.

use yew::html::Scope;
use yew::prelude::*;

use common::display::admin::FormField;
use common::markdown::render_details;

use crate::components::helpers::{input_value, textarea_value};

use super::messages::{DetailsTab, Msg};
use super::state::AdminDashboard;

const REQUIRED: [FormField; 4] = [
    FormField::Title,
    FormField::Category,
    FormField::ApplyLink,
    FormField::Deadline,
];

pub fn listing_form(dashboard: &AdminDashboard, link: &Scope<AdminDashboard>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form id="addScholarshipForm" {onsubmit}>
            { for FormField::ALL.iter().map(|field| field_group(dashboard, link, *field)) }
            <div class="d-flex justify-content-end gap-2">
                <button type="button" class="btn btn-secondary" onclick={link.callback(|_| Msg::CloseDialog)}>
                    { "Cancel" }
                </button>
                <button type="submit" class="btn btn-primary" id="submitScholarshipBtn" disabled={dashboard.saving}>
                    { dashboard.submit_label() }
                </button>
            </div>
        </form>
    }
}

fn field_group(dashboard: &AdminDashboard, link: &Scope<AdminDashboard>, field: FormField) -> Html {
    let value = dashboard.form.get(field).to_string();
    let required = REQUIRED.contains(&field);
    let id = format!("field-{}", field.name());

    let control = match field {
        FormField::Details => return details_group(dashboard, link, value),
        _ if field.is_multiline() => html! {
            <textarea
                class="form-control"
                id={id.clone()}
                name={field.name()}
                rows="3"
                value={value}
                oninput={link.callback(move |e: InputEvent| Msg::SetField(field, textarea_value(e)))}
            />
        },
        _ => html! {
            <input
                class="form-control"
                id={id.clone()}
                name={field.name()}
                type={field.input_type()}
                value={value}
                {required}
                oninput={link.callback(move |e: InputEvent| Msg::SetField(field, input_value(e)))}
            />
        },
    };

    html! {
        <div class="mb-3">
            <label class="form-label" for={id}>{ field.label() }</label>
            { control }
        </div>
    }
}

/// Long-form body with an editor/preview toggle.
fn details_group(dashboard: &AdminDashboard, link: &Scope<AdminDashboard>, value: String) -> Html {
    let tab = dashboard.details_tab;
    let tab_button = |label: &'static str, target: DetailsTab| {
        let class = classes!("nav-link", (tab == target).then_some("active"));
        let onclick = link.callback(move |e: MouseEvent| {
            e.prevent_default();
            Msg::SetDetailsTab(target)
        });
        html! {
            <li class="nav-item">
                <a class={class} href="#" {onclick}>{ label }</a>
            </li>
        }
    };

    let pane = match tab {
        DetailsTab::Editor => html! {
            <textarea
                class="form-control"
                id="field-details"
                name={FormField::Details.name()}
                rows="8"
                value={value}
                oninput={link.callback(|e: InputEvent| Msg::SetField(FormField::Details, textarea_value(e)))}
            />
        },
        DetailsTab::Preview => {
            let rendered = Html::from_html_unchecked(AttrValue::from(render_details(&value)));
            html! {
                <div class="border rounded p-3 scholarship-details">{ rendered }</div>
            }
        }
    };

    html! {
        <div class="mb-3">
            <label class="form-label" for="field-details">{ FormField::Details.label() }</label>
            <ul class="nav nav-tabs mb-2">
                { tab_button("Editor", DetailsTab::Editor) }
                { tab_button("Preview", DetailsTab::Preview) }
            </ul>
            { pane }
        </div>
    }
}
