use chrono::Utc;
use num_format::{Locale, ToFormattedString};
use yew::html::Scope;
use yew::prelude::*;

use common::display::admin::{AdminRow, ListingStats};
use common::model::listing::Listing;
use common::pages::Page;

use crate::app::loading;
use crate::components::helpers::locale_date;
use crate::tops_sheet::top_sheet::TopSheet;

use super::form::listing_form;
use super::messages::Msg;
use super::state::{Access, AdminDashboard, TableState};

pub fn view(dashboard: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    match dashboard.access {
        Access::Checking => loading(),
        Access::Denied => login_required(),
        Access::Granted => content(dashboard, ctx.link()),
    }
}

fn login_required() -> Html {
    html! {
        <div class="alert alert-warning text-center" id="accessMessage">
            <h4>{ "Login Required" }</h4>
            <p>
                { "Please " }
                <a href={Page::Login.file_name()}>{ "login" }</a>
                { " to access the admin dashboard." }
            </p>
        </div>
    }
}

fn content(dashboard: &AdminDashboard, link: &Scope<AdminDashboard>) -> Html {
    let dialog_title = if dashboard.editing.is_some() {
        "Edit Scholarship"
    } else {
        "Add New Scholarship"
    };

    html! {
        <div id="adminContent">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h1>{ "Admin Dashboard" }</h1>
                <div>
                    <button class="btn btn-outline-secondary me-2" onclick={link.callback(|_| Msg::Refresh)}>
                        { "Refresh" }
                    </button>
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                        { "Add Scholarship" }
                    </button>
                </div>
            </div>

            { statistics(&dashboard.table) }
            { table(&dashboard.table, link) }

            <TopSheet
                node_ref={dashboard.dialog_ref.clone()}
                title={dialog_title.to_string()}
                on_close={link.callback(|_| Msg::CloseDialog)}
            >
                { listing_form(dashboard, link) }
            </TopSheet>
        </div>
    }
}

fn statistics(table: &TableState) -> Html {
    let stats = match table {
        TableState::Loaded(listings) => ListingStats::compute(listings, Utc::now()),
        TableState::Loading | TableState::Failed => ListingStats::default(),
    };
    let cards = [
        ("Total Scholarships", stats.total, "primary"),
        ("Active", stats.active, "success"),
        ("Expired", stats.expired, "danger"),
        ("Categories", stats.categories, "info"),
    ];

    html! {
        <div class="row mb-4">
            { for cards.iter().map(|(label, count, colour)| html! {
                <div class="col-md-3 mb-3">
                    <div class={classes!("card", "text-white", format!("bg-{}", colour))}>
                        <div class="card-body">
                            <h6 class="card-title">{ *label }</h6>
                            <h3 class="mb-0">{ count.to_formatted_string(&Locale::en) }</h3>
                        </div>
                    </div>
                </div>
            }) }
        </div>
    }
}

fn table(table: &TableState, link: &Scope<AdminDashboard>) -> Html {
    let body = match table {
        TableState::Loading => message_row("Loading...", "text-center"),
        TableState::Failed => message_row("Error loading scholarships", "text-center text-danger"),
        TableState::Loaded(listings) if listings.is_empty() => {
            message_row("No scholarships found.", "text-center")
        }
        TableState::Loaded(listings) => rows(listings, link),
    };

    html! {
        <div class="table-responsive">
            <table class="table table-striped align-middle">
                <thead>
                    <tr>
                        <th>{ "Title" }</th>
                        <th>{ "Category" }</th>
                        <th>{ "Deadline" }</th>
                        <th>{ "Status" }</th>
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody id="scholarshipsTableBody">
                    { body }
                </tbody>
            </table>
        </div>
    }
}

fn message_row(text: &'static str, class: &'static str) -> Html {
    html! {
        <tr><td colspan="5" class={class}>{ text }</td></tr>
    }
}

fn rows(listings: &[Listing], link: &Scope<AdminDashboard>) -> Html {
    let now = Utc::now();
    listings
        .iter()
        .map(|listing| {
            let row = AdminRow::build(listing, now);
            let (status, status_class) = if row.expired {
                ("Expired", "badge bg-danger")
            } else {
                ("Active", "badge bg-success")
            };
            let edit_id = row.id.clone();
            let delete_id = row.id.clone();

            html! {
                <tr key={row.id.to_string()}>
                    <td>{ row.title.clone() }</td>
                    <td><span class="badge bg-info">{ row.category.clone() }</span></td>
                    <td>{ locale_date(row.deadline_raw.as_deref()) }</td>
                    <td><span class={status_class}>{ status }</span></td>
                    <td>
                        <button
                            class="btn btn-sm btn-outline-primary me-1"
                            onclick={link.callback(move |_| Msg::Edit(edit_id.clone()))}
                        >
                            { "Edit" }
                        </button>
                        <button
                            class="btn btn-sm btn-outline-danger"
                            onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}
                        >
                            { "Delete" }
                        </button>
                    </td>
                </tr>
            }
        })
        .collect()
}
