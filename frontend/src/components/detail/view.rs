use yew::prelude::*;

use common::display::detail::DetailView;
use common::pages::Page;

use crate::components::helpers::locale_date;

pub fn not_found() -> Html {
    html! {
        <div class="alert alert-danger text-center" role="alert">
            <h4 class="alert-heading">{ "Scholarship Not Found" }</h4>
            <p>{ "The scholarship you're looking for doesn't exist or may have been removed." }</p>
            <hr />
            <a href={Page::Home.file_name()} class="btn btn-primary">{ "Back to Home" }</a>
        </div>
    }
}

pub fn detail(detail: &DetailView) -> Html {
    // Rendered from escaped Markdown, never from raw row HTML.
    let body = Html::from_html_unchecked(AttrValue::from(detail.body_html.clone()));

    html! {
        <div class="row">
            <div class="col-lg-8 mx-auto">
                <img
                    src={detail.image_src.clone()}
                    alt={detail.title.clone()}
                    class="scholarship-image rounded mb-4"
                />

                <div class="d-flex justify-content-between align-items-start mb-4">
                    <span class="badge bg-info fs-6">{ detail.category.clone() }</span>
                    <span class={classes!("badge", format!("bg-{}", detail.deadline_class), "deadline-badge")}>
                        { detail.deadline.to_string() }
                    </span>
                </div>

                <h1 class="mb-4">{ detail.title.clone() }</h1>

                <div class="card detail-card mb-4">
                    <div class="card-body">
                        <h5 class="card-title mb-4">{ "Scholarship Details" }</h5>
                        <div class="row">
                            <div class="col-md-6">
                                { labelled("🏫 Host University:", detail.host_university.clone()) }
                                { labelled("🌍 Host Country:", detail.host_country.clone()) }
                            </div>
                            <div class="col-md-6">
                                { labelled("📅 Application Deadline:", locale_date(detail.deadline_raw.as_deref())) }
                                { labelled("📋 Scholarship Type:", detail.category.clone()) }
                            </div>
                        </div>
                    </div>
                </div>

                <div class="card detail-card mb-4">
                    <div class="card-body">
                        <h5 class="card-title mb-3">{ "Description" }</h5>
                        <div class="scholarship-details" style="line-height: 1.6;">
                            { body }
                        </div>
                        if let Some(summary) = &detail.summary {
                            <div class="mt-4">
                                <h6><strong>{ "Short Summary:" }</strong></h6>
                                <p class="mb-0">{ summary.clone() }</p>
                            </div>
                        }
                    </div>
                </div>

                <div class="d-grid gap-2 d-md-flex justify-content-md-center mb-5">
                    <a href={detail.apply_href.clone()} target="_blank" class="btn btn-primary btn-lg me-md-2">
                        { "📝 Apply Now" }
                    </a>
                    <a href={Page::Home.file_name()} class="btn btn-outline-secondary btn-lg">
                        { "← Back to Scholarships" }
                    </a>
                </div>
            </div>
        </div>
    }
}

fn labelled(label: &'static str, value: String) -> Html {
    html! {
        <p><strong>{ label }</strong><br />{ value }</p>
    }
}
