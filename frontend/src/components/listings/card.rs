use yew::prelude::*;

use common::display::card::CardView;

pub fn listing_card(card: &CardView) -> Html {
    let loading = card.lazy_image.then_some("lazy");
    let deadline_class = if card.deadline.is_passed() {
        "card-text text-danger"
    } else {
        "card-text"
    };

    html! {
        <div class="card h-100 shadow-sm">
            <img
                src={card.image_src.clone()}
                class="card-img-top"
                alt={card.title.clone()}
                style="height: 150px; object-fit: cover;"
                {loading}
            />
            <div class="card-body d-flex flex-column">
                <span class="badge bg-info mb-2 align-self-start">{ card.badge.clone() }</span>
                <h5 class="card-title">{ card.title.clone() }</h5>
                <p class="card-text">
                    <strong>{ format!("{}:", card.host_label) }</strong>{ " " }{ card.host.clone() }
                </p>
                if let Some(summary) = &card.summary {
                    <p class="card-text">{ summary.clone() }</p>
                }
                <p class={deadline_class}>
                    <strong>{ "Deadline:" }</strong>{ " " }{ card.deadline.to_string() }
                    if card.urgent {
                        <span class="badge bg-danger ms-2">{ "Urgent" }</span>
                    }
                </p>
                <div class="mt-auto">
                    <a href={card.detail_href.clone()} class="btn btn-outline-primary me-2">
                        { "View Details" }
                    </a>
                    <a href={card.apply_href.clone()} target="_blank" class={card.apply_class}>
                        { card.apply_label }
                    </a>
                </div>
            </div>
        </div>
    }
}
