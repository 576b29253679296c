use gloo_timers::callback::Timeout;
use uuid::Uuid;
use web_sys::HtmlElement;
use yew::{html, Callback, Component, Context, Html, NodeRef, Properties};

/// Sheet sliding down from the top of the viewport, used for dialogs.
pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub title: String,
    /// Fired by the close button.
    #[prop_or_default]
    pub on_close: Callback<()>,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.reform(|_| ());
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                <div class="top-sheet-header d-flex justify-content-between align-items-center mb-3">
                    <h5 class="mb-0">{ props.title.clone() }</h5>
                    <button type="button" class="btn-close" aria-label="Close" onclick={on_close}></button>
                </div>
                { props.children.clone() }
            </div>
        }
    }
}

const SHOW_CLASS: &str = "show";

fn toggle(top_sheet_ref: &NodeRef, show: bool) {
    if let Some(top_sheet) = top_sheet_ref.cast::<HtmlElement>() {
        // Delayed so the transition starts after the sheet is laid out.
        Timeout::new(50, move || {
            let classes = top_sheet.class_list();
            let result = if show {
                classes.add_1(SHOW_CLASS)
            } else {
                classes.remove_1(SHOW_CLASS)
            };
            if let Err(e) = result {
                log::error!("Could not toggle top sheet {}: {e:?}", top_sheet.id());
            }
        })
        .forget();
    }
}

pub fn open_top_sheet(top_sheet_ref: &NodeRef) {
    toggle(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: &NodeRef) {
    toggle(top_sheet_ref, false);
}
