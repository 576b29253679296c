use yew::{html, Children, Component, Context, Html, Properties};

/// Bootstrap column classes applied to every child.
const COLUMN_CLASS: &str = "col-md-6 col-lg-4 mb-4";

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    pub children: Children,
}

/// Responsive row of equally sized cards.
pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="row g-4">
                { for ctx.props().children.iter().map(|child| html! {
                    <div class={COLUMN_CLASS}>{ child }</div>
                }) }
            </div>
        }
    }
}
