use crate::app::App;

mod app;
mod components;
mod config;
mod logging;
mod remote;
mod tops_sheet;

fn main() {
    logging::init(log::LevelFilter::Info);
    log::set_max_level(config::SETTINGS.log_level);
    yew::Renderer::<App>::new().render();
}
