use finance_tracker_frontend::components::App;
use finance_tracker_frontend::config;

fn main() {
    let settings = config::load_settings();
    if let Some(level) = settings.level_filter().to_level() {
        // Only the first logger installed on a page takes effect.
        console_log::init_with_level(level).ok();
    }
    log::info!("Starting finance tracker frontend");
    yew::Renderer::<App>::new().render();
}
