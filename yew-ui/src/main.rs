use log::Level;
use roomlink_ui::components::call_widget::CallWidget;
use yew::prelude::*;

#[function_component(App)]
fn app_component() -> Html {
    html! {
        <CallWidget/>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing logger");
    yew::Renderer::<App>::new().render();
}
