mod components;
mod config_file;
mod content;
mod pages;
mod router;

use crate::config_file::FrontendConfig;
use crate::router::AppRouter;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let config = use_state(FrontendConfig::cached);

    // Re-render with the served config once it arrives
    {
        let config = config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                config.set(config_file::load_config().await);
            });
            || ()
        });
    }

    html! {
        <ContextProvider<FrontendConfig> context={(*config).clone()}>
            <AppRouter />
        </ContextProvider<FrontendConfig>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
