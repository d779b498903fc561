// frontend_chakra_site/src/router.rs
use crate::components::layout::Layout;
use crate::pages::about::About;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Routable, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/products")]
    Products,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn placeholder(title: &'static str, blurb: &'static str) -> Html {
    html! {
        <Layout>
            <section class="py-24 container mx-auto px-4 text-center">
                <h1 class="text-4xl font-serif font-bold text-foreground">{ title }</h1>
                <p class="text-muted-foreground mt-4">{ blurb }</p>
            </section>
        </Layout>
    }
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::About => html! { <About /> },
        Route::Products => placeholder("Pure Saffron", "Our product catalogue is on its way."),
        Route::Contact => placeholder("Partner With Us", "Reach out to discuss aeroponic saffron partnerships."),
        Route::NotFound => html! { <h1>{ "404 - Page not found" }</h1> },
    }
}
