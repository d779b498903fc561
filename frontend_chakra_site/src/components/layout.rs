// frontend_chakra_site/src/components/layout.rs
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

const NAV: &[(&str, Route)] = &[
    ("Home", Route::Home),
    ("About", Route::About),
    ("Products", Route::Products),
    ("Contact", Route::Contact),
];

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with((), move |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });

    html! {
        <div class="min-h-screen flex flex-col">
            <header class="sticky top-0 z-50 bg-background/90 backdrop-blur border-b border-border/50">
                <nav class="container mx-auto px-4 h-16 flex items-center justify-between">
                    <Link<Route> to={Route::Home} classes="font-serif text-xl font-bold text-primary">
                        {"Chakra Biotech"}
                    </Link<Route>>
                    <ul class="flex gap-6 text-sm font-medium">
                        { for NAV.iter().map(|(label, route)| html! {
                            <li key={*label}>
                                <Link<Route> to={*route} classes="hover:text-primary transition-colors">
                                    { *label }
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </nav>
            </header>
            <main class="flex-grow">
                { for props.children.iter() }
            </main>
            <footer class="py-10 bg-[#0a0a0a] text-white/60 text-sm">
                <div class="container mx-auto px-4 flex flex-col md:flex-row justify-between gap-4">
                    <span>{"© Chakra Biotech LLP, Jaipur, Rajasthan"}</span>
                    <span>{"Indoor aeroponic saffron cultivation"}</span>
                </div>
            </footer>
        </div>
    }
}
