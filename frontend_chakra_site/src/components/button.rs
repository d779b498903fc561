// frontend_chakra_site/src/components/button.rs
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Large,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-10 px-4 py-2",
            ButtonSize::Large => "h-12 px-8 text-base",
        }
    }
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Solid => "bg-primary text-primary-foreground hover:bg-primary/90",
            ButtonVariant::Outline => "border border-input bg-transparent hover:bg-accent",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonLinkProps {
    pub to: Route,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A navigation link that looks like a button.
#[function_component(ButtonLink)]
pub fn button_link(props: &ButtonLinkProps) -> Html {
    let classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "rounded-md",
        "font-medium",
        "transition-colors",
        props.size.classes(),
        props.variant.classes(),
        props.class.clone()
    );

    html! {
        <Link<Route> to={props.to} classes={classes}>
            { for props.children.iter() }
        </Link<Route>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;
    use yew_router::history::{AnyHistory, MemoryHistory};

    #[function_component(OutlineContactLink)]
    fn outline_contact_link() -> Html {
        html! {
            <Router history={AnyHistory::from(MemoryHistory::new())}>
                <ButtonLink to={Route::Contact} size={ButtonSize::Large} variant={ButtonVariant::Outline} class="text-white">
                    {"Partner With Us"}
                </ButtonLink>
            </Router>
        }
    }

    #[tokio::test]
    async fn renders_link_with_size_and_variant_classes() {
        let html = LocalServerRenderer::<OutlineContactLink>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains(r#"href="/contact""#));
        assert!(html.contains("Partner With Us"));
        for class in ["inline-flex", "rounded-md", "h-12", "border-input", "text-white"] {
            assert!(html.contains(class), "missing class {class}");
        }
        assert!(!html.contains("bg-primary"));
    }
}
