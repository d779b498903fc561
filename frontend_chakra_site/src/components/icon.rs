// frontend_chakra_site/src/components/icon.rs
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

/// Symbolic icon references used by the content tables. Rendered as inline
/// lucide-style SVG so the page ships without an icon font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Leaf,
    ShieldCheck,
    Award,
    Users,
    ArrowRight,
}

impl Icon {
    fn body(self) -> &'static str {
        match self {
            Icon::Leaf => concat!(
                r#"<path d="M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z"/>"#,
                r#"<path d="M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12"/>"#,
            ),
            Icon::ShieldCheck => concat!(
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#,
                r#"<path d="m9 12 2 2 4-4"/>"#,
            ),
            Icon::Award => concat!(
                r#"<circle cx="12" cy="8" r="6"/>"#,
                r#"<path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"/>"#,
            ),
            Icon::Users => concat!(
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>"#,
                r#"<circle cx="9" cy="7" r="4"/>"#,
                r#"<path d="M22 21v-2a4 4 0 0 0-3-3.87"/>"#,
                r#"<path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
            ),
            Icon::ArrowRight => concat!(
                r#"<path d="M5 12h14"/>"#,
                r#"<path d="m12 5 7 7-7 7"/>"#,
            ),
        }
    }

    pub fn to_svg(self, class: &str) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="{}" aria-hidden="true">{}</svg>"#,
            class,
            self.body()
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or(AttrValue::Static("w-6 h-6"))]
    pub class: AttrValue,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    Html::from_html_unchecked(AttrValue::from(props.icon.to_svg(&props.class)))
}
