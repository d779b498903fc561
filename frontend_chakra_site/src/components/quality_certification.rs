// frontend_chakra_site/src/components/quality_certification.rs
use yew::prelude::*;

use crate::components::icon::IconView;
use crate::components::reveal::{Reveal, RevealMotion};
use crate::components::section::{compose, Entrance};
use crate::content::{Certification, Metric, CERTIFICATIONS, METRICS};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CertificationVariant {
    #[default]
    Compact,
    Full,
}

#[derive(Properties, PartialEq)]
pub struct QualityCertificationProps {
    #[prop_or_default]
    pub variant: CertificationVariant,
    #[prop_or(true)]
    pub show_metrics: bool,
    #[prop_or(true)]
    pub show_certifications: bool,
    #[prop_or_default]
    pub animated: bool,
    #[prop_or_default]
    pub class: Classes,
}

fn entrance(animated: bool) -> Entrance {
    if animated {
        Entrance::Staggered {
            motion: RevealMotion::Rise(20),
            step_ms: 100,
        }
    } else {
        Entrance::Static
    }
}

fn metric_card(metric: &Metric, _index: usize) -> Html {
    html! {
        <>
            <div class="text-3xl font-bold text-primary">{ metric.value }</div>
            <div class="text-sm text-muted-foreground mt-1">{ metric.label }</div>
        </>
    }
}

fn certification_card(cert: &Certification, _index: usize) -> Html {
    html! {
        <>
            <div class="w-10 h-10 rounded-xl bg-primary/10 flex items-center justify-center flex-shrink-0">
                <IconView icon={cert.icon} class="w-5 h-5 text-primary" />
            </div>
            <div>
                <div class="font-semibold text-foreground">{ cert.name }</div>
                <p class="text-sm text-muted-foreground">{ cert.detail }</p>
            </div>
        </>
    }
}

#[function_component(QualityCertification)]
pub fn quality_certification(props: &QualityCertificationProps) -> Html {
    let entrance = entrance(props.animated);

    let heading = match props.variant {
        CertificationVariant::Full => html! {
            <div class="text-center mb-12">
                <h2 class="text-4xl md:text-5xl font-serif font-bold text-foreground">
                    {"Certified Quality"}
                </h2>
                <p class="text-muted-foreground mt-4 max-w-2xl mx-auto">
                    {"Every gram of our saffron is graded, tested and traceable back to the chamber it was grown in."}
                </p>
            </div>
        },
        CertificationVariant::Compact => html! {
            <h3 class="font-serif text-2xl font-bold text-foreground mb-6">{"Certified Quality"}</h3>
        },
    };

    let heading = if props.animated {
        html! { <Reveal motion={RevealMotion::Rise(20)}>{ heading }</Reveal> }
    } else {
        heading
    };

    html! {
        <div class={classes!("quality-certification", props.class.clone())}>
            { heading }
            if props.show_metrics {
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-6 mb-12">
                    { compose(METRICS, entrance, "bg-card p-6 rounded-2xl text-center shadow-card", metric_card) }
                </div>
            }
            if props.show_certifications {
                <div class="grid md:grid-cols-3 gap-6">
                    { compose(CERTIFICATIONS, entrance, "flex gap-4 items-start bg-card p-6 rounded-2xl border border-border/50", certification_card) }
                </div>
            }
        </div>
    }
}
