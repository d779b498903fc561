// frontend_chakra_site/src/pages/about.rs
use yew::prelude::*;

use crate::components::button::{ButtonLink, ButtonSize, ButtonVariant};
use crate::components::icon::{Icon, IconView};
use crate::components::layout::Layout;
use crate::components::quality_certification::{CertificationVariant, QualityCertification};
use crate::components::reveal::{Reveal, RevealMotion, RevealTrigger};
use crate::components::section::{compose, Entrance};
use crate::config_file::FrontendConfig;
use crate::content::{Highlight, TeamMember, ValueItem, CTA_ACTIONS, HIGHLIGHTS, TEAM, VALUES};

pub const VALUES_ENTRANCE: Entrance = Entrance::Staggered {
    motion: RevealMotion::Rise(30),
    step_ms: 100,
};

pub const TEAM_ENTRANCE: Entrance = Entrance::Staggered {
    motion: RevealMotion::Grow(90),
    step_ms: 200,
};

fn value_card(value: &ValueItem, _index: usize) -> Html {
    html! {
        <>
            <div class="w-12 h-12 rounded-2xl bg-primary/20 flex items-center justify-center mb-6">
                <IconView icon={value.icon} class="w-6 h-6 text-primary" />
            </div>
            <h3 class="font-serif text-xl font-semibold mb-3">{ value.title }</h3>
            <p class="text-white/40 text-sm leading-relaxed">{ value.description }</p>
        </>
    }
}

fn team_card(member: &TeamMember, config: &FrontendConfig) -> Html {
    html! {
        <>
            <div class="relative w-40 h-40 rounded-2xl bg-gradient-to-br from-primary/10 to-primary/30 flex-shrink-0 overflow-hidden">
                <div class="absolute inset-0 flex items-center justify-center text-primary/40">
                    <IconView icon={Icon::Users} class="w-16 h-16" />
                </div>
                <img
                    src={config.asset(member.image)}
                    alt={member.name}
                    loading="lazy"
                    class="relative w-full h-full object-cover"
                />
            </div>
            <div class="text-center md:text-left">
                <h3 class="text-2xl font-serif font-bold text-foreground">{ member.name }</h3>
                <div class="text-primary font-medium mb-4">{ member.role }</div>
                <p class="text-muted-foreground text-sm leading-relaxed">{ member.bio }</p>
            </div>
        </>
    }
}

fn highlight_card(highlight: &Highlight, _index: usize) -> Html {
    html! {
        <>
            <div class="text-3xl font-bold text-foreground">{ highlight.value }</div>
            <div class="text-sm text-muted-foreground">{ highlight.label }</div>
        </>
    }
}

fn hero(config: &FrontendConfig) -> Html {
    let background = format!("background-image: url({})", config.asset("/hero-saffron.jpg"));

    html! {
        <section id="hero" class="relative py-24 md:py-32 overflow-hidden">
            <div class="absolute inset-0 bg-cover bg-center" style={background} />
            <div class="absolute inset-0 bg-[#3d0a0a]/90" />
            <div class="container mx-auto px-4 relative z-10 text-center">
                <Reveal trigger={RevealTrigger::Mount} motion={RevealMotion::Rise(20)} class="max-w-4xl mx-auto">
                    <span class="text-primary font-medium tracking-widest uppercase text-sm">
                        {"Agri + Technology Revolution"}
                    </span>
                    <h1 class="text-4xl md:text-6xl lg:text-7xl font-serif font-bold text-white mt-4 leading-tight">
                        {"Democratizing "}<span class="text-primary">{"Red Gold"}</span>
                    </h1>
                    <p class="text-white/80 mt-8 text-xl leading-relaxed max-w-2xl mx-auto">
                        {"Chakra Biotech LLP is an emerging Agri-Tech leader based in Jaipur, Rajasthan, pioneering the future of indoor aeroponic saffron cultivation."}
                    </p>
                </Reveal>
            </div>
        </section>
    }
}

fn mission_vision(config: &FrontendConfig) -> Html {
    html! {
        <section id="mission" class="py-24 bg-background">
            <div class="container mx-auto px-4">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <Reveal motion={RevealMotion::SlideFromLeft(50)} class="relative">
                        <img
                            src={config.asset("/saffron-field.jpg")}
                            alt="Indoor Saffron Lab"
                            class="rounded-3xl shadow-2xl relative z-10"
                        />
                        <div class="absolute -bottom-6 -right-6 w-48 h-48 bg-primary/10 rounded-full -z-0" />
                    </Reveal>

                    <Reveal motion={RevealMotion::SlideFromRight(50)} class="space-y-10">
                        <div class="space-y-4">
                            <h2 class="text-4xl font-serif font-bold text-foreground">{"Our Vision"}</h2>
                            <p class="text-muted-foreground text-lg leading-relaxed">
                                {"To build India's leading indoor saffron cultivation ecosystem, enabling high-quality \"Red Gold\" production in non-traditional regions through technology, self-reliance, and sustainable agri-innovation."}
                            </p>
                        </div>

                        <div class="space-y-4">
                            <h2 class="text-4xl font-serif font-bold text-foreground">{"Our Mission"}</h2>
                            <p class="text-muted-foreground text-lg leading-relaxed">
                                {"To empower farmers, agri-entrepreneurs, and institutions by introducing aeroponic and hydroponic saffron farming using controlled environments that replicate Kashmir-like conditions, creating profitable, scalable, and climate-resilient agriculture models in Rajasthan."}
                            </p>
                        </div>

                        <div class="grid grid-cols-2 sm:grid-cols-3 gap-8 pt-6">
                            { compose(HIGHLIGHTS, Entrance::Static, "space-y-1", highlight_card) }
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

fn technology() -> Html {
    html! {
        <section id="technology" class="py-24 bg-[#0a0a0a] text-white overflow-hidden relative">
            <div class="absolute top-0 right-0 w-1/2 h-full bg-primary/5 blur-3xl rounded-full translate-x-1/2" />
            <div class="container mx-auto px-4 relative z-10">
                <div class="max-w-3xl mb-16">
                    <h2 class="text-4xl md:text-5xl font-serif font-bold mb-6">{"Innovative Solutions"}</h2>
                    <p class="text-white/60 text-lg">
                        {"We address climate dependency and geographical limitations through Controlled Environment Agriculture (CEA)."}
                    </p>
                </div>

                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-8">
                    { compose(
                        VALUES,
                        VALUES_ENTRANCE,
                        "value-card bg-white/5 p-8 rounded-3xl border border-white/10 hover:bg-white/10 transition-colors",
                        value_card,
                    ) }
                </div>
            </div>
        </section>
    }
}

fn team(config: &FrontendConfig) -> Html {
    html! {
        <section id="team" class="py-24 bg-background">
            <div class="container mx-auto px-4">
                <Reveal motion={RevealMotion::Rise(20)} class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-serif font-bold text-foreground">{"Meet Our Leadership"}</h2>
                    <p class="text-muted-foreground mt-4 max-w-2xl mx-auto">
                        {"The experts driving the next generation of precision agriculture in India."}
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                    { compose(
                        TEAM,
                        TEAM_ENTRANCE,
                        "team-card flex flex-col md:flex-row gap-8 items-center bg-card p-8 rounded-3xl shadow-card hover:shadow-elevated transition-shadow border border-border/50",
                        |member: &TeamMember, _| team_card(member, config),
                    ) }
                </div>
            </div>
        </section>
    }
}

fn certification() -> Html {
    html! {
        <section id="certification" class="py-24 bg-cream-dark">
            <div class="container mx-auto px-4">
                <QualityCertification
                    variant={CertificationVariant::Full}
                    show_metrics={true}
                    show_certifications={true}
                    animated={true}
                    class="max-w-6xl mx-auto"
                />
            </div>
        </section>
    }
}

fn call_to_action() -> Html {
    let [explore, partner] = CTA_ACTIONS;

    html! {
        <section id="cta" class="py-24 relative overflow-hidden">
            <div class="absolute inset-0 bg-primary" />
            <div class="absolute inset-x-0 top-0 h-32 bg-gradient-to-b from-cream-dark to-transparent opacity-20" />
            <div class="container mx-auto px-4 text-center relative z-10">
                <Reveal motion={RevealMotion::Grow(95)}>
                    <h2 class="text-3xl md:text-5xl font-serif font-bold text-white">
                        {"Revolutionizing Saffron Cultivation"}
                    </h2>
                    <p class="text-white/80 mt-6 max-w-2xl mx-auto text-lg">
                        {"Join us in strengthening India's agri-innovation landscape. Experience the purest 'Red Gold' grown with precision and care."}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center mt-10">
                        <ButtonLink to={explore.to} size={ButtonSize::Large} class="bg-white text-primary hover:bg-white/90">
                            { explore.label }
                            <IconView icon={Icon::ArrowRight} class="w-4 h-4 ml-2" />
                        </ButtonLink>
                        <ButtonLink
                            to={partner.to}
                            size={ButtonSize::Large}
                            variant={ButtonVariant::Outline}
                            class="border-white text-white hover:bg-white/10"
                        >
                            { partner.label }
                        </ButtonLink>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let config = use_context::<FrontendConfig>().unwrap_or_default();

    html! {
        <Layout>
            { hero(&config) }
            { mission_vision(&config) }
            { technology() }
            { team(&config) }
            { certification() }
            { call_to_action() }
        </Layout>
    }
}
