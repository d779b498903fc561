// frontend_chakra_site/src/content.rs
use std::collections::HashSet;

use crate::components::icon::Icon;
use crate::router::Route;

/// Anything rendered as a repeated card. The key must be unique within its table.
pub trait Keyed {
    fn key(&self) -> &'static str;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueItem {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Certification {
    pub icon: Icon,
    pub name: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CtaAction {
    pub label: &'static str,
    pub to: Route,
}

impl Keyed for ValueItem {
    fn key(&self) -> &'static str {
        self.title
    }
}

impl Keyed for TeamMember {
    fn key(&self) -> &'static str {
        self.name
    }
}

impl Keyed for Highlight {
    fn key(&self) -> &'static str {
        self.label
    }
}

impl Keyed for Metric {
    fn key(&self) -> &'static str {
        self.label
    }
}

impl Keyed for Certification {
    fn key(&self) -> &'static str {
        self.name
    }
}

impl Keyed for CtaAction {
    fn key(&self) -> &'static str {
        self.label
    }
}

pub const VALUES: &[ValueItem] = &[
    ValueItem {
        icon: Icon::Leaf,
        title: "Aeroponic Innovation",
        description: "Soil-less cultivation using advanced precision climate-controlled systems.",
    },
    ValueItem {
        icon: Icon::ShieldCheck,
        title: "Resource Efficiency",
        description: "Reduced water usage and optimized nutrient delivery for sustainable agriculture.",
    },
    ValueItem {
        icon: Icon::Award,
        title: "Kashmir Quality",
        description: "Replicating Kashmir-like conditions to produce premium 'Red Gold' anywhere.",
    },
    ValueItem {
        icon: Icon::Users,
        title: "Agri-Empowerment",
        description: "Democratizing high-value saffron farming for entrepreneurs and institutions.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Mr. Siddhartha Sharma",
        role: "Founder & Lead Developer",
        bio: "M.Sc. (IT), Manipal University. Focused on agri-data systems, aeroponic research, and strategic partnerships.",
        image: "/team-siddhartha.jpg",
    },
    TeamMember {
        name: "Mr. Ankit Sharma",
        role: "Operations & Quality",
        bio: "Expert in biotechnology and modern farming systems. Leads R&D, aeroponic operations, and cultivation optimization.",
        image: "/team-ankit.jpg",
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight { value: "Soil-less", label: "Cultivation Method" },
    Highlight { value: "CEA", label: "Tech Ecosystem" },
    Highlight { value: "Jaipur", label: "Headquarters" },
];

pub const METRICS: &[Metric] = &[
    Metric { value: "250+", label: "Crocin Strength (E440)" },
    Metric { value: "100%", label: "Pesticide Free" },
    Metric { value: "< 10%", label: "Moisture Content" },
    Metric { value: "Grade I", label: "ISO 3632 Category" },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        icon: Icon::ShieldCheck,
        name: "ISO 3632 Tested",
        detail: "Every harvest is lab-graded for colour, aroma and flavour.",
    },
    Certification {
        icon: Icon::Award,
        name: "FSSAI Compliant",
        detail: "Processed and packed under food safety regulations.",
    },
    Certification {
        icon: Icon::Leaf,
        name: "Residue Free",
        detail: "Grown indoors without soil, pesticides or chemical sprays.",
    },
];

pub const CTA_ACTIONS: [CtaAction; 2] = [
    CtaAction { label: "Explore Pure Saffron", to: Route::Products },
    CtaAction { label: "Partner With Us", to: Route::Contact },
];

/// Returns the first rendering key that appears more than once.
pub fn duplicate_key<T: Keyed>(items: &[T]) -> Option<&'static str> {
    let mut seen = HashSet::new();
    items.iter().map(Keyed::key).find(|key| !seen.insert(*key))
}
