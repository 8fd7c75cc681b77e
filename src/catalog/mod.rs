//! Static company content: services, the technology showcase, case studies
//! and client names. The technology groups double as the list of add-ons the
//! calculator offers.

use clap::ValueEnum;

/// Browsable parts of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Services,
    Technologies,
    #[value(name = "cases")]
    CaseStudies,
    Clients,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Services,
        Section::Technologies,
        Section::CaseStudies,
        Section::Clients,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Services => "Services",
            Section::Technologies => "Technologies & Tools",
            Section::CaseStudies => "Case Studies",
            Section::Clients => "Partners & Clients",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub tag: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechnologyGroup {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub client: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub result: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web & Mobile Development",
        description: "Custom applications, fast websites and polished user experiences for web and mobile, from prototype to deployment.",
        tag: "Web",
    },
    Service {
        title: "Cybersecurity",
        description: "Security audits, data protection, compliance and hands-on support to secure your digital infrastructure.",
        tag: "Security",
    },
    Service {
        title: "Cloud & Infrastructure",
        description: "Cloud migration, scalable architecture and infrastructure management for performance and availability.",
        tag: "Cloud",
    },
    Service {
        title: "IT Consulting & Digital Transformation",
        description: "Strategic guidance, technical audits and a roadmap to digitise your business processes.",
        tag: "Strategy",
    },
];

pub const TECHNOLOGY_GROUPS: &[TechnologyGroup] = &[
    TechnologyGroup {
        name: "Languages",
        items: &["JavaScript", "TypeScript", "Python", "PHP", "Java"],
    },
    TechnologyGroup {
        name: "Frameworks",
        items: &["React", "Vue.js", "FastAPI", "Laravel", "Node.js"],
    },
    TechnologyGroup {
        name: "DevOps & Cloud",
        items: &["Docker", "AWS", "Git", "CI/CD", "Kubernetes"],
    },
];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "Multi-vendor E-commerce Platform",
        client: "Retail sector",
        challenge: "A local marketplace where 200+ vendors manage stock and orders in real time.",
        solution: "A web and mobile platform with integrated payments, a vendor dashboard and a courier app.",
        result: "15,000+ monthly transactions, 98% user satisfaction, processing time down 60%.",
    },
    CaseStudy {
        title: "Banking Infrastructure Hardening",
        client: "Financial institution",
        challenge: "Compliance with international security standards and protection against cyber threats.",
        solution: "Full audit, next-generation firewalls, staff training and a security operations centre.",
        result: "Zero security incidents in 18 months, ISO 27001 certification, 75% fewer vulnerabilities.",
    },
];

pub const CLIENTS: &[&str] = &[
    "LoremCorp",
    "IpsumTech",
    "DolorInc",
    "SitAmet",
    "Consectetur",
    "Adipiscing",
];

/// Every showcased technology in display order.
pub fn technologies() -> impl Iterator<Item = &'static str> {
    TECHNOLOGY_GROUPS
        .iter()
        .flat_map(|group| group.items.iter().copied())
}

/// Resolve a technology name to its catalog spelling, ignoring case.
pub fn technology(name: &str) -> Option<&'static str> {
    let needle = name.trim();
    technologies().find(|known| known.eq_ignore_ascii_case(needle))
}
