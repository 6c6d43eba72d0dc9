//! Copy for the home page sections.

use crate::slug::slugify;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpertisePoint {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insight {
    pub title: &'static str,
    pub category: &'static str,
    pub date: Option<&'static str>,
    pub image: &'static str,
    pub featured: bool,
    pub light_mode: bool,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About us", href: "/about-us" },
    NavLink { label: "Services", href: "/services" },
    NavLink { label: "Our Team", href: "/team" },
    NavLink { label: "Insights", href: "/insights" },
    NavLink { label: "Careers", href: "/careers" },
    NavLink { label: "Contact", href: "/contact-us" },
];

pub const LEGAL_LINKS: &[NavLink] = &[
    NavLink { label: "Privacy Policy", href: "/privacy-policy" },
    NavLink { label: "Terms of Use", href: "/terms-of-use" },
    NavLink { label: "Sitemap", href: "/sitemap" },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Dispute Resolution",
        description: "Expert litigation, arbitration, and mediation services to resolve complex legal disputes.",
        image: "/service-1.jpg",
    },
    Service {
        title: "Corporate & Commercial",
        description: "Comprehensive legal support for businesses, from startups to multinational corporations.",
        image: "/service-2.jpg",
    },
    Service {
        title: "Projects & Operations",
        description: "Specialized legal guidance for engineering, construction, and oil & gas projects.",
        image: "/service-3.jpg",
    },
    Service {
        title: "Banking & Finance",
        description: "Expert advice on complex financial transactions, regulatory compliance, and risk management.",
        image: "/service-4.jpg",
    },
    Service {
        title: "Regulatory Compliance",
        description: "Navigate complex regulatory frameworks with our expert compliance services.",
        image: "/service-5.jpg",
    },
    Service {
        title: "Intellectual Property",
        description: "Protection and enforcement of intellectual property rights across multiple jurisdictions.",
        image: "/service-6.jpg",
    },
];

pub const EXPERTISE: &[ExpertisePoint] = &[
    ExpertisePoint {
        title: "Commercial Approach",
        description: "We understand business needs and provide practical, commercially-focused legal solutions.",
    },
    ExpertisePoint {
        title: "Regional Expertise",
        description: "Deep understanding of Abu Dhabi and UAE legal frameworks and business environments.",
    },
    ExpertisePoint {
        title: "Cost-Effective Solutions",
        description: "Transparent fee structures and efficient processes to maximize value for our clients.",
    },
];

pub const INSIGHTS: &[Insight] = &[
    Insight {
        title: "Amara & Partners advises Global Financial Holdings in USD 1.5 billion acquisition",
        category: "Corporate and M&A",
        date: None,
        image: "/insight-main.jpg",
        featured: true,
        light_mode: true,
    },
    Insight {
        title: "Digital regulations dominate legal enforcement outlook",
        category: "Financial Institutions",
        date: Some("21 Mar 2025"),
        image: "/insight-1.jpg",
        featured: false,
        light_mode: true,
    },
    Insight {
        title: "Global trends in merger control enforcement",
        category: "Report",
        date: Some("27 Feb 2025"),
        image: "/insight-2.jpg",
        featured: false,
        light_mode: true,
    },
];

pub const CONTACT_LINES: &[&str] = &[
    "Amara Tower, Al Reem Island",
    "Abu Dhabi, United Arab Emirates",
    "+971 2 123 4567",
    "info@amarapartners.com",
];

pub fn find_service(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| slugify(service.title) == slug)
}

pub fn find_insight(slug: &str) -> Option<&'static Insight> {
    INSIGHTS.iter().find(|insight| slugify(insight.title) == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let services: HashSet<String> = SERVICES.iter().map(|s| slugify(s.title)).collect();
        assert_eq!(services.len(), SERVICES.len());
        let insights: HashSet<String> = INSIGHTS.iter().map(|i| slugify(i.title)).collect();
        assert_eq!(insights.len(), INSIGHTS.len());
    }

    #[test]
    fn lookup_by_slug() {
        let service = find_service("dispute-resolution").map(|s| s.title);
        assert_eq!(service, Some("Dispute Resolution"));
        let insight = find_insight("global-trends-in-merger-control-enforcement").map(|i| i.category);
        assert_eq!(insight, Some("Report"));
        assert!(find_service("family-law").is_none());
    }

    #[test]
    fn exactly_one_featured_insight() {
        assert_eq!(INSIGHTS.iter().filter(|i| i.featured).count(), 1);
    }
}
