//! Header navigation and footer shared by every page

use serde::{Deserialize, Serialize};

/// Site chrome. Never depends on which post is displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chrome {
    /// Dropdown menus in the header
    pub nav: Vec<NavMenu>,
    /// Link columns in the footer
    pub footer: Vec<FooterGroup>,
    /// Footer notice. Fixed text keeps pages byte-identical between renders.
    pub copyright: String,
    /// Header call to action
    pub cta: NavLink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavMenu {
    pub label: String,
    pub items: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterGroup {
    pub title: String,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

fn links(items: &[(&str, &str)]) -> Vec<NavLink> {
    items
        .iter()
        .map(|(label, href)| NavLink::new(label, href))
        .collect()
}

impl Default for Chrome {
    fn default() -> Self {
        let nav = vec![
            NavMenu {
                label: "Industries".to_string(),
                items: links(&[
                    ("Private Equity", "/industries/private-equity"),
                    ("Venture Capital", "/industries/venture-capital"),
                    ("Real Estate", "/industries/real-estate"),
                    ("Private Credit", "/industries/private-credit"),
                ]),
            },
            NavMenu {
                label: "Features".to_string(),
                items: links(&[
                    ("Capital Calls", "/features/capital-calls"),
                    ("Distribution Waterfalls", "/features/waterfalls"),
                    ("Investor Portal", "/features/investor-portal"),
                    ("General Ledger", "/features/general-ledger"),
                ]),
            },
            NavMenu {
                label: "Resources".to_string(),
                items: links(&[
                    ("Blog", "/blog"),
                    ("Guides", "/resources/guides"),
                    ("Webinars", "/resources/webinars"),
                ]),
            },
            NavMenu {
                label: "Company".to_string(),
                items: links(&[
                    ("About", "/company/about"),
                    ("Careers", "/company/careers"),
                    ("Contact", "/company/contact"),
                ]),
            },
        ];

        let footer = vec![
            FooterGroup {
                title: "Product".to_string(),
                links: links(&[
                    ("Fund Administration", "/features/fund-administration"),
                    ("Investor Portal", "/features/investor-portal"),
                    ("Pricing", "/pricing"),
                ]),
            },
            FooterGroup {
                title: "Resources".to_string(),
                links: links(&[("Blog", "/blog"), ("Guides", "/resources/guides")]),
            },
            FooterGroup {
                title: "Company".to_string(),
                links: links(&[
                    ("About", "/company/about"),
                    ("Security", "/company/security"),
                    ("Privacy", "/legal/privacy"),
                ]),
            },
        ];

        Self {
            nav,
            footer,
            copyright: "© Fundsite. All rights reserved.".to_string(),
            cta: NavLink::new("Book a demo", "/demo"),
        }
    }
}
