//! Display copy for the fault-detection landing page.

pub struct Card {
    /// Glyph shown above the title, if any.
    pub icon: Option<&'static str>,
    /// Tailwind text color class for the glyph.
    pub accent: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct LinkColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const HERO_TITLE: &str = "Preventing Electrical Failures Before They Happen";

pub const PROBLEM_HEADING: &str = "The Hidden Cost of Electrical System Failures";

pub const PROBLEMS: [Card; 3] = [
    Card {
        icon: Some("\u{23F1}"),
        accent: "text-blue-400",
        title: "Downtime",
        description: "Critical operations halted due to unexpected failures",
    },
    Card {
        icon: Some("\u{26A0}"),
        accent: "text-yellow-400",
        title: "Safety Risks",
        description: "Potential hazards to personnel and equipment",
    },
    Card {
        icon: Some("$"),
        accent: "text-green-400",
        title: "High Costs",
        description: "Billions lost annually in unplanned maintenance",
    },
];

pub const SOLUTION_HEADING: &str = "AI-Driven Solutions for a Smarter, Safer Future";

pub const HOW_IT_WORKS: &str = "Our AI continuously monitors electrical systems, \
     detecting faults in real-time and predicting maintenance needs before failures occur.";

pub const FEATURES: [&str; 3] = [
    "Real-time fault detection",
    "Predictive maintenance scheduling",
    "Interactive 3D visualization",
];

pub const BENEFITS_HEADING: &str = "Why Choose Our Solution?";

pub const BENEFITS: [Card; 4] = [
    Card {
        icon: None,
        accent: "",
        title: "Reduce Downtime",
        description: "Proactively address issues before they disrupt operations",
    },
    Card {
        icon: None,
        accent: "",
        title: "Cut Costs",
        description: "Save on emergency repairs and unplanned outages",
    },
    Card {
        icon: None,
        accent: "",
        title: "Enhance Safety",
        description: "Prevent electrical hazards and ensure compliance",
    },
    Card {
        icon: None,
        accent: "",
        title: "Improve Efficiency",
        description: "Optimize maintenance schedules and resource allocation",
    },
];

pub const CTA_HEADING: &str = "Ready to Transform Your Electrical System Management?";

pub const CTA_BODY: &str =
    "Don't wait for the next failure. Take control with AI-driven insights today.";

pub const CTA_BUTTON: &str = "Get Started \u{2192}";

pub const FOOTER_COLUMNS: [LinkColumn; 3] = [
    LinkColumn {
        title: "About Us",
        links: &["Company", "Team", "Careers"],
    },
    LinkColumn {
        title: "Resources",
        links: &["Blog", "Documentation", "Case Studies"],
    },
    LinkColumn {
        title: "Legal",
        links: &["Privacy Policy", "Terms of Service", "Contact Us"],
    },
];

pub const NEWSLETTER_TITLE: &str = "Newsletter";

pub const NEWSLETTER_BODY: &str =
    "Stay updated with the latest in AI and electrical system management.";

pub const NEWSLETTER_PLACEHOLDER: &str = "Enter your email";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_cards_have_icons() {
        assert!(PROBLEMS.iter().all(|c| c.icon.is_some() && !c.accent.is_empty()));
    }

    #[test]
    fn benefit_cards_are_text_only() {
        assert!(BENEFITS.iter().all(|c| c.icon.is_none()));
        let titles: Vec<_> = BENEFITS.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            ["Reduce Downtime", "Cut Costs", "Enhance Safety", "Improve Efficiency"]
        );
    }

    #[test]
    fn footer_has_three_links_per_column() {
        assert!(FOOTER_COLUMNS.iter().all(|c| c.links.len() == 3));
    }
}
