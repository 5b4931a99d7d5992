//! Static educational content.
//!
//! The entitlement summary shown next to a result depends on the position
//! type. The three "learn" panels and the disclaimer are fixed text.

use serde::{Deserialize, Serialize};

use crate::models::PositionType;

/// Shown beneath every page.
pub const DISCLAIMER: &str = "This tool provides general information only and does not \
constitute financial advice. For more detailed information, please refer to the following \
resources:";

/// Where to read more, as `(name, url)` pairs.
pub const REFERENCE_LINKS: [(&str, &str); 2] = [
    ("Fair Work Commission", "https://www.fwc.gov.au/"),
    ("Australian Taxation Office (ATO)", "https://www.ato.gov.au/"),
];

/// Entitlements that come with a position type.
///
/// # Example
///
/// ```
/// use take_home_pay::content::entitlements_for;
/// use take_home_pay::models::PositionType;
///
/// assert!(entitlements_for(PositionType::Casual)[0].contains("25%"));
/// ```
pub fn entitlements_for(position: PositionType) -> &'static [&'static str] {
    match position {
        PositionType::FullTime => &[
            "Annual leave: 4 weeks per year.",
            "Personal/carer's leave: 10 days per year.",
            "Public holidays: Paid if you normally work on the day.",
        ],
        PositionType::PartTime => &[
            "Annual leave: Pro-rata based on hours worked.",
            "Personal/carer's leave: Pro-rata based on hours worked.",
            "Public holidays: Paid if you normally work on the day.",
        ],
        PositionType::Casual => &[
            "Casual loading: Typically 25% higher pay rate.",
            "No paid leave entitlements.",
            "Public holidays: Unpaid unless you work on the day.",
        ],
    }
}

/// One of the educational panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearnTopic {
    /// Leave and workplace rights.
    Entitlements,
    /// How income tax works.
    Taxes,
    /// Budgeting and retirement savings.
    Budget,
}

impl LearnTopic {
    /// Panel heading.
    pub fn title(self) -> &'static str {
        match self {
            LearnTopic::Entitlements => "Learn Your Entitlements",
            LearnTopic::Taxes => "Learn Your Taxes",
            LearnTopic::Budget => "Learn Your Budget",
        }
    }

    /// Sentence introducing the bullet list.
    pub fn introduction(self) -> &'static str {
        match self {
            LearnTopic::Entitlements => {
                "Here you can learn about your entitlements as an employee in Australia, such as:"
            }
            LearnTopic::Taxes => "Learn about how taxes work in Australia, including:",
            LearnTopic::Budget => "Learn how to manage your budget effectively:",
        }
    }

    /// Panel body.
    pub fn points(self) -> &'static [&'static str] {
        match self {
            LearnTopic::Entitlements => &[
                "Leave entitlements (annual, personal, and parental leave).",
                "Fair Work Commission (FWC) pay guidelines.",
                "Rights under workplace agreements.",
            ],
            LearnTopic::Taxes => &[
                "Income tax brackets for the 2023-2024 financial year.",
                "Deductions and offsets.",
                "Understanding PAYG (Pay-As-You-Go) taxation.",
            ],
            LearnTopic::Budget => &[
                "Track your income and expenses.",
                "Set savings goals.",
                "Plan for retirement with superannuation.",
            ],
        }
    }

    /// The whole panel as a serializable value.
    pub fn panel(self) -> LearnPanel {
        LearnPanel {
            topic: self,
            title: self.title().to_string(),
            introduction: self.introduction().to_string(),
            points: self.points().iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// A rendered educational panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnPanel {
    /// Which panel this is.
    pub topic: LearnTopic,
    /// Heading.
    pub title: String,
    /// Introductory sentence.
    pub introduction: String,
    /// Bullet points.
    pub points: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_time_entitlements() {
        let points = entitlements_for(PositionType::FullTime);
        assert_eq!(points.len(), 3);
        assert!(points[0].contains("4 weeks"));
    }

    #[test]
    fn test_part_time_entitlements_are_pro_rata() {
        let points = entitlements_for(PositionType::PartTime);
        assert!(points[0].contains("Pro-rata"));
    }

    #[test]
    fn test_casual_has_no_paid_leave() {
        let points = entitlements_for(PositionType::Casual);
        assert!(points.contains(&"No paid leave entitlements."));
    }

    #[test]
    fn test_panel_contents() {
        let panel = LearnTopic::Taxes.panel();
        assert_eq!(panel.title, "Learn Your Taxes");
        assert_eq!(panel.points.len(), 3);
        assert!(panel.points[0].contains("2023-2024"));
    }

    #[test]
    fn test_topic_deserializes_snake_case() {
        let topic: LearnTopic = serde_json::from_str("\"budget\"").unwrap();
        assert_eq!(topic, LearnTopic::Budget);
    }

    #[test]
    fn test_reference_links() {
        assert_eq!(REFERENCE_LINKS.len(), 2);
        assert!(REFERENCE_LINKS.iter().all(|(_, url)| url.starts_with("https://")));
    }
}
