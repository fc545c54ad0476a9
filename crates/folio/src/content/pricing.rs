use serde::{Deserialize, Serialize};

/// A pricing card. `price` is display text ("$499", "Custom quote").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub cta: String,
}

pub fn standard_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            id: 1,
            title: "Sustainable".to_string(),
            description: "A long-term partnership for products that keep growing.".to_string(),
            price: "$1,200/month".to_string(),
            features: vec![
                "Dedicated development hours every month".to_string(),
                "Priority bug fixes and support".to_string(),
                "Quarterly performance and SEO reviews".to_string(),
                "Roadmap planning sessions".to_string(),
            ],
            cta: "Start a partnership".to_string(),
        },
        PricingPlan {
            id: 2,
            title: "Easy".to_string(),
            description: "A fixed-scope project delivered on a clear timeline.".to_string(),
            price: "From $2,500".to_string(),
            features: vec![
                "Scoped deliverables and milestones".to_string(),
                "Two rounds of revisions".to_string(),
                "Launch assistance".to_string(),
                "30 days of post-launch support".to_string(),
            ],
            cta: "Book a project".to_string(),
        },
    ]
}
