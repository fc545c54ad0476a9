use serde::{Deserialize, Serialize};

use super::icons::Icon;

/// One card in the services grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

impl ServiceOffering {
    fn new(id: u32, title: &str, description: &str, icon: Icon) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            icon,
        }
    }
}

pub fn standard_services() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering::new(
            1,
            "Web Development",
            "Fast, accessible websites and web apps built with modern frameworks and clean, maintainable code.",
            Icon::WebDevelopment,
        ),
        ServiceOffering::new(
            2,
            "Mobile App Development",
            "Cross-platform mobile apps that feel native on iOS and Android, from prototype to store release.",
            Icon::MobileDevelopment,
        ),
        ServiceOffering::new(
            3,
            "UI/UX Design",
            "User research, wireframes, and polished interfaces that make your product easy to love.",
            Icon::UiUxDesign,
        ),
        ServiceOffering::new(
            4,
            "SEO Optimization",
            "Technical audits, performance tuning, and content structure that help customers find you.",
            Icon::SeoOptimization,
        ),
        ServiceOffering::new(
            5,
            "Custom Software Solutions",
            "Tailored tools and integrations that automate the work your off-the-shelf software cannot.",
            Icon::CustomSoftware,
        ),
        ServiceOffering::new(
            6,
            "Maintenance & Support",
            "Ongoing updates, monitoring, and fixes so your product stays secure and reliable.",
            Icon::Maintenance,
        ),
    ]
}
