use serde::{Deserialize, Serialize};

/// Named image assets referenced by the page. Files are served from the configured asset base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    HappyCarIllustration,
    Calendar,
    Ribbon,
    WebDevelopment,
    MobileDevelopment,
    UiUxDesign,
    SeoOptimization,
    CustomSoftware,
    Maintenance,
}

impl Icon {
    pub const fn file_name(self) -> &'static str {
        match self {
            Icon::HappyCarIllustration => "illustrations/happy-car.svg",
            Icon::Calendar => "icons/calendar.svg",
            Icon::Ribbon => "icons/ribbon.svg",
            Icon::WebDevelopment => "icons/web-development.svg",
            Icon::MobileDevelopment => "icons/mobile-development.svg",
            Icon::UiUxDesign => "icons/ui-ux-design.svg",
            Icon::SeoOptimization => "icons/seo-optimization.svg",
            Icon::CustomSoftware => "icons/custom-software.svg",
            Icon::Maintenance => "icons/maintenance.svg",
        }
    }

    pub const fn alt(self) -> &'static str {
        match self {
            Icon::HappyCarIllustration => "Our Services",
            Icon::Calendar => "Calendar",
            Icon::Ribbon => "Ribbon",
            Icon::WebDevelopment => "Web development",
            Icon::MobileDevelopment => "Mobile app development",
            Icon::UiUxDesign => "UI/UX design",
            Icon::SeoOptimization => "SEO optimization",
            Icon::CustomSoftware => "Custom software",
            Icon::Maintenance => "Maintenance",
        }
    }

    /// Joins the asset base and file name with exactly one slash.
    pub fn url(self, asset_base: &str) -> String {
        let base = asset_base.trim_end_matches('/');
        format!("{}/{}", base, self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_without_double_slashes() {
        assert_eq!(Icon::Calendar.url("/assets/"), "/assets/icons/calendar.svg");
        assert_eq!(
            Icon::Ribbon.url("https://cdn.example.com/site"),
            "https://cdn.example.com/site/icons/ribbon.svg"
        );
    }

    #[test]
    fn icons_deserialize_from_snake_case_names() {
        let icon: Icon = serde_json::from_str("\"ui_ux_design\"").expect("known icon");
        assert_eq!(icon, Icon::UiUxDesign);
    }
}
