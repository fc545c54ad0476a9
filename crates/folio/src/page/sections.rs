use std::fmt::{self, Write as _};

use super::html::escape_html;
use crate::content::{Icon, PricingPlan, ServiceOffering, Testimonial};

pub(crate) const NAVBAR_TITLE: &str = "Services I Offer";
pub(crate) const HERO_HEADING: &str = "I Do the Work So You Can Focus on Yours";
const HERO_BLURB: &str = "Professional services tailored to meet your business needs, from web and mobile app development to custom software solutions. Let's create something extraordinary together.";

/// A stat in the proof-of-commitment strip.
struct Stat {
    icon: Icon,
    title: &'static str,
    caption: &'static str,
}

const STATS: [Stat; 2] = [
    Stat {
        icon: Icon::Calendar,
        title: "Project Delivery",
        caption: "Timely project completion",
    },
    Stat {
        icon: Icon::Ribbon,
        title: "Client Satisfaction",
        caption: "Striving for excellence",
    },
];

fn write_image(
    out: &mut String,
    icon: Icon,
    asset_base: &str,
    width: u32,
    height: u32,
) -> fmt::Result {
    write!(
        out,
        "<img src=\"{}\" alt=\"{}\" width=\"{width}\" height=\"{height}\">",
        escape_html(&icon.url(asset_base)),
        escape_html(icon.alt())
    )
}

pub(crate) fn navbar(out: &mut String) -> fmt::Result {
    writeln!(
        out,
        "<header class=\"navbar\"><h1 class=\"navbar-title\">{}</h1></header>",
        escape_html(NAVBAR_TITLE)
    )
}

pub(crate) fn hero(out: &mut String, asset_base: &str) -> fmt::Result {
    writeln!(out, "<section class=\"hero\">")?;
    writeln!(out, "<div class=\"hero-copy\">")?;
    writeln!(out, "<h2>{}</h2>", escape_html(HERO_HEADING))?;
    writeln!(out, "<p>{}</p>", escape_html(HERO_BLURB))?;
    writeln!(
        out,
        "<a class=\"action-button\" href=\"#services\">Explore Services</a>"
    )?;
    writeln!(out, "</div>")?;
    write!(out, "<div class=\"hero-illustration\">")?;
    write_image(out, Icon::HappyCarIllustration, asset_base, 350, 400)?;
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")
}

pub(crate) fn services_grid(
    out: &mut String,
    services: &[ServiceOffering],
    asset_base: &str,
) -> fmt::Result {
    writeln!(out, "<section id=\"services\" class=\"services-grid\">")?;
    for service in services {
        writeln!(
            out,
            "<article class=\"service-card\" data-id=\"{}\">",
            service.id
        )?;
        write_image(out, service.icon, asset_base, 64, 64)?;
        writeln!(out)?;
        writeln!(out, "<h3>{}</h3>", escape_html(&service.title))?;
        writeln!(out, "<p>{}</p>", escape_html(&service.description))?;
        writeln!(out, "</article>")?;
    }
    writeln!(out, "</section>")
}

pub(crate) fn proof_of_work(out: &mut String, asset_base: &str) -> fmt::Result {
    writeln!(out, "<section class=\"proof-of-work\">")?;
    writeln!(out, "<h2>Proof of Commitment</h2>")?;
    writeln!(out, "<div class=\"stats\">")?;
    for stat in &STATS {
        writeln!(out, "<div class=\"stat\">")?;
        write!(out, "<div class=\"stat-icon\">")?;
        write_image(out, stat.icon, asset_base, 70, 70)?;
        writeln!(out, "</div>")?;
        writeln!(out, "<h4>{}</h4>", escape_html(stat.title))?;
        writeln!(out, "<p>{}</p>", escape_html(stat.caption))?;
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")
}

pub(crate) fn pricing_plans(out: &mut String, plans: &[PricingPlan]) -> fmt::Result {
    writeln!(out, "<section class=\"pricing-plans\">")?;
    writeln!(out, "<h2>Pricing Plans</h2>")?;
    writeln!(out, "<div class=\"pricing-grid\">")?;
    for plan in plans {
        writeln!(out, "<article class=\"pricing-card\" data-id=\"{}\">", plan.id)?;
        writeln!(out, "<h3>{}</h3>", escape_html(&plan.title))?;
        writeln!(out, "<p class=\"price\">{}</p>", escape_html(&plan.price))?;
        writeln!(out, "<p>{}</p>", escape_html(&plan.description))?;
        if !plan.features.is_empty() {
            writeln!(out, "<ul class=\"features\">")?;
            for feature in &plan.features {
                writeln!(out, "<li>{}</li>", escape_html(feature))?;
            }
            writeln!(out, "</ul>")?;
        }
        writeln!(
            out,
            "<a class=\"plan-cta\" href=\"#contact\">{}</a>",
            escape_html(&plan.cta)
        )?;
        writeln!(out, "</article>")?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")
}

pub(crate) fn testimonials(out: &mut String, testimonials: &[Testimonial]) -> fmt::Result {
    writeln!(out, "<section class=\"testimonials\">")?;
    writeln!(out, "<h2>What Clients Say</h2>")?;
    for testimonial in testimonials {
        writeln!(out, "<figure class=\"testimonial\" data-id=\"{}\">", testimonial.id)?;
        writeln!(
            out,
            "<blockquote>{}</blockquote>",
            escape_html(&testimonial.quote)
        )?;
        writeln!(
            out,
            "<figcaption>{} <span class=\"role\">{}</span></figcaption>",
            escape_html(&testimonial.author),
            escape_html(&testimonial.role)
        )?;
        writeln!(out, "</figure>")?;
    }
    writeln!(out, "</section>")
}

pub(crate) fn footer(out: &mut String) -> fmt::Result {
    writeln!(
        out,
        "<footer class=\"footer\"><p>Let's build something together.</p></footer>"
    )
}
