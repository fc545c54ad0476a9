use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub author: String,
    pub role: String,
    pub quote: String,
}

pub fn standard_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            author: "Maya Okafor".to_string(),
            role: "Founder, Brightside Bakery".to_string(),
            quote: "Our new site launched ahead of schedule and online orders doubled in the first month.".to_string(),
        },
        Testimonial {
            id: 2,
            author: "Daniel Reyes".to_string(),
            role: "Product Lead, Trailmark".to_string(),
            quote: "Clear communication, thoughtful design, and an app our users actually enjoy opening.".to_string(),
        },
        Testimonial {
            id: 3,
            author: "Priya Natarajan".to_string(),
            role: "Operations Manager, Northwind Clinics".to_string(),
            quote: "The custom scheduling tool replaced three spreadsheets and saves our staff hours every week.".to_string(),
        },
    ]
}
