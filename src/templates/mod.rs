use crate::form::{FormData, Length, Tone, WritingStyle};

/// A preset bundle of form values for a common product category.
///
/// Read-only static data; applying one overlays its settings onto the live
/// form without touching an already-entered product name.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tone: Tone,
    pub writing_style: WritingStyle,
    pub length: Length,
    pub target_audience: &'static str,
    pub features: &'static str,
    pub keywords: &'static str,
}

pub const TEMPLATES: [Template; 3] = [
    Template {
        id: "ecommerce",
        name: "E-commerce Product",
        description: "Optimized for online stores and marketplaces",
        tone: Tone::Professional,
        writing_style: WritingStyle::Persuasive,
        length: Length::Medium,
        target_audience: "online shoppers",
        features: "Easy to use, Fast shipping, Money-back guarantee",
        keywords: "best price, free shipping, high quality, satisfaction guaranteed",
    },
    Template {
        id: "luxury",
        name: "Luxury Item",
        description: "Elegant and sophisticated tone for high-end products",
        tone: Tone::Luxury,
        writing_style: WritingStyle::Descriptive,
        length: Length::Long,
        target_audience: "affluent consumers",
        features: "Premium materials, Handcrafted, Exclusive design",
        keywords: "luxury, premium, exclusive, high-end, sophisticated",
    },
    Template {
        id: "technical",
        name: "Technical Product",
        description: "Detailed specifications and features focus",
        tone: Tone::Professional,
        writing_style: WritingStyle::Technical,
        length: Length::Long,
        target_audience: "tech-savvy users",
        features: "Advanced technology, High performance, Technical specifications",
        keywords: "innovative, high-performance, technical, advanced, specifications",
    },
];

pub fn find(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

impl Template {
    /// Overlay this preset onto `form`. The product name survives untouched.
    pub fn apply(&self, form: &mut FormData) {
        form.tone = self.tone;
        form.writing_style = self.writing_style;
        form.length = self.length;
        form.target_audience = self.target_audience.to_string();
        form.features = self.features.to_string();
        form.keywords = self.keywords.to_string();
    }
}
