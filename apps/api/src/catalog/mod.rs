// Catalog: the fixed set of résumé templates offered by the gallery.
// Static data, compiled in; nothing here can fail.

pub mod handlers;

use serde::Serialize;

use crate::layout::{Arrangement, Color};

/// Pseudo-category that matches every template.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateDescriptor {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    /// Accent color as `#rrggbb`.
    pub color: &'static str,
    pub description: &'static str,
}

impl TemplateDescriptor {
    pub fn arrangement(&self) -> Arrangement {
        Arrangement::from_template_id(self.id)
    }

    pub fn accent(&self) -> Color {
        Color::accent(self.color)
    }
}

macro_rules! template {
    ($id:expr, $name:expr, $category:expr, $color:expr, $description:expr) => {
        TemplateDescriptor {
            id: $id,
            name: $name,
            category: $category,
            color: $color,
            description: $description,
        }
    };
}

static TEMPLATES: [TemplateDescriptor; 40] = [
    template!(1, "Classic Minimal", "Minimalist", "#2563eb", "Clean single column with a bold accent rule"),
    template!(2, "Sidebar Pro", "Professional", "#1e40af", "Colored sidebar for contact, skills and education"),
    template!(3, "Modern Header", "Modern", "#0891b2", "Full-width header band with a two-column footer"),
    template!(4, "Clean Professional", "Professional", "#334155", "Centered header and accent-edged experience"),
    template!(5, "Modern Grid", "Modern", "#7c3aed", "Two-thirds content with a colored side panel"),
    template!(6, "Executive Suite", "Executive", "#0f172a", "Large name, contact flush right, formal sections"),
    template!(7, "Creative Wave", "Creative", "#db2777", "Hero band with slanted edge and pill headings"),
    template!(8, "Career Timeline", "Professional", "#059669", "Experience laid out along a vertical timeline"),
    template!(9, "Elegant Serif", "Academic", "#92400e", "Serif typography with centered, quiet sections"),
    template!(10, "Bold Statement", "Creative", "#dc2626", "Heavy uppercase type and tinted experience cards"),
    template!(11, "Simple Blue", "Minimalist", "#2563eb", "Understated layout with blue headings"),
    template!(12, "Navy Sidebar", "Professional", "#1e3a8a", "Deep navy sidebar with a spacious main column"),
    template!(13, "Teal Banner", "Modern", "#0d9488", "Teal banner header for a fresh first impression"),
    template!(14, "Graphite", "Professional", "#4b5563", "Neutral graphite tones for conservative fields"),
    template!(15, "Violet Grid", "Modern", "#6d28d9", "Grid layout with a violet information panel"),
    template!(16, "Boardroom", "Executive", "#1f2937", "Executive layout with restrained charcoal accents"),
    template!(17, "Sunset Creative", "Creative", "#ea580c", "Warm orange hero band for creative roles"),
    template!(18, "Green Path", "Professional", "#16a34a", "Timeline layout with green markers"),
    template!(19, "Scholar", "Academic", "#7f1d1d", "Burgundy serif layout suited to academic CVs"),
    template!(20, "Impact", "Creative", "#b91c1c", "High-contrast bold layout for standing out"),
    template!(21, "Paper White", "Minimalist", "#111827", "Nearly monochrome minimal layout"),
    template!(22, "Ocean Sidebar", "Professional", "#0369a1", "Ocean blue sidebar with clear hierarchy"),
    template!(23, "Indigo Header", "Modern", "#4338ca", "Indigo header band with dotted skill list"),
    template!(24, "Slate Professional", "Professional", "#475569", "Slate accents and a boxed summary"),
    template!(25, "Emerald Grid", "Modern", "#047857", "Emerald side panel with contact and education"),
    template!(26, "Chairman", "Executive", "#78350f", "Bronze-accented executive layout"),
    template!(27, "Magenta Studio", "Creative", "#c026d3", "Magenta hero band for design portfolios"),
    template!(28, "Milestones", "Professional", "#0284c7", "Sky blue timeline of career milestones"),
    template!(29, "Faculty", "Academic", "#365314", "Olive serif layout for research positions"),
    template!(30, "Neon Bold", "Creative", "#9333ea", "Purple bold layout with solid skill pills"),
    template!(31, "Air", "Minimalist", "#64748b", "Light slate minimal layout with generous spacing"),
    template!(32, "Corporate Sidebar", "Executive", "#312e81", "Corporate indigo sidebar for senior roles"),
    template!(33, "Coral Header", "Modern", "#e11d48", "Coral header band with bright accents"),
    template!(34, "Consultant", "Professional", "#0f766e", "Teal-edged entries for consulting profiles"),
    template!(35, "Plum Grid", "Modern", "#86198f", "Plum information panel beside the main column"),
    template!(36, "Director", "Executive", "#374151", "Formal director layout with strong typography"),
    template!(37, "Amber Creative", "Creative", "#d97706", "Amber hero band with centered headings"),
    template!(38, "Journey", "Professional", "#4f46e5", "Indigo timeline for a long career story"),
    template!(39, "Thesis", "Academic", "#1e293b", "Dark serif layout for doctoral candidates"),
    template!(40, "Headline", "Creative", "#be123c", "Crimson bold layout with heavy headings"),
];

pub struct Catalog;

impl Catalog {
    /// Every template, in display order.
    pub fn all() -> &'static [TemplateDescriptor] {
        &TEMPLATES
    }

    pub fn get(id: u32) -> Option<&'static TemplateDescriptor> {
        TEMPLATES.iter().find(|t| t.id == id)
    }

    /// `"all"` followed by each distinct category in order of first appearance.
    pub fn categories() -> Vec<&'static str> {
        let mut categories = vec![ALL_CATEGORIES];
        for template in &TEMPLATES {
            if !categories.contains(&template.category) {
                categories.push(template.category);
            }
        }
        categories
    }

    /// Templates in `category`; `None` or `"all"` returns the whole catalog.
    pub fn filter(category: Option<&str>) -> Vec<&'static TemplateDescriptor> {
        match category {
            None | Some(ALL_CATEGORIES) => TEMPLATES.iter().collect(),
            Some(category) => TEMPLATES
                .iter()
                .filter(|t| t.category == category)
                .collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
