//! Fixed catalog seed data and the offline upsert routine.
//!
//! Categories and templates are keyed by slug, so re-running the seed
//! refreshes rows instead of duplicating them. A template whose
//! category slug cannot be resolved is skipped with a warning.

use sqlx::PgPool;

use crate::models::status::TemplateTier::{self, BusinessCard, Professional, Starter};
use crate::repositories::{TemplateCategoryRepo, TemplateRepo};

/// Seed row for a template category.
pub struct CategorySeed {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub sort_order: i32,
    pub active: bool,
}

/// Seed row for a template. Image URLs are built from Unsplash photo IDs
/// at upsert time.
pub struct TemplateSeed {
    pub slug: &'static str,
    pub name: &'static str,
    pub category_slug: &'static str,
    pub description: &'static str,
    pub pages_included: i32,
    pub tier_compatibility: &'static [TemplateTier],
    pub popular: bool,
    pub features: &'static [&'static str],
    pub thumbnail_id: &'static str,
    pub preview_url: Option<&'static str>,
    pub preview_image_ids: &'static [&'static str],
    pub sort_order: i32,
    pub active: bool,
}

fn unsplash(id: &str, w: u32, h: u32) -> String {
    format!("https://images.unsplash.com/photo-{id}?auto=format&fit=crop&w={w}&h={h}&q=80")
}

impl TemplateSeed {
    /// Card-sized thumbnail URL.
    pub fn thumbnail_url(&self) -> String {
        unsplash(self.thumbnail_id, 800, 450)
    }

    /// Gallery-sized preview image URLs, in display order.
    pub fn preview_images(&self) -> Vec<String> {
        self.preview_image_ids
            .iter()
            .map(|id| unsplash(id, 1280, 800))
            .collect()
    }
}

pub const CATEGORY_SEED: &[CategorySeed] = &[
    CategorySeed { slug: "restaurant", name: "Restaurant & Cafe", description: "Templates for restaurants, cafes, bistros, and food businesses", icon: "UtensilsCrossed", color: "#FF6B6B", sort_order: 1, active: true },
    CategorySeed { slug: "construction", name: "Construction & Building", description: "Templates for construction companies, contractors, and builders", icon: "HardHat", color: "#4ECDC4", sort_order: 2, active: true },
    CategorySeed { slug: "beauty-salon", name: "Beauty & Wellness", description: "Templates for salons, spas, and beauty professionals", icon: "Sparkles", color: "#FFB5E8", sort_order: 3, active: true },
    CategorySeed { slug: "law-firm", name: "Law & Legal", description: "Templates for law firms, attorneys, and legal practices", icon: "Scale", color: "#C4B5FD", sort_order: 4, active: true },
    CategorySeed { slug: "medical", name: "Medical & Health", description: "Templates for clinics, doctors, and healthcare providers", icon: "HeartPulse", color: "#67E8F9", sort_order: 5, active: true },
    CategorySeed { slug: "e-commerce", name: "E-Commerce & Shop", description: "Templates for online stores, boutiques, and product showcases", icon: "ShoppingBag", color: "#FCD34D", sort_order: 6, active: true },
    CategorySeed { slug: "real-estate", name: "Real Estate", description: "Templates for agencies, brokers, and property showcases", icon: "Home", color: "#86EFAC", sort_order: 7, active: true },
    CategorySeed { slug: "automotive", name: "Automotive", description: "Templates for car dealerships, garages, and auto services", icon: "Car", color: "#F87171", sort_order: 8, active: true },
    CategorySeed { slug: "education", name: "Education", description: "Templates for schools, academies, and tutoring centers", icon: "GraduationCap", color: "#818CF8", sort_order: 9, active: true },
    CategorySeed { slug: "technology", name: "Technology & SaaS", description: "Templates for startups, SaaS platforms, and tech companies", icon: "Cpu", color: "#38BDF8", sort_order: 10, active: true },
];

pub const TEMPLATE_SEED: &[TemplateSeed] = &[
    TemplateSeed {
        slug: "savoria-restaurant",
        name: "Savoria Restaurant",
        category_slug: "restaurant",
        description: "Elegant restaurant website with online menu, reservation system, and gallery showcase. Perfect for fine dining establishments.",
        pages_included: 5,
        tier_compatibility: &[Starter, Professional],
        popular: true,
        features: &["Online Menu", "Reservation Form", "Photo Gallery", "Location Map", "Social Links", "Mobile Responsive"],
        thumbnail_id: "1414235077428-338989a2e8c0",
        preview_url: Some("/demos/savoria-restaurant.html"),
        preview_image_ids: &["1414235077428-338989a2e8c0", "1504674900247-0877df9cc836", "1517248135467-4c7edcad34c4", "1559339352-11d035aa65de"],
        sort_order: 1,
        active: true,
    },
    TemplateSeed {
        slug: "bistro-modern",
        name: "Bistro Modern",
        category_slug: "restaurant",
        description: "Compact bistro template with a bold NeoBrutalist identity. Ideal for cafes, bakeries, and small eateries.",
        pages_included: 3,
        tier_compatibility: &[BusinessCard, Starter],
        popular: false,
        features: &["Menu Display", "Contact Form", "Social Links", "Mobile Responsive"],
        thumbnail_id: "1554118811-1e0d58224f24",
        preview_url: Some("/demos/bistro-modern.html"),
        preview_image_ids: &["1554118811-1e0d58224f24", "1495474472287-4d71bcdd2085", "1559925393-8be0ec4767c8"],
        sort_order: 2,
        active: true,
    },
    TemplateSeed {
        slug: "buildcraft-construction",
        name: "BuildCraft Construction",
        category_slug: "construction",
        description: "Professional construction company website showcasing projects, services, and team. Trusted by contractors across Europe.",
        pages_included: 5,
        tier_compatibility: &[Starter, Professional],
        popular: true,
        features: &["Project Portfolio", "Services Grid", "Team Profiles", "Quote Form", "SEO Optimised", "Mobile Responsive"],
        thumbnail_id: "1504307651254-35680f356dfd",
        preview_url: Some("/demos/buildcraft-construction.html"),
        preview_image_ids: &["1504307651254-35680f356dfd", "1541888946425-d81bb19240f5", "1503387762-592deb58ef4e", "1581094794329-c8112a89af12"],
        sort_order: 3,
        active: true,
    },
    TemplateSeed {
        slug: "steelframe-builders",
        name: "SteelFrame Builders",
        category_slug: "construction",
        description: "Minimal construction template for local builders and renovation contractors. Quick setup, maximum impact.",
        pages_included: 3,
        tier_compatibility: &[BusinessCard, Starter],
        popular: false,
        features: &["Services List", "Contact Form", "Google Maps", "Mobile Responsive"],
        thumbnail_id: "1590644365607-1c5a5e72b3e5",
        preview_url: Some("/demos/steelframe-builders.html"),
        preview_image_ids: &["1590644365607-1c5a5e72b3e5", "1581094288338-2314dddb7ece", "1572981779307-38b8cabb2407"],
        sort_order: 4,
        active: true,
    },
    TemplateSeed {
        slug: "glow-studio-salon",
        name: "Glow Studio Salon",
        category_slug: "beauty-salon",
        description: "Luxurious beauty salon template with online booking, treatment menu, and stylist showcase. Perfect for premium salons and spas.",
        pages_included: 5,
        tier_compatibility: &[Starter, Professional],
        popular: true,
        features: &["Online Booking", "Treatment Menu", "Team Showcase", "Before/After Gallery", "Reviews Section", "Mobile Responsive"],
        thumbnail_id: "1560066984-138dadb4c035",
        preview_url: Some("/demos/glow-studio-salon.html"),
        preview_image_ids: &["1560066984-138dadb4c035", "1522337360788-8b13dee7a37e", "1521590832167-7228fcb2e204", "1633681122560-5056f5fa1796"],
        sort_order: 5,
        active: true,
    },
    TemplateSeed {
        slug: "luxe-beauty",
        name: "Luxe Beauty",
        category_slug: "beauty-salon",
        description: "Sleek single-page beauty template for freelance stylists and small salons.",
        pages_included: 3,
        tier_compatibility: &[BusinessCard, Starter],
        popular: false,
        features: &["Service Prices", "Booking Form", "Instagram Feed", "Mobile Responsive"],
        thumbnail_id: "1487412947147-5cebf100ffc2",
        preview_url: Some("/demos/luxe-beauty.html"),
        preview_image_ids: &["1487412947147-5cebf100ffc2", "1570172619644-dfd03ed5d881", "1596755389378-c31d21fd1273"],
        sort_order: 6,
        active: true,
    },
    TemplateSeed {
        slug: "legaledge-law",
        name: "LegalEdge Law Firm",
        category_slug: "law-firm",
        description: "Authoritative law firm website with practice area listings, attorney profiles, and case consultation forms.",
        pages_included: 5,
        tier_compatibility: &[Starter, Professional],
        popular: false,
        features: &["Practice Areas", "Attorney Profiles", "Case Evaluation Form", "Blog/Articles", "Testimonials", "Mobile Responsive"],
        thumbnail_id: "1589829545856-d10d557cf95f",
        preview_url: Some("/demos/legaledge-law.html"),
        preview_image_ids: &["1589829545856-d10d557cf95f", "1507003211169-0a1dd7228f2d", "1573497019940-1c28c88b4f3e", "1450101499163-c8848e968838"],
        sort_order: 7,
        active: true,
    },
    TemplateSeed {
        slug: "justice-pro",
        name: "Justice Pro",
        category_slug: "law-firm",
        description: "Clean and professional law office template. Ideal for solo attorneys and small practices.",
        pages_included: 3,
        tier_compatibility: &[BusinessCard, Starter],
        popular: false,
        features: &["Services Overview", "Contact Form", "Office Location", "Mobile Responsive"],
        thumbnail_id: "1521791055366-0d553872125f",
        preview_url: Some("/demos/justice-pro.html"),
        preview_image_ids: &["1521791055366-0d553872125f", "1575505586569-646b2ca898fc", "1423592707957-3b212afa6b8d"],
        sort_order: 8,
        active: true,
    },
    TemplateSeed {
        slug: "medicare-plus",
        name: "MediCare Plus Clinic",
        category_slug: "medical",
        description: "Modern medical practice website with appointment booking, doctor profiles, and service department listings.",
        pages_included: 5,
        tier_compatibility: &[Starter, Professional],
        popular: true,
        features: &["Appointment Booking", "Doctor Profiles", "Departments", "Patient FAQ", "GDPR Compliant", "Mobile Responsive"],
        thumbnail_id: "1519494026892-80bbd2d6fd0d",
        preview_url: Some("/demos/medicare-plus.html"),
        preview_image_ids: &["1519494026892-80bbd2d6fd0d", "1579684385127-1ef15d508118", "1631217868264-e5b90bb7e133", "1666214280557-091e5cbe3e35"],
        sort_order: 9,
        active: true,
    },
    TemplateSeed {
        slug: "healthpoint-clinic",
        name: "HealthPoint Clinic",
        category_slug: "medical",
        description: "Simple medical clinic template for general practitioners and dentists.",
        pages_included: 3,
        tier_compatibility: &[BusinessCard, Starter],
        popular: false,
        features: &["Service List", "Contact & Hours", "Map Integration", "Mobile Responsive"],
        thumbnail_id: "1538108149393-fbbd81895907",
        preview_url: Some("/demos/healthpoint-clinic.html"),
        preview_image_ids: &["1538108149393-fbbd81895907", "1551076805-e1869033e561", "1629909613654-28e377c37b09"],
        sort_order: 10,
        active: true,
    },
    TemplateSeed {
        slug: "shopflow-store",
        name: "ShopFlow E-Commerce",
        category_slug: "e-commerce",
        description: "Full-featured e-commerce template with product grid, cart, checkout flow, and order management. The complete online store solution.",
        pages_included: 7,
        tier_compatibility: &[Professional],
        popular: true,
        features: &["Product Grid", "Shopping Cart", "Checkout Flow", "Search & Filter", "Wishlist", "Order History", "Mobile Responsive"],
        thumbnail_id: "1523275335684-37898b6baf30",
        preview_url: Some("/demos/shopflow-store.html"),
        preview_image_ids: &["1523275335684-37898b6baf30", "1542291026-7eec264c27ff", "1560343090-f0409e92791a", "1491553895911-0055eca6402d"],
        sort_order: 11,
        active: true,
    },
    TemplateSeed {
        slug: "marketpro-shop",
        name: "MarketPro Shop",
        category_slug: "e-commerce",
        description: "Streamlined product showcase template for small online stores and boutiques.",
        pages_included: 5,
        tier_compatibility: &[Starter, Professional],
        popular: false,
        features: &["Product Catalog", "Product Detail", "Contact/Order Form", "Featured Items", "Mobile Responsive"],
        thumbnail_id: "1602143407151-7111542de6e8",
        preview_url: Some("/demos/marketpro-shop.html"),
        preview_image_ids: &["1602143407151-7111542de6e8", "1583394838336-acd977736f90", "1611930022073-b7a4ba5fcccd", "1585386959984-a4155224a1ad"],
        sort_order: 12,
        active: true,
    },
    TemplateSeed {
        slug: "propertyvue-realty",
        name: "PropertyVue Realty",
        category_slug: "real-estate",
        description: "Premium real estate agency website with property listings, advanced search, and agent profiles.",
        pages_included: 5,
        tier_compatibility: &[Starter, Professional],
        popular: false,
        features: &["Property Listings", "Search & Filter", "Agent Profiles", "Virtual Tour Link", "Mortgage Calculator", "Mobile Responsive"],
        thumbnail_id: "1600596542815-ffad4c1539a9",
        preview_url: Some("/demos/propertyvue-realty.html"),
        preview_image_ids: &["1600596542815-ffad4c1539a9", "1564013799919-ab600027ffc6", "1600047509807-ba8f99d2cdde", "1512917774080-9991f1c4c750"],
        sort_order: 13,
        active: true,
    },
    TemplateSeed {
        slug: "homefinder-agency",
        name: "HomeFinder Agency",
        category_slug: "real-estate",
        description: "Simple property agency template for independent brokers and small real estate offices.",
        pages_included: 3,
        tier_compatibility: &[BusinessCard, Starter],
        popular: false,
        features: &["Featured Properties", "Contact Form", "Office Location", "Mobile Responsive"],
        thumbnail_id: "1600607687939-ce8a6c25118c",
        preview_url: Some("/demos/homefinder-agency.html"),
        preview_image_ids: &["1600607687939-ce8a6c25118c", "1605276374104-dee2a0ed3cd6", "1600585154526-990dced4db0d"],
        sort_order: 14,
        active: true,
    },
    TemplateSeed {
        slug: "autodrive-motors",
        name: "AutoDrive Motors",
        category_slug: "automotive",
        description: "Dynamic automotive dealership website with inventory showcase, financing info, and service booking.",
        pages_included: 5,
        tier_compatibility: &[Starter, Professional],
        popular: false,
        features: &["Car Inventory", "Financing Info", "Service Booking", "Brand Partners", "Test Drive Form", "Mobile Responsive"],
        thumbnail_id: "1503376780353-7e6692767b70",
        preview_url: Some("/demos/autodrive-motors.html"),
        preview_image_ids: &["1503376780353-7e6692767b70", "1555215695-3004980ad54e", "1606664515524-ed2f786a0bd6", "1580273916550-e323be2ae537"],
        sort_order: 15,
        active: true,
    },
    TemplateSeed {
        slug: "motorhub-garage",
        name: "MotorHub Garage",
        category_slug: "automotive",
        description: "Compact mechanic shop template for local garages, tire shops, and auto repair services.",
        pages_included: 3,
        tier_compatibility: &[BusinessCard, Starter],
        popular: false,
        features: &["Services List", "Booking Form", "Hours & Location", "Mobile Responsive"],
        thumbnail_id: "1625047509248-ec889cbff17f",
        preview_url: Some("/demos/motorhub-garage.html"),
        preview_image_ids: &["1625047509248-ec889cbff17f", "1486262715619-67b85e0b08d3", "1558618666-fcd25c85f1aa"],
        sort_order: 16,
        active: true,
    },
    TemplateSeed {
        slug: "eduportal-academy",
        name: "EduPortal Academy",
        category_slug: "education",
        description: "Complete educational institution website with course catalog, enrollment forms, and faculty directory.",
        pages_included: 5,
        tier_compatibility: &[Starter, Professional],
        popular: true,
        features: &["Course Catalog", "Enrollment Form", "Faculty Profiles", "Events Calendar", "Alumni Section", "Mobile Responsive"],
        thumbnail_id: "1523050854058-8df90110c476",
        preview_url: Some("/demos/eduportal-academy.html"),
        preview_image_ids: &["1523050854058-8df90110c476", "1517694712202-14dd9538aa97", "1552664730-d307ca884978", "1541462608143-67571c6738dd"],
        sort_order: 17,
        active: true,
    },
    TemplateSeed {
        slug: "learnspace-school",
        name: "LearnSpace School",
        category_slug: "education",
        description: "Clean school website template for primary and secondary schools, tutoring centers, and language institutes.",
        pages_included: 3,
        tier_compatibility: &[BusinessCard, Starter],
        popular: false,
        features: &["Programs Overview", "Contact Form", "Schedule Display", "Mobile Responsive"],
        thumbnail_id: "1503676260728-1c00da094a0b",
        preview_url: Some("/demos/learnspace-school.html"),
        preview_image_ids: &["1503676260728-1c00da094a0b", "1580582932707-520aed937b7b", "1497633762265-9d179a990aa6"],
        sort_order: 18,
        active: true,
    },
    TemplateSeed {
        slug: "techforge-startup",
        name: "TechForge Startup",
        category_slug: "technology",
        description: "Bold SaaS and tech startup landing page with feature grids, pricing tables, and demo CTAs. Built to convert.",
        pages_included: 5,
        tier_compatibility: &[Starter, Professional],
        popular: true,
        features: &["Hero with CTA", "Feature Grid", "Pricing Table", "Testimonials", "FAQ Section", "Mobile Responsive"],
        thumbnail_id: "1555066931-4365d14bab8c",
        preview_url: Some("/demos/techforge-startup.html"),
        preview_image_ids: &["1555066931-4365d14bab8c", "1517694712202-14dd9538aa97", "1460925895917-afdab827c52f", "1504639725590-34d0984388bd"],
        sort_order: 19,
        active: true,
    },
    TemplateSeed {
        slug: "bytestack-saas",
        name: "ByteStack SaaS",
        category_slug: "technology",
        description: "Multi-page SaaS platform website with product documentation links, changelog, and enterprise features section.",
        pages_included: 7,
        tier_compatibility: &[Professional],
        popular: false,
        features: &["Hero + Demo CTA", "Feature Comparison", "Pricing Tiers", "Changelog", "Blog/Docs Link", "Enterprise Section", "Mobile Responsive"],
        thumbnail_id: "1460925895917-afdab827c52f",
        preview_url: Some("/demos/bytestack-saas.html"),
        preview_image_ids: &["1460925895917-afdab827c52f", "1551288049-bebda4e38f71", "1531497865144-0464ef8fb9a9", "1498050108023-c5249f4df085"],
        sort_order: 20,
        active: true,
    },
];

/// Outcome of a seed run.
#[derive(Debug)]
pub struct SeedSummary {
    pub categories: usize,
    pub templates: usize,
    pub skipped: usize,
}

/// Upsert the full catalog: categories first, then templates resolved
/// against the category slug map. Safe to re-run.
pub async fn seed_catalog(pool: &PgPool) -> Result<SeedSummary, sqlx::Error> {
    for category in CATEGORY_SEED {
        TemplateCategoryRepo::upsert_seed(pool, category).await?;
    }

    let slug_map = TemplateCategoryRepo::slug_map(pool).await?;

    let mut templates = 0;
    let mut skipped = 0;
    for template in TEMPLATE_SEED {
        match slug_map.get(template.category_slug) {
            Some(&category_id) => {
                TemplateRepo::upsert_seed(pool, template, category_id).await?;
                templates += 1;
            }
            None => {
                tracing::warn!(
                    category = template.category_slug,
                    template = template.slug,
                    "Category not found, skipping template"
                );
                skipped += 1;
            }
        }
    }

    Ok(SeedSummary {
        categories: CATEGORY_SEED.len(),
        templates,
        skipped,
    })
}
