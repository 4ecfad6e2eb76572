//! Static site content: projects, services, navigation and contact channels.
//!
//! Copy lives in the i18n table; entries here only carry translation keys,
//! image paths and slugs.

/// Top-level in-page anchors, in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label_key: &'static str,
    pub anchor: &'static str,
}

impl NavItem {
    /// Href for the home page, usable from other routes as well.
    pub fn href(&self) -> String {
        format!("/#{}", self.anchor)
    }
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label_key: "nav.projects", anchor: "projects" },
    NavItem { label_key: "nav.services", anchor: "services" },
    NavItem { label_key: "nav.about", anchor: "story" },
    NavItem { label_key: "nav.contact", anchor: "contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    /// Prefix for `title`, `year`, `category` and `details` keys.
    pub key: &'static str,
    pub cover: &'static str,
    pub images: &'static [&'static str],
}

impl Project {
    pub fn title_key(&self) -> String {
        format!("{}.title", self.key)
    }

    pub fn year_key(&self) -> String {
        format!("{}.year", self.key)
    }

    pub fn category_key(&self) -> String {
        format!("{}.category", self.key)
    }

    pub fn details_key(&self) -> String {
        format!("{}.details", self.key)
    }
}

pub const PROJECTS: [Project; 3] = [
    Project {
        id: "finca-permaguanacaste",
        key: "projects.finca",
        cover: "/images/finca3.jpg",
        images: &[
            "/images/finca3.jpg",
            "/images/finca2.jpg",
            "/images/finca1.jpg",
            "/images/finca4.jpg",
        ],
    },
    Project {
        id: "casa-del-arbol",
        key: "projects.casa",
        cover: "/images/casa-arbol_1.jpg",
        images: &[
            "/images/casa-arbol_1.jpg",
            "/images/casa-arbol_2.jpg",
            "/images/casa-arbol_3.jpg",
        ],
    },
    Project {
        id: "agroecology-workshop",
        key: "projects.workshop",
        cover: "/images/workshop8.jpg",
        images: &[
            "/images/workshop8.jpg",
            "/images/workshop4.jpg",
            "/images/workshop5.jpg",
            "/images/workshop6.jpg",
            "/images/workshop7.jpg",
            "/images/workshop9.jpg",
            "/images/workshop10.jpg",
            "/images/workshop11.jpg",
            "/images/workshop12.jpg",
            "/images/workshop13.jpg",
        ],
    },
];

/// A titled block of prose on a service detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSection {
    pub title_key: &'static str,
    pub paragraph_keys: &'static [&'static str],
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub slug: &'static str,
    /// Prefix for `title`, `description` and `feature.N` keys.
    pub key: &'static str,
    pub image: &'static str,
    pub images: &'static [&'static str],
    pub feature_count: usize,
    pub sections: &'static [ServiceSection],
}

impl Service {
    pub fn title_key(&self) -> String {
        format!("{}.title", self.key)
    }

    pub fn description_key(&self) -> String {
        format!("{}.description", self.key)
    }

    pub fn feature_keys(&self) -> Vec<String> {
        (1..=self.feature_count)
            .map(|n| format!("{}.feature.{n}", self.key))
            .collect()
    }

    pub fn has_detail_sections(&self) -> bool {
        !self.sections.is_empty()
    }
}

const FOOD_SYSTEM_SECTIONS: [ServiceSection; 4] = [
    ServiceSection {
        title_key: "food_systems.forest.title",
        paragraph_keys: &["food_systems.forest.p1", "food_systems.forest.p2"],
        image: "/images/food-forest.jpg",
    },
    ServiceSection {
        title_key: "food_systems.market.title",
        paragraph_keys: &["food_systems.market.p1", "food_systems.market.p2"],
        image: "/images/market-garden.jpg",
    },
    ServiceSection {
        title_key: "food_systems.livestock.title",
        paragraph_keys: &["food_systems.livestock.p1", "food_systems.livestock.p2"],
        image: "/images/livestock.jpg",
    },
    ServiceSection {
        title_key: "food_systems.seed.title",
        paragraph_keys: &["food_systems.seed.p1", "food_systems.seed.p2"],
        image: "/images/seed-to-table.jpg",
    },
];

pub const SERVICES: [Service; 5] = [
    Service {
        slug: "masterplan",
        key: "services.masterplan",
        image: "/images/masterplan.jpg",
        images: &["/images/masterplan.jpg", "/images/masterplan2.jpg", "/images/masterplan3.jpg"],
        feature_count: 4,
        sections: &[],
    },
    Service {
        slug: "pools",
        key: "services.pools",
        image: "/images/pool.jpg",
        images: &["/images/pool.jpg", "/images/pool2.jpg", "/images/pool3.jpg"],
        feature_count: 4,
        sections: &[],
    },
    Service {
        slug: "food-systems",
        key: "services.food_systems",
        image: "/images/food-systems.jpg",
        images: &["/images/food-systems.jpg", "/images/food-forest.jpg", "/images/market-garden.jpg"],
        feature_count: 4,
        sections: &FOOD_SYSTEM_SECTIONS,
    },
    Service {
        slug: "soil-health",
        key: "services.soil_health",
        image: "/images/soil.jpg",
        images: &["/images/soil.jpg", "/images/soil2.jpg"],
        feature_count: 4,
        sections: &[],
    },
    Service {
        slug: "landscaping-maintenance",
        key: "services.landscaping",
        image: "/images/landscaping.jpg",
        images: &["/images/landscaping.jpg", "/images/landscaping2.jpg"],
        feature_count: 4,
        sections: &[],
    },
];

pub fn service_by_slug(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.slug == slug)
}

pub const CONTACT_EMAIL: &str = "permaguanacaste@gmail.com";
pub const CONTACT_PHONE_DISPLAY: &str = "+506 8302 1304";
pub const CONTACT_PHONE_TEL: &str = "+50683021304";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/PermaGuanacasteCostaRica";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/permaguanacaste/";

/// Human-readable form of a WhatsApp number: `50683021304` → `+506 8302 1304`.
pub fn display_phone(number: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    match (digits.strip_prefix("506"), digits.len()) {
        (Some(local), 11) => format!("+506 {} {}", &local[..4], &local[4..]),
        _ => format!("+{digits}"),
    }
}

/// `wa.me` deep link with a prefilled greeting.
pub fn whatsapp_url(number: &str, greeting: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!(
        "https://wa.me/{digits}?text={}",
        urlencoding::encode(greeting)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{t, Lang};

    #[test]
    fn nav_anchors_match_page_sections() {
        let anchors: Vec<_> = NAV_ITEMS.iter().map(|item| item.anchor).collect();
        assert_eq!(anchors, ["projects", "services", "story", "contact"]);
        assert_eq!(NAV_ITEMS[2].href(), "/#story");
    }

    #[test]
    fn service_lookup_by_slug() {
        assert_eq!(service_by_slug("pools").map(|s| s.key), Some("services.pools"));
        assert!(service_by_slug("food-systems").is_some_and(Service::has_detail_sections));
        assert!(service_by_slug("unknown").is_none());
        assert!(service_by_slug("").is_none());
    }

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<_> = SERVICES.iter().map(|s| s.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), SERVICES.len());
    }

    #[test]
    fn only_food_systems_has_sections() {
        let with_sections: Vec<_> = SERVICES
            .iter()
            .filter(|s| s.has_detail_sections())
            .map(|s| s.slug)
            .collect();
        assert_eq!(with_sections, ["food-systems"]);
        assert_eq!(FOOD_SYSTEM_SECTIONS.len(), 4);
    }

    #[test]
    fn every_catalog_key_is_translated() {
        let mut keys: Vec<String> = Vec::new();
        for project in PROJECTS.iter() {
            keys.extend([project.title_key(), project.category_key(), project.details_key()]);
        }
        for service in SERVICES.iter() {
            keys.push(service.title_key());
            keys.push(service.description_key());
            keys.extend(service.feature_keys());
            for section in service.sections {
                keys.push(section.title_key.to_string());
                keys.extend(section.paragraph_keys.iter().map(|k| k.to_string()));
            }
        }
        for item in NAV_ITEMS.iter() {
            keys.push(item.label_key.to_string());
        }

        for key in keys {
            for lang in Lang::ALL {
                assert_ne!(t(lang, &key), key, "missing translation for {key}");
            }
        }
    }

    #[test]
    fn projects_have_cover_in_gallery() {
        for project in PROJECTS.iter() {
            assert!(!project.images.is_empty());
            assert_eq!(project.images[0], project.cover);
        }
    }

    #[test]
    fn service_galleries_start_with_card_image() {
        for service in SERVICES.iter() {
            assert_eq!(service.images.first(), Some(&service.image));
        }
    }

    #[test]
    fn costa_rican_numbers_are_grouped() {
        assert_eq!(display_phone("50683021304"), "+506 8302 1304");
        assert_eq!(display_phone("+506 8888-0000"), "+506 8888 0000");
        assert_eq!(display_phone("15551234567"), "+15551234567");
    }

    #[test]
    fn whatsapp_link_encodes_greeting() {
        let url = whatsapp_url("+506 8302 1304", "Hola & bienvenidos");
        assert_eq!(url, "https://wa.me/50683021304?text=Hola%20%26%20bienvenidos");
    }
}
