use indexmap::IndexMap;

use crate::models::Ad;

/// Home page section order.
pub const HOME_SECTION_ORDER: [&str; 7] = [
    "Cars for Sale",
    "Apartments & Villas For Rent",
    "Mobile Phones",
    "Apartments & Villas For Sale",
    "Motorcycles & ATVs",
    "AC, Cooling & Heating",
    "Laptops, Tablets, Computers",
];

pub struct AdSection<'a> {
    pub category: &'a str,
    pub slug: Option<&'a str>,
    pub ads: Vec<&'a Ad>,
}

/// Ads of one category, matched by name or slug.
pub fn filter_by_category<'a>(ads: &'a [Ad], category: &str) -> Vec<&'a Ad> {
    ads.iter().filter(|ad| ad.in_category(category)).collect()
}

/// Groups ads by category name, keeping only the home sections that have ads
/// and at most `per_section` ads in each.
pub fn group_for_home(ads: &[Ad], per_section: usize) -> Vec<AdSection<'_>> {
    let mut by_category: IndexMap<&str, Vec<&Ad>> = IndexMap::new();
    for ad in ads {
        by_category.entry(ad.category.as_str()).or_default().push(ad);
    }

    HOME_SECTION_ORDER
        .iter()
        .filter_map(|name| {
            let (category, section_ads) = by_category.get_key_value(*name)?;
            let slug = section_ads
                .iter()
                .copied()
                .find_map(|ad| ad.category_slug.as_deref());

            Some(AdSection {
                category: *category,
                slug,
                ads: section_ads.iter().take(per_section).copied().collect(),
            })
        })
        .filter(|section| !section.ads.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ad(id: u32, category: &str, slug: &str) -> Ad {
        serde_json::from_value(json!({
            "id": id.to_string(),
            "title": format!("Ad {}", id),
            "price": 100,
            "category": category,
            "categorySlug": slug,
        }))
        .unwrap()
    }

    #[test]
    fn sections_follow_fixed_order_and_limit() {
        let mut ads = vec![ad(1, "Mobile Phones", "mobile-phones")];
        ads.extend((2..8).map(|id| ad(id, "Cars for Sale", "cars-for-sale")));
        ads.push(ad(9, "Unlisted", "unlisted"));

        let sections = group_for_home(&ads, 4);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].category, "Cars for Sale");
        assert_eq!(sections[0].slug, Some("cars-for-sale"));
        assert_eq!(sections[0].ads.len(), 4);
        assert_eq!(sections[1].category, "Mobile Phones");
    }

    #[test]
    fn filters_by_slug_or_name() {
        let ads = vec![
            ad(1, "Mobile Phones", "mobile-phones"),
            ad(2, "Cars for Sale", "cars-for-sale"),
        ];
        assert_eq!(filter_by_category(&ads, "cars-for-sale").len(), 1);
        assert_eq!(filter_by_category(&ads, "mobile phones").len(), 1);
    }
}
