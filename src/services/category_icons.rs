const ASSETS: &str = "https://www.olx.com.lb/assets";

const ICONS: &[(&str, &str)] = &[
    ("Vehicles", "vehicles.74fb4e1f768784288a0c358372fe3f8b.png"),
    ("Properties", "property.d5813812616778f179963565f8a533ca.png"),
    ("Mobile Phones & Accessories", "mobile-phones-accessories.fa686c4b6a528d5dba5fcaf4216669fd.png"),
    ("Mobiles & Accessories", "mobile-phones-accessories.fa686c4b6a528d5dba5fcaf4216669fd.png"),
    ("Electronics & Home Appliances", "electronics-home-appliances.2a32a75df439dfc0d7e1d8b99826d41c.png"),
    ("Electronics & Appliances", "electronics-home-appliances.2a32a75df439dfc0d7e1d8b99826d41c.png"),
    ("Home Furniture & Decor", "home-furniture-decor.fbc166b0b12e9d5f8f739be50194ad25.png"),
    ("Furniture & Decor", "home-furniture-decor.fbc166b0b12e9d5f8f739be50194ad25.png"),
    ("Business & Industrial", "business-industrial.5ce4bde7ea9273b407f7ad46505a5cc5.png"),
    ("Businesses & Industrial", "business-industrial.5ce4bde7ea9273b407f7ad46505a5cc5.png"),
    ("Pets", "pets.1a36a96ea593ace65f6b95fd57e7f21a.png"),
    ("Kids & Babies", "kids-babies.bcfd4ede63f7c505cb04023ba00cea33.png"),
    ("Sports & Equipment", "sports-equipment.3dd8e635faf78e841a0e37cf1efd839c.png"),
    ("Hobbies, Music, Art & Books", "hobbies-music-art-books.41b9abcabd86f9245dffed53b2662909.png"),
    ("Hobbies", "hobbies-music-art-books.41b9abcabd86f9245dffed53b2662909.png"),
    ("Jobs", "jobs.d998b37fb9610644be7854e07eebcc57.png"),
    ("Fashion & Beauty", "fashion-beauty.e7680669aee4a534134043be9a312daa.png"),
    ("Services", "services.500ad9620e19c68ff07a413734bdd6f9.png"),
];

/// Icon for a category name: exact match first, then either name containing the other.
pub fn icon_url(category_name: &str) -> Option<String> {
    if category_name.is_empty() {
        return None;
    }

    ICONS
        .iter()
        .find(|(name, _)| *name == category_name)
        .or_else(|| {
            ICONS
                .iter()
                .find(|(name, _)| category_name.contains(name) || name.contains(category_name))
        })
        .map(|(_, file)| format!("{}/{}", ASSETS, file))
}
