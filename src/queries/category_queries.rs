use std::collections::HashSet;

use crate::models::Category;

/// Find category by ID anywhere in the tree
pub fn find_by_id(categories: &[Category], id: i64) -> Option<&Category> {
    categories.iter().find_map(|category| {
        if category.id == id {
            Some(category)
        } else {
            find_by_id(category.children(), id)
        }
    })
}

/// Find category by slug anywhere in the tree
pub fn find_by_slug<'a>(categories: &'a [Category], slug: &str) -> Option<&'a Category> {
    categories.iter().find_map(|category| {
        if category.slug == slug {
            Some(category)
        } else {
            find_by_slug(category.children(), slug)
        }
    })
}

/// Root categories ordered by display priority
pub fn get_top_level(categories: &[Category]) -> Vec<&Category> {
    sort_by_priority(categories.iter().filter(|c| c.is_root()).collect())
}

/// Children of a category ordered by display priority
pub fn get_children(category: &Category) -> Vec<&Category> {
    sort_by_priority(category.children().iter().collect())
}

/// Categories from the root down to `category`, following parent ids.
pub fn build_category_path<'a>(
    category: &'a Category,
    categories: &'a [Category],
) -> Vec<&'a Category> {
    let mut path = vec![category];
    let mut seen = HashSet::from([category.id]);
    let mut current = category;

    while !current.is_root() {
        let Some(parent_id) = current.parent_id else {
            break;
        };

        match find_by_id(categories, parent_id) {
            Some(parent) if seen.insert(parent.id) => {
                path.push(parent);
                current = parent;
            }
            Some(_) => {
                tracing::warn!("Category {} has a cyclic parent chain", category.id);
                break;
            }
            None => {
                tracing::warn!("Parent {} of category {} not found", parent_id, current.id);
                break;
            }
        }
    }

    path.reverse();
    path
}

fn sort_by_priority(mut categories: Vec<&Category>) -> Vec<&Category> {
    categories.sort_by_key(|c| c.display_priority);
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<Category> {
        serde_json::from_str(
            r#"[
                {"id": 1, "name": "Vehicles", "slug": "vehicles", "displayPriority": 2, "children": [
                    {"id": 2, "name": "Cars", "slug": "cars-for-sale", "parentID": 1, "displayPriority": 2},
                    {"id": 3, "name": "Motorcycles", "slug": "motorcycles-atv", "parentID": 1, "displayPriority": 1, "children": [
                        {"id": 4, "name": "ATVs", "slug": "atvs", "parentID": 3}
                    ]}
                ]},
                {"id": 10, "name": "Pets", "slug": "pets", "displayPriority": 1}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn finds_nested_categories() {
        let categories = tree();
        assert_eq!(find_by_id(&categories, 4).map(|c| c.name.as_str()), Some("ATVs"));
        assert_eq!(find_by_slug(&categories, "cars-for-sale").map(|c| c.id), Some(2));
        assert!(find_by_id(&categories, 99).is_none());
    }

    #[test]
    fn orders_by_display_priority() {
        let categories = tree();
        let roots: Vec<i64> = get_top_level(&categories).iter().map(|c| c.id).collect();
        assert_eq!(roots, vec![10, 1]);

        let children: Vec<i64> = get_children(&categories[0]).iter().map(|c| c.id).collect();
        assert_eq!(children, vec![3, 2]);
    }

    #[test]
    fn builds_path_to_root() {
        let categories = tree();
        let atvs = find_by_id(&categories, 4).unwrap();
        let path: Vec<i64> = build_category_path(atvs, &categories)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(path, vec![1, 3, 4]);
    }

    #[test]
    fn stops_at_missing_parent() {
        let orphan: Category =
            serde_json::from_str(r#"{"id": 7, "name": "Orphan", "slug": "orphan", "parentID": 77}"#)
                .unwrap();
        let categories = tree();
        let path = build_category_path(&orphan, &categories);
        assert_eq!(path.len(), 1);
    }
}
