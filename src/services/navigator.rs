//! Drill-down state of the category picker.
//!
//! The navigator holds the path of expanded categories and, once a leaf is
//! picked, the final selection. It renders as a grid of root categories while
//! the path is empty and as `path.len() + 1` columns otherwise: column 0 lists
//! the roots and column `i` lists the children of `path[i - 1]`.

use crate::{models::Category, queries::category_queries};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// A category tile in column `level` (column 0 is the root grid).
    Pick { level: usize, category_id: i64 },
    BackToGrid,
}

#[derive(Debug)]
pub struct Column<'a> {
    pub level: usize,
    pub categories: Vec<&'a Category>,
    /// Category of this column currently on the path, if any.
    pub expanded_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    roots: &'a [Category],
    path: Vec<&'a Category>,
    selection: Option<&'a Category>,
}

impl<'a> Navigator<'a> {
    pub fn new(roots: &'a [Category]) -> Self {
        Self {
            roots,
            path: Vec::new(),
            selection: None,
        }
    }

    /// Rebuilds a navigator from path ids, keeping the longest valid prefix.
    pub fn restore(roots: &'a [Category], path_ids: &[i64]) -> Self {
        let mut navigator = Self::new(roots);

        for (level, id) in path_ids.iter().enumerate() {
            let next = navigator
                .column_categories(level)
                .into_iter()
                .find(|c| c.id == *id && c.has_children());

            match next {
                Some(category) => navigator.path.push(category),
                None => {
                    tracing::debug!("Dropping navigation path from level {} (id {})", level, id);
                    break;
                }
            }
        }

        navigator
    }

    pub fn path(&self) -> &[&'a Category] {
        &self.path
    }

    pub fn path_ids(&self) -> Vec<i64> {
        self.path.iter().map(|c| c.id).collect()
    }

    pub fn selection(&self) -> Option<&'a Category> {
        self.selection
    }

    pub fn is_grid_view(&self) -> bool {
        self.path.is_empty()
    }

    /// Path followed by the selected leaf, for breadcrumbs.
    pub fn trail(&self) -> Vec<&'a Category> {
        let mut trail = self.path.clone();
        if let Some(selected) = self.selection {
            if trail.last().is_none_or(|last| last.id != selected.id) {
                trail.push(selected);
            }
        }
        trail
    }

    pub fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::BackToGrid => self.back_to_grid(),
            NavEvent::Pick { level, category_id } => {
                let category = self
                    .column_categories(level)
                    .into_iter()
                    .find(|c| c.id == category_id);

                match category {
                    Some(category) => self.pick(level, category),
                    None => tracing::warn!(
                        "Ignoring pick of category {} outside column {}",
                        category_id,
                        level
                    ),
                }
            }
        }
    }

    /// A parent truncates the path to `level` and expands; a leaf becomes the
    /// selection and leaves the path alone.
    pub fn pick(&mut self, level: usize, category: &'a Category) {
        if category.has_children() {
            self.path.truncate(level);
            self.path.push(category);
            self.selection = None;
        } else {
            self.selection = Some(category);
        }
    }

    pub fn back_to_grid(&mut self) {
        self.path.clear();
        self.selection = None;
    }

    pub fn columns(&self) -> Vec<Column<'a>> {
        (0..=self.path.len())
            .map(|level| Column {
                level,
                categories: self.column_categories(level),
                expanded_id: self.path.get(level).map(|c| c.id),
            })
            .collect()
    }

    fn column_categories(&self, level: usize) -> Vec<&'a Category> {
        if level == 0 {
            return category_queries::get_top_level(self.roots);
        }

        self.path
            .get(level - 1)
            .map(|parent| category_queries::get_children(*parent))
            .unwrap_or_default()
    }
}
