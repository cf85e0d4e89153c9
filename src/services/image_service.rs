use std::str::FromStr;

use uuid::Uuid;

use crate::error::AppError;

pub const LOCAL_REF_PREFIX: &str = "local:";

/// An uploaded image, known only by an opaque local reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub id: Uuid,
    pub file_name: String,
}

impl ImageRef {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: file_name.into(),
        }
    }

    pub fn reference(&self) -> String {
        format!("{}{}", LOCAL_REF_PREFIX, self.id)
    }

    /// Value of the hidden input that carries the image between requests.
    pub fn encode(&self) -> String {
        format!("{}|{}", self.reference(), self.file_name)
    }

    pub fn decode(raw: &str) -> Option<Self> {
        let (reference, file_name) = raw.split_once('|').unwrap_or((raw, ""));
        let id = reference.strip_prefix(LOCAL_REF_PREFIX)?.parse().ok()?;
        Some(Self {
            id,
            file_name: file_name.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAction {
    Remove(usize),
    Move { from: usize, to: usize },
}

impl FromStr for ImageAction {
    type Err = AppError;

    /// Parses `remove:<i>` and `move:<from>:<to>`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::BadRequest(format!("Unknown image action: {}", raw));
        let index = |s: &str| s.parse::<usize>().map_err(|_| invalid());

        let parts: Vec<&str> = raw.split(':').collect();
        match parts[..] {
            ["remove", i] => Ok(ImageAction::Remove(index(i)?)),
            ["move", from, to] => Ok(ImageAction::Move {
                from: index(from)?,
                to: index(to)?,
            }),
            _ => Err(invalid()),
        }
    }
}

/// Ordered images of one ad form; the first one is the cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    images: Vec<ImageRef>,
    max: usize,
}

impl ImageSet {
    pub fn new(max: usize) -> Self {
        Self {
            images: Vec::new(),
            max,
        }
    }

    /// Restores images carried over from a previous render, up to the cap.
    pub fn restore<'a>(max: usize, encoded: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::new(max);
        for raw in encoded {
            match ImageRef::decode(raw) {
                Some(image) if !set.is_full() => set.images.push(image),
                Some(_) => break,
                None => tracing::warn!("Dropping malformed image reference {}", raw),
            }
        }
        set
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn is_full(&self) -> bool {
        self.images.len() >= self.max
    }

    /// Accepts the upload when its MIME type is an image and the set has room.
    pub fn add(&mut self, content_type: Option<&str>, file_name: &str) -> Option<&ImageRef> {
        if !content_type.is_some_and(|ct| ct.starts_with("image/")) {
            tracing::warn!(
                "Rejecting upload {} with content type {:?}",
                file_name,
                content_type
            );
            return None;
        }

        if self.is_full() {
            tracing::warn!("Image limit of {} reached, dropping {}", self.max, file_name);
            return None;
        }

        self.images.push(ImageRef::new(file_name));
        self.images.last()
    }

    /// Out-of-range indexes leave the set untouched.
    pub fn apply(&mut self, action: ImageAction) {
        match action {
            ImageAction::Remove(index) if index < self.images.len() => {
                self.images.remove(index);
            }
            ImageAction::Move { from, to }
                if from < self.images.len() && to < self.images.len() =>
            {
                let image = self.images.remove(from);
                self.images.insert(to, image);
            }
            _ => tracing::debug!("Ignoring out-of-range image action {:?}", action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with(names: &[&str]) -> ImageSet {
        let mut set = ImageSet::new(15);
        for name in names {
            set.add(Some("image/jpeg"), name);
        }
        set
    }

    fn names(set: &ImageSet) -> Vec<&str> {
        set.images().iter().map(|i| i.file_name.as_str()).collect()
    }

    #[test]
    fn only_images_are_accepted() {
        let mut set = ImageSet::new(15);
        assert!(set.add(Some("image/png"), "a.png").is_some());
        assert!(set.add(Some("application/pdf"), "b.pdf").is_none());
        assert!(set.add(None, "c").is_none());
        assert_eq!(set.len(), 1);
        assert!(set.images()[0].reference().starts_with("local:"));
    }

    #[test]
    fn caps_at_max() {
        let mut set = ImageSet::new(15);
        for i in 0..20 {
            set.add(Some("image/jpeg"), &format!("{}.jpg", i));
        }
        assert_eq!(set.len(), 15);
        assert!(set.is_full());
    }

    #[test]
    fn remove_and_move() {
        let mut set = set_with(&["a", "b", "c"]);
        set.apply("move:2:0".parse().unwrap());
        assert_eq!(names(&set), vec!["c", "a", "b"]);

        set.apply("remove:1".parse().unwrap());
        assert_eq!(names(&set), vec!["c", "b"]);

        set.apply(ImageAction::Remove(9));
        set.apply(ImageAction::Move { from: 0, to: 5 });
        assert_eq!(names(&set), vec!["c", "b"]);
    }

    #[test]
    fn rejects_unknown_actions() {
        assert!("rotate:1".parse::<ImageAction>().is_err());
        assert!("remove:x".parse::<ImageAction>().is_err());
        assert!("move:1".parse::<ImageAction>().is_err());
    }

    #[test]
    fn references_survive_encoding() {
        let set = set_with(&["front.jpg", "back.jpg"]);
        let encoded: Vec<String> = set.images().iter().map(ImageRef::encode).collect();

        let restored = ImageSet::restore(15, encoded.iter().map(String::as_str).chain(["junk"]));
        assert_eq!(restored, set);
    }
}
