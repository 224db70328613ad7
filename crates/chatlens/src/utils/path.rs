use std::fmt;

pub const ROOT_LABEL: &str = "(root)";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

// Rendered as `[0].mapping.a.message`; the rendering is never parsed back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&PathSegment> {
        self.segments.first()
    }

    pub fn push_key(&mut self, key: &str) {
        self.segments.push(PathSegment::Key(key.to_string()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    #[must_use]
    pub fn child_key(&self, key: &str) -> Self {
        let mut child = self.clone();
        child.push_key(key);
        child
    }

    #[must_use]
    pub fn child_index(&self, index: usize) -> Self {
        let mut child = self.clone();
        child.push_index(index);
        child
    }

    #[must_use]
    pub fn join(&self) -> String {
        self.segments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    #[must_use]
    pub fn render_or(&self, root_label: &str) -> String {
        if self.is_root() {
            root_label.to_string()
        } else {
            self.join()
        }
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_or(ROOT_LABEL))
    }
}

impl FromIterator<PathSegment> for JsonPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonPath, PathSegment};

    #[test]
    fn renders_root_with_label() {
        assert_eq!(JsonPath::root().to_string(), "(root)");
        assert_eq!(JsonPath::root().render_or("."), ".");
        assert_eq!(JsonPath::root().join(), "");
    }

    #[test]
    fn renders_keys_and_bracketed_indexes() {
        let path = JsonPath::root()
            .child_index(2)
            .child_key("mapping")
            .child_key("a");
        assert_eq!(path.to_string(), "[2].mapping.a");
        assert_eq!(path.first(), Some(&PathSegment::Index(2)));
    }

    #[test]
    fn push_and_pop_restore_previous_path() {
        let mut path = JsonPath::root();
        path.push_key("children");
        path.push_index(0);
        assert_eq!(path.pop(), Some(PathSegment::Index(0)));
        assert_eq!(path.to_string(), "children");
    }
}
