use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::{Map, Value};

use super::fingerprint::shape_fingerprint;
use super::walker::ObjectVisitor;
use crate::utils::json::ValueKind;
use crate::utils::path::{JsonPath, ROOT_LABEL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldKind {
    pub name: String,
    pub kind: ValueKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeRecord {
    pub fingerprint: String,
    pub count: usize,
    pub keys: Vec<String>,
    /// Field types of the first occurrence, never updated afterwards.
    pub example: Vec<FieldKind>,
    /// Distinct rendered paths in discovery order.
    pub paths: Vec<String>,
    seen_paths: HashSet<String>,
}

impl ShapeRecord {
    fn new(fingerprint: String, keys: Vec<String>, example: Vec<FieldKind>, path: String) -> Self {
        let mut seen_paths = HashSet::new();
        seen_paths.insert(path.clone());
        Self {
            fingerprint,
            count: 1,
            keys,
            example,
            paths: vec![path],
            seen_paths,
        }
    }

    fn observe_again(&mut self, path: String) {
        self.count += 1;
        if self.seen_paths.insert(path.clone()) {
            self.paths.push(path);
        }
    }

    #[must_use]
    pub fn representative_path(&self) -> &str {
        self.paths.first().map_or(ROOT_LABEL, String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    records: Vec<ShapeRecord>,
    index: HashMap<String, usize>,
}

impl ShapeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        fingerprint: String,
        keys: Vec<String>,
        example: Vec<FieldKind>,
        path: String,
    ) {
        if let Some(&position) = self.index.get(&fingerprint) {
            self.records[position].observe_again(path);
            return;
        }

        self.index.insert(fingerprint.clone(), self.records.len());
        self.records
            .push(ShapeRecord::new(fingerprint, keys, example, path));
    }

    pub fn observe(&mut self, object: &Map<String, Value>, path: &JsonPath) {
        let fingerprint = shape_fingerprint(object.keys().map(String::as_str));
        let rendered = path.to_string();

        if let Some(&position) = self.index.get(&fingerprint) {
            self.records[position].observe_again(rendered);
            return;
        }

        let keys = object.keys().cloned().collect();
        self.record(fingerprint, keys, example_of(object), rendered);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[ShapeRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, fingerprint: &str) -> Option<&ShapeRecord> {
        self.index
            .get(fingerprint)
            .map(|&position| &self.records[position])
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
    }
}

impl ObjectVisitor for ShapeRegistry {
    fn visit_object(&mut self, object: &Map<String, Value>, path: &JsonPath) {
        self.observe(object, path);
    }
}

#[must_use]
pub fn example_of(object: &Map<String, Value>) -> Vec<FieldKind> {
    object
        .iter()
        .map(|(name, value)| FieldKind {
            name: name.clone(),
            kind: ValueKind::of(value),
        })
        .collect()
}
