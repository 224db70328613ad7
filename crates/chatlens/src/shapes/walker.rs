use serde_json::{Map, Value};

use crate::utils::path::JsonPath;

pub trait ObjectVisitor {
    fn visit_object(&mut self, object: &Map<String, Value>, path: &JsonPath);
}

/// Depth-first. Objects are visited before their fields; arrays are never
/// visited themselves, only their elements.
pub fn walk<V>(value: &Value, visitor: &mut V)
where
    V: ObjectVisitor + ?Sized,
{
    let mut path = JsonPath::root();
    walk_from(value, &mut path, visitor);
}

pub fn walk_from<V>(value: &Value, path: &mut JsonPath, visitor: &mut V)
where
    V: ObjectVisitor + ?Sized,
{
    match value {
        Value::Object(map) => {
            visitor.visit_object(map, path);
            for (key, child) in map {
                path.push_key(key);
                walk_from(child, path, visitor);
                path.pop();
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                path.push_index(index);
                walk_from(item, path, visitor);
                path.pop();
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}
