pub mod fingerprint;
pub mod registry;
pub mod report;
pub mod walker;

use serde_json::Value;

pub use fingerprint::shape_fingerprint;
pub use registry::{FieldKind, ShapeRecord, ShapeRegistry};
pub use report::{
    ExclusionRule, ReportPolicy, ShapeReport, ShapeReportEntry, build_report, render_text_report,
};
pub use walker::{ObjectVisitor, walk};

#[must_use]
pub fn discover_shapes(document: &Value) -> ShapeRegistry {
    let mut registry = ShapeRegistry::new();
    walk(document, &mut registry);
    registry
}
