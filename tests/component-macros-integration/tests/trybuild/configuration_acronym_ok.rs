use component_macros::{component_scan, configuration};
use infrastructure_common::{global_type_registry, AnnotationKind, TypeRegistry};
use std::any::TypeId;

#[configuration]
pub struct HttpConfig;

#[configuration]
#[component_scan]
pub struct HTTPConfig;

fn main() {
    let registry = global_type_registry();

    let http = registry.descriptor(TypeId::of::<HttpConfig>()).unwrap();
    assert!(!http.is_annotation_present(AnnotationKind::ComponentScan));

    let upper = registry.descriptor(TypeId::of::<HTTPConfig>()).unwrap();
    assert!(upper.is_annotation_present(AnnotationKind::Configuration));
    assert!(upper.is_annotation_present(AnnotationKind::ComponentScan));
}
