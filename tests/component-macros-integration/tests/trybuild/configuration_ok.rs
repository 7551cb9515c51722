use component_macros::configuration;
use infrastructure_common::{global_type_registry, AnnotationKind, TypeRegistry};
use std::any::TypeId;

#[configuration]
struct OkConfig;

#[configuration]
pub struct OkConfigWithFields {
    pub name: &'static str,
}

fn main() {
    let registry = global_type_registry();

    let descriptor = registry.descriptor(TypeId::of::<OkConfig>()).unwrap();
    assert!(descriptor.is_annotation_present(AnnotationKind::Configuration));
    assert_eq!(descriptor.type_info.package(), module_path!());

    let config = OkConfigWithFields { name: "fields" };
    assert_eq!(config.name, "fields");
    assert!(registry.descriptor(TypeId::of::<OkConfigWithFields>()).is_some());
}
