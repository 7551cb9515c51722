use component_macros::{component_scan, configuration};
use infrastructure_common::{global_type_registry, AnnotationKind, PackageMatch, TypeRegistry};

#[configuration]
#[component_scan]
struct RootConfig;

mod web {
    use component_macros::{component_scan, configuration};

    #[configuration]
    #[component_scan(base_packages = ["outside"])]
    pub struct WebConfig;
}

fn main() {
    let found = global_type_registry().types_annotated_with(
        AnnotationKind::Configuration,
        &[module_path!().to_string()],
        PackageMatch::Module,
    );

    let names: Vec<_> = found.iter().map(|d| d.type_info.short_name()).collect();
    assert_eq!(names, vec!["RootConfig", "WebConfig"]);
    assert_eq!(found[1].declared_base_packages(), vec!["outside"]);
}
