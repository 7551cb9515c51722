use component_macros::component_scan;

#[component_scan(packages = ["app::web"])]
pub struct WebConfig;

fn main() {}
