use component_macros::component_scan;

#[component_scan(base_packages = ["app.web"])]
pub struct WebConfig;

fn main() {}
