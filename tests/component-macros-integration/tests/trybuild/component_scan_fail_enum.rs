use component_macros::component_scan;

#[component_scan]
pub enum ScanMode {
    Eager,
    Lazy,
}

fn main() {}
