use component_macros::configuration;

#[configuration(eager)]
pub struct EagerConfig;

fn main() {}
