use component_macros::configuration;

#[configuration]
pub struct GenericConfig<T>(T);

fn main() {}
