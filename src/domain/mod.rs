// Domain layer: records, selectors and ports. No filesystem access here.

pub mod model;
pub mod ports;
