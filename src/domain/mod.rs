// Domain layer: records, projections, schema and ports (interfaces).
// No I/O here; adapters implement `ports::Store`.

pub mod model;
pub mod ports;
pub mod projection;
pub mod schema;
pub mod tables;
