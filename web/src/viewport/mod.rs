pub mod controller;
pub mod map_host;
pub mod surface;
