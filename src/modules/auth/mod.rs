pub mod controller;
pub mod model;
pub mod router;

pub use model::{Claims, Role};
pub use router::init_auth_router;
