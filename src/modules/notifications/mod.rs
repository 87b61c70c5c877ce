pub mod broadcaster;
pub mod controller;
pub mod model;
pub mod router;

pub use broadcaster::{Broadcaster, Subscription};
pub use model::*;
pub use router::init_notifications_router;
