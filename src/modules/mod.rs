pub mod auth;
pub mod notifications;

pub use self::auth::model::{Claims, Role};
pub use self::notifications::broadcaster::Broadcaster;
