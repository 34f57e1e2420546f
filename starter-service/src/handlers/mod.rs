//! HTTP handlers. Each one is stateless apart from reading the clock.

pub mod echo;
pub mod health;
pub mod hello;
pub mod index;
pub mod metrics;

pub use echo::echo;
pub use health::health_check;
pub use hello::hello;
pub use index::index;
