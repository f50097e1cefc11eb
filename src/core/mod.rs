pub mod error;
pub mod projectile;
pub mod window;
