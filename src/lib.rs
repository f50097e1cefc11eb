pub mod core;
pub mod plot;

pub use crate::core::error::ProjectileError;
pub use crate::core::projectile::{EARTH_GRAVITY_MPS2, Projectile, TrajectorySample};
