pub mod chain;
pub mod geometry;
pub mod kinematics;
pub mod workspace;

mod error;

pub use self::error::Error;
pub use self::error::Result;

pub use nalgebra;
