pub mod numerics;

pub use numerics::error::NumericsError;
pub use numerics::types::matrix2::{Matrix2, Matrix2D, Matrix2F};
pub use numerics::types::point::{Point2, Point3};
pub use numerics::types::traits::FloatingPoint;
pub use numerics::types::vector2::{Vector2, Vector2D, Vector2F};
pub use numerics::types::vector3::{Vector3, Vector3D, Vector3F};
