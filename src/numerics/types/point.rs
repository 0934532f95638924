// src/numerics/types/point.rs
// Point2/Point3 are aliases for the vector types.

#![allow(dead_code)]

use super::vector2::Vector2;
use super::vector3::Vector3;

/// Point2 is an alias to Vector2 to represent points in the plane.
///
/// The alias keeps generic template parameterization.
pub type Point2<T = f32> = Vector2<T>;

/// Point3 is an alias to Vector3 to represent points in space.
pub type Point3<T = f32> = Vector3<T>;
