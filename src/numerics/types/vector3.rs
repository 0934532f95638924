// src/numerics/types/vector3.rs
// Vector3 generic implementation with default precision f32.
// Uses the FloatingPoint trait from super::traits.

#![allow(dead_code)]

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Serialize, Deserialize};

use super::traits::FloatingPoint;
use crate::numerics::error::NumericsError;

/// Vector3 is a simple 3D cartesian vector with template-able numeric type.
///
/// Equality (`==`) compares component-wise; the ordering operators compare
/// Euclidean magnitude instead, as for [`Vector2`](super::vector2::Vector2).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// Conditional impls for serde
impl<T> Serialize for Vector3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl<T: FloatingPoint> Vector3<T> {
    /// Construct a new Vector3
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector with all three components set to the same value
    pub fn splat(value: T) -> Self {
        Self {
            x: value,
            y: value,
            z: value,
        }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self {
            x: T::one(),
            y: T::one(),
            z: T::one(),
        }
    }

    /// Component at `index`: 0 is x, 1 is y, 2 is z.
    ///
    /// Fails with [`NumericsError::IndexOutOfRange`] for any other index.
    pub fn get(&self, index: usize) -> Result<T, NumericsError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(NumericsError::IndexOutOfRange { index, len: 3 }),
        }
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Return the Euclidean length.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, right-handed.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Self) -> T {
        (*other - *self).length()
    }

    /// Rectangle area spanned by the x and y components.
    ///
    /// Fails with [`NumericsError::InvalidDomain`] if x or y is negative.
    pub fn area(&self) -> Result<T, NumericsError> {
        if self.x < T::zero() || self.y < T::zero() {
            return Err(NumericsError::InvalidDomain);
        }
        Ok(self.x * self.y)
    }

    /// Box volume spanned by the three components.
    ///
    /// Fails with [`NumericsError::InvalidDomain`] if any component is
    /// negative.
    pub fn volume(&self) -> Result<T, NumericsError> {
        if self.x < T::zero() || self.y < T::zero() || self.z < T::zero() {
            return Err(NumericsError::InvalidDomain);
        }
        Ok(self.x * self.y * self.z)
    }

    /// True iff all three components are exactly zero.
    pub fn is_null(&self) -> bool {
        self.x == T::zero() && self.y == T::zero() && self.z == T::zero()
    }

    /// True iff the length equals exactly one.
    ///
    /// This is an exact floating-point comparison with no tolerance: a vector
    /// normalized through inexact arithmetic may still report `false`.
    pub fn is_unit(&self) -> bool {
        self.length() == T::one()
    }
}

/// Convenience aliases for the supported precisions.
pub type Vector3F = Vector3<f32>;
pub type Vector3D = Vector3<f64>;

// Ordering compares Euclidean magnitude, not components. See Vector2 for the
// equal-magnitude caveat.
impl<T: FloatingPoint> PartialOrd for Vector3<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.length_squared().partial_cmp(&other.length_squared())
    }
}

// Equality against a scalar holds when every component equals it.
impl<T: FloatingPoint> PartialEq<T> for Vector3<T> {
    fn eq(&self, other: &T) -> bool {
        self.x == *other && self.y == *other && self.z == *other
    }
}

// Implement operator + for Vector3<T>
impl<T: FloatingPoint> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

// Operator + with a scalar broadcasts it over all components
impl<T: FloatingPoint> Add<T> for Vector3<T> {
    type Output = Self;

    fn add(self, value: T) -> Self {
        Self::new(self.x + value, self.y + value, self.z + value)
    }
}

// Implement operator - for Vector3<T>
impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: FloatingPoint> Sub<T> for Vector3<T> {
    type Output = Self;

    fn sub(self, value: T) -> Self {
        Self::new(self.x - value, self.y - value, self.z - value)
    }
}

// Scalar multiply
impl<T: FloatingPoint> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: FloatingPoint> AddAssign for Vector3<T> {
    fn add_assign(&mut self, other: Self) {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
        self.z = self.z + other.z;
    }
}

impl<T: FloatingPoint> AddAssign<T> for Vector3<T> {
    fn add_assign(&mut self, value: T) {
        self.x = self.x + value;
        self.y = self.y + value;
        self.z = self.z + value;
    }
}

impl<T: FloatingPoint> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
        self.z = self.z - other.z;
    }
}

impl<T: FloatingPoint> SubAssign<T> for Vector3<T> {
    fn sub_assign(&mut self, value: T) {
        self.x = self.x - value;
        self.y = self.y - value;
        self.z = self.z - value;
    }
}

impl<T: FloatingPoint> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.x = self.x * scalar;
        self.y = self.y * scalar;
        self.z = self.z * scalar;
    }
}

// Conversions between Vector3<T> and tuples

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self {
            x: tuple.0,
            y: tuple.1,
            z: tuple.2,
        }
    }
}

impl<T: FloatingPoint> Into<(T, T, T)> for Vector3<T> {
    fn into(self) -> (T, T, T) {
        (self.x, self.y, self.z)
    }
}

// Conversions between Vector3<T> and arrays [T; 3]

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self {
            x: array[0],
            y: array[1],
            z: array[2],
        }
    }
}

impl<T: FloatingPoint> Into<[T; 3]> for Vector3<T> {
    fn into(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

// Conversions from references to Vector3<T>

impl<T: FloatingPoint> From<&(T, T, T)> for Vector3<T> {
    fn from(tuple: &(T, T, T)) -> Self {
        Self {
            x: tuple.0,
            y: tuple.1,
            z: tuple.2,
        }
    }
}

impl<T: FloatingPoint> From<&[T; 3]> for Vector3<T> {
    fn from(array: &[T; 3]) -> Self {
        Self {
            x: array[0],
            y: array[1],
            z: array[2],
        }
    }
}

// Reverse conversions: from &Vector3<T> into tuples and arrays

impl<T: FloatingPoint> Into<(T, T, T)> for &Vector3<T> {
    fn into(self) -> (T, T, T) {
        (self.x, self.y, self.z)
    }
}

impl<T: FloatingPoint> Into<[T; 3]> for &Vector3<T> {
    fn into(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}
