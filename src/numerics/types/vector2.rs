// src/numerics/types/vector2.rs
// Vector2 generic implementation with default precision f32.
// Uses the FloatingPoint trait from super::traits.

#![allow(dead_code)]

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Serialize, Deserialize};

use super::traits::FloatingPoint;
use crate::numerics::error::NumericsError;

/// Vector2 is a simple 2D cartesian vector with template-able numeric type.
///
/// Equality (`==`) compares component-wise; the ordering operators compare
/// Euclidean magnitude instead, see [`PartialOrd`](#impl-PartialOrd-for-Vector2<T>).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector2<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
}

// Conditional impls for serde
impl<T> Serialize for Vector2<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector2<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y) = <(T, T)>::deserialize(deserializer)?;
        Ok(Vector2 { x, y })
    }
}

impl<T: FloatingPoint> Vector2<T> {
    /// Construct a new Vector2
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Vector with both components set to the same value
    pub fn splat(value: T) -> Self {
        Self { x: value, y: value }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self {
            x: T::one(),
            y: T::one(),
        }
    }

    /// Component at `index`: 0 is x, 1 is y.
    ///
    /// Fails with [`NumericsError::IndexOutOfRange`] for any other index.
    pub fn get(&self, index: usize) -> Result<T, NumericsError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(NumericsError::IndexOutOfRange { index, len: 2 }),
        }
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Return the Euclidean length.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Self) -> T {
        (*other - *self).length()
    }

    /// Rectangle area spanned by the two components.
    ///
    /// Fails with [`NumericsError::InvalidDomain`] if either component is
    /// negative.
    pub fn area(&self) -> Result<T, NumericsError> {
        if self.x < T::zero() || self.y < T::zero() {
            return Err(NumericsError::InvalidDomain);
        }
        Ok(self.x * self.y)
    }

    /// True iff both components are exactly zero.
    pub fn is_null(&self) -> bool {
        self.x == T::zero() && self.y == T::zero()
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
pub type Vector2F = Vector2<f32>;
pub type Vector2D = Vector2<f64>;

// Ordering compares Euclidean magnitude, not components. Squared lengths are
// compared, which orders identically since lengths are non-negative. Two
// distinct vectors of equal magnitude are unordered-equal here while `==`
// still reports them unequal.
impl<T: FloatingPoint> PartialOrd for Vector2<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.length_squared().partial_cmp(&other.length_squared())
    }
}

// Equality against a scalar holds when every component equals it.
impl<T: FloatingPoint> PartialEq<T> for Vector2<T> {
    fn eq(&self, other: &T) -> bool {
        self.x == *other && self.y == *other
    }
}

// Implement operator + for Vector2<T>
impl<T: FloatingPoint> Add for Vector2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

// Operator + with a scalar broadcasts it over both components
impl<T: FloatingPoint> Add<T> for Vector2<T> {
    type Output = Self;

    fn add(self, value: T) -> Self {
        Self::new(self.x + value, self.y + value)
    }
}

// Implement operator - for Vector2<T>
impl<T: FloatingPoint> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: FloatingPoint> Sub<T> for Vector2<T> {
    type Output = Self;

    fn sub(self, value: T) -> Self {
        Self::new(self.x - value, self.y - value)
    }
}

// Scalar multiply
impl<T: FloatingPoint> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<T: FloatingPoint> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: FloatingPoint> AddAssign for Vector2<T> {
    fn add_assign(&mut self, other: Self) {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
    }
}

impl<T: FloatingPoint> AddAssign<T> for Vector2<T> {
    fn add_assign(&mut self, value: T) {
        self.x = self.x + value;
        self.y = self.y + value;
    }
}

impl<T: FloatingPoint> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
    }
}

impl<T: FloatingPoint> SubAssign<T> for Vector2<T> {
    fn sub_assign(&mut self, value: T) {
        self.x = self.x - value;
        self.y = self.y - value;
    }
}

impl<T: FloatingPoint> MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.x = self.x * scalar;
        self.y = self.y * scalar;
    }
}

// Conversions between Vector2<T> and tuples

impl<T: FloatingPoint> From<(T, T)> for Vector2<T> {
    fn from(tuple: (T, T)) -> Self {
        Self {
            x: tuple.0,
            y: tuple.1,
        }
    }
}

impl<T: FloatingPoint> Into<(T, T)> for Vector2<T> {
    fn into(self) -> (T, T) {
        (self.x, self.y)
    }
}

// Conversions between Vector2<T> and arrays [T; 2]

impl<T: FloatingPoint> From<[T; 2]> for Vector2<T> {
    fn from(array: [T; 2]) -> Self {
        Self {
            x: array[0],
            y: array[1],
        }
    }
}

impl<T: FloatingPoint> Into<[T; 2]> for Vector2<T> {
    fn into(self) -> [T; 2] {
        [self.x, self.y]
    }
}

// Conversions from references to Vector2<T>

impl<T: FloatingPoint> From<&(T, T)> for Vector2<T> {
    fn from(tuple: &(T, T)) -> Self {
        Self {
            x: tuple.0,
            y: tuple.1,
        }
    }
}

impl<T: FloatingPoint> From<&[T; 2]> for Vector2<T> {
    fn from(array: &[T; 2]) -> Self {
        Self {
            x: array[0],
            y: array[1],
        }
    }
}

// Reverse conversions: from &Vector2<T> into tuples and arrays

impl<T: FloatingPoint> Into<(T, T)> for &Vector2<T> {
    fn into(self) -> (T, T) {
        (self.x, self.y)
    }
}

impl<T: FloatingPoint> Into<[T; 2]> for &Vector2<T> {
    fn into(self) -> [T; 2] {
        [self.x, self.y]
    }
}
