// src/numerics/types/matrix2.rs
// 2x2 square matrix over the FloatingPoint trait, row-major storage.

#![allow(dead_code)]

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use serde::{Serialize, Deserialize};

use super::traits::FloatingPoint;
use super::vector2::Vector2;
use crate::numerics::error::NumericsError;

/// Matrix2 is a 2x2 square matrix with template-able numeric type.
///
/// Storage is row-major: `data[row][col]`. The linear element order used by
/// [`get`](Self::get), [`from_array`](Self::from_array) and the `[T; 4]`
/// operator overloads follows the same convention.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix2<T: FloatingPoint = f32> {
    pub data: [[T; 2]; 2],
}

impl<T: FloatingPoint> Matrix2<T> {
    pub fn new(data: [[T; 2]; 2]) -> Self {
        Self { data }
    }

    /// Construct from four elements in row-major order
    pub fn from_elements(m00: T, m01: T, m10: T, m11: T) -> Self {
        Self {
            data: [[m00, m01], [m10, m11]],
        }
    }

    /// Construct from a row-major array of four elements
    pub fn from_array(values: [T; 4]) -> Self {
        Self {
            data: [[values[0], values[1]], [values[2], values[3]]],
        }
    }

    /// Construct from two vectors, each becoming one row
    pub fn from_rows(first: Vector2<T>, second: Vector2<T>) -> Self {
        Self {
            data: [[first.x, first.y], [second.x, second.y]],
        }
    }

    /// Matrix with all four elements set to the same value
    pub fn splat(value: T) -> Self {
        Self {
            data: [[value, value], [value, value]],
        }
    }

    /// Zero matrix
    pub fn zero() -> Self {
        Self {
            data: [[T::zero(), T::zero()], [T::zero(), T::zero()]],
        }
    }

    /// One matrix (all elements = 1)
    pub fn one() -> Self {
        Self {
            data: [[T::one(), T::one()], [T::one(), T::one()]],
        }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        Self {
            data: [[T::one(), T::zero()], [T::zero(), T::one()]],
        }
    }

    /// Get a row by index. Panics if `idx > 1`.
    pub fn row(&self, idx: usize) -> [T; 2] {
        self.data[idx]
    }

    /// Get a column by index. Panics if `idx > 1`.
    pub fn column(&self, idx: usize) -> [T; 2] {
        [self.data[0][idx], self.data[1][idx]]
    }

    /// Element at linear row-major `index` 0..=3.
    ///
    /// Fails with [`NumericsError::IndexOutOfRange`] for any other index.
    pub fn get(&self, index: usize) -> Result<T, NumericsError> {
        if index > 3 {
            return Err(NumericsError::IndexOutOfRange { index, len: 4 });
        }
        Ok(self.data[index / 2][index % 2])
    }

    /// Determinant of the matrix
    pub fn determinant(&self) -> T {
        self.data[0][0] * self.data[1][1] - self.data[0][1] * self.data[1][0]
    }

    /// Swap the off-diagonal elements in place
    pub fn transpose(&mut self) {
        let m01 = self.data[0][1];
        self.data[0][1] = self.data[1][0];
        self.data[1][0] = m01;
    }

    /// Return the transposed matrix, leaving the receiver unchanged
    pub fn transposed(&self) -> Self {
        Self::from_elements(
            self.data[0][0],
            self.data[1][0],
            self.data[0][1],
            self.data[1][1],
        )
    }

    /// Return the inverse, `(1/det) * adjugate`.
    ///
    /// Fails with [`NumericsError::SingularMatrix`] when the determinant is
    /// exactly zero.
    pub fn inverse(&self) -> Result<Self, NumericsError> {
        let det = self.determinant();
        if det == T::zero() {
            return Err(NumericsError::SingularMatrix);
        }

        let scale = T::one() / det;
        Ok(Self::from_elements(
            self.data[1][1] * scale,
            -self.data[0][1] * scale,
            -self.data[1][0] * scale,
            self.data[0][0] * scale,
        ))
    }

    /// Invert in place.
    ///
    /// Fails with [`NumericsError::SingularMatrix`] before touching the
    /// receiver, which is left unchanged on error.
    pub fn invert(&mut self) -> Result<(), NumericsError> {
        *self = self.inverse()?;
        Ok(())
    }

    /// True iff all four elements are exactly zero.
    pub fn is_null(&self) -> bool {
        self.data[0][0] == T::zero()
            && self.data[0][1] == T::zero()
            && self.data[1][0] == T::zero()
            && self.data[1][1] == T::zero()
    }

    /// True iff the diagonal is exactly one and the off-diagonal exactly zero.
    pub fn is_identity(&self) -> bool {
        self.data[0][0] == T::one()
            && self.data[0][1] == T::zero()
            && self.data[1][0] == T::zero()
            && self.data[1][1] == T::one()
    }
}

/// Convenience aliases for the supported precisions.
pub type Matrix2F = Matrix2<f32>;
pub type Matrix2D = Matrix2<f64>;

// Generic serde implementations for Matrix2
impl<T> Serialize for Matrix2<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix2<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr = <[[T; 2]; 2]>::deserialize(deserializer)?;
        Ok(Matrix2 { data: arr })
    }
}

// Equality against a row-major array of four elements.
impl<T: FloatingPoint> PartialEq<[T; 4]> for Matrix2<T> {
    fn eq(&self, other: &[T; 4]) -> bool {
        self.data[0][0] == other[0]
            && self.data[0][1] == other[1]
            && self.data[1][0] == other[2]
            && self.data[1][1] == other[3]
    }
}

impl<T: FloatingPoint> Add for Matrix2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..2 {
            for j in 0..2 {
                result[i][j] = self.data[i][j] + other.data[i][j];
            }
        }
        Matrix2 { data: result }
    }
}

// Operator + with a scalar broadcasts it over all elements
impl<T: FloatingPoint> Add<T> for Matrix2<T> {
    type Output = Self;

    fn add(self, value: T) -> Self {
        let mut result = self.data;
        for i in 0..2 {
            for j in 0..2 {
                result[i][j] = self.data[i][j] + value;
            }
        }
        Matrix2 { data: result }
    }
}

// Operator + with a row-major array of four elements
impl<T: FloatingPoint> Add<[T; 4]> for Matrix2<T> {
    type Output = Self;

    fn add(self, values: [T; 4]) -> Self {
        self + Matrix2::from_array(values)
    }
}

impl<T: FloatingPoint> Sub for Matrix2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..2 {
            for j in 0..2 {
                result[i][j] = self.data[i][j] - other.data[i][j];
            }
        }
        Matrix2 { data: result }
    }
}

impl<T: FloatingPoint> Sub<T> for Matrix2<T> {
    type Output = Self;

    fn sub(self, value: T) -> Self {
        let mut result = self.data;
        for i in 0..2 {
            for j in 0..2 {
                result[i][j] = self.data[i][j] - value;
            }
        }
        Matrix2 { data: result }
    }
}

impl<T: FloatingPoint> Sub<[T; 4]> for Matrix2<T> {
    type Output = Self;

    fn sub(self, values: [T; 4]) -> Self {
        self - Matrix2::from_array(values)
    }
}

// Scalar multiply is component-wise
impl<T: FloatingPoint> Mul<T> for Matrix2<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        let mut result = self.data;
        for i in 0..2 {
            for j in 0..2 {
                result[i][j] = self.data[i][j] * scalar;
            }
        }
        Matrix2 { data: result }
    }
}

// Matrix multiply is the standard row-by-column product
impl<T: FloatingPoint> Mul<Matrix2<T>> for Matrix2<T> {
    type Output = Matrix2<T>;

    fn mul(self, rhs: Matrix2<T>) -> Matrix2<T> {
        let mut result = [[T::zero(); 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                result[i][j] =
                    self.data[i][0] * rhs.data[0][j] + self.data[i][1] * rhs.data[1][j];
            }
        }
        Matrix2 { data: result }
    }
}

// A row-major array of four elements multiplies as a matrix
impl<T: FloatingPoint> Mul<[T; 4]> for Matrix2<T> {
    type Output = Self;

    fn mul(self, values: [T; 4]) -> Self {
        self * Matrix2::from_array(values)
    }
}

// Column-vector transform
impl<T: FloatingPoint> Mul<Vector2<T>> for Matrix2<T> {
    type Output = Vector2<T>;

    fn mul(self, rhs: Vector2<T>) -> Vector2<T> {
        Vector2 {
            x: self.data[0][0] * rhs.x + self.data[0][1] * rhs.y,
            y: self.data[1][0] * rhs.x + self.data[1][1] * rhs.y,
        }
    }
}

// Row-vector form
impl<T: FloatingPoint> Mul<Matrix2<T>> for Vector2<T> {
    type Output = Vector2<T>;

    fn mul(self, rhs: Matrix2<T>) -> Vector2<T> {
        Vector2 {
            x: self.x * rhs.data[0][0] + self.y * rhs.data[1][0],
            y: self.x * rhs.data[0][1] + self.y * rhs.data[1][1],
        }
    }
}

impl<T: FloatingPoint> AddAssign for Matrix2<T> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: FloatingPoint> AddAssign<T> for Matrix2<T> {
    fn add_assign(&mut self, value: T) {
        *self = *self + value;
    }
}

impl<T: FloatingPoint> AddAssign<[T; 4]> for Matrix2<T> {
    fn add_assign(&mut self, values: [T; 4]) {
        *self = *self + values;
    }
}

impl<T: FloatingPoint> SubAssign for Matrix2<T> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: FloatingPoint> SubAssign<T> for Matrix2<T> {
    fn sub_assign(&mut self, value: T) {
        *self = *self - value;
    }
}

impl<T: FloatingPoint> SubAssign<[T; 4]> for Matrix2<T> {
    fn sub_assign(&mut self, values: [T; 4]) {
        *self = *self - values;
    }
}

impl<T: FloatingPoint> MulAssign<T> for Matrix2<T> {
    fn mul_assign(&mut self, scalar: T) {
        *self = *self * scalar;
    }
}

// The full product is computed before any element is written, so the
// receiver is never read in a half-updated state.
impl<T: FloatingPoint> MulAssign<Matrix2<T>> for Matrix2<T> {
    fn mul_assign(&mut self, rhs: Matrix2<T>) {
        *self = *self * rhs;
    }
}

impl<T: FloatingPoint> MulAssign<[T; 4]> for Matrix2<T> {
    fn mul_assign(&mut self, values: [T; 4]) {
        *self = *self * values;
    }
}
