// tests/algebra_properties.rs
//! Algebraic laws and acceptance scenarios for the numerics value types.

use approx::assert_relative_eq;
use vesper_math::{Matrix2, NumericsError, Vector2, Vector3};

fn assert_matrix_relative_eq(a: &Matrix2<f32>, b: &Matrix2<f32>, epsilon: f32) {
    for i in 0..2 {
        for j in 0..2 {
            assert_relative_eq!(a.data[i][j], b.data[i][j], epsilon = epsilon);
        }
    }
}

#[test]
fn test_add_sub_round_trip() {
    let pairs = [
        (Vector2::new(1.0f32, 2.0), Vector2::new(3.0, 4.0)),
        (Vector2::new(-1.5, 0.25), Vector2::new(100.0, -0.125)),
        (Vector2::new(0.1, 0.2), Vector2::new(0.3, 0.7)),
    ];

    for (v, w) in pairs {
        let round_trip = v + w - w;
        assert_relative_eq!(round_trip.x, v.x, epsilon = 1e-5);
        assert_relative_eq!(round_trip.y, v.y, epsilon = 1e-5);
    }

    let triples = [
        (Vector3::new(1.0f32, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)),
        (Vector3::new(-0.3, 0.6, -0.9), Vector3::new(12.0, -7.5, 0.001)),
    ];

    for (v, w) in triples {
        let round_trip = v + w - w;
        assert_relative_eq!(round_trip.x, v.x, epsilon = 1e-5);
        assert_relative_eq!(round_trip.y, v.y, epsilon = 1e-5);
        assert_relative_eq!(round_trip.z, v.z, epsilon = 1e-5);
    }
}

#[test]
fn test_magnitude_is_non_negative() {
    let vectors = [
        Vector2::new(0.0f32, 0.0),
        Vector2::new(-3.0, -4.0),
        Vector2::new(1.0, -1.0),
        Vector2::new(-0.001, 0.0),
    ];

    for v in vectors {
        assert!(v.length() >= 0.0, "negative length for {:?}", v);
    }

    assert_eq!(Vector2::new(0.0f32, 0.0).length(), 0.0);
    assert_eq!(Vector2::new(3.0f32, 4.0).length(), 5.0);
}

#[test]
fn test_distance_to_self_is_zero() {
    let vectors = [
        Vector2::new(0.0f32, 0.0),
        Vector2::new(1.5, -2.5),
        Vector2::new(1e6, 1e-6),
    ];
    for v in vectors {
        assert_eq!(v.distance(&v), 0.0);
    }

    let triples = [
        Vector3::new(0.0f32, 0.0, 0.0),
        Vector3::new(-7.0, 0.25, 3.0),
    ];
    for v in triples {
        assert_eq!(v.distance(&v), 0.0);
    }
}

#[test]
fn test_cross_product_is_anti_commutative() {
    let pairs = [
        (Vector3::new(1.0f32, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)),
        (Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)),
        (Vector3::new(-2.5, 0.5, 1.0), Vector3::new(0.0, -1.0, 8.0)),
    ];

    for (a, b) in pairs {
        assert_eq!(a.cross(&b), -b.cross(&a));
    }
}

#[test]
fn test_determinant_is_transpose_invariant() {
    let matrices = [
        Matrix2::from_elements(1.0f32, 2.0, 3.0, 4.0),
        Matrix2::identity(),
        Matrix2::zero(),
        Matrix2::from_elements(-0.5, 7.25, 0.0, 3.0),
    ];

    for m in matrices {
        assert_eq!(m.transposed().determinant(), m.determinant());
    }
}

#[test]
fn test_inverse_is_an_involution() {
    let matrices = [
        Matrix2::from_elements(1.0f32, 2.0, 3.0, 4.0),
        Matrix2::from_elements(2.0, 0.0, 0.0, 4.0),
        Matrix2::from_elements(0.5, -1.0, 7.0, 0.25),
    ];

    for m in matrices {
        let back = m.inverse().unwrap().inverse().unwrap();
        assert_matrix_relative_eq(&back, &m, 1e-5);

        // And the inverse actually inverts
        let product = m * m.inverse().unwrap();
        assert_matrix_relative_eq(&product, &Matrix2::identity(), 1e-5);
    }
}

#[test]
fn test_singular_matrices_have_no_inverse() {
    let singular = [
        Matrix2::from_elements(0.0f32, 0.0, 0.0, 0.0),
        Matrix2::from_elements(1.0, 2.0, 2.0, 4.0),
        Matrix2::from_elements(1.0, 0.0, 5.0, 0.0),
    ];

    for m in singular {
        assert_eq!(m.inverse(), Err(NumericsError::SingularMatrix));
    }
}

#[test]
fn test_indexed_access_is_bounds_checked() {
    let v2 = Vector2::new(1.0f32, 2.0);
    assert_eq!(
        v2.get(2),
        Err(NumericsError::IndexOutOfRange { index: 2, len: 2 })
    );

    let v3 = Vector3::new(1.0f32, 2.0, 3.0);
    assert_eq!(
        v3.get(3),
        Err(NumericsError::IndexOutOfRange { index: 3, len: 3 })
    );

    let m = Matrix2::from_elements(1.0f32, 2.0, 3.0, 4.0);
    assert_eq!(
        m.get(4),
        Err(NumericsError::IndexOutOfRange { index: 4, len: 4 })
    );
}

#[test]
fn test_domain_checks_fail_before_computing() {
    assert_eq!(
        Vector2::new(-1.0f32, 4.0).area(),
        Err(NumericsError::InvalidDomain)
    );
    assert_eq!(
        Vector3::new(1.0f32, 1.0, -1.0).volume(),
        Err(NumericsError::InvalidDomain)
    );
}

#[test]
fn test_acceptance_scenarios() {
    assert_eq!(Matrix2::from_elements(1.0f32, 2.0, 3.0, 4.0).determinant(), -2.0);

    let x_axis = Vector3::new(1.0f32, 0.0, 0.0);
    let y_axis = Vector3::new(0.0f32, 1.0, 0.0);
    assert_eq!(x_axis.cross(&y_axis), Vector3::new(0.0, 0.0, 1.0));

    assert_eq!(Vector2::new(3.0f32, 4.0).length(), 5.0);

    assert!(Matrix2::from_elements(1.0f32, 0.0, 0.0, 1.0).is_identity());
}

#[test]
fn test_error_messages_name_the_failure() {
    let err = NumericsError::IndexOutOfRange { index: 4, len: 4 };
    assert_eq!(
        err.to_string(),
        "Index out of range: 4 exceeds element count 4"
    );

    assert_eq!(
        NumericsError::SingularMatrix.to_string(),
        "Singular matrix: determinant is zero, no inverse exists"
    );

    assert_eq!(
        NumericsError::InvalidDomain.to_string(),
        "Invalid domain: coordinates must be zero or higher"
    );
}
