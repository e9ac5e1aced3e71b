//! Three-component single-precision vector for positions and directions.
//!
//! `Vec3` is a plain `#[repr(C)]` value type: `x`, `y` and `z` are laid out
//! contiguously, so the same memory can be viewed as `[f32; 3]`, indexed, or
//! handed to graphics code as a raw `*const f32`.
//!
//! # Design
//! - Non-assigning operators (`+`, `-`, `*`, `/`, unary `-`) return new values
//! - Mutating operations return `&mut Self` so calls chain
//! - Division multiplies by the reciprocal of the scalar, computed once
//! - Division by zero follows IEEE-754 (infinity/NaN), it never panics
//! - Indexing outside `0..3` is a contract violation and panics
//!
//! # Usage
//! ```
//! use vec3_core::Vec3;
//!
//! let mut v = Vec3::new(3.0, 4.0, 0.0);
//! assert_eq!(v.magnitude(), 5.0);
//!
//! v.normalize();
//! assert!((v.magnitude() - 1.0).abs() < 1e-6);
//!
//! let up = Vec3::X.cross(Vec3::Y);
//! assert_eq!(up, Vec3::Z);
//! assert_eq!(2.0 * up, up * 2.0);
//! ```

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use nalgebra::Vector3;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use tracing::trace;

/// 3D vector with three contiguous `f32` components.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// The zero vector `(0, 0, 0)`
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    /// Unit vector along the X axis
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);

    /// Unit vector along the Y axis
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    /// Unit vector along the Z axis
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    /// Magnitudes below this are treated as zero by [`Vec3::normalize`]
    pub const NORMALIZE_EPSILON: f32 = 1e-6;

    /// Create a vector from its three components
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    /// Overwrite all three components
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Set all components to zero
    #[inline]
    pub fn zero(&mut self) -> &mut Self {
        self.set(0.0, 0.0, 0.0)
    }

    /// Copy all components from `v`
    #[inline]
    pub fn assign(&mut self, v: Vec3) -> &mut Self {
        self.set(v.x, v.y, v.z)
    }

    /// Unary plus: an identical copy
    #[inline]
    #[must_use]
    pub fn plus(self) -> Self {
        Vec3::new(self.x, self.y, self.z)
    }

    /// In-place component-wise addition
    #[inline]
    pub fn add_mut(&mut self, v: Vec3) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
        self
    }

    /// In-place component-wise subtraction
    #[inline]
    pub fn sub_mut(&mut self, v: Vec3) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
        self
    }

    /// In-place multiplication by a scalar
    #[inline]
    pub fn scale_mut(&mut self, scalar: f32) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self
    }

    /// In-place division by a scalar.
    ///
    /// Multiplies each component by `1.0 / scalar`, so results can differ in
    /// the last bit from dividing each component directly. A zero scalar
    /// yields infinities or NaN.
    #[inline]
    pub fn div_mut(&mut self, scalar: f32) -> &mut Self {
        let inv = 1.0 / scalar;
        self.scale_mut(inv)
    }

    /// Cross product `self × v`
    #[inline]
    #[must_use]
    pub fn cross(self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.y * v.z - v.y * self.z,
            self.z * v.x - self.x * v.z,
            self.x * v.y - v.x * self.y,
        )
    }

    /// Dot product
    #[inline]
    #[must_use]
    pub fn dot(self, v: Vec3) -> f32 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Squared Euclidean length
    #[inline]
    #[must_use]
    pub fn magnitude_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Rescale to unit length in place.
    ///
    /// Vectors shorter than [`Vec3::NORMALIZE_EPSILON`] become exactly zero
    /// instead of being blown up by a huge reciprocal.
    pub fn normalize(&mut self) -> &mut Self {
        let mag = self.magnitude();
        if mag < Self::NORMALIZE_EPSILON {
            trace!(magnitude = mag, "normalize: degenerate vector set to zero");
            self.zero()
        } else {
            self.scale_mut(1.0 / mag)
        }
    }

    /// Unit-length copy of this vector, or zero if it is degenerate
    #[must_use]
    pub fn normalized(self) -> Vec3 {
        let mut v = self;
        v.normalize();
        v
    }

    /// Checked component access, `None` when `index >= 3`
    #[inline]
    pub fn get(&self, index: usize) -> Option<&f32> {
        self.as_array().get(index)
    }

    /// Checked mutable component access, `None` when `index >= 3`
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut f32> {
        self.as_mut_array().get_mut(index)
    }

    /// View the components as an array
    #[inline]
    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    /// Mutable view of the components as an array
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 3] {
        bytemuck::cast_mut(self)
    }

    /// Copy the components out as `[x, y, z]`
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Pointer to `x`; `y` and `z` follow at offsets 1 and 2.
    ///
    /// Valid only while `self` is borrowed.
    #[inline]
    pub fn as_ptr(&self) -> *const f32 {
        self.as_array().as_ptr()
    }

    /// Mutable pointer to `x`; `y` and `z` follow at offsets 1 and 2.
    ///
    /// Valid only while `self` is mutably borrowed.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut f32 {
        self.as_mut_array().as_mut_ptr()
    }

    /// Flatten a slice of vectors into `[x0, y0, z0, x1, y1, z1, ...]`
    #[inline]
    pub fn as_flat_slice(vectors: &[Vec3]) -> &[f32] {
        bytemuck::cast_slice(vectors)
    }
}

// ============================================================================
// ARITHMETIC OPERATORS
// ============================================================================

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// Scalar on the left: `s * v == v * s`
impl Mul<Vec3> for f32 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: f32) -> Vec3 {
        let mut out = self;
        out.div_mut(rhs);
        out
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        self.add_mut(rhs);
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        self.sub_mut(rhs);
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.scale_mut(rhs);
    }
}

impl DivAssign<f32> for Vec3 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        self.div_mut(rhs);
    }
}

// ============================================================================
// INDEXED ACCESS
// ============================================================================

impl Index<usize> for Vec3 {
    type Output = f32;
    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &f32 {
        assert!(index < 3, "Vec3 index out of range: {index} (valid 0..3)");
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        assert!(index < 3, "Vec3 index out of range: {index} (valid 0..3)");
        &mut self.as_mut_array()[index]
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self {
        Vec3::new(a[0], a[1], a[2])
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Vec3::new(x, y, z)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<Vector3<f32>> for Vec3 {
    fn from(v: Vector3<f32>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3<f32> {
    fn from(v: Vec3) -> Vector3<f32> {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ============================================================================
// APPROXIMATE COMPARISON
// ============================================================================

impl AbsDiffEq for Vec3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
