use core::f32::consts::TAU;
use core::fmt;
use core::ops;

use bytemuck::{Pod, Zeroable};
use rand::Rng;

macro_rules! vec_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<$v> for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $v) -> $v {
                // Fields not in the list (the homogeneous w) keep the
                // left operand's value.
                let mut out = self;
                $( out.$e = self.$e.$func(rhs.$e); )*
                out
            }
        }
    }
}

macro_rules! vec_assign_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<$v> for $v {
            #[inline]
            fn $func(&mut self, rhs: $v) {
                $( self.$e.$func(rhs.$e); )*
            }
        }
    }
}

macro_rules! scalar_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {

        impl ops::$trait<f32> for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: f32) -> $v {
                let mut out = self;
                $( out.$e = self.$e.$func(rhs); )*
                out
            }
        }

        impl ops::$trait<$v> for f32 {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $v) -> $v {
                let mut out = rhs;
                $( out.$e = self.$func(rhs.$e); )*
                out
            }
        }
    }
}

macro_rules! scalar_assign_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<f32> for $v {
            #[inline]
            fn $func(&mut self, rhs: f32) {
                $( self.$e.$func(rhs); )*
            }
        }
    }
}

macro_rules! vec_neg_impl {
    ($v: ident, $($e: ident),*) => {
        impl ops::Neg for $v {
            type Output = $v;

            #[inline]
            fn neg(self) -> $v {
                let mut out = self;
                $( out.$e = -self.$e; )*
                out
            }
        }
    }
}

/// 2D vector over `f32`.
///
/// Plain `Copy` value; arithmetic never raises, divisions by zero follow
/// IEEE semantics and produce `Inf`/`NaN`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Vector2D {
        Vector2D { x, y }
    }

    /// Polar to cartesian, `radians` counter-clockwise positive.
    #[inline]
    pub fn from_polar(len: f32, radians: f32) -> Vector2D {
        Vector2D::new(len * radians.cos(), len * radians.sin())
    }

    /// `v1 + (v2 - v1) * t`. `t` is not clamped, values outside `[0, 1]`
    /// extrapolate.
    #[inline]
    pub fn lerp(v1: Vector2D, v2: Vector2D, t: f32) -> Vector2D {
        Vector2D::new(v1.x + (v2.x - v1.x) * t, v1.y + (v2.y - v1.y) * t)
    }

    /// Vector of magnitude `scale` pointing in a uniformly random direction.
    pub fn random(scale: f32) -> Vector2D {
        let r = rand::thread_rng().gen_range(0.0..TAU);
        Vector2D::from_polar(scale, r)
    }

    /// Signed angle from `v1` to `v2` in `(-pi, pi]`, counter-clockwise
    /// positive.
    #[inline]
    pub fn angle_between(v1: Vector2D, v2: Vector2D) -> f32 {
        v1.cross(v2).atan2(v1.dot(v2))
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Exact comparison, no tolerance.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Same direction, magnitude `len`. The zero vector has no direction
    /// and comes out as `(len, 0)` since `atan2(0, 0) == 0`.
    #[inline]
    pub fn with_length(self, len: f32) -> Vector2D {
        Vector2D::from_polar(len, self.y.atan2(self.x))
    }

    /// Scale around `point` instead of the origin.
    #[inline]
    pub fn scale_about(self, point: Vector2D, sx: f32, sy: f32) -> Vector2D {
        // |sx  0  px(1-sx)|     x
        // |0  sy  py(1-sy)|  *  y
        // |0   0      1   |     1
        Vector2D::new(
            sx * self.x + point.x * (1.0 - sx),
            sy * self.y + point.y * (1.0 - sy),
        )
    }

    /// `self + v * s`.
    #[inline]
    pub fn scale_and_add(self, v: Vector2D, s: f32) -> Vector2D {
        self + v * s
    }

    #[inline]
    pub fn distance_to(self, p2: Vector2D) -> f32 {
        self.distance_squared_to(p2).sqrt()
    }

    #[inline]
    pub fn distance_squared_to(self, p2: Vector2D) -> f32 {
        let x = p2.x - self.x;
        let y = p2.y - self.y;
        x * x + y * y
    }

    /// Unit vector with the same direction. The zero vector normalizes to
    /// `(1, 0)` by convention.
    #[inline]
    pub fn normalized(self) -> Vector2D {
        let len2 = self.length_squared();
        if len2 == 0.0 {
            Vector2D::new(1.0, 0.0)
        } else {
            self * (1.0 / len2.sqrt())
        }
    }

    #[inline]
    pub fn dot(self, v: Vector2D) -> f32 {
        self.x * v.x + self.y * v.y
    }

    /// z component of the 3D cross product. Positive when `v` is
    /// counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, v: Vector2D) -> f32 {
        self.x * v.y - self.y * v.x
    }

    /// Perpendicular, 90 degrees counter-clockwise. Magnitude is kept, the
    /// result is not normalized.
    #[inline]
    pub fn left_hand_normal(self) -> Vector2D {
        Vector2D::new(-self.y, self.x)
    }

    /// Perpendicular, 90 degrees clockwise. Magnitude is kept.
    #[inline]
    pub fn right_hand_normal(self) -> Vector2D {
        Vector2D::new(self.y, -self.x)
    }

    /// Cartesian to polar as `(len, radians)`.
    #[inline]
    pub fn to_polar(self) -> (f32, f32) {
        (self.length(), self.y.atan2(self.x))
    }

    /// Rescale down to `max` if longer, otherwise unchanged.
    #[inline]
    pub fn clamp_max(self, max: f32) -> Vector2D {
        let len = self.length();
        if len > max {
            self * (max / len)
        } else {
            self
        }
    }

    /// Rotation about the origin, counter-clockwise positive.
    #[inline]
    pub fn rotate(self, radians: f32) -> Vector2D {
        // |cos  -sin  0|      x
        // |sin   cos  0|  *   y
        // | 0     0   1|      1
        let (sin, cos) = radians.sin_cos();
        Vector2D::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotation about a pivot: the offset from `point` is rotated and added
    /// back onto the original vector.
    #[inline]
    pub fn rotate_about(self, radians: f32, point: Vector2D) -> Vector2D {
        (self - point).rotate(radians) + self
    }

    /// Complex-style rotation by `v` taken as `(cos, sin) * |v|`. Cheaper
    /// than [`rotate`](Self::rotate) when the sin/cos pair is already at
    /// hand, but a non-unit `v` also scales the result by `|v|`.
    #[inline]
    pub fn rotate_by(self, v: Vector2D) -> Vector2D {
        Vector2D::new(self.x * v.x - self.y * v.y, self.x * v.y + self.y * v.x)
    }

    /// Projection of `self` onto `v`.
    #[inline]
    pub fn project_onto(self, v: Vector2D) -> Vector2D {
        //         /|
        //   self / |
        //       /  |
        //      --------  v
        //      proj
        let f = self.dot(v) / v.length_squared();
        v * f
    }

    /// Component of `self` orthogonal to `v`, `self - project_onto(v)`.
    #[inline]
    pub fn reject_from(self, v: Vector2D) -> Vector2D {
        self - self.project_onto(v)
    }

    /// `self - 2 (self . n) n`. `n` must be a unit vector, this is not
    /// checked.
    #[inline]
    pub fn reflect(self, n: Vector2D) -> Vector2D {
        self - n * (2.0 * self.dot(n))
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[Vector2D] (x:{} ,y:{})", self.x, self.y)
    }
}

vec_op_impl!(Add, add, Vector2D, x, y);
vec_op_impl!(Sub, sub, Vector2D, x, y);
vec_op_impl!(Mul, mul, Vector2D, x, y);
vec_op_impl!(Div, div, Vector2D, x, y);

vec_assign_op_impl!(AddAssign, add_assign, Vector2D, x, y);
vec_assign_op_impl!(SubAssign, sub_assign, Vector2D, x, y);
vec_assign_op_impl!(MulAssign, mul_assign, Vector2D, x, y);
vec_assign_op_impl!(DivAssign, div_assign, Vector2D, x, y);

scalar_op_impl!(Mul, mul, Vector2D, x, y);
scalar_op_impl!(Div, div, Vector2D, x, y);

scalar_assign_op_impl!(MulAssign, mul_assign, Vector2D, x, y);
scalar_assign_op_impl!(DivAssign, div_assign, Vector2D, x, y);

vec_neg_impl!(Vector2D, x, y);

/// 3D vector with a homogeneous `w` component.
///
/// `w == 0` marks a direction, `w == 1` a point; anything else wants a
/// [`project`](Vector3D::project) before use as cartesian coordinates.
/// Arithmetic and length act on x, y, z only and leave `w` alone.
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vector3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector3D {
    pub const X_AXIS: Vector3D = Vector3D::new(1.0, 0.0, 0.0);
    pub const Y_AXIS: Vector3D = Vector3D::new(0.0, 1.0, 0.0);
    pub const Z_AXIS: Vector3D = Vector3D::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Vector3D {
        Vector3D { x, y, z, w: 0.0 }
    }

    #[inline]
    pub const fn with_w(x: f32, y: f32, z: f32, w: f32) -> Vector3D {
        Vector3D { x, y, z, w }
    }

    /// Unsigned angle via `acos(dot / (|a||b|))`. NaN when either input has
    /// zero length; the quotient is not clamped against float drift outside
    /// `[-1, 1]`, callers needing robustness clamp themselves.
    #[inline]
    pub fn angle_between(a: Vector3D, b: Vector3D) -> f32 {
        (a.dot(b) / (a.length() * b.length())).acos()
    }

    #[inline]
    pub fn distance(pt1: Vector3D, pt2: Vector3D) -> f32 {
        let x = pt1.x - pt2.x;
        let y = pt1.y - pt2.y;
        let z = pt1.z - pt2.z;
        (x * x + y * y + z * z).sqrt()
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Exact comparison; `w` only takes part when `all_four` is set.
    #[inline]
    pub fn equals(self, to_compare: Vector3D, all_four: bool) -> bool {
        self.x == to_compare.x
            && self.y == to_compare.y
            && self.z == to_compare.z
            && (!all_four || self.w == to_compare.w)
    }

    #[inline]
    pub fn near_equals(self, to_compare: Vector3D, tolerance: f32, all_four: bool) -> bool {
        (self.x - to_compare.x).abs() < tolerance
            && (self.y - to_compare.y).abs() < tolerance
            && (self.z - to_compare.z).abs() < tolerance
            && (!all_four || (self.w - to_compare.w).abs() < tolerance)
    }

    /// Writes x, y, z and leaves `w` as it was.
    #[inline]
    pub fn set_to(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Scales to unit length in place and returns the original length.
    /// A zero vector is left untouched and 0 is returned.
    #[inline]
    pub fn normalize(&mut self) -> f32 {
        let len = self.length();
        if len != 0.0 {
            let inv = 1.0 / len;
            self.x *= inv;
            self.y *= inv;
            self.z *= inv;
        }
        len
    }

    #[inline]
    pub fn normalized(self) -> Vector3D {
        let mut v = self;
        v.normalize();
        v
    }

    /// Right-handed cross product. The result is a direction (`w == 0`).
    #[inline]
    pub fn cross(self, a: Vector3D) -> Vector3D {
        Vector3D::new(
            self.y * a.z - self.z * a.y,
            self.z * a.x - self.x * a.z,
            self.x * a.y - self.y * a.x,
        )
    }

    #[inline]
    pub fn dot(self, a: Vector3D) -> f32 {
        self.x * a.x + self.y * a.y + self.z * a.z
    }

    /// Homogeneous to cartesian: divides x, y, z by `w`. With `w == 0` the
    /// value is a direction and comes back unchanged.
    #[inline]
    pub fn project(self) -> Vector3D {
        if self.w == 0.0 {
            self
        } else {
            Vector3D::with_w(self.x / self.w, self.y / self.w, self.z / self.w, self.w)
        }
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[Vector3D] (x:{} ,y:{}, z:{}, w:{})",
            self.x, self.y, self.z, self.w
        )
    }
}

vec_op_impl!(Add, add, Vector3D, x, y, z);
vec_op_impl!(Sub, sub, Vector3D, x, y, z);

vec_assign_op_impl!(AddAssign, add_assign, Vector3D, x, y, z);
vec_assign_op_impl!(SubAssign, sub_assign, Vector3D, x, y, z);

scalar_op_impl!(Mul, mul, Vector3D, x, y, z);

scalar_assign_op_impl!(MulAssign, mul_assign, Vector3D, x, y, z);

vec_neg_impl!(Vector3D, x, y, z);
