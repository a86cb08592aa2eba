use core::fmt;
use core::ops;

use bytemuck::{Pod, Zeroable};

use crate::vec::{Vector2D, Vector3D};

/// 3x3 affine transform for 2D, stored as the six varying components of
///
/// ```text
/// |  a   b   tx |      x
/// |  c   d   ty |  *   y
/// |  0   0   1  |      1
/// ```
///
/// post-multiplied with column vectors, same order as in glsl. The bottom
/// row is implicit and always `[0, 0, 1]`. Transformed coordinates are
/// `x' = a*x + b*y + tx` and `y' = c*x + d*y + ty`.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Matrix2D {
    pub const IDENTITY: Matrix2D = Matrix2D::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Matrix2D {
        Matrix2D { a, b, c, d, tx, ty }
    }

    /// Closed form for scale, then rotate, then translate, applied to a
    /// point in that order. Same result as
    /// `Matrix2D::IDENTITY.scale(sx, sy).rotate(rad).translate(tx, ty)`
    /// without the intermediate products.
    #[inline]
    pub fn srt(scale_x: f32, scale_y: f32, rad: f32, tx: f32, ty: f32) -> Matrix2D {
        let (sin, cos) = rad.sin_cos();
        Matrix2D::new(
            cos * scale_x,
            -sin * scale_y,
            sin * scale_x,
            cos * scale_y,
            tx,
            ty,
        )
    }

    #[inline]
    pub const fn from_scaling(scale_x: f32, scale_y: f32) -> Matrix2D {
        Matrix2D::new(scale_x, 0.0, 0.0, scale_y, 0.0, 0.0)
    }

    #[inline]
    pub const fn from_translation(pos_x: f32, pos_y: f32) -> Matrix2D {
        Matrix2D::new(1.0, 0.0, 0.0, 1.0, pos_x, pos_y)
    }

    #[inline]
    pub fn from_rotation(rad: f32) -> Matrix2D {
        let (s, c) = rad.sin_cos();
        Matrix2D::new(c, -s, s, c, 0.0, 0.0)
    }

    /// Determinant of the 2x2 linear part; the matrix is invertible iff
    /// this is non-zero.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.a * self.d - self.b * self.c
    }

    /// Adds a translation on top of the current transform.
    #[inline]
    pub fn translate(self, tx: f32, ty: f32) -> Matrix2D {
        //  1   0   tx
        //  0   1   ty  *  self
        //  0   0   1
        Matrix2D {
            tx: self.tx + tx,
            ty: self.ty + ty,
            ..self
        }
    }

    /// Adds a scale on top of the current transform. Scales the linear
    /// part and the translation column.
    #[inline]
    pub fn scale(self, sx: f32, sy: f32) -> Matrix2D {
        //  sx  0   0
        //  0   sy  0  *  self
        //  0   0   1
        Matrix2D::new(
            self.a * sx,
            self.b * sx,
            self.c * sy,
            self.d * sy,
            self.tx * sx,
            self.ty * sy,
        )
    }

    /// Adds a rotation on top of the current transform, counter-clockwise
    /// positive.
    #[inline]
    pub fn rotate(self, angle: f32) -> Matrix2D {
        // |  cos -sin  0|
        // |  sin  cos  0|  *  self
        let (sin, cos) = angle.sin_cos();
        Matrix2D::new(
            self.a * cos - self.c * sin,
            self.b * cos - self.d * sin,
            self.a * sin + self.c * cos,
            self.b * sin + self.d * cos,
            self.tx * cos - self.ty * sin,
            self.tx * sin + self.ty * cos,
        )
    }

    /// `self * m`: when the product is applied to a point, `m`'s transform
    /// happens first.
    #[inline]
    pub fn prepend(self, m: Matrix2D) -> Matrix2D {
        Matrix2D::new(
            self.a * m.a + self.b * m.c,
            self.a * m.b + self.b * m.d,
            self.c * m.a + self.d * m.c,
            self.c * m.b + self.d * m.d,
            self.a * m.tx + self.b * m.ty + self.tx,
            self.c * m.tx + self.d * m.ty + self.ty,
        )
    }

    /// `m * self`: when the product is applied to a point, `m`'s transform
    /// happens last.
    #[inline]
    pub fn append(self, m: Matrix2D) -> Matrix2D {
        m.prepend(self)
    }

    /// Full affine transform of a point, translation included.
    #[inline]
    pub fn transform_point(&self, p: Vector2D) -> Vector2D {
        Vector2D::new(
            self.a * p.x + self.b * p.y + self.tx,
            self.c * p.x + self.d * p.y + self.ty,
        )
    }

    /// Transforms a direction with the linear part only, translation is
    /// ignored.
    #[inline]
    pub fn transform_vector(&self, v: Vector2D) -> Vector2D {
        Vector2D::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }

    /// Inverse transform, or `None` when the determinant is exactly zero.
    /// There is no near-singular tolerance; a tiny non-zero determinant
    /// inverts to huge components instead of failing.
    pub fn inverse(self) -> Option<Matrix2D> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        let det = 1.0 / det;
        Some(Matrix2D::new(
            self.d * det,
            -self.b * det,
            -self.c * det,
            self.a * det,
            (self.b * self.ty - self.d * self.tx) * det,
            (self.c * self.tx - self.a * self.ty) * det,
        ))
    }

    /// Flattens into the 9-element layout a `uniformMatrix3fv`-style upload
    /// expects. Column major (the default for GL) transposes into
    /// `[a, c, 0, b, d, 0, tx, ty, 1]`; row major keeps
    /// `[a, b, tx, c, d, ty, 0, 0, 1]`.
    #[inline]
    pub fn to_array(self, column_major: bool) -> [f32; 9] {
        let mut out = [0.0; 9];
        self.write_array(&mut out, column_major);
        out
    }

    /// Same layout as [`to_array`](Self::to_array) into a caller-owned
    /// buffer.
    pub fn write_array(&self, out: &mut [f32; 9], column_major: bool) {
        if column_major {
            // | a  c  0 |
            // | b  d  0 |
            // | tx ty 1 |
            out[0] = self.a;
            out[1] = self.c;
            out[2] = 0.0;
            out[3] = self.b;
            out[4] = self.d;
            out[5] = 0.0;
            out[6] = self.tx;
            out[7] = self.ty;
            out[8] = 1.0;
        } else {
            out[0] = self.a;
            out[1] = self.b;
            out[2] = self.tx;
            out[3] = self.c;
            out[4] = self.d;
            out[5] = self.ty;
            out[6] = 0.0;
            out[7] = 0.0;
            out[8] = 1.0;
        }
    }
}

impl Default for Matrix2D {
    #[inline]
    fn default() -> Matrix2D {
        Matrix2D::IDENTITY
    }
}

impl ops::Mul<Matrix2D> for Matrix2D {
    type Output = Matrix2D;

    #[inline]
    fn mul(self, rhs: Matrix2D) -> Matrix2D {
        self.prepend(rhs)
    }
}

impl ops::MulAssign<Matrix2D> for Matrix2D {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix2D) {
        *self = self.prepend(rhs);
    }
}

impl ops::Mul<Vector2D> for Matrix2D {
    type Output = Vector2D;

    #[inline]
    fn mul(self, rhs: Vector2D) -> Vector2D {
        self.transform_point(rhs)
    }
}

impl fmt::Display for Matrix2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[Matrix2D] (a:{} ,b:{} ,c:{} ,d:{} ,tx:{} ,ty:{})",
            self.a, self.b, self.c, self.d, self.tx, self.ty
        )
    }
}

/// General 4x4 transform, all 16 components stored explicitly with
/// row-major naming:
///
/// ```text
///       x   y   z   t
///    -------------------
///    | n11 n12 n13 n14 |
///    | n21 n22 n23 n24 |
///    | n31 n32 n33 n34 |
///    | n41 n42 n43 n44 |
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix3D {
    pub n11: f32,
    pub n12: f32,
    pub n13: f32,
    pub n14: f32,
    pub n21: f32,
    pub n22: f32,
    pub n23: f32,
    pub n24: f32,
    pub n31: f32,
    pub n32: f32,
    pub n33: f32,
    pub n34: f32,
    pub n41: f32,
    pub n42: f32,
    pub n43: f32,
    pub n44: f32,
}

impl Matrix3D {
    pub const IDENTITY: Matrix3D = Matrix3D::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    );

    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        n11: f32,
        n12: f32,
        n13: f32,
        n14: f32,
        n21: f32,
        n22: f32,
        n23: f32,
        n24: f32,
        n31: f32,
        n32: f32,
        n33: f32,
        n34: f32,
        n41: f32,
        n42: f32,
        n43: f32,
        n44: f32,
    ) -> Matrix3D {
        Matrix3D {
            n11, n12, n13, n14,
            n21, n22, n23, n24,
            n31, n32, n33, n34,
            n41, n42, n43, n44,
        }
    }

    /// Right-handed orientation basis placed at `eye`: forward is
    /// `normalize(eye - target)`, right is `normalize(forward x up)`, true
    /// up is `right x forward`. The first three columns are (right, up,
    /// forward), the fourth is `eye`, the bottom row `(0, 0, 0, 1)`.
    ///
    /// With `eye == target`, or `up` parallel to forward, a basis vector
    /// has zero length and the whole matrix fills with NaN. No error is
    /// raised; check the inputs if that matters.
    pub fn look_at(eye: Vector3D, target: Vector3D, up: Vector3D) -> Matrix3D {
        let f = eye - target;
        let f = f * (1.0 / f.length());
        let r = f.cross(up);
        let r = r * (1.0 / r.length());
        let u = r.cross(f);

        Matrix3D::new(
            r.x, u.x, f.x, eye.x, //
            r.y, u.y, f.y, eye.y, //
            r.z, u.z, f.z, eye.z, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// In-place [`look_at`](Self::look_at) for a reused instance.
    #[inline]
    pub fn set_look_at(&mut self, eye: Vector3D, target: Vector3D, up: Vector3D) {
        *self = Matrix3D::look_at(eye, target, up);
    }

    /// Inverse of a rigid transform: transposed rotation and `-R^T * t`
    /// translation. Only valid when the upper 3x3 is an orthonormal
    /// rotation; that precondition is assumed, not checked.
    pub fn inverse_tr(self) -> Matrix3D {
        let t = self;
        Matrix3D::new(
            t.n11,
            t.n21,
            t.n31,
            -(t.n11 * t.n14 + t.n21 * t.n24 + t.n31 * t.n34),
            t.n12,
            t.n22,
            t.n32,
            -(t.n12 * t.n14 + t.n22 * t.n24 + t.n32 * t.n34),
            t.n13,
            t.n23,
            t.n33,
            -(t.n13 * t.n14 + t.n23 * t.n24 + t.n33 * t.n34),
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }

    /// 16-element flat layout, column major by default as GL uniform
    /// uploads want it.
    #[inline]
    pub fn to_array(self, column_major: bool) -> [f32; 16] {
        let mut out = [0.0; 16];
        self.write_array(&mut out, column_major);
        out
    }

    /// Same layout as [`to_array`](Self::to_array) into a caller-owned
    /// buffer.
    pub fn write_array(&self, out: &mut [f32; 16], column_major: bool) {
        let t = self;
        if column_major {
            out[0] = t.n11;
            out[4] = t.n12;
            out[8] = t.n13;
            out[12] = t.n14;
            out[1] = t.n21;
            out[5] = t.n22;
            out[9] = t.n23;
            out[13] = t.n24;
            out[2] = t.n31;
            out[6] = t.n32;
            out[10] = t.n33;
            out[14] = t.n34;
            out[3] = t.n41;
            out[7] = t.n42;
            out[11] = t.n43;
            out[15] = t.n44;
        } else {
            out[0] = t.n11;
            out[1] = t.n12;
            out[2] = t.n13;
            out[3] = t.n14;
            out[4] = t.n21;
            out[5] = t.n22;
            out[6] = t.n23;
            out[7] = t.n24;
            out[8] = t.n31;
            out[9] = t.n32;
            out[10] = t.n33;
            out[11] = t.n34;
            out[12] = t.n41;
            out[13] = t.n42;
            out[14] = t.n43;
            out[15] = t.n44;
        }
    }

    /// Exact inverse of [`to_array`](Self::to_array) for the same
    /// `column_major` flag.
    pub fn from_array(arr: &[f32; 16], column_major: bool) -> Matrix3D {
        if column_major {
            Matrix3D::new(
                arr[0], arr[4], arr[8], arr[12], //
                arr[1], arr[5], arr[9], arr[13], //
                arr[2], arr[6], arr[10], arr[14], //
                arr[3], arr[7], arr[11], arr[15],
            )
        } else {
            Matrix3D::new(
                arr[0], arr[1], arr[2], arr[3], //
                arr[4], arr[5], arr[6], arr[7], //
                arr[8], arr[9], arr[10], arr[11], //
                arr[12], arr[13], arr[14], arr[15],
            )
        }
    }
}

impl Default for Matrix3D {
    #[inline]
    fn default() -> Matrix3D {
        Matrix3D::IDENTITY
    }
}

impl fmt::Display for Matrix3D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let t = self;
        write!(
            f,
            "[Matrix3D] ({} {} {} {} | {} {} {} {} | {} {} {} {} | {} {} {} {})",
            t.n11, t.n12, t.n13, t.n14, //
            t.n21, t.n22, t.n23, t.n24, //
            t.n31, t.n32, t.n33, t.n34, //
            t.n41, t.n42, t.n43, t.n44,
        )
    }
}
