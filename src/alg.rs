use std;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    #[inline]
    pub fn zero() -> Vec2 {
        Vec2::new(0., 0.)
    }

    #[inline]
    pub fn one() -> Vec2 {
        Vec2::new(1., 1.)
    }

    #[inline]
    pub fn right() -> Vec2 {
        Vec2::new(1., 0.)
    }

    #[inline]
    pub fn up() -> Vec2 {
        Vec2::new(0., 1.)
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn scale(self, scalar: f32) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }

    #[inline]
    pub fn mag_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn mag(self) -> f32 {
        self.mag_squared().sqrt()
    }

    /// Unit vector in the same direction.
    /// A zero-length vector is returned unchanged.
    #[inline]
    pub fn norm(self) -> Vec2 {
        let len = self.mag();

        if len != 0. {
            return self.scale(1. / len);
        }

        self
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(
            self.x + other.x,
            self.y + other.y,
        )
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(
            self.x - other.x,
            self.y - other.y,
        )
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Vec2;

    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, scalar: f32) -> Vec2 {
        self.scale(scalar)
    }
}

impl std::ops::Div<f32> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn div(self, scalar: f32) -> Vec2 {
        Vec2::new(
            self.x / scalar,
            self.y / scalar,
        )
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(array: [f32; 2]) -> Vec2 {
        Vec2::new(array[0], array[1])
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(vec: Vec2) -> [f32; 2] {
        [vec.x, vec.y]
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(out, "( {}, {} )", self.x, self.y)
    }
}

impl AbsDiffEq for Vec2 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Vec2, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vec2 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Vec2,
        epsilon: f32,
        max_relative: f32,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Vec2 {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Vec2, epsilon: f32, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}

/// 4x4 matrix, column-major as GLSL expects.
/// The diagonal is at 0, 5, 10, 15 and the translation at 12, 13, 14.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    #[inline]
    pub fn from_array(data: [f32; 16]) -> Mat4 {
        Mat4 { data }
    }

    #[inline]
    pub fn zero() -> Mat4 {
        Mat4::from_array([0.; 16])
    }

    #[inline]
    pub fn identity() -> Mat4 {
        Mat4::from_array([
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Overwrites the translation column; any existing translation is lost.
    #[inline]
    pub fn translate(mut self, x: f32, y: f32, z: f32) -> Mat4 {
        self.data[12] = x;
        self.data[13] = y;
        self.data[14] = z;

        self
    }

    /// Multiplies the first three diagonal entries, composing with any
    /// existing scale.
    #[inline]
    pub fn scale(mut self, x: f32, y: f32, z: f32) -> Mat4 {
        self.data[0] *= x;
        self.data[5] *= y;
        self.data[10] *= z;

        self
    }

    /// Parallel projection of the box bounded by the given planes.
    ///
    /// Bounds are not checked: a zero-width, -height or -depth volume
    /// yields infinite or NaN entries.
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Mat4 {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;

        let mut result = Mat4::zero();

        result.data[0] = 2. / width;
        result.data[5] = 2. / height;
        result.data[10] = -2. / depth;
        result.data[15] = 1.;

        result.data[12] = -(right + left) / width;
        result.data[13] = -(top + bottom) / height;
        result.data[14] = (far + near) / depth;

        result
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        &self.data
    }
}

impl Default for Mat4 {
    fn default() -> Mat4 {
        Mat4::identity()
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(data: [f32; 16]) -> Mat4 {
        Mat4::from_array(data)
    }
}

impl std::ops::Index<usize> for Mat4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.data[i]
    }
}

impl std::ops::IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.data[i]
    }
}

impl std::fmt::Display for Mat4 {
    // Printed in row order
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        let d = &self.data;

        write!(
            out,
            "[ {}, {}, {}, {} ]\n[ {}, {}, {}, {} ]\n\
            [ {}, {}, {}, {} ]\n[ {}, {}, {}, {} ]",
            d[0], d[4], d[8], d[12],
            d[1], d[5], d[9], d[13],
            d[2], d[6], d[10], d[14],
            d[3], d[7], d[11], d[15],
        )
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Mat4, epsilon: f32) -> bool {
        self.data.iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Mat4,
        epsilon: f32,
        max_relative: f32,
    ) -> bool {
        self.data.iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Mat4 {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Mat4, epsilon: f32, max_ulps: u32) -> bool {
        self.data.iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
