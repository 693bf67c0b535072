/// Fixed-size single precision vectors (2, 3 and 4 components)
use std::fmt;
use std::ops;

/// Convert an angle in degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

macro_rules! vec_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<$v> for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $v) -> $v {
                $v { $( $e: ops::$trait::$func(self.$e, rhs.$e), )* }
            }
        }
    };
}

macro_rules! vec_impl {
    ($v: ident, $n: literal, $($e: ident),*) => {
        #[derive(Debug, Default, Copy, Clone, PartialEq)]
        #[repr(C)]
        pub struct $v {
            $( pub $e: f32, )*
        }

        impl $v {
            #[inline]
            pub const fn new($( $e: f32, )*) -> $v {
                $v { $( $e, )* }
            }

            /// All components set to `a`
            #[inline]
            pub const fn splat(a: f32) -> $v {
                $v { $( $e: a, )* }
            }

            #[inline]
            pub const fn zero() -> $v {
                $v::splat(0.0)
            }

            #[inline]
            pub const fn one() -> $v {
                $v::splat(1.0)
            }

            #[inline]
            pub fn to_array(self) -> [f32; $n] {
                [$( self.$e, )*]
            }

            #[inline]
            pub fn dot(self, b: $v) -> f32 {
                0.0 $( + self.$e * b.$e )*
            }

            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn length(self) -> f32 {
                self.length_squared().sqrt()
            }

            #[inline]
            pub fn distance(self, b: $v) -> f32 {
                (self - b).length()
            }

            /// Divide every component by the length, in place.
            ///
            /// The vector must not be zero-length: the components become NaN.
            #[inline]
            pub fn normalize(&mut self) {
                let length = self.length();
                $( self.$e /= length; )*
            }

            /// Normalized copy, see [`Self::normalize`].
            #[inline]
            pub fn normalized(mut self) -> $v {
                self.normalize();
                self
            }

            /// True when every component is within `epsilon` of `other`
            #[inline]
            pub fn approx_eq(self, other: $v, epsilon: f32) -> bool {
                true $( && (self.$e - other.$e).abs() <= epsilon )*
            }
        }

        impl From<[f32; $n]> for $v {
            #[inline]
            fn from(a: [f32; $n]) -> $v {
                let [$( $e, )*] = a;
                $v { $( $e, )* }
            }
        }

        impl From<$v> for [f32; $n] {
            #[inline]
            fn from(v: $v) -> [f32; $n] {
                v.to_array()
            }
        }

        impl fmt::Display for $v {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let prec = f.precision().unwrap_or(3);
                let parts: Vec<String> = vec![$( format!("{:.prec$}", self.$e, prec = prec), )*];
                write!(f, "{}({})", stringify!($v), parts.join(", "))
            }
        }

        vec_op_impl!(Add, add, $v, $($e),*);
        vec_op_impl!(Sub, sub, $v, $($e),*);
        vec_op_impl!(Mul, mul, $v, $($e),*);

        /// Component-wise division. Every component of `rhs` must be non-zero.
        impl ops::Div<$v> for $v {
            type Output = $v;

            #[inline]
            fn div(self, rhs: $v) -> $v {
                debug_assert!(
                    true $( && rhs.$e != 0.0 )*,
                    "division by a vector with a zero component: {:?}",
                    rhs
                );
                $v { $( $e: self.$e / rhs.$e, )* }
            }
        }

        impl ops::Mul<f32> for $v {
            type Output = $v;

            #[inline]
            fn mul(self, t: f32) -> $v {
                $v { $( $e: self.$e * t, )* }
            }
        }

        impl ops::Mul<$v> for f32 {
            type Output = $v;

            #[inline]
            fn mul(self, v: $v) -> $v {
                v * self
            }
        }

        impl ops::Neg for $v {
            type Output = $v;

            #[inline]
            fn neg(self) -> $v {
                $v { $( $e: -self.$e, )* }
            }
        }

        impl ops::AddAssign<$v> for $v {
            #[inline]
            fn add_assign(&mut self, rhs: $v) {
                *self = *self + rhs;
            }
        }

        impl ops::SubAssign<$v> for $v {
            #[inline]
            fn sub_assign(&mut self, rhs: $v) {
                *self = *self - rhs;
            }
        }

        impl ops::MulAssign<f32> for $v {
            #[inline]
            fn mul_assign(&mut self, t: f32) {
                *self = *self * t;
            }
        }
    };
}

vec_impl!(Vector2, 2, x, y);
vec_impl!(Vector3, 3, x, y, z);
vec_impl!(Vector4, 4, x, y, z, w);

impl Vector2 {
    pub const fn up() -> Self {
        Self::new(0.0, 1.0)
    }

    pub const fn down() -> Self {
        Self::new(0.0, -1.0)
    }

    pub const fn left() -> Self {
        Self::new(-1.0, 0.0)
    }

    pub const fn right() -> Self {
        Self::new(1.0, 0.0)
    }

    pub fn red(&self) -> f32 {
        self.x
    }

    pub fn green(&self) -> f32 {
        self.y
    }
}

impl Vector3 {
    pub const fn up() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    pub const fn down() -> Self {
        Self::new(0.0, -1.0, 0.0)
    }

    pub const fn left() -> Self {
        Self::new(-1.0, 0.0, 0.0)
    }

    pub const fn right() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Right-handed: forward looks down -Z
    pub const fn forward() -> Self {
        Self::new(0.0, 0.0, -1.0)
    }

    pub const fn backward() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Right-handed cross product, `a.cross(b) == -b.cross(a)`
    #[inline]
    pub fn cross(self, b: Vector3) -> Vector3 {
        Vector3 {
            x: self.y * b.z - self.z * b.y,
            y: self.z * b.x - self.x * b.z,
            z: self.x * b.y - self.y * b.x,
        }
    }

    #[inline]
    pub fn extend(self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }

    pub fn red(&self) -> f32 {
        self.x
    }

    pub fn green(&self) -> f32 {
        self.y
    }

    pub fn blue(&self) -> f32 {
        self.z
    }
}

impl Vector4 {
    pub const fn up() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    pub const fn down() -> Self {
        Self::new(0.0, -1.0, 0.0, 0.0)
    }

    pub const fn left() -> Self {
        Self::new(-1.0, 0.0, 0.0, 0.0)
    }

    pub const fn right() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub const fn forward() -> Self {
        Self::new(0.0, 0.0, -1.0, 0.0)
    }

    pub const fn backward() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// Drop the `w` component
    #[inline]
    pub fn truncate(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn red(&self) -> f32 {
        self.x
    }

    pub fn green(&self) -> f32 {
        self.y
    }

    pub fn blue(&self) -> f32 {
        self.z
    }

    pub fn alpha(&self) -> f32 {
        self.w
    }
}
