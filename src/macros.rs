/// Implements the conversions and standard traits shared by the three-axis sensor readings.
///
/// The type must have the fields `x`, `y` and `z` and derive `UniformArray`.
#[macro_export]
macro_rules! impl_reading_traits {
    ($type_name:ident, $type_param:ident) => {
        impl<$type_param> Copy for $type_name<$type_param> where $type_param: Copy {}

        impl<$type_param> Clone for $type_name<$type_param>
        where
            $type_param: Clone,
        {
            fn clone(&self) -> Self {
                Self::new(self.x.clone(), self.y.clone(), self.z.clone())
            }
        }

        impl<$type_param> Default for $type_name<$type_param>
        where
            $type_param: Default,
        {
            #[inline]
            fn default() -> Self {
                Self::new(Default::default(), Default::default(), Default::default())
            }
        }

        impl<$type_param> PartialEq for $type_name<$type_param>
        where
            $type_param: PartialEq,
        {
            fn eq(&self, other: &Self) -> bool {
                self.x == other.x && self.y == other.y && self.z == other.z
            }
        }

        impl<$type_param> core::fmt::Debug for $type_name<$type_param>
        where
            $type_param: core::fmt::Debug,
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_tuple(stringify!($type_name))
                    .field(&self.x)
                    .field(&self.y)
                    .field(&self.z)
                    .finish()
            }
        }

        impl<$type_param> From<$crate::types::Vector3<$type_param>> for $type_name<$type_param> {
            #[inline]
            fn from(value: $crate::types::Vector3<$type_param>) -> Self {
                Self::new(value.x, value.y, value.z)
            }
        }

        impl<$type_param> From<$type_name<$type_param>> for $crate::types::Vector3<$type_param> {
            #[inline]
            fn from(value: $type_name<$type_param>) -> Self {
                Self::new(value.x, value.y, value.z)
            }
        }

        impl<$type_param> From<&$type_name<$type_param>> for $crate::types::Vector3<$type_param>
        where
            $type_param: Clone,
        {
            #[inline]
            fn from(value: &$type_name<$type_param>) -> Self {
                Self::new(value.x.clone(), value.y.clone(), value.z.clone())
            }
        }

        impl<$type_param> core::ops::Mul<$type_param> for $type_name<$type_param>
        where
            $type_param: core::ops::Mul<$type_param, Output = $type_param> + Clone,
        {
            type Output = $type_name<$type_param>;

            fn mul(self, rhs: $type_param) -> Self::Output {
                Self::new(self.x * rhs.clone(), self.y * rhs.clone(), self.z * rhs)
            }
        }

        #[cfg(test)]
        paste::paste! {
            #[cfg(test)]
            mod [<tests_gen_ $type_name:lower>] {
                use super::*;

                #[test]
                fn test_len() {
                    let reading = $type_name::<f64>::default();
                    assert_eq!(reading.len(), 3);
                }

                #[test]
                fn test_index() {
                    let reading = $type_name::<f64>::new(1.0, 2.0, 3.0);
                    assert_eq!(reading[0], 1.0);
                    assert_eq!(reading[1], 2.0);
                    assert_eq!(reading[2], 3.0);
                }

                #[test]
                fn test_vector_conversion() {
                    let reading = $type_name::<f64>::new(1.0, -2.0, 3.5);
                    let vector = $crate::types::Vector3::from(&reading);
                    assert_eq!(vector, $crate::types::Vector3::new(1.0, -2.0, 3.5));
                    assert_eq!($type_name::from(vector), reading);
                }

                #[test]
                fn test_scale() {
                    let reading = $type_name::<f64>::new(1.0, -2.0, 3.5) * 2.0;
                    assert_eq!(reading, $type_name::new(2.0, -4.0, 7.0));
                }
            }
        }
    };
}
