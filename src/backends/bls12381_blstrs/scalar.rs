use super::super::error::BackendsError;
use crate::curves::bls12381;
use crate::traits::ScalarField;

use std::fmt::Display;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::SubAssign;

use core::fmt;
use group::ff::Field;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaChaRng;
use rand_core::OsRng;
use rand_core::RngCore;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Scalar(pub(super) blstrs::Scalar);

impl ScalarField for Scalar {
    const SCALAR_SIZE: usize = bls12381::SCALAR_SIZE;
    type Serialized = [u8; bls12381::SCALAR_SIZE];

    fn one() -> Self {
        Self(blstrs::Scalar::ONE)
    }

    fn zero() -> Self {
        Self(blstrs::Scalar::ZERO)
    }

    fn random() -> Result<Self, BackendsError> {
        let mut seed = [0u8; 32];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|_| BackendsError::Randomness)?;
        let mut rng = ChaChaRng::from_seed(seed);

        Ok(Self(blstrs::Scalar::random(&mut rng)))
    }

    fn to_bytes_be(self) -> Result<Self::Serialized, BackendsError> {
        Ok(self.0.to_bytes_be())
    }

    fn from_bytes_be(bytes: &[u8]) -> Result<Self, BackendsError> {
        let bytes: [u8; Self::SCALAR_SIZE] =
            bytes
                .try_into()
                .map_err(|_| BackendsError::InvalidInputLenght {
                    expected: Self::SCALAR_SIZE,
                    received: bytes.len(),
                })?;

        let scalar = blstrs::Scalar::from_bytes_be(&bytes)
            .into_option()
            .ok_or(BackendsError::NonCanonicalScalar)?;

        Ok(Self(scalar))
    }

    fn from_u64(val: u64) -> Self {
        let limbs: [u64; 4] = [val, 0, 0, 0];
        let mut out = blst_lib::blst_fr::default();

        unsafe { blst_lib::blst_fr_from_uint64(&mut out, limbs.as_ptr()) };

        Self(blstrs::Scalar::from(out))
    }

    fn invert(&self) -> Result<Self, BackendsError> {
        let scalar = self
            .0
            .invert()
            .into_option()
            .ok_or(BackendsError::NonInvertible)?;

        Ok(Self(scalar))
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Scalar;

    #[inline]
    fn mul(self, rhs: &Scalar) -> Scalar {
        let mut out = self;
        out.0 *= rhs.0;
        out
    }
}

impl Add<&Scalar> for Scalar {
    type Output = Scalar;

    #[inline]
    fn add(self, rhs: &Scalar) -> Scalar {
        let mut out = self;
        out.0 += rhs.0;
        out
    }
}

impl MulAssign<&Scalar> for Scalar {
    #[inline]
    fn mul_assign(&mut self, rhs: &Scalar) {
        self.0 *= rhs.0;
    }
}

impl AddAssign<&Scalar> for Scalar {
    #[inline]
    fn add_assign(&mut self, rhs: &Scalar) {
        self.0.add_assign(rhs.0)
    }
}

impl SubAssign<&Scalar> for Scalar {
    #[inline]
    fn sub_assign(&mut self, rhs: &Scalar) {
        self.0 -= rhs.0;
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &hex::encode(self.0.to_bytes_be()))
    }
}
