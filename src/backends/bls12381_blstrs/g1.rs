use super::scalar::Scalar;
use crate::backends::error::BackendsError;
use crate::curves::bls12381;
use crate::traits::Affine;
use crate::traits::Group;
use crate::traits::Projective;

use core::fmt;
use group::prime::PrimeCurveAffine as _;
use group::Group as _;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;

#[derive(Debug, Clone, Default)]
pub struct G1Affine(pub(super) blstrs::G1Affine);

impl Affine for G1Affine {
    type Serialized = [u8; bls12381::POINT_SIZE_G1];

    fn generator() -> Self {
        Self(blstrs::G1Affine::generator())
    }

    fn serialize(&self) -> Result<Self::Serialized, BackendsError> {
        Ok(self.0.to_compressed())
    }

    fn deserialize(bytes: &[u8]) -> Result<Self, BackendsError> {
        let bytes: &[u8; bls12381::G1::POINT_SIZE] =
            &bytes
                .try_into()
                .map_err(|_| BackendsError::InvalidInputLenght {
                    expected: bls12381::G1::POINT_SIZE,
                    received: bytes.len(),
                })?;

        let point = blstrs::G1Affine::from_compressed(bytes)
            .into_option()
            .ok_or(BackendsError::NonCanonicalPoint)?;

        Ok(Self(point))
    }

    fn is_on_curve(&self) -> bool {
        self.0.is_on_curve().into()
    }

    fn is_identity(&self) -> bool {
        self.0.is_identity().into()
    }

    fn identity() -> Self {
        Self(blstrs::G1Affine::identity())
    }
}

#[derive(Debug, Clone)]
pub struct G1Projective(pub(super) blstrs::G1Projective);

impl Projective for G1Projective {
    type Serialized = [u8; bls12381::POINT_SIZE_G1];

    fn generator() -> Self {
        Self(blstrs::G1Projective::generator())
    }

    fn serialize(&self) -> Result<Self::Serialized, BackendsError> {
        Ok(self.0.to_compressed())
    }

    fn deserialize(bytes: &[u8]) -> Result<Self, BackendsError> {
        let bytes: &[u8; bls12381::G1::POINT_SIZE] =
            &bytes
                .try_into()
                .map_err(|_| BackendsError::InvalidInputLenght {
                    expected: bls12381::G1::POINT_SIZE,
                    received: bytes.len(),
                })?;

        let point = blstrs::G1Projective::from_compressed(bytes)
            .into_option()
            .ok_or(BackendsError::NonCanonicalPoint)?;

        Ok(Self(point))
    }

    fn identity() -> Self {
        G1Projective(blstrs::G1Projective::identity())
    }
}

impl Mul<&Scalar> for G1Affine {
    type Output = G1Projective;

    fn mul(self, rhs: &Scalar) -> Self::Output {
        G1Projective(self.0 * rhs.0)
    }
}

impl Mul<&Scalar> for &G1Affine {
    type Output = G1Projective;

    fn mul(self, rhs: &Scalar) -> Self::Output {
        G1Projective(self.0 * rhs.0)
    }
}

impl Mul<&G1Affine> for &Scalar {
    type Output = G1Projective;

    fn mul(self, rhs: &G1Affine) -> Self::Output {
        G1Projective(rhs.0 * self.0)
    }
}

impl Mul<Scalar> for G1Affine {
    type Output = G1Projective;

    fn mul(self, rhs: Scalar) -> Self::Output {
        G1Projective(self.0 * rhs.0)
    }
}

impl Mul<&G1Affine> for Scalar {
    type Output = G1Projective;

    fn mul(self, rhs: &G1Affine) -> Self::Output {
        G1Projective(rhs.0 * self.0)
    }
}

impl From<&G1Projective> for G1Affine {
    fn from(p: &G1Projective) -> G1Affine {
        G1Affine(blstrs::G1Affine::from(p.0))
    }
}

impl From<G1Projective> for G1Affine {
    fn from(p: G1Projective) -> G1Affine {
        G1Affine::from(&p)
    }
}

impl From<&G1Affine> for G1Projective {
    fn from(p: &G1Affine) -> G1Projective {
        G1Projective(blstrs::G1Projective::from(p.0))
    }
}

impl From<G1Affine> for G1Projective {
    fn from(p: G1Affine) -> G1Projective {
        G1Projective(blstrs::G1Projective::from(p.0))
    }
}

impl MulAssign<&Scalar> for G1Projective {
    #[inline]
    fn mul_assign(&mut self, rhs: &Scalar) {
        self.0 *= rhs.0;
    }
}

impl AddAssign<&G1Affine> for G1Projective {
    #[inline]
    fn add_assign(&mut self, rhs: &G1Affine) {
        self.0 += rhs.0;
    }
}

impl AddAssign<&G1Projective> for G1Projective {
    #[inline]
    fn add_assign(&mut self, rhs: &G1Projective) {
        self.0 += rhs.0;
    }
}

impl PartialEq for G1Affine {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl PartialEq for G1Projective {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl fmt::Display for G1Affine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &hex::encode(self.0.to_compressed()))
    }
}
