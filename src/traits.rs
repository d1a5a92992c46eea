use crate::backends::error::BackendsError;
use crate::backends::error::BlsError;

use std::fmt::Debug;
use std::fmt::Display;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::SubAssign;

/// Capability interface over one point group of a pairing curve.
///
/// The DKG core is written against this trait family only; the concrete
/// pairing library stays behind `crate::backends`.
pub trait Group: Sized {
    const DST: &'static [u8];
    const POINT_SIZE: usize;

    type Affine: Affine
        + Clone
        + From<Self::Projective>
        + Into<Self::Projective>
        + PartialEq
        + for<'a> Mul<&'a Self::Scalar, Output = Self::Projective>
        + Mul<Self::Scalar, Output = Self::Projective>;

    type Projective: Projective
        + Clone
        + From<Self::Affine>
        + Into<Self::Affine>
        + for<'a> From<&'a Self::Affine>
        + for<'a> MulAssign<&'a Self::Scalar>
        + for<'a> AddAssign<&'a Self::Affine>
        + for<'a> AddAssign<&'a Self::Projective>;

    type Scalar: ScalarField + for<'a> Mul<&'a Self::Affine, Output = Self::Projective>;
}

/// Element of the prime-order scalar field shared by both groups.
/// Every value is reduced into `[0, order)` by construction.
pub trait ScalarField:
    Default
    + Sync
    + Send
    + Sized
    + Debug
    + PartialEq
    + Copy
    + Display
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> AddAssign<&'a Self>
{
    const SCALAR_SIZE: usize;
    /// Serialized scalar output.
    /// Configured for all implementors as array [0u8; <curve>::<scalar-size>]
    type Serialized: AsRef<[u8]> + Into<Vec<u8>>;

    fn zero() -> Self;
    fn one() -> Self;
    /// Uniform scalar from the OS entropy source. Entropy exhaustion is a
    /// fatal error for the caller, never substituted.
    fn random() -> Result<Self, BackendsError>;
    fn invert(&self) -> Result<Self, BackendsError>;
    fn from_u64(val: u64) -> Self;
    fn to_bytes_be(self) -> Result<Self::Serialized, BackendsError>;
    fn from_bytes_be(bytes: &[u8]) -> Result<Self, BackendsError>;
}

pub trait Affine: Default + Sync + Send + Sized + PartialEq + Debug + Display {
    /// Serialized point output.
    /// Configured for all implementors as array [0u8; <curve>::<group>::<point-size>]
    type Serialized: AsRef<[u8]> + Into<Vec<u8>>;

    fn generator() -> Self;
    fn identity() -> Self;
    fn is_on_curve(&self) -> bool;
    fn is_identity(&self) -> bool;
    fn serialize(&self) -> Result<Self::Serialized, BackendsError>;
    fn deserialize(bytes: &[u8]) -> Result<Self, BackendsError>;
}

pub trait Projective: Sized + Debug + PartialEq + for<'a> AddAssign<&'a Self> {
    /// Serialized point output.
    /// Configured for all implementors as array [0u8; <curve>::<group>::<point-size>]
    type Serialized: AsRef<[u8]> + Into<Vec<u8>>;

    fn identity() -> Self;
    fn generator() -> Self;
    fn serialize(&self) -> Result<Self::Serialized, BackendsError>;
    fn deserialize(bytes: &[u8]) -> Result<Self, BackendsError>;
}

/// The pairing-dependent operations of the key group.
///
/// `Pair` is the affine type of the opposite group, where signatures and the
/// sig-group halves of commitment pairs live.
pub trait PairingCurve: Group {
    type Pair: Affine;

    fn bls_sign(msg: &[u8], sk: &Self::Scalar) -> Result<Self::Pair, BlsError>;
    fn bls_verify(key: &Self::Affine, sig: &Self::Pair, msg: &[u8]) -> Result<(), BlsError>;

    /// Pairing-product check binding a key-group commitment and a sig-group
    /// commitment to the same scalar: `e(C1, G2) == e(G1, C2)`. This is the
    /// only way a `(C1, C2)` pair may be trusted without revealing the scalar.
    fn same_commitment(key_commit: &Self::Affine, pair_commit: &Self::Pair) -> bool;
}

pub trait Scheme: 'static + Sized {
    const ID: &'static str;

    /// Group holding public keys and the commitments that feed key
    /// aggregation.
    type Key: Group<Scalar = Self::Scalar>
        + PairingCurve<Scalar = Self::Scalar, Pair = <Self::Sig as Group>::Affine>;

    /// Group holding signatures and the commitments used to verify shares.
    type Sig: Group<Scalar = Self::Scalar>;

    type Scalar: ScalarField
        + for<'a> Mul<&'a <Self::Key as Group>::Affine, Output = <Self::Key as Group>::Projective>;

    fn sk_to_pk(sk: &Self::Scalar) -> <Self::Key as Group>::Affine {
        (<Self::Key as Group>::Affine::generator() * sk).into()
    }
}
