use crate::curves::bls12381::G1;
use crate::curves::bls12381::G2;
use crate::traits::Group;
use crate::traits::Scheme;

type Scalar = <G2 as Group>::Scalar;

/// BLS12-381 with public keys and aggregation commitments in G2, signatures
/// and share-verification commitments in G1 (RFC 9380 hash-to-curve on G1).
#[derive(Debug)]
pub struct ThresholdBls12381;

impl Scheme for ThresholdBls12381 {
    const ID: &'static str = "threshold-bls12381-g1-sig";
    type Key = G2;
    type Sig = G1;
    type Scalar = Scalar;
}
