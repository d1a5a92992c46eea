use crate::backends::error::BlsError;
use crate::dkg::poly::Index;
use crate::points::KeyPoint;
use crate::points::SigPoint;
use crate::points::SigPointProjective;
use crate::traits::Affine;
use crate::traits::Group;
use crate::traits::PairingCurve;
use crate::traits::Projective;
use crate::traits::ScalarField;
use crate::traits::Scheme;

use std::collections::HashSet;

const INDEX_LEN: usize = 2;

#[derive(thiserror::Error, Debug)]
pub enum TBlsError {
    #[error("sign: {0}")]
    Sign(#[source] BlsError),
    #[error("verify: {0}")]
    Verify(#[source] BlsError),
    #[error("failed to serialize a partial signature")]
    SerializeShare,
    #[error("failed to deserialize a partial signature")]
    DeserializeShare,
    #[error("invalid input lenght of a partial signature")]
    ShareInputLen,
    #[error("signer index {0} does not fit the wire encoding")]
    IndexWidth(Index),
    #[error("expected {expected} partial signatures, received {received}")]
    WrongCardinality { expected: usize, received: usize },
    #[error("at least two partial signatures are required")]
    TooFewShares,
    #[error("duplicate signer index {0}")]
    DuplicateIndex(Index),
    #[error("signer index 0 is outside the share domain")]
    ZeroIndex,
    #[error("can not recover signature, scalar is non-invertable")]
    ScalarNonInvertable,
}

/// Partial BLS signature tagged with the 1-based signer index used for
/// reconstruction.
#[derive(Debug)]
pub struct SigShare<S: Scheme> {
    index: Index,
    value: SigPoint<S>,
}

impl<S: Scheme> SigShare<S> {
    pub fn new(index: Index, value: SigPoint<S>) -> Self {
        Self { index, value }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn value(&self) -> &SigPoint<S> {
        &self.value
    }

    pub fn serialize(&self) -> Result<Vec<u8>, TBlsError> {
        let index: u16 = self
            .index
            .try_into()
            .map_err(|_| TBlsError::IndexWidth(self.index))?;
        let mut raw = index.to_be_bytes().to_vec();
        let mut sig_bytes = self
            .value
            .serialize()
            .map_err(|_| TBlsError::SerializeShare)?
            .into();
        raw.append(&mut sig_bytes);

        Ok(raw)
    }

    pub fn deserialize(raw: &[u8]) -> Result<Self, TBlsError> {
        let expected = <S::Sig as Group>::POINT_SIZE + INDEX_LEN;
        if raw.len() != expected {
            return Err(TBlsError::ShareInputLen);
        }
        let index = u32::from_be_bytes([0, 0, raw[0], raw[1]]);
        let value = Affine::deserialize(&raw[INDEX_LEN..]).map_err(|_| TBlsError::DeserializeShare)?;

        Ok(Self::new(index, value))
    }
}

/// Signs `msg` with a participant's aggregated secret key.
pub fn sign<S: Scheme>(
    index: Index,
    secret: &S::Scalar,
    msg: &[u8],
) -> Result<SigShare<S>, TBlsError> {
    let value = <S::Key as PairingCurve>::bls_sign(msg, secret).map_err(TBlsError::Sign)?;

    Ok(SigShare::new(index, value))
}

/// Checks one signature (partial or reconstructed) against a public key.
pub fn verify<S: Scheme>(
    public: &KeyPoint<S>,
    msg: &[u8],
    sig: &SigPoint<S>,
) -> Result<(), TBlsError> {
    <S::Key as PairingCurve>::bls_verify(public, sig, msg).map_err(TBlsError::Verify)
}

/// Reconstructs the group signature from exactly `threshold + 1` partial
/// signatures by Lagrange interpolation at zero, entirely in the scalar
/// field. Any qualifying subset of that size yields the identical point.
///
/// Duplicate signer indices make a pairwise difference zero, which has no
/// inverse modulo the group order; they are rejected up front rather than
/// folded into a wrong result.
pub fn reconstruct<S: Scheme>(
    sigs: &[SigShare<S>],
    threshold: u32,
) -> Result<SigPoint<S>, TBlsError> {
    let expected = threshold as usize + 1;
    if sigs.len() != expected {
        return Err(TBlsError::WrongCardinality {
            expected,
            received: sigs.len(),
        });
    }
    if sigs.len() < 2 {
        return Err(TBlsError::TooFewShares);
    }
    let mut seen = HashSet::with_capacity(sigs.len());
    for sig in sigs {
        // Index 0 is the group secret's evaluation point, not a signer; it
        // only ever arrives through hostile deserialized bytes.
        if sig.index() == 0 {
            return Err(TBlsError::ZeroIndex);
        }
        if !seen.insert(sig.index()) {
            return Err(TBlsError::DuplicateIndex(sig.index()));
        }
    }

    let mut acc = SigPointProjective::<S>::identity();
    for sig in sigs {
        let xi = S::Scalar::from_u64(sig.index().into());
        let mut num = S::Scalar::one();
        let mut den = S::Scalar::one();
        for other in sigs {
            if other.index() == sig.index() {
                continue;
            }
            let xj = S::Scalar::from_u64(other.index().into());
            num *= &xj;
            let mut diff = xj;
            diff -= &xi;
            den *= &diff;
        }

        let lambda = num * &den.invert().map_err(|_| TBlsError::ScalarNonInvertable)?;
        let mut term: SigPointProjective<S> = sig.value().into();
        term *= &lambda;
        acc += &term;
    }

    Ok(acc.into())
}
