use crate::points::KeyPoint;
use crate::traits::Affine;
use crate::traits::ScalarField;
use crate::traits::Scheme;

use sha3::Digest;
use sha3::Keccak256;

// One-time-pad share encryption over a Diffie-Hellman shared point,
// following the original orbs bgls construction: Keccak-256 of the
// compressed shared point is the mask, the big-endian scalar encoding is
// XORed into it.

/// Mask width; equals the scalar encoding width so every canonical scalar
/// is maskable and anything wider is rejected.
pub const MASK_LEN: usize = 32;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ChannelError {
    #[error("plaintext scalar does not fit the {MASK_LEN}-byte mask")]
    PlaintextWidth,
    #[error("ciphertext length is not {MASK_LEN} bytes")]
    CiphertextWidth,
    #[error("failed to serialize the shared point")]
    SharedPointSerialize,
    #[error("unmasked bytes are not a canonical scalar")]
    ScalarDeserialize,
}

/// Both ends arrive at the same point: `their_public · my_secret`.
pub fn shared_point<S: Scheme>(my_secret: &S::Scalar, their_public: &KeyPoint<S>) -> KeyPoint<S> {
    (*my_secret * their_public).into()
}

fn mask<S: Scheme>(shared: &KeyPoint<S>) -> Result<[u8; MASK_LEN], ChannelError> {
    let bytes = shared
        .serialize()
        .map_err(|_| ChannelError::SharedPointSerialize)?;
    let mut h = Keccak256::new();
    h.update(bytes.as_ref());

    Ok(h.finalize().into())
}

/// Masks `plain` under the pairwise shared point. A given shared point must
/// never mask more than one plaintext: XOR of two ciphertexts under one mask
/// leaks the XOR of the plaintexts. Callers use fresh channel keypairs per
/// dealing session.
pub fn encrypt<S: Scheme>(
    my_secret: &S::Scalar,
    their_public: &KeyPoint<S>,
    plain: &S::Scalar,
) -> Result<[u8; MASK_LEN], ChannelError> {
    let mut out = mask::<S>(&shared_point::<S>(my_secret, their_public))?;
    let plain = plain
        .to_bytes_be()
        .map_err(|_| ChannelError::PlaintextWidth)?;
    let plain = plain.as_ref();
    if plain.len() != MASK_LEN {
        return Err(ChannelError::PlaintextWidth);
    }
    for (o, p) in out.iter_mut().zip(plain) {
        *o ^= p;
    }

    Ok(out)
}

/// XOR is self-inverse: unmasking is masking with the mirrored key material.
/// Rejects unmasked bytes that do not decode to a canonical scalar.
pub fn decrypt<S: Scheme>(
    my_secret: &S::Scalar,
    their_public: &KeyPoint<S>,
    cipher: &[u8],
) -> Result<S::Scalar, ChannelError> {
    if cipher.len() != MASK_LEN {
        return Err(ChannelError::CiphertextWidth);
    }
    let mut out = mask::<S>(&shared_point::<S>(my_secret, their_public))?;
    for (o, c) in out.iter_mut().zip(cipher) {
        *o ^= c;
    }

    S::Scalar::from_bytes_be(&out).map_err(|_| ChannelError::ScalarDeserialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemes::ThresholdBls12381;

    #[test]
    fn round_trip_both_directions() {
        round_trip::<ThresholdBls12381>();
    }

    fn round_trip<S: Scheme>() {
        let sk_a = S::Scalar::random().unwrap();
        let sk_b = S::Scalar::random().unwrap();
        let pk_a = S::sk_to_pk(&sk_a);
        let pk_b = S::sk_to_pk(&sk_b);

        for _ in 0..5 {
            let plain = S::Scalar::random().unwrap();
            let cipher = encrypt::<S>(&sk_a, &pk_b, &plain).unwrap();
            let decrypted = decrypt::<S>(&sk_b, &pk_a, &cipher).unwrap();
            assert_eq!(plain, decrypted);
        }
    }

    #[test]
    fn shared_point_is_symmetric() {
        symmetric::<ThresholdBls12381>();
    }

    fn symmetric<S: Scheme>() {
        let sk_a = S::Scalar::random().unwrap();
        let sk_b = S::Scalar::random().unwrap();
        let pk_a = S::sk_to_pk(&sk_a);
        let pk_b = S::sk_to_pk(&sk_b);

        assert_eq!(
            shared_point::<S>(&sk_a, &pk_b),
            shared_point::<S>(&sk_b, &pk_a)
        );
    }

    #[test]
    fn wrong_length_ciphertext_is_rejected() {
        let sk = <ThresholdBls12381 as Scheme>::Scalar::random().unwrap();
        let pk = ThresholdBls12381::sk_to_pk(&sk);
        let err = decrypt::<ThresholdBls12381>(&sk, &pk, &[0u8; 31]).unwrap_err();
        assert_eq!(err, ChannelError::CiphertextWidth);
    }

    #[test]
    fn wrong_key_does_not_recover_plaintext() {
        wrong_key::<ThresholdBls12381>();
    }

    fn wrong_key<S: Scheme>() {
        let sk_a = S::Scalar::random().unwrap();
        let sk_b = S::Scalar::random().unwrap();
        let sk_c = S::Scalar::random().unwrap();
        let pk_a = S::sk_to_pk(&sk_a);
        let pk_b = S::sk_to_pk(&sk_b);

        let plain = S::Scalar::random().unwrap();
        let cipher = encrypt::<S>(&sk_a, &pk_b, &plain).unwrap();
        // A third party either fails to decode or recovers a different scalar.
        match decrypt::<S>(&sk_c, &pk_a, &cipher) {
            Ok(recovered) => assert_ne!(recovered, plain),
            Err(err) => assert_eq!(err, ChannelError::ScalarDeserialize),
        }
    }
}
