use crate::backends::error::BackendsError;
use crate::traits::Affine;
use crate::traits::Group;
use crate::traits::Projective;
use crate::traits::ScalarField;
use crate::traits::Scheme;

use super::DkgError;

/// 1-based participant index. Index 0 is reserved: `f(0)` is the dealer
/// secret and is never evaluated or sent.
pub type Index = u32;

/// One evaluation `f(i)` of a dealer's secret polynomial, tagged with the
/// recipient index. Ephemeral: consumed into the channel or the recipient's
/// running sum during dealing.
pub struct PriShare<S: Scheme> {
    i: Index,
    v: S::Scalar,
}

impl<S: Scheme> PriShare<S> {
    pub fn index(&self) -> Index {
        self.i
    }

    pub fn value(&self) -> &S::Scalar {
        &self.v
    }
}

/// Secret polynomial `f(x) = a_0 + a_1 x + .. + a_t x^t`, private to the
/// dealer that generated it.
#[derive(Debug)]
pub struct PriPoly<S: Scheme> {
    coeffs: Vec<S::Scalar>,
}

impl<S: Scheme> PriPoly<S> {
    /// Draws `threshold + 1` coefficients from the system entropy source.
    /// Entropy exhaustion surfaces as an error, never a substituted value.
    pub fn new(threshold: u32) -> Result<Self, DkgError> {
        let mut coeffs = Vec::with_capacity(threshold as usize + 1);
        for _ in 0..=threshold {
            coeffs.push(S::Scalar::random().map_err(DkgError::Randomness)?);
        }

        Ok(Self { coeffs })
    }

    /// Horner evaluation at the 1-based index `i`. Callers must never pass 0.
    pub fn eval(&self, i: Index) -> PriShare<S> {
        debug_assert!(i != 0, "index 0 evaluates the dealer secret");
        let xi = S::Scalar::from_u64(i.into());
        let mut v = S::Scalar::zero();
        for c in self.coeffs.iter().rev() {
            v *= &xi;
            v += c;
        }

        PriShare { i, v }
    }

    /// Commitments `[a_0·G .. a_t·G]` in the requested group.
    pub fn commit<G>(&self) -> PubPoly<G>
    where
        G: Group<Scalar = S::Scalar>,
    {
        let commits = self
            .coeffs
            .iter()
            .map(|c| (G::Affine::generator() * c).into())
            .collect();

        PubPoly { commits }
    }

    /// The dealer's personal secret contribution `a_0`.
    pub fn secret(&self) -> &S::Scalar {
        &self.coeffs[0]
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    #[cfg(test)]
    pub(crate) fn coeffs(&self) -> &[S::Scalar] {
        &self.coeffs
    }
}

/// Ordered coefficient commitments `[C_0 .. C_t]` of one dealer in one group.
pub struct PubPoly<G: Group> {
    pub commits: Vec<G::Affine>,
}

impl<G: Group> Clone for PubPoly<G> {
    fn clone(&self) -> Self {
        Self {
            commits: self.commits.clone(),
        }
    }
}

impl<G: Group> std::fmt::Debug for PubPoly<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubPoly")
            .field("commits", &self.commits)
            .finish()
    }
}

impl<G: Group> PubPoly<G> {
    /// The commitment "evaluated" at `i`: `Σ C_j · i^j`. Mirrors
    /// [`PriPoly::eval`] power for power so share verification is sound.
    pub fn eval(&self, i: Index) -> G::Affine {
        debug_assert!(i != 0, "index 0 is the dealer secret commitment");
        let xi = G::Scalar::from_u64(i.into());
        let mut v = G::Projective::identity();
        for c in self.commits.iter().rev() {
            v *= &xi;
            v += c;
        }

        v.into()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn serialize(&self) -> Result<Vec<Vec<u8>>, BackendsError> {
        let mut raw = Vec::with_capacity(self.commits.len());
        for c in &self.commits {
            raw.push(c.serialize()?.into());
        }

        Ok(raw)
    }

    pub fn deserialize(raw_commits: &[Vec<u8>]) -> Result<Self, BackendsError> {
        let mut commits = Vec::with_capacity(raw_commits.len());
        for c in raw_commits {
            commits.push(Affine::deserialize(c)?);
        }

        Ok(Self { commits })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemes::ThresholdBls12381;

    // Power accumulation must agree with Horner exactly; the field leaves no
    // room for drift.
    fn eval_naive<S: Scheme>(poly: &PriPoly<S>, i: Index) -> S::Scalar {
        let xi = S::Scalar::from_u64(i.into());
        let mut pow = S::Scalar::one();
        let mut sum = S::Scalar::zero();
        for c in poly.coeffs() {
            sum += &(*c * &pow);
            pow *= &xi;
        }
        sum
    }

    #[test]
    fn horner_matches_power_accumulation() {
        horner_matches::<ThresholdBls12381>();
    }

    fn horner_matches<S: Scheme>() {
        let poly = PriPoly::<S>::new(4).unwrap();
        for i in 1..=10 {
            assert_eq!(*poly.eval(i).value(), eval_naive(&poly, i));
        }
    }

    #[test]
    fn commitment_eval_tracks_private_eval() {
        commitment_tracks::<ThresholdBls12381>();
    }

    fn commitment_tracks<S: Scheme>() {
        let poly = PriPoly::<S>::new(3).unwrap();
        let commits: PubPoly<S::Key> = poly.commit();
        for i in 1..=8 {
            let expected = S::sk_to_pk(poly.eval(i).value());
            assert_eq!(commits.eval(i), expected);
        }
    }

    #[test]
    fn pub_poly_round_trips_through_bytes() {
        round_trip::<ThresholdBls12381>();
    }

    fn round_trip<S: Scheme>() {
        let poly = PriPoly::<S>::new(2).unwrap();
        let commits: PubPoly<S::Key> = poly.commit();
        let raw = commits.serialize().unwrap();
        let restored = PubPoly::<S::Key>::deserialize(&raw).unwrap();
        assert_eq!(commits.commits, restored.commits);
    }

    #[test]
    fn degree_matches_threshold() {
        let poly = PriPoly::<ThresholdBls12381>::new(14).unwrap();
        assert_eq!(poly.degree(), 14);
    }
}
