use crate::points::KeyPoint;
use crate::traits::Affine;
use crate::traits::Group;
use crate::traits::PairingCurve;
use crate::traits::Scheme;

use super::channel;
use super::poly::Index;
use super::poly::PriPoly;
use super::poly::PriShare;
use super::poly::PubPoly;
use super::DkgError;

use tracing::debug;
use tracing::warn;

/// A participant as seen by dealers: its index and channel public key.
#[derive(Debug)]
pub struct Node<S: Scheme> {
    pub index: Index,
    pub public: KeyPoint<S>,
}

impl<S: Scheme> Clone for Node<S> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            public: self.public.clone(),
        }
    }
}

/// Encrypted share addressed to one recipient.
#[derive(Clone)]
pub struct Deal {
    pub share_index: Index,
    pub encrypted_share: Vec<u8>,
}

/// Public half of one dealing: paired coefficient commitments
/// `(C1_j, C2_j) = (a_j·G1, a_j·G2)`, one pair per coefficient.
pub struct DealerCommits<S: Scheme> {
    sig_commits: PubPoly<S::Sig>,
    key_commits: PubPoly<S::Key>,
}

impl<S: Scheme> std::fmt::Debug for DealerCommits<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DealerCommits")
            .field("sig_commits", &self.sig_commits)
            .field("key_commits", &self.key_commits)
            .finish()
    }
}

impl<S: Scheme> Clone for DealerCommits<S> {
    fn clone(&self) -> Self {
        Self {
            sig_commits: self.sig_commits.clone(),
            key_commits: self.key_commits.clone(),
        }
    }
}

impl<S: Scheme> DealerCommits<S> {
    /// Rebuilds a row received from another dealer, typically out of
    /// [`PubPoly::deserialize`] output. The halves must pair up one to one;
    /// a mismatch is rejected before any pairing check can run over it.
    pub fn new(
        sig_commits: PubPoly<S::Sig>,
        key_commits: PubPoly<S::Key>,
    ) -> Result<Self, DkgError> {
        if sig_commits.len() != key_commits.len() {
            return Err(DkgError::CommitmentPairLen {
                sig: sig_commits.len(),
                key: key_commits.len(),
            });
        }

        Ok(Self {
            sig_commits,
            key_commits,
        })
    }

    /// Row used for share verification (sig group).
    pub fn sig_commits(&self) -> &PubPoly<S::Sig> {
        &self.sig_commits
    }

    /// Row used for key aggregation (key group).
    pub fn key_commits(&self) -> &PubPoly<S::Key> {
        &self.key_commits
    }

    /// Runs the pairing check on every `(C1_j, C2_j)` pair. Returns the
    /// position of the first pair that does not commit to one scalar; the
    /// row must not be trusted until this returns `None`.
    pub fn verify_pairs(&self) -> Option<usize> {
        // A commitment with no partner can never pass; zip would skip it.
        if self.sig_commits.len() != self.key_commits.len() {
            return Some(self.sig_commits.len().min(self.key_commits.len()));
        }
        for (j, (c1, c2)) in self
            .sig_commits
            .commits
            .iter()
            .zip(&self.key_commits.commits)
            .enumerate()
        {
            if !<S::Key as PairingCurve>::same_commitment(c2, c1) {
                warn!(index = j, "commitment pair failed the pairing check");
                return Some(j);
            }
        }

        None
    }

    /// [`Self::verify_pairs`] shaped as the accusation surfaced to the
    /// complaint layer.
    pub fn ensure_valid(&self, dealer: Index) -> Result<(), DkgError> {
        match self.verify_pairs() {
            None => Ok(()),
            Some(index) => Err(DkgError::CommitmentRejected { dealer, index }),
        }
    }
}

/// Commitment-pair predicate: true iff `c1` and `c2` bind the same scalar.
pub fn verify_commitment_pair<S: Scheme>(
    c1: &<S::Sig as Group>::Affine,
    c2: &KeyPoint<S>,
) -> bool {
    <S::Key as PairingCurve>::same_commitment(c2, c1)
}

/// Share predicate a recipient runs before accepting a decrypted share:
/// `share·G1 == Σ C1_j · i^j`. Failure is cryptographic proof the dealer
/// sent a wrong evaluation; it must surface as an accusation, retries can
/// not fix an inconsistent share.
pub fn verify_share<S: Scheme>(
    i: Index,
    share: &S::Scalar,
    sig_commits: &PubPoly<S::Sig>,
) -> bool {
    let g = <<S::Sig as Group>::Affine as Affine>::generator();
    let lhs: <S::Sig as Group>::Projective = g * share;

    <S::Sig as Group>::Affine::from(lhs) == sig_commits.eval(i)
}

/// [`verify_share`] shaped as the accusation surfaced to the complaint layer.
pub fn accept_share<S: Scheme>(
    dealer: Index,
    i: Index,
    share: &S::Scalar,
    sig_commits: &PubPoly<S::Sig>,
) -> Result<(), DkgError> {
    if verify_share::<S>(i, share, sig_commits) {
        Ok(())
    } else {
        warn!(dealer, index = i, "received share contradicts the dealer commitments");
        Err(DkgError::ShareRejected { dealer, index: i })
    }
}

/// One dealer's secret polynomial together with its broadcastable
/// commitments. The polynomial must not outlive the dealing phase.
pub struct Dealing<S: Scheme> {
    dealer: Index,
    poly: PriPoly<S>,
    commits: DealerCommits<S>,
}

impl<S: Scheme> Dealing<S> {
    pub fn generate(dealer: Index, threshold: u32) -> Result<Self, DkgError> {
        let poly = PriPoly::new(threshold)?;
        let commits = DealerCommits {
            sig_commits: poly.commit(),
            key_commits: poly.commit(),
        };
        debug!(dealer, threshold, "dealing generated");

        Ok(Self {
            dealer,
            poly,
            commits,
        })
    }

    pub fn dealer(&self) -> Index {
        self.dealer
    }

    pub fn commits(&self) -> &DealerCommits<S> {
        &self.commits
    }

    /// The dealer's own share, fed into its running secret-key sum without
    /// ever touching a channel.
    pub fn own_share(&self) -> PriShare<S> {
        self.poly.eval(self.dealer)
    }

    pub fn share_for(&self, i: Index) -> PriShare<S> {
        self.poly.eval(i)
    }

    /// The dealer's secret contribution `a_0`. Test and diagnostics seam;
    /// the protocol itself never moves this value.
    pub fn secret(&self) -> &S::Scalar {
        self.poly.secret()
    }

    /// One encrypted deal per recipient, own index skipped. `channel_secret`
    /// is the dealer's channel key; each share is masked under the shared
    /// point with that recipient only.
    pub fn encrypted_deals(
        &self,
        channel_secret: &S::Scalar,
        recipients: &[Node<S>],
    ) -> Result<Vec<Deal>, DkgError> {
        let mut deals = Vec::with_capacity(recipients.len().saturating_sub(1));
        for node in recipients {
            if node.index == self.dealer {
                continue;
            }
            let share = self.poly.eval(node.index);
            let encrypted_share =
                channel::encrypt::<S>(channel_secret, &node.public, share.value())?;
            deals.push(Deal {
                share_index: node.index,
                encrypted_share: encrypted_share.to_vec(),
            });
        }

        Ok(deals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemes::ThresholdBls12381;
    use crate::traits::ScalarField;

    #[test]
    fn commitment_pair_binds_one_scalar() {
        pair_binding::<ThresholdBls12381>();
    }

    fn pair_binding<S: Scheme>() {
        let s = S::Scalar::random().unwrap();
        let other = S::Scalar::random().unwrap();
        let c1: <S::Sig as Group>::Affine =
            (<<S::Sig as Group>::Affine as Affine>::generator() * &s).into();
        let c2: KeyPoint<S> = S::sk_to_pk(&s);
        let c2_other: KeyPoint<S> = S::sk_to_pk(&other);

        assert!(verify_commitment_pair::<S>(&c1, &c2));
        assert!(!verify_commitment_pair::<S>(&c1, &c2_other));
    }

    #[test]
    fn shares_verify_against_commitments() {
        shares_verify::<ThresholdBls12381>();
    }

    fn shares_verify<S: Scheme>() {
        let dealing = Dealing::<S>::generate(1, 3).unwrap();
        for i in 1..=7 {
            let share = dealing.share_for(i);
            assert!(verify_share::<S>(
                i,
                share.value(),
                dealing.commits().sig_commits()
            ));
        }
    }

    #[test]
    fn tampered_share_is_rejected() {
        tampered_share::<ThresholdBls12381>();
    }

    fn tampered_share<S: Scheme>() {
        let dealing = Dealing::<S>::generate(1, 3).unwrap();
        let mut bad = *dealing.share_for(2).value();
        bad += &S::Scalar::one();
        assert!(!verify_share::<S>(
            2,
            &bad,
            dealing.commits().sig_commits()
        ));
    }

    #[test]
    fn wrong_index_share_is_rejected() {
        let dealing = Dealing::<ThresholdBls12381>::generate(1, 3).unwrap();
        let share = dealing.share_for(2);
        assert!(!verify_share::<ThresholdBls12381>(
            3,
            share.value(),
            dealing.commits().sig_commits()
        ));
    }

    #[test]
    fn rows_rebuilt_from_bytes_seal_a_table() {
        use crate::dkg::aggregate::CommitmentTable;

        let rows: Vec<DealerCommits<ThresholdBls12381>> = (1..=4)
            .map(|d| {
                Dealing::<ThresholdBls12381>::generate(d, 2)
                    .unwrap()
                    .commits()
                    .clone()
            })
            .collect();

        let rebuilt: Vec<DealerCommits<ThresholdBls12381>> = rows
            .iter()
            .map(|row| {
                let sig = PubPoly::deserialize(&row.sig_commits().serialize().unwrap()).unwrap();
                let key = PubPoly::deserialize(&row.key_commits().serialize().unwrap()).unwrap();
                DealerCommits::new(sig, key).unwrap()
            })
            .collect();
        for (dealer, row) in rebuilt.iter().enumerate() {
            row.ensure_valid(dealer as Index + 1).unwrap();
        }

        let table = CommitmentTable::new(rebuilt, 2).unwrap();
        let reference = CommitmentTable::new(rows, 2).unwrap();
        assert_eq!(table.group_public_key(), reference.group_public_key());
        assert_eq!(
            table.participant_public_key(3),
            reference.participant_public_key(3)
        );
    }

    #[test]
    fn mismatched_commitment_halves_are_rejected() {
        let dealing = Dealing::<ThresholdBls12381>::generate(1, 2).unwrap();
        let sig = dealing.commits().sig_commits().clone();
        let mut key = dealing.commits().key_commits().clone();
        key.commits.pop();

        assert!(matches!(
            DealerCommits::<ThresholdBls12381>::new(sig, key),
            Err(DkgError::CommitmentPairLen { sig: 3, key: 2 })
        ));

        let mut truncated = dealing.commits().clone();
        truncated.key_commits.commits.pop();
        assert_eq!(truncated.verify_pairs(), Some(2));
    }

    #[test]
    fn honest_pairs_pass_mismatched_pair_is_found() {
        let dealing = Dealing::<ThresholdBls12381>::generate(1, 2).unwrap();
        assert!(dealing.commits().verify_pairs().is_none());

        let other = Dealing::<ThresholdBls12381>::generate(1, 2).unwrap();
        let mut commits = dealing.commits().clone();
        commits.key_commits.commits[1] = other.commits().key_commits().commits[1].clone();
        assert_eq!(commits.verify_pairs(), Some(1));
    }
}
