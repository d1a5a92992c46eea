use crate::points::KeyPoint;
use crate::points::KeyPointProjective;
use crate::traits::Projective;
use crate::traits::ScalarField;
use crate::traits::Scheme;

use super::dealer::DealerCommits;
use super::poly::Index;
use super::DkgError;

use tracing::info;

/// Complete public state after the dealing phase: one commitment row per
/// dealer. Immutable once sealed; all key material derives from it.
pub struct CommitmentTable<S: Scheme> {
    rows: Vec<DealerCommits<S>>,
    threshold: u32,
}

impl<S: Scheme> std::fmt::Debug for CommitmentTable<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommitmentTable")
            .field("rows", &self.rows)
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl<S: Scheme> CommitmentTable<S> {
    /// Seals the table. `0 < t < n` and the row lengths are validated here,
    /// once; every later accessor relies on it.
    pub fn new(rows: Vec<DealerCommits<S>>, threshold: u32) -> Result<Self, DkgError> {
        let participants = rows.len() as u32;
        if threshold == 0 || threshold >= participants {
            return Err(DkgError::InvalidThreshold {
                threshold,
                participants,
            });
        }
        let expected = threshold as usize + 1;
        for row in &rows {
            for received in [row.sig_commits().len(), row.key_commits().len()] {
                if received != expected {
                    return Err(DkgError::CommitmentRowLen { expected, received });
                }
            }
        }
        info!(participants, threshold, "commitment table sealed");

        Ok(Self { rows, threshold })
    }

    pub fn participants(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn rows(&self) -> &[DealerCommits<S>] {
        &self.rows
    }

    /// The group public key: every dealer's zero-degree key-group commitment
    /// aggregated. Addition commutes, so row order is irrelevant, but every
    /// dealer contributes exactly once.
    pub fn group_public_key(&self) -> KeyPoint<S> {
        let mut acc = KeyPointProjective::<S>::identity();
        for row in &self.rows {
            acc += &row.key_commits().commits[0];
        }

        acc.into()
    }

    /// Public key of participant `i`: every dealer's key-group row evaluated
    /// at `i`, aggregated. Equals `secret_key(i)·G2` exactly; signature
    /// verification depends on that identity.
    pub fn participant_public_key(&self, i: Index) -> KeyPoint<S> {
        let mut acc = KeyPointProjective::<S>::identity();
        for row in &self.rows {
            acc += &row.key_commits().eval(i);
        }

        acc.into()
    }
}

/// Field sum of the shares a participant received from every dealer, its own
/// dealing included. The result exists only in the owner's private state and
/// is never transmitted.
pub fn secret_key<S: Scheme>(shares: &[S::Scalar]) -> S::Scalar {
    let mut sum = S::Scalar::zero();
    for share in shares {
        sum += share;
    }

    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dkg::dealer::Dealing;
    use crate::schemes::ThresholdBls12381;

    fn rows(n: u32, t: u32) -> Vec<DealerCommits<ThresholdBls12381>> {
        (1..=n)
            .map(|d| {
                Dealing::<ThresholdBls12381>::generate(d, t)
                    .unwrap()
                    .commits()
                    .clone()
            })
            .collect()
    }

    #[test]
    fn rejects_zero_threshold() {
        let err = CommitmentTable::new(rows(3, 1), 0).unwrap_err();
        assert!(matches!(err, DkgError::InvalidThreshold { threshold: 0, .. }));
    }

    #[test]
    fn rejects_threshold_not_below_participants() {
        let err = CommitmentTable::new(rows(3, 3), 3).unwrap_err();
        assert!(matches!(err, DkgError::InvalidThreshold { threshold: 3, .. }));
    }

    #[test]
    fn rejects_row_length_mismatch() {
        // Rows carry t+1 = 3 commitments but the table claims t = 1.
        let err = CommitmentTable::new(rows(4, 2), 1).unwrap_err();
        assert!(matches!(
            err,
            DkgError::CommitmentRowLen {
                expected: 2,
                received: 3
            }
        ));
    }

    #[test]
    fn seals_valid_rows() {
        let table = CommitmentTable::new(rows(4, 2), 2).unwrap();
        assert_eq!(table.participants(), 4);
        assert_eq!(table.threshold(), 2);
    }
}
