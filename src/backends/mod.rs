mod bls12381_blstrs {
    mod g1;
    mod g2;
    mod scalar;

    use crate::curves::bls12381;
    use crate::traits::Group;

    impl Group for bls12381::G1 {
        const DST: &'static [u8] = bls12381::DST_G1;
        const POINT_SIZE: usize = bls12381::POINT_SIZE_G1;

        type Affine = g1::G1Affine;
        type Projective = g1::G1Projective;
        type Scalar = scalar::Scalar;
    }

    impl Group for bls12381::G2 {
        const DST: &'static [u8] = bls12381::DST_G2;
        const POINT_SIZE: usize = bls12381::POINT_SIZE_G2;

        type Affine = g2::G2Affine;
        type Projective = g2::G2Projective;
        type Scalar = scalar::Scalar;
    }
}

pub mod error;
