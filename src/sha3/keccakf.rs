//! Keccak-f[1600], unrolled.
//!
//! One invocation of `round!` performs theta, rho, pi, chi and iota on all
//! 25 lanes. Pi is never materialised: instead of moving lanes, the next
//! round is called with the lane names permuted, and after four rounds the
//! names line up with the array again.

use super::lane::Lane;

// Rotation offsets, listed in the order the lanes are visited by `round!`
// (the pi image of each row).
const RHO: [u32; 25] = [
    0, 44, 43, 21, 14,
    28, 20, 3, 45, 61,
    1, 6, 25, 8, 18,
    27, 36, 10, 15, 56,
    62, 55, 39, 41, 2,
];

/*
Lane naming of the four unrolled rounds (row y = 2 in the middle, as the
arguments are passed):

13 14 10 11 12       13 19 20  1  7      13  4 15  6 22      13 24  5 16  2
 8  9  5  6  7  rd.   3  9 10 16 22      18  9 20 11  2      23  9 15  1 12
 3  4  0  1  2  =>   18 24  0  6 12  =>  23 14  0 16  7  =>   8 19  0 11 22  =>  (first)
23 24 20 21 22        8 14 15 21  2       3 19  5 21 12      18  4 10 21  7
18 19 15 16 17       23  4  5 11 17       8 24 10  1 17       3 14 20  6 17
*/
#[rustfmt::skip]
macro_rules! round {
    (
        $a13:expr, $a14:expr, $a10:expr, $a11:expr, $a12:expr,
        $a8:expr,  $a9:expr,  $a5:expr,  $a6:expr,  $a7:expr,
        $a3:expr,  $a4:expr,  $a0:expr,  $a1:expr,  $a2:expr,
        $a23:expr, $a24:expr, $a20:expr, $a21:expr, $a22:expr,
        $a18:expr, $a19:expr, $a15:expr, $a16:expr, $a17:expr,
        $rc:expr,
     ) => {{
        // theta
        let mut b0 = $a0 ^ $a5 ^ $a10 ^ $a15 ^ $a20;
        let mut b1 = $a1 ^ $a6 ^ $a11 ^ $a16 ^ $a21;
        let mut b2 = $a2 ^ $a7 ^ $a12 ^ $a17 ^ $a22;
        let mut b3 = $a3 ^ $a8 ^ $a13 ^ $a18 ^ $a23;
        let mut b4 = $a4 ^ $a9 ^ $a14 ^ $a19 ^ $a24;
        let d0 = b4 ^ b1.rotate(1);
        let d1 = b0 ^ b2.rotate(1);
        let d2 = b1 ^ b3.rotate(1);
        let d3 = b2 ^ b4.rotate(1);
        let d4 = b3 ^ b0.rotate(1);

        // rho and pi, then chi row by row; iota on the first lane
        b0 = ($a0 ^ d0).rotate(RHO[0]);
        b1 = ($a6 ^ d1).rotate(RHO[1]);
        b2 = ($a12 ^ d2).rotate(RHO[2]);
        b3 = ($a18 ^ d3).rotate(RHO[3]);
        b4 = ($a24 ^ d4).rotate(RHO[4]);
        $a0 = b0 ^ (b2 & !b1) ^ $rc;
        $a6 = b1 ^ (b3 & !b2);
        $a12 = b2 ^ (b4 & !b3);
        $a18 = b3 ^ (b0 & !b4);
        $a24 = b4 ^ (b1 & !b0);

        b0 = ($a3 ^ d3).rotate(RHO[5]);
        b1 = ($a9 ^ d4).rotate(RHO[6]);
        b2 = ($a10 ^ d0).rotate(RHO[7]);
        b3 = ($a16 ^ d1).rotate(RHO[8]);
        b4 = ($a22 ^ d2).rotate(RHO[9]);
        $a10 = b0 ^ (b2 & !b1);
        $a16 = b1 ^ (b3 & !b2);
        $a22 = b2 ^ (b4 & !b3);
        $a3 = b3 ^ (b0 & !b4);
        $a9 = b4 ^ (b1 & !b0);

        b0 = ($a1 ^ d1).rotate(RHO[10]);
        b1 = ($a7 ^ d2).rotate(RHO[11]);
        b2 = ($a13 ^ d3).rotate(RHO[12]);
        b3 = ($a19 ^ d4).rotate(RHO[13]);
        b4 = ($a20 ^ d0).rotate(RHO[14]);
        $a20 = b0 ^ (b2 & !b1);
        $a1 = b1 ^ (b3 & !b2);
        $a7 = b2 ^ (b4 & !b3);
        $a13 = b3 ^ (b0 & !b4);
        $a19 = b4 ^ (b1 & !b0);

        b0 = ($a4 ^ d4).rotate(RHO[15]);
        b1 = ($a5 ^ d0).rotate(RHO[16]);
        b2 = ($a11 ^ d1).rotate(RHO[17]);
        b3 = ($a17 ^ d2).rotate(RHO[18]);
        b4 = ($a23 ^ d3).rotate(RHO[19]);
        $a5 = b0 ^ (b2 & !b1);
        $a11 = b1 ^ (b3 & !b2);
        $a17 = b2 ^ (b4 & !b3);
        $a23 = b3 ^ (b0 & !b4);
        $a4 = b4 ^ (b1 & !b0);

        b0 = ($a2 ^ d2).rotate(RHO[20]);
        b1 = ($a8 ^ d3).rotate(RHO[21]);
        b2 = ($a14 ^ d4).rotate(RHO[22]);
        b3 = ($a15 ^ d0).rotate(RHO[23]);
        b4 = ($a21 ^ d1).rotate(RHO[24]);
        $a15 = b0 ^ (b2 & !b1);
        $a21 = b1 ^ (b3 & !b2);
        $a2 = b2 ^ (b4 & !b3);
        $a8 = b3 ^ (b0 & !b4);
        $a14 = b4 ^ (b1 & !b0);
    }};
}

/// Applies the 24-round Keccak-f[1600] permutation to `a` in place.
///
/// Lanes are indexed `x + 5 * y`. The same code serves every [`Lane`]
/// representation; the choice is made by the caller's type.
#[rustfmt::skip]
#[inline]
pub(crate) fn keccak_f1600<L: Lane>(a: &mut [L; 25]) {
    let rc = &L::RC;
    let mut i = 0;

    while i < 24 {
        round!(
            a[13], a[14], a[10], a[11], a[12],
            a[ 8], a[ 9], a[ 5], a[ 6], a[ 7],
            a[ 3], a[ 4], a[ 0], a[ 1], a[ 2],
            a[23], a[24], a[20], a[21], a[22],
            a[18], a[19], a[15], a[16], a[17],
            rc[i],
        );

        round!(
            a[13], a[19], a[20], a[ 1], a[ 7],
            a[ 3], a[ 9], a[10], a[16], a[22],
            a[18], a[24], a[ 0], a[ 6], a[12],
            a[ 8], a[14], a[15], a[21], a[ 2],
            a[23], a[ 4], a[ 5], a[11], a[17],
            rc[i + 1],
        );

        round!(
            a[13], a[ 4], a[15], a[ 6], a[22],
            a[18], a[ 9], a[20], a[11], a[ 2],
            a[23], a[14], a[ 0], a[16], a[ 7],
            a[ 3], a[19], a[ 5], a[21], a[12],
            a[ 8], a[24], a[10], a[ 1], a[17],
            rc[i + 2],
        );

        round!(
            a[13], a[24], a[ 5], a[16], a[ 2],
            a[23], a[ 9], a[15], a[ 1], a[12],
            a[ 8], a[19], a[ 0], a[11], a[22],
            a[18], a[ 4], a[10], a[21], a[ 7],
            a[ 3], a[14], a[20], a[ 6], a[17],
            rc[i + 3],
        );

        i += 4;
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::sha3::lane::Interleaved;
    use crate::sha3::state::KeccakState;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[rustfmt::skip]
    const INPUT: [u64; 25] = [
        0xcd25c9aa9c22d1e6, 0x5d2815e979da73fa, 0x1e746c8cfd54a79a, 0xf849ba2f516492d3, 0x7b6ef1e35fffa9bf,
        0xff12997dbf1b6c66, 0xdb498a1113513789, 0x94689cca0c63613a, 0xa084aff53c74f579, 0x42996c6cf5f52f11,
        0x15d8acef879b9c81, 0x44a325fa72215e5f, 0x7bcdb855a6a2ef26, 0x9189e554c243651b, 0x38c6b646d0499345,
        0x5dd24b659828953a, 0x2a36e7979983d093, 0x6b8b06d64b50acb1, 0x0ca1c056f544b689, 0xb82360c9f02ccb50,
        0x2c2c187e8f8dbebc, 0x8f6ea3e166241d5f, 0xec2f5316c8e1e7f1, 0x04238fa15328bd6c, 0x540846b170a6caab];

    #[rustfmt::skip]
    const EXPECT: [u64; 25] = [
        0xd1a01f52115bd04e, 0x1852aaa3595f4965, 0x6711075ed42c8d51, 0xe5179d1e6860aaed, 0x7289039971e84c20,
        0x1b1837777868cc6a, 0xed130bf6fad9cee6, 0xb294bb3610a842b7, 0x2c5ce0512f0b41b1, 0xb4c2c2bd74d2f083,
        0xdd705016436e7aa6, 0xbf56bd811bd7a163, 0xdf0a3f5951f76147, 0xdbe4447f6a0fde54, 0xcd633fe862fd91ad,
        0xb632d3bc4aba1f1f, 0x570cb1205d6ece1f, 0x4dfcbbb8e1365098, 0x0ac0bc60706647ff, 0x448ad600736fe26d,
        0x54dad331bd86439e, 0xd0adec8d1e445830, 0xa5ec13798e8ebefc, 0xdabe5557d7a810d6, 0x0bf35b673accb38b];

    #[test]
    fn test_f1600() {
        let mut a = INPUT;
        keccak_f1600(&mut a);
        assert_eq!(a, EXPECT);
    }

    #[test]
    fn test_f1600_interleaved() {
        let mut a = INPUT.map(Interleaved::from_u64);
        keccak_f1600(&mut a);
        assert_eq!(a.map(Interleaved::to_u64), EXPECT);
    }

    #[test]
    fn test_f1600_zero_state() {
        // First lanes of Keccak-f[1600] applied to the all-zero state.
        let mut a = [0u64; 25];
        keccak_f1600(&mut a);
        assert_eq!(a[0], 0xf1258f7940e1dde7);
        assert_eq!(a[1], 0x84d5ccf933c0478a);
        assert_eq!(a[24], 0xeaf1ff7b5ceca249);
    }

    #[test]
    fn test_unrolled_matches_reference() {
        let mut rng = StdRng::seed_from_u64(0x6b656363);
        for _ in 0..64 {
            let lanes: [u64; 25] = core::array::from_fn(|_| rng.random());

            let mut fast = lanes;
            keccak_f1600(&mut fast);

            let mut reference = KeccakState::from_lanes(lanes);
            reference.permute_reference();

            assert_eq!(&fast, reference.lanes());
        }
    }

    #[test]
    fn test_backends_agree() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let lanes: [u64; 25] = core::array::from_fn(|_| rng.random());

            let mut wide = lanes;
            keccak_f1600(&mut wide);

            let mut pairs = lanes.map(Interleaved::from_u64);
            keccak_f1600(&mut pairs);

            assert_eq!(pairs.map(Interleaved::to_u64), wide);
        }
    }
}
