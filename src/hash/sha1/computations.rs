use crate::hash::logic::{choose, majority, parity};
use crate::hash::padding::Block;

/// Number of SHA-1 rounds per block.
pub const ROUNDS: usize = 80;

/// Expands a block into the 80-word SHA-1 message schedule (FIPS 180-4
/// §6.1.2 step 1).
pub fn schedule(block: &Block<u32>) -> [u32; ROUNDS] {
    let mut w = [0u32; ROUNDS];
    w[..16].copy_from_slice(block);

    for t in 16..ROUNDS {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    w
}

/// `f_t(x, y, z)` from FIPS 180-4 §4.1.1.
#[inline(always)]
pub fn round_function(t: usize, x: u32, y: u32, z: u32) -> u32 {
    match t / 20 {
        0 => choose(x, y, z),
        2 => majority(x, y, z),
        _ => parity(x, y, z),
    }
}

/// Runs the 80 rounds over the schedule `w`, then adds the working
/// variables into `state`.
pub fn all_rounds(state: &mut [u32; 5], w: &[u32; ROUNDS], k: &[u32; ROUNDS]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    for (t, (&wt, &kt)) in w.iter().zip(k.iter()).enumerate() {
        let temp = a
            .rotate_left(5)
            .wrapping_add(round_function(t, b, c, d))
            .wrapping_add(e)
            .wrapping_add(kt)
            .wrapping_add(wt);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}
