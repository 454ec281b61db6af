use crate::hash::logic::{choose, majority};
use crate::hash::padding::Block;
use crate::primitives::Word;

/// σ0, used by the message schedule.
#[inline(always)]
pub fn small_sigma0<W: Word>(x: W) -> W {
    let (r1, r2, s) = W::SMALL_SIGMA0;
    x.rotate_right(r1) ^ x.rotate_right(r2) ^ (x >> s)
}

/// σ1, used by the message schedule.
#[inline(always)]
pub fn small_sigma1<W: Word>(x: W) -> W {
    let (r1, r2, s) = W::SMALL_SIGMA1;
    x.rotate_right(r1) ^ x.rotate_right(r2) ^ (x >> s)
}

/// Σ0, applied to `a` in each round.
#[inline(always)]
pub fn big_sigma0<W: Word>(x: W) -> W {
    let (r1, r2, r3) = W::BIG_SIGMA0;
    x.rotate_right(r1) ^ x.rotate_right(r2) ^ x.rotate_right(r3)
}

/// Σ1, applied to `e` in each round.
#[inline(always)]
pub fn big_sigma1<W: Word>(x: W) -> W {
    let (r1, r2, r3) = W::BIG_SIGMA1;
    x.rotate_right(r1) ^ x.rotate_right(r2) ^ x.rotate_right(r3)
}

/// Expands a block into the `W::ROUNDS`-word message schedule.
pub fn schedule<W: Word>(block: &Block<W>) -> Vec<W> {
    let mut w = Vec::with_capacity(W::ROUNDS);
    w.extend_from_slice(block);

    for t in 16..W::ROUNDS {
        let next = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);

        w.push(next);
    }

    w
}

/// Runs every round over the schedule `w` with constants `k`, then adds the
/// working variables into `state`.
pub fn all_rounds<W: Word>(state: &mut [W; 8], w: &[W], k: &[W]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for (&wi, &ki) in w.iter().zip(k.iter()) {
        let bs1 = big_sigma1(e);
        let ch = choose(e, f, g);

        let bs0 = big_sigma0(a);
        let maj = majority(a, b, c);

        let t1 = h
            .wrapping_add(bs1)
            .wrapping_add(ch)
            .wrapping_add(ki)
            .wrapping_add(wi);

        let t2 = bs0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}
