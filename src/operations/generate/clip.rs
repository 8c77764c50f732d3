use rand::Rng;

use crate::geometry::Segment;
use crate::math::intersect_2d::segment_segment_crossing_2d;
use crate::math::round_to_grid;

/// Which endpoint of a candidate gets replaced when it is clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    First,
    Second,
}

impl Endpoint {
    /// Picks an endpoint with equal probability.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::First
        } else {
            Self::Second
        }
    }
}

/// Clips `candidate` against one earlier segment.
///
/// If the two cross strictly inside both, the crossing is rounded to the grid and
/// replaces the endpoint picked by `choose`. Otherwise the candidate is returned
/// unchanged and `choose` is not consulted.
pub fn clip_against(
    candidate: Segment,
    prior: &Segment,
    choose: &mut impl FnMut() -> Endpoint,
) -> Segment {
    let Some(hit) = segment_segment_crossing_2d(&prior.p1, &prior.p2, &candidate.p1, &candidate.p2)
    else {
        return candidate;
    };
    let hit = round_to_grid(&hit);
    match choose() {
        Endpoint::First => candidate.with_p1(hit),
        Endpoint::Second => candidate.with_p2(hit),
    }
}

/// Clips `candidate` against every segment in `priors`, in order.
///
/// Each step sees the candidate as already shortened by the steps before it,
/// so the result depends on the order of `priors`, not only on their geometry.
pub fn clip_through<'a>(
    candidate: Segment,
    priors: impl IntoIterator<Item = &'a Segment>,
    mut choose: impl FnMut() -> Endpoint,
) -> Segment {
    priors
        .into_iter()
        .fold(candidate, |current, prior| clip_against(current, prior, &mut choose))
}
