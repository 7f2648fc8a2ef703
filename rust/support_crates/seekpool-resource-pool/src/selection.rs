//! Reuse policies for positioned resources.

use serde::{Deserialize, Serialize};

use crate::{
    position::{Position, PositionedResource},
    strategy::{Candidate, ResourceId},
};

/// How a pool picks among idle resources that could serve a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// The earliest-created eligible resource, regardless of how far it has
    /// to skip. See [`select_first_fit`].
    #[default]
    FirstFit,
    /// The eligible resource positioned closest to the target.
    /// See [`select_nearest_fit`].
    NearestFit,
}

impl SelectionPolicy {
    pub fn select<R: PositionedResource>(
        self,
        target: &R::Position,
        candidates: &[Candidate<'_, R>],
    ) -> Option<ResourceId> {
        match self {
            SelectionPolicy::FirstFit => select_first_fit(target, candidates),
            SelectionPolicy::NearestFit => select_nearest_fit(target, candidates),
        }
    }
}

/// Returns `true` if `resource` can be advanced forward to reach `target`.
///
/// A fresh resource qualifies as long as it has data left; a positioned one
/// qualifies only if it is strictly before `target`. A resource at or past
/// `target` cannot be rewound and never qualifies.
#[inline]
pub fn is_eligible<R: PositionedResource>(resource: &R, target: &R::Position) -> bool {
    match resource.position() {
        None => resource.has_remaining_data(),
        Some(position) => position.is_before(target),
    }
}

/// Returns the first eligible candidate in insertion order.
///
/// This is not a closest match: an earlier candidate far behind `target` wins
/// over a later one just before it.
pub fn select_first_fit<R: PositionedResource>(
    target: &R::Position,
    candidates: &[Candidate<'_, R>],
) -> Option<ResourceId> {
    candidates
        .iter()
        .find(|c| is_eligible(c.resource(), target))
        .map(|c| c.id())
}

/// Returns the eligible candidate that needs the shortest skip to reach
/// `target`.
///
/// Among positioned candidates the greatest position still before `target`
/// wins, with ties going to the earliest inserted. Fresh candidates are only
/// used when no positioned candidate is eligible, since a fresh cursor starts
/// from the beginning of the data.
pub fn select_nearest_fit<R: PositionedResource>(
    target: &R::Position,
    candidates: &[Candidate<'_, R>],
) -> Option<ResourceId> {
    let mut nearest: Option<(&R::Position, ResourceId)> = None;
    let mut first_fresh = None;
    for candidate in candidates {
        let resource = candidate.resource();
        match resource.position() {
            Some(position) if position.is_before(target) => {
                if nearest.is_none_or(|(best, _)| best < position) {
                    nearest = Some((position, candidate.id()));
                }
            }
            Some(_) => (),
            None => {
                if first_fresh.is_none() && resource.has_remaining_data() {
                    first_fresh = Some(candidate.id());
                }
            }
        }
    }
    nearest.map(|(_, id)| id).or(first_fresh)
}
