// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-only view of the kinematic model consumed by frame-aware insertion.
use crate::ident::{FrameIndex, JointIndex};

/// Frame → parent-joint relation of an external kinematic model.
///
/// Only the frame-validating insertion path reads it, and never mutates it.
pub trait FrameTree {
    /// Number of frames in the model.
    fn nframes(&self) -> usize;

    /// Joint the frame is rigidly attached to, or `None` if `frame` is unknown.
    fn frame_parent_joint(&self, frame: FrameIndex) -> Option<JointIndex>;
}

/// A slice maps frame `i` to the joint stored at position `i`.
impl FrameTree for [JointIndex] {
    fn nframes(&self) -> usize {
        self.len()
    }

    fn frame_parent_joint(&self, frame: FrameIndex) -> Option<JointIndex> {
        self.get(frame).copied()
    }
}

impl FrameTree for Vec<JointIndex> {
    fn nframes(&self) -> usize {
        self.len()
    }

    fn frame_parent_joint(&self, frame: FrameIndex) -> Option<JointIndex> {
        self.get(frame).copied()
    }
}

impl<T: FrameTree + ?Sized> FrameTree for &T {
    fn nframes(&self) -> usize {
        (**self).nframes()
    }

    fn frame_parent_joint(&self, frame: FrameIndex) -> Option<JointIndex> {
        (**self).frame_parent_joint(frame)
    }
}
