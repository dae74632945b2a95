// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame list fake standing in for a kinematic model.

use linkage_geom::{FrameIndex, FrameTree, JointIndex};

/// Named frames, each attached to a joint.
///
/// # Example
///
/// ```
/// use linkage_dry_tests::FrameList;
/// use linkage_geom::FrameTree;
///
/// let frames = FrameList::new().frame("universe", 0).frame("link1", 1);
/// assert_eq!(frames.nframes(), 2);
/// assert_eq!(frames.frame_parent_joint(1), Some(1));
/// assert_eq!(frames.frame_id("link1"), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameList {
    frames: Vec<(String, JointIndex)>,
}

impl FrameList {
    /// Create an empty frame list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame attached to `joint`.
    pub fn frame(mut self, name: &str, joint: JointIndex) -> Self {
        self.frames.push((name.to_string(), joint));
        self
    }

    /// Index of the frame named `name`.
    pub fn frame_id(&self, name: &str) -> Option<FrameIndex> {
        self.frames.iter().position(|(n, _)| n == name)
    }
}

impl FrameTree for FrameList {
    fn nframes(&self) -> usize {
        self.frames.len()
    }

    fn frame_parent_joint(&self, frame: FrameIndex) -> Option<JointIndex> {
        self.frames.get(frame).map(|(_, joint)| *joint)
    }
}
