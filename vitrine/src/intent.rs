// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction of arrow navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards the previous image.
    Previous,
    /// Towards the next image.
    Next,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }

    /// Moves `position` one step within a ring of `len` slots.
    pub(crate) fn wrap(self, position: usize, len: usize) -> usize {
        debug_assert!(len > 0, "cannot step within an empty ring");
        let len = len as isize;
        (position as isize + self.step()).rem_euclid(len) as usize
    }
}

/// A user action emitted by the gallery chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Restore the initial zoom, offset and filters, and lay the images out again.
    Home,
    /// Zoom in by the button step.
    ZoomIn,
    /// Zoom out by the button step.
    ZoomOut,
    /// Lay the images out again under the current filters.
    Shuffle,
    /// Flip one filter tag.
    ToggleFilter(String),
    /// Focus the previous or next visible image.
    Navigate(Direction),
    /// Focus the image at this index.
    Focus(usize),
}
