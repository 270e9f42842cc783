//! Aspect-ratio resolution for the mosaic grid size.
//!
//! When the target image's proportions differ from the requested grid size,
//! two alternatives are proposed: keep the requested width and derive the
//! height, or keep the requested height and derive the width. The caller picks
//! one of them or keeps the requested (distorting) size.

use crate::raster::Size;

/// Alternatives offered when proportions differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AspectProposal {
    /// The size originally requested.
    pub requested: Size,
    /// Requested width with the source's proportions.
    pub keep_width: Size,
    /// Requested height with the source's proportions.
    pub keep_height: Size,
}

/// How to resolve a proportion mismatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AspectChoice {
    /// Use [`AspectProposal::keep_width`].
    KeepWidth,
    /// Use [`AspectProposal::keep_height`].
    KeepHeight,
    /// Use the requested size and accept the distortion.
    #[default]
    Stretch,
}

impl AspectChoice {
    /// Parses an interactive answer: `1` keeps the width, `2` the height,
    /// anything else keeps the requested size.
    pub fn from_response(response: &str) -> Self {
        match response.trim() {
            "1" => AspectChoice::KeepWidth,
            "2" => AspectChoice::KeepHeight,
            _ => AspectChoice::Stretch,
        }
    }
}

impl AspectProposal {
    /// Returns the size selected by `choice`.
    pub fn resolve(&self, choice: AspectChoice) -> Size {
        match choice {
            AspectChoice::KeepWidth => self.keep_width,
            AspectChoice::KeepHeight => self.keep_height,
            AspectChoice::Stretch => self.requested,
        }
    }
}

/// Returns `None` when `source` and `requested` have identical proportions.
pub fn propose(source: Size, requested: Size) -> Option<AspectProposal> {
    if source.width * requested.height == requested.width * source.height {
        return None;
    }
    let keep_width = Size {
        width: requested.width,
        height: (requested.width * source.height / source.width).max(1),
    };
    let keep_height = Size {
        width: (requested.height * source.width / source.height).max(1),
        height: requested.height,
    };
    Some(AspectProposal {
        requested,
        keep_width,
        keep_height,
    })
}

/// Resolves `requested` against `source` without interaction.
pub fn resolve(source: Size, requested: Size, choice: AspectChoice) -> Size {
    propose(source, requested)
        .map(|proposal| proposal.resolve(choice))
        .unwrap_or(requested)
}

#[cfg(test)]
mod tests {
    use super::{propose, resolve, AspectChoice};
    use crate::raster::Size;

    fn size(width: usize, height: usize) -> Size {
        Size::new(width, height).unwrap()
    }

    #[test]
    fn matching_proportions_need_no_proposal() {
        assert!(propose(size(400, 200), size(100, 50)).is_none());
    }

    #[test]
    fn proposals_preserve_source_proportions() {
        let proposal = propose(size(400, 200), size(100, 100)).unwrap();
        assert_eq!(proposal.keep_width, size(100, 50));
        assert_eq!(proposal.keep_height, size(200, 100));
        assert_eq!(proposal.requested, size(100, 100));
    }

    #[test]
    fn responses_map_to_choices() {
        assert_eq!(AspectChoice::from_response("1\n"), AspectChoice::KeepWidth);
        assert_eq!(AspectChoice::from_response(" 2"), AspectChoice::KeepHeight);
        assert_eq!(AspectChoice::from_response("3"), AspectChoice::Stretch);
        assert_eq!(AspectChoice::from_response(""), AspectChoice::Stretch);
    }

    #[test]
    fn resolve_applies_choice_only_on_mismatch() {
        assert_eq!(
            resolve(size(30, 10), size(9, 9), AspectChoice::KeepHeight),
            size(27, 9)
        );
        assert_eq!(
            resolve(size(10, 10), size(9, 9), AspectChoice::KeepHeight),
            size(9, 9)
        );
    }
}
