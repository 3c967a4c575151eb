//! Virtualized layout pass
//!
//! Items are laid out along the scroll axis relative to the cursor item,
//! which sits at offset 0. Only items within `clip + margin` of the viewport
//! are materialized. The same pass reports whether the viewport has been
//! scrolled past either end of the sequence.

use std::ops::Range;

use tumbler_core::SequenceCursor;

use crate::gesture::Edge;

/// One materialized item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedItem {
    /// Sequence index
    pub index: usize,
    /// Offset from the cursor item's origin
    pub offset: f32,
    /// Extent along the scroll axis
    pub size: f32,
}

/// Result of a layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Materialized items in sequence order
    pub items: Vec<RenderedItem>,
    /// Translation applied to the whole group (the negated scroll position)
    pub group_offset: f32,
    /// Boundary the viewport is past, if any
    pub edge: Edge,
    /// Scroll position at which the viewport would rest against `edge`
    pub edge_position: f32,
}

impl Layout {
    /// Sequence indices of the materialized items
    pub fn materialized(&self) -> Range<usize> {
        match (self.items.first(), self.items.last()) {
            (Some(first), Some(last)) => first.index..last.index + 1,
            _ => 0..0,
        }
    }

    /// Rendered offset of an item, including the group translation
    pub fn offset_of(&self, index: usize) -> Option<f32> {
        self.items
            .iter()
            .find(|item| item.index == index)
            .map(|item| item.offset + self.group_offset)
    }
}

/// Layout parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Scroll position relative to the cursor item's origin
    pub position: f32,
    /// Visible extent
    pub clip: f32,
    /// Extra materialization distance beyond the clip
    pub margin: f32,
    /// Extent used for items without an explicit size
    pub fallback_size: f32,
}

/// Extent of the cursor's item, falling back when it has no explicit size
pub fn item_size<T>(cursor: &SequenceCursor<T>, fallback: f32) -> f32 {
    cursor
        .size()
        .filter(|size| *size > 0.0)
        .unwrap_or(fallback)
}

/// Lay out the items around `cursor`
pub fn layout<T>(cursor: &SequenceCursor<T>, params: LayoutParams) -> Layout {
    let LayoutParams {
        position,
        clip,
        margin,
        fallback_size,
    } = params;

    let mut forward = Vec::new();
    let mut offset = 0.0;
    let mut node = Some(cursor.clone());
    while let Some(current) = node.as_ref() {
        if offset - position >= clip + margin {
            break;
        }
        let size = item_size(current, fallback_size);
        forward.push(RenderedItem {
            index: current.index(),
            offset,
            size,
        });
        offset += size;
        node = current.next();
    }

    let (edge, edge_position) = if node.is_none() && offset - position < clip {
        (Edge::Trailing, offset - clip)
    } else if cursor.previous().is_none() && position < 0.0 {
        (Edge::Leading, 0.0)
    } else {
        (Edge::None, 0.0)
    };

    let mut backward = Vec::new();
    let mut offset = 0.0;
    let mut node = cursor.previous();
    while let Some(current) = node {
        if offset - position <= -(clip + margin) {
            break;
        }
        let size = item_size(&current, fallback_size);
        offset -= size;
        backward.push(RenderedItem {
            index: current.index(),
            offset,
            size,
        });
        node = current.previous();
    }
    backward.reverse();
    backward.extend(forward);

    Layout {
        items: backward,
        group_offset: -position,
        edge,
        edge_position,
    }
}
