//! Active-index resolution
//!
//! Decides which item sits at the selection point. All materialized items
//! are laid out at a uniform extent from the pivot (the cursor's item); the
//! one closest to the group origin wins. When the group has been dragged more
//! than half an item forward the next item is selected instead.

use std::ops::Range;

/// Snapshot of the rendered window
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverInput {
    /// Sequence index of the cursor item
    pub pivot_index: usize,
    /// Rendered offset of the cursor item inside the group
    pub pivot_offset: f32,
    /// Uniform item extent
    pub item_extent: f32,
    /// Indices of the materialized items
    pub materialized: Range<usize>,
    /// Offset applied to the whole group (the negated scroll position)
    pub rendered_offset: f32,
}

/// Index of the active item, or `None` when nothing is materialized
pub fn resolve_active_index(input: &ResolverInput) -> Option<usize> {
    let ResolverInput {
        pivot_index,
        pivot_offset,
        item_extent,
        ref materialized,
        rendered_offset,
    } = *input;

    let mut best: Option<(usize, f32)> = None;
    for index in materialized.clone() {
        let steps = index as f32 - pivot_index as f32;
        let distance = (pivot_offset + steps * item_extent).abs();
        if best.map_or(true, |(_, current)| distance < current) {
            best = Some((index, distance));
        }
    }
    let (mut index, _) = best?;

    if rendered_offset.abs() > item_extent / 2.0 {
        index += 1;
    }
    Some(index.min(materialized.end - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input(pivot_index: usize, rendered_offset: f32) -> ResolverInput {
        ResolverInput {
            pivot_index,
            pivot_offset: 0.0,
            item_extent: 60.0,
            materialized: 0..9,
            rendered_offset,
        }
    }

    #[test]
    fn test_pivot_wins_at_rest() {
        assert_eq!(resolve_active_index(&input(4, 0.0)), Some(4));
        assert_eq!(resolve_active_index(&input(4, -29.0)), Some(4));
    }

    #[test]
    fn test_past_half_extent_selects_next() {
        assert_eq!(resolve_active_index(&input(4, -31.0)), Some(5));
        assert_eq!(resolve_active_index(&input(4, 31.0)), Some(5));
    }

    #[test]
    fn test_clamped_to_last_item() {
        assert_eq!(resolve_active_index(&input(8, -40.0)), Some(8));
    }

    #[test]
    fn test_offset_pivot() {
        let resolved = resolve_active_index(&ResolverInput {
            pivot_index: 2,
            pivot_offset: -120.0,
            item_extent: 60.0,
            materialized: 0..6,
            rendered_offset: 0.0,
        });
        assert_eq!(resolved, Some(4));
    }

    #[test]
    fn test_nothing_materialized() {
        let resolved = resolve_active_index(&ResolverInput {
            materialized: 3..3,
            ..input(3, 0.0)
        });
        assert_eq!(resolved, None);
    }
}
