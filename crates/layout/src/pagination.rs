//! Page-break decision logic.

/// Epsilon for floating point fit comparisons, in mm.
pub const FIT_EPSILON: f32 = 0.01;

pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized check whether a block fits in the space left on the page.
///
/// * `cursor_y`: current absolute Y position on the page.
/// * `block_height`: required height for the block.
/// * `content_bottom`: lowest allowed Y (page height minus margin).
pub fn check_block_fit(cursor_y: f32, block_height: f32, content_bottom: f32) -> BreakAnalysis {
    let available = (content_bottom - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: block_height > available + FIT_EPSILON,
        remaining_height: available,
    }
}

/// Whether the cursor still sits at the top margin of a fresh page.
pub fn at_page_top(cursor_y: f32, margin: f32) -> bool {
    (cursor_y - margin).abs() < 0.1
}
