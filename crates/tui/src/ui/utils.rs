use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Centers a `width` x `height` rectangle inside `area`, shrinking it when
/// `area` is smaller.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
