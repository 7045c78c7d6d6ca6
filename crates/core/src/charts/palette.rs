//! Deterministic categorical color assignment.
//!
//! Colors are a pure function of position. Two charts fed the same ordered
//! labels paint the same colors on every render, so the sector donut and
//! the market-cap donut never flicker or drift apart between fetches.

/// The fixed categorical palette, cycled when a chart has more than ten
/// slices.
pub const CHART_COLORS: [&str; 10] = [
    "#3B82F6", "#8B5CF6", "#10B981", "#F59E0B", "#EF4444", "#06B6D4", "#84CC16", "#F97316",
    "#EC4899", "#6366F1",
];

/// Color for the slice at `index`. Total for every index; position eleven
/// wraps back to the first color.
pub fn color_for(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Pairs each label with its positional color.
///
/// The label text never influences the color; only the position does.
pub fn assign_colors<I, S>(labels: I) -> Vec<(String, &'static str)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| (label.into(), color_for(i)))
        .collect()
}
