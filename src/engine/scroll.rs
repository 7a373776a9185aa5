use std::ops::RangeInclusive;

/// Pages kept mounted on either side of the active page.
pub const VIRTUALIZATION_RADIUS: usize = 1;

/// Picks the page whose vertical center lies nearest the viewport center.
/// `page_centers` pairs each page index with its center coordinate in the
/// same space as `viewport_center`. Ties resolve to the page listed
/// first; an empty slice yields `None`.
pub fn nearest_page(viewport_center: f64, page_centers: &[(usize, f64)]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &(index, center) in page_centers {
        let distance = (center - viewport_center).abs();
        match best {
            Some((_, closest)) if distance >= closest => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Indices of the pages that stay mounted around the active one.
pub fn visible_range(active: usize, page_count: usize, radius: usize) -> RangeInclusive<usize> {
    let last = page_count.saturating_sub(1);
    let start = active.saturating_sub(radius);
    let end = (active + radius).min(last);
    start..=end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_center_wins() {
        let centers = [(0, 100.0), (1, 400.0), (2, 700.0)];
        assert_eq!(nearest_page(120.0, &centers), Some(0));
        assert_eq!(nearest_page(390.0, &centers), Some(1));
        assert_eq!(nearest_page(1000.0, &centers), Some(2));
    }

    #[test]
    fn ties_go_to_the_earlier_page() {
        // Viewport center exactly between two page centers.
        let centers = [(3, 100.0), (4, 300.0)];
        assert_eq!(nearest_page(200.0, &centers), Some(3));
    }

    #[test]
    fn empty_input_selects_nothing() {
        assert_eq!(nearest_page(0.0, &[]), None);
    }

    #[test]
    fn window_spans_one_page_on_each_side() {
        assert_eq!(visible_range(0, 1, 1), 0..=0);
        assert_eq!(visible_range(0, 5, 1), 0..=1);
        assert_eq!(visible_range(2, 5, 1), 1..=3);
        assert_eq!(visible_range(4, 5, 1), 3..=4);
    }

    #[test]
    fn window_clamps_at_both_ends() {
        assert_eq!(visible_range(1, 2, 5), 0..=1);
        assert_eq!(visible_range(0, 4, 2), 0..=2);
    }
}
