use core_types::Rect;

/// One side of a root margin. Percentages resolve against the corresponding
/// root dimension (top/bottom against height, left/right against width).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Margin {
    Px(f32),
    Percent(f32),
}

impl Margin {
    fn resolve(self, basis: f32) -> f32 {
        match self {
            Margin::Px(px) => px,
            Margin::Percent(pct) => basis * pct / 100.0,
        }
    }
}

/// Margins applied to the viewport rect before the intersection test, in CSS
/// order (top, right, bottom, left). Positive margins grow the root outward;
/// negative margins shrink it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: Margin,
    pub right: Margin,
    pub bottom: Margin,
    pub left: Margin,
}

impl RootMargin {
    pub const fn new(top: Margin, right: Margin, bottom: Margin, left: Margin) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn none() -> Self {
        Self::new(
            Margin::Px(0.0),
            Margin::Px(0.0),
            Margin::Px(0.0),
            Margin::Px(0.0),
        )
    }

    /// Apply the margins to `root`. A fully shrunken root collapses to a
    /// zero-sized band rather than inverting.
    pub fn apply(&self, root: Rect) -> Rect {
        let top = self.top.resolve(root.height);
        let bottom = self.bottom.resolve(root.height);
        let left = self.left.resolve(root.width);
        let right = self.right.resolve(root.width);
        Rect {
            x: root.x - left,
            y: root.y - top,
            width: (root.width + left + right).max(0.0),
            height: (root.height + top + bottom).max(0.0),
        }
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::none()
    }
}

/// Closed-edge intersection of `target` against `root`, with the overlap
/// area as a fraction of the target's own area. A degenerate overlap (zero
/// width or height) intersects with ratio 0.
pub fn intersection(target: &Rect, root: &Rect) -> (bool, f32) {
    if !target.intersects(root) {
        return (false, 0.0);
    }
    let area = target.area();
    let ratio = if area > 0.0 {
        target.overlap(root).area() / area
    } else {
        0.0
    };
    (true, ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_margins_shift_each_edge() {
        let root = Rect::new(0.0, 100.0, 1200.0, 800.0);
        let margin = RootMargin::new(
            Margin::Px(0.0),
            Margin::Px(0.0),
            Margin::Px(-100.0),
            Margin::Px(0.0),
        );
        let shrunk = margin.apply(root);
        assert_eq!(shrunk.y, 100.0);
        assert_eq!(shrunk.height, 700.0);
        assert_eq!(shrunk.width, 1200.0);
    }

    #[test]
    fn percent_margins_resolve_against_the_root_dimensions() {
        let root = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let margin = RootMargin::new(
            Margin::Percent(-20.0),
            Margin::Px(0.0),
            Margin::Percent(-80.0),
            Margin::Px(0.0),
        );
        let band = margin.apply(root);
        // -20% top and -80% bottom of an 800px root leave a zero-height band
        // sitting 160px below the top edge.
        assert_eq!(band.y, 160.0);
        assert_eq!(band.height, 0.0);
    }

    #[test]
    fn positive_margins_grow_the_root() {
        let root = Rect::new(0.0, 200.0, 1000.0, 800.0);
        let margin = RootMargin::new(
            Margin::Px(50.0),
            Margin::Px(0.0),
            Margin::Px(50.0),
            Margin::Px(0.0),
        );
        let grown = margin.apply(root);
        assert_eq!(grown.y, 150.0);
        assert_eq!(grown.height, 900.0);
    }

    #[test]
    fn over_shrunken_roots_collapse_instead_of_inverting() {
        let root = Rect::new(0.0, 0.0, 100.0, 100.0);
        let margin = RootMargin::new(
            Margin::Percent(-80.0),
            Margin::Px(0.0),
            Margin::Percent(-80.0),
            Margin::Px(0.0),
        );
        assert_eq!(margin.apply(root).height, 0.0);
    }

    #[test]
    fn ratio_is_relative_to_the_target() {
        let root = Rect::new(0.0, 0.0, 1000.0, 800.0);
        // bottom half of the target hangs below the root
        let target = Rect::new(0.0, 700.0, 100.0, 200.0);
        let (intersecting, ratio) = intersection(&target, &root);
        assert!(intersecting);
        assert_eq!(ratio, 0.5);
    }

    #[test]
    fn zero_height_band_intersects_with_ratio_zero() {
        let band = Rect::new(0.0, 160.0, 1000.0, 0.0);
        let target = Rect::new(0.0, 100.0, 500.0, 400.0);
        let (intersecting, ratio) = intersection(&target, &band);
        assert!(intersecting);
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn disjoint_targets_report_nothing() {
        let root = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let target = Rect::new(0.0, 2000.0, 100.0, 100.0);
        assert_eq!(intersection(&target, &root), (false, 0.0));
    }
}
