pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Pads raw data spans and widens one of them to hold the x:y ratio.
pub fn fixed_ratio_axis_window_f64(raw_span_x: f64, raw_span_y: f64) -> (f64, f64) {
    let raw_x_span = raw_span_x.max(1.0);
    let raw_y_span = raw_span_y.max(1.0);
    let x_pad = raw_x_span * X_PADDING_RATIO;
    let y_pad = raw_y_span * Y_PADDING_RATIO;

    let mut x_span = (raw_span_x + x_pad).max(1.0);
    let mut y_span = (raw_span_y + y_pad).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}

/// Data-space rectangle handed to a renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisWindow {
    /// Fixed-ratio window anchored at the lowest coordinates (never above the
    /// origin) that holds every point.
    pub fn enclosing<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
        for (x, y) in points {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        let (x_span, y_span) = fixed_ratio_axis_window_f64(max_x - min_x, max_y - min_y);
        Self {
            x_min: min_x,
            x_max: min_x + x_span,
            y_min: min_y,
            y_max: min_y + y_span,
        }
    }

    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{AxisWindow, DISTANCE_TO_HEIGHT_RATIO, fixed_ratio_axis_window_f64};

    #[test]
    fn wide_data_grows_height() {
        let (x, y) = fixed_ratio_axis_window_f64(100.0, 10.0);
        assert_relative_eq!(x, 106.0);
        assert_relative_eq!(y, 53.0);
    }

    #[test]
    fn tall_data_grows_width() {
        let (x, y) = fixed_ratio_axis_window_f64(10.0, 100.0);
        assert_relative_eq!(y, 110.0);
        assert_relative_eq!(x, 220.0);
    }

    #[test]
    fn empty_data_gets_unit_floor() {
        let (x, y) = fixed_ratio_axis_window_f64(0.0, 0.0);
        assert!(x >= 1.0 && y >= 1.0);
        assert_relative_eq!(x / y, DISTANCE_TO_HEIGHT_RATIO);
    }

    #[test]
    fn enclosing_covers_negative_points() {
        let window = AxisWindow::enclosing([(0.0, 0.0), (250.0, 60.0), (260.0, -30.0)]);
        assert_eq!(window.x_min, 0.0);
        assert_eq!(window.y_min, -30.0);
        assert!(window.x_max >= 260.0);
        assert!(window.y_max >= 60.0);
        assert_relative_eq!(window.x_span() / window.y_span(), DISTANCE_TO_HEIGHT_RATIO);
    }

    #[test]
    fn enclosing_skips_non_finite_points() {
        let window = AxisWindow::enclosing([(f64::NAN, 1.0), (10.0, f64::INFINITY)]);
        assert_eq!(window.x_min, 0.0);
        assert!(window.x_max.is_finite() && window.y_max.is_finite());
    }
}
