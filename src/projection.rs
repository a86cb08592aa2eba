use crate::mat::Matrix2D;

/// Maps a `width x height` viewport with the origin at its center onto the
/// `[-1, 1]` NDC square, ignoring z. With `flip_y` a y-down viewport comes
/// out y-up, the usual screen-to-GL convention; pass `false` for a y-up
/// input where rotations stay counter-clockwise positive (textures then
/// need their own flip).
#[inline]
pub fn center_2d(width: f32, height: f32, flip_y: bool) -> Matrix2D {
    let sy = if flip_y { -2.0 } else { 2.0 };
    Matrix2D::new(2.0 / width, 0.0, 0.0, sy / height, 0.0, 0.0)
}

/// Same scale as [`center_2d`] but with the viewport origin at the
/// top-left corner, so pixel `(0, 0)` lands on the NDC corner `(-1, 1)`
/// when `flip_y` and `(-1, -1)` otherwise.
#[inline]
pub fn top_left_2d(width: f32, height: f32, flip_y: bool) -> Matrix2D {
    if flip_y {
        Matrix2D::new(2.0 / width, 0.0, 0.0, -2.0 / height, -1.0, 1.0)
    } else {
        Matrix2D::new(2.0 / width, 0.0, 0.0, 2.0 / height, -1.0, -1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vector2D;

    fn vnear(a: Vector2D, b: Vector2D) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    #[test]
    fn center_maps_center_origin_viewport() {
        let m = center_2d(800.0, 600.0, true);
        // input is relative to the viewport center, which maps to the NDC
        // origin
        assert!(vnear(
            m.transform_point(Vector2D::default()),
            Vector2D::default()
        ));
        // y flips: the bottom-right half-extent lands on (1, -1)
        assert!(vnear(
            m.transform_point(Vector2D::new(400.0, 300.0)),
            Vector2D::new(1.0, -1.0)
        ));
        assert!(vnear(
            m.transform_point(Vector2D::new(-400.0, -300.0)),
            Vector2D::new(-1.0, 1.0)
        ));
    }

    #[test]
    fn center_without_flip_keeps_y_up() {
        let m = center_2d(800.0, 600.0, false);
        assert!(vnear(
            m.transform_point(Vector2D::new(400.0, 300.0)),
            Vector2D::new(1.0, 1.0)
        ));
    }

    #[test]
    fn top_left_flipped_corners() {
        let m = top_left_2d(800.0, 600.0, true);
        assert!(vnear(
            m.transform_point(Vector2D::new(0.0, 0.0)),
            Vector2D::new(-1.0, 1.0)
        ));
        assert!(vnear(
            m.transform_point(Vector2D::new(800.0, 600.0)),
            Vector2D::new(1.0, -1.0)
        ));
        assert!(vnear(
            m.transform_point(Vector2D::new(400.0, 300.0)),
            Vector2D::default()
        ));
    }

    #[test]
    fn top_left_unflipped_corners() {
        let m = top_left_2d(800.0, 600.0, false);
        assert!(vnear(
            m.transform_point(Vector2D::new(0.0, 0.0)),
            Vector2D::new(-1.0, -1.0)
        ));
        assert!(vnear(
            m.transform_point(Vector2D::new(800.0, 600.0)),
            Vector2D::new(1.0, 1.0)
        ));
    }

    #[test]
    fn projection_has_no_rotation() {
        let m = top_left_2d(1024.0, 768.0, true);
        assert_eq!(m.b, 0.0);
        assert_eq!(m.c, 0.0);
        assert!(m.inverse().is_some());
    }
}
