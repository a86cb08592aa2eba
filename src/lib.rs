pub mod mat;
pub mod projection;
pub mod vec;

pub use mat::{Matrix2D, Matrix3D};
pub use projection::{center_2d, top_left_2d};
pub use vec::{Vector2D, Vector3D};

#[cfg(test)]
mod tests {

    #[test]
    fn viewport_to_ndc_upload_path() {
        use crate::mat::Matrix2D;
        use crate::projection::top_left_2d;
        use crate::vec::Vector2D;

        // model transform composed under a projection, then flattened the
        // way a uniform upload consumes it
        let model = Matrix2D::srt(2.0, 2.0, 0.0, 100.0, 50.0);
        let mvp = top_left_2d(200.0, 100.0, true).prepend(model);

        let p = mvp.transform_point(Vector2D::new(0.0, 0.0));
        assert!((p.x - 0.0).abs() < 1e-6);
        assert!((p.y - 0.0).abs() < 1e-6);

        let buf = mvp.to_array(true);
        assert_eq!(buf.len(), 9);
        assert_eq!(buf[8], 1.0);
    }

    #[test]
    fn flat_buffers_cast_to_bytes() {
        use crate::mat::Matrix3D;

        // field order is the row-major layout, so the raw bytes match
        // to_array(false)
        let m = Matrix3D::look_at(
            crate::vec::Vector3D::new(0.0, 1.0, 5.0),
            crate::vec::Vector3D::default(),
            crate::vec::Vector3D::Y_AXIS,
        );
        let raw: &[f32; 16] = bytemuck::cast_ref(&m);
        assert_eq!(*raw, m.to_array(false));
        assert_eq!(bytemuck::bytes_of(&m).len(), 16 * 4);
    }
}
