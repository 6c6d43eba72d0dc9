use crate::config::{LOGO_MAX_HEIGHT, LOGO_MIN_HEIGHT, LOGO_SHRINK_RATE};

/// Height the vertical logo is heading towards at `offset`.
pub fn target_height(offset: u32) -> f64 {
    (LOGO_MAX_HEIGHT - offset as f64 * LOGO_SHRINK_RATE).max(LOGO_MIN_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_is_clamped_between_bounds() {
        assert_eq!(target_height(0), 600.0);
        assert_eq!(target_height(1000), 450.0);
        assert_eq!(target_height(2000), 300.0);
        assert_eq!(target_height(50_000), 300.0);
    }

    #[test]
    fn height_never_grows_with_offset() {
        let mut previous = target_height(0);
        for offset in (0..5000).step_by(37) {
            let height = target_height(offset);
            assert!(height <= previous);
            previous = height;
        }
    }
}
