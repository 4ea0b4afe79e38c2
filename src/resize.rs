use crate::error::{Error, Result};
use crate::spline::BSpline;

impl BSpline {
    /// Grows or shrinks the control-point and knot buffers by `n`
    /// (negative to shrink) at the high end if `back`, otherwise at the
    /// low end. Growing leaves the new slots zeroed; shrinking discards
    /// the trailing or leading `|n|` entries.
    pub fn resize(&self, n: isize, back: bool) -> Result<BSpline> {
        if n == 0 {
            return Ok(self.clone());
        }

        let n_ctrlp = self.n_ctrlp();
        let n_knots = self.n_knots();
        let new_n_ctrlp = n_ctrlp.checked_add_signed(n).ok_or(Error::OverUnderflow)?;
        if new_n_ctrlp <= self.degree {
            return Err(Error::DegreeGeControlPoints {
                degree: self.degree,
                n_ctrlp: new_n_ctrlp,
            });
        }
        let new_n_knots = n_knots.checked_add_signed(n).ok_or(Error::OverUnderflow)?;

        let dim = self.dim;
        let new_ctrlp_len = new_n_ctrlp.checked_mul(dim).ok_or(Error::OverUnderflow)?;
        let mut new_ctrlp = vec![0.0f32; new_ctrlp_len];
        let mut new_knots = vec![0.0f32; new_n_knots];

        let (src_off, dst_off) = if back {
            (0usize, 0usize)
        } else if n < 0 {
            ((-n) as usize, 0usize)
        } else {
            (0usize, n as usize)
        };
        let min_n_ctrlp = n_ctrlp.min(new_n_ctrlp);
        let min_n_knots = n_knots.min(new_n_knots);

        new_ctrlp[dst_off * dim..(dst_off + min_n_ctrlp) * dim]
            .copy_from_slice(&self.ctrlp[src_off * dim..(src_off + min_n_ctrlp) * dim]);
        new_knots[dst_off..dst_off + min_n_knots]
            .copy_from_slice(&self.knots[src_off..src_off + min_n_knots]);

        Ok(BSpline {
            degree: self.degree,
            dim,
            ctrlp: new_ctrlp,
            knots: new_knots,
        })
    }

    /// In-place form of [`BSpline::resize`].
    pub fn resize_mut(&mut self, n: isize, back: bool) -> Result<()> {
        *self = self.resize(n, back)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spline::KnotLayout;

    #[test]
    fn growing_at_the_back_zero_fills_trailing_slots() {
        let spline = BSpline::from_buffers(
            2,
            1,
            vec![1.0, 2.0, 3.0, 4.0],
            vec![0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0],
        )
        .unwrap();
        let grown = spline.resize(2, true).unwrap();
        assert_eq!(grown.n_ctrlp(), 6);
        assert_eq!(grown.n_knots(), spline.n_knots() + 2);
        assert_eq!(&grown.control_points()[..4], &spline.control_points()[..4]);
        assert_eq!(&grown.control_points()[4..], &[0.0, 0.0]);
    }

    #[test]
    fn growing_at_the_front_shifts_existing_data_up() {
        let spline =
            BSpline::from_buffers(1, 1, vec![1.0, 2.0, 3.0], vec![0.0, 0.0, 1.0, 2.0, 2.0])
                .unwrap();
        let grown = spline.resize(1, false).unwrap();
        assert_eq!(grown.control_points(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(grown.knots(), &[0.0, 0.0, 0.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn shrinking_at_the_front_discards_leading_entries() {
        let spline =
            BSpline::from_buffers(1, 1, vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 0.0, 0.0, 1.0, 2.0, 2.0])
                .unwrap();
        let shrunk = spline.resize(-1, false).unwrap();
        assert_eq!(shrunk.control_points(), &[1.0, 2.0, 3.0]);
        assert_eq!(shrunk.knots(), &[0.0, 0.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn shrinking_below_degree_plus_one_control_points_fails() {
        let spline = BSpline::new(3, 1, 4, KnotLayout::Clamped).unwrap();
        assert_eq!(
            spline.resize(-1, true),
            Err(Error::DegreeGeControlPoints {
                degree: 3,
                n_ctrlp: 3
            })
        );
    }
}
