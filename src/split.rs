use crate::deboor::EvalResult;
use crate::error::Result;
use crate::spline::BSpline;

impl BSpline {
    /// Splits the curve at `u`. If `u` already sits on an endpoint or a
    /// full-multiplicity interior knot, the curve is returned unchanged
    /// (a plain copy) with `k'` set to the knot index evaluation found.
    /// Otherwise the knot is inserted `net.h + 1` times, raising its
    /// multiplicity to `order`, and `k'` is the index the newly
    /// full-multiplicity run starts at.
    pub fn split(&self, u: f32) -> Result<(BSpline, usize)> {
        let (net, code) = self.evaluate(u)?;
        match code {
            EvalResult::Endpoint | EvalResult::DoubleKnot => Ok((self.clone(), net.k)),
            EvalResult::Interior => {
                let n = net.h + 1;
                let k = net.k;
                let h = net.h;
                let result = self.insert_knot_with_net(&net, n)?;
                Ok((result, k + h + 1))
            }
        }
    }
}
