// crates/palgraph-core/src/curve/flatten.rs

use crate::model::position::{round_half_up, Position};

/// One committed y per integer x, over the x range the samples touch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlatCurve {
    origin: i32,
    slots: Vec<Option<i32>>,
}

impl FlatCurve {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Inclusive x range covered.
    pub fn x_range(&self) -> Option<(i32, i32)> {
        if self.slots.is_empty() {
            None
        } else {
            Some((self.origin, self.origin + self.slots.len() as i32 - 1))
        }
    }

    pub fn get(&self, x: i32) -> Option<i32> {
        let i = usize::try_from(x - self.origin).ok()?;
        self.slots.get(i).copied().flatten()
    }

    /// Dense values for `x0..=x1`; `None` if any slot in the range is unset.
    pub fn span(&self, x0: i32, x1: i32) -> Option<Vec<i32>> {
        (x0..=x1).map(|x| self.get(x)).collect()
    }

    fn slot_mut(&mut self, x: i32) -> &mut Option<i32> {
        let i = (x - self.origin) as usize;
        &mut self.slots[i]
    }
}

/// Walk samples in parameter order, filling skipped x slots by linear
/// interpolation.
///
/// Interpolation never overwrites a slot that is already set, so on a curve
/// that folds back the first visit wins there; a sample's own slot is always
/// overwritten.
pub fn flatten(samples: &[Position]) -> FlatCurve {
    let (Some(lo), Some(hi)) = (
        samples.iter().map(|p| p.x).min(),
        samples.iter().map(|p| p.x).max(),
    ) else {
        return FlatCurve::default();
    };

    let mut flat = FlatCurve {
        origin: lo,
        slots: vec![None; (hi - lo) as usize + 1],
    };

    let mut prev: Option<Position> = None;
    for &cur in samples {
        if let Some(p) = prev {
            let dx = cur.x - p.x;
            if dx.abs() > 1 {
                let step = dx.signum();
                let mut x = p.x + step;
                while x != cur.x {
                    let slot = flat.slot_mut(x);
                    if slot.is_none() {
                        let y = p.y as f64 + (cur.y - p.y) as f64 * (x - p.x) as f64 / dx as f64;
                        *slot = Some(round_half_up(y));
                    }
                    x += step;
                }
            }
        }
        *flat.slot_mut(cur.x) = Some(cur.y);
        prev = Some(cur);
    }

    flat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_are_interpolated() {
        let s = [Position::new(0, 0), Position::new(4, 8)];
        let f = flatten(&s);
        assert_eq!(f.span(0, 4), Some(vec![0, 2, 4, 6, 8]));
    }

    #[test]
    fn fold_back_keeps_first_interpolated_value() {
        // 0 -> 4 forward, then back to 2 and forward again to 6.
        let s = [
            Position::new(0, 0),
            Position::new(4, 40),
            Position::new(2, 100),
            Position::new(6, 100),
        ];
        let f = flatten(&s);
        assert_eq!(f.get(3), Some(30));
        // sample's own slot is overwritten
        assert_eq!(f.get(2), Some(100));
        assert_eq!(f.get(5), Some(100));
        assert_eq!(f.x_range(), Some((0, 6)));
    }

    #[test]
    fn empty_samples_give_empty_curve() {
        let f = flatten(&[]);
        assert!(f.is_empty());
        assert_eq!(f.x_range(), None);
        assert_eq!(f.span(0, 0), None);
    }
}
