use std::ops::Range;

/// Smallest and largest element, None for an empty iterator.
/// NAN values never win a comparison, so they are passed over
/// unless they are the first element.
pub fn min_and_max<'a, I, T>(mut s: I) -> Option<(T, T)>
where
    I: Iterator<Item = &'a T>,
    T: 'a + std::cmp::PartialOrd + Clone,
{
    let (mut min, mut max) = match s.next() {
        Some(v) => (v, v),
        None => return None,
    };
    for es in s {
        if es > max {
            max = es
        } else if es < min {
            min = es
        }
    }
    Some((min.clone(), max.clone()))
}

/// Axis range for a series, padded by `pad_pct` percent of the span on each side.
/// A flat series is widened by half a unit (one unit around zero),
/// an empty one falls back to 0..1.
pub fn axis_range(v: &[f64], pad_pct: f64) -> Range<f64> {
    let (min, max) = match min_and_max(v.iter().filter(|x| x.is_finite())) {
        Some(mm) => mm,
        None => return 0f64..1f64,
    };
    if max == min {
        let half = if min == 0. { 1. } else { 0.5 };
        return (min - half)..(max + half);
    }
    let pad = (max - min) / 100. * pad_pct;
    (min - pad)..(max + pad)
}
