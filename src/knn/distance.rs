use ndarray::ArrayView1;

use crate::Feature;

// Computes the Euclidean distance between two equal-length feature rows.
// Callers guarantee equal length; this runs once per (query, reference) pair.
pub fn euclidean(u: ArrayView1<Feature>, v: ArrayView1<Feature>) -> Feature {
    u.iter()
        .zip(v.iter())
        .map(|(u, v)| (v - u) * (v - u))
        .sum::<Feature>()
        .sqrt()
}
