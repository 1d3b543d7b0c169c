use super::dbscan::Label;
use crate::error::Result;
use crate::point::Point;

/// A clusterer that assigns every point one label.
pub trait Clustering {
    /// Return one label per input point, in input order.
    fn fit_predict(&self, points: &[Point]) -> Result<Vec<Label>>;

    /// Number of clusters fixed before fitting; 0 when it is only known afterwards.
    fn n_clusters(&self) -> usize;
}
