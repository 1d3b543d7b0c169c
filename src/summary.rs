//! Per-cluster statistics for a finished labeling.

use std::collections::BTreeMap;
use std::fmt;

use crate::cluster::{Label, NOISE};
use crate::error::{Error, Result};
use crate::point::{self, Point};

/// Size and extent of one cluster.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterStats {
    /// Cluster id, as found in the labels.
    pub id: usize,
    /// Number of member points.
    pub size: usize,
    /// Mean of the member coordinates.
    pub centroid: Point,
    /// Lower-left corner of the bounding box.
    pub min: Point,
    /// Upper-right corner of the bounding box.
    pub max: Point,
}

/// Summary of a clustering run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Total number of points.
    pub n_points: usize,
    /// Number of points labeled noise.
    pub n_noise: usize,
    /// Clusters ordered by id.
    pub clusters: Vec<ClusterStats>,
}

struct Accumulator {
    size: usize,
    sum_x: f64,
    sum_y: f64,
    min: Point,
    max: Point,
}

impl Accumulator {
    fn new(p: Point) -> Self {
        Self {
            size: 0,
            sum_x: 0.0,
            sum_y: 0.0,
            min: p,
            max: p,
        }
    }

    fn push(&mut self, p: Point) {
        self.size += 1;
        self.sum_x += p.x;
        self.sum_y += p.y;
        self.min = Point::new(self.min.x.min(p.x), self.min.y.min(p.y));
        self.max = Point::new(self.max.x.max(p.x), self.max.y.max(p.y));
    }

    fn finish(self, id: usize) -> ClusterStats {
        let n = self.size as f64;
        ClusterStats {
            id,
            size: self.size,
            centroid: Point::new(self.sum_x / n, self.sum_y / n),
            min: self.min,
            max: self.max,
        }
    }
}

impl Summary {
    /// Summarise `labels` (as returned by a clusterer) over `points`.
    ///
    /// Cluster ids need not be contiguous; clusters are reported in id order.
    pub fn from_labels(points: &[Point], labels: &[Label]) -> Result<Self> {
        if points.len() != labels.len() {
            return Err(Error::InvalidInput {
                index: points.len().min(labels.len()),
                message: "points and labels differ in length",
            });
        }
        point::validate(points)?;

        let mut n_noise = 0;
        let mut acc: BTreeMap<usize, Accumulator> = BTreeMap::new();
        for (index, (&p, &label)) in points.iter().zip(labels).enumerate() {
            if label == NOISE {
                n_noise += 1;
                continue;
            }
            let id = usize::try_from(label).map_err(|_| Error::InvalidInput {
                index,
                message: "label must be a cluster id or -1",
            })?;
            acc.entry(id).or_insert_with(|| Accumulator::new(p)).push(p);
        }

        Ok(Self {
            n_points: points.len(),
            n_noise,
            clusters: acc.into_iter().map(|(id, a)| a.finish(id)).collect(),
        })
    }

    /// Number of distinct clusters.
    pub fn n_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// The cluster with the most members; lowest id wins ties.
    pub fn largest(&self) -> Option<&ClusterStats> {
        self.clusters
            .iter()
            .reduce(|best, c| if c.size > best.size { c } else { best })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total points: {}", self.n_points)?;
        writeln!(f, "Clusters found: {}", self.n_clusters())?;
        writeln!(f, "Noise points: {}", self.n_noise)?;
        writeln!(f, "--- Cluster Distribution ---")?;
        for c in &self.clusters {
            writeln!(
                f,
                "Cluster {}: {} points, centroid ({:.1}, {:.1})",
                c.id, c.size, c.centroid.x, c.centroid.y
            )?;
        }
        write!(f, "----------------------------")
    }
}
