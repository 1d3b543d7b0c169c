//! Density-based clustering of planar points.
//!
//! ## DBSCAN
//!
//! Density-based clustering that can discover non-convex clusters and identify
//! outliers (noise points). DBSCAN does not require specifying the number of
//! clusters in advance, which makes it a natural fit for hotspot detection: dense
//! pockets of incidents become clusters, isolated incidents stay noise.
//!
//! Distances are plain Euclidean distances on the coordinates, so points should be
//! projected into a metric frame before clustering.
//!
//! ## Neighbourhood index
//!
//! Neighbourhood queries run through [`IndexKind`]. The grid index is usually much
//! faster on spread-out data; it never changes the result.
//!
//! ## Usage
//!
//! ```rust
//! use hotspot::cluster::{Clustering, Dbscan, IndexKind, NOISE};
//! use hotspot::Point;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(10.0, 10.0),
//! ];
//!
//! let labels = Dbscan::new(2.0, 2)
//!     .with_index(IndexKind::Grid)
//!     .fit_predict(&points)
//!     .unwrap();
//! assert_eq!(labels, vec![0, 0, NOISE]);
//! ```

mod dbscan;
mod index;
mod traits;

pub use dbscan::{Dbscan, DbscanExt, DbscanFit, Label, NOISE};
pub use index::IndexKind;
pub use traits::Clustering;
