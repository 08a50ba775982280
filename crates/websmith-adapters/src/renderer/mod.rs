//! Skeleton renderers implementing the `SkeletonRenderer` port.

mod simple;

pub use simple::SimpleRenderer;
