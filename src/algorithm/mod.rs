pub mod traits;
pub mod tarjan;
pub mod kahn;
pub mod dag_paths;

pub use traits::{Distance, Instrumented, Objective, PathResult};
pub use tarjan::{Component, CondensationWeight};
pub use kahn::TopoOrder;
