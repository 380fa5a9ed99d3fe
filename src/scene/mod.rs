pub mod bitmap;
pub mod damage;
pub mod graph;
pub mod shapes;

pub use bitmap::Bitmap;
pub use damage::{DamageTracker, MAX_DIRTY_REGIONS};
pub use graph::{NodeId, SceneGraph};
pub use shapes::Shape;
