mod model;
mod segmentation;
mod traits;

pub use model::{fit_global, GlobalFit, LinearModel};
pub use segmentation::{greedy_segmentation, Segment, Segmentation};
pub use traits::Key;
