//! Travel block classification.
//!
//! A travel block is a nested tree of `div`/`span` containers with no
//! schema: the meaning of a text node is implied by the class value of the
//! container opened just before it, and for times and stations by whether
//! we are inside the departure or the arrival sub-block. The classifier
//! walks the block's tokens once, tracking depth so it stops exactly where
//! the block closes.

mod class;
mod entry;
mod error;
mod extract;
mod state;

pub use class::ContainerClass;
pub use entry::classify_entry;
pub use error::{ClassifyError, DirectionalLabel, InternalStateError};
pub use extract::{DURATION_WIDTH, PLACEMENT_WIDTH, TRAIN_WIDTH, commit, last_chars};
pub use state::{ActiveField, ClassificationState, Context, Field};
