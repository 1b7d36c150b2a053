pub mod position;
pub mod settings;
pub mod state;
pub mod task;

pub use position::*;
pub use settings::*;
pub use state::*;
pub use task::*;
