pub mod metrics;
pub mod panel;
pub mod reservation;
pub mod route;

pub use metrics::*;
pub use panel::*;
pub use reservation::*;
pub use route::*;
