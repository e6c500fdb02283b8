pub mod entities;
pub mod menu_lookup;
pub mod repositories;

pub use entities::*;
pub use menu_lookup::*;
pub use repositories::*;
