mod browser_name;
mod detection;
mod device_description;
mod device_type;
mod engine_name;
mod os_name;

pub use browser_name::*;
pub use detection::*;
pub use device_description::*;
pub use device_type::*;
pub use engine_name::*;
pub use os_name::*;
