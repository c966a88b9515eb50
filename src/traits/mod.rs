//! Extension traits bridging standard types onto the rails.

mod option_ext;
mod result_ext;
mod transient;

pub use option_ext::OptionRailExt;
pub use result_ext::ResultRailExt;
pub use transient::Transient;
