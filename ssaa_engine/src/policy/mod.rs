/// Format/mode policy - everything derived from the selected AA mode and format

pub mod aa_mode;
pub mod mode_policy;
pub mod render_target_format;
pub mod sample_layout;

pub use aa_mode::*;
pub use mode_policy::*;
pub use render_target_format::*;
pub use sample_layout::*;
