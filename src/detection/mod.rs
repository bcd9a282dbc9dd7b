//! Script detection and converted-text checks

mod detector;
pub mod validator;

pub use detector::{detect_script, detect_script_with_confidence, ScriptCounts};
pub use validator::{is_mostly_script, is_valid_script_result, script_ratio};
