//! 닉네임 언어(문자 체계) 감지 모듈

mod script_detect;

pub use script_detect::{detect_language, Language, ScriptDetector, ScriptDetectorConfig, RATIO_THRESHOLD};
