//! 음역 코어 (한글 코덱, 매핑 테이블, 양방향 변환기)

pub mod converter;
pub mod tables;
pub mod unicode;

pub use converter::{korean_to_russian, russian_to_korean};
pub use unicode::{compose_syllable, decompose_syllable, JamoTriple};
