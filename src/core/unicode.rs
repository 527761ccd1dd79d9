//! 유니코드 한글 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 한 음절을 구성하는 초성/중성/종성 인덱스
///
/// jongseong == 0 이면 받침 없음
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JamoTriple {
    /// 초성 인덱스 (0~18)
    pub choseong: u32,
    /// 중성 인덱스 (0~20)
    pub jungseong: u32,
    /// 종성 인덱스 (0~27, 0 = 종성 없음)
    pub jongseong: u32,
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
///
/// 음절 블록(가~힣) 밖의 문자는 None (그대로 통과시키라는 신호)
pub fn decompose_syllable(c: char) -> Option<JamoTriple> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    Some(JamoTriple {
        choseong: offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT),
        jungseong: (offset % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT,
        jongseong: offset % JONGSEONG_COUNT,
    })
}

/// 완성형 한글 음절인지 확인 (가~힣)
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 호환용 자모인지 확인 (ㄱ~ㅣ)
pub fn is_compat_jamo(c: char) -> bool {
    ('\u{3131}'..='\u{3163}').contains(&c)
}

/// 키릴 문자인지 확인 (소문자 기준 а~я, ё)
pub fn is_cyrillic_letter(c: char) -> bool {
    let lc = c.to_lowercase().next().unwrap_or(c);
    matches!(lc, 'а'..='я' | 'ё')
}
