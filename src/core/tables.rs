//! 한글-러시아어 음역 매핑 테이블
//!
//! 순방향(자모 -> 키릴)은 국립국어원 외래어 표기법 기준,
//! 역방향(키릴 -> 한글)은 2글자(자음+모음) 우선, 1글자 폴백.

use std::collections::HashMap;
use std::sync::LazyLock;

/// 초성 인덱스 -> 키릴 표기 (19개)
///
/// ㅇ(11)은 음가 없는 초성이므로 빈 문자열
#[rustfmt::skip]
pub const CHOSEONG_RU: [&str; 19] = [
    "к",   // ㄱ
    "кк",  // ㄲ
    "н",   // ㄴ
    "т",   // ㄷ
    "тт",  // ㄸ
    "р",   // ㄹ
    "м",   // ㅁ
    "п",   // ㅂ
    "пп",  // ㅃ
    "с",   // ㅅ
    "сс",  // ㅆ
    "",    // ㅇ (묵음)
    "ч",   // ㅈ
    "чч",  // ㅉ
    "чх",  // ㅊ
    "кх",  // ㅋ
    "тх",  // ㅌ
    "пх",  // ㅍ
    "х",   // ㅎ
];

/// 중성 인덱스 -> 키릴 표기 (21개)
#[rustfmt::skip]
pub const JUNGSEONG_RU: [&str; 21] = [
    "а",   // ㅏ
    "э",   // ㅐ
    "я",   // ㅑ
    "е",   // ㅒ
    "о",   // ㅓ
    "е",   // ㅔ
    "ё",   // ㅕ
    "е",   // ㅖ
    "о",   // ㅗ
    "ва",  // ㅘ
    "вэ",  // ㅙ
    "ве",  // ㅚ
    "ё",   // ㅛ
    "у",   // ㅜ
    "во",  // ㅝ
    "ве",  // ㅞ
    "ви",  // ㅟ
    "ю",   // ㅠ
    "ы",   // ㅡ
    "ый",  // ㅢ
    "и",   // ㅣ
];

/// 종성 인덱스 -> 키릴 표기 (28개, 0 = 종성 없음)
#[rustfmt::skip]
pub const JONGSEONG_RU: [&str; 28] = [
    "",      // 없음
    "к",     // ㄱ
    "к",     // ㄲ
    "кс",    // ㄳ
    "н",     // ㄴ
    "нч",    // ㄵ
    "нх",    // ㄶ
    "т",     // ㄷ
    "ль",    // ㄹ
    "льк",   // ㄺ
    "льм",   // ㄻ
    "льп",   // ㄼ
    "льс",   // ㄽ
    "льтх",  // ㄾ
    "льпх",  // ㄿ
    "льх",   // ㅀ
    "м",     // ㅁ
    "п",     // ㅂ
    "пс",    // ㅄ
    "т",     // ㅅ
    "т",     // ㅆ
    "н",     // ㅇ
    "т",     // ㅈ
    "т",     // ㅊ
    "к",     // ㅋ
    "т",     // ㅌ
    "п",     // ㅍ
    "т",     // ㅎ
];

/// 초성 인덱스의 키릴 표기 (범위 밖은 빈 문자열)
pub fn choseong_ru(index: u32) -> &'static str {
    CHOSEONG_RU.get(index as usize).copied().unwrap_or("")
}

/// 중성 인덱스의 키릴 표기 (범위 밖은 빈 문자열)
pub fn jungseong_ru(index: u32) -> &'static str {
    JUNGSEONG_RU.get(index as usize).copied().unwrap_or("")
}

/// 종성 인덱스의 키릴 표기 (범위 밖은 빈 문자열)
pub fn jongseong_ru(index: u32) -> &'static str {
    JONGSEONG_RU.get(index as usize).copied().unwrap_or("")
}

/// 키릴 자음+모음 2글자 조합 -> 한글 음절
///
/// 음절화를 결정하기 위해 1글자 매핑보다 먼저 조회됨
pub static RU_KO_PAIRS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // 자음 + а
    for (k, v) in [
        ("ба", "바"), ("ва", "바"), ("га", "가"), ("да", "다"), ("жа", "자"),
        ("за", "자"), ("ка", "카"), ("ла", "라"), ("ма", "마"), ("на", "나"),
        ("па", "파"), ("ра", "라"), ("са", "사"), ("та", "타"), ("фа", "파"),
        ("ха", "하"), ("ца", "차"), ("ча", "차"), ("ша", "샤"), ("ща", "샤"),
    ] {
        map.insert(k, v);
    }

    // 자음 + е
    for (k, v) in [
        ("бе", "베"), ("ве", "베"), ("ге", "게"), ("де", "데"), ("же", "제"),
        ("зе", "제"), ("ке", "케"), ("ле", "레"), ("ме", "메"), ("не", "네"),
        ("пе", "페"), ("ре", "레"), ("се", "세"), ("те", "테"), ("фе", "페"),
        ("хе", "헤"), ("це", "체"), ("че", "체"), ("ше", "셰"), ("ще", "셰"),
    ] {
        map.insert(k, v);
    }

    // 자음 + и
    for (k, v) in [
        ("би", "비"), ("ви", "비"), ("ги", "기"), ("ди", "디"), ("жи", "지"),
        ("зи", "지"), ("ки", "키"), ("ли", "리"), ("ми", "미"), ("ни", "니"),
        ("пи", "피"), ("ри", "리"), ("си", "시"), ("ти", "티"), ("фи", "피"),
        ("хи", "히"), ("ци", "치"), ("чи", "치"), ("ши", "시"), ("щи", "시"),
    ] {
        map.insert(k, v);
    }

    // 자음 + о
    for (k, v) in [
        ("бо", "보"), ("во", "보"), ("го", "고"), ("до", "도"), ("жо", "조"),
        ("зо", "조"), ("ко", "코"), ("ло", "로"), ("мо", "모"), ("но", "노"),
        ("по", "포"), ("ро", "로"), ("со", "소"), ("то", "토"), ("фо", "포"),
        ("хо", "호"), ("цо", "초"), ("чо", "초"), ("шо", "쇼"), ("що", "쇼"),
    ] {
        map.insert(k, v);
    }

    // 자음 + у
    for (k, v) in [
        ("бу", "부"), ("ву", "부"), ("гу", "구"), ("ду", "두"), ("жу", "주"),
        ("зу", "주"), ("ку", "쿠"), ("лу", "루"), ("му", "무"), ("ну", "누"),
        ("пу", "푸"), ("ру", "루"), ("су", "수"), ("ту", "투"), ("фу", "푸"),
        ("ху", "후"), ("цу", "추"), ("чу", "추"), ("шу", "슈"), ("щу", "슈"),
    ] {
        map.insert(k, v);
    }

    // 자음 + ы
    for (k, v) in [
        ("бы", "비"), ("вы", "비"), ("гы", "기"), ("ды", "디"), ("жы", "지"),
        ("зы", "지"), ("кы", "키"), ("лы", "리"), ("мы", "미"), ("ны", "니"),
        ("пы", "피"), ("ры", "리"), ("сы", "시"), ("ты", "티"), ("фы", "피"),
        ("хы", "히"), ("цы", "치"), ("чы", "치"), ("шы", "시"), ("щы", "시"),
    ] {
        map.insert(k, v);
    }

    map
});

/// 키릴 1글자 -> 한글 (2글자 조합이 없을 때의 폴백)
///
/// ъ, ь 는 음가가 없어 빈 문자열로 명시
pub static RU_KO_SINGLE: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // 자음
    for (k, v) in [
        ('б', "브"), ('в', "브"), ('г', "그"), ('д', "드"), ('ж', "주"),
        ('з', "즈"), ('й', "이"), ('к', "크"), ('л', "르"), ('м', "므"),
        ('н', "느"), ('п', "프"), ('р', "르"), ('с', "스"), ('т', "트"),
        ('ф', "프"), ('х', "흐"), ('ц', "츠"), ('ч', "치"), ('ш', "시"),
        ('щ', "시"), ('ъ', ""), ('ы', "이"), ('ь', ""), ('э', "에"),
    ] {
        map.insert(k, v);
    }

    // 모음 (단독 또는 자음 앞)
    for (k, v) in [
        ('а', "아"), ('е', "예"), ('ё', "요"), ('и', "이"),
        ('о', "오"), ('у', "우"), ('ю', "유"), ('я', "야"),
    ] {
        map.insert(k, v);
    }

    map
});
