/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// including the built-in lookup tables, so they can be changed in one
/// central location.
// Labels
pub const DEFAULT_FAVORITES_GROUP: &str = "★ Favorites";
pub const DEFAULT_OTHER_LABEL: &str = "기타";

// Behaviour
pub const DEFAULT_APPEND_RESOLUTION_TAG: bool = false;

/// Built-in country table: (code, region, country label)
pub const DEFAULT_COUNTRIES: &[(&str, &str, &str)] = &[
    // Asia
    ("KR", "아시아", "대한민국"),
    ("JP", "아시아", "일본"),
    ("CN", "아시아", "중국"),
    ("IN", "아시아", "인도"),
    ("ID", "아시아", "인도네시아"),
    ("SG", "아시아", "싱가포르"),
    ("VN", "아시아", "베트남"),
    ("TH", "아시아", "태국"),
    ("MY", "아시아", "말레이시아"),
    ("PH", "아시아", "필리핀"),
    // Europe
    ("GB", "유럽", "영국"),
    ("FR", "유럽", "프랑스"),
    ("DE", "유럽", "독일"),
    ("IT", "유럽", "이탈리아"),
    ("ES", "유럽", "스페인"),
    ("RU", "유럽", "러시아"),
    ("NL", "유럽", "네덜란드"),
    ("PL", "유럽", "폴란드"),
    ("PT", "유럽", "포르투갈"),
    ("SE", "유럽", "스웨덴"),
    // North America
    ("US", "북미", "미국"),
    ("CA", "북미", "캐나다"),
    ("MX", "북미", "멕시코"),
    ("CU", "북미", "쿠바"),
    ("DO", "북미", "도미니카 공화국"),
    // South America
    ("BR", "남미", "브라질"),
    ("AR", "남미", "아르헨티나"),
    ("CO", "남미", "콜롬비아"),
    ("CL", "남미", "칠레"),
    ("PE", "남미", "페루"),
    // Oceania
    ("AU", "오세아니아", "호주"),
    ("NZ", "오세아니아", "뉴질랜드"),
    // Africa
    ("ZA", "아프리카", "남아프리카 공화국"),
    ("EG", "아프리카", "이집트"),
    ("NG", "아프리카", "나이지리아"),
    ("KE", "아프리카", "케냐"),
];

/// Built-in genre rules: (lowercase keyword, genre label)
///
/// Order matters, the first keyword contained in a category wins.
pub const DEFAULT_GENRES: &[(&str, &str)] = &[
    ("news", "뉴스"),
    ("sport", "스포츠"),
    ("sports", "스포츠"),
    ("movie", "영화/드라마"),
    ("movies", "영화/드라마"),
    ("film", "영화/드라마"),
    ("kids", "키즈"),
    ("children", "키즈"),
    ("music", "음악"),
    ("religion", "종교"),
    ("religious", "종교"),
    ("documentary", "다큐"),
    ("docu", "다큐"),
    ("lifestyle", "라이프스타일"),
    ("shopping", "쇼핑"),
    ("entertainment", "엔터테인먼트"),
    ("general", "엔터테인먼트"),
];
