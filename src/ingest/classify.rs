use regex::Regex;
use std::sync::OnceLock;

use crate::models::Sport;

/// League-name prefix cascade. First match wins, so declaration order is
/// load-bearing: specific entries must stay above the shorter ones that
/// would shadow them (the UEFA cup names above the bare "УЕФА", etc.).
const SPORT_PREFIXES: &[(&str, Sport)] = &[
    // FOOTBALL
    ("Лига чемпионов УЕФА", Sport::Football),
    ("Лига Европы УЕФА", Sport::Football),
    ("Лига конференций УЕФА", Sport::Football),
    ("УЕФА", Sport::Football),
    ("UEFA", Sport::Football),
    ("Англия. Премьер-лига", Sport::Football),
    ("Англия. Чемпионшип", Sport::Football),
    ("Англия. Лига 1", Sport::Football),
    ("Англия. Лига 2", Sport::Football),
    ("Англия. Кубок", Sport::Football),
    ("Англия. Кубок Лиги", Sport::Football),
    ("Испания. Ла Лига", Sport::Football),
    ("Испания. Сегунда", Sport::Football),
    ("Испания. Кубок Короля", Sport::Football),
    ("Германия. Бундеслига", Sport::Football),
    ("Германия. 2. Бундеслига", Sport::Football),
    ("Германия. Кубок", Sport::Football),
    ("Италия. Серия A", Sport::Football),
    ("Италия. Серия B", Sport::Football),
    ("Итальянский. Кубок", Sport::Football),
    ("Франция. Лига 1", Sport::Football),
    ("Франция. Лига 2", Sport::Football),
    ("Россия. Премьер-лига", Sport::Football),
    ("Россия. ФНЛ", Sport::Football),
    ("Россия. Кубок", Sport::Football),
    ("Нидерланды. Эредивизие", Sport::Football),
    ("Португалия. Примейра Лига", Sport::Football),
    ("Турция. Суперлига", Sport::Football),
    ("Шотландия. Премьершип", Sport::Football),
    ("Бельгия. Про Лига", Sport::Football),
    ("Бразилия. Серия A", Sport::Football),
    ("Аргентина. Примера Дивисьон", Sport::Football),
    ("США. MLS", Sport::Football),
    ("MLS", Sport::Football),
    ("Мексика. Лига MX", Sport::Football),
    ("КОНМЕБОЛ. Копа Либертадорес", Sport::Football),
    ("КОНКАКАФ", Sport::Football),
    ("Саудовская Аравия. Про Лига", Sport::Football),
    ("Япония. Джей-Лига", Sport::Football),
    ("Южная Корея. К-Лига", Sport::Football),
    ("Греция. Суперлига", Sport::Football),
    ("Украина. Премьер-лига", Sport::Football),
    ("Польша. Экстракласа", Sport::Football),
    ("Австрия. Бундеслига", Sport::Football),
    ("Швейцария. Суперлига", Sport::Football),
    ("Дания. Суперлига", Sport::Football),
    ("Норвегия. Элитесерия", Sport::Football),
    ("Швеция. Алльсвенскан", Sport::Football),
    // HOCKEY
    ("КХЛ", Sport::Hockey),
    ("НХЛ", Sport::Hockey),
    ("NHL", Sport::Hockey),
    ("ВХЛ", Sport::Hockey),
    ("МХЛ", Sport::Hockey),
    ("AHL", Sport::Hockey),
    ("ECHL", Sport::Hockey),
    ("Швеция. SHL", Sport::Hockey),
    ("Финляндия. Liiga", Sport::Hockey),
    ("Чехия. Extraliga", Sport::Hockey),
    ("Германия. DEL", Sport::Hockey),
    ("Швейцария. National League", Sport::Hockey),
    ("Беларусь. Экстралига", Sport::Hockey),
    ("Казахстан. ЧРК", Sport::Hockey),
    ("Австрия. ICEHL", Sport::Hockey),
    // BASKETBALL
    ("NBA", Sport::Basket),
    ("НБА", Sport::Basket),
    ("Евролига", Sport::Basket),
    ("EuroLeague", Sport::Basket),
    ("EuroCup", Sport::Basket),
    ("Единая лига ВТБ", Sport::Basket),
    ("Испания. ACB", Sport::Basket),
    ("Турция. BSL", Sport::Basket),
    ("Германия. BBL", Sport::Basket),
    ("Греция. HEBA A1", Sport::Basket),
    ("Австралия. NBL", Sport::Basket),
    ("Китай. CBA", Sport::Basket),
    ("ФИБА", Sport::Basket),
    ("FIBA", Sport::Basket),
    // ESPORTS
    ("CS2", Sport::Esports),
    ("Counter-Strike", Sport::Esports),
    ("Dota 2", Sport::Esports),
    ("Valorant", Sport::Esports),
    ("League of Legends", Sport::Esports),
    ("LoL", Sport::Esports),
    ("Rocket League", Sport::Esports),
    ("RLCS", Sport::Esports),
    ("PUBG", Sport::Esports),
    ("Apex Legends", Sport::Esports),
    ("Rainbow Six", Sport::Esports),
    ("Overwatch", Sport::Esports),
    // TENNIS
    ("ATP", Sport::Tennis),
    ("WTA", Sport::Tennis),
    ("ITF", Sport::Tennis),
    ("Теннис", Sport::Tennis),
    // VOLLEYBALL
    ("CEV", Sport::Volleyball),
    ("ВНЛ", Sport::Volleyball),
    ("VNL", Sport::Volleyball),
    ("Россия. Суперлига", Sport::Volleyball),
    ("Польша. PlusLiga", Sport::Volleyball),
    ("Италия. SuperLega", Sport::Volleyball),
    ("Волейбол", Sport::Volleyball),
    // MMA
    ("UFC", Sport::Mma),
    ("Bellator", Sport::Mma),
    ("ONE Championship", Sport::Mma),
    ("ONE FC", Sport::Mma),
    ("ACB MMA", Sport::Mma),
    ("PFL", Sport::Mma),
    ("M-1", Sport::Mma),
];

/// Keyword fallback, tried in fixed order against the lowercased league
/// name when no prefix matched.
fn keyword_patterns() -> &'static [(Regex, Sport)] {
    static PATTERNS: OnceLock<Vec<(Regex, Sport)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (
                r"футбол|лига|премьер|кубок|уефа|серия|бундес|ла лига|копа|mls",
                Sport::Football,
            ),
            (r"хоккей|кхл|нхл|hockey|nhl|ahl|shl|liiga|del", Sport::Hockey),
            (r"баскет|nba|евролига|basketball|vtb|acb", Sport::Basket),
            (
                r"dota|cs2|counter-strike|valorant|esports|rlcs|pubg|apex",
                Sport::Esports,
            ),
            (r"теннис|atp|wta|itf|уимблдон|ролан", Sport::Tennis),
            (
                r"волейбол|volleyball|cev|vnl|plusliga|superlega",
                Sport::Volleyball,
            ),
            (r"ufc|bellator|mma|one championship|pfl", Sport::Mma),
        ]
        .into_iter()
        .map(|(pattern, sport)| (Regex::new(pattern).unwrap(), sport))
        .collect()
    })
}

/// Classify a league label: prefix cascade first, keyword sniffing second,
/// football as the default. Football leagues dominate the feed, so an
/// unclassified entry is more likely football than anything else.
pub fn detect_sport(league: &str) -> Sport {
    for (prefix, sport) in SPORT_PREFIXES {
        if league.starts_with(prefix) {
            return *sport;
        }
    }

    let lowered = league.to_lowercase();
    for (pattern, sport) in keyword_patterns() {
        if pattern.is_match(&lowered) {
            return *sport;
        }
    }

    Sport::Football
}
