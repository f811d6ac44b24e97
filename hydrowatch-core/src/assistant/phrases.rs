//! Keywords and canned replies
//!
//! Growers ask in Polish, so questions are matched against lowercase Polish
//! word stems (substring match) and answers are written in Polish.

// ===== ROUTING =====

pub(crate) const TEMPERATURE: &str = "temperatur";

pub(crate) const FERTILIZER: [&str; 2] = ["nawoz", "odżyw"];

pub(crate) const NUTRIENT_WORDS: [&str; 10] = [
    "azot",
    "fosfor",
    "potas",
    "wapń",
    "magnez",
    "żelazo",
    "chelat",
    "mikroelement",
    "ec",
    "ph",
];

pub(crate) const PLANTS: [&str; 2] = ["roslin", "wzrost"];

// ===== INTENTS =====

pub(crate) const DOSAGE: [&str; 3] = ["dawkow", "ile", "stężeni"];
pub(crate) const DEFICIENCY: [&str; 2] = ["niedobór", "brak"];
pub(crate) const EXCESS: [&str; 2] = ["nadmiar", "za dużo"];
pub(crate) const EFFECT: [&str; 3] = ["wpływ", "działanie", "efekt"];

// ===== SMALL TALK =====

pub(crate) const GREETING: [&str; 3] = ["czesc", "witaj", "hej"];
pub(crate) const THANKS: [&str; 2] = ["dziekuje", "dzieki"];
pub(crate) const CAPABILITIES: [&str; 2] = ["co potrafisz", "co umiesz"];
pub(crate) const GROWTH_QUESTION: [&str; 2] = ["wzrost", "rośnie"];

// ===== REPLIES =====

/// First message shown when a conversation opens
pub const WELCOME: &str = "Witaj w asystencie hydroponicznym! Mogę pomóc z informacjami o temperaturze, nawozach i ich wpływie na wzrost roślin. Co chcesz wiedzieć?";

pub(crate) const NO_TEMPERATURE: &str = "Nie mogę odczytać danych z czujników temperatury.";

pub(crate) const NUTRIENT_OVERVIEW: &str = "Dla optymalnego wzrostu roślin hydroponicznych ważne jest utrzymanie właściwego bilansu makro i mikroelementów. Najważniejsze są: azot (N), fosfor (P), potas (K), wapń (Ca), magnez (Mg) i żelazo (Fe). Zapytaj o konkretny składnik, aby uzyskać szczegółowe informacje.";

pub(crate) const NAME_THE_PLANT: &str = "Aby uzyskać informacje o konkretnej roślinie, podaj jej nazwę. Mogę analizować dane wzrostu dla roślin monitorowanych w systemie.";

pub(crate) const CHECKING_TEMPERATURE: &str = "Sprawdzam aktualną temperaturę...";

pub(crate) const GREETING_REPLY: &str = "Witaj! W czym mogę pomóc? Mogę sprawdzić aktualną temperaturę lub udzielić informacji o nawozach i ich wpływie na wzrost roślin.";

pub(crate) const THANKS_REPLY: &str = "Nie ma za co! Czy mogę jeszcze jakoś pomóc?";

pub(crate) const CAPABILITIES_REPLY: &str = "Potrafię udzielać informacji o składnikach odżywczych dla roślin hydroponicznych, ich dawkowaniu, objawach niedoboru i nadmiaru. Mogę też sprawdzać aktualną temperaturę i analizować wzrost roślin na podstawie danych z czujników.";

pub(crate) const FERTILIZER_REPLY: &str = "Mogę pomóc z informacjami o różnych składnikach odżywczych jak azot, fosfor, potas, wapń, magnez, żelazo i innych. Zapytaj o konkretny składnik, aby uzyskać szczegółowe informacje.";

pub(crate) const GROWTH_REPLY: &str = "Aby uzyskać informacje o wzroście konkretnej rośliny, podaj jej nazwę lub identyfikator. Mogę przeanalizować dane wzrostu i dać zalecenia.";

pub(crate) const FALLBACK_REPLY: &str = "Przepraszam, nie rozumiem pytania. Możesz zapytać o temperaturę, składniki odżywcze dla roślin lub analizę wzrostu konkretnych roślin.";

/// True when `text` contains any of `words`
pub(crate) fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}
