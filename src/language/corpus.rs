//! Embedded seed corpora and theme suggestions.
//!
//! Small public-domain fragments and generic lines, fixed at compile time.
//! The bigram model is rebuilt from these on every generation request; the
//! corpora themselves are never mutated.

/// English seed corpus, one verse per line.
pub const CORPUS_EN: &str = "the moon is a lantern over quiet streets\n\
the river hums its silver hymn at night\n\
in windows sleep the tender city hearts\n\
a kind wind gathers petals into light\n\
i carry simple rain inside my coat\n\
and laughter grows like gardens in the spring\n\
we learn the names of shadows by their songs\n\
and write soft letters to the dawn we bring\n";

/// Romanian seed corpus, one verse per line.
pub const CORPUS_RO: &str = "luna plutește blând peste orașul tăcut\n\
râul murmură încet cântarea lui de-argint\n\
în ferestre doarme inima cetății\n\
un vânt cumințește praful rătăcind\n\
port o ploaie mică-n buzunarul vechi\n\
râsul răsare ca o grădină-n mai\n\
învățăm din umbre alfabetul serii\n\
și scriem zorilor scrisori de rai\n";

/// English theme prompts for the keyword suggester.
pub const THEMES_EN: &[&str] = &[
    "dawn over a sleeping city",
    "letters carried by the wind",
    "a pocket full of rain",
    "memory of a summer train",
    "stars above a quiet river",
    "the color of forgiveness",
];

/// Romanian theme prompts for the keyword suggester.
pub const THEMES_RO: &[&str] = &[
    "zori peste orașul adormit",
    "scrisori purtate de vânt",
    "un buzunar plin de ploaie",
    "amintirea unui tren de vară",
    "stele deasupra unui râu liniștit",
    "culoarea iertării",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpora_have_eight_lines() {
        assert_eq!(CORPUS_EN.lines().count(), 8);
        assert_eq!(CORPUS_RO.lines().count(), 8);
    }

    #[test]
    fn test_no_blank_corpus_lines() {
        assert!(CORPUS_EN.lines().all(|l| !l.trim().is_empty()));
        assert!(CORPUS_RO.lines().all(|l| !l.trim().is_empty()));
    }
}
