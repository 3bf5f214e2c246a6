//! Devanagari ↔ IAST transliteration scheme
//!
//! Fixed literal correspondence used by the normalizer, the validator's
//! accepted-character check and the cross-script parity check.

/// Virama (halant), suppresses the inherent vowel
pub const VIRAMA: char = '\u{094D}';

/// Nukta, dropped during transliteration
pub const NUKTA: char = '\u{093C}';

/// Zero-width joiner and non-joiner, dropped during transliteration
pub const JOINERS: [char; 2] = ['\u{200C}', '\u{200D}'];

/// Consonant letters
pub const CONSONANTS: &[(char, &str)] = &[
    ('क', "k"),
    ('ख', "kh"),
    ('ग', "g"),
    ('घ', "gh"),
    ('ङ', "ṅ"),
    ('च', "c"),
    ('छ', "ch"),
    ('ज', "j"),
    ('झ', "jh"),
    ('ञ', "ñ"),
    ('ट', "ṭ"),
    ('ठ', "ṭh"),
    ('ड', "ḍ"),
    ('ढ', "ḍh"),
    ('ण', "ṇ"),
    ('त', "t"),
    ('थ', "th"),
    ('द', "d"),
    ('ध', "dh"),
    ('न', "n"),
    ('प', "p"),
    ('फ', "ph"),
    ('ब', "b"),
    ('भ', "bh"),
    ('म', "m"),
    ('य', "y"),
    ('र', "r"),
    ('ल', "l"),
    ('व', "v"),
    ('श', "ś"),
    ('ष', "ṣ"),
    ('स', "s"),
    ('ह', "h"),
];

/// Independent vowels paired with their dependent sign (none for `a`)
pub const VOWELS: &[(char, Option<char>, &str)] = &[
    ('अ', None, "a"),
    ('आ', Some('ा'), "ā"),
    ('इ', Some('ि'), "i"),
    ('ई', Some('ी'), "ī"),
    ('उ', Some('ु'), "u"),
    ('ऊ', Some('ू'), "ū"),
    ('ऋ', Some('ृ'), "ṛ"),
    ('ॠ', Some('ॄ'), "ṝ"),
    ('ऌ', Some('ॢ'), "ḷ"),
    ('ॡ', Some('ॣ'), "ḹ"),
    ('ए', Some('े'), "e"),
    ('ऐ', Some('ै'), "ai"),
    ('ओ', Some('ो'), "o"),
    ('औ', Some('ौ'), "au"),
];

/// Marks, punctuation and digits
pub const MARKS: &[(char, &str)] = &[
    ('ं', "ṃ"),
    ('ः', "ḥ"),
    ('ँ', "m\u{0310}"),
    ('ऽ', "'"),
    ('ॐ', "oṃ"),
    ('॥', "||"),
    ('।', "|"),
    ('०', "0"),
    ('१', "1"),
    ('२', "2"),
    ('३', "3"),
    ('४', "4"),
    ('५', "5"),
    ('६', "6"),
    ('७', "7"),
    ('८', "8"),
    ('९', "9"),
];

/// IAST for a Devanagari consonant letter
pub fn consonant(ch: char) -> Option<&'static str> {
    CONSONANTS.iter().find(|(d, _)| *d == ch).map(|(_, l)| *l)
}

/// IAST for an independent Devanagari vowel
pub fn vowel(ch: char) -> Option<&'static str> {
    VOWELS.iter().find(|(d, _, _)| *d == ch).map(|(_, _, l)| *l)
}

/// IAST for a dependent vowel sign
pub fn vowel_sign(ch: char) -> Option<&'static str> {
    VOWELS
        .iter()
        .find(|(_, sign, _)| *sign == Some(ch))
        .map(|(_, _, l)| *l)
}

/// IAST for a mark, daṇḍa or digit
pub fn mark(ch: char) -> Option<&'static str> {
    MARKS.iter().find(|(d, _)| *d == ch).map(|(_, l)| *l)
}

/// Is the character a dependent vowel sign?
#[inline]
pub fn is_vowel_sign(ch: char) -> bool {
    vowel_sign(ch).is_some()
}

/// Is the character a Devanagari consonant letter?
#[inline]
pub fn is_consonant(ch: char) -> bool {
    consonant(ch).is_some()
}

/// Does the scheme know this Devanagari codepoint?
pub fn is_known_devanagari(ch: char) -> bool {
    ch == VIRAMA
        || ch == NUKTA
        || consonant(ch).is_some()
        || vowel(ch).is_some()
        || vowel_sign(ch).is_some()
        || mark(ch).is_some()
}

/// Devanagari consonant for an IAST unit
pub fn consonant_for(unit: &str) -> Option<char> {
    CONSONANTS.iter().find(|(_, l)| *l == unit).map(|(d, _)| *d)
}

/// Independent vowel and vowel sign for an IAST unit
pub fn vowel_for(unit: &str) -> Option<(char, Option<char>)> {
    VOWELS
        .iter()
        .find(|(_, _, l)| *l == unit)
        .map(|(d, sign, _)| (*d, *sign))
}

/// Devanagari mark for an IAST unit
///
/// `oṃ` is absent: in IAST it is an ordinary vowel + anusvāra.
pub fn mark_for(unit: &str) -> Option<char> {
    MARKS
        .iter()
        .filter(|(d, _)| *d != 'ॐ')
        .find(|(_, l)| *l == unit)
        .map(|(d, _)| *d)
}

/// Every consonant and vowel pair, Devanagari first
///
/// Used to check that both classification tables agree on places.
pub fn letter_pairs() -> impl Iterator<Item = (String, &'static str)> {
    CONSONANTS
        .iter()
        .map(|(d, l)| (d.to_string(), *l))
        .chain(VOWELS.iter().map(|(d, _, l)| (d.to_string(), *l)))
}
