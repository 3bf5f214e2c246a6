//! Phoneme tokenizer
//!
//! Greedy longest-match segmentation. Every input codepoint ends up in
//! exactly one unit, in input order; codepoints the tables do not know
//! become unrecognized `Other` units.

use crate::phoneme::{Category, Phoneme};
use crate::scheme::{self, NUKTA, VIRAMA};
use crate::script::{is_combining_mark, is_devanagari, Script};
use crate::tables::{self, PhonologyTables, ScriptTable, TableEntry};
use unicode_normalization::UnicodeNormalization;

/// Tokenizer over injected tables
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'t> {
    tables: &'t PhonologyTables,
}

impl Tokenizer<'static> {
    /// Tokenizer over the process-wide embedded tables
    pub fn embedded() -> Self {
        Self::new(tables::embedded())
    }
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::embedded()
    }
}

impl<'t> Tokenizer<'t> {
    /// Create a tokenizer over `tables`
    pub fn new(tables: &'t PhonologyTables) -> Self {
        Self { tables }
    }

    /// Segment `word` into units
    ///
    /// Runs of Devanagari codepoints are read with Devanagari rules and all
    /// other runs with IAST rules, so mixed input still gets a best-effort
    /// segmentation.
    pub fn tokenize(&self, word: &str) -> Vec<Phoneme> {
        let mut units = Vec::with_capacity(word.len());
        let mut run_start = 0;
        let mut run_is_deva = None;

        for (offset, ch) in word.char_indices() {
            let deva = is_devanagari(ch);
            match run_is_deva {
                Some(current) if current != deva => {
                    self.tokenize_run(word, run_start, offset, current, &mut units);
                    run_start = offset;
                    run_is_deva = Some(deva);
                }
                None => run_is_deva = Some(deva),
                _ => {}
            }
        }

        if let Some(current) = run_is_deva {
            self.tokenize_run(word, run_start, word.len(), current, &mut units);
        }

        units
    }

    fn tokenize_run(
        &self,
        word: &str,
        start: usize,
        end: usize,
        deva: bool,
        units: &mut Vec<Phoneme>,
    ) {
        if deva {
            self.tokenize_devanagari(word, start, end, units);
        } else {
            self.tokenize_latin(word, start, end, units);
        }
    }

    fn tokenize_devanagari(&self, word: &str, start: usize, end: usize, out: &mut Vec<Phoneme>) {
        let table = self.tables.devanagari();
        let chars: Vec<(usize, char)> = word[start..end]
            .char_indices()
            .map(|(i, c)| (start + i, c))
            .collect();

        let byte_end = |idx: usize| chars.get(idx).map_or(end, |(o, _)| *o);
        let mut i = 0;

        while i < chars.len() {
            let (offset, ch) = chars[i];

            if scheme::is_consonant(ch) {
                // consonant [+ nukta] [+ virama]
                let mut j = i + 1;
                let mut key = String::from(ch);
                if chars.get(j).map(|(_, c)| *c) == Some(NUKTA) {
                    key.push(NUKTA);
                    j += 1;
                }
                let muted = chars.get(j).map(|(_, c)| *c) == Some(VIRAMA);
                if muted {
                    j += 1;
                }
                let followed_by_sign = chars
                    .get(j)
                    .is_some_and(|(_, c)| scheme::is_vowel_sign(*c));

                let grapheme = &word[offset..byte_end(j)];
                let mut unit = unit_for(table, &key, grapheme, offset, Script::Devanagari);
                unit.inherent_vowel = unit.recognized && !muted && !followed_by_sign;
                out.push(unit);
                i = j;
                continue;
            }

            let grapheme = &word[offset..byte_end(i + 1)];
            out.push(unit_for(
                table,
                grapheme,
                grapheme,
                offset,
                Script::Devanagari,
            ));
            i += 1;
        }
    }

    fn tokenize_latin(&self, word: &str, start: usize, end: usize, out: &mut Vec<Phoneme>) {
        let table = self.tables.iast();
        let clusters = clusters(&word[start..end], start);
        let max_span = table.max_key_chars().max(1);
        let mut i = 0;

        while i < clusters.len() {
            let longest = max_span.min(clusters.len() - i);
            let mut matched = false;

            for span in (1..=longest).rev() {
                let key: String = clusters[i..i + span].iter().map(|c| c.key.as_str()).collect();
                if let Some(entry) = table.lookup(&key) {
                    let from = clusters[i].start;
                    let to = clusters[i + span - 1].end;
                    out.push(recognized(entry, &word[from..to], from, Script::Iast));
                    i += span;
                    matched = true;
                    break;
                }
            }

            if !matched {
                // Split the cluster so a known base letter survives an unknown mark
                let cluster = &clusters[i];
                for (rel, ch) in word[cluster.start..cluster.end].char_indices() {
                    let offset = cluster.start + rel;
                    let grapheme = &word[offset..offset + ch.len_utf8()];
                    let key = crate::classify::table_key(Script::Iast, grapheme);
                    out.push(unit_for(table, &key, grapheme, offset, Script::Iast));
                }
                i += 1;
            }
        }
    }
}

/// A base letter plus its trailing combining marks
struct Cluster {
    start: usize,
    end: usize,
    key: String,
}

fn clusters(text: &str, base: usize) -> Vec<Cluster> {
    let mut out: Vec<Cluster> = Vec::new();
    let mut current: Option<(usize, usize)> = None;

    for (i, ch) in text.char_indices() {
        let at = base + i;
        match current {
            Some((s, _)) if is_combining_mark(ch) => current = Some((s, at + ch.len_utf8())),
            _ => {
                if let Some((s, e)) = current.take() {
                    out.push(make_cluster(text, base, s, e));
                }
                current = Some((at, at + ch.len_utf8()));
            }
        }
    }
    if let Some((s, e)) = current {
        out.push(make_cluster(text, base, s, e));
    }
    out
}

fn make_cluster(text: &str, base: usize, start: usize, end: usize) -> Cluster {
    let raw = &text[start - base..end - base];
    Cluster {
        start,
        end,
        key: raw.nfc().flat_map(char::to_lowercase).nfc().collect(),
    }
}

fn recognized(entry: TableEntry, grapheme: &str, offset: usize, script: Script) -> Phoneme {
    Phoneme {
        grapheme: grapheme.to_string(),
        offset,
        script,
        category: entry.category,
        place: entry.place,
        class: entry.class,
        inherent_vowel: false,
        recognized: true,
    }
}

fn unit_for(
    table: &ScriptTable,
    key: &str,
    grapheme: &str,
    offset: usize,
    script: Script,
) -> Phoneme {
    match table.lookup(key) {
        Some(entry) => recognized(entry, grapheme, offset, script),
        None => {
            log::trace!("unrecognized unit {grapheme:?} at byte {offset}");
            let unit_script = if script == Script::Devanagari {
                Script::Devanagari
            } else {
                Script::Unknown
            };
            Phoneme::unrecognized(grapheme, offset, unit_script)
        }
    }
}

/// Segment `word` with the embedded tables
pub fn tokenize(word: &str) -> Vec<Phoneme> {
    Tokenizer::embedded().tokenize(word)
}

/// Concatenate unit graphemes back into text
pub fn reassemble(units: &[Phoneme]) -> String {
    units.iter().map(|u| u.grapheme.as_str()).collect()
}

/// Units that are vowels or consonants, skipping marks and separators
pub fn letters(units: &[Phoneme]) -> impl Iterator<Item = &Phoneme> {
    units
        .iter()
        .filter(|u| matches!(u.category, Category::Vowel | Category::Consonant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::Place;

    fn graphemes(word: &str) -> Vec<String> {
        tokenize(word).into_iter().map(|p| p.grapheme).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_iast_digraphs_first() {
        assert_eq!(graphemes("bhakti"), vec!["bh", "a", "k", "t", "i"]);
        assert_eq!(graphemes("kauśala"), vec!["k", "au", "ś", "a", "l", "a"]);
        assert_eq!(graphemes("dharma"), vec!["dh", "a", "r", "m", "a"]);
    }

    #[test]
    fn test_iast_units_classified() {
        let units = tokenize("rāmaḥ");
        assert_eq!(units.len(), 5);
        assert_eq!(units[1].grapheme, "ā");
        assert!(units[1].is_vowel());
        assert_eq!(units[2].place, Some(Place::Labial));
        assert_eq!(units[4].category, Category::Other);
        assert!(units[4].recognized);
    }

    #[test]
    fn test_decomposed_iast_kept_verbatim() {
        let word = "ra\u{0304}ma";
        let units = tokenize(word);
        assert_eq!(units.len(), 4);
        assert_eq!(units[1].grapheme, "a\u{0304}");
        assert_eq!(units[1].place, Some(Place::Guttural));
        assert_eq!(reassemble(&units), word);
    }

    #[test]
    fn test_uppercase_iast() {
        let units = tokenize("Kṛṣṇa");
        assert_eq!(units[0].grapheme, "K");
        assert!(units[0].is_consonant());
        assert_eq!(units[1].place, Some(Place::Retroflex));
    }

    #[test]
    fn test_devanagari_inherent_and_mute() {
        let units = tokenize("राम");
        assert_eq!(units.len(), 3);
        assert_eq!(units[0].grapheme, "र");
        assert!(!units[0].inherent_vowel);
        assert_eq!(units[1].grapheme, "ा");
        assert!(units[1].is_vowel());
        assert!(units[2].inherent_vowel);

        let units = tokenize("कृष्ण");
        let graphemes: Vec<&str> = units.iter().map(|u| u.grapheme.as_str()).collect();
        assert_eq!(graphemes, vec!["क", "ृ", "ष्", "ण"]);
        assert!(!units[2].inherent_vowel);
        assert!(units[2].is_consonant());
        assert!(units[3].inherent_vowel);
    }

    #[test]
    fn test_unrecognized_codepoints_kept() {
        let units = tokenize("xyz");
        assert_eq!(units.len(), 3);
        assert!(!units[0].recognized);
        assert_eq!(units[0].category, Category::Other);
        assert_eq!(units[0].place, None);
        assert!(units[1].recognized);
        assert!(!units[2].recognized);
    }

    #[test]
    fn test_unknown_mark_split_from_base() {
        let units = tokenize("o\u{0308}");
        assert_eq!(units.len(), 2);
        assert!(units[0].is_vowel());
        assert!(!units[1].recognized);
        assert_eq!(units[1].offset, 1);
    }

    #[test]
    fn test_nukta_consonant_unrecognized() {
        let units = tokenize("क\u{093C}");
        assert_eq!(units.len(), 1);
        assert!(!units[0].recognized);
        assert_eq!(units[0].script, Script::Devanagari);
    }

    #[test]
    fn test_mixed_runs_and_offsets() {
        let word = "ka क";
        let units = tokenize(word);
        assert_eq!(reassemble(&units), word);
        assert_eq!(units.last().unwrap().offset, 3);
        assert_eq!(units.last().unwrap().script, Script::Devanagari);
    }

    #[test]
    fn test_letters_skip_marks() {
        let units = tokenize("रामः");
        assert_eq!(letters(&units).count(), 3);
    }
}
