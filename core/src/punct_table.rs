//! Punctuation variant table.
//!
//! Maps a trigger character to the ordered list of strings it can be turned
//! into. Order is display rank: the first variant is the default choice. The
//! table is immutable once built and kept sorted by key so lookups are a
//! binary search.

use once_cell::sync::Lazy;
use std::sync::Arc;

/// One table row: a key character and its variants in rank order.
#[derive(Debug, Clone)]
struct PunctRow {
    key: char,
    variants: Vec<Arc<str>>,
}

/// Immutable, sorted punctuation variant table.
#[derive(Debug, Clone)]
pub struct PunctTable {
    rows: Vec<PunctRow>,
}

static STANDARD: Lazy<Arc<PunctTable>> = Lazy::new(|| Arc::new(build_standard()));

const PUNCT_ROWS: &[(char, &[&str])] = &[
    ('!', &["！", "﹗", "‼", "⁉"]),
    ('"', &["“", "”", "＂"]),
    ('#', &["＃", "﹟", "♯"]),
    ('$', &["＄", "€", "﹩", "￠", "￡", "￥"]),
    ('%', &["％", "﹪", "‰", "‱", "㏙", "㏗"]),
    ('&', &["＆", "﹠"]),
    ('\'', &["‘", "’", "、", "＇"]),
    ('(', &["（", "︵", "﹙"]),
    (')', &["）", "︶", "﹚"]),
    ('*', &["＊", "×", "※", "╳", "﹡", "⁎", "⁑", "⁂", "⌘"]),
    ('+', &["＋", "±", "﹢"]),
    (',', &["，", "、", "﹐", "﹑"]),
    ('-', &["－", "—", "¯", "ˉ", "￣", "﹣"]),
    ('.', &["。", "·", "‧", "﹒", "．"]),
    ('/', &["／", "÷"]),
    (':', &["：", "︰", "﹕"]),
    (';', &["；", "﹔"]),
    ('<', &["《", "〈", "«", "‹", "﹤"]),
    ('=', &["＝", "≒", "≠", "≡", "≤", "≥", "﹦"]),
    ('>', &["》", "〉", "»", "›", "﹥"]),
    ('?', &["？", "﹖"]),
    ('@', &["＠", "☯", "⌘", "﹫", "◉", "◎"]),
    ('[', &["【", "〔", "﹝", "〖", "［"]),
    ('\\', &["＼", "﹨"]),
    (']', &["】", "〕", "﹞", "〗", "］"]),
    ('^', &["……", "＾", "…", "︿", "﹀"]),
    ('_', &["——", "＿", "﹍", "﹎"]),
    ('`', &["｀", "‵", "′", "·"]),
    ('{', &["｛", "﹛", "「", "『"]),
    ('|', &["｜", "‖", "︱", "︳", "¦"]),
    ('}', &["｝", "﹜", "」", "』"]),
    ('~', &["～", "﹏", "∼", "≈"]),
];

const CHINESE_DIGITS: [&str; 10] = ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
const FINANCIAL_DIGITS: [&str; 10] = ["零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖"];

/// Offset a character inside a contiguous Unicode block.
fn shifted(base: u32, offset: u32) -> Option<String> {
    char::from_u32(base + offset).map(String::from)
}

fn digit_variants(digit: u32) -> Vec<String> {
    let mut variants = Vec::new();
    variants.extend(shifted(0xFF10, digit)); // full-width
    if digit == 0 {
        variants.extend(shifted(0x24EA, 0)); // circled zero
    } else {
        variants.extend(shifted(0x2460, digit - 1)); // circled
        variants.extend(shifted(0x2474, digit - 1)); // parenthesized
        variants.extend(shifted(0x2488, digit - 1)); // with full stop
        variants.extend(shifted(0x2160, digit - 1)); // roman
    }
    variants.push(CHINESE_DIGITS[digit as usize].to_string());
    variants.push(FINANCIAL_DIGITS[digit as usize].to_string());
    variants
}

fn letter_variants(letter: char) -> Vec<String> {
    let mut variants = Vec::new();
    if letter.is_ascii_uppercase() {
        let offset = letter as u32 - 'A' as u32;
        variants.extend(shifted(0xFF21, offset)); // full-width
        variants.extend(shifted(0x24B6, offset)); // circled
    } else {
        let offset = letter as u32 - 'a' as u32;
        variants.extend(shifted(0xFF41, offset));
        variants.extend(shifted(0x24D0, offset));
        variants.extend(shifted(0x249C, offset)); // parenthesized
    }
    variants
}

fn build_standard() -> PunctTable {
    let punct = PUNCT_ROWS
        .iter()
        .map(|(key, variants)| (*key, variants.iter().map(|v| v.to_string()).collect::<Vec<_>>()));
    let digits = ('0'..='9').map(|d| (d, digit_variants(d as u32 - '0' as u32)));
    let letters = ('A'..='Z')
        .chain('a'..='z')
        .map(|l| (l, letter_variants(l)));
    PunctTable::from_rows(punct.chain(digits).chain(letters))
}

impl PunctTable {
    /// The built-in table covering ASCII punctuation, digits and letters.
    pub fn standard() -> Arc<PunctTable> {
        Arc::clone(&STANDARD)
    }

    /// Build a table from `(key, variants)` rows.
    ///
    /// Rows are sorted by key; when a key appears twice the later row wins.
    /// Rows without variants are dropped.
    pub fn from_rows<I, V, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (char, V)>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table: Vec<PunctRow> = Vec::new();
        for (key, variants) in rows {
            let variants: Vec<Arc<str>> = variants.into_iter().map(|v| Arc::from(v.as_ref())).collect();
            table.retain(|row| row.key != key);
            if !variants.is_empty() {
                table.push(PunctRow { key, variants });
            }
        }
        table.sort_by_key(|row| row.key);
        Self { rows: table }
    }

    /// Look up the variants for a character.
    pub fn lookup(&self, ch: char) -> Option<&[Arc<str>]> {
        self.rows
            .binary_search_by_key(&ch, |row| row.key)
            .ok()
            .map(|index| self.rows[index].variants.as_slice())
    }

    pub fn contains(&self, ch: char) -> bool {
        self.lookup(ch).is_some()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.rows.iter().map(|row| row.key)
    }
}
