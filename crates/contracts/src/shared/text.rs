//! Text helpers shared by search, sorting and file naming

use std::cmp::Ordering;
use std::ops::Range;

fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Lowercases a character and strips the Portuguese/Latin-1 diacritics
pub fn fold_char(c: char) -> char {
    match lower_char(c) {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

/// Sort key: lowercase without accents
pub fn fold_key(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Locale-like ordering for pt-BR text.
///
/// Accents and case are ignored on the first pass ("Érica" sorts next to
/// "erica"); the raw code points only break ties so the order is total.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold_key(a).cmp(&fold_key(b)).then_with(|| a.cmp(b))
}

/// Byte ranges of all case-insensitive, non-overlapping matches of `term` in `text`
///
/// Ranges always fall on char boundaries of `text`, so they can be used to
/// slice the original string for highlighting.
pub fn highlight_ranges(text: &str, term: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = term.chars().map(lower_char).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = text
        .char_indices()
        .map(|(idx, c)| (idx, lower_char(c)))
        .collect();

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= chars.len() {
        let window = &chars[i..i + needle.len()];
        if window.iter().map(|(_, c)| *c).eq(needle.iter().copied()) {
            let start = chars[i].0;
            let end = chars
                .get(i + needle.len())
                .map(|(idx, _)| *idx)
                .unwrap_or(text.len());
            ranges.push(start..end);
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Case-insensitive substring test. An empty term matches everything.
pub fn contains_ignore_case(text: &str, term: &str) -> bool {
    term.is_empty() || !highlight_ranges(text, term).is_empty()
}

/// Converts a report title into a file-name-safe slug
///
/// # Примеры
/// ```
/// use contracts::shared::text::slugify;
/// assert_eq!(slugify("Relatório de Vendas"), "relatorio_de_vendas");
/// assert_eq!(slugify("  ***  "), "report");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars().map(fold_char) {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_end_matches('_');
    if slug.is_empty() {
        "report".to_string()
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collate_ignores_accents_and_case() {
        assert_eq!(collate("Ávila", "avila"), Ordering::Greater);
        assert_eq!(collate("Érica", "Fabio"), Ordering::Less);
        assert_eq!(collate("joão", "Joao"), Ordering::Greater);
        assert_eq!(collate("b", "a"), Ordering::Greater);
    }

    #[test]
    fn test_highlight_ranges() {
        assert_eq!(highlight_ranges("Foo bar foo", "foo"), vec![0..3, 8..11]);
        assert_eq!(highlight_ranges("abc", ""), Vec::<Range<usize>>::new());
        assert_eq!(highlight_ranges("aaaa", "aa"), vec![0..2, 2..4]);
    }

    #[test]
    fn test_highlight_ranges_non_ascii() {
        let text = "Açaí da Conceição";
        let ranges = highlight_ranges(text, "ÇÃO");
        assert_eq!(ranges.len(), 1);
        assert_eq!(&text[ranges[0].clone()], "ção");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Maria Souza", "SOUZA"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Maria", "joão"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Vendas — Março/2024"), "vendas_marco_2024");
        assert_eq!(slugify(""), "report");
    }
}
