//! Country reference data and fuzzy name resolution.
//!
//! The World Bank API identifies economies by ISO 3166-1 alpha-3 code, while
//! users (and the World Bank's own country list) speak in names such as
//! `"Germany"`, `"Korea, Rep."` or `"Bahamas, The"`. [`resolve`] bridges the two.
//!
//! ### Resolution policy
//! Candidates are tried in stages; the first stage that produces any match wins
//! and its best-ranked candidate is returned.
//! 1. Exact match (case-insensitive, accents folded) on alpha-2, alpha-3, name,
//!    official name or common name.
//! 2. The query is a substring of a name field. Matches on `name` rank before
//!    matches on official/common names, then shorter names first, then table order.
//! 3. World Bank abbreviations are expanded (`Rep.`, `Dem.`, `Fed. Sts.`, ...)
//!    and every query token must occur among the candidate's name tokens. Ranked
//!    by Jaro-Winkler similarity of the expanded query to the best name field.
//! 4. The best Jaro-Winkler similarity of at least [`MIN_SIMILARITY`].

use regex::Regex;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::OnceLock;

mod table;

pub use table::COUNTRIES;

/// Minimum similarity accepted by the last resolution stage.
pub const MIN_SIMILARITY: f64 = 0.90;

/// One row of the bundled ISO 3166-1 reference table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Country {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
    pub official_name: Option<&'static str>,
    pub common_name: Option<&'static str>,
    /// Approximate centroid latitude in degrees.
    pub lat: f64,
    /// Approximate centroid longitude in degrees.
    pub lon: f64,
}

impl Country {
    fn names(&self) -> impl Iterator<Item = (NameField, &'static str)> {
        std::iter::once((NameField::Name, self.name))
            .chain(self.official_name.map(|n| (NameField::Other, n)))
            .chain(self.common_name.map(|n| (NameField::Other, n)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum NameField {
    Name,
    Other,
}

/// Look up a country by alpha-3 code (case-insensitive).
pub fn by_alpha3(code: &str) -> Option<&'static Country> {
    COUNTRIES
        .iter()
        .find(|c| c.alpha3.eq_ignore_ascii_case(code.trim()))
}

/// Resolve free text to an alpha-3 code. `None` when nothing matches.
pub fn resolve(query: &str) -> Option<&'static str> {
    search(query).first().map(|c| c.alpha3)
}

/// All candidates of the first matching stage, best first.
pub fn search(query: &str) -> Vec<&'static Country> {
    let q = normalize(query);
    if q.is_empty() {
        return Vec::new();
    }

    let exact: Vec<&Country> = COUNTRIES
        .iter()
        .filter(|c| {
            q == c.alpha2.to_ascii_lowercase()
                || q == c.alpha3.to_ascii_lowercase()
                || c.names().any(|(_, n)| normalize(n) == q)
        })
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    let mut substring: Vec<(usize, NameField, usize, &Country)> = Vec::new();
    for (idx, c) in COUNTRIES.iter().enumerate() {
        let best = c
            .names()
            .filter(|(_, n)| normalize(n).contains(&q))
            .map(|(field, n)| (field, n.chars().count()))
            .min();
        if let Some((field, len)) = best {
            substring.push((idx, field, len, c));
        }
    }
    if !substring.is_empty() {
        substring.sort_by_key(|(idx, field, len, _)| (*field, *len, *idx));
        return substring.into_iter().map(|(_, _, _, c)| c).collect();
    }

    let expanded = expand_abbreviations(&q);
    let query_tokens = tokens(&expanded);
    if !query_tokens.is_empty() {
        let mut by_tokens: Vec<(f64, usize, &Country)> = COUNTRIES
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                let have: BTreeSet<String> = c
                    .names()
                    .flat_map(|(_, n)| tokens(&normalize(n)))
                    .collect();
                query_tokens.iter().all(|t| have.contains(t))
            })
            .map(|(idx, c)| (best_similarity(&expanded, c), idx, c))
            .collect();
        if !by_tokens.is_empty() {
            by_tokens.sort_by(rank_by_similarity);
            return by_tokens.into_iter().map(|(_, _, c)| c).collect();
        }
    }

    let mut similar: Vec<(f64, usize, &Country)> = COUNTRIES
        .iter()
        .enumerate()
        .map(|(idx, c)| (best_similarity(&expanded, c), idx, c))
        .filter(|(score, _, _)| *score >= MIN_SIMILARITY)
        .collect();
    similar.sort_by(rank_by_similarity);
    similar.into_iter().map(|(_, _, c)| c).collect()
}

fn rank_by_similarity(a: &(f64, usize, &Country), b: &(f64, usize, &Country)) -> Ordering {
    b.0.partial_cmp(&a.0)
        .unwrap_or(Ordering::Equal)
        .then(a.1.cmp(&b.1))
}

fn best_similarity(query: &str, c: &Country) -> f64 {
    c.names()
        .map(|(_, n)| strsim::jaro_winkler(query, &normalize(n)))
        .fold(0.0, f64::max)
}

fn tokens(s: &str) -> BTreeSet<String> {
    s.split(|ch: char| !ch.is_alphanumeric())
        .filter(|t| !t.is_empty() && !matches!(*t, "of" | "the" | "and"))
        .map(str::to_string)
        .collect()
}

/// Lowercase, trim and fold the accented Latin letters that occur in country names.
pub fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|ch| match ch {
            'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            'ý' | 'ÿ' => 'y',
            '’' => '\'',
            other => other,
        })
        .collect()
}

/// Expand the abbreviations used in World Bank economy names and drop the
/// trailing article (`"Gambia, The"`). Input is expected to be normalized.
fn expand_abbreviations(q: &str) -> String {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    let rules = RULES.get_or_init(|| {
        [
            (r",\s*the$", ""),
            (r"\brep\.", "republic"),
            (r"\bdem\.", "democratic"),
            (r"\bfed\.", "federated"),
            (r"\bsts\.", "states"),
            (r"\bis\.", "islands"),
            (r"\bst\.", "saint"),
            (r"\bp\.d\.r\.", "people's democratic republic"),
            (r"\bpdr\b", "people's democratic republic"),
            (r"\bsar\b", ""),
            (r"\brb$", ""),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| {
            Regex::new(pattern).ok().map(|re| (re, replacement))
        })
        .collect()
    });

    let mut out = q.to_string();
    for (re, replacement) in rules {
        out = re.replace_all(&out, *replacement).into_owned();
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_plain_names_and_codes() {
        assert_eq!(resolve("Germany"), Some("DEU"));
        assert_eq!(resolve("  germany "), Some("DEU"));
        assert_eq!(resolve("DE"), Some("DEU"));
        assert_eq!(resolve("usa"), Some("USA"));
        assert_eq!(resolve("United States"), Some("USA"));
    }

    #[test]
    fn nonsense_does_not_resolve() {
        assert_eq!(resolve("Xqzzyplorbia Vantrexia"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("   "), None);
    }

    #[test]
    fn accents_are_folded() {
        assert_eq!(resolve("Cote d'Ivoire"), Some("CIV"));
        assert_eq!(resolve("Côte d'Ivoire"), Some("CIV"));
        assert_eq!(resolve("Curacao"), Some("CUW"));
    }

    #[test]
    fn substring_prefers_name_field_and_shorter_names() {
        // "Guinea" is contained in several names; the exact name wins first.
        assert_eq!(resolve("Guinea"), Some("GIN"));
        // "Niger" is an exact name, "Nigeria" only a superstring.
        assert_eq!(resolve("Niger"), Some("NER"));
        let hits = search("sudan");
        assert_eq!(hits.first().map(|c| c.alpha3), Some("SDN"));
    }

    #[test]
    fn world_bank_style_names_resolve() {
        assert_eq!(resolve("Korea, Rep."), Some("KOR"));
        assert_eq!(resolve("Bahamas, The"), Some("BHS"));
        assert_eq!(resolve("Gambia, The"), Some("GMB"));
        assert_eq!(resolve("Egypt, Arab Rep."), Some("EGY"));
        assert_eq!(resolve("Iran, Islamic Rep."), Some("IRN"));
        assert_eq!(resolve("Micronesia, Fed. Sts."), Some("FSM"));
        assert_eq!(resolve("Congo, Dem. Rep."), Some("COD"));
        assert_eq!(resolve("Lao PDR"), Some("LAO"));
        assert_eq!(resolve("West Bank and Gaza"), Some("PSE"));
    }

    #[test]
    fn alpha3_lookup() {
        let de = by_alpha3("deu").unwrap();
        assert_eq!(de.name, "Germany");
        assert!(by_alpha3("EUU").is_none());
    }

    #[test]
    fn table_codes_are_unique() {
        let codes: BTreeSet<&str> = COUNTRIES.iter().map(|c| c.alpha3).collect();
        assert_eq!(codes.len(), COUNTRIES.len());
        for c in COUNTRIES {
            assert_eq!(c.alpha3.len(), 3, "{}", c.name);
            assert_eq!(c.alpha2.len(), 2, "{}", c.name);
            assert!((-90.0..=90.0).contains(&c.lat), "{}", c.name);
            assert!((-180.0..=180.0).contains(&c.lon), "{}", c.name);
        }
    }
}
