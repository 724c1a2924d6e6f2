use lazy_static::lazy_static;
use regex::Regex;

/// Characters that separate words.
pub const DELIMITERS: &[char] = &[' ', '.', ',', ':', ';', '?', '!', '(', ')'];

lazy_static! {
    static ref WORD: Regex = {
        let class: String = DELIMITERS.iter().map(|c| regex::escape(&c.to_string())).collect();
        Regex::new(&format!("[^{class}]+")).expect("valid regex")
    };
}

/// Words of one line, uppercased. Owns the folded line and hands out slices,
/// so iterating again is free.
#[derive(Debug, Clone)]
pub struct Tokens {
    buffer: String,
    spans: Vec<(usize, usize)>,
}

impl Tokens {
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans.iter().map(move |&(s, e)| &self.buffer[s..e])
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Strip a trailing `\n` or `\r\n`.
fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Tokenize a single line: drop the terminator, uppercase, split on [`DELIMITERS`].
/// Runs of delimiters never yield empty words.
pub fn tokenize(line: &str) -> Tokens {
    let buffer = strip_terminator(line).to_uppercase();
    let spans = WORD.find_iter(&buffer).map(|m| (m.start(), m.end())).collect();
    Tokens { buffer, spans }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("When did it start? In March, 1999.\n");
        let words: Vec<&str> = t.iter().collect();
        assert_eq!(words, vec!["WHEN", "DID", "IT", "START", "IN", "MARCH", "1999"]);
    }

    #[test]
    fn delimiter_runs_are_suppressed() {
        let t = tokenize("  ...(a)!!  b;;:c  ");
        assert_eq!(t.iter().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn empty_and_delimiter_only_lines() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\r\n").is_empty());
        assert!(tokenize(" .,:;?!() ").is_empty());
    }

    #[test]
    fn tabs_and_hyphens_stay_inside_words() {
        let t = tokenize("state-of-the-art\tdesign");
        assert_eq!(t.iter().collect::<Vec<_>>(), vec!["STATE-OF-THE-ART\tDESIGN"]);
    }

    #[test]
    fn every_delimiter_splits() {
        for d in DELIMITERS {
            let line = format!("a{d}b");
            assert_eq!(tokenize(&line).iter().collect::<Vec<_>>(), vec!["A", "B"], "delimiter {d:?}");
        }
    }

    #[test]
    fn non_delimiters_never_split() {
        let t = tokenize("a-b'c/d[e]f\\g^h");
        assert_eq!(t.iter().collect::<Vec<_>>(), vec!["A-B'C/D[E]F\\G^H"]);
    }

    #[test]
    fn iteration_restarts() {
        let t = tokenize("one two");
        assert_eq!(t.iter().count(), 2);
        assert_eq!(t.iter().count(), 2);
    }
}
