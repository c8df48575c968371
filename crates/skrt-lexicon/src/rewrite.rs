// Substitution of lexicon lines over the text of one trie file.

use crate::lexicon::Lexicon;
use crate::line::{normalize_newlines, split_lines};

/// Result of applying a lexicon to one trie text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// New text, lines joined with `\n`.
    pub content: String,
    /// Number of lines, counting the empty piece after a trailing newline.
    pub lines: usize,
    /// Lines whose form was found in the lexicon.
    pub replaced: usize,
    /// Replaced lines whose text actually differs from the lexicon line.
    pub changed: usize,
}

impl Rewrite {
    /// Whether the rewrite differs from `original`.
    pub fn differs_from(&self, original: &str) -> bool {
        self.content != original
    }
}

/// Replace every line of `text` whose form is in `lexicon` by the lexicon's
/// line; keep other lines verbatim.
pub fn rewrite(lexicon: &Lexicon, text: &str) -> Rewrite {
    let text = normalize_newlines(text);
    let mut content = String::with_capacity(text.len());
    let mut lines = 0;
    let mut replaced = 0;
    let mut changed = 0;

    for line in split_lines(&text) {
        if lines > 0 {
            content.push('\n');
        }
        lines += 1;
        match lexicon.substitute(line) {
            Some(canonical) => {
                replaced += 1;
                if canonical != line {
                    changed += 1;
                }
                content.push_str(canonical);
            }
            None => content.push_str(line),
        }
    }

    Rewrite {
        content,
        lines,
        replaced,
        changed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(text: &str) -> Lexicon {
        Lexicon::from_text(text)
    }

    #[test]
    fn replaces_known_form() {
        let lex = lexicon("rama,rama,noun,masc");
        let out = rewrite(&lex, "rama,rama,noun,fem");
        assert_eq!(out.content, "rama,rama,noun,masc");
        assert_eq!(out.replaced, 1);
        assert_eq!(out.changed, 1);
    }

    #[test]
    fn keeps_unknown_form() {
        let lex = lexicon("rama,rama,noun,masc");
        let out = rewrite(&lex, "xyz,unknown,0");
        assert_eq!(out.content, "xyz,unknown,0");
        assert_eq!(out.replaced, 0);
        assert_eq!(out.changed, 0);
    }

    #[test]
    fn mixed_lines_keep_order_and_trailing_newline() {
        let lex = lexicon("a,new\nc,new\n");
        let out = rewrite(&lex, "a,old\nb,keep\nc,new\n");
        assert_eq!(out.content, "a,new\nb,keep\nc,new\n");
        assert_eq!(out.lines, 4);
        // the trailing empty piece matches the lexicon's empty form
        assert_eq!(out.replaced, 3);
        assert_eq!(out.changed, 1);
    }

    #[test]
    fn unmatched_text_round_trips() {
        let lex = lexicon("zzz,1");
        let text = "a,1\n\nb,2\n";
        let out = rewrite(&lex, text);
        assert_eq!(out.content, text);
        assert!(!out.differs_from(text));
    }

    #[test]
    fn empty_form_entry_fills_blank_lines() {
        // a master line starting with a comma owns the empty form
        let lex = lexicon("a,1\n,stray");
        let out = rewrite(&lex, "a,0\n\nb,2");
        assert_eq!(out.content, "a,1\n,stray\nb,2");
    }

    #[test]
    fn crlf_input_is_written_with_lf() {
        let lex = lexicon("a,new");
        let out = rewrite(&lex, "a,old\r\nb,keep\r\n");
        assert_eq!(out.content, "a,new\nb,keep\n");
    }

    #[test]
    fn rewrite_is_idempotent() {
        let lex = lexicon("a,new\nb,new\n");
        let once = rewrite(&lex, "b,old\nx,1\na,old\n");
        let twice = rewrite(&lex, &once.content);
        assert_eq!(once.content, twice.content);
        assert_eq!(twice.changed, 0);
    }
}
