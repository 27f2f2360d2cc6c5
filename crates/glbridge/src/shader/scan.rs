// ── Token ─────────────────────────────────────────────────────────────────

/// A slice of shader source. Concatenating all tokens yields the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tok<'s> {
    Ident(&'s str),
    Number(&'s str),
    Space(&'s str),
    Comment(&'s str),
    Punct(&'s str),
}

impl<'s> Tok<'s> {
    pub(crate) fn text(&self) -> &'s str {
        match *self {
            Tok::Ident(s) | Tok::Number(s) | Tok::Space(s) | Tok::Comment(s) | Tok::Punct(s) => s,
        }
    }

    pub(crate) fn is_ident(&self, name: &str) -> bool {
        matches!(*self, Tok::Ident(s) if s == name)
    }
}

// ── Scanner ───────────────────────────────────────────────────────────────

/// Splits GLSL source into identifier, number, whitespace, comment and
/// punctuation tokens. Never fails; unterminated comments run to the end.
pub(crate) struct Scanner<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Scanner<'s> {
    pub(crate) fn new(src: &'s str) -> Self {
        Self { src, pos: 0 }
    }

    pub(crate) fn tokenize(mut self) -> Vec<Tok<'s>> {
        let mut tokens = Vec::new();
        while let Some(tok) = self.next_token() {
            tokens.push(tok);
        }
        tokens
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) {
        while matches!(self.peek(), Some(c) if pred(c)) {
            self.advance();
        }
    }

    fn next_token(&mut self) -> Option<Tok<'s>> {
        let start = self.pos;
        let ch = self.peek()?;

        let kind: fn(&'s str) -> Tok<'s> = if self.rest().starts_with("//") {
            self.take_while(|c| c != '\n');
            Tok::Comment
        } else if self.rest().starts_with("/*") {
            match self.rest()[2..].find("*/") {
                Some(end) => self.pos += end + 4,
                None => self.pos = self.src.len(),
            }
            Tok::Comment
        } else if ch.is_whitespace() {
            self.take_while(char::is_whitespace);
            Tok::Space
        } else if ch.is_ascii_alphabetic() || ch == '_' {
            self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
            Tok::Ident
        } else if ch.is_ascii_digit() {
            self.take_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
            Tok::Number
        } else {
            self.advance();
            Tok::Punct
        };

        Some(kind(&self.src[start..self.pos]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(src: &str) -> Vec<&str> {
        Scanner::new(src).tokenize().iter().map(Tok::text).collect()
    }

    #[test]
    fn tokens_cover_the_source() {
        let src = "#version 300 es\nin vec2 a_pos; // comment\n/* block */ void main(){ x = 1.0e5; }";
        let joined: String = texts(src).concat();
        assert_eq!(joined, src);
    }

    #[test]
    fn identifiers_are_whole_words() {
        let toks = Scanner::new("attributes attribute").tokenize();
        assert_eq!(
            toks,
            vec![Tok::Ident("attributes"), Tok::Space(" "), Tok::Ident("attribute")]
        );
    }

    #[test]
    fn unterminated_block_comment_runs_to_end() {
        let toks = Scanner::new("a /* open").tokenize();
        assert_eq!(toks.last(), Some(&Tok::Comment("/* open")));
    }

    #[test]
    fn numbers_swallow_suffixes() {
        let toks = Scanner::new("12u 3.5").tokenize();
        assert_eq!(toks[0], Tok::Number("12u"));
        assert_eq!(toks[2], Tok::Number("3.5"));
    }
}
