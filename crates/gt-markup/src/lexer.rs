//! Tokenizes CCL markup into a stream of characters and tag boundaries.
//! Stops (without error) on any malformed tag: unterminated `<`, `<` at
//! EOF, `</` at EOF, or a self-closing close tag like `</foo/>`.

use std::iter::Peekable;
use std::str::CharIndices;

/// One lexical unit. `Char` covers both literal text and decoded entities
/// -- the interpreter doesn't need to tell them apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event<'a> {
    Char(char),
    Open(&'a str),
    Close(&'a str),
    SelfClose(&'a str),
}

pub struct Lexer<'a> {
    input: &'a str,
    iter: Peekable<CharIndices<'a>>,
    stopped: bool,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, iter: input.char_indices().peekable(), stopped: false }
    }

    fn read_name(&mut self) -> &'a str {
        let start = self.iter.peek().map_or(self.input.len(), |&(i, _)| i);
        let mut end = start;
        while let Some(&(i, c)) = self.iter.peek() {
            if c.is_ascii_alphanumeric() {
                end = i + c.len_utf8();
                self.iter.next();
            } else {
                break;
            }
        }
        &self.input[start..end]
    }

    /// Called right after consuming the opening `<`.
    fn lex_tag(&mut self) -> Option<Event<'a>> {
        if let Some(&(_, '/')) = self.iter.peek() {
            self.iter.next();
            let name = self.read_name();
            return match self.iter.next() {
                Some((_, '>')) => Some(Event::Close(name)),
                _ => None,
            };
        }
        let name = self.read_name();
        match self.iter.next() {
            Some((_, '>')) => Some(Event::Open(name)),
            Some((_, '/')) => match self.iter.next() {
                Some((_, '>')) => Some(Event::SelfClose(name)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Called right after consuming `&`. Entity names are checked against
    /// `(ch >= 'a' && ch <= 'z') || (ch >= 'a' && ch <= 'z')` in the source
    /// this was ported from -- a duplicated-range condition that (bug or
    /// not) only ever admits lowercase letters, which happens to be exactly
    /// what `lt`/`gt`/`amp` need.
    fn lex_entity(&mut self) -> Option<char> {
        let start = self.iter.peek()?.0;
        let mut end = start;
        while let Some(&(i, c)) = self.iter.peek() {
            if c.is_ascii_lowercase() {
                end = i + 1;
                self.iter.next();
            } else {
                break;
            }
        }
        let name = &self.input[start..end];
        match self.iter.peek() {
            Some(&(_, ';')) => {
                self.iter.next();
                match name {
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "amp" => Some('&'),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped {
            return None;
        }
        loop {
            match self.iter.next() {
                None => return None,
                Some((_, '<')) => {
                    return match self.lex_tag() {
                        Some(ev) => Some(ev),
                        None => {
                            self.stopped = true;
                            None
                        }
                    };
                }
                Some((_, '&')) => {
                    if let Some(decoded) = self.lex_entity() {
                        return Some(Event::Char(decoded));
                    }
                }
                Some((_, c)) => return Some(Event::Char(c)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<Event<'_>> {
        Lexer::new(input).collect()
    }

    #[test]
    fn plain_text_yields_one_char_event_each() {
        assert_eq!(collect("ab"), vec![Event::Char('a'), Event::Char('b')]);
    }

    #[test]
    fn recognizes_open_close_and_self_close() {
        assert_eq!(collect("<red>x</red>"), vec![
            Event::Open("red"),
            Event::Char('x'),
            Event::Close("red"),
        ]);
        assert_eq!(collect("<shiny/>"), vec![Event::SelfClose("shiny")]);
    }

    #[test]
    fn known_entities_decode() {
        assert_eq!(collect("&lt;&gt;&amp;"), vec![Event::Char('<'), Event::Char('>'), Event::Char('&')]);
    }

    #[test]
    fn unknown_entity_is_silently_dropped() {
        assert_eq!(collect("a&nbsp;b"), vec![Event::Char('a'), Event::Char('b')]);
    }

    #[test]
    fn unterminated_open_tag_stops_interpretation() {
        assert_eq!(collect("ok<red"), vec![Event::Char('o'), Event::Char('k')]);
    }

    #[test]
    fn angle_bracket_at_eof_stops_interpretation() {
        assert_eq!(collect("ok<"), vec![Event::Char('o'), Event::Char('k')]);
    }

    #[test]
    fn dangling_close_slash_at_eof_stops_interpretation() {
        assert_eq!(collect("ok</"), vec![Event::Char('o'), Event::Char('k')]);
    }

    #[test]
    fn self_closing_close_tag_stops_interpretation() {
        assert_eq!(collect("ok</foo/>more"), vec![Event::Char('o'), Event::Char('k')]);
    }
}
