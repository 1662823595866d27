//! Ordered token list with a forward-only cursor

use super::token::{Token, TokenSubType, TokenType};

/// Ordered list of tokens
///
/// The cursor starts before the first item. `move_next` advances it one
/// step at a time and never past the last item; `previous`, `current` and
/// `next` peek without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    items: Vec<Token>,
    index: Option<usize>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new token and return a copy of it
    pub fn add(
        &mut self,
        value: impl Into<String>,
        token_type: TokenType,
        subtype: TokenSubType,
    ) -> Token {
        let token = Token::new(value, token_type, subtype);
        self.add_ref(token.clone());
        token
    }

    pub fn add_ref(&mut self, token: Token) {
        self.items.push(token);
    }

    /// Move the cursor back before the first item
    pub fn reset(&mut self) {
        self.index = None;
    }

    /// True before the first item and at the first item
    pub fn bof(&self) -> bool {
        self.index.map_or(true, |i| i == 0)
    }

    /// True at the last item (and on an empty list)
    pub fn eof(&self) -> bool {
        match self.index {
            None => self.items.is_empty(),
            Some(i) => i + 1 >= self.items.len(),
        }
    }

    pub fn move_next(&mut self) -> bool {
        if self.eof() {
            return false;
        }
        self.index = Some(self.index.map_or(0, |i| i + 1));
        true
    }

    pub fn position(&self) -> Option<usize> {
        self.index
    }

    pub fn current(&self) -> Option<&Token> {
        self.index.and_then(|i| self.items.get(i))
    }

    pub fn current_mut(&mut self) -> Option<&mut Token> {
        match self.index {
            Some(i) => self.items.get_mut(i),
            None => None,
        }
    }

    pub fn next(&self) -> Option<&Token> {
        if self.eof() {
            return None;
        }
        self.items.get(self.index.map_or(0, |i| i + 1))
    }

    pub fn previous(&self) -> Option<&Token> {
        match self.index {
            Some(i) if i >= 1 => self.items.get(i - 1),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Token] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Token> {
        self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.items.iter()
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(items: Vec<Token>) -> Self {
        Self { items, index: None }
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> TokenList {
        let mut list = TokenList::new();
        list.add("1", TokenType::Operand, TokenSubType::Number);
        list.add("+", TokenType::OperatorInfix, TokenSubType::Math);
        list.add("2", TokenType::Operand, TokenSubType::Number);
        list
    }

    #[test]
    fn test_empty_list_cursor() {
        let mut list = TokenList::new();
        assert!(list.bof());
        assert!(list.eof());
        assert!(!list.move_next());
        assert!(list.current().is_none());
        assert!(list.next().is_none());
        assert!(list.previous().is_none());
    }

    #[test]
    fn test_forward_traversal() {
        let mut list = three();
        assert!(list.current().is_none());
        assert_eq!(list.next().map(|t| t.value.as_str()), Some("1"));

        assert!(list.move_next());
        assert!(list.bof());
        assert!(list.previous().is_none());
        assert_eq!(list.current().map(|t| t.value.as_str()), Some("1"));
        assert_eq!(list.next().map(|t| t.value.as_str()), Some("+"));

        assert!(list.move_next());
        assert!(!list.bof());
        assert_eq!(list.previous().map(|t| t.value.as_str()), Some("1"));

        assert!(list.move_next());
        assert!(list.eof());
        assert!(list.next().is_none());
        assert!(!list.move_next());
        assert_eq!(list.position(), Some(2));
    }

    #[test]
    fn test_reset_and_mutation() {
        let mut list = three();
        while list.move_next() {}
        list.reset();
        assert_eq!(list.position(), None);

        list.move_next();
        if let Some(token) = list.current_mut() {
            token.value = "10".to_string();
        }
        assert_eq!(list.items()[0].value, "10");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_add_returns_copy() {
        let mut list = TokenList::new();
        let token = list.add("SUM", TokenType::Function, TokenSubType::Start);
        assert_eq!(token, list.items()[0]);
        assert_eq!((&list).into_iter().count(), 1);
        assert_eq!(list.into_items().len(), 1);
    }
}
