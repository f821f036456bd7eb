//! Language configuration.
//!
//! The scanner is generic over [`Configuration`]: it asks the configuration
//! how to classify a byte, what to do with each class, which trie to match
//! operators and keywords against, and which literal parser owns an opener.
//! [`Grammar`] is the stock implementation, assembled with
//! [`GrammarBuilder`] and immutable afterwards, so one grammar can serve any
//! number of concurrent scans.

use std::fmt;

use tracing::debug;

use crate::{CharClass, CharClassTable, ClassSet, GrammarError, LiteralParser, Trie};

/// Index of a literal parser registered with a [`Grammar`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiteralId(u32);

impl LiteralId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Payload stored at a terminal trie node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entry<P> {
    /// A complete token (operator or keyword).
    Token(P),
    /// An opener handing over to a literal parser (`"`, `//`, `/*`).
    Literal(LiteralId),
}

/// What the scanner does with a character of a given class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassRule<P> {
    /// Report unexpected input.
    Unexpected,
    /// Group a run of characters into one token.
    Run(RunRule<P>),
    /// Line terminator; `\r\n` is one token.
    Newline { kind: P },
    /// Longest match in the trie.
    Trie,
    /// Always starts a literal (e.g. digits start numbers).
    Literal(LiteralId),
}

impl<P> Default for ClassRule<P> {
    fn default() -> Self {
        ClassRule::Unexpected
    }
}

/// Class-run segmentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunRule<P> {
    pub kind: P,
    /// Classes that extend the run. `None` means the starting class only.
    pub continues: Option<ClassSet>,
    /// Promote runs that are exact trie keys (keywords).
    pub keywords: bool,
    /// Whitespace-like: does not clear the line-start flag.
    pub trivia: bool,
}

impl<P> RunRule<P> {
    pub fn new(kind: P) -> Self {
        RunRule {
            kind,
            continues: None,
            keywords: false,
            trivia: false,
        }
    }

    #[must_use]
    pub fn continues(mut self, set: ClassSet) -> Self {
        self.continues = Some(set);
        self
    }

    #[must_use]
    pub fn keywords(mut self) -> Self {
        self.keywords = true;
        self
    }

    #[must_use]
    pub fn trivia(mut self) -> Self {
        self.trivia = true;
        self
    }

    /// Continuation set for a run that started with `class`.
    #[inline]
    pub fn continuation(&self, class: CharClass) -> ClassSet {
        self.continues.unwrap_or(ClassSet::of(class))
    }
}

/// Where to resume after recovered unexpected input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Recovery {
    /// Skip the offending range only.
    #[default]
    SkipRange,
    /// Skip to the next line terminator.
    NextLine,
}

/// Everything the scanner needs to know about a language.
pub trait Configuration {
    type Payload: Clone;

    fn classes(&self) -> &CharClassTable;

    fn rule(&self, class: CharClass) -> &ClassRule<Self::Payload>;

    fn trie(&self) -> &Trie<Entry<Self::Payload>>;

    fn literal(&self, id: LiteralId) -> Option<&dyn LiteralParser<Self::Payload>>;

    fn recovery(&self) -> Recovery {
        Recovery::SkipRange
    }
}

impl<C: Configuration + ?Sized> Configuration for &C {
    type Payload = C::Payload;

    fn classes(&self) -> &CharClassTable {
        (**self).classes()
    }

    fn rule(&self, class: CharClass) -> &ClassRule<Self::Payload> {
        (**self).rule(class)
    }

    fn trie(&self) -> &Trie<Entry<Self::Payload>> {
        (**self).trie()
    }

    fn literal(&self, id: LiteralId) -> Option<&dyn LiteralParser<Self::Payload>> {
        (**self).literal(id)
    }

    fn recovery(&self) -> Recovery {
        (**self).recovery()
    }
}

/// A table-driven language configuration.
pub struct Grammar<P> {
    classes: CharClassTable,
    rules: [ClassRule<P>; CharClass::ALL.len()],
    trie: Trie<Entry<P>>,
    literals: Vec<Box<dyn LiteralParser<P>>>,
    recovery: Recovery,
}

impl<P> Grammar<P> {
    /// Start a grammar over `classes`. Every class begins as
    /// [`ClassRule::Unexpected`].
    pub fn builder(classes: CharClassTable) -> GrammarBuilder<P> {
        GrammarBuilder {
            grammar: Grammar {
                classes,
                rules: std::array::from_fn(|_| ClassRule::Unexpected),
                trie: Trie::new(),
                literals: Vec::new(),
                recovery: Recovery::default(),
            },
            error: None,
        }
    }

    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }
}

impl<P: Clone> Configuration for Grammar<P> {
    type Payload = P;

    #[inline]
    fn classes(&self) -> &CharClassTable {
        &self.classes
    }

    #[inline]
    fn rule(&self, class: CharClass) -> &ClassRule<P> {
        &self.rules[class.index()]
    }

    #[inline]
    fn trie(&self) -> &Trie<Entry<P>> {
        &self.trie
    }

    fn literal(&self, id: LiteralId) -> Option<&dyn LiteralParser<P>> {
        let parser = self.literals.get(id.index())?;
        Some(parser.as_ref())
    }

    fn recovery(&self) -> Recovery {
        self.recovery
    }
}

impl<P: fmt::Debug> fmt::Debug for Grammar<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("rules", &self.rules)
            .field("trie_keys", &self.trie.len())
            .field("literals", &self.literals.len())
            .field("recovery", &self.recovery)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Grammar`].
///
/// Registration methods chain; the first invalid registration is kept and
/// returned by [`build`](Self::build).
pub struct GrammarBuilder<P> {
    grammar: Grammar<P>,
    error: Option<GrammarError>,
}

impl<P> GrammarBuilder<P> {
    fn fail(&mut self, error: GrammarError) {
        self.error.get_or_insert(error);
    }

    fn insert(&mut self, key: &str, entry: Entry<P>, what: &'static str) {
        if key.is_empty() {
            self.fail(GrammarError::EmptyKey { what });
            return;
        }
        self.grammar.trie.insert(key.as_bytes(), entry);
    }

    /// Set the rule for one class.
    #[must_use]
    pub fn rule(mut self, class: CharClass, rule: ClassRule<P>) -> Self {
        self.grammar.rules[class.index()] = rule;
        self
    }

    /// Register an operator (or any fixed token) for trie matching.
    #[must_use]
    pub fn token(mut self, text: &str, kind: P) -> Self {
        self.insert(text, Entry::Token(kind), "token");
        self
    }

    /// Register a reserved word. Runs whose rule enables keyword promotion
    /// are looked up exactly, so `if` never matches a prefix of `iffy`.
    #[must_use]
    pub fn keyword(mut self, word: &str, kind: P) -> Self {
        self.insert(word, Entry::Token(kind), "keyword");
        self
    }

    /// Register a literal parser and return its id, for sharing one parser
    /// between several openers or classes.
    pub fn add_literal(&mut self, parser: impl LiteralParser<P> + 'static) -> LiteralId {
        let id = LiteralId(u32::try_from(self.grammar.literals.len()).unwrap_or(u32::MAX));
        self.grammar.literals.push(Box::new(parser));
        id
    }

    /// Hand input starting with `opener` to `parser`.
    #[must_use]
    pub fn literal_opener(mut self, opener: &str, parser: impl LiteralParser<P> + 'static) -> Self {
        let id = self.add_literal(parser);
        self.insert(opener, Entry::Literal(id), "literal opener");
        self
    }

    /// Register `opener` for an already added parser.
    #[must_use]
    pub fn literal_opener_id(mut self, opener: &str, id: LiteralId) -> Self {
        self.insert(opener, Entry::Literal(id), "literal opener");
        self
    }

    /// Hand every character of `class` to `parser`.
    #[must_use]
    pub fn literal_class(mut self, class: CharClass, parser: impl LiteralParser<P> + 'static) -> Self {
        let id = self.add_literal(parser);
        self.grammar.rules[class.index()] = ClassRule::Literal(id);
        self
    }

    #[must_use]
    pub fn recovery(mut self, recovery: Recovery) -> Self {
        self.grammar.recovery = recovery;
        self
    }

    /// Validate and finish.
    pub fn build(self) -> Result<Grammar<P>, GrammarError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let grammar = self.grammar;
        let known = grammar.literals.len();
        let rule_ids = grammar.rules.iter().filter_map(|rule| match rule {
            ClassRule::Literal(id) => Some(*id),
            _ => None,
        });
        let trie_ids = grammar.trie.iter().filter_map(|(_, entry)| match entry {
            Entry::Literal(id) => Some(*id),
            Entry::Token(_) => None,
        });
        if let Some(id) = rule_ids.chain(trie_ids).find(|id| id.index() >= known) {
            return Err(GrammarError::UnknownLiteral { id: id.index() });
        }
        debug!(
            trie_keys = grammar.trie.len(),
            trie_nodes = grammar.trie.node_count(),
            literals = known,
            "grammar built"
        );
        Ok(grammar)
    }
}

impl<P: fmt::Debug> fmt::Debug for GrammarBuilder<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrammarBuilder")
            .field("grammar", &self.grammar)
            .field("error", &self.error)
            .finish()
    }
}
