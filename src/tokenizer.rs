//! A generic rule-based scanning engine.
//!
//! The engine knows nothing about JSON: it holds an ordered list of
//! pattern/action rules, a scan position, and a small integer lexical state,
//! and produces tokens lazily. Rules are restricted to a subset of states
//! (empty set = every state), matches are anchored at the scan position, and
//! candidates are tried longest-match-first with greedy rules last. An action
//! may reject its own match, in which case the next candidate is tried at the
//! same position without consuming input.

use regex::{Captures, Regex};
use std::cmp::Reverse;
use std::collections::VecDeque;
use thiserror::Error;

/// What a rule's action decided to do with its match.
pub enum RuleOutcome<T> {
    /// Consume the match and emit nothing (whitespace, comments).
    Skip,
    /// Consume the match and emit one token.
    Token(T),
    /// Consume the match and emit several tokens; the first is returned
    /// immediately, the rest are queued.
    Tokens(Vec<T>),
    /// The match is invalid here; retry the next candidate at the same
    /// position.
    Reject,
}

/// View handed to rule actions: the caller's context plus scan bookkeeping.
pub struct Scan<'a, C> {
    pub ctx: &'a mut C,
    state: &'a mut u32,
    offset: usize,
}

impl<'a, C> Scan<'a, C> {
    /// Current lexical state.
    pub fn state(&self) -> u32 {
        *self.state
    }

    /// Switch the lexical state for subsequent rule dispatch.
    pub fn set_state(&mut self, state: u32) {
        *self.state = state;
    }

    /// Byte offset of the match start.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

type Action<C, T> = Box<dyn Fn(&mut Scan<'_, C>, &Captures<'_>) -> RuleOutcome<T> + Send + Sync>;

/// Handler invoked when no rule accepts the next character. Returning
/// `Ok(Some(token))` emits a token for it, `Ok(None)` discards it; either way
/// the character is consumed.
pub type DefunctHandler<C, T> =
    Box<dyn Fn(&mut C, char, usize) -> Result<Option<T>, ScanError> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// No applicable rule matched (after all rejections) at this position.
    #[error("unexpected character {ch:?} at index {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },
    /// A rule accepted a zero-length match, which would never advance the
    /// scan. Rule sets must reject zero-width matches.
    #[error("rule accepted a zero-length match at index {offset}")]
    ZeroLengthMatch { offset: usize },
}

struct Rule<C, T> {
    pattern: Regex,
    greedy: bool,
    states: Vec<u32>,
    action: Action<C, T>,
}

impl<C, T> Rule<C, T> {
    fn applies_in(&self, state: u32) -> bool {
        self.states.is_empty() || self.states.contains(&state)
    }
}

/// An ordered collection of rules. Registration order breaks ties between
/// equal-length matches.
pub struct RuleSet<C, T> {
    rules: Vec<Rule<C, T>>,
}

impl<C, T> Default for RuleSet<C, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, T> RuleSet<C, T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule applicable in every lexical state.
    pub fn rule(
        &mut self,
        pattern: Regex,
        action: impl Fn(&mut Scan<'_, C>, &Captures<'_>) -> RuleOutcome<T> + Send + Sync + 'static,
    ) -> &mut Self {
        self.push(pattern, false, Vec::new(), Box::new(action))
    }

    /// Register a rule restricted to the given lexical states.
    pub fn rule_in(
        &mut self,
        states: &[u32],
        pattern: Regex,
        action: impl Fn(&mut Scan<'_, C>, &Captures<'_>) -> RuleOutcome<T> + Send + Sync + 'static,
    ) -> &mut Self {
        self.push(pattern, false, states.to_vec(), Box::new(action))
    }

    /// Register a greedy rule: one that may match the same content repeatedly
    /// across the input. Greedy candidates are tried after all others.
    pub fn greedy_rule(
        &mut self,
        pattern: Regex,
        action: impl Fn(&mut Scan<'_, C>, &Captures<'_>) -> RuleOutcome<T> + Send + Sync + 'static,
    ) -> &mut Self {
        self.push(pattern, true, Vec::new(), Box::new(action))
    }

    fn push(
        &mut self,
        pattern: Regex,
        greedy: bool,
        states: Vec<u32>,
        action: Action<C, T>,
    ) -> &mut Self {
        self.rules.push(Rule {
            pattern,
            greedy,
            states,
            action,
        });
        self
    }
}

/// One scan over one input. Holds all mutable state of a tokenization run;
/// create a fresh instance (or call [`Tokenizer::set_input`]) per input.
pub struct Tokenizer<'r, 'i, C, T> {
    rules: &'r RuleSet<C, T>,
    input: &'i str,
    pos: usize,
    state: u32,
    queue: VecDeque<T>,
    defunct: Option<DefunctHandler<C, T>>,
    pub ctx: C,
}

impl<'r, 'i, C, T> Tokenizer<'r, 'i, C, T> {
    pub fn new(rules: &'r RuleSet<C, T>, input: &'i str, ctx: C) -> Self {
        Self {
            rules,
            input,
            pos: 0,
            state: 0,
            queue: VecDeque::new(),
            defunct: None,
            ctx,
        }
    }

    /// Replace the input and reset position, state, and the pending queue.
    pub fn set_input(&mut self, input: &'i str) {
        self.input = input;
        self.pos = 0;
        self.state = 0;
        self.queue.clear();
    }

    /// Install a handler for characters no rule accepts.
    pub fn on_defunct(&mut self, handler: DefunctHandler<C, T>) {
        self.defunct = Some(handler);
    }

    /// Produce the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<T>, ScanError> {
        if let Some(t) = self.queue.pop_front() {
            return Ok(Some(t));
        }
        loop {
            if self.pos >= self.input.len() {
                return Ok(None);
            }

            // Collect every rule matching exactly at the current position,
            // then order: longest first (stable), greedy rules last.
            let rules = self.rules;
            let mut candidates: Vec<(&Rule<C, T>, Captures<'i>, usize)> = Vec::new();
            for rule in &rules.rules {
                if !rule.applies_in(self.state) {
                    continue;
                }
                if let Some(caps) = rule.pattern.captures_at(self.input, self.pos) {
                    let m = match caps.get(0) {
                        Some(m) => m,
                        None => continue,
                    };
                    if m.start() != self.pos {
                        continue;
                    }
                    let len = m.len();
                    candidates.push((rule, caps, len));
                }
            }
            candidates.sort_by_key(|(rule, _, len)| (rule.greedy, Reverse(*len)));

            let mut accepted = None;
            for (rule, caps, len) in &candidates {
                let mut scan = Scan {
                    ctx: &mut self.ctx,
                    state: &mut self.state,
                    offset: self.pos,
                };
                match (rule.action)(&mut scan, caps) {
                    RuleOutcome::Reject => continue,
                    outcome => {
                        accepted = Some((outcome, *len));
                        break;
                    }
                }
            }

            match accepted {
                Some((outcome, len)) => {
                    if len == 0 {
                        return Err(ScanError::ZeroLengthMatch { offset: self.pos });
                    }
                    self.pos += len;
                    match outcome {
                        RuleOutcome::Skip => continue,
                        RuleOutcome::Token(t) => return Ok(Some(t)),
                        RuleOutcome::Tokens(ts) => {
                            let mut it = ts.into_iter();
                            match it.next() {
                                Some(first) => {
                                    self.queue.extend(it);
                                    return Ok(Some(first));
                                }
                                None => continue,
                            }
                        }
                        RuleOutcome::Reject => unreachable!("rejects never leave the candidate loop"),
                    }
                }
                None => {
                    let Some(ch) = self.input[self.pos..].chars().next() else {
                        return Ok(None);
                    };
                    let offset = self.pos;
                    self.pos += ch.len_utf8();
                    match &self.defunct {
                        Some(handler) => match handler(&mut self.ctx, ch, offset)? {
                            Some(t) => return Ok(Some(t)),
                            None => continue,
                        },
                        None => return Err(ScanError::UnexpectedCharacter { ch, offset }),
                    }
                }
            }
        }
    }
}
