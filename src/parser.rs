//! Character state machine for decoding request URIs.
//!
//! The machine scans the input once, left to right. Each character first
//! drives a transition, then is handed to the state the machine landed in:
//! content states append it to their buffer, marker states drop it, and the
//! separator state commits the buffered parameter pair. There is no rejecting
//! state; any character sequence produces a value.

use crate::constants::EMPTY_PARAM_VALUE;
use crate::encoder::decode_fragment;
use crate::params::Params;

/// Decoded pieces of a full request URI.
pub(crate) struct ParsedUri {
    pub(crate) path: String,
    pub(crate) anchor: Option<String>,
    pub(crate) params: Params,
}

/// Parses `path[#anchor][?params]`. Starts in [`State::Path`].
pub(crate) fn parse_uri(input: &str) -> ParsedUri {
    let buffers = run(input, State::Path);
    ParsedUri {
        path: decode_fragment(&buffers.path),
        anchor: buffers.anchor.map(|anchor| decode_fragment(&anchor)),
        params: buffers.params,
    }
}

/// Parses a bare parameter list. Starts in [`State::ParamName`], so the
/// path and anchor rules never fire.
pub(crate) fn parse_params(input: &str) -> Params {
    run(input, State::ParamName).params
}

fn run(input: &str, mut state: State) -> Buffers {
    let mut buffers = Buffers::default();
    for c in input.chars() {
        state = transition(state, c);
        buffers.emit(state, c);
    }
    buffers.flush_end_of_input(state);
    buffers
}

/// Machine states. `AnchorStart`, `ParamsStart`, `ParamValueStart` and
/// `ParamsSeparator` are entered exactly on the marker character, which
/// lets the emit step swallow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Path,
    AnchorStart,
    Anchor,
    ParamsStart,
    ParamName,
    ParamValueStart,
    ParamValue,
    ParamsSeparator,
}

/// Next state for one input character. Arms are ordered by rule priority;
/// the final arm keeps the state for any character without a rule.
const fn transition(state: State, c: char) -> State {
    match (state, c) {
        (State::Path, '#') => State::AnchorStart,
        (State::Path | State::Anchor | State::AnchorStart, '?') => State::ParamsStart,
        (State::AnchorStart, _) => State::Anchor,
        (State::ParamName, '=') => State::ParamValueStart,
        (State::ParamName | State::ParamValueStart | State::ParamValue, '&' | ';') => {
            State::ParamsSeparator
        }
        (State::ParamValueStart, _) => State::ParamValue,
        (State::ParamsStart | State::ParamsSeparator, _) => State::ParamName,
        _ => state,
    }
}

/// Owned buffers the emit step writes into.
#[derive(Debug, Default)]
struct Buffers {
    path: String,
    anchor: Option<String>,
    name: String,
    value: String,
    params: Params,
}

impl Buffers {
    fn emit(&mut self, state: State, c: char) {
        match state {
            State::Path => self.path.push(c),
            // The anchor marker materializes an empty anchor even if no
            // anchor text follows.
            State::AnchorStart => self.anchor = Some(String::new()),
            State::Anchor => {
                if let Some(anchor) = self.anchor.as_mut() {
                    anchor.push(c);
                }
            }
            State::ParamName => self.name.push(c),
            State::ParamValue => self.value.push(c),
            State::ParamsSeparator => self.commit_pair(),
            State::ParamsStart | State::ParamValueStart => {}
        }
    }

    /// Commits whatever the final state left in flight.
    fn flush_end_of_input(&mut self, state: State) {
        match state {
            State::ParamName | State::ParamValueStart => {
                let name = decode_fragment(&self.name);
                self.params.insert(name, EMPTY_PARAM_VALUE);
            }
            State::ParamValue => self.commit_pair(),
            _ => {}
        }
    }

    fn commit_pair(&mut self) {
        let name = decode_fragment(&self.name);
        let value = decode_fragment(&self.value);
        self.params.insert(name, value);
        self.name.clear();
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_hash_starts_anchor() {
        assert_eq!(transition(State::Path, '#'), State::AnchorStart);
    }

    #[test]
    fn transition_question_starts_params() {
        assert_eq!(transition(State::Path, '?'), State::ParamsStart);
        assert_eq!(transition(State::Anchor, '?'), State::ParamsStart);
        assert_eq!(transition(State::AnchorStart, '?'), State::ParamsStart);
    }

    #[test]
    fn transition_anchor_start_consumes_one_char() {
        assert_eq!(transition(State::AnchorStart, 'x'), State::Anchor);
        assert_eq!(transition(State::AnchorStart, '#'), State::Anchor);
    }

    #[test]
    fn transition_params_start_enters_name() {
        assert_eq!(transition(State::ParamsStart, 'x'), State::ParamName);
        assert_eq!(transition(State::ParamsStart, '='), State::ParamName);
    }

    #[test]
    fn transition_equals_starts_value() {
        assert_eq!(transition(State::ParamName, '='), State::ParamValueStart);
        assert_eq!(transition(State::ParamValueStart, '='), State::ParamValue);
    }

    #[test]
    fn transition_separators_end_pair() {
        for state in [State::ParamName, State::ParamValueStart, State::ParamValue] {
            assert_eq!(transition(state, '&'), State::ParamsSeparator);
            assert_eq!(transition(state, ';'), State::ParamsSeparator);
        }
    }

    #[test]
    fn transition_separator_enters_next_name() {
        assert_eq!(transition(State::ParamsSeparator, 'x'), State::ParamName);
        assert_eq!(transition(State::ParamsSeparator, '&'), State::ParamName);
    }

    #[test]
    fn transition_without_rule_keeps_state() {
        assert_eq!(transition(State::Path, 'x'), State::Path);
        assert_eq!(transition(State::Anchor, '#'), State::Anchor);
        assert_eq!(transition(State::ParamValue, '?'), State::ParamValue);
        assert_eq!(transition(State::ParamValue, '#'), State::ParamValue);
    }

    #[test]
    fn parse_path_only() {
        let parsed = parse_uri("/over/there");
        assert_eq!(parsed.path, "/over/there");
        assert_eq!(parsed.anchor, None);
        assert!(parsed.params.is_empty());
    }

    #[test]
    fn parse_full_shape() {
        let parsed = parse_uri("/over/there#nose?name=ferret");
        assert_eq!(parsed.path, "/over/there");
        assert_eq!(parsed.anchor.as_deref(), Some("nose"));
        assert_eq!(parsed.params.get("name"), Some("ferret"));
    }

    #[test]
    fn parse_empty_input() {
        let parsed = parse_uri("");
        assert_eq!(parsed.path, "");
        assert_eq!(parsed.anchor, None);
        assert!(parsed.params.is_empty());
    }

    #[test]
    fn parse_anchor_marker_alone_keeps_empty_anchor() {
        let parsed = parse_uri("/p#");
        assert_eq!(parsed.anchor.as_deref(), Some(""));
    }

    #[test]
    fn parse_params_directly_after_anchor_marker() {
        let parsed = parse_uri("/p#?x=1");
        assert_eq!(parsed.anchor.as_deref(), Some(""));
        assert_eq!(parsed.params.get("x"), Some("1"));
    }

    #[test]
    fn parse_question_alone_leaves_params_empty() {
        let parsed = parse_uri("/p?");
        assert!(parsed.params.is_empty());
    }

    #[test]
    fn parse_mixed_separators() {
        let parsed = parse_uri("/a?x=1&y=2;z=3");
        assert_eq!(parsed.params.get("x"), Some("1"));
        assert_eq!(parsed.params.get("y"), Some("2"));
        assert_eq!(parsed.params.get("z"), Some("3"));
        assert_eq!(parsed.params.len(), 3);
    }

    #[test]
    fn parse_name_without_value() {
        let parsed = parse_uri("/a?flag");
        assert_eq!(parsed.params.get("flag"), Some(""));
    }

    #[test]
    fn parse_name_with_trailing_equals() {
        let parsed = parse_uri("/a?flag=");
        assert_eq!(parsed.params.get("flag"), Some(""));
    }

    #[test]
    fn parse_trailing_separator_commits_nothing_extra() {
        let parsed = parse_uri("/a?x=1&");
        assert_eq!(parsed.params.len(), 1);
        assert_eq!(parsed.params.get("x"), Some("1"));
    }

    #[test]
    fn parse_double_separator_prepends_next_name() {
        let params = parse_params("a=1&&b=2");
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("&b"), Some("2"));
    }

    #[test]
    fn parse_leading_equals_stays_in_name() {
        // `?` hands the next character to the name buffer before the
        // value rule can see it.
        let parsed = parse_uri("/a?=x");
        assert_eq!(parsed.params.get("=x"), Some(""));
    }

    #[test]
    fn parse_hash_inside_value_is_literal() {
        let parsed = parse_uri("/p?k=a#b");
        assert_eq!(parsed.anchor, None);
        assert_eq!(parsed.params.get("k"), Some("a#b"));
    }

    #[test]
    fn parse_second_hash_inside_anchor_is_literal() {
        let parsed = parse_uri("/p#x#y");
        assert_eq!(parsed.anchor.as_deref(), Some("x#y"));
    }

    #[test]
    fn parse_duplicate_name_keeps_last() {
        let parsed = parse_uri("/p?k=1&k=2");
        assert_eq!(parsed.params.get("k"), Some("2"));
        assert_eq!(parsed.params.len(), 1);
    }

    #[test]
    fn parse_decodes_all_regions() {
        let parsed = parse_uri("/over%20there#a+b?x%3dy=%2b1");
        assert_eq!(parsed.path, "/over there");
        assert_eq!(parsed.anchor.as_deref(), Some("a b"));
        assert_eq!(parsed.params.get("x=y"), Some("+1"));
    }

    #[test]
    fn parse_decodes_plus_in_every_region() {
        let parsed = parse_uri("/a+b#c+d?k=v+w");
        assert_eq!(parsed.path, "/a b");
        assert_eq!(parsed.anchor.as_deref(), Some("c d"));
        assert_eq!(parsed.params.get("k"), Some("v w"));
    }

    #[test]
    fn parse_params_empty_input_commits_empty_pair() {
        let params = parse_params("");
        assert_eq!(params.get(""), Some(""));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn parse_params_leading_separator_commits_empty_pair() {
        let params = parse_params("&a=1");
        assert_eq!(params.get(""), Some(""));
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn parse_params_never_sees_path_rules() {
        let params = parse_params("a#b=c?d");
        assert_eq!(params.get("a#b"), Some("c?d"));
    }
}
