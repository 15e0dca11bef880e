//! Deposit memo parsing.
//!
//! The memo carries the signup request as free text:
//! `<account:12 chars><' ' or '-'><EOS-prefixed key:53 chars>`.

use eos_chain::Name;

use crate::error::SignupError;

/// The two fields recovered from a well-formed memo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMemo {
    /// The requested new account name.
    pub account: Name,
    /// The public-key text, still unvalidated.
    pub key_text: String,
}

/// Split a memo into the requested account name and key text.
///
/// Leading and trailing ASCII whitespace is ignored. The first space is the
/// separator; if there is none, the first dash is. The account part must be
/// exactly 12 characters of the name alphabet. Pure and deterministic:
/// identical input always yields an identical result.
pub fn parse_memo(memo: &str) -> Result<ParsedMemo, SignupError> {
    let memo = memo.trim_matches(|c: char| c.is_ascii_whitespace());
    let separator = memo
        .find(' ')
        .or_else(|| memo.find('-'))
        .ok_or(SignupError::MalformedMemo)?;

    let account_text = &memo[..separator];
    let key_text = &memo[separator + 1..];
    if account_text.len() != 12 {
        return Err(SignupError::InvalidAccountLength(account_text.len()));
    }
    let account: Name = account_text
        .parse()
        .map_err(|_| SignupError::InvalidAccountName(account_text.to_string()))?;

    Ok(ParsedMemo {
        account,
        key_text: key_text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "EOS6MRyAjQq8ud7hVNYcfnVPJqcVpscN5So8BhtHuGYqET5GDW5CV";

    #[test]
    fn space_separated_memo() {
        let parsed = parse_memo(&format!("abcdefghijkl {KEY}")).unwrap();
        assert_eq!(parsed.account, "abcdefghijkl".parse().unwrap());
        assert_eq!(parsed.key_text, KEY);
    }

    #[test]
    fn dash_separated_memo() {
        let parsed = parse_memo(&format!("abcdefghijkl-{KEY}")).unwrap();
        assert_eq!(parsed.account, "abcdefghijkl".parse().unwrap());
        assert_eq!(parsed.key_text, KEY);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let parsed = parse_memo(&format!("  \tabcdefghijkl {KEY} \n")).unwrap();
        assert_eq!(parsed.account, "abcdefghijkl".parse().unwrap());
        assert_eq!(parsed.key_text, KEY);
    }

    #[test]
    fn space_wins_over_dash() {
        // A dash later in the text must not override the space separator.
        let parsed = parse_memo("abcdefghijkl keytext-with-dash").unwrap();
        assert_eq!(parsed.key_text, "keytext-with-dash");
    }

    #[test]
    fn missing_separator_rejected() {
        let memo = format!("abcdefghijkl{KEY}");
        assert!(matches!(
            parse_memo(&memo),
            Err(SignupError::MalformedMemo)
        ));
    }

    #[test]
    fn empty_memo_rejected() {
        assert!(matches!(parse_memo(""), Err(SignupError::MalformedMemo)));
        assert!(matches!(parse_memo("   "), Err(SignupError::MalformedMemo)));
    }

    #[test]
    fn short_account_rejected() {
        let memo = format!("abcdefghijk {KEY}");
        assert!(matches!(
            parse_memo(&memo),
            Err(SignupError::InvalidAccountLength(11))
        ));
    }

    #[test]
    fn long_account_rejected() {
        let memo = format!("abcdefghijklm {KEY}");
        assert!(matches!(
            parse_memo(&memo),
            Err(SignupError::InvalidAccountLength(13))
        ));
    }

    #[test]
    fn invalid_account_characters_rejected() {
        let memo = format!("abcdefghij69 {KEY}");
        assert!(matches!(
            parse_memo(&memo),
            Err(SignupError::InvalidAccountName(_))
        ));
    }

    #[test]
    fn parsing_is_deterministic() {
        let memo = format!("abcdefghijkl {KEY}");
        assert_eq!(parse_memo(&memo).unwrap(), parse_memo(&memo).unwrap());
    }
}
