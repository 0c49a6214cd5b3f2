//! Free-text rank parsing.
//!
//! Replaces the positional `split(" ")` indexing each scraped source used
//! to do on its own: normalize, tokenize, then resolve tokens against the
//! shared [`RankTable`]. One parser instance memoizes results for the
//! duration of a scraping pass.

use std::collections::HashMap;

use tracing::warn;

use super::vocabulary::RankTable;
use super::{Division, Rank, Tier};
use crate::error::{DraftError, Result};

/// Memoizing wrapper around [`parse_rank`], scoped to one scraping pass.
///
/// Parsing is pure, so the cache can never go stale; it only saves
/// re-tokenizing the same scraped string for every account that shares it.
pub struct RankParser<'a> {
    table: &'a RankTable,
    cache: HashMap<String, Rank>,
}

impl<'a> RankParser<'a> {
    pub fn new(table: &'a RankTable) -> Self {
        Self {
            table,
            cache: HashMap::new(),
        }
    }

    pub fn parse(&mut self, text: &str) -> Result<Rank> {
        if let Some(rank) = self.cache.get(text) {
            return Ok(*rank);
        }
        let rank = parse_rank(text, self.table)?;
        self.cache.insert(text.to_string(), rank);
        Ok(rank)
    }
}

/// Parse one free-text rank string from any scraped source.
///
/// Accepts full tier names in any case, compact forms ("G2"), Roman or
/// Arabic divisions, and an optional league-points suffix ("150 LP",
/// "150LP"). A divisioned tier with no division at all is not an error:
/// it returns the tier-only rank, which the scorer resolves to the tier's
/// midpoint fallback.
///
/// # Errors
///
/// `UnknownRankToken` when the tier token matches nothing in the table.
/// Callers skip that single observation; a rank is never fabricated.
pub fn parse_rank(text: &str, table: &RankTable) -> Result<Rank> {
    let cleaned = normalize(text);
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return Err(DraftError::UnknownRankToken {
            token: text.trim().to_string(),
        });
    };
    if *first == "unranked" {
        return Ok(Rank::UNRANKED);
    }

    let (tier, mut division, consumed) = match_tier(&tokens, table)?;
    if tier == Tier::Unranked {
        return Ok(Rank::UNRANKED);
    }

    let mut league_points: Option<u32> = None;
    for (offset, token) in tokens[consumed..].iter().enumerate() {
        let index = consumed + offset;
        if *token == "lp" {
            continue; // suffix of the previous number
        }
        if let Some(stripped) = token.strip_suffix("lp") {
            if let Ok(lp) = stripped.parse::<u32>() {
                league_points.get_or_insert(lp);
                continue;
            }
        }
        if let Ok(number) = token.parse::<u32>() {
            let next_is_lp = tokens.get(index + 1).is_some_and(|t| *t == "lp");
            // For apex tiers a numeric token is always league points,
            // never a division; elsewhere a number directly ahead of "LP"
            // is league points too. First LP wins; later numbers are
            // trailing site chrome.
            let is_league_points = tier.is_apex()
                || next_is_lp
                || division.is_some()
                || !(1..=4).contains(&number);
            if is_league_points {
                league_points.get_or_insert(number);
            } else {
                division = Division::new(number as u8).ok();
            }
            continue;
        }
        // Roman numerals are only converted on the division token, never
        // inside tier words, and apex tiers take no division at all.
        if !tier.is_apex() && division.is_none() {
            if let Some(value) = roman_division(token) {
                division = Division::new(value).ok();
                continue;
            }
        }
        // Anything else is trailing site chrome; ignore it.
    }

    if tier.has_divisions() && division.is_none() {
        warn!(
            rank = %text.trim(),
            tier = %tier,
            "rank text carries no division; scoring with the tier average"
        );
    }

    Ok(Rank::new(tier, division, league_points.unwrap_or(0)))
}

/// Identify the tier from the leading token(s); two-word tiers such as
/// "Grand Master" are tried first.
fn match_tier(
    tokens: &[&str],
    table: &RankTable,
) -> Result<(Tier, Option<Division>, usize)> {
    if tokens.len() >= 2 {
        let joined = format!("{} {}", tokens[0], tokens[1]);
        if let Some((tier, division)) = table.lookup(&joined) {
            return Ok((tier, division, 2));
        }
    }
    if let Some((tier, division)) = table.lookup(tokens[0]) {
        return Ok((tier, division, 1));
    }
    Err(DraftError::UnknownRankToken {
        token: tokens[0].to_string(),
    })
}

fn roman_division(token: &str) -> Option<u8> {
    match token {
        "i" => Some(1),
        "ii" => Some(2),
        "iii" => Some(3),
        "iv" => Some(4),
        _ => None,
    }
}

/// Lowercase, drop "Ranked Flex" annotations and everything after them,
/// replace punctuation with spaces, and collapse whitespace.
fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let truncated = match lower.find("ranked flex") {
        Some(pos) => &lower[..pos],
        None => lower.as_str(),
    };
    let cleaned: String = truncated
        .chars()
        .map(|c| {
            if matches!(c, '.' | ',' | ';' | ':' | '!' | '(' | ')' | '|') {
                ' '
            } else {
                c
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
