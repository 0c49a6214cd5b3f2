//! One-shot rank parsing, mostly useful for eyeballing scraped text.

use crate::error::Result;
use crate::rank::{parse_rank, RankTable};

pub fn handle_parse_rank(text: &str, as_json: bool) -> Result<()> {
    let table = RankTable::default();
    let rank = parse_rank(text, &table)?;
    let score = table.score(&rank);

    if as_json {
        let out = serde_json::json!({
            "rank": rank,
            "canonical": rank.to_string(),
            "score": score.as_f64(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{rank} (score {score})");
    }
    Ok(())
}
