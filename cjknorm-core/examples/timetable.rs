//! Normalize a mixed Japanese/Chinese route description.
//!
//! Full-width Latin letters and digits become half-width, CJK brackets become
//! ASCII brackets, and ASCII sentence punctuation becomes its CJK form.
//!
//! Run with: cargo run --example timetable

use cjknorm_core::{convert, split_sentences, CharMap, Map, SkipSet, FH_ASCII};

fn main() -> cjknorm_core::Result<()> {
    let text = "成田空港—【ＪＲ特急成田エクスプレス号・横浜行，2站】—東京—【ＪＲ新幹線はやぶさ号・新青森行,6站 】—新青森—【ＪＲ特急スーパー白鳥号・函館行，4站 】—函館";

    let cjk = CharMap::new(
        "cjk_punctuation",
        [
            ("【", "["),
            ("】", "]"),
            (",", "，"),
            (".", "。"),
            ("?", "？"),
            ("!", "！"),
        ],
    )?;

    let converted = convert(text, &[FH_ASCII, Map::from(&cjk)], None)?;
    println!("{converted}");

    // Keep CJK punctuation exactly as written.
    let skip = SkipSet::from("，。？！“”");
    let preserved = convert(text, &[FH_ASCII, Map::from(&cjk)], Some(&skip))?;
    println!("{preserved}");

    for sentence in split_sentences("乗り換えは東京です。次は新青森！Enjoy the trip. ") {
        if !sentence.is_empty() {
            println!("- {sentence}");
        }
    }

    Ok(())
}
