//! Choice commands: SHUFFLE, PICK, MAGIC8.

use super::Invocation;
use super::args::leading_count;
use crate::engine::RandomEngine;
use crate::error::CommandResult;

/// Canned answers for MAGIC8.
pub const MAGIC8_RESPONSES: [&str; 20] = [
    "It is certain",
    "It is decidedly so",
    "Without a doubt",
    "Yes, definitely",
    "You may rely on it",
    "As I see it, yes",
    "Most likely",
    "Outlook good",
    "Yes",
    "Signs point to yes",
    "Reply hazy try again",
    "Ask again later",
    "Better not tell you now",
    "Cannot predict now",
    "Concentrate and ask again",
    "Don't count on it",
    "My reply is no",
    "My sources say no",
    "Outlook not so good",
    "Very doubtful",
];

/// `shuffle <items...>`
///
/// Replies with the input followed by a random ordering of it.
pub fn shuffle(engine: &mut RandomEngine, inv: &Invocation) -> CommandResult {
    let shuffled = engine.permute(&inv.args)?;
    Ok(format!(
        "shuffling: {}...\n\n{}",
        inv.args.join(", "),
        shuffled.join(", ")
    ))
}

/// `pick [count] <items...>`
///
/// Samples `count` items (default 1) without replacement. Fails with
/// `InvalidArgument` when fewer than `count` items are given.
pub fn pick(engine: &mut RandomEngine, inv: &Invocation) -> CommandResult {
    let (count, items) = leading_count(&inv.args);
    let picked = engine.sample(items, count)?;
    Ok(format!(
        "picking {count} items from: {}...\n\n{}",
        items.join(", "),
        picked.join(", ")
    ))
}

/// `magic8`
pub fn magic8(engine: &mut RandomEngine, _inv: &Invocation) -> CommandResult {
    let answer = engine.sample(&MAGIC8_RESPONSES, 1)?;
    Ok(format!("The spirits say.... {}", answer.concat()))
}
