//! Chance commands: DECIDE, FLIP, TRY.

use super::Invocation;
use super::args::leading_probability;
use crate::engine::RandomEngine;
use crate::error::CommandResult;

/// `decide`
pub fn decide(engine: &mut RandomEngine, _inv: &Invocation) -> CommandResult {
    let answer = if engine.boolean()? {
        "Of course!"
    } else {
        "Absolutely not!"
    };
    Ok(answer.to_string())
}

/// `flip`
pub fn flip(engine: &mut RandomEngine, _inv: &Invocation) -> CommandResult {
    let side = if engine.boolean()? { "Heads." } else { "Tails." };
    Ok(side.to_string())
}

/// `try [probability] <action...>`
///
/// Succeeds when a uniform draw from `[0, 1]` is at most the probability
/// (default 0.5).
pub fn attempt(engine: &mut RandomEngine, inv: &Invocation) -> CommandResult {
    let (probability, action) = leading_probability(&inv.args);
    let roll = engine.real(0.0, 1.0)?;
    let outcome = if roll <= probability {
        "Success"
    } else {
        "Failure"
    };
    // `{:.2}` alone rounds binary ties to even; halves round up here.
    let shown = (probability * 100.0).round() / 100.0;
    Ok(format!("{} p({shown:.2}): {outcome}", action.join(" ")))
}
