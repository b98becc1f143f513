//! Search command implementation

use crate::cli::{GlobalArgs, SearchArgs};
use crate::commands::helpers::Context;
use crate::error::{AvkgError, Result};
use crate::graph::FactPattern;
use crate::ui::display;

/// Run search command
pub fn run(global: &GlobalArgs, args: SearchArgs) -> Result<()> {
    let pattern = FactPattern {
        head: args.head,
        relation: args.relation,
        tail: args.tail,
    };
    if pattern.is_empty() {
        return Err(AvkgError::EmptyQuery);
    }

    let ctx = Context::open(global)?;
    let results = if args.fuzzy {
        ctx.kg.fuzzy_search(&pattern)
    } else {
        ctx.kg.exact_search(&pattern)
    };

    display::display_facts(results);
    Ok(())
}
