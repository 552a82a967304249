//!
//! The `aggregators` command.
//!

use benchmark_ledger::AggregatorRegistry;

use crate::context::Context;

///
/// Lists the aggregator presets, marking the default one.
///
pub fn run(context: &Context) -> anyhow::Result<()> {
    let registry = context.aggregators();
    for name in registry.names() {
        let aggregator = registry.get(name)?;
        let direction = if aggregator.lower_is_better() {
            "lower is better"
        } else {
            "higher is better"
        };
        let default = if name == AggregatorRegistry::DEFAULT {
            " (default)"
        } else {
            ""
        };
        println!("{name} [{}], {direction}{default}", aggregator.unit());
    }
    Ok(())
}
