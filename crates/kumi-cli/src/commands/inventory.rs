use anyhow::bail;
use kumi_core::Entry;
use kumi_core::level::display_level;
use kumi_core::responses::{InventoryResponse, InventoryRow, TargetComponents};
use kumi_engine::{Inventory, Unlock, component_inventory};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InventoryArgs;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `kumi inventory`.
pub fn handle(args: &InventoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let component = args.component.trim();
    if component.is_empty() {
        bail!("inventory needs a non-blank component");
    }
    let targets = ctx.selection()?;
    let inventory = component_inventory(&ctx.corpus, &targets)?;
    let unlock = inventory.with_component(&ctx.corpus, component);

    let response = to_response(inventory, unlock);
    output_rows(&response, &response.buildable, flags.format)
}

fn to_response(inventory: Inventory, unlock: Unlock<'_>) -> InventoryResponse {
    InventoryResponse {
        targets: inventory
            .per_target
            .into_iter()
            .map(|(target, components)| TargetComponents {
                target,
                components: components.into_vec(),
            })
            .collect(),
        all_components: inventory.all.into_vec(),
        new_component: unlock.new_component,
        allowed: unlock.allowed.into_vec(),
        buildable: unlock.buildable.into_iter().map(to_row).collect(),
    }
}

fn to_row(entry: &Entry) -> InventoryRow {
    InventoryRow {
        symbol: entry.symbol.clone(),
        label: entry.primary_label().to_string(),
        level: display_level(&entry.level).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use kumi_core::{Corpus, Entry};
    use kumi_engine::component_inventory;
    use pretty_assertions::assert_eq;

    use super::to_response;

    #[test]
    fn response_lists_targets_and_unlocked_rows() {
        let corpus = Corpus::from_entries([
            Entry::primitive("日").with_labels(["day"]),
            Entry::primitive("十").with_labels(["ten"]),
            Entry::new("早", ["日", "十"]).with_labels(["early"]),
        ]);
        let inventory = component_inventory(&corpus, &["日"]).expect("日 is in the corpus");
        let unlock = inventory.with_component(&corpus, "十");
        let response = to_response(inventory, unlock);

        assert_eq!(response.targets[0].target, "日");
        assert_eq!(response.targets[0].components, vec!["日"]);
        assert_eq!(response.all_components, vec!["日"]);
        assert_eq!(response.allowed, vec!["日", "十"]);
        let symbols: Vec<&str> = response.buildable.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["日", "十", "早"]);
        assert_eq!(response.buildable[2].label, "early");
        assert_eq!(response.buildable[2].level, "None");
    }
}
