use kumi_core::Entry;
use kumi_core::report::{IntroductionRecord, ScheduleRow, SuggestionRow};
use kumi_core::responses::{
    BuildableResponse, InventoryResponse, ScheduleResponse, SuggestionsResponse,
};
use schemars::{Schema, schema_for};

use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::cli::{GlobalFlags, OutputFormat};

/// Handle `kumi schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_of(args.type_name);
    let rendered = match flags.format {
        OutputFormat::Raw => serde_json::to_string(&schema)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(&schema)?,
    };
    println!("{rendered}");
    Ok(())
}

fn schema_of(type_name: SchemaType) -> Schema {
    match type_name {
        SchemaType::Entry => schema_for!(Entry),
        SchemaType::ScheduleRow => schema_for!(ScheduleRow),
        SchemaType::IntroductionRecord => schema_for!(IntroductionRecord),
        SchemaType::SuggestionRow => schema_for!(SuggestionRow),
        SchemaType::Buildable => schema_for!(BuildableResponse),
        SchemaType::Suggestions => schema_for!(SuggestionsResponse),
        SchemaType::Schedule => schema_for!(ScheduleResponse),
        SchemaType::Inventory => schema_for!(InventoryResponse),
    }
}

#[cfg(test)]
mod tests {
    use super::schema_of;
    use crate::cli::root_commands::SchemaType;

    #[test]
    fn schedule_row_schema_names_its_fields() {
        let schema = serde_json::to_value(schema_of(SchemaType::ScheduleRow)).expect("schema json");
        let properties = schema["properties"].as_object().expect("object schema");
        for field in ["position", "symbol", "label", "level", "weight", "introduced_by"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }
}
