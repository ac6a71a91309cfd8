use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use remap_transform::{FilterRegistry, GeneratorRegistry};

use crate::types::PrepareResult;

/// Prints a short run summary after writing to an output file.
///
/// Nothing is printed in stdout mode, where stdout carries the
/// transformed records themselves.
pub fn print_summary(result: &PrepareResult) {
    let Some(path) = &result.output else {
        return;
    };
    println!("Output: {}", path.display());
    println!("Records: {}", result.records);
    println!("Columns: {}", result.output_columns.join(", "));
}

/// Prints the registered filters and generators.
pub fn print_functions(filters: &FilterRegistry, generators: &GeneratorRegistry) {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Kind", "Description"]);
    apply_table_style(&mut table);
    for (name, filter) in filters.iter() {
        table.add_row(vec![name, "filter", filter.description]);
    }
    for (name, generator) in generators.iter() {
        table.add_row(vec![name, "generator", generator.description]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
