use std::collections::BTreeSet;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use druglink_cli::pipeline::{OutputFile, RunReport};

/// One drug of the summary table.
#[derive(Debug, PartialEq, Eq)]
struct DrugLine<'a> {
    drug: &'a str,
    pmids: usize,
    added: Option<usize>,
    removed: Option<usize>,
}

pub fn print_summary(report: &RunReport) {
    println!("Records: {}", report.record_count);
    println!(
        "Drugs: {} ({} synonyms)",
        report.drug_count, report.synonym_count
    );

    let lines = drug_lines(report);
    if lines.is_empty() {
        println!("No drug matched any record.");
    } else {
        println!("{}", drug_table(&lines, report.is_update()));
    }

    for output in &report.outputs {
        println!("{}", output_line(output));
    }
}

/// Drugs of the new mapping in match order, then drugs that lost every PMID.
fn drug_lines(report: &RunReport) -> Vec<DrugLine<'_>> {
    let changelog = report.changelog.as_ref();
    let count = |diff: Option<&druglink_model::DiffMapping>, drug: &str| {
        diff.map(|diff| diff.get(drug).map_or(0, BTreeSet::len))
    };
    let mut lines: Vec<DrugLine<'_>> = report
        .mapping
        .iter()
        .map(|(drug, pmids)| DrugLine {
            drug,
            pmids: pmids.len(),
            added: count(changelog.map(|log| &log.added), drug),
            removed: count(changelog.map(|log| &log.removed), drug),
        })
        .collect();
    if let Some(changelog) = changelog {
        for (drug, pmids) in changelog.removed.iter() {
            if pmids.is_empty() || report.mapping.contains_key(drug) {
                continue;
            }
            lines.push(DrugLine {
                drug,
                pmids: 0,
                added: Some(0),
                removed: Some(pmids.len()),
            });
        }
    }
    lines
}

fn drug_table(lines: &[DrugLine<'_>], is_update: bool) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Drug"), header_cell("PMIDs")];
    if is_update {
        header.push(header_cell("Added"));
        header.push(header_cell("Removed"));
    }
    table.set_header(header);
    apply_summary_table_style(&mut table);
    for index in 1..table.column_count() {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_pmids = 0usize;
    let mut total_added = 0usize;
    let mut total_removed = 0usize;
    for line in lines {
        total_pmids += line.pmids;
        total_added += line.added.unwrap_or(0);
        total_removed += line.removed.unwrap_or(0);
        let mut row = vec![drug_cell(line), count_cell(Some(line.pmids), Color::Reset)];
        if is_update {
            row.push(count_cell(line.added, Color::Green));
            row.push(count_cell(line.removed, Color::Red));
        }
        table.add_row(row);
    }

    let mut total = vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_pmids).add_attribute(Attribute::Bold),
    ];
    if is_update {
        total.push(count_cell(Some(total_added), Color::Green).add_attribute(Attribute::Bold));
        total.push(count_cell(Some(total_removed), Color::Red).add_attribute(Attribute::Bold));
    }
    table.add_row(total);
    table
}

fn output_line(output: &OutputFile) -> String {
    let status = if output.written {
        String::new()
    } else {
        " (dry run, not written)".to_string()
    };
    format!(
        "{}: {} ({} rows){status}",
        output.kind.label(),
        output.path.display(),
        output.rows
    )
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn drug_cell(line: &DrugLine<'_>) -> Cell {
    if line.pmids == 0 {
        dim_cell(line.drug)
    } else {
        Cell::new(line.drug)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use druglink_core::Changelog;
    use druglink_model::MatchMapping;

    use super::*;

    fn report(mapping: MatchMapping, changelog: Option<Changelog>) -> RunReport {
        RunReport {
            record_count: 2,
            drug_count: 3,
            synonym_count: 0,
            mapping,
            changelog,
            outputs: Vec::new(),
        }
    }

    #[test]
    fn create_lines_follow_mapping_order() {
        let mapping = MatchMapping::from_iter([("midazolam", vec!["1"]), ("caffeine", vec!["1", "2"])]);
        let report = report(mapping, None);

        let lines = drug_lines(&report);

        assert_eq!(
            lines,
            vec![
                DrugLine {
                    drug: "midazolam",
                    pmids: 1,
                    added: None,
                    removed: None,
                },
                DrugLine {
                    drug: "caffeine",
                    pmids: 2,
                    added: None,
                    removed: None,
                },
            ]
        );
    }

    #[test]
    fn update_lines_include_drugs_that_lost_every_pmid() {
        let previous = MatchMapping::from_iter([("caffeine", vec!["1"]), ("warfarin", vec!["7"])]);
        let current = MatchMapping::from_iter([("caffeine", vec!["1", "2"])]);
        let changelog = Changelog::between(&previous, &current);
        let report = report(current, Some(changelog));

        let lines = drug_lines(&report);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].added, Some(1));
        assert_eq!(lines[0].removed, Some(0));
        assert_eq!(lines[1].drug, "warfarin");
        assert_eq!(lines[1].pmids, 0);
        assert_eq!(lines[1].removed, Some(1));
    }

    #[test]
    fn update_table_has_change_columns() {
        let current = MatchMapping::from_iter([("caffeine", vec!["1"])]);
        let changelog = Changelog::between(&MatchMapping::new(), &current);
        let report = report(current, Some(changelog));

        let mut table = drug_table(&drug_lines(&report), true);

        assert_eq!(table.column_count(), 4);
        let rendered = table.to_string();
        assert!(rendered.contains("caffeine"));
        assert!(rendered.contains("TOTAL"));
    }
}
