//! Tests for merged-grid table generation

use pretty_assertions::assert_eq;

use super::cell::LatexCell;
use super::generator::{LatexRow, LatexTableGenerator};
use super::layout::GridLayout;
use super::row::render_row;
use super::rule::{plan_rules, rules_to_latex, LatexHLine};
use crate::core::grid::CellGrid;
use crate::core::merge::{resolve_regions, MergeRegion};
use crate::core::range::{column_letters, parse_range};
use crate::core::render::render_tabular;
use crate::core::value::CellValue;

fn letters(row: usize, col: usize) -> CellValue {
    CellValue::Text(format!("{}{}", column_letters(col), row))
}

fn merges(ranges: &[&str]) -> Vec<MergeRegion> {
    ranges
        .iter()
        .map(|r| MergeRegion::from_range(r).unwrap())
        .collect()
}

fn tabular(range: &str, merge_ranges: &[&str], borders: bool) -> String {
    let rect = parse_range(range).unwrap();
    render_tabular(&letters, &merges(merge_ranges), &rect, borders).unwrap()
}

/// Run `f` against the layout of `range` with the given merges
fn with_layout<T>(range: &str, merge_ranges: &[&str], f: impl FnOnce(&GridLayout<'_>) -> T) -> T {
    let rect = parse_range(range).unwrap();
    let merges = merges(merge_ranges);
    let regions = resolve_regions(&merges, &rect, &letters);
    let grid = CellGrid::classify(&rect, &regions).unwrap();
    let layout = GridLayout::new(&rect, &grid, &regions);
    f(&layout)
}

#[test]
fn test_no_merges() {
    let latex = tabular("A1:C3", &[], true);
    let expected = concat!(
        "\\begin{tabular}{|c|c|c|}\n",
        "\\hline\n",
        "  A1 & B1 & C1 \\\\\n",
        "\\hline\n",
        "  A2 & B2 & C2 \\\\\n",
        "\\hline\n",
        "  A3 & B3 & C3 \\\\\n",
        "\\hline\n",
        "\\end{tabular}",
    );
    assert_eq!(latex, expected);
}

#[test]
fn test_no_merges_token_count_matches_columns() {
    with_layout("B2:F4", &[], |layout| {
        for r in 0..layout.num_rows() {
            let cells = render_row(layout, r, &letters).unwrap();
            assert_eq!(cells.len(), 5);
            assert!(cells.iter().all(|c| c.rowspan == 1 && c.colspan == 1));
            assert_eq!(plan_rules(layout, r).unwrap(), vec![LatexHLine::full()]);
        }
    });
}

#[test]
fn test_single_2x2_merge() {
    let latex = tabular("A1:C3", &["A1:B2"], true);
    let expected = concat!(
        "\\begin{tabular}{|c|c|c|}\n",
        "\\hline\n",
        "  \\multicolumn{2}{|c|}{\\multirow{2}{*}{A1}} & C1 \\\\\n",
        "\\cline{3-3}\n",
        "  \\multicolumn{2}{|c|}{} & C2 \\\\\n",
        "\\hline\n",
        "  A3 & B3 & C3 \\\\\n",
        "\\hline\n",
        "\\end{tabular}",
    );
    assert_eq!(latex, expected);
}

#[test]
fn test_single_2x2_merge_tokens() {
    with_layout("A1:C3", &["A1:B2"], |layout| {
        let first = render_row(layout, 0, &letters).unwrap();
        assert_eq!(first[0], LatexCell::with_spans("A1".to_string(), 2, 2));
        assert_eq!(first.len(), 2);

        // The row below gets exactly one empty column-span token for the merge
        let second = render_row(layout, 1, &letters).unwrap();
        assert_eq!(second[0], LatexCell::empty_span(2));
        assert_eq!(second[0].content, "");
        assert_eq!(second[1], LatexCell::new("C2".to_string()));

        // No full rule and no cline over the merged columns
        assert_eq!(plan_rules(layout, 0).unwrap(), vec![LatexHLine::partial(3, 3)]);
    });
}

#[test]
fn test_merge_clipped_on_top_edge() {
    // B1:B4 viewed through A3:C5: rowspan min(4, 5) - 3 + 1 = 2
    let latex = tabular("A3:C5", &["B1:B4"], true);
    let expected = concat!(
        "\\begin{tabular}{|c|c|c|}\n",
        "\\hline\n",
        "  A3 & \\multirow{2}{*}{B1} & C3 \\\\\n",
        "\\cline{1-1} \\cline{3-3}\n",
        "  A4 &  & C4 \\\\\n",
        "\\hline\n",
        "  A5 & B5 & C5 \\\\\n",
        "\\hline\n",
        "\\end{tabular}",
    );
    assert_eq!(latex, expected);
}

#[test]
fn test_merge_clipped_on_left_edge() {
    let latex = tabular("B1:D2", &["A1:C2"], true);
    assert!(latex.contains("  \\multicolumn{2}{|c|}{\\multirow{2}{*}{A1}} & D1 \\\\\n\\cline{3-3}\n"));
    assert!(latex.contains("  \\multicolumn{2}{|c|}{} & D2 \\\\\n"));
}

#[test]
fn test_merge_extends_below_selection() {
    let latex = tabular("A1:B3", &["A2:A9"], true);
    let expected = concat!(
        "\\begin{tabular}{|c|c|}\n",
        "\\hline\n",
        "  A1 & B1 \\\\\n",
        "\\hline\n",
        "  \\multirow{2}{*}{A2} & B2 \\\\\n",
        "\\cline{2-2}\n",
        "   & B3 \\\\\n",
        "\\hline\n",
        "\\end{tabular}",
    );
    assert_eq!(latex, expected);
}

#[test]
fn test_horizontal_merge_keeps_full_rule() {
    let latex = tabular("A1:C2", &["A1:C1"], true);
    assert!(latex.contains("  \\multicolumn{3}{|c|}{A1} \\\\\n\\hline\n  A2 & B2 & C2"));
}

#[test]
fn test_multiple_clines_in_one_boundary() {
    with_layout("A1:E3", &["B1:B2", "D1:D2"], |layout| {
        assert_eq!(
            plan_rules(layout, 0).unwrap(),
            vec![
                LatexHLine::partial(1, 1),
                LatexHLine::partial(3, 3),
                LatexHLine::partial(5, 5),
            ]
        );
        assert_eq!(plan_rules(layout, 1).unwrap(), vec![LatexHLine::full()]);
    });
    let latex = tabular("A1:E3", &["B1:B2", "D1:D2"], true);
    assert!(latex.contains("\\cline{1-1} \\cline{3-3} \\cline{5-5}\n  A2 &  & C2 &  & E2 \\\\"));
}

#[test]
fn test_fully_covered_boundary_has_no_rule() {
    let latex = tabular("A1:B2", &["A1:B2"], true);
    let expected = concat!(
        "\\begin{tabular}{|c|c|}\n",
        "\\hline\n",
        "  \\multicolumn{2}{|c|}{\\multirow{2}{*}{A1}} \\\\\n",
        "  \\multicolumn{2}{|c|}{} \\\\\n",
        "\\hline\n",
        "\\end{tabular}",
    );
    assert_eq!(latex, expected);
}

#[test]
fn test_continuation_in_anchor_row_does_not_extend_rule() {
    // The merge starts on row 2, so the boundary above it is a full rule
    with_layout("A1:C3", &["A2:C3"], |layout| {
        assert_eq!(plan_rules(layout, 0).unwrap(), vec![LatexHLine::full()]);
        assert_eq!(plan_rules(layout, 1).unwrap(), Vec::<LatexHLine>::new());
        assert_eq!(plan_rules(layout, 2).unwrap(), vec![LatexHLine::full()]);
    });
}

#[test]
fn test_unbordered_spans() {
    let latex = tabular("A1:C2", &["A1:B2"], false);
    assert!(latex.starts_with("\\begin{tabular}{ccc}\n  \\multicolumn{2}{c}{\\multirow{2}{*}{A1}}"));
    assert!(latex.contains("  \\multicolumn{2}{c}{} & C2 \\\\\n"));
}

#[test]
fn test_cell_values_are_escaped() {
    let rect = parse_range("A1:B1").unwrap();
    let cells = |_: usize, col: usize| {
        if col == 1 {
            CellValue::text("50% off")
        } else {
            CellValue::Number(3.0)
        }
    };
    let latex = render_tabular(&cells, &[], &rect, true).unwrap();
    assert!(latex.contains("  50\\% off & 3 \\\\"));
}

/// Assert every row of every sub-rectangle of `A1:H8` covers all columns
fn assert_row_widths(sheet_merges: &[&str]) {
    for min_row in 1..=8 {
        for max_row in min_row..=8 {
            for min_col in 1..=8 {
                for max_col in min_col..=8 {
                    let range = format!(
                        "{}{}:{}{}",
                        column_letters(min_col),
                        min_row,
                        column_letters(max_col),
                        max_row
                    );
                    with_layout(&range, sheet_merges, |layout| {
                        for r in 0..layout.num_rows() {
                            let row = LatexRow::new(render_row(layout, r, &letters).unwrap(), Vec::new());
                            assert_eq!(row.width(), layout.num_cols(), "row {} of {}", r, range);
                        }
                    });
                }
            }
        }
    }
}

#[test]
fn test_row_widths_match_column_count() {
    assert_row_widths(&[
        "A1:B2", "C1:E1", "F1:F4", "G2:H3", "A3:A6", "B4:D5", "E6:H6", "B7:C8", "E8:H8",
    ]);
}

#[test]
fn test_row_widths_with_overlapping_merges() {
    assert_row_widths(&[
        "A1:B2", "B2:C3", "A1:C1", "B1:B3", "C3:F5", "D4:E8", "A6:H6", "G1:G8", "F7:H8",
    ]);
}

#[test]
fn test_overlapping_merge_output() {
    // B2:C3 overlaps A1:B2 and is ignored; B3 and C2 render as plain cells
    let latex = tabular("A1:C3", &["A1:B2", "B2:C3"], true);
    let expected = concat!(
        "\\begin{tabular}{|c|c|c|}\n",
        "\\hline\n",
        "  \\multicolumn{2}{|c|}{\\multirow{2}{*}{A1}} & C1 \\\\\n",
        "\\cline{3-3}\n",
        "  \\multicolumn{2}{|c|}{} & C2 \\\\\n",
        "\\hline\n",
        "  A3 & B3 & C3 \\\\\n",
        "\\hline\n",
        "\\end{tabular}",
    );
    assert_eq!(latex, expected);
    assert_eq!(latex, tabular("A1:C3", &["A1:B2"], true));
}

#[test]
fn test_origin_fallback_never_needed() {
    // Overlapping and edge-clipped merges must still resolve every origin
    let sheet_merges = ["A1:C3", "B2:D4", "C1:C6", "A5:F5", "E2:F3", "D4:E6"];
    for min_row in 1..=6 {
        for min_col in 1..=6 {
            for (max_row, max_col) in [(min_row, min_col), (6, 6), (min_row + 1, 6), (6, min_col)] {
                if max_row > 6 {
                    continue;
                }
                let range = format!(
                    "{}{}:{}{}",
                    column_letters(min_col),
                    min_row,
                    column_letters(max_col),
                    max_row
                );
                let rect = parse_range(&range).unwrap();
                let result = render_tabular(&letters, &merges(&sheet_merges), &rect, true);
                assert!(result.is_ok(), "{}: {:?}", range, result.err());
            }
        }
    }
}

#[test]
fn test_generator_column_spec() {
    let generator = LatexTableGenerator::new(4, true);
    assert!(generator.generate_latex().starts_with("\\begin{tabular}{|c|c|c|c|}\n\\hline\n"));

    let generator = LatexTableGenerator::new(2, false);
    assert_eq!(generator.generate_latex(), "\\begin{tabular}{cc}\n\\end{tabular}");
}

#[test]
fn test_cell_to_latex() {
    assert_eq!(LatexCell::new("x".to_string()).to_latex(true), "x");
    assert_eq!(
        LatexCell::with_spans("x".to_string(), 3, 1).to_latex(true),
        "\\multirow{3}{*}{x}"
    );
    assert_eq!(
        LatexCell::with_spans("x".to_string(), 1, 2).to_latex(true),
        "\\multicolumn{2}{|c|}{x}"
    );
    assert_eq!(LatexCell::empty_span(1).to_latex(true), "");
    assert_eq!(LatexCell::empty_span(3).to_latex(false), "\\multicolumn{3}{c}{}");
}

#[test]
fn test_hline_to_latex() {
    assert_eq!(LatexHLine::full().to_latex(), "\\hline");
    assert_eq!(LatexHLine::partial(2, 3).to_latex(), "\\cline{2-3}");
    assert_eq!(
        rules_to_latex(&[LatexHLine::partial(1, 1), LatexHLine::partial(4, 5)]),
        "\\cline{1-1} \\cline{4-5}"
    );
    assert_eq!(rules_to_latex(&[]), "");
}
