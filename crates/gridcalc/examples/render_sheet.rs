//! Build a small sheet of formulas and print how each cell displays
//!
//! Run with: cargo run --example render_sheet

use gridcalc::prelude::*;

fn main() -> FormulaResult<()> {
    env_logger::init();

    let mut sheet = Sheet::new(4, 4);

    // Prices and quantities
    sheet.insert(CellAddress::parse("0;0")?, 12)?;
    sheet.insert(CellAddress::parse("0;1")?, 3)?;
    sheet.insert(CellAddress::parse("1;0")?, 8)?;
    sheet.insert(CellAddress::parse("1;1")?, 5)?;

    // Line totals
    for row in 0..2 {
        let total = BinaryFunction::new(
            "MUL",
            Reference::new(CellAddress::new(row, 0)).into(),
            Reference::new(CellAddress::new(row, 1)).into(),
        )?;
        sheet.insert(CellAddress::new(row, 2), total)?;
    }

    // Grand total and average line
    let grand = BinaryFunction::new(
        "ADD",
        Reference::new(CellAddress::new(0, 2)).into(),
        Reference::new(CellAddress::new(1, 2)).into(),
    )?;
    sheet.insert(CellAddress::new(2, 2), grand)?;
    let average = IntervalFunction::new("AVERAGE", CellRange::parse("0;2:1;2")?)?;
    sheet.insert(CellAddress::new(3, 2), average)?;

    let report = sheet.display_cells(&DisplayOptions::default());
    for cell in &report.cells {
        println!("{}", cell);
    }
    println!(
        "{} cells, {} formulas, {} errors",
        report.stats.cells_rendered, report.stats.formula_cells, report.stats.errors
    );

    Ok(())
}
