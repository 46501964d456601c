//! Text rendering of a generation run: blueprint cards followed by one
//! reel per remixed prompt.

use crate::dna::{BlueprintEntry, RemixResult};
use crate::lab::GenerationRun;
use crate::utilities::printer::{ColoredText, Printer, PrinterColor};

/// Blueprint cards are laid out in rows of this many entries.
pub const CARDS_PER_ROW: usize = 5;

/// Render blueprint entries as `Label: value` lines, a blank line between
/// rows.
pub fn blueprint_cards(entries: &[BlueprintEntry], printer: &Printer) -> String {
    entries
        .chunks(CARDS_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|entry| {
                    printer.line(&[
                        ColoredText::new(format!("{}: ", entry.label), PrinterColor::BoldMagenta),
                        ColoredText::new(entry.value.as_str(), PrinterColor::White),
                    ])
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render one reel per result, numbered from 1.
pub fn scene_reels(results: &[RemixResult], printer: &Printer) -> String {
    results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            [
                printer.paint(&format!("Scene {}", index + 1), PrinterColor::BoldCyan),
                printer.line(&[
                    ColoredText::new("DNA Blend ", PrinterColor::Yellow),
                    ColoredText::new(result.injected_tropes.join(" • "), PrinterColor::Magenta),
                ]),
                format!("Original: {}", result.original),
                format!("Adapted: {}", result.adapted),
            ]
            .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Full report of a run: header, blueprint cards and scene reels.
pub fn run_report(run: &GenerationRun, printer: &Printer) -> String {
    let header = printer.line(&[
        ColoredText::new("Blueprint stamped: ", PrinterColor::BoldYellow),
        ColoredText::new(
            run.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            PrinterColor::White,
        ),
        ColoredText::new(format!("  {}", run.blueprint.slogan), PrinterColor::BoldMagenta),
    ]);
    format!(
        "{}\n\n{}\n\n{}\n",
        header,
        blueprint_cards(&run.summary(), printer),
        scene_reels(&run.results, printer)
    )
}
