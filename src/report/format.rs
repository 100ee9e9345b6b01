//! Human- and simulator-facing output formatting.

use std::fmt::Write;

use crate::domain::{CauerLadder, FosterLadder};

/// SPICE `.param` lines for every Cauer component, in extraction order.
///
/// The `{}` float formatting round-trips exactly, so a simulator deck built
/// from these lines sees the same values the synthesis produced.
pub fn format_cauer_params(ladder: &CauerLadder) -> String {
    let mut out = String::new();
    for (label, value) in ladder.labeled() {
        let _ = writeln!(out, ".param {label} = {value}");
    }
    out
}

/// Fitted Foster branches plus fit quality, one branch per line.
pub fn format_foster(ladder: &FosterLadder, rmse: f64) -> String {
    let mut out = String::new();
    for (i, b) in ladder.branches().iter().enumerate() {
        let _ = writeln!(
            out,
            "branch {}: R = {:.6e}, C = {:.6e}, tau = {:.6e}",
            i + 1,
            b.r,
            b.c,
            b.tau()
        );
    }
    let _ = writeln!(out, "fit RMSE: {rmse:.6e}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CauerStage, FosterBranch};

    #[test]
    fn param_lines_cover_all_components_in_order() {
        let ladder = CauerLadder::new(vec![
            CauerStage { c: 0.25, r: 1.5 },
            CauerStage { c: 2.0, r: 0.5 },
        ]);
        let text = format_cauer_params(&ladder);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                ".param C1 = 0.25",
                ".param R1 = 1.5",
                ".param C2 = 2",
                ".param R2 = 0.5",
            ]
        );
    }

    #[test]
    fn foster_report_lists_each_branch() {
        let ladder = FosterLadder::new(vec![
            FosterBranch { r: 1.0, c: 0.1 },
            FosterBranch { r: 0.5, c: 2.0 },
        ]);
        let text = format_foster(&ladder, 1.25e-4);
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("branch 1"));
        assert!(text.contains("fit RMSE: 1.250000e-4"));
    }
}
