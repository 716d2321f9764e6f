use crate::OutputFormatter;
use ercheck_engine::types::Report;

const CHECK: &str = "\u{2713}";
const CROSS: &str = "x";

pub struct HumanFormatter;

fn mark(satisfied: bool) -> &'static str {
    if satisfied {
        CHECK
    } else {
        CROSS
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_report(&self, report: &Report) -> String {
        let mut out = String::new();

        out.push_str(&format!("== {} functions ==\n", report.standard));
        for m in &report.functions {
            out.push_str(&format!(
                "[{}] {}\n",
                mark(m.is_satisfied()),
                m.expected.format_inline(true),
            ));
        }

        out.push_str(&format!("\n== {} events ==\n", report.standard));
        for m in &report.events {
            out.push_str(&format!(
                "[{}] {}\n",
                mark(m.is_satisfied()),
                m.expected.format_inline(false),
            ));
        }
        // Emission obligations, one line per traced function
        for e in &report.emissions {
            out.push_str(&format!(
                "[{}] {} must emit {}\n",
                mark(e.satisfied),
                e.function.name,
                e.event.format_inline(false),
            ));
        }

        out.push_str(&format!("\n== {} modifiers ==\n", report.standard));
        if report.modifiers.is_empty() {
            out.push_str(&format!(
                "[{}] No custom modifiers in {} functions\n",
                CHECK, report.standard,
            ));
        } else {
            for m in &report.modifiers {
                out.push_str(&format!(
                    "[{}] {} modified by {}\n",
                    CROSS,
                    m.function.name,
                    m.modifiers.join(", "),
                ));
            }
        }

        out.push_str(&format!("\n== {} getters ==\n", report.standard));
        for g in &report.getters {
            out.push_str(&format!(
                "[{}] {}\n",
                mark(g.satisfied),
                g.getter.format_inline(true),
            ));
        }

        if report.is_conformant() {
            out.push_str(&format!(
                "\n{} conforms to {}\n",
                report.contract, report.standard,
            ));
        } else {
            out.push_str(&format!(
                "\n{} does not conform to {}: {} rule(s) unsatisfied\n",
                report.contract,
                report.standard,
                report.unsatisfied_count(),
            ));
        }

        out
    }
}
