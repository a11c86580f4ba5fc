use crate::core::{Area, CalculationResult, Score};
use crate::formatting::{format_money, format_payback, format_percent};
use crate::io::output::OutputWriter;
use crate::optimization::OptimizationResult;
use crate::project::Project;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_summary(&mut self, results: &CalculationResult) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Area | Score | Level | Status |")?;
        writeln!(self.writer, "|------|-------|-------|--------|")?;

        for area in Area::ALL {
            let (score, viable, evaluated) = results.area_score(area);
            let status = match (evaluated, viable) {
                (false, _) => "Not evaluated",
                (true, true) => "✅ Viable",
                (true, false) => "❌ Not viable",
            };
            self.write_row(area.label(), score, results.area_level(area).label(), status)?;
        }
        let overall = &results.overall;
        self.write_row(
            "**Overall**",
            overall.score,
            overall.level.label(),
            if overall.viable { "✅ Viable" } else { "❌ Not viable" },
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_row(
        &mut self,
        area: &str,
        score: Score,
        level: &str,
        status: &str,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "| {area} | {score} | {level} | {status} |")?;
        Ok(())
    }

    fn write_financial(&mut self, results: &CalculationResult) -> anyhow::Result<()> {
        let f = &results.financial;
        writeln!(self.writer, "## Financial Metrics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Investment | {} |", format_money(f.investment))?;
        writeln!(self.writer, "| Projected revenue | {} |", format_money(f.projected_revenue))?;
        writeln!(self.writer, "| Operational costs | {} |", format_money(f.operational_costs))?;
        writeln!(self.writer, "| Annual cash flow | {} |", format_money(f.annual_cash_flow))?;
        writeln!(self.writer, "| Discount rate | {:.2}% |", f.discount_rate)?;
        writeln!(self.writer, "| Period | {} years |", f.period)?;
        writeln!(self.writer, "| NPV | {} |", format_money(f.npv))?;
        writeln!(self.writer, "| IRR | {} |", format_percent(f.irr))?;
        writeln!(self.writer, "| Payback | {} |", format_payback(f.payback))?;
        if let Some(index) = f.profitability_index {
            writeln!(self.writer, "| Profitability index | {index:.2} |")?;
        }
        writeln!(self.writer)?;

        if !f.cash_flows.is_empty() {
            writeln!(self.writer, "### Cash Flow Schedule")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Year | Cash flow | Discounted | Cumulative |")?;
            writeln!(self.writer, "|------|-----------|------------|------------|")?;
            for entry in &f.cash_flows {
                writeln!(
                    self.writer,
                    "| {} | {} | {} | {} |",
                    entry.year,
                    format_money(entry.cash_flow),
                    format_money(entry.discounted),
                    format_money(entry.cumulative)
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_market(&mut self, results: &CalculationResult) -> anyhow::Result<()> {
        if !results.market.evaluated {
            return Ok(());
        }
        let insights = &results.market.detailed_analysis.insights;
        writeln!(self.writer, "## Market")?;
        writeln!(self.writer)?;
        for (title, items) in [
            ("Strengths", &insights.strengths),
            ("Weaknesses", &insights.weaknesses),
        ] {
            if items.is_empty() {
                continue;
            }
            writeln!(self.writer, "**{title}**")?;
            writeln!(self.writer)?;
            for item in items {
                writeln!(self.writer, "- {item}")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_suggestions(&mut self, results: &CalculationResult) -> anyhow::Result<()> {
        if results.suggestions.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Suggestions")?;
        writeln!(self.writer)?;
        for suggestion in &results.suggestions {
            writeln!(
                self.writer,
                "- **{}** ({}): {}",
                suggestion.area, suggestion.severity, suggestion.message
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &CalculationResult) -> anyhow::Result<()> {
        writeln!(self.writer, "# Feasibility Report")?;
        writeln!(self.writer)?;
        self.write_summary(results)?;
        self.write_financial(results)?;
        self.write_market(results)?;
        self.write_suggestions(results)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_optimization(&mut self, result: &OptimizationResult) -> anyhow::Result<()> {
        writeln!(self.writer, "# Optimization Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| | Before | After |")?;
        writeln!(self.writer, "|---|--------|-------|")?;
        writeln!(
            self.writer,
            "| Score | {} | {} |",
            result.original_score, result.projected_score
        )?;
        writeln!(
            self.writer,
            "| Viable | {} | {} |",
            yes_no(result.original_viability),
            yes_no(result.projected_viability)
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Issues resolved: {} of {}",
            result.issues_resolved,
            result.issues.len()
        )?;
        writeln!(self.writer)?;

        for recommendation in &result.recommendations {
            writeln!(
                self.writer,
                "## {} ({})",
                recommendation.issue, recommendation.area
            )?;
            writeln!(self.writer)?;
            writeln!(self.writer, "- Severity: {}", recommendation.severity)?;
            writeln!(self.writer, "- Action: {}", recommendation.action)?;
            writeln!(self.writer, "- Impact: {}", recommendation.impact)?;
            if !recommendation.adjustments.is_empty() {
                writeln!(self.writer)?;
                writeln!(self.writer, "| Path | Before | After |")?;
                writeln!(self.writer, "|------|--------|-------|")?;
                for adjustment in &recommendation.adjustments {
                    writeln!(
                        self.writer,
                        "| `{}` | {} | {} |",
                        adjustment.path, adjustment.before, adjustment.after
                    )?;
                }
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_project(&mut self, project: &Project) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", project.name)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Id: `{}`", project.id)?;
        writeln!(
            self.writer,
            "- Created: {}",
            project.creation_date.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "- Status: {}", project.status)?;
        writeln!(self.writer)?;
        self.write_summary(&project.calculations)?;
        self.write_financial(&project.calculations)?;
        self.write_suggestions(&project.calculations)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_project_list(&mut self, projects: &[Project]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Projects")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Id | Name | Created | Score | Viable |")?;
        writeln!(self.writer, "|----|------|---------|-------|--------|")?;
        for project in projects {
            writeln!(
                self.writer,
                "| `{}` | {} | {} | {} | {} |",
                project.id,
                project.name,
                project.creation_date.format("%Y-%m-%d"),
                project.calculations.overall.score,
                yes_no(project.calculations.overall.viable)
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
