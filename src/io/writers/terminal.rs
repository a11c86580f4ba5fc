use crate::core::{Area, CalculationResult, FeasibilityLevel, LevelColor, Score};
use crate::formatting::{
    format_money, format_payback, format_percent, FormattingConfig, OutputFormatter,
};
use crate::io::output::OutputWriter;
use crate::optimization::OptimizationResult;
use crate::project::Project;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";

pub struct TerminalWriter<W: Write> {
    writer: W,
    config: FormattingConfig,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            config,
            formatter: config.formatter(),
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        if self.config.emoji.should_use_emoji() {
            table.load_preset(presets::UTF8_FULL);
        } else {
            table.load_preset(presets::ASCII_FULL);
        }
        if self.config.color.should_use_color() {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    fn banner(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.formatter.header(RULE))?;
        writeln!(self.writer, "{}", self.formatter.header(title))?;
        writeln!(self.writer, "{}", self.formatter.header(RULE))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_overview(&mut self, results: &CalculationResult) -> anyhow::Result<()> {
        let mut table = self.table();
        table.set_header(vec!["Area", "Score", "Level", "Status"]);

        for area in Area::ALL {
            let (score, viable, evaluated) = results.area_score(area);
            let status = if !evaluated {
                Cell::new("not evaluated")
            } else if viable {
                Cell::new("viable").fg(Color::Green)
            } else {
                Cell::new("not viable").fg(Color::Red)
            };
            table.add_row(vec![
                Cell::new(area.label()),
                Cell::new(score.to_string()),
                level_cell(results.area_level(area)),
                status,
            ]);
        }
        writeln!(self.writer, "{table}")?;

        let overall = &results.overall;
        writeln!(
            self.writer,
            "Overall: {} ({}) {}",
            self.formatter.bold(&overall.score.to_string()),
            self.formatter.level(overall.level, overall.level.label()),
            self.formatter.verdict(overall.viable)
        )?;
        Ok(())
    }

    fn write_financial(&mut self, results: &CalculationResult) -> anyhow::Result<()> {
        let f = &results.financial;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.formatter.bold("Financial metrics"))?;

        let mut table = self.table();
        table.set_header(vec!["Metric", "Value"]);
        let npv_color = if f.npv >= 0.0 { Color::Green } else { Color::Red };
        table.add_row(vec![Cell::new("Investment"), Cell::new(format_money(f.investment))]);
        table.add_row(vec![
            Cell::new("Annual cash flow"),
            Cell::new(format_money(f.annual_cash_flow)),
        ]);
        table.add_row(vec![
            Cell::new("NPV"),
            Cell::new(format_money(f.npv)).fg(npv_color),
        ]);
        table.add_row(vec![Cell::new("IRR"), Cell::new(format_percent(f.irr))]);
        table.add_row(vec![Cell::new("Payback"), Cell::new(format_payback(f.payback))]);
        if let Some(index) = f.profitability_index {
            table.add_row(vec![
                Cell::new("Profitability index"),
                Cell::new(format!("{index:.2}")),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_suggestions(&mut self, results: &CalculationResult) -> anyhow::Result<()> {
        if results.suggestions.is_empty() {
            return Ok(());
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.emoji("💡", "[!]"),
            self.formatter.bold("Suggestions")
        )?;
        for suggestion in &results.suggestions {
            writeln!(
                self.writer,
                "  - [{}] {}: {}",
                self.formatter.severity(suggestion.severity),
                suggestion.area,
                suggestion.message
            )?;
        }
        Ok(())
    }
}

fn level_cell(level: FeasibilityLevel) -> Cell {
    let color = match level.color() {
        LevelColor::Green => Color::Green,
        LevelColor::Yellow => Color::Yellow,
        LevelColor::Red => Color::Red,
    };
    Cell::new(level.label()).fg(color)
}

fn score_change(before: Score, after: Score) -> String {
    let delta = after.value() - before.value();
    format!("{before} -> {after} ({delta:+.0})")
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &CalculationResult) -> anyhow::Result<()> {
        self.banner("           FEASIBILITY REPORT")?;
        self.write_overview(results)?;
        self.write_financial(results)?;
        self.write_suggestions(results)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_optimization(&mut self, result: &OptimizationResult) -> anyhow::Result<()> {
        self.banner("          OPTIMIZATION REPORT")?;
        writeln!(
            self.writer,
            "Score: {}",
            score_change(result.original_score, result.projected_score)
        )?;
        writeln!(
            self.writer,
            "Viability: {} -> {}",
            self.formatter.verdict(result.original_viability),
            self.formatter.verdict(result.projected_viability)
        )?;
        writeln!(
            self.writer,
            "Issues resolved: {} of {}",
            result.issues_resolved,
            result.issues.len()
        )?;

        if result.recommendations.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", self.formatter.success("No issues found"))?;
            self.writer.flush()?;
            return Ok(());
        }

        let mut table = self.table();
        table.set_header(vec!["Issue", "Area", "Severity", "Action", "Changes"]);
        for recommendation in &result.recommendations {
            table.add_row(vec![
                Cell::new(recommendation.issue.as_str()),
                Cell::new(recommendation.area.label()),
                Cell::new(recommendation.severity.to_string()),
                Cell::new(&recommendation.action),
                Cell::new(recommendation.adjustments.len()),
            ]);
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{table}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_project(&mut self, project: &Project) -> anyhow::Result<()> {
        self.banner(&format!("  {}", project.name))?;
        writeln!(
            self.writer,
            "{}",
            self.formatter.dim(&format!(
                "id {} | created {} | {}",
                project.id,
                project.creation_date.format("%Y-%m-%d %H:%M UTC"),
                project.status
            ))
        )?;
        self.write_overview(&project.calculations)?;
        self.write_financial(&project.calculations)?;
        self.write_suggestions(&project.calculations)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_project_list(&mut self, projects: &[Project]) -> anyhow::Result<()> {
        if projects.is_empty() {
            writeln!(self.writer, "No saved projects")?;
            return Ok(());
        }
        let mut table = self.table();
        table.set_header(vec!["Id", "Name", "Created", "Score", "Level"]);
        for project in projects {
            let overall = &project.calculations.overall;
            table.add_row(vec![
                Cell::new(&project.id),
                Cell::new(&project.name),
                Cell::new(project.creation_date.format("%Y-%m-%d").to_string()),
                Cell::new(overall.score.to_string()),
                level_cell(overall.level),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        self.writer.flush()?;
        Ok(())
    }
}
